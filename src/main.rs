use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use sfquery::{Config, ValidationMode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "sfquery")]
#[command(about = "Translate Waterline criteria into Salesforce query conditions", long_about = None)]
struct Args {
    /// Directory holding sfquery.toml and .env
    #[arg(long, default_value = ".")]
    config_dir: PathBuf,

    /// Validation mode: off, lenient or strict
    #[arg(long, global = true)]
    mode: Option<ValidationMode>,

    /// Pretty-print JSON
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Translate a where clause
    Where {
        /// Collection definition JSON file
        #[arg(short, long)]
        schema: Option<PathBuf>,

        /// Clause JSON file (reads stdin if omitted)
        input: Option<PathBuf>,
    },
    /// Translate an array of sort entries
    Sort {
        /// Sort JSON file (reads stdin if omitted)
        input: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging; stdout carries the translated JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sfquery=info,sfquery_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let schema_flag = match &args.command {
        Command::Where { schema, .. } => schema.clone(),
        Command::Sort { .. } => None,
    };
    let mut config = Config::load(&args.config_dir)?;
    config.apply_flags(args.mode, args.pretty, schema_flag);
    tracing::debug!(mode = %config.mode, "Configuration loaded");

    let translator = config.translator();

    match args.command {
        Command::Where { input, .. } => {
            let schema = config.load_schema()?;
            let clause = read_input(input.as_deref())?;
            let translated = translator.translate(&clause, schema.as_ref())?;
            write_output(&translated, config.pretty)?;
        }
        Command::Sort { input } => {
            let specs = match read_input(input.as_deref())? {
                Value::Array(specs) => specs,
                other => anyhow::bail!(
                    "Sort input must be a JSON array, got {}",
                    sfquery_core::error::value_kind(&other)
                ),
            };
            let order = translator.translate_sort(&specs)?;
            write_output(&order, config.pretty)?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> anyhow::Result<Value> {
    let content = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => std::io::read_to_string(std::io::stdin())?,
    };
    Ok(serde_json::from_str(&content)?)
}

fn write_output<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}
