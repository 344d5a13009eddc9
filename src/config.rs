//! Configuration handling for the sfquery binary
//!
//! Reads the optional `sfquery.toml` file from a config directory.
//!
//! ## Environment Variables
//!
//! The following environment variables override config file settings:
//!
//! - `SFQUERY_MODE` - Validation mode (`off`, `lenient`, `strict`)
//! - `SFQUERY_SCHEMA` - Path to a collection definition JSON file
//!
//! These can be set in a `.env` file in the config directory. Variables
//! already present in the process environment win over the `.env` file.
//!
//! Relative schema paths from `sfquery.toml` and `SFQUERY_SCHEMA` are both
//! resolved against the config directory. A `--schema` flag is taken as
//! given, relative to the working directory.
//!
//! Precedence, lowest first: config file, environment, command-line flags.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

use sfquery_core::{CollectionSchema, Translator, ValidationMode};

use crate::error::{SfQueryError, SfQueryResult};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "sfquery.toml";

/// Environment variable names
pub const ENV_MODE: &str = "SFQUERY_MODE";
pub const ENV_SCHEMA: &str = "SFQUERY_SCHEMA";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// How malformed clauses are treated
    #[serde(default)]
    pub mode: ValidationMode,
    /// Collection definition used for date formatting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<PathBuf>,
    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,
}

impl Config {
    /// Load configuration from a directory
    ///
    /// This also loads any `.env` file in the directory and applies
    /// environment variable overrides.
    pub fn load(dir: &Path) -> SfQueryResult<Self> {
        let env_path = dir.join(".env");
        if env_path.exists() {
            // Values already set in the environment take precedence
            if let Err(e) = dotenvy::from_path(&env_path) {
                tracing::warn!(path = %env_path.display(), error = %e, "Failed to read .env file");
            }
        }

        let mut config = Self::from_dir(dir)?;
        config.apply_overrides(dir, |key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Read `sfquery.toml` from a directory without consulting the
    /// environment. A missing file yields the defaults.
    pub fn from_dir(dir: &Path) -> SfQueryResult<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            tracing::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.schema = config.schema.map(|schema| resolve_in(dir, schema));

        Ok(config)
    }

    /// Apply overrides from an environment lookup
    ///
    /// A relative `SFQUERY_SCHEMA` is resolved against `dir`.
    pub fn apply_overrides<F>(&mut self, dir: &Path, lookup: F) -> SfQueryResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(mode) = lookup(ENV_MODE).filter(|m| !m.is_empty()) {
            self.mode = mode.parse().map_err(SfQueryError::Config)?;
        }

        if let Some(schema) = lookup(ENV_SCHEMA).filter(|s| !s.is_empty()) {
            self.schema = Some(resolve_in(dir, PathBuf::from(schema)));
        }

        Ok(())
    }

    /// Apply command-line flags, which win over file and environment.
    ///
    /// `None` and `false` leave the loaded value in place.
    pub fn apply_flags(
        &mut self,
        mode: Option<ValidationMode>,
        pretty: bool,
        schema: Option<PathBuf>,
    ) {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if pretty {
            self.pretty = true;
        }
        if schema.is_some() {
            self.schema = schema;
        }
    }

    /// Translator for the configured mode
    pub fn translator(&self) -> Translator {
        Translator::new(self.mode)
    }

    /// Load the configured collection schema, if any
    pub fn load_schema(&self) -> SfQueryResult<Option<CollectionSchema>> {
        let Some(path) = &self.schema else {
            return Ok(None);
        };

        let content = std::fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&content)?;
        let schema = CollectionSchema::from_value(&value);
        tracing::info!(
            path = %path.display(),
            attributes = schema.len(),
            "Loaded collection schema"
        );
        Ok(Some(schema))
    }
}

fn resolve_in(dir: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.mode, ValidationMode::Lenient);
        assert!(config.schema.is_none());
        assert!(!config.pretty);
    }

    #[test]
    fn test_config_parses_toml() {
        let config: Config = toml::from_str("mode = \"strict\"\npretty = true\n").unwrap();
        assert_eq!(config.mode, ValidationMode::Strict);
        assert!(config.pretty);
        assert_eq!(config.translator().mode(), ValidationMode::Strict);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(Path::new("/etc/sfquery"), |key| match key {
                ENV_MODE => Some("off".to_string()),
                ENV_SCHEMA => Some("/tmp/accounts.json".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.mode, ValidationMode::Off);
        assert_eq!(config.schema, Some(PathBuf::from("/tmp/accounts.json")));
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let mut config = Config::default();
        config
            .apply_overrides(Path::new("."), |_| Some(String::new()))
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_mode_override() {
        let mut config = Config::default();
        let err = config
            .apply_overrides(Path::new("."), |key| {
                (key == ENV_MODE).then(|| "loud".to_string())
            })
            .unwrap_err();
        assert!(matches!(err, SfQueryError::Config(_)));
    }

    #[test]
    fn test_relative_env_schema_uses_config_dir() {
        let mut config = Config::default();
        config
            .apply_overrides(Path::new("/etc/sfquery"), |key| {
                (key == ENV_SCHEMA).then(|| "schemas/accounts.json".to_string())
            })
            .unwrap();
        assert_eq!(
            config.schema,
            Some(PathBuf::from("/etc/sfquery/schemas/accounts.json"))
        );
    }

    #[test]
    fn test_flags_override_file_and_env() {
        let mut config: Config =
            toml::from_str("mode = \"strict\"\nschema = \"/srv/file.json\"\n").unwrap();
        config
            .apply_overrides(Path::new("/srv"), |key| match key {
                ENV_MODE => Some("lenient".to_string()),
                ENV_SCHEMA => Some("/srv/env.json".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.mode, ValidationMode::Lenient);
        assert_eq!(config.schema, Some(PathBuf::from("/srv/env.json")));

        config.apply_flags(
            Some(ValidationMode::Off),
            true,
            Some(PathBuf::from("cli.json")),
        );
        assert_eq!(config.mode, ValidationMode::Off);
        assert!(config.pretty);
        assert_eq!(config.schema, Some(PathBuf::from("cli.json")));
    }

    #[test]
    fn test_absent_flags_keep_loaded_values() {
        let loaded = Config {
            mode: ValidationMode::Strict,
            schema: Some(PathBuf::from("/srv/accounts.json")),
            pretty: true,
        };
        let mut config = loaded.clone();
        config.apply_flags(None, false, None);
        assert_eq!(config, loaded);
    }
}
