use sfquery_core::TranslateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SfQueryError {
    #[error("Translation error: {0}")]
    Translate(#[from] TranslateError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config file error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type SfQueryResult<T> = Result<T, SfQueryError>;
