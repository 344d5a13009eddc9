//! Error types for sfquery-core.
//!
//! Translation is tolerant by default. These errors only surface when a
//! [`ValidationMode::Strict`](crate::ValidationMode::Strict) translator
//! meets input the tolerant path would silently absorb.

use thiserror::Error;

/// Translation error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("Invalid clause shape: {0}")]
    InvalidClauseShape(String),

    #[error("Unknown sort direction '{token}' for field '{field}'")]
    UnknownSortDirection { field: String, token: String },

    #[error("Unresolved field type: {0}")]
    UnresolvedFieldType(String),

    #[error("Cannot format {found} value for date field '{field}'")]
    UnformattableValue { field: String, found: &'static str },

    #[error("Invalid date literal for field '{field}': {value}")]
    InvalidDateLiteral { field: String, value: String },
}

/// Result type for translation operations
pub type TranslateResult<T> = Result<T, TranslateError>;

impl serde::Serialize for TranslateError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Name of a JSON value's kind, used in error messages and log fields.
pub fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
