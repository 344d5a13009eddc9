//! Where and sort clause translation.
//!
//! A [`Translator`] turns Waterline-style criteria into the `$`-operator
//! conditions a Salesforce client consumes. It holds no state besides its
//! [`ValidationMode`], so one value can be shared freely across threads.

mod clause;
mod sort;


pub use sort::{SortDirection, SortOrder};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::condition::Condition;
use crate::error::{TranslateError, TranslateResult};
use crate::schema::{CollectionSchema, FormatterTable};

use clause::ClauseRewriter;

/// How translation treats input it cannot make sense of.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Absorb malformed input silently
    Off,
    /// Absorb malformed input and log a warning (default)
    #[default]
    Lenient,
    /// Reject malformed input with an error
    Strict,
}

impl ValidationMode {
    /// Apply the mode to an anomaly the tolerant path would absorb.
    pub(crate) fn tolerate(self, err: TranslateError) -> TranslateResult<()> {
        match self {
            ValidationMode::Off => Ok(()),
            ValidationMode::Lenient => {
                tracing::warn!(error = %err, "Ignoring malformed input (lenient mode)");
                Ok(())
            }
            ValidationMode::Strict => Err(err),
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMode::Off => f.write_str("off"),
            ValidationMode::Lenient => f.write_str("lenient"),
            ValidationMode::Strict => f.write_str("strict"),
        }
    }
}

impl FromStr for ValidationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(ValidationMode::Off),
            "lenient" => Ok(ValidationMode::Lenient),
            "strict" => Ok(ValidationMode::Strict),
            other => Err(format!(
                "unknown validation mode '{}', use off/lenient/strict",
                other
            )),
        }
    }
}

/// Translates where and sort clauses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Translator {
    mode: ValidationMode,
}

impl Translator {
    pub fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    pub fn strict() -> Self {
        Self::new(ValidationMode::Strict)
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Translate a where clause.
    ///
    /// Operator tokens are renamed at every depth. Values under keys that
    /// name a `date`/`datetime` column of `schema` are formatted as
    /// Salesforce literals.
    pub fn translate(
        &self,
        clause: &Value,
        schema: Option<&CollectionSchema>,
    ) -> TranslateResult<Condition> {
        let formatters = FormatterTable::resolve(schema, self.mode)?;
        ClauseRewriter::new(&formatters, self.mode).rewrite(clause)
    }

    /// Translate a sequence of `{field: "ASC" | "DESC"}` entries.
    pub fn translate_sort(&self, specs: &[Value]) -> TranslateResult<SortOrder> {
        sort::translate(specs, self.mode)
    }
}

/// Translate a where clause with the default (lenient) translator.
pub fn translate_clause(
    clause: &Value,
    schema: Option<&CollectionSchema>,
) -> TranslateResult<Condition> {
    Translator::default().translate(clause, schema)
}

/// Translate sort entries with the default (lenient) translator.
pub fn translate_sort(specs: &[Value]) -> TranslateResult<SortOrder> {
    Translator::default().translate_sort(specs)
}
