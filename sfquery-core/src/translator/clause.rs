//! Recursive where-clause rewrite.

use indexmap::IndexMap;
use serde_json::Value;

use super::ValidationMode;
use crate::condition::Condition;
use crate::error::{value_kind, TranslateError, TranslateResult};
use crate::literal::LiteralKind;
use crate::operator::translate_key;
use crate::schema::FormatterTable;

/// Walks a clause once, consulting the same flat formatter table at every
/// depth.
pub(super) struct ClauseRewriter<'a> {
    formatters: &'a FormatterTable,
    mode: ValidationMode,
}

impl<'a> ClauseRewriter<'a> {
    pub(super) fn new(formatters: &'a FormatterTable, mode: ValidationMode) -> Self {
        Self { formatters, mode }
    }

    pub(super) fn rewrite(&self, node: &Value) -> TranslateResult<Condition> {
        match node {
            Value::Object(obj) => {
                let mut out = IndexMap::with_capacity(obj.len());
                for (key, value) in obj {
                    let out_key = translate_key(key);
                    match self.formatters.get(out_key) {
                        Some(kind) => {
                            if let Some(formatted) = self.format_field(out_key, kind, value)? {
                                out.insert(out_key.to_string(), formatted);
                            }
                        }
                        None => {
                            out.insert(out_key.to_string(), self.rewrite(value)?);
                        }
                    }
                }
                Ok(Condition::Map(out))
            }
            Value::Array(items) => items
                .iter()
                .map(|item| self.rewrite(item))
                .collect::<TranslateResult<Vec<_>>>()
                .map(Condition::List),
            scalar => Ok(Condition::Value(scalar.clone())),
        }
    }

    /// Format the value found under a date field key.
    ///
    /// Returns None when the key must be left out of the output.
    fn format_field(
        &self,
        field: &str,
        kind: LiteralKind,
        value: &Value,
    ) -> TranslateResult<Option<Condition>> {
        match value {
            Value::String(_) => self.format_leaf(field, kind, value).map(Some),
            Value::Object(comparisons) => {
                let mut out = IndexMap::with_capacity(comparisons.len());
                for (op, operand) in comparisons {
                    let formatted = self.format_operand(field, kind, operand)?;
                    out.insert(translate_key(op).to_string(), formatted);
                }
                Ok(Some(Condition::Map(out)))
            }
            other => {
                self.mode.tolerate(TranslateError::UnformattableValue {
                    field: field.to_string(),
                    found: value_kind(other),
                })?;
                Ok(None)
            }
        }
    }

    /// Operand of a comparison on a date field. Not re-walked: arrays are
    /// formatted one level deep, null passes through at either level.
    fn format_operand(
        &self,
        field: &str,
        kind: LiteralKind,
        operand: &Value,
    ) -> TranslateResult<Condition> {
        match operand {
            Value::Array(items) => items
                .iter()
                .map(|item| self.format_element(field, kind, item))
                .collect::<TranslateResult<Vec<_>>>()
                .map(Condition::List),
            _ => self.format_element(field, kind, operand),
        }
    }

    fn format_element(
        &self,
        field: &str,
        kind: LiteralKind,
        value: &Value,
    ) -> TranslateResult<Condition> {
        match value {
            Value::Null => Ok(Condition::Value(Value::Null)),
            _ => self.format_leaf(field, kind, value),
        }
    }

    fn format_leaf(
        &self,
        field: &str,
        kind: LiteralKind,
        value: &Value,
    ) -> TranslateResult<Condition> {
        if let Some(lit) = kind.format(value) {
            return Ok(Condition::Literal(lit));
        }

        let shown = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        self.mode.tolerate(TranslateError::InvalidDateLiteral {
            field: field.to_string(),
            value: shown,
        })?;
        Ok(Condition::Value(value.clone()))
    }
}
