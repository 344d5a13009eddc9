//! Sort clause translation.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use super::ValidationMode;
use crate::error::{value_kind, TranslateError, TranslateResult};

/// Numeric sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// `ASC` or `DESC`, case-sensitive.
    pub fn from_token(token: &str) -> Option<SortDirection> {
        match token {
            "ASC" => Some(SortDirection::Ascending),
            "DESC" => Some(SortDirection::Descending),
            _ => None,
        }
    }

    pub fn as_i8(self) -> i8 {
        match self {
            SortDirection::Ascending => 1,
            SortDirection::Descending => -1,
        }
    }
}

impl Serialize for SortDirection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.as_i8())
    }
}

/// Field to direction, in first-seen field order.
///
/// A field whose token was not recognized maps to None and serializes as
/// `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SortOrder(IndexMap<String, Option<SortDirection>>);

impl SortOrder {
    /// Direction for a field, if present and recognized.
    pub fn direction(&self, field: &str) -> Option<SortDirection> {
        self.0.get(field).copied().flatten()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<SortDirection>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn to_value(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .map(|(k, v)| (k.clone(), v.map_or(Value::Null, |d| Value::from(d.as_i8()))))
                .collect(),
        )
    }
}

pub(super) fn translate(specs: &[Value], mode: ValidationMode) -> TranslateResult<SortOrder> {
    if specs.is_empty() {
        return Ok(SortOrder::default());
    }

    // Later entries overwrite earlier ones; a field keeps its first position.
    let mut merged: IndexMap<&str, &Value> = IndexMap::new();
    for (i, spec) in specs.iter().enumerate() {
        match spec.as_object() {
            Some(entries) => {
                for (field, token) in entries {
                    merged.insert(field.as_str(), token);
                }
            }
            None => mode.tolerate(TranslateError::InvalidClauseShape(format!(
                "sort entry {} is {}, expected an object",
                i,
                value_kind(spec)
            )))?,
        }
    }

    let mut order = IndexMap::with_capacity(merged.len());
    for (field, token) in merged {
        let direction = token.as_str().and_then(SortDirection::from_token);
        if direction.is_none() {
            mode.tolerate(TranslateError::UnknownSortDirection {
                field: field.to_string(),
                token: match token {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                },
            })?;
        }
        order.insert(field.to_string(), direction);
    }

    Ok(SortOrder(order))
}
