//! Translated clause tree.
//!
//! A [`Condition`] mirrors the shape of the input clause. Scalars pass
//! through untouched, date fields become [`SfDate`] literals.

use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::Serialize;
use serde_json::Value;

use crate::literal::SfDate;

/// A node of a translated where clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Scalar carried over from the input
    Value(Value),
    /// Formatted date or datetime literal
    Literal(SfDate),
    List(Vec<Condition>),
    Map(IndexMap<String, Condition>),
}

impl Condition {
    /// Look up a key of a map node.
    pub fn get(&self, key: &str) -> Option<&Condition> {
        match self {
            Condition::Map(map) => map.get(key),
            _ => None,
        }
    }

    /// Look up an element of a list node.
    pub fn at(&self, index: usize) -> Option<&Condition> {
        match self {
            Condition::List(items) => items.get(index),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&SfDate> {
        match self {
            Condition::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Condition::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, Condition>> {
        match self {
            Condition::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Condition]> {
        match self {
            Condition::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Condition::Literal(_))
    }

    /// Convert to plain JSON. Literals become their text.
    pub fn to_value(&self) -> Value {
        match self {
            Condition::Value(v) => v.clone(),
            Condition::Literal(lit) => Value::String(lit.as_str().to_string()),
            Condition::List(items) => Value::Array(items.iter().map(Condition::to_value).collect()),
            Condition::Map(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_value()))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for Condition {
    /// Structural copy with no key or value rewriting.
    fn from(value: &Value) -> Self {
        match value {
            Value::Array(items) => Condition::List(items.iter().map(Condition::from).collect()),
            Value::Object(obj) => Condition::Map(
                obj.iter()
                    .map(|(k, v)| (k.clone(), Condition::from(v)))
                    .collect(),
            ),
            scalar => Condition::Value(scalar.clone()),
        }
    }
}

impl From<SfDate> for Condition {
    fn from(lit: SfDate) -> Self {
        Condition::Literal(lit)
    }
}

impl Serialize for Condition {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Condition::Value(v) => v.serialize(serializer),
            Condition::Literal(lit) => lit.serialize(serializer),
            Condition::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Condition::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
        }
    }
}
