//! Collection schema and date formatter resolution.
//!
//! A collection schema is the Waterline-style definition a data-access
//! layer already carries: `{ "definition": { field: { type, columnType,
//! columnName, autoMigrations: { columnType } } } }`. Only the column type
//! and column name matter here; everything else is ignored.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{value_kind, TranslateError, TranslateResult};
use crate::literal::LiteralKind;
use crate::translator::ValidationMode;

/// Migration settings nested under an attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoMigrations {
    /// `None` when the key is absent, `Some(None)` when it is present but
    /// carries no usable type (e.g. `null`).
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub column_type: Option<Option<String>>,
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Type metadata for a single collection attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDef {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_migrations: Option<AutoMigrations>,
}

impl AttributeDef {
    /// Attribute with a generic type.
    pub fn of_type(attr_type: impl Into<String>) -> Self {
        Self {
            attr_type: Some(attr_type.into()),
            ..Self::default()
        }
    }

    pub fn with_column_type(mut self, column_type: impl Into<String>) -> Self {
        self.column_type = Some(column_type.into());
        self
    }

    pub fn with_column_name(mut self, column_name: impl Into<String>) -> Self {
        self.column_name = Some(column_name.into());
        self
    }

    pub fn with_migration_column_type(mut self, column_type: impl Into<String>) -> Self {
        self.auto_migrations = Some(AutoMigrations {
            column_type: Some(Some(column_type.into())),
        });
        self
    }

    /// Read an attribute field by field.
    ///
    /// Numbers and booleans are taken as their text. Fields of any other
    /// kind count as absent; a present `autoMigrations.columnType` still
    /// shadows the outer types. Returns `None` for non-objects.
    pub fn from_value(value: &Value) -> Option<Self> {
        let fields = value.as_object()?;
        let auto_migrations = fields
            .get("autoMigrations")
            .and_then(Value::as_object)
            .map(|migrations| AutoMigrations {
                column_type: migrations
                    .get("columnType")
                    .map(|ct| field_text("columnType", ct)),
            });

        Some(Self {
            attr_type: fields.get("type").and_then(|v| field_text("type", v)),
            column_type: fields
                .get("columnType")
                .and_then(|v| field_text("columnType", v)),
            column_name: fields
                .get("columnName")
                .and_then(|v| field_text("columnName", v)),
            auto_migrations,
        })
    }

    /// Resolved column type.
    ///
    /// `autoMigrations.columnType` wins whenever it is present, even when
    /// empty or null. Otherwise the first non-empty of `columnType` and
    /// `type`.
    pub fn effective_type(&self) -> Option<&str> {
        if let Some(migration_type) = self
            .auto_migrations
            .as_ref()
            .and_then(|m| m.column_type.as_ref())
        {
            return migration_type.as_deref();
        }
        non_empty(self.column_type.as_deref()).or_else(|| non_empty(self.attr_type.as_deref()))
    }

    /// Name the field carries in clauses: `columnName` if set, else the
    /// attribute key.
    pub fn output_name<'a>(&'a self, key: &'a str) -> &'a str {
        non_empty(self.column_name.as_deref()).unwrap_or(key)
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

fn field_text(key: &str, value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => None,
        other => {
            tracing::debug!(field = key, kind = value_kind(other), "Ignoring schema field");
            None
        }
    }
}

/// A collection definition keyed by attribute name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSchema {
    #[serde(default)]
    pub definition: IndexMap<String, AttributeDef>,
}

impl CollectionSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute, replacing any previous one with the same key.
    pub fn with_attribute(mut self, name: impl Into<String>, attr: AttributeDef) -> Self {
        self.definition.insert(name.into(), attr);
        self
    }

    /// Read a schema out of arbitrary JSON without failing.
    ///
    /// Anything that is not an object with an object `definition` yields an
    /// empty schema. Non-object attributes are skipped; see
    /// [`AttributeDef::from_value`] for how odd fields are read.
    pub fn from_value(value: &Value) -> Self {
        let Some(definition) = value.get("definition").and_then(Value::as_object) else {
            return Self::default();
        };

        let mut schema = Self::default();
        for (name, attr) in definition {
            match AttributeDef::from_value(attr) {
                Some(def) => {
                    schema.definition.insert(name.clone(), def);
                }
                None => {
                    tracing::debug!(attribute = %name, "Skipping non-object schema attribute");
                }
            }
        }
        schema
    }

    pub fn len(&self) -> usize {
        self.definition.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definition.is_empty()
    }
}

impl FromIterator<(String, AttributeDef)> for CollectionSchema {
    fn from_iter<I: IntoIterator<Item = (String, AttributeDef)>>(iter: I) -> Self {
        Self {
            definition: iter.into_iter().collect(),
        }
    }
}

/// Output field name to date formatter.
///
/// Rebuilt for every translation; entries exist only for `date` and
/// `datetime` columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatterTable {
    formatters: HashMap<String, LiteralKind>,
}

impl FormatterTable {
    /// Build the table from an optional schema.
    ///
    /// A missing schema yields an empty table. Attributes with no usable
    /// type are skipped, or rejected in strict mode.
    pub fn resolve(
        schema: Option<&CollectionSchema>,
        mode: ValidationMode,
    ) -> TranslateResult<Self> {
        let mut table = Self::default();
        let Some(schema) = schema else {
            return Ok(table);
        };

        for (key, attr) in &schema.definition {
            let column_type = attr.effective_type().filter(|t| !t.is_empty());
            let Some(column_type) = column_type else {
                mode.tolerate(TranslateError::UnresolvedFieldType(key.clone()))?;
                continue;
            };

            if let Some(kind) = LiteralKind::from_column_type(column_type) {
                table
                    .formatters
                    .insert(attr.output_name(key).to_string(), kind);
            }
        }

        tracing::debug!(
            attributes = schema.len(),
            formatters = table.len(),
            "Resolved date formatters"
        );
        Ok(table)
    }

    /// Formatter registered for an output field name.
    pub fn get(&self, field: &str) -> Option<LiteralKind> {
        self.formatters.get(field).copied()
    }

    pub fn len(&self) -> usize {
        self.formatters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }
}
