//! sfquery core - translate Waterline-style criteria into Salesforce query
//! conditions.
//!
//! This crate has no I/O and no client dependencies. It rewrites plain JSON
//! where and sort clauses into the shape a Salesforce API client expects.
//!
//! # Main Components
//!
//! - **Operators**: static `and`/`or`/`like`/`in`/comparison → `$`-symbol table
//! - **Schema**: collection definitions and the date formatter table built from them
//! - **Literals**: Salesforce date and datetime literals (`SfDate`)
//! - **Translator**: the recursive where-clause rewrite and the sort remapper
//!
//! # Example
//!
//! ```rust
//! use sfquery_core::{translate_clause, translate_sort, AttributeDef, CollectionSchema};
//! use serde_json::json;
//!
//! let schema = CollectionSchema::new()
//!     .with_attribute("createdDate", AttributeDef::of_type("ref").with_column_type("date"));
//!
//! let clause = json!({"and": [{"name": {"like": "Jane%"}}, {"createdDate": {">=": "2022-01-01"}}]});
//! let translated = translate_clause(&clause, Some(&schema)).unwrap();
//! assert_eq!(
//!     translated.to_value(),
//!     json!({"$and": [{"name": {"$like": "Jane%"}}, {"createdDate": {"$gte": "2022-01-01"}}]})
//! );
//!
//! let sort = translate_sort(&[json!({"name": "ASC"}), json!({"createdDate": "DESC"})]).unwrap();
//! assert_eq!(sort.to_value(), json!({"name": 1, "createdDate": -1}));
//! ```

pub mod condition;
pub mod error;
pub mod literal;
pub mod operator;
pub mod schema;
pub mod translator;

// Re-export main types for convenience
pub use condition::Condition;
pub use error::{TranslateError, TranslateResult};
pub use literal::{LiteralKind, SfDate};
pub use operator::{translate_key, Operator};
pub use schema::{AttributeDef, AutoMigrations, CollectionSchema, FormatterTable};
pub use translator::{
    translate_clause, translate_sort, SortDirection, SortOrder, Translator, ValidationMode,
};
