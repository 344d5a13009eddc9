pub mod config;
pub mod error;

pub use config::Config;
pub use error::{SfQueryError, SfQueryResult};
pub use sfquery_core::{
    translate_clause, translate_key, translate_sort, AttributeDef, AutoMigrations,
    CollectionSchema, Condition, FormatterTable, LiteralKind, Operator, SfDate, SortDirection,
    SortOrder, TranslateError, TranslateResult, Translator, ValidationMode,
};
