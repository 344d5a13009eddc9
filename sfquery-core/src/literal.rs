//! Salesforce date and datetime literals.
//!
//! SOQL compares date fields against unquoted literals: `2024-03-15` for
//! `date` columns and `2024-03-15T10:30:45Z` for `datetime` columns. An
//! [`SfDate`] carries one such literal and serializes as its text.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const DATE_FORMAT: &str = "%Y-%m-%d";
const BASIC_DATE_FORMAT: &str = "%Y%m%d";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Which literal a formatter produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralKind {
    Date,
    DateTime,
}

impl LiteralKind {
    /// Match a resolved column type. Only the exact names `date` and
    /// `datetime` are recognized.
    pub fn from_column_type(column_type: &str) -> Option<LiteralKind> {
        match column_type {
            "date" => Some(LiteralKind::Date),
            "datetime" => Some(LiteralKind::DateTime),
            _ => None,
        }
    }

    /// Format a value into a literal of this kind.
    ///
    /// Accepts ISO 8601 strings and epoch-millisecond numbers. Returns None
    /// when the value cannot be read as a point in time.
    pub fn format(self, value: &Value) -> Option<SfDate> {
        let instant = parse_instant(value)?;
        Some(match self {
            LiteralKind::Date => SfDate::from_date(instant.date()),
            LiteralKind::DateTime => SfDate::from_datetime(instant.datetime()),
        })
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralKind::Date => f.write_str("date"),
            LiteralKind::DateTime => f.write_str("datetime"),
        }
    }
}

/// A formatted Salesforce date or datetime literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SfDate {
    kind: LiteralKind,
    literal: String,
}

impl SfDate {
    /// Date literal for a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            kind: LiteralKind::Date,
            literal: date.format(DATE_FORMAT).to_string(),
        }
    }

    /// Datetime literal for an instant. Sub-second precision is dropped.
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self {
            kind: LiteralKind::DateTime,
            literal: datetime.format(DATETIME_FORMAT).to_string(),
        }
    }

    /// Build a date literal from a string or epoch-millisecond value.
    pub fn to_date_literal(value: &Value) -> Option<Self> {
        LiteralKind::Date.format(value)
    }

    /// Build a datetime literal from a string or epoch-millisecond value.
    pub fn to_datetime_literal(value: &Value) -> Option<Self> {
        LiteralKind::DateTime.format(value)
    }

    pub fn kind(&self) -> LiteralKind {
        self.kind
    }

    pub fn is_date(&self) -> bool {
        self.kind == LiteralKind::Date
    }

    pub fn is_datetime(&self) -> bool {
        self.kind == LiteralKind::DateTime
    }

    /// The literal text, e.g. `2024-03-15`.
    pub fn as_str(&self) -> &str {
        &self.literal
    }
}

impl fmt::Display for SfDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

impl Serialize for SfDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.literal)
    }
}

/// A parsed point in time, remembering whether it carried a time part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Instant {
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
}

impl Instant {
    fn date(self) -> NaiveDate {
        match self {
            Instant::Date(d) => d,
            Instant::DateTime(dt) => dt.date_naive(),
        }
    }

    fn datetime(self) -> DateTime<Utc> {
        match self {
            Instant::Date(d) => d.and_time(NaiveTime::default()).and_utc(),
            Instant::DateTime(dt) => dt,
        }
    }
}

fn parse_instant(value: &Value) -> Option<Instant> {
    match value {
        Value::String(s) => parse_instant_str(s.trim()),
        Value::Number(n) => {
            // Epoch milliseconds
            let ms = n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
            })?;
            DateTime::from_timestamp_millis(ms).map(Instant::DateTime)
        }
        _ => None,
    }
}

fn parse_instant_str(s: &str) -> Option<Instant> {
    if let Some(date) = [DATE_FORMAT, BASIC_DATE_FORMAT]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
    {
        return Some(Instant::Date(date));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(Instant::DateTime(dt.with_timezone(&Utc)));
    }

    // Numeric offsets without a colon, e.g. +0900
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(Instant::DateTime(dt.with_timezone(&Utc)));
    }

    // No offset: read as UTC
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| Instant::DateTime(dt.and_utc()))
}
