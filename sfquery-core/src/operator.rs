//! Operator vocabulary for where clauses.
//!
//! Maps the criteria tokens a caller writes to the `$`-prefixed symbols the
//! Salesforce client expects:
//! - Logical: `and`, `or`
//! - Pattern matching: `like`
//! - Membership: `in`
//! - Relational: `!=`, `>=`, `>`, `<=`, `<`

use std::fmt;

/// A recognized clause operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    And,
    Or,
    Like,
    In,
    NotEqual,
    GreaterThanOrEqual,
    GreaterThan,
    LessThanOrEqual,
    LessThan,
}

impl Operator {
    /// Every operator, in table order.
    pub const ALL: [Operator; 9] = [
        Operator::And,
        Operator::Or,
        Operator::Like,
        Operator::In,
        Operator::NotEqual,
        Operator::GreaterThanOrEqual,
        Operator::GreaterThan,
        Operator::LessThanOrEqual,
        Operator::LessThan,
    ];

    /// Look up an operator by its source token. Matching is case-sensitive.
    pub fn from_token(token: &str) -> Option<Operator> {
        match token {
            "and" => Some(Operator::And),
            "or" => Some(Operator::Or),
            "like" => Some(Operator::Like),
            "in" => Some(Operator::In),
            "!=" => Some(Operator::NotEqual),
            ">=" => Some(Operator::GreaterThanOrEqual),
            ">" => Some(Operator::GreaterThan),
            "<=" => Some(Operator::LessThanOrEqual),
            "<" => Some(Operator::LessThan),
            _ => None,
        }
    }

    /// The source token for this operator.
    pub fn token(self) -> &'static str {
        match self {
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Like => "like",
            Operator::In => "in",
            Operator::NotEqual => "!=",
            Operator::GreaterThanOrEqual => ">=",
            Operator::GreaterThan => ">",
            Operator::LessThanOrEqual => "<=",
            Operator::LessThan => "<",
        }
    }

    /// The target symbol for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::And => "$and",
            Operator::Or => "$or",
            Operator::Like => "$like",
            Operator::In => "$in",
            Operator::NotEqual => "$ne",
            Operator::GreaterThanOrEqual => "$gte",
            Operator::GreaterThan => "$gt",
            Operator::LessThanOrEqual => "$lte",
            Operator::LessThan => "$lt",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Translate a clause key: operator tokens become symbols, anything else
/// is taken to be a field name and returned unchanged.
#[inline]
pub fn translate_key(key: &str) -> &str {
    match Operator::from_token(key) {
        Some(op) => op.symbol(),
        None => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_table() {
        let expected = [
            ("and", "$and"),
            ("or", "$or"),
            ("like", "$like"),
            ("in", "$in"),
            ("!=", "$ne"),
            (">=", "$gte"),
            (">", "$gt"),
            ("<=", "$lte"),
            ("<", "$lt"),
        ];
        for (token, symbol) in expected {
            let op = Operator::from_token(token).unwrap();
            assert_eq!(op.symbol(), symbol);
            assert_eq!(op.token(), token);
        }
    }

    #[test]
    fn test_all_round_trips_through_token() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_token(op.token()), Some(op));
        }
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        assert_eq!(Operator::from_token("AND"), None);
        assert_eq!(Operator::from_token("Like"), None);
        assert_eq!(Operator::from_token("$and"), None);
    }

    #[test]
    fn test_translate_key() {
        assert_eq!(translate_key("or"), "$or");
        assert_eq!(translate_key("<="), "$lte");
        assert_eq!(translate_key("name"), "name");
        assert_eq!(translate_key("$gt"), "$gt");
        assert_eq!(translate_key(""), "");
    }

    #[test]
    fn test_display_writes_symbol() {
        assert_eq!(Operator::NotEqual.to_string(), "$ne");
    }
}
