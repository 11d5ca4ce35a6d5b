//! Type mapping between raw column types and PHP.

/// Token families checked in fixed precedence order.
const INTEGER_TOKENS: &[&str] = &["int", "tinyint", "smallint", "mediumint", "bigint"];
const DECIMAL_TOKENS: &[&str] = &["decimal", "float", "double", "real", "numeric"];
const BOOLEAN_TOKENS: &[&str] = &["bool", "boolean"];

/// PHP-side primitive category for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhpType {
    Int,
    Float,
    Bool,
    String,
}

impl PhpType {
    /// Classify a raw column type string, e.g. `varchar(255)`.
    ///
    /// Case-insensitive substring matching with the integer family checked
    /// first, so `tinyint(1)` classifies as Int, never Bool. Existing
    /// generated output depends on this precedence; changing it is a
    /// breaking change, not a bug fix.
    pub fn classify(raw: &str) -> Self {
        let raw = raw.to_ascii_lowercase();
        let matches = |tokens: &[&str]| tokens.iter().any(|t| raw.contains(t));

        if matches(INTEGER_TOKENS) {
            Self::Int
        } else if matches(DECIMAL_TOKENS) {
            Self::Float
        } else if matches(BOOLEAN_TOKENS) {
            Self::Bool
        } else {
            // Temporal types (date, time, year) and anything unrecognized
            // both come through as string.
            Self::String
        }
    }

    /// PHP type hint used in generated doc comments.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::String => "string",
        }
    }
}
