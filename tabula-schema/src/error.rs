use std::path::PathBuf;

use thiserror::Error;

/// Result type for schema source operations
pub type Result<T> = std::result::Result<T, SchemaError>;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// The source could not supply metadata for a requested table.
    ///
    /// Fetch failures are always surfaced, never returned as an empty
    /// table; the batch driver records them per table.
    #[error("table '{table}' unavailable: {reason}")]
    TableUnavailable { table: String, reason: String },

    #[error("malformed catalog row for table '{table}': {reason}")]
    MalformedRow { table: String, reason: String },

    #[error("failed to read schema dump '{path}'")]
    DumpUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema dump '{path}'")]
    DumpInvalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SchemaError {
    pub fn table_unavailable(table: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::TableUnavailable {
            table: table.into(),
            reason: reason.into(),
        }
    }

    pub fn malformed_row(table: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            table: table.into(),
            reason: reason.into(),
        }
    }
}
