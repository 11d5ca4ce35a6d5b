use std::{io, path::PathBuf};

use tabula_schema::SchemaError;
use thiserror::Error;

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, GenerateError>;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// The output directory could not be created. The only error that
    /// aborts a whole batch; everything else is isolated per table.
    #[error("output directory '{path}' unavailable")]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("reading existing artifact for '{table}' failed")]
    ReadFailed {
        table: String,
        #[source]
        source: io::Error,
    },

    /// Backup creation failed; the table is skipped and the existing
    /// artifact is left untouched.
    #[error("backup for '{table}' failed")]
    BackupFailed {
        table: String,
        #[source]
        source: io::Error,
    },

    #[error("writing artifact for '{table}' failed")]
    WriteFailed {
        table: String,
        #[source]
        source: io::Error,
    },
}
