use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'tabula init' to create a new project manifest"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse tabula.toml")]
    #[diagnostic(code(tabula::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(tabula::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid table name '{name}'")]
    #[diagnostic(
        code(tabula::invalid_table_name),
        help(
            "{reason}. Use only letters, numbers, and underscores, starting with a letter or underscore."
        )
    )]
    InvalidTableName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        reason: String,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error with source context
    pub fn validation(message: impl Into<String>, src: &str, filename: &str) -> Box<Self> {
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            span: None,
            message: message.into(),
        })
    }

    /// Create an invalid table name error
    pub fn invalid_table_name(
        name: impl Into<String>,
        reason: impl Into<String>,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::InvalidTableName {
            src: NamedSource::new(filename, src.to_string()),
            span,
            name: name.into(),
            reason: reason.into(),
        })
    }
}
