//! Schema metadata sources for the tabula class generator.
//!
//! The generation pipeline consumes table metadata through the
//! [`SchemaSource`] trait. Engine specifics live in [`SchemaDialect`]
//! implementations, which build catalog queries and decode the rows a
//! driver returns; the shipped sources ([`JsonSource`], [`MemorySource`])
//! cover offline dumps and tests.

mod dialect;
mod error;
mod json;
mod source;

pub use dialect::{MySqlDialect, PostgresDialect, SchemaDialect};
pub use error::{Result, SchemaError};
pub use json::JsonSource;
pub use source::{MemorySource, SchemaSource};
