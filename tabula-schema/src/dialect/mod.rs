//! Engine catalog dialects.
//!
//! A dialect carries no connection. It builds the catalog queries a driver
//! runs and decodes the positional text rows the driver returns, so a live
//! driver integration stays a thin shell around a [`SchemaSource`]
//! implementation.
//!
//! [`SchemaSource`]: crate::SchemaSource

mod mysql;
mod postgres;

pub use mysql::MySqlDialect;
pub use postgres::PostgresDialect;
use tabula_core::ColumnInfo;

use crate::{Result, SchemaError};

/// A database engine's catalog dialect.
pub trait SchemaDialect {
    /// Engine identifier (e.g., "mysql", "postgres")
    fn engine(&self) -> &'static str;

    /// Query listing the table names visible to the connection.
    fn tables_query(&self) -> String;

    /// Query listing column metadata for `table`, in declaration order.
    ///
    /// Table names are interpolated directly; callers validate them as
    /// plain identifiers before getting here.
    fn columns_query(&self, table: &str) -> String;

    /// Decode one row of the columns query into [`ColumnInfo`].
    fn decode_column(&self, table: &str, row: &[Option<String>]) -> Result<ColumnInfo>;
}

/// Required text cell at `index`, or a malformed-row error naming `field`.
fn required<'a>(
    table: &str,
    row: &'a [Option<String>],
    index: usize,
    field: &str,
) -> Result<&'a str> {
    row.get(index)
        .and_then(|cell| cell.as_deref())
        .ok_or_else(|| SchemaError::malformed_row(table, format!("missing '{}' cell", field)))
}

/// Optional text cell at `index`; absent and NULL both map to `None`.
fn optional(row: &[Option<String>], index: usize) -> Option<String> {
    row.get(index).and_then(|cell| cell.clone())
}
