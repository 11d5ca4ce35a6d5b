//! Offline schema dump source.
//!
//! A dump is a JSON array of tables, typically produced by a one-off
//! export script against the live database:
//!
//! ```json
//! [
//!   {
//!     "name": "rv_users",
//!     "columns": [
//!       { "name": "id", "type": "int(11)", "nullable": false,
//!         "key": "primary", "extra": "auto_increment" }
//!     ]
//!   }
//! ]
//! ```

use std::path::Path;

use log::debug;
use tabula_core::TableInfo;

use crate::{Result, SchemaError, SchemaSource};

/// [`SchemaSource`] backed by a JSON schema dump file.
#[derive(Debug)]
pub struct JsonSource {
    tables: Vec<TableInfo>,
}

impl JsonSource {
    /// Load a dump from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SchemaError::DumpUnreadable {
            path: path.to_path_buf(),
            source: e,
        })?;
        let source = Self::from_json(&content).map_err(|e| SchemaError::DumpInvalid {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(
            "loaded {} tables from dump {}",
            source.tables.len(),
            path.display()
        );
        Ok(source)
    }

    /// Parse a dump from a JSON string.
    pub fn from_json(content: &str) -> std::result::Result<Self, serde_json::Error> {
        let tables: Vec<TableInfo> = serde_json::from_str(content)?;
        Ok(Self { tables })
    }
}

impl SchemaSource for JsonSource {
    fn table_names(&mut self) -> Result<Vec<String>> {
        Ok(self.tables.iter().map(|t| t.name.clone()).collect())
    }

    fn fetch_table(&mut self, table: &str) -> Result<TableInfo> {
        self.tables
            .iter()
            .find(|t| t.name == table)
            .cloned()
            .ok_or_else(|| SchemaError::table_unavailable(table, "not present in schema dump"))
    }
}
