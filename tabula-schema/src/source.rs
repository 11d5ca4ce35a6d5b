use tabula_core::TableInfo;

use crate::{Result, SchemaError};

/// Supplies table metadata for code generation.
///
/// A fetch failure must surface as an error, never as a silent empty
/// table; the batch driver converts it into a per-table summary entry and
/// continues with the next table.
pub trait SchemaSource {
    /// Names of every table the source can see, in source order.
    fn table_names(&mut self) -> Result<Vec<String>>;

    /// Full column metadata for one table.
    fn fetch_table(&mut self, table: &str) -> Result<TableInfo>;
}

/// In-memory schema source.
///
/// Holds a fixed set of tables in insertion order. Individual tables can
/// be poisoned to simulate fetch failures, which is how driver resilience
/// gets exercised in tests.
#[derive(Debug, Default)]
pub struct MemorySource {
    tables: Vec<TableInfo>,
    poisoned: Vec<String>,
}

impl MemorySource {
    pub fn new(tables: Vec<TableInfo>) -> Self {
        Self {
            tables,
            poisoned: Vec::new(),
        }
    }

    /// Make every future fetch of `table` fail.
    pub fn poison(&mut self, table: impl Into<String>) {
        self.poisoned.push(table.into());
    }
}

impl SchemaSource for MemorySource {
    fn table_names(&mut self) -> Result<Vec<String>> {
        Ok(self.tables.iter().map(|t| t.name.clone()).collect())
    }

    fn fetch_table(&mut self, table: &str) -> Result<TableInfo> {
        if self.poisoned.iter().any(|name| name == table) {
            return Err(SchemaError::table_unavailable(table, "fetch failed"));
        }
        self.tables
            .iter()
            .find(|t| t.name == table)
            .cloned()
            .ok_or_else(|| SchemaError::table_unavailable(table, "not present in source"))
    }
}

#[cfg(test)]
mod tests {
    use tabula_core::{ColumnInfo, ColumnKey};

    use super::*;

    fn users() -> TableInfo {
        TableInfo::new(
            "users",
            vec![ColumnInfo {
                name: "id".to_string(),
                ty: "int(11)".to_string(),
                nullable: false,
                key: ColumnKey::Primary,
                default: None,
                extra: "auto_increment".to_string(),
            }],
        )
    }

    #[test]
    fn test_memory_source_fetch() {
        let mut source = MemorySource::new(vec![users()]);
        assert_eq!(source.table_names().unwrap(), vec!["users"]);
        assert_eq!(source.fetch_table("users").unwrap().columns.len(), 1);
    }

    #[test]
    fn test_memory_source_missing_table_errors() {
        let mut source = MemorySource::new(vec![users()]);
        let err = source.fetch_table("orders").unwrap_err();
        assert!(matches!(err, SchemaError::TableUnavailable { .. }));
    }

    #[test]
    fn test_memory_source_poisoned_table_errors() {
        let mut source = MemorySource::new(vec![users()]);
        source.poison("users");
        assert!(source.fetch_table("users").is_err());
        // Listing still works
        assert_eq!(source.table_names().unwrap(), vec!["users"]);
    }
}
