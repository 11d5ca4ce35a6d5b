use tabula_core::{ColumnInfo, ColumnKey};

use super::{SchemaDialect, optional, required};
use crate::Result;

/// MySQL / MariaDB catalog dialect.
///
/// Columns come from `SHOW COLUMNS`, whose row shape is
/// `Field, Type, Null, Key, Default, Extra`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlDialect;

impl SchemaDialect for MySqlDialect {
    fn engine(&self) -> &'static str {
        "mysql"
    }

    fn tables_query(&self) -> String {
        "SHOW TABLES".to_string()
    }

    fn columns_query(&self, table: &str) -> String {
        format!("SHOW COLUMNS FROM `{}`", table)
    }

    fn decode_column(&self, table: &str, row: &[Option<String>]) -> Result<ColumnInfo> {
        let name = required(table, row, 0, "Field")?.to_string();
        let ty = required(table, row, 1, "Type")?.to_string();
        let nullable = required(table, row, 2, "Null")?.eq_ignore_ascii_case("YES");
        let key = ColumnKey::from_catalog(optional(row, 3).as_deref().unwrap_or(""));
        let default = optional(row, 4);
        let extra = optional(row, 5).unwrap_or_default();

        Ok(ColumnInfo {
            name,
            ty,
            nullable,
            key,
            default,
            extra,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_queries() {
        let dialect = MySqlDialect;
        assert_eq!(dialect.tables_query(), "SHOW TABLES");
        assert_eq!(
            dialect.columns_query("rv_users"),
            "SHOW COLUMNS FROM `rv_users`"
        );
    }

    #[test]
    fn test_decode_primary_key_row() {
        let row = vec![
            cell("id"),
            cell("int(11)"),
            cell("NO"),
            cell("PRI"),
            None,
            cell("auto_increment"),
        ];
        let col = MySqlDialect.decode_column("rv_users", &row).unwrap();
        assert_eq!(col.name, "id");
        assert_eq!(col.ty, "int(11)");
        assert!(!col.nullable);
        assert_eq!(col.key, ColumnKey::Primary);
        assert!(col.default.is_none());
        assert!(col.is_auto_increment());
    }

    #[test]
    fn test_decode_nullable_with_default() {
        let row = vec![
            cell("status"),
            cell("varchar(16)"),
            cell("YES"),
            cell(""),
            cell("active"),
            cell(""),
        ];
        let col = MySqlDialect.decode_column("rv_users", &row).unwrap();
        assert!(col.nullable);
        assert_eq!(col.key, ColumnKey::None);
        assert_eq!(col.default.as_deref(), Some("active"));
    }

    #[test]
    fn test_decode_short_row_errors() {
        let row = vec![cell("id")];
        assert!(MySqlDialect.decode_column("rv_users", &row).is_err());
    }
}
