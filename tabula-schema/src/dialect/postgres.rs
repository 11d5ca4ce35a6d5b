use tabula_core::{ColumnInfo, ColumnKey};

use super::{SchemaDialect, optional, required};
use crate::Result;

/// PostgreSQL catalog dialect.
///
/// Columns come from `information_schema`, joined against key usage so the
/// row shape lines up with what MySQL reports:
/// `column_name, data_type, is_nullable, constraint_type, column_default`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresDialect;

impl SchemaDialect for PostgresDialect {
    fn engine(&self) -> &'static str {
        "postgres"
    }

    fn tables_query(&self) -> String {
        "SELECT table_name FROM information_schema.tables \
         WHERE table_schema = 'public' ORDER BY table_name"
            .to_string()
    }

    fn columns_query(&self, table: &str) -> String {
        format!(
            "SELECT c.column_name, c.data_type, c.is_nullable, \
                    COALESCE(tc.constraint_type, ''), c.column_default \
             FROM information_schema.columns c \
             LEFT JOIN information_schema.key_column_usage kcu \
               ON kcu.table_name = c.table_name AND kcu.column_name = c.column_name \
             LEFT JOIN information_schema.table_constraints tc \
               ON tc.constraint_name = kcu.constraint_name \
             WHERE c.table_name = '{}' \
             ORDER BY c.ordinal_position",
            table
        )
    }

    fn decode_column(&self, table: &str, row: &[Option<String>]) -> Result<ColumnInfo> {
        let name = required(table, row, 0, "column_name")?.to_string();
        let ty = required(table, row, 1, "data_type")?.to_string();
        let nullable = required(table, row, 2, "is_nullable")?.eq_ignore_ascii_case("YES");
        let key = match optional(row, 3).as_deref() {
            Some("PRIMARY KEY") => ColumnKey::Primary,
            Some("UNIQUE") => ColumnKey::Unique,
            _ => ColumnKey::None,
        };
        let default = optional(row, 4);

        // Serial and identity columns carry a nextval() default; normalize
        // them to the auto-increment marker the assembler understands.
        let (default, extra) = match default {
            Some(expr) if expr.contains("nextval(") => (None, "auto_increment".to_string()),
            other => (other, String::new()),
        };

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
