//! PHP naming for generated classes.

use indexmap::IndexMap;
use tabula_core::{TableInfo, strip_table_prefix, to_camel_case, to_pascal_case};

/// PHP reserved words that cannot name a class (compared case-insensitively).
const PHP_RESERVED: &[&str] = &[
    "abstract",
    "and",
    "array",
    "as",
    "break",
    "callable",
    "case",
    "catch",
    "class",
    "clone",
    "const",
    "continue",
    "declare",
    "default",
    "do",
    "echo",
    "else",
    "elseif",
    "empty",
    "enum",
    "exit",
    "extends",
    "final",
    "finally",
    "fn",
    "for",
    "foreach",
    "function",
    "global",
    "goto",
    "if",
    "implements",
    "include",
    "instanceof",
    "insteadof",
    "interface",
    "isset",
    "list",
    "match",
    "namespace",
    "new",
    "or",
    "print",
    "private",
    "protected",
    "public",
    "readonly",
    "require",
    "return",
    "static",
    "switch",
    "throw",
    "trait",
    "try",
    "unset",
    "use",
    "var",
    "while",
    "xor",
    "yield",
];

fn safe_class_name(name: &str) -> String {
    if PHP_RESERVED.contains(&name.to_ascii_lowercase().as_str()) {
        format!("_{}", name)
    } else {
        name.to_string()
    }
}

/// Names derived from one table.
///
/// Computed fresh on every generation, never cached.
#[derive(Debug, Clone)]
pub struct ResolvedNames {
    /// Class name: PascalCase of the prefix-stripped table name.
    pub class_name: String,
    /// Table name with its prefix segment removed.
    pub clean_name: String,
    /// Per-column names, in table column order.
    pub columns: Vec<ResolvedColumn>,
}

#[derive(Debug, Clone)]
pub struct ResolvedColumn {
    pub column: String,
    pub member: String,
    pub getter: String,
    pub setter: String,
}

impl ResolvedNames {
    pub fn resolve(table: &TableInfo) -> Self {
        let clean_name = strip_table_prefix(&table.name).to_string();
        let class_name = safe_class_name(&to_pascal_case(&clean_name));
        let columns = table
            .columns
            .iter()
            .map(|col| {
                let pascal = to_pascal_case(&col.name);
                ResolvedColumn {
                    column: col.name.clone(),
                    member: to_camel_case(&col.name),
                    getter: format!("get{}", pascal),
                    setter: format!("set{}", pascal),
                }
            })
            .collect();
        Self {
            class_name,
            clean_name,
            columns,
        }
    }

    /// Artifact file name for this class.
    pub fn file_name(&self) -> String {
        format!("{}.php", self.class_name)
    }

    /// Ordered column name to setter name mapping.
    pub fn setter_map(&self) -> IndexMap<&str, &str> {
        self.columns
            .iter()
            .map(|c| (c.column.as_str(), c.setter.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use tabula_core::ColumnInfo;

    use super::*;

    fn column(name: &str) -> ColumnInfo {
        ColumnInfo {
            name: name.to_string(),
            ty: "varchar(64)".to_string(),
            nullable: false,
            key: Default::default(),
            default: None,
            extra: String::new(),
        }
    }

    #[test]
    fn test_resolve_strips_prefix_for_class_name() {
        let table = TableInfo::new("rv_user_accounts", vec![]);
        let names = ResolvedNames::resolve(&table);
        assert_eq!(names.clean_name, "user_accounts");
        assert_eq!(names.class_name, "UserAccounts");
        assert_eq!(names.file_name(), "UserAccounts.php");
    }

    #[test]
    fn test_resolve_without_prefix() {
        let names = ResolvedNames::resolve(&TableInfo::new("users", vec![]));
        assert_eq!(names.clean_name, "users");
        assert_eq!(names.class_name, "Users");
    }

    #[test]
    fn test_reserved_class_name_escaped() {
        let names = ResolvedNames::resolve(&TableInfo::new("rv_list", vec![]));
        assert_eq!(names.class_name, "_List");
    }

    #[test]
    fn test_column_names() {
        let table = TableInfo::new("users", vec![column("user_name")]);
        let names = ResolvedNames::resolve(&table);
        let col = &names.columns[0];
        assert_eq!(col.member, "userName");
        assert_eq!(col.getter, "getUserName");
        assert_eq!(col.setter, "setUserName");
    }

    #[test]
    fn test_setter_map_preserves_order() {
        let table = TableInfo::new(
            "users",
            vec![column("zeta"), column("alpha"), column("mid")],
        );
        let names = ResolvedNames::resolve(&table);
        let keys: Vec<&str> = names.setter_map().keys().copied().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }
}
