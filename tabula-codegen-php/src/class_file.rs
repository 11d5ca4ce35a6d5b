//! Artifact assembly for one table.

use tabula_core::{ColumnInfo, ColumnKey, TableInfo, Version, to_pascal_case};

use crate::{CodeBuilder, PhpType, ResolvedNames};

/// Primary-key identifier used when no column is flagged PRIMARY.
///
/// The generated bodies then reference a `getId()` accessor that may not
/// exist. Long-standing behavior that downstream projects compensate for;
/// reproduced, not repaired.
const PK_FALLBACK: &str = "id";

/// Assembles the PHP class artifact for one table.
///
/// Pure; all I/O stays in the generator. Output order is fixed: header,
/// fields, setter mapping, accessors, then the read/insert/update/delete
/// bodies.
pub struct ClassFile<'a> {
    table: &'a TableInfo,
    names: &'a ResolvedNames,
    version: Version,
    timestamp: &'a str,
}

impl<'a> ClassFile<'a> {
    pub fn new(
        table: &'a TableInfo,
        names: &'a ResolvedNames,
        version: Version,
        timestamp: &'a str,
    ) -> Self {
        Self {
            table,
            names,
            version,
            timestamp,
        }
    }

    /// Render the complete artifact text.
    pub fn render(&self) -> String {
        let mut b = CodeBuilder::new();

        b.line("<?php");
        b.line("/**");
        b.line(&format!(
            " * Data access class for table `{}`.",
            self.table.name
        ));
        b.line(" *");
        b.line(" * Generated by tabula. Regeneration overwrites this file; custom code");
        b.line(" * belongs in a subclass.");
        b.line(" *");
        b.line(&format!(" * @version {}", self.version));
        b.line(&format!(" * @generated {}", self.timestamp));
        b.line(" */");
        b.line(&format!("class {}", self.names.class_name));
        b.line("{");
        b.indent();

        let mut first = true;
        for (col, resolved) in self.table.columns.iter().zip(&self.names.columns) {
            separate(&mut b, &mut first);
            b.line(&field_comment(col));
            b.line(&format!("private ${};", resolved.member));
        }

        separate(&mut b, &mut first);
        self.render_setter_map(&mut b);

        for resolved in &self.names.columns {
            separate(&mut b, &mut first);
            b.line(&format!("public function {}()", resolved.getter));
            b.line("{");
            b.indent();
            b.line(&format!("return $this->{};", resolved.member));
            b.dedent();
            b.line("}");

            separate(&mut b, &mut first);
            b.line(&format!("public function {}($value)", resolved.setter));
            b.line("{");
            b.indent();
            b.line(&format!("$this->{} = $value;", resolved.member));
            b.dedent();
            b.line("}");
        }

        separate(&mut b, &mut first);
        self.render_read(&mut b);
        separate(&mut b, &mut first);
        self.render_insert(&mut b);
        separate(&mut b, &mut first);
        self.render_update(&mut b);
        separate(&mut b, &mut first);
        self.render_delete(&mut b);

        b.dedent();
        b.line("}");
        b.build()
    }

    /// Name of the primary-key column: first column flagged PRIMARY, in
    /// declaration order, or the fallback identifier.
    fn pk_column(&self) -> &str {
        self.table
            .primary_key()
            .map(|c| c.name.as_str())
            .unwrap_or(PK_FALLBACK)
    }

    fn pk_getter(&self) -> String {
        format!("get{}", to_pascal_case(self.pk_column()))
    }

    fn render_setter_map(&self, b: &mut CodeBuilder) {
        b.line("/** Column to setter mapping, in table column order. */");
        if self.names.columns.is_empty() {
            b.line("private static $COLUMN_SETTERS = array();");
            return;
        }
        b.line("private static $COLUMN_SETTERS = array(");
        b.indent();
        for (column, setter) in self.names.setter_map() {
            b.line(&format!("'{}' => '{}',", column, setter));
        }
        b.dedent();
        b.line(");");
    }

    fn render_read(&self, b: &mut CodeBuilder) {
        b.line("/**");
        b.line(" * Load one row by primary key, hydrating every field through the");
        b.line(" * setter mapping.");
        b.line(" */");
        b.line("public function read($db, $key)");
        b.line("{");
        b.indent();
        b.line(&format!(
            "$stmt = $db->prepare('SELECT * FROM `{}` WHERE `{}` = ?');",
            self.table.name,
            self.pk_column()
        ));
        b.line("$stmt->execute(array($key));");
        b.line("$row = $stmt->fetch(PDO::FETCH_ASSOC);");
        b.line("if ($row === false) {");
        b.indent();
        b.line("return false;");
        b.dedent();
        b.line("}");
        b.line("foreach (self::$COLUMN_SETTERS as $column => $setter) {");
        b.indent();
        b.line("$this->$setter($row[$column]);");
        b.dedent();
        b.line("}");
        b.line("return true;");
        b.dedent();
        b.line("}");
    }

    fn render_insert(&self, b: &mut CodeBuilder) {
        // Auto-increment columns are assigned by the database.
        let cols: Vec<_> = self
            .table
            .columns
            .iter()
            .zip(&self.names.columns)
            .filter(|(col, _)| !col.is_auto_increment())
            .collect();

        let column_list = cols
            .iter()
            .map(|(col, _)| format!("`{}`", col.name))
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = vec!["?"; cols.len()].join(", ");
        let binds = cols
            .iter()
            .map(|(_, r)| format!("$this->{}()", r.getter))
            .collect::<Vec<_>>()
            .join(", ");

        b.line("public function insert($db)");
        b.line("{");
        b.indent();
        b.line(&format!(
            "$stmt = $db->prepare('INSERT INTO `{}` ({}) VALUES ({})');",
            self.table.name, column_list, placeholders
        ));
        b.line(&format!("return $stmt->execute(array({}));", binds));
        b.dedent();
        b.line("}");
    }

    fn render_update(&self, b: &mut CodeBuilder) {
        let pk = self.pk_column();
        let cols: Vec<_> = self
            .table
            .columns
            .iter()
            .zip(&self.names.columns)
            .filter(|(col, _)| col.name != pk)
            .collect();

        let assignments = cols
            .iter()
            .map(|(col, _)| format!("`{}` = ?", col.name))
            .collect::<Vec<_>>()
            .join(", ");
        let mut binds: Vec<String> = cols
            .iter()
            .map(|(_, r)| format!("$this->{}()", r.getter))
            .collect();
        binds.push(format!("$this->{}()", self.pk_getter()));

        b.line("public function update($db)");
        b.line("{");
        b.indent();
        b.line(&format!(
            "$stmt = $db->prepare('UPDATE `{}` SET {} WHERE `{}` = ?');",
            self.table.name, assignments, pk
        ));
        b.line(&format!("return $stmt->execute(array({}));", binds.join(", ")));
        b.dedent();
        b.line("}");
    }

    fn render_delete(&self, b: &mut CodeBuilder) {
        b.line("public function delete($db)");
        b.line("{");
        b.indent();
        b.line(&format!(
            "$stmt = $db->prepare('DELETE FROM `{}` WHERE `{}` = ?');",
            self.table.name,
            self.pk_column()
        ));
        b.line(&format!(
            "return $stmt->execute(array($this->{}()));",
            self.pk_getter()
        ));
        b.dedent();
        b.line("}");
    }
}

/// Blank line between class members, skipped before the first one.
fn separate(b: &mut CodeBuilder, first: &mut bool) {
    if !*first {
        b.blank();
    }
    *first = false;
}

/// One-line summary of a column for its field declaration.
fn field_comment(col: &ColumnInfo) -> String {
    let mut parts = vec![PhpType::classify(&col.ty).hint().to_string()];
    if col.key != ColumnKey::None {
        parts.push(col.key.as_str().to_string());
    }
    parts.push(if col.nullable { "null allowed" } else { "not null" }.to_string());
    if let Some(default) = &col.default {
        parts.push(format!("default: {}", default));
    }
    if !col.extra.is_empty() {
        parts.push(col.extra.clone());
    }
    format!("/** {} */", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use tabula_core::ColumnInfo;

    use super::*;

    fn column(name: &str, ty: &str, key: ColumnKey, extra: &str) -> ColumnInfo {
        ColumnInfo {
            name: name.to_string(),
            ty: ty.to_string(),
            nullable: false,
            key,
            default: None,
            extra: extra.to_string(),
        }
    }

    fn users() -> TableInfo {
        TableInfo::new(
            "rv_users",
            vec![
                column("id", "int(11)", ColumnKey::Primary, "auto_increment"),
                column("user_name", "varchar(64)", ColumnKey::None, ""),
                column("balance", "decimal(10,2)", ColumnKey::None, ""),
            ],
        )
    }

    fn render(table: &TableInfo) -> String {
        let names = ResolvedNames::resolve(table);
        ClassFile::new(table, &names, Version::INITIAL, "2026-08-06 14:30:05").render()
    }

    #[test]
    fn test_header_carries_version_and_timestamp() {
        let content = render(&users());
        assert!(content.starts_with("<?php\n"));
        assert!(content.contains(" * @version 1.00"));
        assert!(content.contains(" * @generated 2026-08-06 14:30:05"));
        assert!(content.contains("Data access class for table `rv_users`."));
        // Round trip through the tracker
        assert_eq!(Version::from_artifact(&content), Version::INITIAL);
    }

    #[test]
    fn test_fields_in_column_order() {
        let content = render(&users());
        let id = content.find("private $id;").unwrap();
        let name = content.find("private $userName;").unwrap();
        let balance = content.find("private $balance;").unwrap();
        assert!(id < name && name < balance);
    }

    #[test]
    fn test_field_comments_summarize_metadata() {
        let content = render(&users());
        assert!(content.contains("/** int, PRIMARY, not null, auto_increment */"));
        assert!(content.contains("/** string, not null */"));
        assert!(content.contains("/** float, not null */"));
    }

    #[test]
    fn test_setter_map_in_column_order() {
        let content = render(&users());
        assert!(content.contains("'id' => 'setId',"));
        assert!(content.contains("'user_name' => 'setUserName',"));
        let id = content.find("'id' => 'setId',").unwrap();
        let name = content.find("'user_name' => 'setUserName',").unwrap();
        assert!(id < name);
    }

    #[test]
    fn test_insert_skips_auto_increment() {
        let content = render(&users());
        assert!(content.contains(
            "INSERT INTO `rv_users` (`user_name`, `balance`) VALUES (?, ?)"
        ));
        assert!(content.contains("$stmt->execute(array($this->getUserName(), $this->getBalance()));"));
    }

    #[test]
    fn test_update_excludes_pk_from_set_list() {
        let content = render(&users());
        assert!(content.contains(
            "UPDATE `rv_users` SET `user_name` = ?, `balance` = ? WHERE `id` = ?"
        ));
        assert!(content.contains(
            "array($this->getUserName(), $this->getBalance(), $this->getId())"
        ));
    }

    #[test]
    fn test_read_and_delete_filter_by_pk() {
        let content = render(&users());
        assert!(content.contains("SELECT * FROM `rv_users` WHERE `id` = ?"));
        assert!(content.contains("DELETE FROM `rv_users` WHERE `id` = ?"));
    }

    #[test]
    fn test_pk_fallback_references_literal_id_accessor() {
        let table = TableInfo::new(
            "rv_logs",
            vec![column("message", "text", ColumnKey::None, "")],
        );
        let content = render(&table);
        // No PRIMARY column and no `id` column: bodies still render and
        // point at a getId() accessor that does not exist.
        assert!(content.contains("WHERE `id` = ?"));
        assert!(content.contains("$this->getId()"));
        assert!(!content.contains("public function getId()"));
    }

    #[test]
    fn test_multiple_primary_columns_first_wins() {
        let table = TableInfo::new(
            "rv_memberships",
            vec![
                column("tenant_id", "int(11)", ColumnKey::Primary, ""),
                column("user_id", "int(11)", ColumnKey::Primary, ""),
            ],
        );
        let content = render(&table);
        assert!(content.contains("WHERE `tenant_id` = ?"));
    }

    #[test]
    fn test_zero_columns_still_renders_complete_class() {
        let content = render(&TableInfo::new("rv_placeholder", vec![]));
        assert!(content.starts_with("<?php\n"));
        assert!(content.contains("class Placeholder"));
        assert!(content.contains("private static $COLUMN_SETTERS = array();"));
        assert!(content.contains("public function read($db, $key)"));
        assert!(content.contains("public function delete($db)"));
        assert!(content.trim_end().ends_with('}'));
    }
}
