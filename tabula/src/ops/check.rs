//! Check operation - validate the manifest and schema dump.

use tabula_manifest::Manifest;
use tabula_schema::{JsonSource, SchemaSource};

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// The manifest itself already parsed and validated by the time we get
/// here; this checks the schema dump it points at.
pub fn check(manifest: &Manifest) -> CheckReport {
    let mut report = CheckReport {
        project: manifest.project.name.clone(),
        engine: manifest.project.engine.to_string(),
        table_count: None,
        problems: Vec::new(),
        warnings: Vec::new(),
    };

    let Some(dump) = &manifest.schema.dump else {
        report
            .warnings
            .push("no schema dump configured; generate will have nothing to read".to_string());
        return report;
    };

    let mut source = match JsonSource::from_file(dump) {
        Ok(source) => source,
        Err(e) => {
            report.problems.push(e.to_string());
            return report;
        }
    };

    match source.table_names() {
        Ok(names) => {
            report.table_count = Some(names.len());
            for requested in &manifest.schema.tables {
                if !names.contains(requested) {
                    report
                        .warnings
                        .push(format!("table '{}' is not in the schema dump", requested));
                }
            }
        }
        Err(e) => report.problems.push(e.to_string()),
    }

    report
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn manifest(toml: &str) -> Manifest {
        toml.parse().unwrap()
    }

    #[test]
    fn test_check_without_dump_warns() {
        let report = check(&manifest(
            r#"
            [project]
            name = "crm"
            engine = "mysql"
            "#,
        ));
        assert!(report.ok());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.table_count.is_none());
    }

    #[test]
    fn test_check_with_missing_dump_reports_problem() {
        let report = check(&manifest(
            r#"
            [project]
            name = "crm"
            engine = "mysql"

            [schema]
            dump = "/nonexistent/schema.json"
            "#,
        ));
        assert!(!report.ok());
        assert_eq!(report.problems.len(), 1);
    }

    #[test]
    fn test_check_flags_tables_missing_from_dump() {
        let temp = TempDir::new().unwrap();
        let dump = temp.path().join("schema.json");
        fs::write(&dump, r#"[{ "name": "rv_users", "columns": [] }]"#).unwrap();

        let report = check(&manifest(&format!(
            r#"
            [project]
            name = "crm"
            engine = "mysql"

            [schema]
            dump = "{}"
            tables = ["rv_users", "rv_orders"]
            "#,
            dump.display()
        )));

        assert!(report.ok());
        assert_eq!(report.table_count, Some(1));
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("rv_orders"));
    }
}
