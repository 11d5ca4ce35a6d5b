//! Manifest types and parsing for tabula.toml files.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;
use tabula_core::GenerationMode;

use crate::{Engine, Error, Result, validate};

/// Root manifest for tabula.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Project metadata and generation settings
    pub project: ProjectConfig,

    /// Where schema metadata comes from
    #[serde(default)]
    pub schema: SchemaConfig,
}

/// The `[project]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    /// Project name, used for reporting only
    pub name: String,

    /// Database engine the schema source speaks
    pub engine: Engine,

    /// Directory generated classes are written to
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// What to do with artifacts that already exist
    #[serde(default = "default_mode")]
    pub mode: GenerationMode,
}

/// The `[schema]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaConfig {
    /// Offline schema dump consumed by the JSON source
    pub dump: Option<PathBuf>,

    /// Tables to generate; empty means every table the source reports
    #[serde(default)]
    pub tables: Vec<String>,
}

fn default_output() -> PathBuf {
    PathBuf::from("generated")
}

fn default_mode() -> GenerationMode {
    GenerationMode::Save
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "tabula.toml")
    }
}

impl Manifest {
    /// Parse a tabula.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a tabula.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let manifest: Manifest =
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    if manifest.project.name.trim().is_empty() {
        return Err(Error::validation(
            "project name cannot be empty",
            src,
            filename,
        ));
    }

    for name in &manifest.schema.tables {
        if let Some(reason) = validate::validate_table_name(name) {
            let span = validate::find_name_span(src, name);
            return Err(Error::invalid_table_name(name, reason, src, filename, span));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [project]
        name = "crm"
        engine = "mysql"
    "#;

    #[test]
    fn test_parse_minimal() {
        let manifest: Manifest = MINIMAL.parse().unwrap();
        assert_eq!(manifest.project.name, "crm");
        assert_eq!(manifest.project.engine, Engine::Mysql);
        assert_eq!(manifest.project.output, PathBuf::from("generated"));
        assert_eq!(manifest.project.mode, GenerationMode::Save);
        assert!(manifest.schema.dump.is_none());
        assert!(manifest.schema.tables.is_empty());
    }

    #[test]
    fn test_parse_full() {
        let manifest: Manifest = r#"
            [project]
            name = "crm"
            engine = "postgres"
            output = "src/dao"
            mode = "overwrite"

            [schema]
            dump = "schema.json"
            tables = ["rv_users", "rv_orders"]
        "#
        .parse()
        .unwrap();

        assert_eq!(manifest.project.engine, Engine::Postgres);
        assert_eq!(manifest.project.mode, GenerationMode::Overwrite);
        assert_eq!(manifest.schema.dump, Some(PathBuf::from("schema.json")));
        assert_eq!(manifest.schema.tables, vec!["rv_users", "rv_orders"]);
    }

    #[test]
    fn test_unknown_engine_is_a_parse_error() {
        let err = r#"
            [project]
            name = "crm"
            engine = "oracle"
        "#
        .parse::<Manifest>()
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_mode_is_a_parse_error() {
        let err = r#"
            [project]
            name = "crm"
            engine = "mysql"
            mode = "archive"
        "#
        .parse::<Manifest>()
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_empty_project_name_rejected() {
        let err = r#"
            [project]
            name = "  "
            engine = "mysql"
        "#
        .parse::<Manifest>()
        .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_invalid_table_name_rejected() {
        let err = r#"
            [project]
            name = "crm"
            engine = "mysql"

            [schema]
            tables = ["users; drop table users"]
        "#
        .parse::<Manifest>()
        .unwrap_err();
        assert!(matches!(*err, Error::InvalidTableName { .. }));
    }
}
