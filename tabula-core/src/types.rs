use serde::{Deserialize, Serialize};

/// Key role of a column, as reported by the database catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKey {
    /// Part of the primary key.
    Primary,
    /// First column of a unique index.
    Unique,
    /// First column of a non-unique index.
    Multiple,
    /// Not indexed.
    #[default]
    None,
}

impl ColumnKey {
    /// Parse the letter code used by MySQL's `SHOW COLUMNS` output.
    pub fn from_catalog(code: &str) -> Self {
        match code {
            "PRI" => Self::Primary,
            "UNI" => Self::Unique,
            "MUL" => Self::Multiple,
            _ => Self::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "PRIMARY",
            Self::Unique => "UNIQUE",
            Self::Multiple => "MULTIPLE",
            Self::None => "NONE",
        }
    }
}

/// Metadata for a single column. Immutable once fetched from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    /// Raw database type string, e.g. `varchar(255)`.
    #[serde(rename = "type")]
    pub ty: String,
    pub nullable: bool,
    #[serde(default)]
    pub key: ColumnKey,
    #[serde(default)]
    pub default: Option<String>,
    /// Extra catalog attribute, e.g. `auto_increment`.
    #[serde(default)]
    pub extra: String,
}

impl ColumnInfo {
    pub fn is_auto_increment(&self) -> bool {
        self.extra.to_ascii_lowercase().contains("auto_increment")
    }
}

/// A table and its columns in declaration order.
///
/// Column order is significant: it dictates field declaration order, the
/// generated mapping table, and primary-key selection (first `Primary`
/// column wins).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableInfo {
    pub name: String,
    pub columns: Vec<ColumnInfo>,
}

impl TableInfo {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnInfo>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    /// First column flagged as primary key, if any.
    pub fn primary_key(&self) -> Option<&ColumnInfo> {
        self.columns.iter().find(|c| c.key == ColumnKey::Primary)
    }
}

/// How to treat an artifact that already exists on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Archive the existing artifact into `backup/` before overwriting.
    Save,
    /// Overwrite in place, no backup.
    Overwrite,
}

impl GenerationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Save => "save",
            Self::Overwrite => "overwrite",
        }
    }
}
