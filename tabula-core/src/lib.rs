//! Core types and utilities for the tabula class generator.
//!
//! This crate provides the schema data model, identifier transforms, and
//! version tracking shared across the tabula workspace.

mod file;
mod naming;
mod types;
mod version;

// Artifact storage
pub use file::{ArtifactStore, BACKUP_DIR, DiskStore, backup_path};
// Identifier transforms
pub use naming::{strip_table_prefix, to_camel_case, to_pascal_case};
// Schema data model
pub use types::{ColumnInfo, ColumnKey, GenerationMode, TableInfo};
pub use version::Version;
