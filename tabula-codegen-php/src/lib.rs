//! PHP code generator for tabula.
//!
//! Turns fetched table metadata into versioned PHP data-access classes:
//! one class per table, carrying field declarations, a column-to-setter
//! mapping table, accessors, and prepared-statement persistence methods.
//!
//! # Usage
//!
//! ```ignore
//! use tabula_codegen_php::Generator;
//! use tabula_core::{DiskStore, GenerationMode};
//! use tabula_schema::JsonSource;
//! use std::path::Path;
//!
//! let mut source = JsonSource::from_file("schema.json")?;
//! let generator = Generator::new(&DiskStore, Path::new("generated"), GenerationMode::Save);
//! let summary = generator.generate(&mut source, &["rv_users".to_string()])?;
//! ```

mod builder;
mod class_file;
mod error;
mod generator;
mod naming;
mod summary;
mod type_mapper;

pub use builder::CodeBuilder;
pub use class_file::ClassFile;
pub use error::{GenerateError, Result};
pub use generator::{Generator, PreviewFile};
pub use naming::{ResolvedColumn, ResolvedNames};
pub use summary::{BatchSummary, GenerationResult, Outcome};
pub use type_mapper::PhpType;
