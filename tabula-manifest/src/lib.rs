//! Parsing and validation for `tabula.toml` project manifests.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod engine;
mod error;
mod manifest;
mod validate;

pub use engine::Engine;
pub use error::{Error, Result};
pub use manifest::{Manifest, ProjectConfig, SchemaConfig};
