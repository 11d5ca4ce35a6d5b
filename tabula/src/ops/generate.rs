//! Generate operation - run the batch driver over the requested tables.

use std::path::Path;

use eyre::{Context, Result, eyre};
use log::debug;
use tabula_codegen_php::Generator;
use tabula_core::DiskStore;
use tabula_manifest::Manifest;
use tabula_schema::{JsonSource, SchemaSource};

use crate::reports::GenerateReport;

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output directory override; defaults to the manifest's `output`.
    pub output_dir: Option<&'a Path>,
    /// Whether to preview without writing.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(manifest: &Manifest, opts: GenerateOptions) -> Result<GenerateReport> {
    let mut source = open_source(manifest)?;
    let tables = requested_tables(manifest, source.as_mut())?;
    debug!("generating {} tables", tables.len());

    let output_dir = opts.output_dir.unwrap_or(&manifest.project.output);
    let store = DiskStore;
    let generator = Generator::new(&store, output_dir, manifest.project.mode);

    if opts.dry_run {
        let (files, errors) = generator.preview(source.as_mut(), &tables);
        Ok(GenerateReport::Preview { files, errors })
    } else {
        let summary = generator
            .generate(source.as_mut(), &tables)
            .wrap_err("Generation failed")?;
        Ok(GenerateReport::Written {
            project: manifest.project.name.clone(),
            output_dir: output_dir.to_path_buf(),
            summary,
        })
    }
}

/// Open the schema source named by the manifest.
pub fn open_source(manifest: &Manifest) -> Result<Box<dyn SchemaSource>> {
    let dump = manifest
        .schema
        .dump
        .as_ref()
        .ok_or_else(|| eyre!("no schema source configured; set `schema.dump` in tabula.toml"))?;
    let source = JsonSource::from_file(dump).wrap_err("Failed to load schema dump")?;
    Ok(Box::new(source))
}

/// Tables to generate: the manifest's list, or everything the source sees.
pub fn requested_tables(
    manifest: &Manifest,
    source: &mut dyn SchemaSource,
) -> Result<Vec<String>> {
    if manifest.schema.tables.is_empty() {
        Ok(source.table_names()?)
    } else {
        Ok(manifest.schema.tables.clone())
    }
}
