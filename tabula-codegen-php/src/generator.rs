//! Batch driver and backup policy.

use std::path::{Path, PathBuf};

use chrono::Local;
use log::{debug, warn};
use tabula_core::{ArtifactStore, GenerationMode, Version};
use tabula_schema::SchemaSource;

use crate::{
    BatchSummary, ClassFile, GenerateError, GenerationResult, Outcome, ResolvedNames, Result,
};

/// Format for the `@generated` header timestamp.
const HEADER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format for timestamps embedded in backup file names.
const BACKUP_TIME_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// A rendered artifact that has not been written anywhere.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub content: String,
}

/// Drives generation for a batch of tables.
///
/// Tables are processed strictly in order, one at a time: version stepping
/// and the backup decision read the artifact that is about to be replaced,
/// so no table starts before the previous one is fully written. There is
/// no locking between concurrent batches aimed at the same output
/// directory; two simultaneous runs can race on backup naming and version
/// computation.
pub struct Generator<'a> {
    store: &'a dyn ArtifactStore,
    output_dir: &'a Path,
    mode: GenerationMode,
}

impl<'a> Generator<'a> {
    pub fn new(store: &'a dyn ArtifactStore, output_dir: &'a Path, mode: GenerationMode) -> Self {
        Self {
            store,
            output_dir,
            mode,
        }
    }

    /// Generate artifacts for every requested table, in order.
    ///
    /// Per-table failures are recorded in the summary and never abort the
    /// batch; the only fatal error is an unusable output directory.
    pub fn generate(
        &self,
        source: &mut dyn SchemaSource,
        tables: &[String],
    ) -> Result<BatchSummary> {
        self.store
            .ensure_dir(self.output_dir)
            .map_err(|e| GenerateError::OutputUnavailable {
                path: self.output_dir.to_path_buf(),
                source: e,
            })?;

        let mut summary = BatchSummary::default();
        for table in tables {
            summary.record(self.generate_table(source, table));
        }
        Ok(summary)
    }

    /// Render every requested table without touching the filesystem.
    ///
    /// Previews carry the initial version tag; version stepping only
    /// happens against an artifact that is actually being replaced.
    pub fn preview(
        &self,
        source: &mut dyn SchemaSource,
        tables: &[String],
    ) -> (Vec<PreviewFile>, Vec<String>) {
        let mut files = Vec::new();
        let mut errors = Vec::new();
        let timestamp = Local::now().format(HEADER_TIME_FORMAT).to_string();

        for table in tables {
            match source.fetch_table(table) {
                Ok(info) => {
                    let names = ResolvedNames::resolve(&info);
                    let content =
                        ClassFile::new(&info, &names, Version::INITIAL, &timestamp).render();
                    files.push(PreviewFile {
                        path: self.output_dir.join(names.file_name()),
                        content,
                    });
                }
                Err(e) => errors.push(format!("{}: {}", table, e)),
            }
        }
        (files, errors)
    }

    fn generate_table(&self, source: &mut dyn SchemaSource, table: &str) -> GenerationResult {
        match self.try_generate(source, table) {
            Ok((path, backup)) => GenerationResult {
                table: table.to_string(),
                outcome: Outcome::Generated,
                path: Some(path),
                backup,
                error: None,
            },
            Err(e @ GenerateError::BackupFailed { .. }) => {
                warn!("skipping '{}': {}", table, e);
                GenerationResult {
                    table: table.to_string(),
                    outcome: Outcome::Skipped,
                    path: None,
                    backup: None,
                    error: Some(e.to_string()),
                }
            }
            Err(e) => GenerationResult {
                table: table.to_string(),
                outcome: Outcome::Failed,
                path: None,
                backup: None,
                error: Some(e.to_string()),
            },
        }
    }

    /// Process one table end to end. The backup policy runs exactly once
    /// per table and is never retried.
    fn try_generate(
        &self,
        source: &mut dyn SchemaSource,
        table: &str,
    ) -> Result<(PathBuf, Option<PathBuf>)> {
        let info = source.fetch_table(table)?;
        let names = ResolvedNames::resolve(&info);
        let path = self.output_dir.join(names.file_name());
        let now = Local::now();

        let (version, backup) = if self.store.exists(&path) {
            let existing =
                self.store
                    .read(&path)
                    .map_err(|e| GenerateError::ReadFailed {
                        table: table.to_string(),
                        source: e,
                    })?;
            let backup = match self.mode {
                GenerationMode::Overwrite => None,
                GenerationMode::Save => {
                    let stamp = now.format(BACKUP_TIME_FORMAT).to_string();
                    let header = backup_header(&path, &stamp);
                    let backup_path = self
                        .store
                        .write_backup(&path, &header, &stamp)
                        .map_err(|e| GenerateError::BackupFailed {
                            table: table.to_string(),
                            source: e,
                        })?;
                    Some(backup_path)
                }
            };
            (Version::from_artifact(&existing).next(), backup)
        } else {
            // No prior artifact, so nothing to archive in either mode.
            (Version::INITIAL, None)
        };

        let timestamp = now.format(HEADER_TIME_FORMAT).to_string();
        let content = ClassFile::new(&info, &names, version, &timestamp).render();
        self.store
            .write(&path, &content)
            .map_err(|e| GenerateError::WriteFailed {
                table: table.to_string(),
                source: e,
            })?;

        debug!("generated {} at version {}", path.display(), version);
        Ok((path, backup))
    }
}

/// Comment block prepended to archived artifact content.
fn backup_header(original: &Path, timestamp: &str) -> String {
    let name = original
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("artifact");
    format!(
        "/*\n * Backup of {} taken {} before regeneration.\n * The original content follows unchanged.\n */",
        name, timestamp
    )
}
