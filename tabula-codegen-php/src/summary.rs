//! Batch result data structures.

use std::path::PathBuf;

/// Outcome of processing one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Artifact written (fresh or regenerated).
    Generated,
    /// Nothing written; typically a failed backup left the existing
    /// artifact untouched.
    Skipped,
    /// Schema fetch or artifact write failed.
    Failed,
}

/// Per-table generation record.
#[derive(Debug)]
pub struct GenerationResult {
    pub table: String,
    pub outcome: Outcome,
    /// Written artifact path, when one was produced.
    pub path: Option<PathBuf>,
    /// Backup path, when Save mode archived a prior artifact.
    pub backup: Option<PathBuf>,
    pub error: Option<String>,
}

/// Aggregated result of one batch invocation.
///
/// Created once per batch, reported, then discarded.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub generated: usize,
    pub skipped: usize,
    pub backed_up: usize,
    pub failed: usize,
    /// Per-table error strings, in batch order.
    pub errors: Vec<String>,
    /// Written artifact paths, in batch order.
    pub written: Vec<PathBuf>,
    /// Per-table records, in batch order.
    pub results: Vec<GenerationResult>,
}

impl BatchSummary {
    pub fn record(&mut self, result: GenerationResult) {
        match result.outcome {
            Outcome::Generated => self.generated += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Failed => self.failed += 1,
        }
        if result.backup.is_some() {
            self.backed_up += 1;
        }
        if let Some(path) = &result.path {
            self.written.push(path.clone());
        }
        if let Some(error) = &result.error {
            self.errors.push(format!("{}: {}", result.table, error));
        }
        self.results.push(result);
    }

    /// Number of tables processed.
    pub fn total(&self) -> usize {
        self.results.len()
    }
}
