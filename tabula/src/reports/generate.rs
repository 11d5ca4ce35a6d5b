//! Generate command report data structures.

use std::path::PathBuf;

use tabula_codegen_php::{BatchSummary, PreviewFile};

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub enum GenerateReport {
    /// Dry run: rendered classes that were not written anywhere.
    Preview {
        files: Vec<PreviewFile>,
        errors: Vec<String>,
    },
    /// Real run: the batch summary.
    Written {
        project: String,
        output_dir: PathBuf,
        summary: BatchSummary,
    },
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match self {
            Self::Preview { files, errors } => {
                for file in files {
                    out.divider(&file.path.display().to_string());
                    out.preformatted(&file.content);
                }
                out.divider("Summary");
                out.preformatted(&format!("{} classes would be generated", files.len()));
                for error in errors {
                    out.warning(error);
                }
            }
            Self::Written {
                project,
                output_dir,
                summary,
            } => {
                out.title(project);
                out.newline();

                if summary.written.is_empty() {
                    out.preformatted("Nothing generated.");
                } else {
                    out.section(&format!("Classes ({})", output_dir.display()));
                    for path in &summary.written {
                        out.added_item(&path.display().to_string());
                    }
                }

                let backups: Vec<_> = summary
                    .results
                    .iter()
                    .filter_map(|r| r.backup.as_ref())
                    .collect();
                if !backups.is_empty() {
                    out.newline();
                    out.section("Backups");
                    for path in backups {
                        out.list_item(&path.display().to_string());
                    }
                }

                out.newline();
                out.key_value("generated", &summary.generated.to_string());
                out.key_value("skipped", &summary.skipped.to_string());
                out.key_value("backed up", &summary.backed_up.to_string());
                if summary.failed > 0 {
                    out.key_value("failed", &summary.failed.to_string());
                }

                if !summary.errors.is_empty() {
                    out.newline();
                    out.section("Errors");
                    for (i, error) in summary.errors.iter().enumerate() {
                        out.numbered_item(i + 1, error);
                    }
                }
            }
        }
    }
}
