//! Check command report data structures.

use super::output::{Output, Report};

/// Report data from validating the manifest and schema dump.
#[derive(Debug)]
pub struct CheckReport {
    pub project: String,
    pub engine: String,
    /// Number of tables in the schema dump, when it loaded.
    pub table_count: Option<usize>,
    /// Fatal findings; any entry means the check failed.
    pub problems: Vec<String>,
    pub warnings: Vec<String>,
}

impl CheckReport {
    pub fn ok(&self) -> bool {
        self.problems.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("project", &self.project);
        out.key_value("engine", &self.engine);
        if let Some(count) = self.table_count {
            out.key_value("tables in dump", &count.to_string());
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        if self.ok() {
            out.newline();
            out.preformatted("Manifest OK.");
        } else {
            out.newline();
            out.section("Problems");
            for (i, problem) in self.problems.iter().enumerate() {
                out.numbered_item(i + 1, problem);
            }
        }
    }
}
