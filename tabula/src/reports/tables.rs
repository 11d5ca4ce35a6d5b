//! Tables command report data structures.

use super::output::{Output, Report};

/// Report data from listing the schema source.
#[derive(Debug)]
pub struct TablesReport {
    pub project: String,
    pub engine: String,
    pub tables: Vec<String>,
    /// Catalog query a live driver would run, when requested.
    pub catalog_query: Option<String>,
}

impl Report for TablesReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("project", &self.project);
        out.key_value("engine", &self.engine);
        out.newline();

        if self.tables.is_empty() {
            out.preformatted("No tables visible to the schema source.");
        } else {
            out.section(&format!("Tables ({})", self.tables.len()));
            for table in &self.tables {
                out.list_item(table);
            }
        }

        if let Some(query) = &self.catalog_query {
            out.newline();
            out.section("Catalog query");
            out.preformatted(query);
        }
    }
}
