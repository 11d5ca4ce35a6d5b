//! Report data structures for commands.
//!
//! Commands build reports from operation results, then render them to an
//! Output target; data collection stays separate from formatting.

mod check;
mod generate;
mod output;
mod tables;

pub use check::CheckReport;
pub use generate::GenerateReport;
pub use output::{Output, Report, TerminalOutput};
pub use tables::TablesReport;
