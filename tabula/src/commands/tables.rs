use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tabula_manifest::Manifest;

use crate::{
    commands::UnwrapOrExit,
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct TablesCommand {
    /// Path to tabula.toml (defaults to ./tabula.toml)
    #[arg(short, long, default_value = "tabula.toml")]
    pub config: PathBuf,

    /// Also print the catalog query a live driver would run
    #[arg(long)]
    pub show_query: bool,
}

impl TablesCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();
        let report = ops::tables(&manifest, self.show_query)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
