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
pub struct CheckCommand {
    /// Path to tabula.toml (defaults to ./tabula.toml)
    #[arg(short, long, default_value = "tabula.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();
        let report = ops::check(&manifest);
        report.render(&mut TerminalOutput::new());
        if !report.ok() {
            std::process::exit(1);
        }
        Ok(())
    }
}
