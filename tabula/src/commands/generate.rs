use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tabula_manifest::Manifest;

use crate::{
    commands::UnwrapOrExit,
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to tabula.toml (defaults to ./tabula.toml)
    #[arg(short, long, default_value = "tabula.toml")]
    pub config: PathBuf,

    /// Output directory (overrides the manifest's `output`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated classes without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();
        let report = ops::generate(
            &manifest,
            GenerateOptions {
                output_dir: self.output.as_deref(),
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
