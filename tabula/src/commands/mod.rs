mod check;
mod completions;
mod generate;
mod init;
mod tables;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
use tables::TablesCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for tabula_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "tabula")]
#[command(version)]
#[command(about = "Generate versioned PHP data-access classes from database schemas")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Tables(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new tabula project manifest
    Init(InitCommand),

    /// Generate data-access classes from the schema source
    Generate(GenerateCommand),

    /// List the tables the schema source can see
    Tables(TablesCommand),

    /// Validate tabula.toml and the schema dump without generating code
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
