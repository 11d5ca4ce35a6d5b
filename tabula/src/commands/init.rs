use std::{fs, path::PathBuf, str::FromStr};

use clap::Args;
use dialoguer::{Confirm, theme::ColorfulTheme};
use eyre::{Context, Result, eyre};
use tabula_manifest::Engine;

#[derive(Args)]
pub struct InitCommand {
    /// Project name (defaults to the current directory name)
    pub name: Option<String>,

    /// Database engine (mysql or postgres)
    #[arg(short, long, default_value = "mysql")]
    pub engine: String,

    /// Where to write the manifest
    #[arg(short, long, default_value = "tabula.toml")]
    pub path: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let engine = Engine::from_str(&self.engine).map_err(|e| eyre!(e))?;
        let name = match &self.name {
            Some(name) => name.clone(),
            None => current_dir_name()?,
        };

        if self.path.exists() {
            let overwrite = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(format!(
                    "{} already exists. Overwrite?",
                    self.path.display()
                ))
                .default(false)
                .interact()
                .wrap_err("Failed to read confirmation")?;
            if !overwrite {
                println!("Aborted.");
                return Ok(());
            }
        }

        fs::write(&self.path, starter_manifest(&name, engine))
            .wrap_err_with(|| format!("Failed to write {}", self.path.display()))?;

        println!("Created {}", self.path.display());
        println!("Next: export a schema dump to schema.json, then run 'tabula generate'.");
        Ok(())
    }
}

fn current_dir_name() -> Result<String> {
    let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;
    cwd.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| eyre!("Current directory has no valid name"))
}

fn starter_manifest(name: &str, engine: Engine) -> String {
    format!(
        r#"[project]
name = "{}"
engine = "{}"
output = "generated"
mode = "save"

[schema]
dump = "schema.json"
# tables = ["rv_users"]
"#,
        name, engine
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_manifest_parses() {
        let content = starter_manifest("crm", Engine::Mysql);
        let manifest: tabula_manifest::Manifest = content.parse().unwrap();
        assert_eq!(manifest.project.name, "crm");
        assert_eq!(manifest.project.engine, Engine::Mysql);
        assert_eq!(manifest.schema.dump, Some(PathBuf::from("schema.json")));
    }
}
