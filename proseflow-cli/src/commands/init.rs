//! Init command implementation

use crate::error::CliError;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

const CONFIG_TEMPLATE: &str = r#"{
    "author": "Author Name",
    "title": "Working Title",
    "header": null,
    "watermark": null,
    "paragraph_spacing": 1,
    "columns": 72,
    "sources": [
        {"path": "01.txt", "title": null}
    ]
}
"#;

const MAKEFILE_TEMPLATE: &str = "\
TEX := .tex/book.tex

preview: $(TEX)
\tcd .tex && pdflatex book.tex && pdflatex book.tex

$(TEX):
\tproseflow compile $(TEX)

.PHONY: preview $(TEX)
";

/// Arguments for the init command
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory to create for the new project
    #[arg(value_name = "DIR", default_value = "proseflow")]
    pub dir: PathBuf,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> Result<()> {
        log::info!("scaffolding project in {}", self.dir.display());

        if self.dir.exists() {
            return Err(CliError::AlreadyExists(self.dir.display().to_string()).into());
        }
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create {}", self.dir.display()))?;
        fs::write(self.dir.join("config.json"), CONFIG_TEMPLATE)?;
        fs::write(self.dir.join("Makefile"), MAKEFILE_TEMPLATE)?;
        fs::create_dir(self.dir.join(".format"))?;
        fs::create_dir(self.dir.join(".tex"))?;

        println!("✓ Project scaffolded in {}", self.dir.display());
        println!();
        println!("Next steps:");
        println!("1. Edit {}/config.json", self.dir.display());
        println!("2. Write chapters as plain-text files listed under \"sources\"");
        println!("3. Reflow a chapter: proseflow format 01.txt");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn scaffolds_the_project_layout() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("novel");
        let args = InitArgs {
            dir: target.clone(),
        };
        args.execute().unwrap();

        assert!(target.join("config.json").is_file());
        assert!(target.join("Makefile").is_file());
        assert!(target.join(".format").is_dir());
        assert!(target.join(".tex").is_dir());
    }

    #[test]
    fn template_config_parses_and_validates() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("novel");
        InitArgs {
            dir: target.clone(),
        }
        .execute()
        .unwrap();

        let config = crate::config::ProjectConfig::load(&target).unwrap();
        assert_eq!(config.reflow.columns, 72);
        assert_eq!(config.sources.len(), 1);
    }

    #[test]
    fn refuses_to_overwrite_an_existing_directory() {
        let dir = TempDir::new().unwrap();
        let args = InitArgs {
            dir: dir.path().to_path_buf(),
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Already exists"));
    }
}
