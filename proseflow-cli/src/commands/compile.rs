//! Compile command implementation

use crate::config::ProjectConfig;
use crate::{document, output, vcs};
use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

/// Arguments for the compile command
#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Document file to write
    #[arg(value_name = "TEX_FILE")]
    pub tex_file: PathBuf,
}

impl CompileArgs {
    /// Execute the compile command
    pub fn execute(&self) -> Result<()> {
        let root = Path::new(".");
        let config = ProjectConfig::load(root)?;
        log::info!("assembling {}", self.tex_file.display());
        log::debug!("arguments: {self:?}");

        let revision = vcs::revision(root);
        if revision.is_none() {
            log::info!("no git revision available, omitting stamp");
        }
        let lines = document::assemble(&config, root, revision.as_deref())?;
        output::atomic_install(lines.into_iter().map(Ok), &self.tex_file)
    }
}
