//! Format command implementation

use crate::config::ProjectConfig;
use crate::output;
use anyhow::{Context, Result};
use clap::Args;
use proseflow_core::Reflow;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Arguments for the format command
#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Manuscript file to reflow in place
    #[arg(value_name = "TXT_FILE")]
    pub txt_file: PathBuf,
}

impl FormatArgs {
    /// Execute the format command
    pub fn execute(&self) -> Result<()> {
        let config = ProjectConfig::load(Path::new("."))?;
        log::info!(
            "reflowing {} to {} columns",
            self.txt_file.display(),
            config.reflow.columns
        );
        log::debug!("arguments: {self:?}");

        let file = File::open(&self.txt_file)
            .with_context(|| format!("failed to open {}", self.txt_file.display()))?;
        let reflow = Reflow::new(BufReader::new(file), &config.reflow)?;
        output::atomic_install(
            reflow.map(|item| item.map_err(anyhow::Error::new)),
            &self.txt_file,
        )
    }
}
