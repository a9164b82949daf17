//! Texify command implementation

use crate::output;
use anyhow::{Context, Result};
use clap::Args;
use proseflow_core::tex;
use std::fs;
use std::path::PathBuf;

/// Arguments for the texify command
#[derive(Debug, Args)]
pub struct TexifyArgs {
    /// Formatted manuscript to convert
    #[arg(value_name = "TXT_FILE")]
    pub txt_file: PathBuf,

    /// LaTeX file to write
    #[arg(value_name = "TEX_FILE")]
    pub tex_file: PathBuf,
}

impl TexifyArgs {
    /// Execute the texify command
    pub fn execute(&self) -> Result<()> {
        log::info!(
            "converting {} -> {}",
            self.txt_file.display(),
            self.tex_file.display()
        );
        log::debug!("arguments: {self:?}");

        let text = fs::read_to_string(&self.txt_file)
            .with_context(|| format!("failed to read {}", self.txt_file.display()))?;
        let converted = tex::convert(&text);
        output::atomic_install([Ok(converted)], &self.tex_file)
    }
}
