//! Project configuration loading
//!
//! A writing project is a directory holding `config.json` next to the
//! manuscript files. Layout fields are shared with the reflow engine;
//! the rest drive document assembly.

use crate::error::CliError;
use anyhow::Result;
use proseflow_core::ReflowConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "config.json";

/// One chapter source: a manuscript path and an optional display title.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ChapterRef {
    /// Path to the converted chapter file, relative to the project root.
    pub path: String,
    /// Chapter title; untitled chapters render with empty braces.
    #[serde(default)]
    pub title: Option<String>,
}

/// Project configuration.
///
/// `sources` is ordered; a JSON `null` entry means "insert a part
/// break here".
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProjectConfig {
    /// Author name for the title page.
    pub author: String,
    /// Work title for the title page.
    pub title: String,
    /// Optional running-header text.
    #[serde(default)]
    pub header: Option<String>,
    /// Optional draft watermark text.
    #[serde(default)]
    pub watermark: Option<String>,
    /// Reflow layout parameters (flattened: `columns`,
    /// `paragraph_spacing`).
    #[serde(flatten)]
    pub reflow: ReflowConfig,
    /// Ordered chapter descriptors; `null` marks a part break.
    #[serde(default)]
    pub sources: Vec<Option<ChapterRef>>,
}

impl ProjectConfig {
    /// Load `config.json` from the given project directory.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        let contents = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                anyhow::Error::new(CliError::ConfigNotFound(path.display().to_string()))
            } else {
                anyhow::Error::new(e)
            }
        })?;
        let config: ProjectConfig = serde_json::from_str(&contents)
            .map_err(|e| CliError::ConfigInvalid(e.to_string()))?;
        config
            .reflow
            .validate()
            .map_err(|e| CliError::ConfigInvalid(e.to_string()))?;
        Ok(config)
    }
}
