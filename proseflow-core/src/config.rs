//! Reflow engine configuration

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Layout parameters for paragraph reflow.
///
/// Created once by the caller, passed by reference into the engine,
/// and never mutated by it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReflowConfig {
    /// Target output line width, in characters.
    pub columns: usize,

    /// Number of blank lines inserted between paragraphs in output.
    pub paragraph_spacing: usize,
}

impl Default for ReflowConfig {
    fn default() -> Self {
        Self {
            columns: 72,
            paragraph_spacing: 1,
        }
    }
}

impl ReflowConfig {
    /// Reject configurations the line packer cannot make progress with.
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 {
            return Err(Error::Config("columns must be positive".to_string()));
        }
        Ok(())
    }
}
