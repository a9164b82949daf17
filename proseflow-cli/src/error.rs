//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Project configuration file missing
    ConfigNotFound(String),
    /// Project configuration file unreadable or malformed
    ConfigInvalid(String),
    /// Refusing to overwrite an existing path
    AlreadyExists(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigNotFound(path) => {
                write!(f, "Configuration not found: {path} (run inside a project directory)")
            }
            CliError::ConfigInvalid(msg) => write!(f, "Configuration error: {msg}"),
            CliError::AlreadyExists(path) => write!(f, "Already exists: {path}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
