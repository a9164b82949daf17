//! Engine error types

use thiserror::Error;

/// Errors produced by the reflow engine.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O failure while reading the input stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration rejected by validation.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
