//! Proseflow CLI library
//!
//! Command-line interface for the proseflow manuscript toolchain:
//! project scaffolding, in-place reflow, LaTeX conversion, and
//! document assembly.

pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod output;
pub mod vcs;

pub use error::{CliError, CliResult};
