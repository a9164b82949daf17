//! CLI command implementations

use clap::Subcommand;

pub mod compile;
pub mod format;
pub mod init;
pub mod texify;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a new writing project
    Init(init::InitArgs),

    /// Reflow a manuscript file in place to the configured width
    Format(format::FormatArgs),

    /// Convert a formatted manuscript to LaTeX body markup
    Texify(texify::TexifyArgs),

    /// Assemble the full LaTeX document from converted chapters
    Compile(compile::CompileArgs),
}
