//! Atomic file installation
//!
//! Output is streamed to a temporary file in the destination
//! directory and renamed over the target only after every chunk
//! succeeds, so no partial output is ever observable at the final
//! path.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Stream `chunks` into `path`, installing atomically.
///
/// The first failing chunk aborts the write and leaves the target
/// untouched; errors propagate unmodified and nothing is retried.
pub fn atomic_install<I>(chunks: I, path: &Path) -> Result<()>
where
    I: IntoIterator<Item = Result<String>>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    for chunk in chunks {
        temp.write_all(chunk?.as_bytes())?;
    }
    temp.persist(path)
        .with_context(|| format!("failed to install {}", path.display()))?;
    Ok(())
}
