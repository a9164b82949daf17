//! Git revision stamping
//!
//! Draft builds embed the commit they were produced from. Any failure
//! here (git missing, not a repository, no commits yet) degrades to
//! "no stamp" — it never fails document assembly.

use std::path::Path;
use std::process::Command;

fn git(root: &Path, args: &[&str]) -> Option<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(root)
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout).ok()
}

/// The current commit id, suffixed with `" (dirty)"` when the work
/// tree has uncommitted changes. `None` when no revision is available.
pub fn revision(root: &Path) -> Option<String> {
    let checksum = git(root, &["rev-parse", "@"])?.trim().to_string();
    let dirty = git(root, &["status", "--porcelain"]).is_some_and(|s| !s.trim().is_empty());
    if dirty {
        log::debug!("work tree is dirty");
        Some(format!("{checksum} (dirty)"))
    } else {
        Some(checksum)
    }
}
