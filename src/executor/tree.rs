//! Whole-tree copy variant
//!
//! Used for moving complete folders (e.g. an album) rather than individual
//! indexed files. Unlike the per-file path, an existing destination is a
//! reported skip, not an error: a stale destination folder from an earlier
//! run must not abort the rest of the batch.

use crate::executor::copy_file;
use crate::types::SequinError;
use std::fs;
use std::path::Path;

/// Outcome of a tree copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeOutcome {
    /// Destination was created and the tree copied
    Copied,

    /// Destination already existed; nothing was touched
    SkippedExisting,
}

/// Recursively copy the directory `src` to the path `dest`.
///
/// If `dest` already exists (file or folder), the copy is skipped, a
/// diagnostic line is written to stderr, and `Ok(SkippedExisting)` is
/// returned. Other I/O failures propagate.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<TreeOutcome, SequinError> {
    if dest.exists() {
        eprintln!("Skipped {}", dest.display());
        return Ok(TreeOutcome::SkippedExisting);
    }
    copy_tree_inner(src, dest)?;
    Ok(TreeOutcome::Copied)
}

fn copy_tree_inner(src: &Path, dest: &Path) -> Result<(), SequinError> {
    fs::create_dir_all(dest)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_tree_inner(&entry.path(), &target)?;
        } else {
            copy_file(&entry.path(), &target)?;
        }
    }
    Ok(())
}
