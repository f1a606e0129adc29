//! Directory listing and folder validation
//!
//! The engine only ever looks at a folder's direct children; there is no
//! recursive walking. Listing order is whatever the OS returns, and the
//! planner preserves it.

use crate::types::{CopyPair, SequinError};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// List the names of all direct entries in a folder, files and subfolders
/// alike. Hidden dot-entries are skipped.
///
/// Used by the index tracker, which only needs entry names: a subfolder
/// carrying the managed prefix reserves its index just like a file.
pub fn list_entry_names(folder: &Path) -> Result<Vec<String>, SequinError> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(folder)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        names.push(name);
    }
    Ok(names)
}

/// List the names of the direct file entries in a source folder.
///
/// Subfolders and hidden dot-files are skipped. Entries whose type cannot be
/// determined are skipped with a warning rather than aborting the listing.
pub fn list_source_files(folder: &Path) -> Result<Vec<String>, SequinError> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(folder)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        let file_type = match entry.file_type() {
            Ok(ft) => ft,
            Err(e) => {
                eprintln!(
                    "Warning: Failed to read file type for {}: {}. Entry will be skipped.",
                    entry.path().display(),
                    e
                );
                continue;
            }
        };
        if !file_type.is_file() {
            continue;
        }
        names.push(name);
    }
    Ok(names)
}

/// Verify that every folder referenced by any pair is a directory.
///
/// Folders are de-duplicated and checked in first-reference order; the run
/// aborts on the first missing folder, before any planning or copying.
pub fn validate_folders(pairs: &[CopyPair]) -> Result<(), SequinError> {
    let mut seen: HashSet<&Path> = HashSet::new();
    for folder in pairs
        .iter()
        .flat_map(|pair| [pair.source.as_path(), pair.destination.as_path()])
    {
        if !seen.insert(folder) {
            continue;
        }
        if !folder.is_dir() {
            return Err(SequinError::MissingFolder {
                path: PathBuf::from(folder),
            });
        }
    }
    Ok(())
}
