//! CopyPair - A resolved source/destination folder pairing

use std::path::PathBuf;

/// One enabled source folder feeding one destination folder.
///
/// Pairs are produced by the config resolver and never change during a run.
/// Several pairs may share a destination; the index tracker keeps one
/// counter per distinct destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyPair {
    /// Folder whose direct file entries are candidates for synchronization
    pub source: PathBuf,

    /// Folder that receives indexed copies
    pub destination: PathBuf,
}

impl CopyPair {
    /// Create a new pair
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}
