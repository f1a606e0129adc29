//! CopyTask - A single planned file copy

use std::fmt;
use std::path::PathBuf;

/// Command to copy one source file to its indexed destination path.
///
/// Tasks are immutable once planned. Plan order is pair iteration order,
/// then the source folder's natural listing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyTask {
    /// Full path of the source file
    pub source: PathBuf,

    /// Full destination path, including the indexed filename
    pub destination: PathBuf,
}

impl CopyTask {
    /// Create a new copy task
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

impl fmt::Display for CopyTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ---> {}",
            self.source.display(),
            self.destination.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_arrow_form() {
        let task = CopyTask::new("/photos/a.jpg", "/frames/hall/00001__a.jpg");
        assert_eq!(
            task.to_string(),
            "/photos/a.jpg ---> /frames/hall/00001__a.jpg"
        );
    }
}
