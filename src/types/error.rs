//! Error types for sequin

use std::path::PathBuf;
use thiserror::Error;

/// Error types for sequin operations
#[derive(Debug, Error)]
pub enum SequinError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or unusable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A configured source or destination folder does not exist
    #[error("Missing folder: {path}")]
    MissingFolder { path: PathBuf },
}

impl SequinError {
    /// Check if this error was raised before any filesystem access
    pub fn is_config_error(&self) -> bool {
        matches!(self, SequinError::Config(_))
    }

    /// Check if this error names a missing folder
    pub fn is_missing_folder(&self) -> bool {
        matches!(self, SequinError::MissingFolder { .. })
    }
}
