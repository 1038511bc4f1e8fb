//! Error types for copydiff

use std::path::PathBuf;
use thiserror::Error;

/// Error types for copydiff operations
#[derive(Debug, Error)]
pub enum CopydiffError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Target directory does not exist
    #[error("Cannot find target '{}'", path.display())]
    TargetNotFound { path: PathBuf },

    /// Target path exists but is a file (or something else)
    #[error("Target must be a directory: '{}'", path.display())]
    TargetNotDirectory { path: PathBuf },

    /// Log path exists but is not a regular file
    #[error(
        "The specified log file exists but is not a file: '{}'. \
         Provide the full name of the log file, not just the directory name.",
        path.display()
    )]
    LogFileNotFile { path: PathBuf },

    /// `@listfile` reference points nowhere
    #[error("Cannot find source list file: '{}'", path.display())]
    ListFileNotFound { path: PathBuf },

    /// Glob pattern could not be compiled
    #[error("Invalid source pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// A single file copy failed; the run is aborted
    #[error("Failed to copy '{}': {source}", path.display())]
    CopyFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CopydiffError {
    /// Check if this error was raised while validating the run configuration
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            CopydiffError::TargetNotFound { .. }
                | CopydiffError::TargetNotDirectory { .. }
                | CopydiffError::LogFileNotFile { .. }
                | CopydiffError::ListFileNotFound { .. }
                | CopydiffError::InvalidPattern { .. }
        )
    }

    /// Check if this error happened while copying a file
    pub fn is_copy_error(&self) -> bool {
        matches!(self, CopydiffError::CopyFailed { .. })
    }
}
