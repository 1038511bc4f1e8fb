//! Append-only log file sink

use crate::types::CopydiffError;
use chrono::{DateTime, Local};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Timestamp format used as the line prefix
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Optional log file; every message is appended with a timestamp
///
/// The file is opened, appended to, and closed for each message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Logger {
    path: Option<PathBuf>,
}

impl Logger {
    /// Logger that drops every message
    pub fn disabled() -> Self {
        Self { path: None }
    }

    /// Logger appending to `path` (created on first write)
    pub fn to_file(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    pub fn from_option(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Reject a log path that exists as something other than a regular file
    pub fn validate_path(path: &Path) -> Result<(), CopydiffError> {
        if path.exists() && !path.is_file() {
            return Err(CopydiffError::LogFileNotFile {
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_enabled(&self) -> bool {
        self.path.is_some()
    }

    /// Append one line, trimmed and prefixed with `[YYYY-MM-DD HH:MM:SS] `
    pub fn write(&self, text: &str) -> Result<(), CopydiffError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(format_line(Local::now(), text).as_bytes())?;
        Ok(())
    }
}

fn format_line(now: DateTime<Local>, text: &str) -> String {
    format!("[{}] {}\n", now.format(TIMESTAMP_FORMAT), text.trim())
}
