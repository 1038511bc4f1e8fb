//! FileRecord - A source or target file considered for copying

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Represents a single file considered by the copier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Basename, used to pair a source file with its target twin
    pub name: OsString,

    /// Absolute path on disk
    pub path: PathBuf,

    /// File size in bytes
    pub size: u64,

    /// Last modification time at full filesystem precision
    pub mtime: SystemTime,
}

impl FileRecord {
    /// Create a new FileRecord with the given parameters
    ///
    /// The name is taken from the last component of `path`.
    pub fn new(path: PathBuf, size: u64, mtime: SystemTime) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        Self {
            name,
            path,
            size,
            mtime,
        }
    }

    /// Stat `path` and build a record from its metadata (symlinks are followed)
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let metadata = fs::metadata(path)?;
        Ok(Self::new(
            path.to_path_buf(),
            metadata.len(),
            metadata.modified()?,
        ))
    }

    /// Stat `path` if it exists; `Ok(None)` when nothing is there
    pub fn probe(path: &Path) -> io::Result<Option<Self>> {
        match Self::from_path(path) {
            Ok(record) => Ok(Some(record)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Modification time rounded down to whole seconds since the Unix epoch
    pub fn mtime_seconds(&self) -> i64 {
        filetime::FileTime::from_system_time(self.mtime).unix_seconds()
    }

    /// Name for display in report lines
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }
}
