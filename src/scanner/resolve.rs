//! Source resolution: turn a direct spec into the files it names

use crate::types::{CopydiffError, FileRecord};
use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve a direct source spec into file records
///
/// Resolution order:
/// 1. An existing regular file is the only result.
/// 2. An existing directory yields the regular files directly inside it.
///    Sub-directories are skipped; there is no recursion.
/// 3. Anything else is a glob. The last path component is the pattern and the
///    parent directory is matched literally.
///
/// The result is sorted by name and free of duplicates. An empty result is not
/// an error.
///
/// # Errors
/// * Unreadable entries inside a directory are skipped with a warning
/// * `CopydiffError::InvalidPattern` if the glob cannot be compiled
/// * Other IO errors (e.g. the directory itself cannot be listed) are propagated
pub fn resolve_source(spec: &str) -> Result<Vec<FileRecord>, CopydiffError> {
    let spec_path = Path::new(spec);

    let candidates = match fs::metadata(spec_path) {
        Ok(metadata) if metadata.is_file() => vec![spec_path.to_path_buf()],
        Ok(metadata) if metadata.is_dir() => list_directory(spec_path)?,
        _ => match glob_pattern(spec)? {
            Some(pattern) => match_glob(&pattern)?,
            None => Vec::new(),
        },
    };

    let mut records = Vec::with_capacity(candidates.len());
    for path in candidates {
        let absolute = std::path::absolute(&path)?;
        match FileRecord::from_path(&absolute) {
            Ok(record) => records.push(record),
            Err(e) => {
                eprintln!(
                    "Warning: Failed to read metadata for {}: {}. File will be skipped.",
                    absolute.display(),
                    e
                );
            }
        }
    }

    records.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.path.cmp(&b.path)));
    records.dedup_by(|a, b| a.path == b.path);

    Ok(records)
}

/// Check that a direct spec can be resolved without a pattern error
///
/// Existing files and directories are always valid. Used during validation so
/// bad patterns surface before anything is copied.
pub fn validate_spec(spec: &str) -> Result<(), CopydiffError> {
    if Path::new(spec).exists() {
        return Ok(());
    }
    glob_pattern(spec).map(|_| ())
}

fn list_directory(dir: &Path) -> Result<Vec<PathBuf>, CopydiffError> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!(
                    "Warning: Error while listing {}: {}. Listing will continue with remaining entries.",
                    dir.display(),
                    e
                );
                continue;
            }
        };

        // Follow symlinks: a link to a regular file counts as a file.
        if is_regular_file(&entry.path()) {
            files.push(entry.path());
        }
    }

    Ok(files)
}

/// Build the full glob pattern for a spec, escaping the literal parent
///
/// Returns `None` when the spec has no final component to match (e.g. `..`).
fn glob_pattern(spec: &str) -> Result<Option<String>, CopydiffError> {
    let spec_path = Path::new(spec);
    let name = match spec_path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => return Ok(None),
    };

    Pattern::new(&name).map_err(|e| CopydiffError::InvalidPattern {
        pattern: spec.to_string(),
        message: e.to_string(),
    })?;

    let full = match spec_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            let escaped_parent = Pattern::escape(&parent.to_string_lossy());
            PathBuf::from(escaped_parent)
                .join(&name)
                .to_string_lossy()
                .into_owned()
        }
        _ => name,
    };

    Ok(Some(full))
}

fn match_glob(pattern: &str) -> Result<Vec<PathBuf>, CopydiffError> {
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    let paths = glob::glob_with(pattern, options).map_err(|e| CopydiffError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    let mut files = Vec::new();
    for result in paths {
        match result {
            Ok(path) if is_regular_file(&path) => files.push(path),
            Ok(_) => {}
            Err(e) => {
                eprintln!(
                    "Warning: Error while matching '{}': {}. Matching will continue.",
                    pattern, e
                );
            }
        }
    }

    Ok(files)
}

fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}
