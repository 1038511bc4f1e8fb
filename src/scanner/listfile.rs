//! List-file parsing for `@path` source specs

use crate::types::CopydiffError;
use std::fs;
use std::path::Path;

/// Marks a comment line inside a list file
const COMMENT_PREFIX: char = '#';

/// Read a list file and return the direct specs it names, in file order
///
/// Lines are trimmed. Blank lines and lines starting with `#` are ignored.
/// Entries are never interpreted as further `@` references.
pub fn read_list_file(path: &Path) -> Result<Vec<String>, CopydiffError> {
    if !path.is_file() {
        return Err(CopydiffError::ListFileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    Ok(parse_list(&content))
}

fn parse_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_PREFIX))
        .map(str::to_string)
        .collect()
}
