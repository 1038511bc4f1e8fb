//! SourceSpec - User-supplied description of which files to copy

use std::fmt;
use std::path::PathBuf;

/// Prefix marking an indirect list-file reference
pub const LIST_FILE_PREFIX: char = '@';

/// Which files to operate on
///
/// A direct spec is a literal file path, a directory, or a glob pattern; which
/// one is only known once the filesystem is consulted during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    /// Literal path, directory, or glob pattern
    Direct(String),

    /// `@path` reference to a file listing one direct spec per line
    ListFile(PathBuf),
}

impl SourceSpec {
    /// Classify a raw command-line argument
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix(LIST_FILE_PREFIX) {
            Some(rest) => {
                SourceSpec::ListFile(PathBuf::from(rest.trim_start_matches(LIST_FILE_PREFIX)))
            }
            None => SourceSpec::Direct(raw.to_string()),
        }
    }

    pub fn is_list_file(&self) -> bool {
        matches!(self, SourceSpec::ListFile(_))
    }
}

impl fmt::Display for SourceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceSpec::Direct(raw) => f.write_str(raw),
            SourceSpec::ListFile(path) => write!(f, "{}{}", LIST_FILE_PREFIX, path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_direct() {
        assert_eq!(
            SourceSpec::parse("photos/*.jpg"),
            SourceSpec::Direct("photos/*.jpg".to_string())
        );
        assert!(!SourceSpec::parse("photos").is_list_file());
    }

    #[test]
    fn test_parse_list_file() {
        let spec = SourceSpec::parse("@lists/daily.txt");
        assert_eq!(spec, SourceSpec::ListFile(PathBuf::from("lists/daily.txt")));
        assert_eq!(spec.to_string(), "@lists/daily.txt");
    }

    #[test]
    fn test_parse_strips_repeated_prefix() {
        assert_eq!(
            SourceSpec::parse("@@sources.txt"),
            SourceSpec::ListFile(PathBuf::from("sources.txt"))
        );
    }

    #[test]
    fn test_display_direct_is_raw() {
        let spec = SourceSpec::parse("/data/in");
        assert_eq!(spec.to_string(), "/data/in");
    }
}
