//! Configuration management

use crate::types::{CopydiffError, SourceSpec};
use crate::ui::Logger;
use clap::Parser;
use std::path::PathBuf;

/// Copy only files that have different sizes or modification times, or are not present in the
/// target directory.
///
/// This will overwrite a newer file in the target directory with an older file from the source
/// directory (rollback).
#[derive(Debug, Parser)]
#[command(name = "copydiff", version)]
pub struct Cli {
    /// Source directory or file specification. This can be the path for a single file, or
    /// include a wildcard ('source/path/*.txt'). If a directory is given, all files in it are
    /// included but sub-directories are not. Prefix with '@' to read specs from a list file
    /// (one per line).
    pub source_spec: String,

    /// Directory to update with any changed files
    pub target_dir: PathBuf,

    /// Log file to create (or append to, if it exists)
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Show what would be copied without copying anything
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,
}

/// Validated run configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// What to copy
    pub source: SourceSpec,

    /// Directory receiving the changed files
    pub target_dir: PathBuf,

    /// Optional append-only log
    pub log_file: Option<PathBuf>,

    /// Dry run (report decisions, don't copy)
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceSpec::Direct(String::new()),
            target_dir: PathBuf::new(),
            log_file: None,
            dry_run: false,
        }
    }
}

impl TryFrom<Cli> for Config {
    type Error = CopydiffError;

    /// Convert CLI arguments, rejecting a log path that is not a file
    ///
    /// This runs before anything else so a bad log path is never written to.
    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if let Some(log_file) = &cli.log_file {
            Logger::validate_path(log_file)?;
        }

        Ok(Self {
            source: SourceSpec::parse(&cli.source_spec),
            target_dir: cli.target_dir,
            log_file: cli.log_file,
            dry_run: cli.dry_run,
        })
    }
}

impl Config {
    /// Ensure the target exists and is a directory
    pub fn validate_target(&self) -> Result<(), CopydiffError> {
        if !self.target_dir.exists() {
            return Err(CopydiffError::TargetNotFound {
                path: self.target_dir.clone(),
            });
        }

        if !self.target_dir.is_dir() {
            return Err(CopydiffError::TargetNotDirectory {
                path: self.target_dir.clone(),
            });
        }

        Ok(())
    }

    /// Logger for this run
    pub fn logger(&self) -> Logger {
        Logger::from_option(self.log_file.clone())
    }
}
