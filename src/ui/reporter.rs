//! Console reporting mirrored to the log file

use crate::diff::PlannedFile;
use crate::executor::ExecutionStats;
use crate::types::CopydiffError;
use crate::ui::Logger;
use console::style;
use indicatif::HumanBytes;
use std::io::{self, Stdout, Write};
use std::path::Path;

/// Writes report lines to an output stream and appends them to the log
pub struct Reporter<W: Write = Stdout> {
    out: W,
    logger: Logger,
}

impl Reporter<Stdout> {
    /// Reporter printing to stdout
    pub fn new(logger: Logger) -> Self {
        Self::with_output(io::stdout(), logger)
    }
}

impl<W: Write> Reporter<W> {
    pub fn with_output(out: W, logger: Logger) -> Self {
        Self { out, logger }
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Print a line and log it
    pub fn say(&mut self, text: &str) -> Result<(), CopydiffError> {
        writeln!(self.out, "{}", text)?;
        self.logger.write(text)
    }

    /// Print a line to stderr and log it
    pub fn complain(&mut self, text: &str) -> Result<(), CopydiffError> {
        eprintln!("{}", style(text).red().for_stderr());
        self.logger.write(text)
    }

    /// Record a line in the log file only
    pub fn log(&self, text: &str) -> Result<(), CopydiffError> {
        self.logger.write(text)
    }

    pub fn list_file(&mut self, path: &Path) -> Result<(), CopydiffError> {
        self.say(&format!("Reading list-file: {}", path.display()))
    }

    /// Header printed before each source spec is processed
    pub fn start_spec(&mut self, spec: &str, target_dir: &Path) -> Result<(), CopydiffError> {
        self.say(&format!("Source: {}", spec))?;
        self.say(&format!("Target: {}", target_dir.display()))
    }

    pub fn no_files(&mut self, spec: &str) -> Result<(), CopydiffError> {
        self.say(&format_no_files(spec))
    }

    pub fn decision(&mut self, file: &PlannedFile) -> Result<(), CopydiffError> {
        self.say(&format_decision(file))
    }

    pub fn summary(&mut self, stats: &ExecutionStats, dry_run: bool) -> Result<(), CopydiffError> {
        self.say(&format_summary(stats))?;
        if dry_run {
            writeln!(
                self.out,
                "{}",
                style("Dry-run mode: no changes were made.").yellow()
            )?;
            self.log("Dry-run mode: no changes were made.")?;
        }
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

fn format_no_files(spec: &str) -> String {
    format!("No files found matching '{}'", spec)
}

fn format_decision(file: &PlannedFile) -> String {
    format!(
        "  {}: {}",
        file.decision.label(),
        file.source.display_name()
    )
}

fn format_summary(stats: &ExecutionStats) -> String {
    format!(
        "Copied {} file(s), {} unchanged | {} transferred",
        stats.copied_files,
        stats.same_files,
        HumanBytes(stats.bytes_copied)
    )
}
