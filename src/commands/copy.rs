//! Main copy command

use crate::diff::generate_copy_plan;
use crate::executor::{execute_plan, ExecutionEvent, ExecutionStats};
use crate::scanner::{read_list_file, resolve_source, validate_spec};
use crate::types::{CopydiffError, SourceSpec};
use crate::ui::Reporter;
use crate::Config;
use std::io::Write;

/// Totals across every source spec of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub stats: ExecutionStats,
    /// Specs that matched no files
    pub empty_specs: usize,
}

impl RunSummary {
    fn absorb(&mut self, stats: &ExecutionStats) {
        self.stats.total_files += stats.total_files;
        self.stats.same_files += stats.same_files;
        self.stats.copied_files += stats.copied_files;
        self.stats.bytes_copied += stats.bytes_copied;
    }
}

/// Run the copy operation, reporting to stdout
pub fn run(config: Config) -> Result<RunSummary, CopydiffError> {
    let mut reporter = Reporter::new(config.logger());
    run_with_reporter(&config, &mut reporter)
}

/// Run the copy operation with a caller-supplied reporter
///
/// Validation (list file, target, patterns) completes before any file is
/// copied. Fatal errors are appended to the log before being returned.
pub fn run_with_reporter<W: Write>(
    config: &Config,
    reporter: &mut Reporter<W>,
) -> Result<RunSummary, CopydiffError> {
    reporter.log(&crate::app_title())?;

    match run_inner(config, reporter) {
        Ok(summary) => Ok(summary),
        Err(err) => {
            reporter.log(&err.to_string())?;
            Err(err)
        }
    }
}

fn run_inner<W: Write>(
    config: &Config,
    reporter: &mut Reporter<W>,
) -> Result<RunSummary, CopydiffError> {
    let specs = collect_specs(config, reporter)?;

    let mut summary = RunSummary::default();
    for spec in &specs {
        match copy_differing_files(spec, config, reporter)? {
            Some(stats) => summary.absorb(&stats),
            None => summary.empty_specs += 1,
        }
    }

    reporter.summary(&summary.stats, config.dry_run)?;
    Ok(summary)
}

/// Expand the configured source into direct specs and validate everything
fn collect_specs<W: Write>(
    config: &Config,
    reporter: &mut Reporter<W>,
) -> Result<Vec<String>, CopydiffError> {
    let specs = match &config.source {
        SourceSpec::ListFile(path) => {
            reporter.list_file(path)?;
            read_list_file(path)?
        }
        SourceSpec::Direct(raw) => vec![raw.clone()],
    };

    config.validate_target()?;

    for spec in &specs {
        validate_spec(spec)?;
    }

    Ok(specs)
}

/// Copy the files named by one direct spec; `None` when it matched nothing
fn copy_differing_files<W: Write>(
    spec: &str,
    config: &Config,
    reporter: &mut Reporter<W>,
) -> Result<Option<ExecutionStats>, CopydiffError> {
    reporter.start_spec(spec, &config.target_dir)?;

    let sources = resolve_source(spec)?;
    if sources.is_empty() {
        reporter.no_files(spec)?;
        return Ok(None);
    }

    let plan = generate_copy_plan(sources, &config.target_dir)?;

    let mut on_event = |event: &ExecutionEvent<'_>| -> Result<(), CopydiffError> {
        match event {
            ExecutionEvent::Decision { file } => reporter.decision(file),
            ExecutionEvent::Copied { .. } | ExecutionEvent::Complete { .. } => Ok(()),
        }
    };

    let stats = execute_plan(&plan, config.dry_run, &mut on_event)?;
    Ok(Some(stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Logger;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn setup() -> (TempDir, PathBuf, PathBuf) {
        let root = TempDir::new().expect("create root tempdir");
        let source = root.path().join("source");
        let target = root.path().join("target");
        fs::create_dir(&source).expect("create source dir");
        fs::create_dir(&target).expect("create target dir");
        for name in ["file1.txt", "file2.csv", "file3.dat"] {
            fs::write(source.join(name), name.as_bytes()).expect("write source file");
        }
        (root, source, target)
    }

    fn config_for(source: &str, target: &std::path::Path) -> Config {
        Config {
            source: SourceSpec::parse(source),
            target_dir: target.to_path_buf(),
            ..Config::default()
        }
    }

    fn run_captured(config: &Config) -> (Result<RunSummary, CopydiffError>, String) {
        let mut reporter = Reporter::with_output(Vec::new(), config.logger());
        let result = run_with_reporter(config, &mut reporter);
        let output = String::from_utf8(reporter.into_output()).expect("utf8 output");
        (result, output)
    }

    #[test]
    fn test_run_reports_each_decision() {
        let (_root, source, target) = setup();
        let config = config_for(&source.to_string_lossy(), &target);

        let (result, output) = run_captured(&config);
        let summary = result.expect("run should succeed");

        assert_eq!(summary.stats.copied_files, 3);
        assert!(output.contains(&format!("Source: {}", source.display())));
        assert!(output.contains(&format!("Target: {}", target.display())));
        assert_eq!(output.matches("COPY:").count(), 3);
        assert_eq!(output.matches("Same:").count(), 0);
    }

    #[test]
    fn test_run_counts_empty_specs() {
        let (_root, source, target) = setup();
        let config = config_for(&source.join("*.xyz").to_string_lossy(), &target);

        let (result, output) = run_captured(&config);
        let summary = result.expect("run should succeed");

        assert_eq!(summary.empty_specs, 1);
        assert_eq!(summary.stats.total_files, 0);
        assert!(output.contains("No files found matching"));
    }

    #[test]
    fn test_list_file_specs_are_processed_in_order() {
        let (root, source, target) = setup();
        let list = root.path().join("listfile.txt");
        fs::write(
            &list,
            format!(
                "# picked files\n{}\n\n{}\n",
                source.join("file3.dat").display(),
                source.join("file1.txt").display()
            ),
        )
        .expect("write list file");
        let config = config_for(&format!("@{}", list.display()), &target);

        let (result, output) = run_captured(&config);
        let summary = result.expect("run should succeed");

        assert_eq!(summary.stats.copied_files, 2);
        assert!(output.starts_with(&format!("Reading list-file: {}", list.display())));
        let third = output.find("COPY: file3.dat").expect("file3 reported");
        let first = output.find("COPY: file1.txt").expect("file1 reported");
        assert!(third < first);
        assert!(!target.join("file2.csv").exists());
    }

    #[test]
    fn test_missing_target_fails_before_copying() {
        let (root, source, _target) = setup();
        let log_path = root.path().join("run.log");
        let config = Config {
            log_file: Some(log_path.clone()),
            ..config_for(&source.to_string_lossy(), &root.path().join("ImNotHere"))
        };

        let (result, output) = run_captured(&config);

        assert!(matches!(result, Err(CopydiffError::TargetNotFound { .. })));
        assert!(!output.contains("Source:"));
        let log = fs::read_to_string(&log_path).expect("read log");
        assert!(log.contains("Cannot find target"));
    }

    #[test]
    fn test_bad_pattern_in_list_fails_before_copying() {
        let (root, source, target) = setup();
        let list = root.path().join("listfile.txt");
        fs::write(
            &list,
            format!("{}\n{}\n", source.display(), source.join("[oops").display()),
        )
        .expect("write list file");
        let config = config_for(&format!("@{}", list.display()), &target);

        let (result, _output) = run_captured(&config);

        assert!(matches!(result, Err(CopydiffError::InvalidPattern { .. })));
        assert_eq!(fs::read_dir(&target).expect("read target").count(), 0);
    }

    #[test]
    fn test_dry_run_reports_without_copying() {
        let (_root, source, target) = setup();
        let config = Config {
            dry_run: true,
            ..config_for(&source.to_string_lossy(), &target)
        };

        let (result, output) = run_captured(&config);
        let summary = result.expect("dry run should succeed");

        assert_eq!(summary.stats.copied_files, 3);
        assert_eq!(output.matches("COPY:").count(), 3);
        assert!(output.contains("Dry-run mode: no changes were made."));
        assert_eq!(fs::read_dir(&target).expect("read target").count(), 0);
    }

    #[test]
    fn test_log_records_title_and_decisions() {
        let (root, source, target) = setup();
        let log_path = root.path().join("copydiff.log");
        let config = Config {
            log_file: Some(log_path.clone()),
            ..config_for(&source.to_string_lossy(), &target)
        };

        let mut reporter = Reporter::with_output(Vec::new(), Logger::to_file(log_path.clone()));
        run_with_reporter(&config, &mut reporter).expect("run should succeed");

        let log = fs::read_to_string(&log_path).expect("read log");
        assert!(log.lines().next().is_some_and(|l| l.ends_with(&crate::app_title())));
        assert_eq!(log.matches("] COPY: ").count(), 3);
    }
}
