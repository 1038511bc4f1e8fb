//! Executor module for file operations

pub mod copy;

use crate::diff::{CopyPlan, PlannedFile};
use crate::types::{CopyDecision, CopydiffError};

pub use copy::copy_file_preserving_times;

/// Execution statistics for one plan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutionStats {
    /// Number of files in the input plan.
    pub total_files: usize,
    /// Files left alone because the target twin is the same.
    pub same_files: usize,
    /// Files copied (or that would be copied, in dry-run mode).
    pub copied_files: usize,
    /// Aggregate copied bytes.
    pub bytes_copied: u64,
}

/// Events emitted while executing a plan.
#[derive(Debug)]
pub enum ExecutionEvent<'a> {
    /// A decision is about to be acted on.
    Decision { file: &'a PlannedFile },
    /// A file was copied to its target.
    Copied { file: &'a PlannedFile, bytes: u64 },
    /// All files were handled.
    Complete { stats: ExecutionStats },
}

/// Callback receiving execution events. An error from the callback stops the run.
pub type ExecutionCallback<'c> = dyn FnMut(&ExecutionEvent<'_>) -> Result<(), CopydiffError> + 'c;

/// Execute a copy plan
///
/// Files are handled in plan order. The first copy failure aborts the run and
/// is returned; files after it are not touched. With `dry_run` set, decisions
/// are reported but nothing is written.
pub fn execute_plan(
    plan: &CopyPlan,
    dry_run: bool,
    on_event: &mut ExecutionCallback<'_>,
) -> Result<ExecutionStats, CopydiffError> {
    let mut stats = ExecutionStats {
        total_files: plan.len(),
        ..Default::default()
    };

    for file in &plan.files {
        on_event(&ExecutionEvent::Decision { file })?;

        match file.decision {
            CopyDecision::Same => stats.same_files += 1,
            CopyDecision::Copy => {
                let bytes = if dry_run {
                    file.source.size
                } else {
                    let bytes = copy_file_preserving_times(&file.source.path, &file.target)?;
                    on_event(&ExecutionEvent::Copied { file, bytes })?;
                    bytes
                };
                stats.copied_files += 1;
                stats.bytes_copied += bytes;
            }
        }
    }

    on_event(&ExecutionEvent::Complete { stats })?;

    Ok(stats)
}
