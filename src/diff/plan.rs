//! Copy plan generation

use crate::diff::compare_files;
use crate::types::{CopyDecision, CopydiffError, FileRecord};
use std::path::{Path, PathBuf};

/// A source file paired with the decision made for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub source: FileRecord,
    pub target: PathBuf,
    pub decision: CopyDecision,
}

/// Decision counters for a plan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanStats {
    pub copy_count: usize,
    pub same_count: usize,
    /// Bytes that will be written by the Copy decisions
    pub total_bytes: u64,
}

/// Ordered list of per-file decisions for one source spec
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyPlan {
    pub files: Vec<PlannedFile>,
    pub stats: PlanStats,
}

impl CopyPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a decision and update the counters
    pub fn add(&mut self, planned: PlannedFile) {
        match planned.decision {
            CopyDecision::Copy => {
                self.stats.copy_count += 1;
                self.stats.total_bytes += planned.source.size;
            }
            CopyDecision::Same => self.stats.same_count += 1,
        }
        self.files.push(planned);
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}

/// Decide `Same` or `Copy` for every source against `<target_dir>/<name>`
///
/// Sources keep their order, so a sorted input gives a sorted plan.
///
/// # Example
/// ```no_run
/// use copydiff::diff::generate_copy_plan;
/// use copydiff::scanner::resolve_source;
/// use std::path::Path;
///
/// let sources = resolve_source("photos/*.jpg")?;
/// let plan = generate_copy_plan(sources, Path::new("backup"))?;
/// println!("{} to copy", plan.stats.copy_count);
/// # Ok::<(), copydiff::CopydiffError>(())
/// ```
pub fn generate_copy_plan(
    sources: Vec<FileRecord>,
    target_dir: &Path,
) -> Result<CopyPlan, CopydiffError> {
    let mut plan = CopyPlan::new();

    for source in sources {
        let target = target_dir.join(&source.name);
        let existing = FileRecord::probe(&target)?;
        let decision = compare_files(&source, existing.as_ref());
        plan.add(PlannedFile {
            source,
            target,
            decision,
        });
    }

    Ok(plan)
}
