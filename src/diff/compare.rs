//! File comparison logic

use crate::types::{CopyDecision, FileRecord};

/// Compare a source file with its same-named target twin
///
/// The target is `Same` only when it exists, has the same size, and has the
/// same modification time once both are truncated to whole seconds:
///
/// 1. **Missing target**: nothing to compare against → Copy
/// 2. **Size mismatch**: files are definitely different → Copy
/// 3. **Whole-second mtime mismatch** in either direction → Copy. An older
///    source still wins, which is what makes rollback work.
/// 4. Otherwise → Same
///
/// Sub-second precision is dropped because filesystems and copy tools keep
/// different amounts of it.
pub fn compare_files(src: &FileRecord, target: Option<&FileRecord>) -> CopyDecision {
    let Some(target) = target else {
        return CopyDecision::Copy;
    };

    if src.size != target.size {
        return CopyDecision::Copy;
    }

    if src.mtime_seconds() != target.mtime_seconds() {
        return CopyDecision::Copy;
    }

    CopyDecision::Same
}
