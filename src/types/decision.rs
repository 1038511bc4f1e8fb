//! CopyDecision - Outcome of comparing a source file with its target twin

use std::fmt;

/// Per-file decision made by the comparison step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyDecision {
    /// Target twin exists with the same size and whole-second mtime
    Same,

    /// Target twin is missing or differs
    Copy,
}

impl CopyDecision {
    /// Label used in report lines (`Same: name` / `COPY: name`)
    pub fn label(&self) -> &'static str {
        match self {
            CopyDecision::Same => "Same",
            CopyDecision::Copy => "COPY",
        }
    }

    pub fn is_copy(&self) -> bool {
        matches!(self, CopyDecision::Copy)
    }

    pub fn is_same(&self) -> bool {
        matches!(self, CopyDecision::Same)
    }
}

impl fmt::Display for CopyDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
