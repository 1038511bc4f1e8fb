//! # copydiff - Differential file copier
//!
//! Copies files into a target directory only when the same-named target file
//! is missing or differs in size or whole-second modification time. Copied
//! files keep the source timestamps, so re-running changes nothing and an
//! older source rolls a newer target back.

// Module declarations
pub mod commands;
pub mod config;
pub mod diff;
pub mod executor;
pub mod scanner;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use config::Config;
pub use types::{CopyDecision, CopydiffError, FileRecord, SourceSpec};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Title line printed at startup and written to the log
pub fn app_title() -> String {
    format!("copydiff (v{})", VERSION)
}
