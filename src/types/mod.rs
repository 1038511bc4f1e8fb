//! Core type definitions for copydiff

mod decision;
mod error;
mod record;
mod spec;

pub use decision::CopyDecision;
pub use error::CopydiffError;
pub use record::FileRecord;
pub use spec::{SourceSpec, LIST_FILE_PREFIX};
