//! Source enumeration: list files, directories, and glob patterns

mod listfile;
mod resolve;

pub use listfile::read_list_file;
pub use resolve::{resolve_source, validate_spec};
