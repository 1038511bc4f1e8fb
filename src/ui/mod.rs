//! Console output and log file

mod logger;
mod reporter;

pub use logger::Logger;
pub use reporter::Reporter;
