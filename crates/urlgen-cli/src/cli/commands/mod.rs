//! CLI command handlers, one per file.

mod check;
mod get;
mod parts;

pub use check::run_check;
pub use get::run_get;
pub use parts::run_parts;
