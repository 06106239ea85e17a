//! Output module for filesystem bookkeeping and run reporting
//!
//! This module handles:
//! - Creating per-keyword directory trees
//! - The append-only source log (path to origin URL index)
//! - Accumulating and printing the run summary

mod dirs;
mod source_log;
mod summary;

pub use dirs::{create_directories, sanitize_keyword};
pub use source_log::SourceLog;
pub use summary::{print_summary, RunSummary};
