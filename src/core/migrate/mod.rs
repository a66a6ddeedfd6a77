//! Deprecated-call migration: rewrite `.withOpacity(X)` to `.withValues(alpha: X)`.
//!
//! Walks a source tree for candidate files, applies the textual rewrite rule
//! to each one, writes back changed files in place, and accumulates a run
//! summary. Per-file I/O failures are recorded and the run moves on.

mod batch;
mod options;
mod rule;
mod walk;

pub use batch::{
    process_file, rewrite_all, rewrite_file, run, FileFailure, FileOutcome, FileRecord, RunEvent,
    RunSummary,
};
pub use options::{
    parse_exclude, parse_extension, MigrateOptions, DEFAULT_EXTENSION, DEFAULT_ROOT,
};
pub use rule::{Rewrite, RewriteRule};
pub use walk::{locate_candidates, relative_path, CandidateFiles};
