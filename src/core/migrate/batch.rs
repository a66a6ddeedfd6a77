use super::options::MigrateOptions;
use super::rule::RewriteRule;
use super::walk::{locate_candidates, relative_path};
use crate::error::Result;
use crate::log_status;
use crate::utils::io::{read_file, write_file};
use serde::Serialize;
use std::path::Path;

/// A file that was rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// Path relative to the run root.
    pub file: String,
    pub replacements: usize,
}

/// A file that could not be read or written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    /// Path as walked, including the root (e.g. `lib/a.dart`).
    pub file: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Unchanged,
    Modified(FileRecord),
    Failed(FileFailure),
}

/// Progress notifications from [`run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEvent<'a> {
    /// The root exists and the walk is about to start.
    Started,
    File(&'a FileOutcome),
}

/// Aggregate counters for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub files_modified: usize,
    pub total_replacements: usize,
    pub files: Vec<FileRecord>,
    pub errors: Vec<FileFailure>,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.files_scanned += 1;
        match outcome {
            FileOutcome::Unchanged => {}
            FileOutcome::Modified(record) => {
                self.files_modified += 1;
                self.total_replacements += record.replacements;
                self.files.push(record.clone());
            }
            FileOutcome::Failed(failure) => self.errors.push(failure.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_replacements == 0
    }
}

/// Apply `rule` to one file, writing it back only when something changed.
///
/// Returns the number of replacements made.
pub fn rewrite_file(path: &Path, rule: &RewriteRule) -> Result<usize> {
    let original = read_file(path, "read")?;
    let rewrite = rule.apply(&original);

    if !rewrite.is_changed() {
        return Ok(0);
    }

    write_file(path, &rewrite.content, "write")?;
    Ok(rewrite.replacements)
}

/// Rewrite one candidate, folding any I/O failure into the outcome.
pub fn process_file(root: &Path, path: &Path, rule: &RewriteRule) -> FileOutcome {
    match rewrite_file(path, rule) {
        Ok(0) => FileOutcome::Unchanged,
        Ok(replacements) => FileOutcome::Modified(FileRecord {
            file: relative_path(root, path),
            replacements,
        }),
        Err(err) => FileOutcome::Failed(FileFailure {
            file: path.display().to_string(),
            error: err.message,
        }),
    }
}

/// Rewrite every file from `candidates`, reporting each outcome as it happens.
pub fn rewrite_all<I, F>(
    root: &Path,
    candidates: I,
    rule: &RewriteRule,
    mut on_outcome: F,
) -> RunSummary
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
    F: FnMut(&FileOutcome),
{
    let mut summary = RunSummary::default();

    for path in candidates {
        let outcome = process_file(root, path.as_ref(), rule);
        on_outcome(&outcome);
        summary.record(&outcome);
    }

    log_status!(
        "migrate",
        "Scanned {} file(s), {} failed",
        summary.files_scanned,
        summary.errors.len()
    );
    summary
}

/// Locate candidates under `options.root` and rewrite them.
///
/// Only a missing root or invalid options fail the run, and neither emits
/// any event. Per-file errors end up in `RunSummary::errors`.
pub fn run<F>(options: &MigrateOptions, rule: &RewriteRule, mut on_event: F) -> Result<RunSummary>
where
    F: FnMut(RunEvent<'_>),
{
    options.validate()?;
    let candidates = locate_candidates(options)?;
    on_event(RunEvent::Started);
    Ok(rewrite_all(&options.root, candidates, rule, |outcome| {
        on_event(RunEvent::File(outcome))
    }))
}
