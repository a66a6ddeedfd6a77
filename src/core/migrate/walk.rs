//! Candidate file discovery.

use super::options::MigrateOptions;
use crate::error::{Error, Result};
use crate::log_status;
use glob_match::glob_match;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lazy, recursive iterator over candidate files under a root.
///
/// Yields files whose name ends with the configured suffix, sorted by name
/// within each directory. A symlink is yielded when its target is a file;
/// symlinked directories are not descended. Unreadable entries are skipped.
pub struct CandidateFiles {
    root: PathBuf,
    suffix: String,
    exclude: Vec<String>,
    inner: walkdir::IntoIter,
}

/// Start walking `options.root`.
///
/// Fails with `migrate.root_missing` when the root does not exist; nothing
/// is read in that case.
pub fn locate_candidates(options: &MigrateOptions) -> Result<CandidateFiles> {
    if !options.root.exists() {
        return Err(Error::root_directory_missing(options.root_display()));
    }
    log_status!("migrate", "Scanning {}", options.root_display());

    Ok(CandidateFiles {
        root: options.root.clone(),
        suffix: options.suffix(),
        exclude: options.exclude.clone(),
        inner: WalkDir::new(&options.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter(),
    })
}

impl CandidateFiles {
    fn is_excluded(&self, path: &Path) -> bool {
        if self.exclude.is_empty() {
            return false;
        }
        let relative = relative_path(&self.root, path);
        self.exclude
            .iter()
            .any(|pattern| glob_match(pattern, &relative))
    }
}

impl Iterator for CandidateFiles {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    let at = err
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default();
                    log_status!("migrate", "Skipping unreadable entry {}: {}", at, err);
                    continue;
                }
            };

            if !is_file_entry(&entry) {
                continue;
            }

            let matches_suffix = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(&self.suffix));
            if !matches_suffix {
                continue;
            }

            if self.is_excluded(entry.path()) {
                log_status!("migrate", "Excluded {}", entry.path().display());
                continue;
            }

            return Some(entry.into_path());
        }
    }
}

fn is_file_entry(entry: &walkdir::DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

/// Path of `path` relative to `root`, `/`-separated on every platform.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
