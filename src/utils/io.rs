//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read file contents as UTF-8.
///
/// Wraps `fs::read_to_string` so read and decode failures both surface as
/// `Error::file_io` tagged with the path and `operation`.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::file_io(path.display().to_string(), operation, &e))
}

/// Overwrite a file in place.
///
/// Truncates and writes through the existing path, so the file keeps its
/// inode and permissions.
pub fn write_file(path: &Path, content: &str, operation: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::file_io(path.display().to_string(), operation, &e))
}
