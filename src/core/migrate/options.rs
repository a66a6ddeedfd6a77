use crate::error::{Error, Result};
use std::path::PathBuf;

pub const DEFAULT_ROOT: &str = "lib";
pub const DEFAULT_EXTENSION: &str = "dart";

/// Settings for one migration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateOptions {
    /// Directory to scan, relative to the working directory unless absolute.
    pub root: PathBuf,
    /// Candidate file-name extension, without the leading dot.
    pub extension: String,
    /// Globs matched against root-relative, `/`-separated paths.
    pub exclude: Vec<String>,
}

impl Default for MigrateOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            extension: DEFAULT_EXTENSION.to_string(),
            exclude: Vec::new(),
        }
    }
}

impl MigrateOptions {
    pub fn validate(&self) -> Result<()> {
        parse_extension(&self.extension)?;
        for pattern in &self.exclude {
            parse_exclude(pattern)?;
        }
        Ok(())
    }

    /// File-name suffix candidates must end with, e.g. `.dart`.
    pub fn suffix(&self) -> String {
        format!(".{}", self.extension)
    }

    /// Root as shown to users, always with a trailing slash (`lib/`).
    pub fn root_display(&self) -> String {
        let root = self.root.display().to_string();
        if root.ends_with('/') {
            root
        } else {
            format!("{}/", root)
        }
    }
}

/// Check a bare extension such as `dart`. Usable as a clap value parser.
pub fn parse_extension(value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(Error::validation_invalid_argument(
            "extension",
            "Extension must not be empty",
            None,
        ));
    }
    if value.starts_with('.') || value.contains(['/', '\\']) {
        return Err(Error::validation_invalid_argument(
            "extension",
            format!("Extension '{}' must be a bare suffix like 'dart'", value),
            Some(value.to_string()),
        ));
    }
    Ok(value.to_string())
}

pub fn parse_exclude(value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(Error::validation_invalid_argument(
            "exclude",
            "Exclude pattern must not be empty",
            Some(value.to_string()),
        ));
    }
    Ok(value.to_string())
}
