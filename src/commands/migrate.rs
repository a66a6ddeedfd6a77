use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use opacity_fix::migrate::{
    self, parse_exclude, parse_extension, FileFailure, FileRecord, MigrateOptions, RewriteRule,
    RunEvent, RunSummary, DEFAULT_EXTENSION, DEFAULT_ROOT,
};

use crate::commands::{CmdResult, GlobalArgs};
use crate::output::report;

pub const ANALYZE_HINT: &str = "Run \"flutter analyze\" to verify that all warnings were fixed.";

#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Directory to scan for source files
    #[arg(long, value_name = "DIR", default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Extension of candidate files, without the dot
    #[arg(
        long,
        value_name = "EXT",
        default_value = DEFAULT_EXTENSION,
        value_parser = parse_extension
    )]
    pub extension: String,

    /// Skip files whose path relative to the root matches this glob (repeatable)
    #[arg(long, value_name = "GLOB", value_parser = parse_exclude)]
    pub exclude: Vec<String>,
}

impl MigrateArgs {
    fn to_options(&self) -> MigrateOptions {
        MigrateOptions {
            root: self.root.clone(),
            extension: self.extension.clone(),
            exclude: self.exclude.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "command")]
pub enum MigrateOutput {
    #[serde(rename = "migrate.with_opacity")]
    WithOpacity {
        root: String,
        extension: String,
        files_scanned: usize,
        files_modified: usize,
        total_substitutions: usize,
        files: Vec<FileRecord>,
        errors: Vec<FileFailure>,
        #[serde(skip_serializing_if = "Option::is_none")]
        hint: Option<String>,
    },
}

impl MigrateOutput {
    fn from_summary(options: &MigrateOptions, summary: RunSummary) -> Self {
        let hint = if summary.is_empty() {
            None
        } else {
            Some(ANALYZE_HINT.to_string())
        };

        MigrateOutput::WithOpacity {
            root: options.root_display(),
            extension: options.extension.clone(),
            files_scanned: summary.files_scanned,
            files_modified: summary.files_modified,
            total_substitutions: summary.total_replacements,
            files: summary.files,
            errors: summary.errors,
            hint,
        }
    }
}

pub fn run(args: MigrateArgs, global: &GlobalArgs) -> CmdResult<MigrateOutput> {
    let options = args.to_options();
    let rule = RewriteRule::with_opacity();
    let console = !global.json;

    let summary = migrate::run(&options, &rule, |event| {
        if !console {
            return;
        }
        match event {
            RunEvent::Started => report::print_banner(&options, &rule),
            RunEvent::File(outcome) => report::print_outcome(outcome),
        }
    })?;

    if console {
        report::print_summary(&summary, &rule);
    }

    Ok((MigrateOutput::from_summary(&options, summary), 0))
}
