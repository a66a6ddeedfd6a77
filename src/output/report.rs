//! Human-readable console report for migration runs.

use opacity_fix::migrate::{FileOutcome, MigrateOptions, RewriteRule, RunSummary};
use opacity_fix::Error;

use crate::commands::migrate::ANALYZE_HINT;

const RULE_WIDTH: usize = 60;

pub fn format_banner(options: &MigrateOptions, rule: &RewriteRule) -> String {
    format!(
        "🔍 Searching {} files for {}...\n",
        options.suffix(),
        rule.deprecated
    )
}

/// One line per modified or failed file; unchanged files print nothing.
pub fn format_outcome(outcome: &FileOutcome) -> Option<String> {
    match outcome {
        FileOutcome::Unchanged => None,
        FileOutcome::Modified(record) => Some(format!(
            "✅ {}: {} substitution(s)",
            record.file, record.replacements
        )),
        FileOutcome::Failed(failure) => Some(format!(
            "❌ Error processing {}: {}",
            failure.file, failure.error
        )),
    }
}

pub fn format_summary(summary: &RunSummary, rule: &RewriteRule) -> String {
    let rule_line = "=".repeat(RULE_WIDTH);
    let closing = if summary.is_empty() {
        format!("ℹ️  No occurrences of {} found.", rule.deprecated)
    } else {
        format!("🔄 {}", ANALYZE_HINT)
    };

    format!(
        "\n{rule_line}\n✨ Done!\n📊 Statistics:\n   - Files modified: {}\n   - Total substitutions: {}\n{rule_line}\n\n{closing}",
        summary.files_modified, summary.total_replacements,
    )
}

pub fn format_error(err: &Error) -> String {
    let mut line = format!("❌ {}.", err.message);
    for hint in &err.hints {
        line.push(' ');
        line.push_str(&hint.message);
        line.push('.');
    }
    line
}

pub fn print_banner(options: &MigrateOptions, rule: &RewriteRule) {
    println!("{}", format_banner(options, rule));
}

pub fn print_outcome(outcome: &FileOutcome) {
    if let Some(line) = format_outcome(outcome) {
        println!("{}", line);
    }
}

pub fn print_summary(summary: &RunSummary, rule: &RewriteRule) {
    println!("{}", format_summary(summary, rule));
}

pub fn print_error(err: &Error) {
    println!("{}", format_error(err));
}
