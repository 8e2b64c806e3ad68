// src/utils.rs
use crate::models::{CopyOp, ScanOutcome};
use std::path::Path;

/// Final extension of `path` including the leading dot, or an empty string.
///
/// `a.PNG` gives `.PNG`, `a.tar.gz` gives `.gz`, `noext` and `.hidden` give `""`.
#[must_use]
pub fn file_suffix(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// One `Would copy: SRC -> DST` line per planned copy.
#[must_use]
pub fn render_plan(copies: &[CopyOp]) -> String {
    copies
        .iter()
        .map(|op| {
            format!(
                "Would copy: {} -> {}\n",
                op.source.display(),
                op.destination.display()
            )
        })
        .collect()
}

#[must_use]
pub fn render_summary(outcome: &ScanOutcome, output: &Path, dry_run: bool) -> String {
    let tally = &outcome.tally;
    let mut summary = if dry_run {
        format!("Dry run, nothing written to {}/\n", output.display())
    } else {
        format!("Submission files written to {}/\n", output.display())
    };
    summary.push_str(&format!(
        "Main figures: {}, Supplementary figures: {}\n",
        tally.fig, tally.fig_s
    ));
    summary.push_str(&format!(
        "Main tables: {}, Supplementary tables: {}\n",
        tally.tbl, tally.tbl_s
    ));
    summary.push_str(&format!("Numbered references: {}\n", tally.total()));

    if !outcome.skipped.is_empty() {
        summary.push_str(&format!("Skipped references: {}\n", outcome.skipped.len()));
        for skip in &outcome.skipped {
            summary.push_str(&format!("  {skip}\n"));
        }
    }
    summary
}

pub fn print_plan(copies: &[CopyOp]) {
    print!("{}", render_plan(copies));
}

pub fn print_summary(outcome: &ScanOutcome, output: &Path, dry_run: bool) {
    print!("\n{}", render_summary(outcome, output, dry_run));
}
