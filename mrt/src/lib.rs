// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod utils;

pub use cli::Args;
pub use crate::core::config::{Config, Settings, load_config};
pub use crate::core::copier::{apply, ensure_output_dir};
pub use crate::core::scanner::policy::{Classifier, Policy};
pub use crate::core::scanner::{ScanOptions, scan};
pub use crate::core::table_map::{TableMap, load_table_map, parse_table_map};
pub use models::{Category, Class, CopyOp, Kind, Reference, ScanOutcome, Skip, Tally};

use anyhow::{Context as _, Result};
use std::fs;
use tracing::info;

/// Loads the inputs named by `settings`, scans the manuscript and copies
/// every resolved asset into the output directory.
///
/// With `dry_run` set nothing is created or copied.
///
/// # Errors
///
/// This function may return an error if:
/// * The table map cannot be read or parsed
/// * The manuscript cannot be read as UTF-8 text
/// * The output directory cannot be created
/// * A copy fails
pub fn submit(settings: &Settings) -> Result<ScanOutcome> {
    let table_map = load_table_map(&settings.table_map)?;
    let manuscript = fs::read_to_string(&settings.manuscript).with_context(|| {
        format!("Failed to read manuscript: {}", settings.manuscript.display())
    })?;

    info!(
        manuscript = %settings.manuscript.display(),
        tables = table_map.len(),
        policy = %settings.policy,
        "Scanning manuscript"
    );

    let options = ScanOptions {
        policy: settings.policy,
        root: &settings.root,
        output: &settings.output,
    };
    let outcome = scan(manuscript.lines(), &table_map, &options);

    if !settings.dry_run {
        ensure_output_dir(&settings.output)?;
        apply(&outcome.copies)?;
    }

    Ok(outcome)
}

/// Runs the tool for parsed command-line arguments.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or [`submit`] fails.
pub fn run(args: Args) -> Result<()> {
    let config = load_config(&args.directory)?;
    let settings = Settings::resolve(&args, config)?;

    let outcome = submit(&settings)?;

    if settings.dry_run {
        utils::print_plan(&outcome.copies);
    }
    utils::print_summary(&outcome, &settings.output, settings.dry_run);

    Ok(())
}
