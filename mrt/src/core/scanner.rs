// src/core/scanner.rs
pub mod pattern;
pub mod policy;

use crate::core::table_map::TableMap;
use crate::models::{Category, CopyOp, Reference, ScanOutcome, Skip};
use crate::utils::file_suffix;
use policy::{Classifier, Policy};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Where a scan resolves sources from and writes destinations to.
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions<'a> {
    pub policy: Policy,
    /// Relative figure paths and table map paths are resolved against this directory.
    pub root: &'a Path,
    /// Directory the destination filenames are placed in.
    pub output: &'a Path,
}

/// Scans manuscript lines for figure and table references and plans their copies.
///
/// Each recognized reference takes the next number of its category in scan
/// order. A reference whose source file is missing still consumes its number
/// but produces no copy. A table label absent from `table_map` is skipped
/// without consuming a number.
///
/// # Arguments
///
/// * `lines` - The manuscript, one item per line, in document order
/// * `table_map` - Table label to source document mapping
/// * `options` - Classification policy plus source and output directories
///
/// # Returns
///
/// * `ScanOutcome` - Planned copies in scan order, final tally and skipped references
pub fn scan<'l, I>(lines: I, table_map: &TableMap, options: &ScanOptions<'_>) -> ScanOutcome
where
    I: IntoIterator<Item = &'l str>,
{
    let mut classifier = Classifier::new(options.policy);
    let mut outcome = ScanOutcome::default();

    for (index, line) in lines.into_iter().enumerate() {
        if classifier.observe(line) {
            info!(line = index.saturating_add(1), "Supplementary section starts");
        }

        for reference in pattern::find_references(line) {
            plan_reference(reference, &classifier, table_map, options, &mut outcome);
        }
    }

    outcome
}

fn plan_reference(
    reference: Reference,
    classifier: &Classifier,
    table_map: &TableMap,
    options: &ScanOptions<'_>,
    outcome: &mut ScanOutcome,
) {
    let (source, suffix) = if let Some(path) = &reference.path {
        let source = PathBuf::from(path);
        let suffix = file_suffix(&source);
        (source, suffix)
    } else {
        let Some(source) = table_map.get(&reference.label) else {
            debug!(label = %reference.label, "Table label not in table map");
            outcome.skipped.push(Skip::UnmappedLabel {
                label: reference.label,
            });
            return;
        };
        (source.to_path_buf(), String::new())
    };

    let category = Category::new(reference.kind, classifier.classify(&reference));
    let number = outcome.tally.advance(category);
    let source = options.root.join(source);
    let destination = options
        .output
        .join(category.destination_name(number, &suffix));

    if source.is_file() {
        debug!(
            label = %reference.label,
            %category,
            source = %source.display(),
            destination = %destination.display(),
            "Planned copy"
        );
        outcome.copies.push(CopyOp {
            source,
            destination,
            category,
            number,
            label: reference.label,
        });
    } else {
        warn!(
            label = %reference.label,
            %category,
            source = %source.display(),
            "Source not found, {}{number} left unused",
            category.prefix()
        );
        outcome.skipped.push(Skip::MissingAsset {
            label: reference.label,
            source,
            category,
            number,
        });
    }
}
