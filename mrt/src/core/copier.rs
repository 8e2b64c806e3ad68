// src/core/copier.rs
use crate::models::CopyOp;
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Creates the submission directory and any missing parents.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))
}

/// Performs the planned copies in order, overwriting existing destinations.
///
/// # Arguments
///
/// * `copies` - The copy operations produced by a scan
///
/// # Returns
///
/// * `Ok(usize)` - The number of files copied
///
/// # Errors
///
/// This function may return an error if:
/// * A source file cannot be read
/// * A destination file cannot be written
pub fn apply(copies: &[CopyOp]) -> Result<usize> {
    let mut copied: usize = 0;

    for op in copies {
        fs::copy(&op.source, &op.destination).with_context(|| {
            format!(
                "Failed to copy {} -> {}",
                op.source.display(),
                op.destination.display()
            )
        })?;
        info!("Copied: {} -> {}", op.source.display(), op.destination.display());
        copied = copied.saturating_add(1);
    }

    Ok(copied)
}
