// src/models/scan_outcome.rs
use crate::models::{Category, CopyOp, Tally};
use std::fmt;
use std::path::PathBuf;

/// A recognized reference that did not produce a copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    /// The source file does not exist. Its sequence number is still consumed.
    MissingAsset {
        label: String,
        source: PathBuf,
        category: Category,
        number: u32,
    },
    /// The table label has no entry in the table map. No number is consumed.
    UnmappedLabel { label: String },
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAsset {
                label,
                source,
                category,
                number,
            } => write!(
                f,
                "{label}: missing {} (reserved {}{number})",
                source.display(),
                category.prefix()
            ),
            Self::UnmappedLabel { label } => write!(f, "{label}: not in table map"),
        }
    }
}

/// Everything a single pass over the manuscript produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    pub copies: Vec<CopyOp>,
    pub tally: Tally,
    pub skipped: Vec<Skip>,
}
