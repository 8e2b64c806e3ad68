// src/models/copy_op.rs
use crate::models::Category;
use std::path::PathBuf;

/// A single planned copy from a manuscript asset into the submission directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOp {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub category: Category,
    pub number: u32,
    pub label: String,
}
