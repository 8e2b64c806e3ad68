// src/core/table_map.rs
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Table label to source document, e.g. `tbl:results: tables/results.docx`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TableMap {
    entries: HashMap<String, PathBuf>,
}

impl TableMap {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a label verbatim, prefix included.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&Path> {
        self.entries.get(label).map(PathBuf::as_path)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<PathBuf>> FromIterator<(K, V)> for TableMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(label, path)| (label.into(), path.into()))
                .collect(),
        }
    }
}

/// Parses a YAML table map. An empty document is an empty map.
///
/// # Errors
///
/// Returns an error if the content is not a mapping of strings to paths.
pub fn parse_table_map(content: &str) -> Result<TableMap> {
    if content.trim().is_empty() {
        return Ok(TableMap::new());
    }
    serde_yaml_ng::from_str(content).context("Failed to parse table map")
}

/// Loads the table map the scan resolves table labels through.
///
/// # Arguments
///
/// * `path` - The YAML file mapping table labels to source documents
///
/// # Returns
///
/// * `Ok(TableMap)` - The fully materialized mapping
///
/// # Errors
///
/// This function may return an error if:
/// * The file does not exist or cannot be read
/// * The file is not a YAML mapping of labels to paths
pub fn load_table_map(path: &Path) -> Result<TableMap> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read table map: {}", path.display()))?;
    parse_table_map(&content)
        .with_context(|| format!("Invalid table map: {}", path.display()))
}
