// src/models/reference.rs
use crate::models::Kind;

/// A figure or table mention found on a manuscript line.
///
/// `path` is the raw path from the image syntax and is only set for figures.
/// Tables are resolved by `label` through the table map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub kind: Kind,
    pub label: String,
    pub path: Option<String>,
}

impl Reference {
    #[must_use]
    pub fn figure(path: &str, label: &str) -> Self {
        Self {
            kind: Kind::Figure,
            label: label.to_owned(),
            path: Some(path.to_owned()),
        }
    }

    #[must_use]
    pub fn table(label: &str) -> Self {
        Self {
            kind: Kind::Table,
            label: label.to_owned(),
            path: None,
        }
    }

    /// True for `figs:` and `tbls:` labels.
    #[must_use]
    pub fn has_supplementary_label(&self) -> bool {
        self.label.starts_with("figs:") || self.label.starts_with("tbls:")
    }
}
