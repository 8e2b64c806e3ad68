// src/core/scanner/policy.rs
use crate::core::scanner::pattern::is_supplement_heading;
use crate::models::{Class, Reference};
use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;

/// How references are split between the main manuscript and the supplement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    /// `figs:`/`tbls:` labels are supplementary, `fig:`/`tbl:` labels are main.
    #[default]
    LabelPrefix,
    /// Everything after the `# Supplementary Material` heading is supplementary.
    Position,
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LabelPrefix => write!(f, "label-prefix"),
            Self::Position => write!(f, "position"),
        }
    }
}

/// Classification state carried through a single forward pass.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    policy: Policy,
    in_supplement: bool,
}

impl Classifier {
    #[inline]
    #[must_use]
    pub const fn new(policy: Policy) -> Self {
        Self {
            policy,
            in_supplement: false,
        }
    }

    /// Feeds a line to the classifier before its references are classified.
    ///
    /// Returns `true` when this line switches the scan into the supplement.
    pub fn observe(&mut self, line: &str) -> bool {
        if self.policy != Policy::Position || self.in_supplement {
            return false;
        }
        self.in_supplement = is_supplement_heading(line);
        self.in_supplement
    }

    #[must_use]
    pub fn classify(&self, reference: &Reference) -> Class {
        let supplementary = match self.policy {
            Policy::LabelPrefix => reference.has_supplementary_label(),
            Policy::Position => self.in_supplement,
        };
        if supplementary {
            Class::Supplementary
        } else {
            Class::Main
        }
    }
}
