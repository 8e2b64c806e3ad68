// src/core/scanner/pattern.rs
use crate::models::Reference;
use regex::Regex;
use std::sync::LazyLock;

/// `![alt](path){#fig:label}` or `![alt](path){#figs:label}`. Attributes after
/// the identifier (`{#fig:a width=50%}`) are allowed and ignored.
static FIGURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[.*?\]\((.*?)\)\{#(figs?:[^}\s]+)[^}]*\}").expect("Invalid figure pattern")
});

/// Any `{#tbl:label}` or `{#tbls:label}` anchor, e.g. on a `:::` div.
static TABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{#(tbls?:[^}\s]+)[^}]*\}").expect("Invalid table pattern")
});

/// Level-one heading opening the supplement, optionally carrying an attribute block.
static SUPPLEMENT_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*#\s+supplementary\s+material\s*(\{[^}]*\})?\s*$")
        .expect("Invalid heading pattern")
});

/// Returns the first figure reference on the line, if any.
#[must_use]
pub fn find_figure(line: &str) -> Option<Reference> {
    let caps = FIGURE.captures(line)?;
    let path = caps.get(1)?.as_str();
    let label = caps.get(2)?.as_str();
    Some(Reference::figure(path, label))
}

/// Returns the first table anchor on the line, if any.
#[must_use]
pub fn find_table(line: &str) -> Option<Reference> {
    let caps = TABLE.captures(line)?;
    let label = caps.get(1)?.as_str();
    Some(Reference::table(label))
}

/// Figure first, then table. A line can carry at most one of each.
#[must_use]
pub fn find_references(line: &str) -> Vec<Reference> {
    find_figure(line).into_iter().chain(find_table(line)).collect()
}

#[must_use]
pub fn is_supplement_heading(line: &str) -> bool {
    SUPPLEMENT_HEADING.is_match(line)
}
