// src/models/category.rs
use std::fmt;

/// What a reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Figure,
    Table,
}

/// Whether a reference belongs to the main manuscript or the supplement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Main,
    Supplementary,
}

/// One of the four independently numbered output series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub kind: Kind,
    pub class: Class,
}

impl Category {
    #[inline]
    #[must_use]
    pub const fn new(kind: Kind, class: Class) -> Self {
        Self { kind, class }
    }

    /// Filename prefix used for this series in the submission directory.
    #[inline]
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match (self.kind, self.class) {
            (Kind::Figure, Class::Main) => "Fig",
            (Kind::Figure, Class::Supplementary) => "FigS",
            (Kind::Table, Class::Main) => "Table",
            (Kind::Table, Class::Supplementary) => "TableS",
        }
    }

    /// Builds the standardized destination filename for the `number`-th item.
    ///
    /// Figures keep the suffix of their source file, tables are always `.docx`.
    #[must_use]
    pub fn destination_name(self, number: u32, figure_suffix: &str) -> String {
        match self.kind {
            Kind::Figure => format!("{}{number}{figure_suffix}", self.prefix()),
            Kind::Table => format!("{}{number}.docx", self.prefix()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            Kind::Figure => "figure",
            Kind::Table => "table",
        };
        let class = match self.class {
            Class::Main => "main",
            Class::Supplementary => "supplementary",
        };
        write!(f, "{class} {kind}")
    }
}
