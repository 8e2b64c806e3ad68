// src/models/tally.rs
use crate::models::{Category, Class, Kind};

/// Running sequence numbers for the four output series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub fig: u32,
    pub fig_s: u32,
    pub tbl: u32,
    pub tbl_s: u32,
}

impl Tally {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fig: 0,
            fig_s: 0,
            tbl: 0,
            tbl_s: 0,
        }
    }

    /// Advances the counter for `category` and returns the new value.
    pub fn advance(&mut self, category: Category) -> u32 {
        let counter = self.counter_mut(category);
        *counter = counter.saturating_add(1);
        *counter
    }

    #[inline]
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.fig
            .saturating_add(self.fig_s)
            .saturating_add(self.tbl)
            .saturating_add(self.tbl_s)
    }

    fn counter_mut(&mut self, category: Category) -> &mut u32 {
        match (category.kind, category.class) {
            (Kind::Figure, Class::Main) => &mut self.fig,
            (Kind::Figure, Class::Supplementary) => &mut self.fig_s,
            (Kind::Table, Class::Main) => &mut self.tbl,
            (Kind::Table, Class::Supplementary) => &mut self.tbl_s,
        }
    }
}
