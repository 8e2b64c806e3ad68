// src/models.rs
mod category;
mod copy_op;
mod reference;
mod scan_outcome;
mod tally;

pub use category::{Class, Kind, Category};
pub use copy_op::CopyOp;
pub use reference::Reference;
pub use scan_outcome::{ScanOutcome, Skip};
pub use tally::Tally;
