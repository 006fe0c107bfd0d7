//! Filesystem operations: the resilient relocator and the batch pass.

mod batch;
mod relocate;

pub use batch::{plan_rename, sanitize_tree, BatchSummary};
pub use relocate::{Relocator, RenameOutcome, RenameSource};
