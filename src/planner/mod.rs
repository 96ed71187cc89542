//! Range operations: bulk insert over working days and bulk delete.
//!
//! Planning is side-effect free; nothing touches the ledger until the
//! matching commit function runs. The split lets a caller show the plan
//! (dates affected, dates skipped, hours freed) and ask for confirmation
//! before anything is written.

mod delete;
mod insert;

pub use delete::{RangeDeleteOutcome, RangeDeletePlan, commit_range_delete, plan_range_delete};
pub use insert::{RangeInsertOutcome, RangeInsertPlan, commit_range_insert, plan_range_insert};
