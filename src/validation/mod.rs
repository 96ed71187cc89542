//! The validation engine: the layered rule set every proposed entry passes
//! before it is committed to the ledger.
//!
//! Rules are evaluated in a fixed order and short-circuit on the first
//! failure: hours range, per-type daily cap, cross-type same-day conflict,
//! allotment, whole-day requirement, annual/semester caps. All caps are
//! evaluated against recomputed aggregates rather than maintained counters;
//! entries per year stay small, and recomputation cannot drift under edits
//! and overwrites.

mod allotment;
mod conflict;
mod engine;
mod hours;
mod whole_day;

pub use allotment::check_allotment;
pub use conflict::check_cross_type_conflict;
pub use engine::{Applied, validate_and_apply};
pub use hours::{check_daily_cap, check_hours_range, max_entry_hours};
pub use whole_day::{check_period_caps, check_whole_day};
