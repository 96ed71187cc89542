//! Bulk delete of same-type entries over a date range.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::LeaveType;
use crate::store::LeaveStore;

/// A computed range delete: which dates match and how many hours they hold.
///
/// Unlike range insert, deletion enumerates every calendar day in the range.
/// Weekends and holidays are not excluded, since an entry recorded on such a
/// day should still be removable.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeDeletePlan {
    /// The leave type the delete is restricted to.
    pub leave_type: LeaveType,
    /// Dates in the range whose entry matches `leave_type` exactly.
    pub matching: Vec<NaiveDate>,
    /// Total hours the delete would return to the ledger.
    pub hours_freed: Decimal,
}

/// The result of committing a [`RangeDeletePlan`].
#[derive(Debug, Clone, PartialEq)]
pub struct RangeDeleteOutcome {
    /// Dates whose entry was removed.
    pub deleted: Vec<NaiveDate>,
    /// Total hours freed by the removals.
    pub hours_freed: Decimal,
}

/// Plans a delete of all `leave_type` entries in `start..=end`.
///
/// Entries of a different type are left untouched, so a mixed range can be
/// cleared one type at a time. An empty plan is not an error; committing it
/// is a no-op.
pub fn plan_range_delete(
    store: &LeaveStore,
    start: NaiveDate,
    end: NaiveDate,
    leave_type: LeaveType,
) -> LedgerResult<RangeDeletePlan> {
    if end < start {
        return Err(LedgerError::InvalidDateRange { start, end });
    }

    let mut matching = Vec::new();
    let mut hours_freed = Decimal::ZERO;
    for day in start.iter_days().take_while(|d| *d <= end) {
        if let Some(entry) = store.get_entry(day)
            && entry.leave_type == leave_type
        {
            hours_freed += entry.hours;
            matching.push(day);
        }
    }

    Ok(RangeDeletePlan {
        leave_type,
        matching,
        hours_freed,
    })
}

/// Commits a planned range delete, removing every matching entry.
///
/// No cap or allotment checks apply; deletion only frees hours. Each removal
/// persists through the store, so a persistence failure part-way leaves the
/// earlier removals committed.
pub fn commit_range_delete(
    store: &mut LeaveStore,
    plan: &RangeDeletePlan,
) -> LedgerResult<RangeDeleteOutcome> {
    let mut deleted = Vec::with_capacity(plan.matching.len());
    let mut hours_freed = Decimal::ZERO;
    for &day in &plan.matching {
        if let Some(entry) = store.delete_entry(day)? {
            hours_freed += entry.hours;
            deleted.push(day);
        }
    }

    debug!(
        deleted = deleted.len(),
        %hours_freed,
        leave_type = %plan.leave_type,
        "range delete committed"
    );

    Ok(RangeDeleteOutcome {
        deleted,
        hours_freed,
    })
}
