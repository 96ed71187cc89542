//! Yearly allotment check for vacation and PAR hours.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::error::{LedgerError, LedgerResult};
use crate::models::LeaveType;
use crate::store::LeaveStore;

/// Checks that a proposed vacation/PAR entry fits the year's allotment.
///
/// Usage is recomputed from the ledger excluding the date being written,
/// so replacing an entry only counts its new hours. Types that are not
/// allotment-backed pass trivially.
pub fn check_allotment(
    store: &LeaveStore,
    date: NaiveDate,
    leave_type: LeaveType,
    hours: Decimal,
) -> LedgerResult<()> {
    let Some(available) = store.availability(date.year()).for_type(leave_type) else {
        return Ok(());
    };

    let used = store.hours_of_type(date.year(), leave_type, Some(date));
    if used + hours > available {
        return Err(LedgerError::AllotmentExceeded {
            leave_type,
            requested: hours,
            remaining: available - used,
        });
    }
    Ok(())
}
