//! Hour-range and per-type daily cap checks.

use rust_decimal::Decimal;

use crate::error::{LedgerError, LedgerResult};
use crate::models::LeaveType;

/// Returns the absolute upper bound for any single entry: 24 hours.
pub fn max_entry_hours() -> Decimal {
    Decimal::new(24, 0)
}

/// Checks that a proposed hours value lies in (0, 24].
pub fn check_hours_range(hours: Decimal) -> LedgerResult<()> {
    if hours <= Decimal::ZERO || hours > max_entry_hours() {
        return Err(LedgerError::InvalidHours { hours });
    }
    Ok(())
}

/// Checks the per-type daily cap: vacation/PAR at 8h, medical visits at 3h.
///
/// Whole-day types carry no daily cap here; their exact-8-hours rule is
/// checked by [`check_whole_day`](super::check_whole_day).
pub fn check_daily_cap(leave_type: LeaveType, hours: Decimal) -> LedgerResult<()> {
    if let Some(cap) = leave_type.daily_cap() {
        if hours > cap {
            return Err(LedgerError::DailyCapExceeded {
                leave_type,
                cap,
                remaining: cap,
            });
        }
    }
    Ok(())
}
