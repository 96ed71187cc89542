//! Whole-day requirement and annual/semester cap checks.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{LeaveType, Semester, workday_hours};
use crate::store::LeaveStore;

/// Checks that whole-day types are recorded as exactly 8 hours.
///
/// The caller should reset the proposed value to 8 on rejection rather
/// than coercing it silently.
pub fn check_whole_day(leave_type: LeaveType, hours: Decimal) -> LedgerResult<()> {
    if leave_type.is_whole_day() && hours != workday_hours() {
        return Err(LedgerError::MustBeFullDay { leave_type });
    }
    Ok(())
}

/// Checks the annual and semester caps for whole-day types.
///
/// Existing same-type hours are recomputed excluding the date being
/// written, so moving a day by overwriting in place is allowed:
/// - birthday gift: at most 8h (one day) per year;
/// - wellbeing: at most 8h per semester, independently;
/// - volunteering: at most 24h (three days) per year.
pub fn check_period_caps(
    store: &LeaveStore,
    date: NaiveDate,
    leave_type: LeaveType,
) -> LedgerResult<()> {
    if let Some(cap) = leave_type.annual_cap() {
        let used = store.hours_of_type(date.year(), leave_type, Some(date));
        if used + workday_hours() > cap {
            return Err(LedgerError::AnnualCapExceeded {
                leave_type,
                cap,
                remaining: cap - used,
            });
        }
    }

    if let Some(cap) = leave_type.semester_cap() {
        let semester = Semester::of(date);
        let used = store.semester_hours_of_type(date.year(), semester, leave_type, Some(date));
        if used + workday_hours() > cap {
            return Err(LedgerError::SemesterCapExceeded {
                leave_type,
                semester,
                cap,
                remaining: cap - used,
            });
        }
    }

    Ok(())
}
