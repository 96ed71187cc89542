//! The single entry point that validates a proposed entry and commits it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::LedgerResult;
use crate::models::{LeaveEntry, LeaveType};
use crate::store::LeaveStore;

use super::allotment::check_allotment;
use super::conflict::check_cross_type_conflict;
use super::hours::{check_daily_cap, check_hours_range};
use super::whole_day::{check_period_caps, check_whole_day};

/// A successfully committed entry, including what it replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct Applied {
    /// The date written.
    pub date: NaiveDate,
    /// The leave type written.
    pub leave_type: LeaveType,
    /// The hours written.
    pub hours: Decimal,
    /// The entry that previously occupied the date, if any.
    pub replaced: Option<LeaveEntry>,
}

/// Validates a proposed entry against the full rule set and commits it.
///
/// Rules run in order and short-circuit on the first failure, leaving the
/// ledger unchanged:
/// 1. hours in (0, 24];
/// 2. per-type daily cap (vacation/PAR 8h, medical visit 3h);
/// 3. cross-type same-day conflict (combined hours within 8);
/// 4. yearly allotment for vacation/PAR, excluding the replaced entry;
/// 5. whole-day types must be exactly 8 hours;
/// 6. annual/semester caps for whole-day types.
///
/// On success the entry is committed through the store (which persists) and
/// the previous occupant of the date, if any, is reported back.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use leave_ledger::models::{LeaveType, YearDefaults};
/// use leave_ledger::store::{LeaveStore, MemoryBackend};
/// use leave_ledger::validation::validate_and_apply;
///
/// let mut store =
///     LeaveStore::open(Box::new(MemoryBackend::new()), YearDefaults::default()).unwrap();
/// store.set_current_year(2025).unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
/// let applied =
///     validate_and_apply(&mut store, date, LeaveType::Vacation, Decimal::new(8, 0)).unwrap();
/// assert!(applied.replaced.is_none());
/// ```
pub fn validate_and_apply(
    store: &mut LeaveStore,
    date: NaiveDate,
    leave_type: LeaveType,
    hours: Decimal,
) -> LedgerResult<Applied> {
    check_hours_range(hours)?;
    check_daily_cap(leave_type, hours)?;

    let existing = store.get_entry(date).cloned();
    check_cross_type_conflict(existing.as_ref(), leave_type, hours)?;

    if leave_type.uses_allotment() {
        check_allotment(store, date, leave_type, hours)?;
    }

    if leave_type.is_whole_day() {
        check_whole_day(leave_type, hours)?;
        check_period_caps(store, date, leave_type)?;
    }

    store.set_entry(date, leave_type, hours)?;
    debug!(%date, %leave_type, %hours, "leave entry committed");

    Ok(Applied {
        date,
        leave_type,
        hours,
        replaced: existing,
    })
}
