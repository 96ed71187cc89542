//! Bulk insert over the working days of a date range.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use crate::calendar::is_working_day;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{LeaveType, Semester, workday_hours};
use crate::store::LeaveStore;
use crate::validation::{check_daily_cap, check_hours_range, check_whole_day};

/// The outcome of planning a range insert: which working days would
/// receive an entry and which were skipped because one already exists.
///
/// Existing entries are never overwritten in range mode.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeInsertPlan {
    /// The leave type to insert.
    pub leave_type: LeaveType,
    /// Hours per inserted day.
    pub hours: Decimal,
    /// Working days with no existing entry, in calendar order.
    pub eligible: Vec<NaiveDate>,
    /// Working days skipped because an entry already exists, in calendar order.
    pub skipped_existing: Vec<NaiveDate>,
}

/// Counts reported after committing a range insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeInsertOutcome {
    /// Days that received a new entry.
    pub inserted: usize,
    /// Days skipped because an entry already existed, at planning or at
    /// commit time.
    pub skipped: usize,
}

/// Plans a bulk insert of `hours` of `leave_type` over `[start, end]`.
///
/// Enumerates every calendar date in the inclusive range, drops weekends
/// and holidays, and partitions the remaining working days into eligible
/// (no existing entry) and skipped. The hours value is validated up front
/// with the same shape rules a single entry gets (range, daily cap,
/// whole-day requirement).
///
/// # Errors
///
/// `InvalidDateRange` when `end < start`; `NoEligibleDatesInRange` when no
/// working day in the range is free; plus the hour-shape rejections.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use leave_ledger::models::{LeaveType, YearDefaults};
/// use leave_ledger::planner::plan_range_insert;
/// use leave_ledger::store::{LeaveStore, MemoryBackend};
///
/// let mut store =
///     LeaveStore::open(Box::new(MemoryBackend::new()), YearDefaults::default()).unwrap();
/// store.set_current_year(2025).unwrap();
///
/// // The week of 2025-01-06 contains Epiphany (Mon) and a weekend.
/// let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 1, 12).unwrap();
/// let plan =
///     plan_range_insert(&store, start, end, LeaveType::Vacation, Decimal::new(8, 0)).unwrap();
/// assert_eq!(plan.eligible.len(), 4); // Tue 7th through Fri 10th
/// ```
pub fn plan_range_insert(
    store: &LeaveStore,
    start: NaiveDate,
    end: NaiveDate,
    leave_type: LeaveType,
    hours: Decimal,
) -> LedgerResult<RangeInsertPlan> {
    if end < start {
        return Err(LedgerError::InvalidDateRange { start, end });
    }
    check_hours_range(hours)?;
    check_daily_cap(leave_type, hours)?;
    check_whole_day(leave_type, hours)?;

    let mut eligible = Vec::new();
    let mut skipped_existing = Vec::new();
    for date in start.iter_days().take_while(|d| *d <= end) {
        if !is_working_day(date) {
            continue;
        }
        if store.get_entry(date).is_some() {
            skipped_existing.push(date);
        } else {
            eligible.push(date);
        }
    }

    if eligible.is_empty() {
        return Err(LedgerError::NoEligibleDatesInRange { start, end });
    }

    Ok(RangeInsertPlan {
        leave_type,
        hours,
        eligible,
        skipped_existing,
    })
}

/// Commits a planned range insert.
///
/// The plan may be stale: dates that gained an entry since planning are
/// re-detected here and skipped, never overwritten, exactly as at plan
/// time. Aggregate caps are then re-run against the dates actually being
/// written and reject the entire batch on any violation; there is no
/// partial commit. Plans whose range crosses a year boundary are checked
/// per year (and per semester for wellbeing).
pub fn commit_range_insert(
    store: &mut LeaveStore,
    plan: &RangeInsertPlan,
) -> LedgerResult<RangeInsertOutcome> {
    let (free, newly_occupied): (Vec<NaiveDate>, Vec<NaiveDate>) = plan
        .eligible
        .iter()
        .copied()
        .partition(|date| store.get_entry(*date).is_none());

    check_batch_caps(store, plan.leave_type, plan.hours, &free)?;

    for &date in &free {
        store.set_entry(date, plan.leave_type, plan.hours)?;
    }

    let skipped = plan.skipped_existing.len() + newly_occupied.len();
    debug!(
        inserted = free.len(),
        skipped,
        leave_type = %plan.leave_type,
        "range insert committed"
    );
    Ok(RangeInsertOutcome {
        inserted: free.len(),
        skipped,
    })
}

/// Verifies the aggregate caps for the dates about to be written.
fn check_batch_caps(
    store: &LeaveStore,
    leave_type: LeaveType,
    hours: Decimal,
    dates: &[NaiveDate],
) -> LedgerResult<()> {
    let mut per_year: BTreeMap<i32, usize> = BTreeMap::new();
    for date in dates {
        *per_year.entry(date.year()).or_default() += 1;
    }

    if leave_type.uses_allotment() {
        for (&year, &count) in &per_year {
            let used = store.hours_of_type(year, leave_type, None);
            let requested = hours * Decimal::from(count as i64);
            let available = store
                .availability(year)
                .for_type(leave_type)
                .unwrap_or_default();
            if used + requested > available {
                return Err(LedgerError::AllotmentExceeded {
                    leave_type,
                    requested,
                    remaining: available - used,
                });
            }
        }
    }

    if let Some(cap) = leave_type.annual_cap() {
        for (&year, &count) in &per_year {
            let used = store.hours_of_type(year, leave_type, None);
            if used + workday_hours() * Decimal::from(count as i64) > cap {
                return Err(LedgerError::AnnualCapExceeded {
                    leave_type,
                    cap,
                    remaining: cap - used,
                });
            }
        }
    }

    if let Some(cap) = leave_type.semester_cap() {
        let mut per_semester: BTreeMap<(i32, Semester), usize> = BTreeMap::new();
        for date in dates {
            *per_semester
                .entry((date.year(), Semester::of(*date)))
                .or_default() += 1;
        }
        for (&(year, semester), &count) in &per_semester {
            let used = store.semester_hours_of_type(year, semester, leave_type, None);
            if used + workday_hours() * Decimal::from(count as i64) > cap {
                return Err(LedgerError::SemesterCapExceeded {
                    leave_type,
                    semester,
                    cap,
                    remaining: cap - used,
                });
            }
        }
    }

    Ok(())
}
