//! Italian public holidays and working-day checks.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};

use super::easter::easter_monday;

/// The ten fixed-date Italian public holidays, as `(month, day)` pairs.
const FIXED_HOLIDAYS: [(u32, u32); 10] = [
    (1, 1),   // New Year
    (1, 6),   // Epiphany
    (4, 25),  // Liberation Day
    (5, 1),   // Labour Day
    (6, 2),   // Republic Day
    (8, 15),  // Assumption
    (11, 1),  // All Saints
    (12, 8),  // Immaculate Conception
    (12, 25), // Christmas
    (12, 26), // St. Stephen
];

/// Returns the set of Italian public holidays for a year.
///
/// The ten fixed-date holidays plus the movable Easter Monday.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use leave_ledger::calendar::holidays;
///
/// let set = holidays(2025);
/// assert_eq!(set.len(), 11);
/// assert!(set.contains(&NaiveDate::from_ymd_opt(2025, 4, 21).unwrap())); // Easter Monday
/// ```
pub fn holidays(year: i32) -> BTreeSet<NaiveDate> {
    let mut set: BTreeSet<NaiveDate> = FIXED_HOLIDAYS
        .iter()
        .map(|&(month, day)| {
            NaiveDate::from_ymd_opt(year, month, day).expect("fixed holiday dates are valid")
        })
        .collect();

    let (month, day) = easter_monday(year);
    set.insert(
        NaiveDate::from_ymd_opt(year, month, day).expect("Easter Monday is a valid calendar date"),
    );

    set
}

/// Returns true if a date is an Italian public holiday.
pub fn is_holiday(date: NaiveDate) -> bool {
    holidays(date.year()).contains(&date)
}

/// Returns true if a date falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns true if a date is a working day: not a weekend and not a holiday.
pub fn is_working_day(date: NaiveDate) -> bool {
    !is_weekend(date) && !is_holiday(date)
}
