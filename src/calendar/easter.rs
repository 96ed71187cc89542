//! Easter computation via the anonymous Gregorian Computus.

use chrono::{Datelike, Duration, NaiveDate};

/// Computes the date of Easter Sunday for a year.
///
/// Uses the anonymous Gregorian Computus algorithm. Pure and total for any
/// year in the Gregorian calendar (the ledger only ever asks for roughly
/// 1900-2100).
///
/// # Returns
///
/// The `(month, day)` pair; the month is always March (3) or April (4).
///
/// # Example
///
/// ```
/// use leave_ledger::calendar::easter;
///
/// assert_eq!(easter(2024), (3, 31));
/// assert_eq!(easter(2025), (4, 20));
/// ```
pub fn easter(year: i32) -> (u32, u32) {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    (month as u32, day as u32)
}

/// Computes the date of Easter Monday for a year.
///
/// Easter Sunday plus one day, with correct rollover from March 31 to
/// April 1.
///
/// # Example
///
/// ```
/// use leave_ledger::calendar::easter_monday;
///
/// // Easter 2024 falls on March 31, so the Monday rolls over into April.
/// assert_eq!(easter_monday(2024), (4, 1));
/// ```
pub fn easter_monday(year: i32) -> (u32, u32) {
    let (month, day) = easter(year);
    let sunday =
        NaiveDate::from_ymd_opt(year, month, day).expect("Computus yields a valid calendar date");
    let monday = sunday + Duration::days(1);
    (monday.month(), monday.day())
}
