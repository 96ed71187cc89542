//! Calendar-year semesters, used to cap wellbeing usage.

use chrono::{Datelike, NaiveDate};

/// One half of a calendar year.
///
/// The partition is by calendar month: January through June fall in the
/// first semester, July through December in the second.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use leave_ledger::models::Semester;
///
/// let june = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
/// let july = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
/// assert_eq!(Semester::of(june), Semester::First);
/// assert_eq!(Semester::of(july), Semester::Second);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Semester {
    /// January through June.
    First,
    /// July through December.
    Second,
}

impl Semester {
    /// Returns the semester a date falls in.
    pub fn of(date: NaiveDate) -> Self {
        if date.month() <= 6 {
            Semester::First
        } else {
            Semester::Second
        }
    }
}

impl std::fmt::Display for Semester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Semester::First => write!(f, "first semester (January-June)"),
            Semester::Second => write!(f, "second semester (July-December)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_january_is_first_semester() {
        assert_eq!(Semester::of(date("2025-01-01")), Semester::First);
    }

    #[test]
    fn test_june_july_boundary() {
        assert_eq!(Semester::of(date("2025-06-30")), Semester::First);
        assert_eq!(Semester::of(date("2025-07-01")), Semester::Second);
    }

    #[test]
    fn test_december_is_second_semester() {
        assert_eq!(Semester::of(date("2025-12-31")), Semester::Second);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Semester::First.to_string(),
            "first semester (January-June)"
        );
        assert_eq!(
            Semester::Second.to_string(),
            "second semester (July-December)"
        );
    }
}
