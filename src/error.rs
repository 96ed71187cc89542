//! Error types for the leave ledger.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Validation failures carry enough structured data (remaining hours, the
//! cap that was hit, the semester involved) for a caller to render a
//! human-readable message without re-deriving any numbers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{LeaveType, Semester};

/// The main error type for the leave ledger.
///
/// All operations in the crate return this error type. Validation failures
/// are ordinary rejections, not faults: the ledger is left unchanged when
/// one is returned. [`LedgerError::PersistenceError`] is the exception —
/// the in-memory state may already be updated but not durably saved, and
/// the caller should surface it distinctly so the user knows to retry.
///
/// # Example
///
/// ```
/// use leave_ledger::error::LedgerError;
/// use rust_decimal::Decimal;
///
/// let error = LedgerError::InvalidHours {
///     hours: Decimal::new(25, 0),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid hours value 25: must be greater than 0 and at most 24"
/// );
/// ```
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The proposed hours value is outside the accepted (0, 24] range.
    #[error("Invalid hours value {hours}: must be greater than 0 and at most 24")]
    InvalidHours {
        /// The rejected hours value.
        hours: Decimal,
    },

    /// A per-day hour limit would be exceeded.
    ///
    /// Raised both by the per-type daily cap (vacation/PAR at 8h, medical
    /// visits at 3h) and by the cross-type conflict check when a date
    /// already holds an entry of a different type.
    #[error("Daily cap exceeded for {leave_type}: at most {cap}h per day, {remaining}h still available on this date")]
    DailyCapExceeded {
        /// The leave type being recorded.
        leave_type: LeaveType,
        /// The daily cap that applies.
        cap: Decimal,
        /// Hours still available on this date.
        remaining: Decimal,
    },

    /// The yearly allotment for vacation or PAR hours would be exceeded.
    #[error("Allotment exceeded for {leave_type}: requested {requested}h but only {remaining}h remain this year")]
    AllotmentExceeded {
        /// The leave type being recorded.
        leave_type: LeaveType,
        /// The hours requested.
        requested: Decimal,
        /// Hours remaining in the allotment (may be negative if already over).
        remaining: Decimal,
    },

    /// A whole-day leave type was recorded with something other than 8 hours.
    ///
    /// The caller should reset the proposed value to 8 rather than silently
    /// coercing it.
    #[error("{leave_type} must be recorded as a full 8-hour day")]
    MustBeFullDay {
        /// The whole-day leave type.
        leave_type: LeaveType,
    },

    /// A yearly cap for a whole-day leave type would be exceeded.
    #[error("Annual cap exceeded for {leave_type}: at most {cap}h per year, {remaining}h still available")]
    AnnualCapExceeded {
        /// The leave type being recorded.
        leave_type: LeaveType,
        /// The annual cap in hours.
        cap: Decimal,
        /// Hours still available this year.
        remaining: Decimal,
    },

    /// A per-semester cap would be exceeded.
    #[error("Semester cap exceeded for {leave_type}: at most {cap}h in the {semester}, {remaining}h still available")]
    SemesterCapExceeded {
        /// The leave type being recorded.
        leave_type: LeaveType,
        /// The semester in which the cap was hit.
        semester: Semester,
        /// The semester cap in hours.
        cap: Decimal,
        /// Hours still available in that semester.
        remaining: Decimal,
    },

    /// A date range has its end before its start.
    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidDateRange {
        /// The start of the range.
        start: NaiveDate,
        /// The end of the range.
        end: NaiveDate,
    },

    /// A range insert found no working day without an existing entry.
    #[error("No eligible working days between {start} and {end}")]
    NoEligibleDatesInRange {
        /// The start of the range.
        start: NaiveDate,
        /// The end of the range.
        end: NaiveDate,
    },

    /// An imported JSON blob failed structural validation.
    ///
    /// The in-memory store is never modified when this is returned.
    #[error("Malformed import: {message}")]
    MalformedImport {
        /// A description of what made the blob invalid.
        message: String,
    },

    /// The backing store write (or read) failed.
    #[error("Failed to persist ledger data: {message}")]
    PersistenceError {
        /// A description of the persistence failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return [`LedgerError`].
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_invalid_hours_displays_value() {
        let error = LedgerError::InvalidHours { hours: dec("0") };
        assert_eq!(
            error.to_string(),
            "Invalid hours value 0: must be greater than 0 and at most 24"
        );
    }

    #[test]
    fn test_daily_cap_displays_remaining_hint() {
        let error = LedgerError::DailyCapExceeded {
            leave_type: LeaveType::Par,
            cap: dec("8"),
            remaining: dec("3.5"),
        };
        assert_eq!(
            error.to_string(),
            "Daily cap exceeded for PAR: at most 8h per day, 3.5h still available on this date"
        );
    }

    #[test]
    fn test_allotment_exceeded_displays_remainder() {
        let error = LedgerError::AllotmentExceeded {
            leave_type: LeaveType::Vacation,
            requested: dec("8"),
            remaining: dec("4"),
        };
        assert_eq!(
            error.to_string(),
            "Allotment exceeded for vacation: requested 8h but only 4h remain this year"
        );
    }

    #[test]
    fn test_must_be_full_day_names_type() {
        let error = LedgerError::MustBeFullDay {
            leave_type: LeaveType::BirthdayGift,
        };
        assert_eq!(
            error.to_string(),
            "birthday gift must be recorded as a full 8-hour day"
        );
    }

    #[test]
    fn test_semester_cap_names_semester() {
        let error = LedgerError::SemesterCapExceeded {
            leave_type: LeaveType::Wellbeing,
            semester: Semester::Second,
            cap: dec("8"),
            remaining: dec("0"),
        };
        assert_eq!(
            error.to_string(),
            "Semester cap exceeded for wellbeing: at most 8h in the second semester (July-December), 0h still available"
        );
    }

    #[test]
    fn test_invalid_date_range_displays_both_ends() {
        let error = LedgerError::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date range: end 2025-03-03 is before start 2025-03-10"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<LedgerError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_malformed_import() -> LedgerResult<()> {
            Err(LedgerError::MalformedImport {
                message: "missing required key `years`".to_string(),
            })
        }

        fn propagates_error() -> LedgerResult<()> {
            returns_malformed_import()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
