//! Cross-type same-day conflict check.

use rust_decimal::Decimal;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{LeaveEntry, LeaveType, workday_hours};

/// Checks a proposed entry against an existing entry of a different type on
/// the same date.
///
/// A day may be split across types (typically vacation plus PAR) as long as
/// the combined hours stay within a standard 8-hour workday. The rejection
/// carries the remaining-hours hint `8 - existing` so a caller can suggest
/// a value that would fit. Same-type overwrites are not a conflict; the
/// allotment and period-cap rules account for them.
pub fn check_cross_type_conflict(
    existing: Option<&LeaveEntry>,
    leave_type: LeaveType,
    hours: Decimal,
) -> LedgerResult<()> {
    let Some(existing) = existing else {
        return Ok(());
    };
    if existing.leave_type == leave_type {
        return Ok(());
    }

    if existing.hours + hours > workday_hours() {
        return Err(LedgerError::DailyCapExceeded {
            leave_type,
            cap: workday_hours(),
            remaining: workday_hours() - existing.hours,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn entry(leave_type: LeaveType, hours: &str) -> LeaveEntry {
        LeaveEntry {
            leave_type,
            hours: dec(hours),
        }
    }

    #[test]
    fn test_empty_date_never_conflicts() {
        assert!(check_cross_type_conflict(None, LeaveType::Vacation, dec("8")).is_ok());
    }

    #[test]
    fn test_same_type_overwrite_is_not_a_conflict() {
        let existing = entry(LeaveType::Vacation, "8");
        assert!(check_cross_type_conflict(Some(&existing), LeaveType::Vacation, dec("8")).is_ok());
    }

    #[test]
    fn test_split_day_within_8_hours_allowed() {
        let existing = entry(LeaveType::Vacation, "4");
        assert!(check_cross_type_conflict(Some(&existing), LeaveType::Par, dec("4")).is_ok());
        assert!(check_cross_type_conflict(Some(&existing), LeaveType::Par, dec("3.5")).is_ok());
    }

    #[test]
    fn test_combined_over_8_hours_rejected_with_hint() {
        let existing = entry(LeaveType::Vacation, "6");
        match check_cross_type_conflict(Some(&existing), LeaveType::Par, dec("4")) {
            Err(LedgerError::DailyCapExceeded {
                leave_type,
                cap,
                remaining,
            }) => {
                assert_eq!(leave_type, LeaveType::Par);
                assert_eq!(cap, dec("8"));
                assert_eq!(remaining, dec("2"));
            }
            other => panic!("Expected DailyCapExceeded, got {:?}", other),
        }
    }

    #[test]
    fn test_whole_day_entry_blocks_any_other_type() {
        let existing = entry(LeaveType::BirthdayGift, "8");
        match check_cross_type_conflict(Some(&existing), LeaveType::Vacation, dec("1")) {
            Err(LedgerError::DailyCapExceeded { remaining, .. }) => {
                assert_eq!(remaining, dec("0"));
            }
            other => panic!("Expected DailyCapExceeded, got {:?}", other),
        }
    }

    #[test]
    fn test_medical_visit_can_share_a_day() {
        let existing = entry(LeaveType::Vacation, "5");
        assert!(
            check_cross_type_conflict(Some(&existing), LeaveType::MedicalVisit, dec("3")).is_ok()
        );
    }
}
