//! Leave types and single-day leave entries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Returns the hours in a standard working day (8).
///
/// Whole-day leave types must be recorded in exactly this many hours, and
/// the combined hours on any single date may never exceed it.
pub fn workday_hours() -> Decimal {
    Decimal::new(8, 0)
}

/// The category of a leave entry.
///
/// Each type carries its own cap table: a daily cap, a whole-day
/// requirement, and an annual or per-semester cap where one applies.
///
/// # Example
///
/// ```
/// use leave_ledger::models::LeaveType;
/// use rust_decimal::Decimal;
///
/// assert!(LeaveType::BirthdayGift.is_whole_day());
/// assert_eq!(LeaveType::MedicalVisit.daily_cap(), Some(Decimal::new(3, 0)));
/// assert_eq!(LeaveType::Volunteering.annual_cap(), Some(Decimal::new(24, 0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LeaveType {
    /// Vacation hours, drawn from the yearly vacation allotment.
    Vacation,
    /// PAR hours, a secondary paid-leave bank capped independently.
    Par,
    /// Company birthday gift day: one full 8-hour day per year.
    BirthdayGift,
    /// Wellbeing day: one full 8-hour day per semester.
    Wellbeing,
    /// Volunteering: up to three full 8-hour days per year.
    Volunteering,
    /// Medical visit: up to 3 hours per day, no yearly cap.
    MedicalVisit,
}

impl LeaveType {
    /// All leave types, in persisted-name order.
    pub const ALL: [LeaveType; 6] = [
        LeaveType::Vacation,
        LeaveType::Par,
        LeaveType::BirthdayGift,
        LeaveType::Wellbeing,
        LeaveType::Volunteering,
        LeaveType::MedicalVisit,
    ];

    /// Returns true for types that may only be recorded as full 8-hour days.
    pub fn is_whole_day(self) -> bool {
        matches!(
            self,
            LeaveType::BirthdayGift | LeaveType::Wellbeing | LeaveType::Volunteering
        )
    }

    /// Returns true for types drawn from a configurable yearly allotment.
    pub fn uses_allotment(self) -> bool {
        matches!(self, LeaveType::Vacation | LeaveType::Par)
    }

    /// Returns the per-day hour cap for this type, if one applies.
    ///
    /// Whole-day types have no daily cap here; their exact-8-hours
    /// requirement is enforced separately.
    pub fn daily_cap(self) -> Option<Decimal> {
        match self {
            LeaveType::Vacation | LeaveType::Par => Some(workday_hours()),
            LeaveType::MedicalVisit => Some(Decimal::new(3, 0)),
            _ => None,
        }
    }

    /// Returns the yearly hour cap for this type, if one applies.
    pub fn annual_cap(self) -> Option<Decimal> {
        match self {
            LeaveType::BirthdayGift => Some(Decimal::new(8, 0)),
            LeaveType::Volunteering => Some(Decimal::new(24, 0)),
            _ => None,
        }
    }

    /// Returns the per-semester hour cap for this type, if one applies.
    pub fn semester_cap(self) -> Option<Decimal> {
        match self {
            LeaveType::Wellbeing => Some(Decimal::new(8, 0)),
            _ => None,
        }
    }
}

impl std::fmt::Display for LeaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LeaveType::Vacation => "vacation",
            LeaveType::Par => "PAR",
            LeaveType::BirthdayGift => "birthday gift",
            LeaveType::Wellbeing => "wellbeing",
            LeaveType::Volunteering => "volunteering",
            LeaveType::MedicalVisit => "medical visit",
        };
        write!(f, "{}", name)
    }
}

/// A leave entry for a single calendar date.
///
/// A date holds at most one entry; writing a new entry for the same date
/// replaces whatever was there, regardless of the prior type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveEntry {
    /// The category of leave taken.
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    /// Hours taken, positive and at most 24.
    pub hours: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_whole_day_classification() {
        assert!(LeaveType::BirthdayGift.is_whole_day());
        assert!(LeaveType::Wellbeing.is_whole_day());
        assert!(LeaveType::Volunteering.is_whole_day());
        assert!(!LeaveType::Vacation.is_whole_day());
        assert!(!LeaveType::Par.is_whole_day());
        assert!(!LeaveType::MedicalVisit.is_whole_day());
    }

    #[test]
    fn test_allotment_types() {
        assert!(LeaveType::Vacation.uses_allotment());
        assert!(LeaveType::Par.uses_allotment());
        assert!(!LeaveType::MedicalVisit.uses_allotment());
        assert!(!LeaveType::Wellbeing.uses_allotment());
    }

    #[test]
    fn test_daily_caps() {
        assert_eq!(LeaveType::Vacation.daily_cap(), Some(dec("8")));
        assert_eq!(LeaveType::Par.daily_cap(), Some(dec("8")));
        assert_eq!(LeaveType::MedicalVisit.daily_cap(), Some(dec("3")));
        assert_eq!(LeaveType::BirthdayGift.daily_cap(), None);
    }

    #[test]
    fn test_annual_and_semester_caps() {
        assert_eq!(LeaveType::BirthdayGift.annual_cap(), Some(dec("8")));
        assert_eq!(LeaveType::Volunteering.annual_cap(), Some(dec("24")));
        assert_eq!(LeaveType::Wellbeing.annual_cap(), None);
        assert_eq!(LeaveType::Wellbeing.semester_cap(), Some(dec("8")));
        assert_eq!(LeaveType::Vacation.semester_cap(), None);
    }

    #[test]
    fn test_leave_type_serializes_to_camel_case() {
        assert_eq!(
            serde_json::to_string(&LeaveType::BirthdayGift).unwrap(),
            "\"birthdayGift\""
        );
        assert_eq!(
            serde_json::to_string(&LeaveType::MedicalVisit).unwrap(),
            "\"medicalVisit\""
        );
        assert_eq!(serde_json::to_string(&LeaveType::Par).unwrap(), "\"par\"");
    }

    #[test]
    fn test_entry_serializes_type_field() {
        let entry = LeaveEntry {
            leave_type: LeaveType::Vacation,
            hours: dec("4.5"),
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"type\":\"vacation\""));

        let deserialized: LeaveEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, entry);
    }

    #[test]
    fn test_entry_deserializes_integer_hours() {
        let entry: LeaveEntry = serde_json::from_str(r#"{"type":"par","hours":8}"#).unwrap();
        assert_eq!(entry.leave_type, LeaveType::Par);
        assert_eq!(entry.hours, dec("8"));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(LeaveType::Par.to_string(), "PAR");
        assert_eq!(LeaveType::BirthdayGift.to_string(), "birthday gift");
        assert_eq!(LeaveType::MedicalVisit.to_string(), "medical visit");
    }
}
