//! Per-type usage totals for a year.

use rust_decimal::Decimal;
use serde::Serialize;

use super::entry::LeaveType;

/// Hours used per leave type over one year.
///
/// Produced by a single pass over a year's entries; always recomputed from
/// the ledger, never maintained incrementally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveTotals {
    /// Vacation hours used.
    pub vacation: Decimal,
    /// PAR hours used.
    pub par: Decimal,
    /// Birthday gift hours used.
    pub birthday_gift: Decimal,
    /// Wellbeing hours used.
    pub wellbeing: Decimal,
    /// Volunteering hours used.
    pub volunteering: Decimal,
    /// Medical visit hours used.
    pub medical_visit: Decimal,
}

impl LeaveTotals {
    /// Adds hours to the bucket for a leave type.
    pub fn add(&mut self, leave_type: LeaveType, hours: Decimal) {
        match leave_type {
            LeaveType::Vacation => self.vacation += hours,
            LeaveType::Par => self.par += hours,
            LeaveType::BirthdayGift => self.birthday_gift += hours,
            LeaveType::Wellbeing => self.wellbeing += hours,
            LeaveType::Volunteering => self.volunteering += hours,
            LeaveType::MedicalVisit => self.medical_visit += hours,
        }
    }

    /// Returns the hours used for a leave type.
    pub fn of_type(&self, leave_type: LeaveType) -> Decimal {
        match leave_type {
            LeaveType::Vacation => self.vacation,
            LeaveType::Par => self.par,
            LeaveType::BirthdayGift => self.birthday_gift,
            LeaveType::Wellbeing => self.wellbeing,
            LeaveType::Volunteering => self.volunteering,
            LeaveType::MedicalVisit => self.medical_visit,
        }
    }
}
