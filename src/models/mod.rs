//! Core data models for the leave ledger.
//!
//! This module contains all the domain models used throughout the crate.

mod entry;
mod semester;
mod settings;
mod totals;
mod year;

pub use entry::{LeaveEntry, LeaveType, workday_hours};
pub use semester::Semester;
pub use settings::{Settings, SettingsPatch};
pub use totals::LeaveTotals;
pub use year::{
    AvailableHours, YearDefaults, YearRecord, default_par_hours, default_vacation_hours,
};
