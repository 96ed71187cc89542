//! Holiday calculator for the Italian public calendar.
//!
//! This module computes the movable Easter Monday holiday via the Computus
//! algorithm and combines it with the ten fixed-date Italian public
//! holidays. The range planner uses it to exclude non-working days.

mod easter;
mod holidays;

pub use easter::{easter, easter_monday};
pub use holidays::{holidays, is_holiday, is_weekend, is_working_day};
