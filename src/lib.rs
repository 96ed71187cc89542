//! Leave Ledger and Validation Engine
//!
//! This crate keeps a per-year ledger of leave entries (one entry per date),
//! validates proposed entries against Italian contractual rules (daily caps,
//! yearly allotments, whole-day types, annual and semester caps), and plans
//! bulk insert/delete operations over working days.

#![warn(missing_docs)]

pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod planner;
pub mod store;
pub mod validation;
