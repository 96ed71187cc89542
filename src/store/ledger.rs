//! The leave ledger store and its query/command interface.

use std::collections::BTreeMap;

use chrono::{Datelike, Local, NaiveDate};
use rust_decimal::Decimal;
use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    AvailableHours, LeaveEntry, LeaveTotals, LeaveType, Semester, Settings, SettingsPatch,
    YearDefaults, YearRecord,
};

use super::data::StoreData;
use super::persistence::PersistenceBackend;

/// The process-wide leave ledger.
///
/// Owns the persisted data and the backend it is written through. There is
/// exactly one logical writer; every mutating operation persists the whole
/// store synchronously before returning success. When persistence fails the
/// in-memory state is already updated but unsaved, and the caller should
/// retry or alert.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use leave_ledger::models::{LeaveType, YearDefaults};
/// use leave_ledger::store::{LeaveStore, MemoryBackend};
///
/// let mut store =
///     LeaveStore::open(Box::new(MemoryBackend::new()), YearDefaults::default()).unwrap();
/// store.set_current_year(2025).unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
/// store.set_entry(date, LeaveType::Vacation, Decimal::new(8, 0)).unwrap();
/// assert_eq!(store.totals(2025).vacation, Decimal::new(8, 0));
/// ```
pub struct LeaveStore {
    data: StoreData,
    defaults: YearDefaults,
    backend: Box<dyn PersistenceBackend>,
}

impl LeaveStore {
    /// Opens the ledger through a persistence backend.
    ///
    /// Loads previously persisted data when the backend has any, otherwise
    /// starts a fresh store for the current system year. In both cases the
    /// current year is guaranteed a record and the result is persisted
    /// before returning.
    pub fn open(
        backend: Box<dyn PersistenceBackend>,
        defaults: YearDefaults,
    ) -> LedgerResult<Self> {
        let data = match backend.load()? {
            Some(data) => data,
            None => StoreData::new(Local::now().year(), &defaults),
        };

        let mut store = Self {
            data,
            defaults,
            backend,
        };
        let current_year = store.data.settings.current_year;
        store.data.ensure_year(current_year, &store.defaults);
        store.persist()?;
        Ok(store)
    }

    fn persist(&self) -> LedgerResult<()> {
        self.backend.save(&self.data)
    }

    /// The whole persisted state, for inspection and export.
    pub fn data(&self) -> &StoreData {
        &self.data
    }

    // ------------------------------------------------------------------
    // Entries
    // ------------------------------------------------------------------

    /// Returns the entry at a date, if any.
    pub fn get_entry(&self, date: NaiveDate) -> Option<&LeaveEntry> {
        self.data
            .years
            .get(&date.year())
            .and_then(|year| year.entries.get(&date))
    }

    /// Writes an entry at a date, replacing whatever was there.
    ///
    /// Last-write-wins regardless of the prior type; no merging. The year
    /// record is created lazily with the configured defaults. Validation
    /// lives in [`validate_and_apply`](crate::validation::validate_and_apply);
    /// this layer stores what it is given.
    pub fn set_entry(
        &mut self,
        date: NaiveDate,
        leave_type: LeaveType,
        hours: Decimal,
    ) -> LedgerResult<()> {
        let record = self.data.ensure_year(date.year(), &self.defaults);
        record.entries.insert(date, LeaveEntry { leave_type, hours });
        self.persist()
    }

    /// Removes the entry at a date, returning it.
    ///
    /// A missing entry is not an error; nothing is persisted in that case.
    pub fn delete_entry(&mut self, date: NaiveDate) -> LedgerResult<Option<LeaveEntry>> {
        let removed = self
            .data
            .years
            .get_mut(&date.year())
            .and_then(|year| year.entries.remove(&date));

        if removed.is_some() {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Returns a copy of all entries for a year, empty if the year is unknown.
    pub fn entries_for_year(&self, year: i32) -> BTreeMap<NaiveDate, LeaveEntry> {
        self.data
            .years
            .get(&year)
            .map(|record| record.entries.clone())
            .unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Aggregates
    // ------------------------------------------------------------------

    /// Computes per-type usage totals for a year.
    ///
    /// A single pass over the year's entries; O(n) and side-effect free.
    /// Unknown years yield all-zero totals.
    pub fn totals(&self, year: i32) -> LeaveTotals {
        let mut totals = LeaveTotals::default();
        if let Some(record) = self.data.years.get(&year) {
            for entry in record.entries.values() {
                totals.add(entry.leave_type, entry.hours);
            }
        }
        totals
    }

    /// Sums the hours of one leave type over a year.
    ///
    /// `excluding` removes one date's contribution, which is how cap checks
    /// ignore the entry about to be replaced.
    pub fn hours_of_type(
        &self,
        year: i32,
        leave_type: LeaveType,
        excluding: Option<NaiveDate>,
    ) -> Decimal {
        self.sum_entries(year, |date, entry| {
            entry.leave_type == leave_type && Some(date) != excluding
        })
    }

    /// Sums the hours of one leave type over a single semester of a year.
    pub fn semester_hours_of_type(
        &self,
        year: i32,
        semester: Semester,
        leave_type: LeaveType,
        excluding: Option<NaiveDate>,
    ) -> Decimal {
        self.sum_entries(year, |date, entry| {
            entry.leave_type == leave_type
                && Semester::of(date) == semester
                && Some(date) != excluding
        })
    }

    fn sum_entries<F>(&self, year: i32, keep: F) -> Decimal
    where
        F: Fn(NaiveDate, &LeaveEntry) -> bool,
    {
        let Some(record) = self.data.years.get(&year) else {
            return Decimal::ZERO;
        };
        record
            .entries
            .iter()
            .filter(|(date, entry)| keep(**date, entry))
            .map(|(_, entry)| entry.hours)
            .sum()
    }

    // ------------------------------------------------------------------
    // Allotments
    // ------------------------------------------------------------------

    /// Returns the configured allotments for a year without creating it.
    ///
    /// Unknown years report the configured defaults, matching what lazy
    /// creation would produce.
    pub fn availability(&self, year: i32) -> AvailableHours {
        match self.data.years.get(&year) {
            Some(record) => AvailableHours {
                vacation: record.available_vacation_hours,
                par: record.available_par_hours,
            },
            None => AvailableHours {
                vacation: self.defaults.vacation_hours,
                par: self.defaults.par_hours,
            },
        }
    }

    /// Returns the allotments for a year, creating its record if needed.
    ///
    /// The lazily created record is persisted before returning.
    pub fn available_hours(&mut self, year: i32) -> LedgerResult<AvailableHours> {
        let created = !self.data.years.contains_key(&year);
        let record = self.data.ensure_year(year, &self.defaults);
        let hours = AvailableHours {
            vacation: record.available_vacation_hours,
            par: record.available_par_hours,
        };
        if created {
            self.persist()?;
        }
        Ok(hours)
    }

    /// Overwrites the allotments for a year.
    ///
    /// No bounds validation at this layer; callers enforce non-negativity
    /// before calling.
    pub fn set_available_hours(
        &mut self,
        year: i32,
        vacation: Decimal,
        par: Decimal,
    ) -> LedgerResult<()> {
        let record = self.data.ensure_year(year, &self.defaults);
        record.available_vacation_hours = vacation;
        record.available_par_hours = par;
        self.persist()
    }

    /// Returns allotment minus usage for a year; negative when overdrawn.
    pub fn remaining_hours(&self, year: i32) -> AvailableHours {
        let available = self.availability(year);
        let totals = self.totals(year);
        AvailableHours {
            vacation: available.vacation - totals.vacation,
            par: available.par - totals.par,
        }
    }

    // ------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------

    /// Returns the current settings.
    pub fn settings(&self) -> &Settings {
        &self.data.settings
    }

    /// Applies a partial settings update and persists.
    ///
    /// When the patch changes the current year, that year's record is
    /// created if needed.
    pub fn update_settings(&mut self, patch: SettingsPatch) -> LedgerResult<()> {
        if let Some(year) = patch.current_year {
            self.data.ensure_year(year, &self.defaults);
        }
        self.data.settings.apply(patch);
        self.persist()
    }

    /// Switches the current year, creating its record if needed.
    pub fn set_current_year(&mut self, year: i32) -> LedgerResult<()> {
        self.update_settings(SettingsPatch {
            current_year: Some(year),
            ..Default::default()
        })
    }

    /// Resets the ledger to a fresh store for the current year.
    pub fn clear(&mut self) -> LedgerResult<()> {
        self.data = StoreData::new(self.data.settings.current_year, &self.defaults);
        info!("ledger cleared");
        self.persist()
    }

    // ------------------------------------------------------------------
    // Import/export
    // ------------------------------------------------------------------

    /// Exports the whole store as pretty-printed JSON.
    pub fn export_json(&self) -> LedgerResult<String> {
        serde_json::to_string_pretty(&self.data).map_err(|e| LedgerError::PersistenceError {
            message: format!("serializing export: {}", e),
        })
    }

    /// Exports a single year as pretty-printed JSON.
    ///
    /// The blob keeps the store shape (settings context plus a one-year
    /// `years` map) so it can be re-imported as-is. Unknown years export a
    /// defaults-backed empty record.
    pub fn export_year_json(&self, year: i32) -> LedgerResult<String> {
        let record = self
            .data
            .years
            .get(&year)
            .cloned()
            .unwrap_or_else(|| YearRecord::with_defaults(&self.defaults));

        let subset = StoreData {
            settings: self.data.settings.clone(),
            years: BTreeMap::from([(year, record)]),
        };
        serde_json::to_string_pretty(&subset).map_err(|e| LedgerError::PersistenceError {
            message: format!("serializing export: {}", e),
        })
    }

    /// Replaces the whole store with an imported JSON blob.
    ///
    /// The blob must carry the `settings` and `years` top-level keys and
    /// deserialize fully; otherwise [`LedgerError::MalformedImport`] is
    /// returned and the current state is untouched. On success the store is
    /// replaced, the imported current year is guaranteed a record, and the
    /// result is persisted.
    pub fn import_json(&mut self, json: &str) -> LedgerResult<()> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| LedgerError::MalformedImport {
                message: e.to_string(),
            })?;

        let object = value.as_object().ok_or_else(|| LedgerError::MalformedImport {
            message: "top level must be an object".to_string(),
        })?;
        for key in ["settings", "years"] {
            if !object.contains_key(key) {
                return Err(LedgerError::MalformedImport {
                    message: format!("missing required key `{}`", key),
                });
            }
        }

        let imported: StoreData =
            serde_json::from_value(value).map_err(|e| LedgerError::MalformedImport {
                message: e.to_string(),
            })?;

        // Fully validated; only now touch the live state.
        self.data = imported;
        let current_year = self.data.settings.current_year;
        self.data.ensure_year(current_year, &self.defaults);
        info!(current_year, "ledger data imported");
        self.persist()
    }
}
