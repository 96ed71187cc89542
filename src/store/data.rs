//! The persisted store shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Settings, YearDefaults, YearRecord};

/// The whole persisted state: settings plus one record per known year.
///
/// This is the exact shape written to the backing store and produced by
/// export. Years are keyed by integer year (serialized as JSON object
/// keys), entries within a year by ISO date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreData {
    /// Process-wide settings.
    pub settings: Settings,
    /// Per-year records, keyed by year.
    pub years: BTreeMap<i32, YearRecord>,
}

impl StoreData {
    /// Creates a fresh store for the given current year.
    pub fn new(current_year: i32, defaults: &YearDefaults) -> Self {
        let mut years = BTreeMap::new();
        years.insert(current_year, YearRecord::with_defaults(defaults));
        Self {
            settings: Settings {
                current_year,
                user_name: String::new(),
                user_identifier: None,
            },
            years,
        }
    }

    /// Returns the record for a year, creating it with defaults if absent.
    pub fn ensure_year(&mut self, year: i32, defaults: &YearDefaults) -> &mut YearRecord {
        self.years
            .entry(year)
            .or_insert_with(|| YearRecord::with_defaults(defaults))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_vacation_hours;
    use rust_decimal::Decimal;

    #[test]
    fn test_new_store_contains_current_year() {
        let data = StoreData::new(2025, &YearDefaults::default());
        assert_eq!(data.settings.current_year, 2025);
        assert_eq!(data.settings.user_name, "");
        assert!(data.years.contains_key(&2025));
    }

    #[test]
    fn test_ensure_year_is_idempotent() {
        let defaults = YearDefaults::default();
        let mut data = StoreData::new(2025, &defaults);

        data.ensure_year(2026, &defaults);
        assert_eq!(data.years.len(), 2);

        // A second call must not reset an existing record.
        data.years.get_mut(&2026).unwrap().available_vacation_hours = Decimal::new(40, 0);
        data.ensure_year(2026, &defaults);
        assert_eq!(
            data.years[&2026].available_vacation_hours,
            Decimal::new(40, 0)
        );
    }

    #[test]
    fn test_year_keys_serialize_as_strings() {
        let data = StoreData::new(2025, &YearDefaults::default());
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"2025\""));

        let roundtrip: StoreData = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, data);
        assert_eq!(
            roundtrip.years[&2025].available_vacation_hours,
            default_vacation_hours()
        );
    }
}
