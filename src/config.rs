//! Configuration loading for the leave ledger.
//!
//! Configuration lives in a single YAML file covering the data file
//! location and the default yearly allotments. Every field is optional
//! and falls back to a built-in default.
//!
//! # Example
//!
//! ```no_run
//! use leave_ledger::config::LedgerConfig;
//!
//! let config = LedgerConfig::load("./leave_ledger.yaml").unwrap();
//! println!("Data file: {}", config.data_file.display());
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{YearDefaults, default_par_hours, default_vacation_hours};

fn default_data_file() -> PathBuf {
    PathBuf::from("leave_ledger.json")
}

/// Runtime configuration loaded from a YAML file.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    /// Vacation hours granted to a newly created year.
    #[serde(default = "default_vacation_hours")]
    pub default_vacation_hours: rust_decimal::Decimal,
    /// PAR hours granted to a newly created year.
    #[serde(default = "default_par_hours")]
    pub default_par_hours: rust_decimal::Decimal,
    /// Where the JSON store is persisted.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            default_vacation_hours: default_vacation_hours(),
            default_par_hours: default_par_hours(),
            data_file: default_data_file(),
        }
    }
}

impl LedgerConfig {
    /// Loads configuration from a YAML file.
    ///
    /// Returns `ConfigNotFound` if the file cannot be read and
    /// `ConfigParseError` if it is not valid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> LedgerResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| LedgerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| LedgerError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// The allotments applied to years created without explicit values.
    pub fn year_defaults(&self) -> YearDefaults {
        YearDefaults {
            vacation_hours: self.default_vacation_hours,
            par_hours: self.default_par_hours,
        }
    }
}
