//! Persistence backends for the ledger store.
//!
//! The store never touches the filesystem directly; it talks to a
//! [`PersistenceBackend`] injected at construction. [`JsonFileBackend`] is
//! the production implementation, [`MemoryBackend`] the in-memory fake
//! used by tests.

use std::cell::{Cell, RefCell};
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};

use super::data::StoreData;

/// A synchronous, all-or-nothing backing store for the ledger.
pub trait PersistenceBackend {
    /// Loads previously persisted data, or `None` if nothing was saved yet.
    fn load(&self) -> LedgerResult<Option<StoreData>>;

    /// Persists the whole store. Either everything is written or the
    /// previous state remains intact.
    fn save(&self, data: &StoreData) -> LedgerResult<()>;
}

impl<B: PersistenceBackend + ?Sized> PersistenceBackend for Rc<B> {
    fn load(&self) -> LedgerResult<Option<StoreData>> {
        (**self).load()
    }

    fn save(&self, data: &StoreData) -> LedgerResult<()> {
        (**self).save(data)
    }
}

/// File-backed persistence: one pretty-printed JSON blob per ledger.
///
/// Saves write to a temporary sibling file and rename it into place, so a
/// failed write never leaves a truncated blob behind.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Creates a backend writing to the given path.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The path this backend reads and writes.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl PersistenceBackend for JsonFileBackend {
    fn load(&self) -> LedgerResult<Option<StoreData>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| LedgerError::PersistenceError {
                message: format!("reading {}: {}", self.path.display(), e),
            })?;

        let data = serde_json::from_str(&content).map_err(|e| LedgerError::PersistenceError {
            message: format!("parsing {}: {}", self.path.display(), e),
        })?;

        debug!(path = %self.path.display(), "ledger data loaded");
        Ok(Some(data))
    }

    fn save(&self, data: &StoreData) -> LedgerResult<()> {
        let json =
            serde_json::to_string_pretty(data).map_err(|e| LedgerError::PersistenceError {
                message: format!("serializing ledger data: {}", e),
            })?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| LedgerError::PersistenceError {
            message: format!("writing {}: {}", tmp.display(), e),
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| LedgerError::PersistenceError {
            message: format!("replacing {}: {}", self.path.display(), e),
        })?;

        debug!(path = %self.path.display(), "ledger data persisted");
        Ok(())
    }
}

/// In-memory persistence for tests.
///
/// Keeps the last saved snapshot and can be switched into a failing mode
/// to exercise [`LedgerError::PersistenceError`] paths. Hold the backend in
/// an `Rc` to inspect it after handing it to the store:
///
/// ```
/// use std::rc::Rc;
/// use leave_ledger::store::{LeaveStore, MemoryBackend};
/// use leave_ledger::models::YearDefaults;
///
/// let backend = Rc::new(MemoryBackend::new());
/// let store = LeaveStore::open(Box::new(backend.clone()), YearDefaults::default()).unwrap();
/// assert_eq!(backend.snapshot().unwrap().settings, *store.settings());
/// ```
#[derive(Debug, Default)]
pub struct MemoryBackend {
    stored: RefCell<Option<StoreData>>,
    fail_saves: Cell<bool>,
}

impl MemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-seeded with data, as if previously persisted.
    pub fn seeded(data: StoreData) -> Self {
        Self {
            stored: RefCell::new(Some(data)),
            fail_saves: Cell::new(false),
        }
    }

    /// Makes every subsequent save fail with a `PersistenceError`.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// Returns a copy of the last successfully saved snapshot.
    pub fn snapshot(&self) -> Option<StoreData> {
        self.stored.borrow().clone()
    }
}

impl PersistenceBackend for MemoryBackend {
    fn load(&self) -> LedgerResult<Option<StoreData>> {
        Ok(self.stored.borrow().clone())
    }

    fn save(&self, data: &StoreData) -> LedgerResult<()> {
        if self.fail_saves.get() {
            return Err(LedgerError::PersistenceError {
                message: "simulated write failure".to_string(),
            });
        }
        *self.stored.borrow_mut() = Some(data.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::YearDefaults;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("leave_ledger_{}_{}.json", name, std::process::id()));
        path
    }

    #[test]
    fn test_file_backend_load_missing_file_is_none() {
        let backend = JsonFileBackend::new(temp_path("missing"));
        assert!(backend.load().unwrap().is_none());
    }

    #[test]
    fn test_file_backend_save_load_round_trip() {
        let path = temp_path("round_trip");
        let backend = JsonFileBackend::new(&path);
        let data = StoreData::new(2025, &YearDefaults::default());

        backend.save(&data).unwrap();
        let loaded = backend.load().unwrap().unwrap();
        assert_eq!(loaded, data);

        // No temp file left behind after a successful save.
        assert!(!path.with_extension("json.tmp").exists());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_backend_rejects_corrupt_blob() {
        let path = temp_path("corrupt");
        fs::write(&path, "{ not json").unwrap();

        let backend = JsonFileBackend::new(&path);
        match backend.load() {
            Err(LedgerError::PersistenceError { message }) => {
                assert!(message.contains("parsing"));
            }
            other => panic!("Expected PersistenceError, got {:?}", other.map(|_| ())),
        }
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_memory_backend_starts_empty() {
        let backend = MemoryBackend::new();
        assert!(backend.load().unwrap().is_none());
        assert!(backend.snapshot().is_none());
    }

    #[test]
    fn test_memory_backend_keeps_last_save() {
        let backend = MemoryBackend::new();
        let first = StoreData::new(2024, &YearDefaults::default());
        let second = StoreData::new(2025, &YearDefaults::default());

        backend.save(&first).unwrap();
        backend.save(&second).unwrap();
        assert_eq!(backend.snapshot().unwrap(), second);
    }

    #[test]
    fn test_memory_backend_failing_mode() {
        let backend = MemoryBackend::new();
        let data = StoreData::new(2025, &YearDefaults::default());
        backend.save(&data).unwrap();

        backend.set_fail_saves(true);
        let err = backend.save(&data).unwrap_err();
        assert!(matches!(err, LedgerError::PersistenceError { .. }));

        // The previous snapshot survives a failed save.
        assert_eq!(backend.snapshot().unwrap(), data);

        backend.set_fail_saves(false);
        backend.save(&data).unwrap();
    }
}
