//! The leave ledger store: persisted data shape, persistence backends, and
//! the [`LeaveStore`] that owns them.
//!
//! Every mutating operation persists the whole store synchronously before
//! returning success. The backend is injected at construction, so tests run
//! against [`MemoryBackend`] while production code uses [`JsonFileBackend`].

mod data;
mod ledger;
mod persistence;

pub use data::StoreData;
pub use ledger::LeaveStore;
pub use persistence::{JsonFileBackend, MemoryBackend, PersistenceBackend};
