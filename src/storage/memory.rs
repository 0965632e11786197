//! In-memory storage backend.
//!
//! A [`Storage`] implementation backed by shared in-memory slots. Clones
//! share the same underlying data, so a test can hand one handle to the
//! store and keep another to observe what was persisted.

use crate::domain::error::Result;
use crate::domain::{LocationRecord, TrashedLocation};
use crate::storage::backend::Storage;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct Slots {
    locations: Option<Vec<LocationRecord>>,
    trash: Option<Vec<TrashedLocation>>,
}

/// In-memory storage backend for tests and embedding.
///
/// Slots start out unwritten (reads return `Ok(None)`), matching the
/// first-run behavior of the JSON backend.
///
/// # Examples
///
/// ```
/// use skygraph::storage::{MemoryStorage, Storage};
///
/// let mut storage = MemoryStorage::new();
/// let observer = storage.clone();
///
/// storage.save_locations(&[]).unwrap();
/// assert_eq!(observer.load_locations().unwrap(), Some(vec![]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<Slots>>,
}

impl MemoryStorage {
    /// Creates an empty backend with both slots unwritten.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slots(&self) -> std::sync::MutexGuard<'_, Slots> {
        // A poisoned lock means a test already panicked; propagating the
        // panic here is fine.
        self.slots.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Storage for MemoryStorage {
    fn load_locations(&self) -> Result<Option<Vec<LocationRecord>>> {
        Ok(self.slots().locations.clone())
    }

    fn save_locations(&mut self, records: &[LocationRecord]) -> Result<()> {
        self.slots().locations = Some(records.to_vec());
        Ok(())
    }

    fn load_trash(&self) -> Result<Option<Vec<TrashedLocation>>> {
        Ok(self.slots().trash.clone())
    }

    fn save_trash(&mut self, entries: &[TrashedLocation]) -> Result<()> {
        self.slots().trash = Some(entries.to_vec());
        Ok(())
    }
}

/// A backend whose saves always fail.
///
/// Used to exercise the silent-degradation policy of the store: a failed
/// save must never surface to the lifecycle, only to the log.
#[derive(Debug, Clone, Default)]
pub struct FailingStorage;

impl Storage for FailingStorage {
    fn load_locations(&self) -> Result<Option<Vec<LocationRecord>>> {
        Err(crate::domain::SkygraphError::Storage("load refused".to_string()))
    }

    fn save_locations(&mut self, _records: &[LocationRecord]) -> Result<()> {
        Err(crate::domain::SkygraphError::Storage("save refused".to_string()))
    }

    fn load_trash(&self) -> Result<Option<Vec<TrashedLocation>>> {
        Err(crate::domain::SkygraphError::Storage("load refused".to_string()))
    }

    fn save_trash(&mut self, _entries: &[TrashedLocation]) -> Result<()> {
        Err(crate::domain::SkygraphError::Storage("save refused".to_string()))
    }
}
