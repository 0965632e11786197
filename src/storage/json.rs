//! JSON file-based storage backend.
//!
//! This module provides a simple, human-readable storage implementation using
//! JSON serialization. Each slot lives in its own file (`locations.json`,
//! `trash.json`) and is written atomically (write-to-temp + rename) to
//! prevent corruption on crashes. The two files are never written together;
//! a crash between a trash write and a locations write leaves each file
//! individually consistent.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - loads an entire slot into memory once
//! - **Write**: O(n) - serializes and writes the whole slot
//! - **Best for**: a few dozen saved locations, infrequent writes

use crate::domain::error::{Result, SkygraphError};
use crate::domain::{LocationRecord, TrashedLocation};
use crate::storage::backend::Storage;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the saved-locations slot.
const LOCATIONS_FILE: &str = "locations.json";

/// File name of the trash slot.
const TRASH_FILE: &str = "trash.json";

/// On-disk container for one slot.
///
/// Wraps the record sequence with a format version for future migrations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SlotData<T> {
    /// Version of the storage format.
    version: u32,

    /// The full ordered sequence held by the slot.
    #[serde(default = "Vec::new")]
    records: Vec<T>,
}

impl<T> SlotData<T> {
    fn new(records: Vec<T>) -> Self {
        Self { version: 1, records }
    }
}

/// JSON file storage backend.
///
/// Stores the active location list and the trash in two independent JSON
/// files under a data directory. Each write replaces the whole slot via an
/// atomic rename.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`. The lifecycle runs on a single
/// cooperative timeline and the store is its exclusive owner.
pub struct JsonStorage {
    /// Directory holding the slot files.
    data_dir: PathBuf,
}

impl JsonStorage {
    /// Creates or opens a JSON storage backend rooted at `data_dir`.
    ///
    /// The directory is created if it does not exist. Slot files are only
    /// created on first save.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use skygraph::storage::JsonStorage;
    /// use std::path::PathBuf;
    ///
    /// let storage = JsonStorage::new(PathBuf::from("/tmp/skygraph"))?;
    /// # Ok::<(), skygraph::domain::SkygraphError>(())
    /// ```
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?data_dir, "initializing JSON storage");
        std::fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    fn locations_path(&self) -> PathBuf {
        self.data_dir.join(LOCATIONS_FILE)
    }

    fn trash_path(&self) -> PathBuf {
        self.data_dir.join(TRASH_FILE)
    }

    /// Loads one slot from disk.
    ///
    /// A missing file is not an error; it reads back as `None` so the caller
    /// can apply its first-run policy.
    fn load_slot<T: DeserializeOwned>(path: &Path) -> Result<Option<Vec<T>>> {
        if !path.exists() {
            tracing::debug!(path = ?path, "slot file missing");
            return Ok(None);
        }

        let contents = std::fs::read_to_string(path)?;
        let data: SlotData<T> = serde_json::from_str(&contents)
            .map_err(|e| SkygraphError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            path = ?path,
            version = data.version,
            count = data.records.len(),
            "loaded slot"
        );

        Ok(Some(data.records))
    }

    /// Saves one slot to disk using an atomic write.
    ///
    /// Writes to a temporary file first, then renames it to the target path,
    /// so the slot is never left in a half-written state.
    fn save_slot<T: Serialize + Clone>(path: &Path, records: &[T]) -> Result<()> {
        let json = serde_json::to_string_pretty(&SlotData::new(records.to_vec()))
            .map_err(|e| SkygraphError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;

        tracing::trace!(path = ?path, "renaming temporary file to final location");
        std::fs::rename(&tmp_path, path)?;

        Ok(())
    }
}

impl Storage for JsonStorage {
    fn load_locations(&self) -> Result<Option<Vec<LocationRecord>>> {
        let _span = tracing::debug_span!("json_load_locations").entered();
        Self::load_slot(&self.locations_path())
    }

    fn save_locations(&mut self, records: &[LocationRecord]) -> Result<()> {
        let _span =
            tracing::debug_span!("json_save_locations", count = records.len()).entered();
        Self::save_slot(&self.locations_path(), records)
    }

    fn load_trash(&self) -> Result<Option<Vec<TrashedLocation>>> {
        let _span = tracing::debug_span!("json_load_trash").entered();
        Self::load_slot(&self.trash_path())
    }

    fn save_trash(&mut self, entries: &[TrashedLocation]) -> Result<()> {
        let _span = tracing::debug_span!("json_save_trash", count = entries.len()).entered();
        Self::save_slot(&self.trash_path(), entries)
    }
}
