//! Canonical location store.
//!
//! [`LocationStore`] owns the two ordered sequences the app operates on (the
//! active list and the trash) and a [`Storage`] backend. Every mutation
//! persists the affected slot immediately.
//!
//! # Failure policy
//!
//! Nothing in this layer propagates an error. A load that fails to decode is
//! treated as absent data and falls back to the seed list; a save that fails
//! is logged at warn level and dropped. The user-visible contract is "the
//! action appeared to do nothing", never a crash.

use crate::domain::{LocationRecord, TrashedLocation};
use crate::storage::backend::Storage;
use crate::storage::defaults::default_locations;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Owner of the canonical active and trash sequences.
///
/// All index arguments are validated; out-of-range indices make the
/// operation a no-op rather than a panic, covering stale indices held by a
/// caller across mutations.
pub struct LocationStore {
    /// Injected persistence port.
    storage: Box<dyn Storage>,

    /// Active saved locations, in user order.
    locations: Vec<LocationRecord>,

    /// Soft-deleted locations, in deletion order.
    trash: Vec<TrashedLocation>,
}

impl LocationStore {
    /// Creates an empty store over `storage`. Call [`load`](Self::load)
    /// before use.
    #[must_use]
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self {
            storage,
            locations: Vec::new(),
            trash: Vec::new(),
        }
    }

    /// Loads both slots from the backend.
    ///
    /// A missing, malformed, or empty locations slot falls back to the
    /// three-city seed. A missing or malformed trash slot falls back to an
    /// empty trash. Never errors.
    ///
    /// The single-home invariant is re-enforced after decoding: if an
    /// out-of-band edit left several records flagged as home, only the first
    /// keeps the flag.
    pub fn load(&mut self) {
        let _span = tracing::debug_span!("store_load").entered();

        self.locations = match self.storage.load_locations() {
            Ok(Some(records)) if !records.is_empty() => records,
            Ok(_) => {
                tracing::debug!("no saved locations, seeding defaults");
                default_locations()
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load saved locations, seeding defaults");
                default_locations()
            }
        };

        let mut home_seen = false;
        for record in &mut self.locations {
            if record.is_user_location {
                if home_seen {
                    record.is_user_location = false;
                } else {
                    home_seen = true;
                }
            }
        }

        self.trash = match self.storage.load_trash() {
            Ok(Some(entries)) => entries,
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load trash, starting empty");
                Vec::new()
            }
        };

        tracing::debug!(
            location_count = self.locations.len(),
            trash_count = self.trash.len(),
            "store loaded"
        );
    }

    /// The active list, in user order.
    #[must_use]
    pub fn locations(&self) -> &[LocationRecord] {
        &self.locations
    }

    /// The trash, in deletion order.
    #[must_use]
    pub fn trash(&self) -> &[TrashedLocation] {
        &self.trash
    }

    /// Index of the active record with `id`, if present.
    #[must_use]
    pub fn position(&self, id: Uuid) -> Option<usize> {
        self.locations.iter().position(|r| r.id == id)
    }

    fn persist_locations(&mut self) {
        if let Err(e) = self.storage.save_locations(&self.locations) {
            tracing::warn!(error = %e, "failed to persist saved locations, keeping in-memory state");
        }
    }

    fn persist_trash(&mut self) {
        if let Err(e) = self.storage.save_trash(&self.trash) {
            tracing::warn!(error = %e, "failed to persist trash, keeping in-memory state");
        }
    }

    /// Sets the record at `index` as the user's home location, clearing the
    /// flag everywhere else in one atomic pass.
    ///
    /// Returns `false` (and changes nothing) when `index` is out of range.
    pub fn set_home(&mut self, index: usize) -> bool {
        if index >= self.locations.len() {
            tracing::debug!(index, "set_home index out of range");
            return false;
        }
        for (i, record) in self.locations.iter_mut().enumerate() {
            record.is_user_location = i == index;
        }
        self.persist_locations();
        true
    }

    /// Moves one record from `from` to `to`, preserving the relative order
    /// of everything else (stable move, not a swap).
    ///
    /// Returns `false` when either index is out of range or the move is a
    /// no-op.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let len = self.locations.len();
        if from >= len || to >= len || from == to {
            return false;
        }
        let record = self.locations.remove(from);
        self.locations.insert(to, record);
        self.persist_locations();
        true
    }

    /// Inserts a new record at the front of the active list.
    pub fn insert_at_front(&mut self, record: LocationRecord) {
        self.locations.insert(0, record);
        self.persist_locations();
    }

    /// Inserts a record at `index`, clamped to the current length.
    ///
    /// The clamp is what makes an undo against a since-shrunk list a safe
    /// re-append instead of a panic.
    pub fn insert_at(&mut self, index: usize, record: LocationRecord) {
        let index = index.min(self.locations.len());
        self.locations.insert(index, record);
        self.persist_locations();
    }

    /// Removes the active record with `id`, returning it with its index.
    pub fn remove_by_id(&mut self, id: Uuid) -> Option<(LocationRecord, usize)> {
        let index = self.position(id)?;
        let record = self.locations.remove(index);
        self.persist_locations();
        Some((record, index))
    }

    /// Updates the card style of the active record with `id`.
    ///
    /// Returns `false` when no such record exists.
    pub fn set_card_style(&mut self, id: Uuid, style: crate::domain::CardStyle) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.locations[index].card_style = style;
        self.persist_locations();
        true
    }

    /// Appends an entry to the trash.
    pub fn push_trash(&mut self, entry: TrashedLocation) {
        self.trash.push(entry);
        self.persist_trash();
    }

    /// Reinserts an entry into the trash at `index`, clamped to the current
    /// length.
    pub fn insert_trash_at(&mut self, index: usize, entry: TrashedLocation) {
        let index = index.min(self.trash.len());
        self.trash.insert(index, entry);
        self.persist_trash();
    }

    /// Removes the trash entry with `id`, returning it with its index.
    pub fn remove_trash(&mut self, id: Uuid) -> Option<(TrashedLocation, usize)> {
        let index = self.trash.iter().position(|t| t.id == id)?;
        let entry = self.trash.remove(index);
        self.persist_trash();
        Some((entry, index))
    }

    /// Permanently removes every expired trash entry as of `now`.
    ///
    /// Survivors keep their relative (insertion) order. Returns how many
    /// entries were removed; the slot is only rewritten when that count is
    /// nonzero.
    pub fn sweep_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.trash.len();
        self.trash.retain(|entry| !entry.is_expired(now));
        let removed = before - self.trash.len();
        if removed > 0 {
            tracing::debug!(removed, "expiry sweep removed entries");
            self.persist_trash();
        }
        removed
    }
}
