//! Storage backend abstraction.
//!
//! This module defines the [`Storage`] trait that abstracts over different persistence
//! backends. This allows seamless switching between storage implementations without
//! changing lifecycle logic, and lets tests substitute an in-memory fake.
//!
//! # Design Philosophy
//!
//! The trait models exactly what the app persists: two independent
//! whole-value slots, one for the active location list and one for the trash.
//! There is no incremental update format and no transaction spanning both
//! slots; each save overwrites one slot completely.

use crate::domain::error::Result;
use crate::domain::{LocationRecord, TrashedLocation};

/// Abstraction over persistent storage backends.
///
/// Implementations persist the two slots independently. A missing slot reads
/// back as `Ok(None)`; a malformed slot is a hard `Err` and the layer above
/// decides the fallback policy.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): one JSON file per slot
///   with atomic writes (default)
/// - [`MemoryStorage`](crate::storage::MemoryStorage): in-memory slots for
///   tests and embedding
pub trait Storage: Send {
    /// Reads the saved-locations slot.
    ///
    /// Returns `Ok(None)` if the slot has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot exists but cannot be read or decoded.
    fn load_locations(&self) -> Result<Option<Vec<LocationRecord>>>;

    /// Overwrites the saved-locations slot with the full ordered sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the write fails.
    fn save_locations(&mut self, records: &[LocationRecord]) -> Result<()>;

    /// Reads the trash slot.
    ///
    /// Returns `Ok(None)` if the slot has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot exists but cannot be read or decoded.
    fn load_trash(&self) -> Result<Option<Vec<TrashedLocation>>>;

    /// Overwrites the trash slot with the full ordered sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the write fails.
    fn save_trash(&mut self, entries: &[TrashedLocation]) -> Result<()>;
}
