//! Storage layer for persistent location and trash data.
//!
//! This module provides the persistence abstraction for the saved-locations
//! list and the trash, plus the canonical in-memory store that owns both
//! sequences. Persistence is two independent whole-value JSON slots; each
//! mutation rewrites the affected slot.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation
//! - `memory`: In-memory backends for tests and embedding
//! - `defaults`: First-run seed data
//! - `store`: Canonical store with the silent-failure policy

pub mod backend;
pub mod defaults;
pub mod json;
pub mod memory;
pub mod store;

pub use backend::Storage;
pub use defaults::default_locations;
pub use json::JsonStorage;
pub use memory::{FailingStorage, MemoryStorage};
pub use store::LocationStore;
