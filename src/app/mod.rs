//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core lifecycle logic layer, sitting between the
//! embedding runtime and the domain/storage layers. It implements the
//! event-driven architecture that powers the location list and the trash.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                                            │
//!                                            └──▶ Store persists each mutation
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`messages`]: Undo-banner message selection with an injected random source
//! - [`modes`]: View and edit mode state types
//! - [`state`]: Central state container, lifecycle operations, view models
//! - [`undo`]: Pending-undo context and countdown arithmetic

pub mod actions;
pub mod handler;
pub mod messages;
pub mod modes;
pub mod state;
pub mod undo;

pub use actions::{Action, HapticFeedback};
pub use handler::{handle_event, Event};
pub use modes::{EditMode, ViewMode};
pub use state::{AppState, TickOutcome};
pub use undo::{PendingKind, PendingUndo, DELETE_UNDO_WINDOW_MS, TRASH_UNDO_WINDOW_MS, UNDO_TICK_MS};
