//! SkyGraph location core: saved locations, soft-delete trash, bounded undo.
//!
//! This crate is the non-visual core of the SkyGraph weather app's location
//! management. It owns the ordered list of saved locations, the trash with
//! its 30-day retention, and the single pending-undo countdown that makes
//! deletes, restores, and purges reversible for a few seconds.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Embedding runtime (views, timers, platform calls)  │  ← out of scope
//! └─────────────────────────────────────────────────────┘
//!                        │ events            ▲ view models, actions
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Lifecycle logic
//! │  - Pending-undo countdown                           │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Collaborators │
//! │ (ui/)         │   │ (storage/)    │   │ (calendar/)   │
//! │ - View models │   │ - JSON slots  │   │ - Event port  │
//! └───────────────┘   │ - Store       │   └───────────────┘
//!                     └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Paths, Clock (infrastructure/)                   │
//! │  - Records, retention rule (domain/)                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Lifecycle state machine with event/action model
//! - [`domain`]: Core record types and the expiry rule
//! - [`storage`]: Two-slot JSON persistence and the canonical store
//! - [`ui`]: View model types for the presentation layer
//! - [`calendar`]: Calendar collaborator contract
//! - [`infrastructure`]: Data directory and wall-clock ports
//! - [`observability`]: Optional tracing subscriber setup
//!
//! # Lifecycle model
//!
//! A saved location is **Active** until deleted. A delete removes it from
//! the active list and holds it in a pending-undo context for five seconds;
//! an undo tap puts it back at its old index, an elapsed countdown commits
//! it to the **Trash** stamped with the deletion instant. Trashed entries
//! can be restored or purged (each with its own short undo), and anything
//! older than 30 days is silently dropped by the expiry sweep when the
//! trash view opens. Only one undo context exists at a time: starting a new
//! undo-bearing action finalizes the previous one first.
//!
//! Every mutation persists its slot immediately. Persistence failures never
//! surface: a bad load falls back to the built-in seed list, a bad save is
//! logged and dropped.
//!
//! # Examples
//!
//! ```
//! use skygraph::app::messages::ThreadRandom;
//! use skygraph::app::{handle_event, AppState, Event};
//! use skygraph::infrastructure::SystemClock;
//! use skygraph::storage::MemoryStorage;
//!
//! let mut state = AppState::new(
//!     Box::new(MemoryStorage::new()),
//!     Box::new(SystemClock),
//!     Box::new(ThreadRandom),
//! );
//!
//! handle_event(&mut state, &Event::Load);
//! assert_eq!(state.locations().len(), 3); // first-run seed
//!
//! let id = state.locations()[0].id;
//! let (_, actions) = handle_event(&mut state, &Event::Delete { id });
//! assert!(!actions.is_empty()); // haptic + undo banner
//!
//! handle_event(&mut state, &Event::Undo);
//! assert_eq!(state.locations().len(), 3);
//! ```

pub mod app;
pub mod calendar;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;

pub use app::{handle_event, Action, AppState, EditMode, Event, HapticFeedback, ViewMode};
pub use domain::{LocationRecord, Result, SkygraphError, TrashedLocation};

use crate::app::messages::ThreadRandom;
use crate::infrastructure::SystemClock;
use crate::storage::JsonStorage;
use std::path::{Path, PathBuf};

/// Application configuration.
///
/// All fields are optional; the defaults give a working setup backed by the
/// platform data directory.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// Directory holding the persisted slots. Defaults to the platform data
    /// directory (see [`infrastructure::get_data_dir`]).
    pub data_dir: Option<PathBuf>,

    /// Tracing filter directive for [`observability::init_tracing`],
    /// e.g. `"debug"` or `"skygraph=trace"`. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| SkygraphError::Config(format!("failed to parse config: {e}")))
    }

    /// The effective data directory.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(infrastructure::get_data_dir)
    }
}

/// Initializes the application state with production ports.
///
/// Wires up JSON storage under the configured data directory, the system
/// clock, and the thread-local random source, then loads both slots.
///
/// # Errors
///
/// Returns an error only if the data directory cannot be created; every
/// later persistence failure degrades silently per the store's policy.
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!("initializing skygraph core");

    let storage = JsonStorage::new(config.data_dir())?;
    let mut state = AppState::new(
        Box::new(storage),
        Box::new(SystemClock),
        Box::new(ThreadRandom),
    );
    state.load();
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parses_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skygraph.toml");
        std::fs::write(&path, "data_dir = \"/tmp/skygraph-test\"\ntrace_level = \"debug\"")
            .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/skygraph-test"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));

        assert!(Config::from_file(dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn empty_config_falls_back_to_platform_dir() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.trace_level.is_none());
        assert!(!config.data_dir().as_os_str().is_empty());
    }

    #[test]
    fn initialize_seeds_defaults_on_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            data_dir: Some(dir.path().to_path_buf()),
            trace_level: None,
        };

        let state = initialize(&config).unwrap();
        assert_eq!(state.locations().len(), 3);
    }
}
