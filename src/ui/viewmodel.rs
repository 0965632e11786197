//! View model types representing renderable list state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain pre-computed display information: the card headline, selection
//! marks, and the undo banner's countdown progress.
//!
//! # Architecture
//!
//! View models are created via `AppState::locations_viewmodel()` and
//! `AppState::trash_viewmodel()` and consumed by the platform view layer.
//! They contain no mutation logic; every user action routes back through the
//! event handler.

use crate::domain::CardStyle;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Renderable projection of the active saved-locations list.
#[derive(Debug, Clone)]
pub struct LocationsViewModel {
    /// Cards to display, in user order.
    pub items: Vec<LocationItem>,

    /// Whether editing affordances (reorder handles, style pickers) are
    /// visible.
    pub edit_mode: bool,

    /// The undo affordance, while a countdown is running.
    pub undo_banner: Option<UndoBannerInfo>,
}

/// Display information for one saved-location card.
#[derive(Debug, Clone)]
pub struct LocationItem {
    /// Stable record identity, used as the row identifier.
    pub id: Uuid,

    /// City name.
    pub city: String,

    /// Current temperature.
    pub temp: i32,

    /// Condition text.
    pub condition: String,

    /// Condition icon reference.
    pub icon: String,

    /// Prominent advisory line for the card.
    pub headline: String,

    /// Hourly temperature samples for the card's sparkline.
    pub hourly_temps: Vec<i32>,

    /// Whether this is the user's home location.
    pub is_home: bool,

    /// Active weather alert banner, if any.
    pub alert_title: Option<String>,

    /// Card presentation style.
    pub card_style: CardStyle,

    /// Whether the per-row style picker is exposed (edit mode).
    pub shows_style_picker: bool,

    /// Whether the row can be drag-reordered (edit mode).
    pub reorderable: bool,
}

/// Display information for the undo affordance.
#[derive(Debug, Clone)]
pub struct UndoBannerInfo {
    /// Message next to the undo button.
    pub message: String,

    /// Remaining countdown as a fraction, `1.0` down to `0.0`.
    pub progress: f64,

    /// Preview icon of the removed record, when the pending action is a
    /// delete.
    pub icon: Option<String>,
}

/// Renderable projection of the trash.
///
/// Always the full trash list; filtering, if any, is presentation-only.
#[derive(Debug, Clone)]
pub struct TrashViewModel {
    /// Trashed cards, in deletion order.
    pub items: Vec<TrashItem>,

    /// How many entries are currently multi-selected.
    pub selection_count: usize,

    /// The undo affordance, while a countdown is running.
    pub undo_banner: Option<UndoBannerInfo>,
}

/// Display information for one trashed-location card.
#[derive(Debug, Clone)]
pub struct TrashItem {
    /// Stable entry identity, used as the row identifier.
    pub id: Uuid,

    /// City name.
    pub city: String,

    /// Condition icon reference.
    pub icon: String,

    /// Prominent advisory line for the card.
    pub headline: String,

    /// Instant the record was moved to trash.
    pub deleted_at: DateTime<Utc>,

    /// Whether the entry is marked in multi-select.
    pub is_selected: bool,
}
