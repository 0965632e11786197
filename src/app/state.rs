//! Application state and the soft-delete lifecycle.
//!
//! This module defines [`AppState`], the single owner of the location store,
//! the pending-undo context, and the transient view state (view mode, edit
//! mode, trash selection). All lifecycle operations live here as state
//! methods; the event handler translates events into calls and collects side
//! effects.
//!
//! # Lifecycle
//!
//! A record moves between three states:
//!
//! ```text
//! Active ──delete──▶ PendingUndo ──countdown elapses──▶ Trashed
//!    ▲                    │                                │
//!    └──────undo──────────┘            restore ────────────┤
//!                                      purge / expiry ──▶ gone
//! ```
//!
//! While a delete is pending the record is held only in the undo context, in
//! neither list. Starting any new undo-bearing operation finalizes the
//! pending one first, so at most one context ever exists.
//!
//! # Failure policy
//!
//! No method returns an error. Stale ids and indices make the operation a
//! no-op; persistence failures are absorbed by the store.

use crate::app::messages::{removal_message, RandomSource, ACTION_COMPLETED, REMOVAL_MESSAGE_COUNT};
use crate::app::modes::{EditMode, ViewMode};
use crate::app::undo::{
    PendingKind, PendingUndo, DELETE_UNDO_WINDOW_MS, TRASH_UNDO_WINDOW_MS,
};
use crate::domain::{CardStyle, LocationRecord, TrashedLocation};
use crate::infrastructure::Clock;
use crate::storage::{LocationStore, Storage};
use crate::ui::viewmodel::{
    LocationItem, LocationsViewModel, TrashItem, TrashViewModel, UndoBannerInfo,
};
use std::collections::HashSet;
use uuid::Uuid;

/// Result of advancing the undo countdown by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No undo is pending.
    Idle,

    /// The countdown is still running; the progress indicator moved.
    Counting,

    /// The window elapsed and the pending action was finalized.
    Finalized,
}

/// Central application state container.
///
/// Mutated only by its own methods, from the single main execution context.
/// View models are computed on demand from state snapshots.
pub struct AppState {
    /// Canonical active and trash sequences with their persistence.
    store: LocationStore,

    /// The singleton undo context, if a countdown is running.
    pending_undo: Option<PendingUndo>,

    /// Which list is presented.
    pub view_mode: ViewMode,

    /// Whether editing affordances are exposed.
    pub edit_mode: EditMode,

    /// Trash entries marked in multi-select.
    pub selection: HashSet<Uuid>,

    /// Injected wall clock.
    clock: Box<dyn Clock>,

    /// Injected index source for banner messages.
    random: Box<dyn RandomSource>,
}

impl AppState {
    /// Creates a state over the given ports. Nothing is loaded until
    /// [`load`](Self::load) runs (typically from the first view-appear
    /// event).
    #[must_use]
    pub fn new(
        storage: Box<dyn Storage>,
        clock: Box<dyn Clock>,
        random: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            store: LocationStore::new(storage),
            pending_undo: None,
            view_mode: ViewMode::Locations,
            edit_mode: EditMode::Browsing,
            selection: HashSet::new(),
            clock,
            random,
        }
    }

    /// The active list, in user order.
    #[must_use]
    pub fn locations(&self) -> &[LocationRecord] {
        self.store.locations()
    }

    /// The trash, in deletion order.
    #[must_use]
    pub fn trash(&self) -> &[TrashedLocation] {
        self.store.trash()
    }

    /// The running undo context, if any.
    #[must_use]
    pub fn pending_undo(&self) -> Option<&PendingUndo> {
        self.pending_undo.as_ref()
    }

    /// Loads both slots from storage, seeding defaults as needed.
    pub fn load(&mut self) {
        self.store.load();
    }

    /// Adds a new location at the front of the active list.
    pub fn add_location(&mut self, record: LocationRecord) {
        let _span =
            tracing::debug_span!("add_location", city = %record.model.city).entered();
        self.store.insert_at_front(record);
    }

    /// Marks the record at `index` as the user's home location.
    ///
    /// The flag swap is atomic across the list; out-of-range is a no-op.
    pub fn set_home(&mut self, index: usize) -> bool {
        self.store.set_home(index)
    }

    /// Moves a record between positions in the active list (stable move).
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        self.store.reorder(from, to)
    }

    /// Updates the card style of one active record.
    pub fn set_card_style(&mut self, id: Uuid, style: CardStyle) -> bool {
        self.store.set_card_style(id, style)
    }

    /// Soft-deletes the active record with `id`.
    ///
    /// The record leaves the active list and is held in a fresh undo context
    /// with a 5-second countdown. A previously pending action is finalized
    /// first. Returns the banner message, or `None` if no such record
    /// exists.
    pub fn delete(&mut self, id: Uuid) -> Option<String> {
        let _span = tracing::debug_span!("delete_location", %id).entered();
        self.finalize_pending();

        let (record, index) = self.store.remove_by_id(id)?;
        let pick = self.random.pick_index(REMOVAL_MESSAGE_COUNT);
        let message = removal_message(&record.model.city, pick);

        tracing::debug!(city = %record.model.city, index, "location soft-deleted");
        self.pending_undo = Some(PendingUndo::new(
            PendingKind::Delete { record, index },
            message.clone(),
            self.clock.now(),
            DELETE_UNDO_WINDOW_MS,
        ));
        Some(message)
    }

    /// Reverses the pending action, if any.
    ///
    /// - A pending delete reinserts the record at its captured index.
    /// - A pending restore pulls the restored records back out of the active
    ///   list and returns them to the trash at their captured indices.
    /// - A pending purge reinserts the purged entries into the trash.
    ///
    /// Returns `false` (and must not fail) when nothing is pending. Captured
    /// indices that no longer fit are clamped, never a panic.
    pub fn undo(&mut self) -> bool {
        let Some(pending) = self.pending_undo.take() else {
            tracing::debug!("undo with nothing pending");
            return false;
        };

        match pending.kind {
            PendingKind::Delete { record, index } => {
                tracing::debug!(city = %record.model.city, index, "undoing delete");
                self.store.insert_at(index, record);
            }
            PendingKind::Restore { entries } => {
                tracing::debug!(count = entries.len(), "undoing restore");
                // Reinsert in reverse removal order so captured indices land
                // back where they were.
                for (entry, _) in &entries {
                    let _ = self.store.remove_by_id(entry.id);
                }
                for (entry, trash_index) in entries.into_iter().rev() {
                    self.store.insert_trash_at(trash_index, entry);
                }
            }
            PendingKind::Purge { entries } => {
                tracing::debug!(count = entries.len(), "undoing purge");
                for (entry, trash_index) in entries.into_iter().rev() {
                    self.store.insert_trash_at(trash_index, entry);
                }
            }
        }
        true
    }

    /// Advances the countdown against the current clock.
    ///
    /// When the window has elapsed the pending action is finalized: a
    /// pending delete moves its record into the trash stamped with the
    /// finalize instant.
    pub fn tick(&mut self) -> TickOutcome {
        match &self.pending_undo {
            None => TickOutcome::Idle,
            Some(pending) if pending.is_elapsed(self.clock.now()) => {
                self.finalize_pending();
                TickOutcome::Finalized
            }
            Some(_) => TickOutcome::Counting,
        }
    }

    /// Commits the pending action immediately.
    ///
    /// Called when the countdown elapses and implicitly before any new
    /// undo-bearing operation starts. No-op when nothing is pending.
    pub fn finalize_pending(&mut self) {
        let Some(pending) = self.pending_undo.take() else {
            return;
        };
        match pending.kind {
            PendingKind::Delete { record, .. } => {
                let deleted_at = self.clock.now();
                tracing::debug!(city = %record.model.city, "finalizing delete into trash");
                self.store.push_trash(TrashedLocation::new(record, deleted_at));
            }
            // Restores and purges were already applied; dropping the context
            // is the commit.
            PendingKind::Restore { .. } | PendingKind::Purge { .. } => {}
        }
    }

    /// Switches to the locations view.
    pub fn open_locations(&mut self) {
        self.view_mode = ViewMode::Locations;
        self.edit_mode = EditMode::Browsing;
        self.selection.clear();
    }

    /// Switches to the trash view and runs the expiry sweep.
    ///
    /// The sweep silently drops every entry older than 30 days, in insertion
    /// order, with no undo offered. Returns how many entries were removed.
    pub fn open_trash(&mut self) -> usize {
        self.view_mode = ViewMode::Trash;
        self.edit_mode = EditMode::Browsing;
        self.selection.clear();
        self.store.sweep_expired(self.clock.now())
    }

    /// Toggles editing affordances; leaving edit mode clears the selection.
    pub fn toggle_edit_mode(&mut self) {
        self.edit_mode = self.edit_mode.toggled();
        if !self.edit_mode.is_editing() {
            self.selection.clear();
        }
    }

    /// Toggles trash multi-selection for `id`. Only effective in edit mode.
    pub fn toggle_selection(&mut self, id: Uuid) -> bool {
        if !self.edit_mode.is_editing() {
            return false;
        }
        if !self.selection.remove(&id) {
            self.selection.insert(id);
        }
        true
    }

    /// Restores the trash entry with `id` to the front of the active list.
    ///
    /// Offers a 4-second undo that moves it back to the trash. Returns
    /// `false` if no such entry exists.
    pub fn restore(&mut self, id: Uuid) -> bool {
        self.restore_entries(&[id]) > 0
    }

    /// Permanently removes the trash entry with `id`.
    ///
    /// Offers a 4-second undo that reinserts it. Returns `false` if no such
    /// entry exists.
    pub fn purge(&mut self, id: Uuid) -> bool {
        self.purge_entries(&[id]) > 0
    }

    /// Restores every selected trash entry, clearing the selection.
    ///
    /// One aggregate undo covers the whole batch. Returns how many entries
    /// were restored.
    pub fn restore_selected(&mut self) -> usize {
        let ids = self.take_selection();
        self.restore_entries(&ids)
    }

    /// Permanently removes every selected trash entry, clearing the
    /// selection.
    ///
    /// One aggregate undo covers the whole batch. Returns how many entries
    /// were removed.
    pub fn purge_selected(&mut self) -> usize {
        let ids = self.take_selection();
        self.purge_entries(&ids)
    }

    /// Drains the selection in trash order.
    fn take_selection(&mut self) -> Vec<Uuid> {
        let ids: Vec<Uuid> = self
            .store
            .trash()
            .iter()
            .map(|entry| entry.id)
            .filter(|id| self.selection.contains(id))
            .collect();
        self.selection.clear();
        ids
    }

    fn restore_entries(&mut self, ids: &[Uuid]) -> usize {
        let _span = tracing::debug_span!("restore_entries", count = ids.len()).entered();
        self.finalize_pending();

        let mut entries = Vec::with_capacity(ids.len());
        for &id in ids {
            if let Some((entry, trash_index)) = self.store.remove_trash(id) {
                entries.push((entry, trash_index));
            }
        }
        if entries.is_empty() {
            return 0;
        }

        // Front-insert in reverse so the batch keeps its relative order.
        for (entry, _) in entries.iter().rev() {
            self.store.insert_at_front(entry.clone().into_location());
        }

        let count = entries.len();
        tracing::debug!(count, "trash entries restored");
        self.pending_undo = Some(PendingUndo::new(
            PendingKind::Restore { entries },
            ACTION_COMPLETED.to_string(),
            self.clock.now(),
            TRASH_UNDO_WINDOW_MS,
        ));
        count
    }

    fn purge_entries(&mut self, ids: &[Uuid]) -> usize {
        let _span = tracing::debug_span!("purge_entries", count = ids.len()).entered();
        self.finalize_pending();

        let mut entries = Vec::with_capacity(ids.len());
        for &id in ids {
            if let Some((entry, trash_index)) = self.store.remove_trash(id) {
                entries.push((entry, trash_index));
            }
        }
        if entries.is_empty() {
            return 0;
        }

        let count = entries.len();
        tracing::debug!(count, "trash entries permanently removed");
        self.pending_undo = Some(PendingUndo::new(
            PendingKind::Purge { entries },
            ACTION_COMPLETED.to_string(),
            self.clock.now(),
            TRASH_UNDO_WINDOW_MS,
        ));
        count
    }

    /// Computes the renderable projection of the active list.
    #[must_use]
    pub fn locations_viewmodel(&self) -> LocationsViewModel {
        let editing = self.edit_mode.is_editing();
        let items = self
            .store
            .locations()
            .iter()
            .map(|record| LocationItem {
                id: record.id,
                city: record.model.city.clone(),
                temp: record.model.temp,
                condition: record.model.condition.clone(),
                icon: record.model.weather_icon_name.clone(),
                headline: record.model.headline(),
                hourly_temps: record.model.hourly_temps.clone(),
                is_home: record.is_user_location,
                alert_title: record.alert_title.clone(),
                card_style: record.card_style,
                shows_style_picker: editing,
                reorderable: editing,
            })
            .collect();

        LocationsViewModel {
            items,
            edit_mode: editing,
            undo_banner: self.undo_banner(),
        }
    }

    /// Computes the renderable projection of the trash.
    ///
    /// The full trash is always projected; any further filtering is
    /// presentation-only and out of scope here.
    #[must_use]
    pub fn trash_viewmodel(&self) -> TrashViewModel {
        let items = self
            .store
            .trash()
            .iter()
            .map(|entry| TrashItem {
                id: entry.id,
                city: entry.location.model.city.clone(),
                icon: entry.location.model.weather_icon_name.clone(),
                headline: entry.location.model.headline(),
                deleted_at: entry.deleted_at,
                is_selected: self.selection.contains(&entry.id),
            })
            .collect();

        TrashViewModel {
            items,
            selection_count: self.selection.len(),
            undo_banner: self.undo_banner(),
        }
    }

    fn undo_banner(&self) -> Option<UndoBannerInfo> {
        let now = self.clock.now();
        self.pending_undo.as_ref().map(|pending| UndoBannerInfo {
            message: pending.message.clone(),
            progress: pending.progress(now),
            icon: match &pending.kind {
                PendingKind::Delete { record, .. } => {
                    Some(record.model.weather_icon_name.clone())
                }
                PendingKind::Restore { .. } | PendingKind::Purge { .. } => None,
            },
        })
    }
}
