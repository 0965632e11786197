//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and timer ticks, translating them into state changes and action
//! sequences. It serves as the primary control flow coordinator for the
//! lifecycle.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the embedding runtime (taps, ticks, view appears)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! Events are processed strictly in arrival order on the single main
//! execution context; nothing here returns an error. An event that cannot
//! apply (stale id, out-of-range index, nothing pending) degrades to a
//! no-render no-op.

use crate::app::actions::{Action, HapticFeedback};
use crate::app::messages::ACTION_COMPLETED;
use crate::app::state::{AppState, TickOutcome};
use crate::calendar::WeatherEvent;
use crate::domain::{CardStyle, ForecastDay, LocationRecord};
use uuid::Uuid;

/// Events triggered by user input, timer ticks, or view transitions.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes these sequentially, ensuring
/// deterministic state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Loads both persisted slots; fired when the locations view first
    /// appears. Falls back to the seed list when nothing is saved.
    Load,

    /// Adds a new location at the front of the active list.
    AddLocation {
        /// The record to insert.
        record: LocationRecord,
    },

    /// Soft-deletes an active location and starts the undo countdown.
    Delete {
        /// Id of the record to remove.
        id: Uuid,
    },

    /// Reverses the pending action, if any.
    Undo,

    /// Advances the undo countdown; finalizes the pending action once the
    /// window has elapsed. Expected roughly every
    /// [`UNDO_TICK_MS`](crate::app::undo::UNDO_TICK_MS) while a countdown
    /// runs, but correctness does not depend on the cadence.
    Tick,

    /// Marks the record at `index` as the user's home location.
    SetHome {
        /// Position in the active list.
        index: usize,
    },

    /// Moves a record between positions in the active list.
    Reorder {
        /// Source position.
        from: usize,
        /// Destination position.
        to: usize,
    },

    /// Changes the card style of one active record.
    SetCardStyle {
        /// Id of the record to update.
        id: Uuid,
        /// The new style.
        style: CardStyle,
    },

    /// Toggles editing affordances for the current view.
    ToggleEditMode,

    /// Switches to the locations view.
    OpenLocations,

    /// Switches to the trash view and runs the expiry sweep.
    OpenTrash,

    /// Restores one trash entry to the active list.
    Restore {
        /// Id of the trash entry.
        id: Uuid,
    },

    /// Permanently removes one trash entry.
    PurgeForever {
        /// Id of the trash entry.
        id: Uuid,
    },

    /// Toggles multi-selection of one trash entry (edit mode only).
    ToggleSelection {
        /// Id of the trash entry.
        id: Uuid,
    },

    /// Restores every selected trash entry with one aggregate undo.
    RestoreSelected,

    /// Permanently removes every selected trash entry with one aggregate
    /// undo.
    PurgeSelected,

    /// Exports a forecast day to the calendar collaborator.
    AddToCalendar {
        /// The day to export.
        day: ForecastDay,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns a pair of (render needed, actions). The render flag is `true`
/// whenever the visible projection may have changed; actions are side
/// effects for the runtime, executed in order.
///
/// # Examples
///
/// ```
/// use skygraph::app::{handle_event, AppState, Event};
/// use skygraph::app::messages::ThreadRandom;
/// use skygraph::infrastructure::SystemClock;
/// use skygraph::storage::MemoryStorage;
///
/// let mut state = AppState::new(
///     Box::new(MemoryStorage::new()),
///     Box::new(SystemClock),
///     Box::new(ThreadRandom),
/// );
/// let (render, actions) = handle_event(&mut state, &Event::Load);
/// assert!(render);
/// assert!(actions.is_empty());
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Load => {
            state.load();
            (true, vec![])
        }
        Event::AddLocation { record } => {
            state.add_location(record.clone());
            (true, vec![])
        }
        Event::Delete { id } => match state.delete(*id) {
            Some(message) => (
                true,
                vec![
                    Action::Haptic(HapticFeedback::Rigid),
                    Action::ShowUndoBanner { message },
                ],
            ),
            None => (false, vec![]),
        },
        Event::Undo => {
            if state.undo() {
                (
                    true,
                    vec![Action::Haptic(HapticFeedback::Light), Action::HideUndoBanner],
                )
            } else {
                (false, vec![])
            }
        }
        Event::Tick => match state.tick() {
            TickOutcome::Idle => (false, vec![]),
            TickOutcome::Counting => (true, vec![]),
            TickOutcome::Finalized => (true, vec![Action::HideUndoBanner]),
        },
        Event::SetHome { index } => (state.set_home(*index), vec![]),
        Event::Reorder { from, to } => (state.reorder(*from, *to), vec![]),
        Event::SetCardStyle { id, style } => (state.set_card_style(*id, *style), vec![]),
        Event::ToggleEditMode => {
            state.toggle_edit_mode();
            (true, vec![])
        }
        Event::OpenLocations => {
            state.open_locations();
            (true, vec![])
        }
        Event::OpenTrash => {
            let removed = state.open_trash();
            tracing::debug!(removed, "trash opened");
            (true, vec![])
        }
        Event::Restore { id } => {
            if state.restore(*id) {
                (true, trash_undo_actions())
            } else {
                (false, vec![])
            }
        }
        Event::PurgeForever { id } => {
            if state.purge(*id) {
                (true, trash_undo_actions())
            } else {
                (false, vec![])
            }
        }
        Event::ToggleSelection { id } => (state.toggle_selection(*id), vec![]),
        Event::RestoreSelected => {
            if state.restore_selected() > 0 {
                (true, trash_undo_actions())
            } else {
                (false, vec![])
            }
        }
        Event::PurgeSelected => {
            if state.purge_selected() > 0 {
                (true, trash_undo_actions())
            } else {
                (false, vec![])
            }
        }
        Event::AddToCalendar { day } => (
            false,
            vec![Action::CreateCalendarEvent {
                event: WeatherEvent::from_day(day),
            }],
        ),
    }
}

/// Actions accompanying a successful trash-side operation: the snackbar with
/// its success haptic.
fn trash_undo_actions() -> Vec<Action> {
    vec![
        Action::Haptic(HapticFeedback::Success),
        Action::ShowUndoBanner {
            message: ACTION_COMPLETED.to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::messages::FixedRandom;
    use crate::app::undo::DELETE_UNDO_WINDOW_MS;
    use crate::domain::LocationModel;
    use crate::infrastructure::ManualClock;
    use crate::storage::{MemoryStorage, Storage};
    use chrono::{Duration, Utc};

    fn record(city: &str) -> LocationRecord {
        LocationRecord::new(LocationModel::new(city, 70, "Clear", "sun.max.fill", vec![70; 8]))
    }

    fn state_with(records: Vec<LocationRecord>) -> (AppState, ManualClock) {
        let clock = ManualClock::new(Utc::now());
        let mut backing = MemoryStorage::new();
        backing.save_locations(&records).unwrap();
        let mut state = AppState::new(
            Box::new(backing),
            Box::new(clock.clone()),
            Box::new(FixedRandom(1)),
        );
        state.load();
        (state, clock)
    }

    #[test]
    fn delete_emits_haptic_and_banner() {
        let (mut state, _) = state_with(vec![record("CityA")]);
        let id = state.locations()[0].id;

        let (render, actions) = handle_event(&mut state, &Event::Delete { id });
        assert!(render);
        assert_eq!(
            actions,
            vec![
                Action::Haptic(HapticFeedback::Rigid),
                Action::ShowUndoBanner {
                    message: "That location's in the cloud now... literally.".to_string()
                },
            ]
        );
    }

    #[test]
    fn delete_of_stale_id_emits_nothing() {
        let (mut state, _) = state_with(vec![record("CityA")]);
        let (render, actions) = handle_event(&mut state, &Event::Delete { id: Uuid::new_v4() });
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn tick_sequence_finalizes_and_hides_the_banner() {
        let (mut state, clock) = state_with(vec![record("CityA")]);
        let id = state.locations()[0].id;
        handle_event(&mut state, &Event::Delete { id });

        let (render, actions) = handle_event(&mut state, &Event::Tick);
        assert!(render);
        assert!(actions.is_empty());

        clock.advance(Duration::milliseconds(DELETE_UNDO_WINDOW_MS));
        let (render, actions) = handle_event(&mut state, &Event::Tick);
        assert!(render);
        assert_eq!(actions, vec![Action::HideUndoBanner]);

        let (render, actions) = handle_event(&mut state, &Event::Tick);
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn undo_without_pending_is_silent() {
        let (mut state, _) = state_with(vec![record("CityA")]);
        let (render, actions) = handle_event(&mut state, &Event::Undo);
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn restore_emits_the_trash_snackbar() {
        let (mut state, clock) = state_with(vec![record("CityA")]);
        let id = state.locations()[0].id;
        handle_event(&mut state, &Event::Delete { id });
        clock.advance(Duration::milliseconds(DELETE_UNDO_WINDOW_MS));
        handle_event(&mut state, &Event::Tick);

        let (render, actions) = handle_event(&mut state, &Event::Restore { id });
        assert!(render);
        assert_eq!(
            actions,
            vec![
                Action::Haptic(HapticFeedback::Success),
                Action::ShowUndoBanner {
                    message: ACTION_COMPLETED.to_string()
                },
            ]
        );
    }

    #[test]
    fn out_of_range_structural_edits_do_not_render() {
        let (mut state, _) = state_with(vec![record("CityA")]);
        let (render, _) = handle_event(&mut state, &Event::SetHome { index: 7 });
        assert!(!render);
        let (render, _) = handle_event(&mut state, &Event::Reorder { from: 0, to: 9 });
        assert!(!render);
    }

    #[test]
    fn add_to_calendar_builds_the_event_payload() {
        let (mut state, _) = state_with(vec![record("CityA")]);
        let day = ForecastDay {
            summary: "Scattered Showers".to_string(),
            date: Utc::now(),
            high: 72.0,
            low: 58.0,
            precip_chance: 0.45,
        };

        let (render, actions) = handle_event(&mut state, &Event::AddToCalendar { day: day.clone() });
        assert!(!render);
        match &actions[..] {
            [Action::CreateCalendarEvent { event }] => {
                assert_eq!(event.title, "Weather: Scattered Showers");
                assert_eq!(event.ends_at - event.starts_at, Duration::hours(1));
            }
            other => panic!("unexpected actions: {other:?}"),
        }
    }
}
