//! Actions representing side effects to be executed by the embedding runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input. Actions bridge
//! pure state transformations and effectful operations owned by the platform
//! layer: haptic feedback, the undo banner, and the calendar collaborator.
//!
//! The handler returns a `Vec<Action>` after each event so multiple side
//! effects can be queued atomically; the runtime executes them in sequence.
//! None of them feeds a result back into the core.

use crate::calendar::WeatherEvent;

/// Haptic feedback kinds the runtime may translate to platform calls.
///
/// Fire-and-forget: the core never consults a return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticFeedback {
    /// Light impact, used when an action is undone.
    Light,

    /// Rigid impact, used when a location is deleted.
    Rigid,

    /// Success notification, used when an undo banner appears after a
    /// trash-side action.
    Success,
}

/// Commands representing side effects to be executed by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Fires haptic feedback.
    Haptic(HapticFeedback),

    /// Shows the undo affordance with the given message.
    ///
    /// The countdown itself is state: the runtime reads the current progress
    /// from the view model on each tick.
    ShowUndoBanner {
        /// Message to display next to the undo button.
        message: String,
    },

    /// Hides the undo affordance (the pending action was undone or
    /// finalized).
    HideUndoBanner,

    /// Asks the calendar collaborator to create one event.
    ///
    /// The collaborator reports success or failure through its own port; the
    /// core does not retry on failure.
    CreateCalendarEvent {
        /// The fully built event payload.
        event: WeatherEvent,
    },
}
