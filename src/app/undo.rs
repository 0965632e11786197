//! Pending-undo context and countdown arithmetic.
//!
//! At most one undo context exists at a time. It captures everything needed
//! to reverse the last destructive action, plus the instant the countdown
//! started. Progress is always recomputed from that captured instant and the
//! current wall-clock time, never from a tick counter, so the countdown is
//! exact under irregular tick delivery and testable without waiting.

use crate::domain::{LocationRecord, TrashedLocation};
use chrono::{DateTime, Duration, Utc};

/// Undo window for a delete from the active list, in milliseconds.
pub const DELETE_UNDO_WINDOW_MS: i64 = 5_000;

/// Undo window for trash-side actions (restore, purge), in milliseconds.
pub const TRASH_UNDO_WINDOW_MS: i64 = 4_000;

/// Suggested tick interval for driving the countdown indicator, in
/// milliseconds. The countdown itself does not depend on this granularity.
pub const UNDO_TICK_MS: i64 = 100;

/// What the pending undo would reverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingKind {
    /// A record was removed from the active list and is held here, in
    /// neither the active list nor the trash, until the countdown resolves.
    ///
    /// Reverse: reinsert at `index`. Finalize: move to trash stamped "now".
    Delete {
        /// The removed record.
        record: LocationRecord,
        /// Its index in the active list at removal time.
        index: usize,
    },

    /// One or more trash entries were already restored to the active list.
    ///
    /// Reverse: pull them back out of the active list and return them to the
    /// trash at their captured indices. Finalize: nothing left to do.
    Restore {
        /// Restored entries with their former trash indices.
        entries: Vec<(TrashedLocation, usize)>,
    },

    /// One or more trash entries were already permanently removed.
    ///
    /// Reverse: reinsert them into the trash at their captured indices.
    /// Finalize: nothing left to do.
    Purge {
        /// Purged entries with their former trash indices.
        entries: Vec<(TrashedLocation, usize)>,
    },
}

/// The singleton undo context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUndo {
    /// The reversible action.
    pub kind: PendingKind,

    /// Banner message shown with the undo affordance.
    pub message: String,

    /// Instant the countdown started.
    pub started_at: DateTime<Utc>,

    /// Length of the undo window.
    pub window: Duration,
}

impl PendingUndo {
    /// Creates a context starting its countdown at `started_at`.
    #[must_use]
    pub fn new(
        kind: PendingKind,
        message: String,
        started_at: DateTime<Utc>,
        window_ms: i64,
    ) -> Self {
        Self {
            kind,
            message,
            started_at,
            window: Duration::milliseconds(window_ms),
        }
    }

    /// Remaining countdown as a fraction, `1.0` at start down to `0.0` when
    /// the window has fully elapsed.
    #[must_use]
    pub fn progress(&self, now: DateTime<Utc>) -> f64 {
        let window_ms = self.window.num_milliseconds();
        if window_ms <= 0 {
            return 0.0;
        }
        let elapsed_ms = (now - self.started_at).num_milliseconds().max(0);
        #[allow(clippy::cast_precision_loss)]
        let remaining = 1.0 - elapsed_ms as f64 / window_ms as f64;
        remaining.clamp(0.0, 1.0)
    }

    /// Whether the undo window has fully elapsed as of `now`.
    #[must_use]
    pub fn is_elapsed(&self, now: DateTime<Utc>) -> bool {
        now - self.started_at >= self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LocationModel, LocationRecord};

    fn delete_context(started_at: DateTime<Utc>) -> PendingUndo {
        let record = LocationRecord::new(LocationModel::new(
            "Cupertino",
            68,
            "Clear",
            "sun.max.fill",
            vec![68; 8],
        ));
        PendingUndo::new(
            PendingKind::Delete { record, index: 1 },
            "Cupertino just blew away!".to_string(),
            started_at,
            DELETE_UNDO_WINDOW_MS,
        )
    }

    #[test]
    fn progress_runs_from_one_to_zero() {
        let start = Utc::now();
        let pending = delete_context(start);

        assert!((pending.progress(start) - 1.0).abs() < f64::EPSILON);
        let halfway = start + Duration::milliseconds(DELETE_UNDO_WINDOW_MS / 2);
        assert!((pending.progress(halfway) - 0.5).abs() < 1e-9);
        let done = start + Duration::milliseconds(DELETE_UNDO_WINDOW_MS);
        assert!((pending.progress(done)).abs() < f64::EPSILON);
    }

    #[test]
    fn progress_clamps_outside_the_window() {
        let start = Utc::now();
        let pending = delete_context(start);

        // Ticks delivered before the start or long after the end stay in range.
        assert!((pending.progress(start - Duration::seconds(1)) - 1.0).abs() < f64::EPSILON);
        assert!((pending.progress(start + Duration::seconds(60))).abs() < f64::EPSILON);
    }

    #[test]
    fn elapsed_exactly_at_the_window_boundary() {
        let start = Utc::now();
        let pending = delete_context(start);

        let just_before = start + Duration::milliseconds(DELETE_UNDO_WINDOW_MS - 1);
        assert!(!pending.is_elapsed(just_before));
        let at_boundary = start + Duration::milliseconds(DELETE_UNDO_WINDOW_MS);
        assert!(pending.is_elapsed(at_boundary));
    }
}
