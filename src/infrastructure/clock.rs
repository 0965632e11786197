//! Wall-clock abstraction.
//!
//! Every time-dependent rule in the lifecycle (undo countdown progress, the
//! 30-day trash expiry) is evaluated against an instant obtained from a
//! [`Clock`] rather than from `Utc::now()` call sites. Tests substitute
//! [`ManualClock`] and move time explicitly instead of sleeping.

use chrono::{DateTime, Duration, Utc};
use std::cell::Cell;
use std::rc::Rc;

/// Source of the current instant.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
///
/// Intended for tests and deterministic replay. Clones share the same
/// underlying instant, so a test can hand one clone to the state machine and
/// keep another to advance time.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use skygraph::infrastructure::{Clock, ManualClock};
///
/// let clock = ManualClock::new(Utc::now());
/// let handle = clock.clone();
/// handle.advance(Duration::seconds(5));
/// assert_eq!(clock.now() - handle.now(), Duration::zero());
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Utc>>>,
}

impl ManualClock {
    /// Creates a clock frozen at `start`.
    #[must_use]
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { now: Rc::new(Cell::new(start)) }
    }

    /// Moves the clock forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }

    /// Jumps the clock to an absolute instant.
    pub fn set(&self, instant: DateTime<Utc>) {
        self.now.set(instant);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}
