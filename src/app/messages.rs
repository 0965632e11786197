//! Undo-banner message selection.
//!
//! The delete banner shows one of a small fixed set of whimsical messages.
//! Selection is a pure function of an index; where the index comes from is a
//! [`RandomSource`] injected into the state, so tests script it.

/// Source of the message index.
pub trait RandomSource {
    /// Picks an index in `0..len`. Implementations may assume `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Thread-local RNG source used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        use rand::Rng;
        rand::rng().random_range(0..len)
    }
}

/// A source that always returns the same index (clamped), for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub usize);

impl RandomSource for FixedRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}

/// Number of distinct removal messages.
pub const REMOVAL_MESSAGE_COUNT: usize = 3;

/// Banner message for trash-side actions (restore, purge, batches).
pub const ACTION_COMPLETED: &str = "Action completed";

/// Returns the removal message for `pick`, with the city name woven in.
///
/// `pick` outside `0..REMOVAL_MESSAGE_COUNT` yields a plain fallback.
///
/// # Examples
///
/// ```
/// use skygraph::app::messages::removal_message;
///
/// assert_eq!(removal_message("Detroit", 0), "Detroit just blew away!");
/// assert_eq!(removal_message("Detroit", 99), "Location deleted");
/// ```
#[must_use]
pub fn removal_message(city: &str, pick: usize) -> String {
    match pick {
        0 => format!("{city} just blew away!"),
        1 => "That location's in the cloud now... literally.".to_string(),
        2 => format!("{city} was whisked away by the wind."),
        _ => "Location deleted".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pick_mentions_the_action() {
        for pick in 0..REMOVAL_MESSAGE_COUNT {
            let message = removal_message("Orlando", pick);
            assert!(!message.is_empty());
        }
        assert_eq!(removal_message("Orlando", REMOVAL_MESSAGE_COUNT), "Location deleted");
    }

    #[test]
    fn fixed_random_clamps_to_range() {
        let mut source = FixedRandom(10);
        assert_eq!(source.pick_index(3), 2);
        let mut source = FixedRandom(1);
        assert_eq!(source.pick_index(3), 1);
    }
}
