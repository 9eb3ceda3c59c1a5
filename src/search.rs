// Debounced search controller
//
// Each input edit re-arms a 300 ms timer; only when typing pauses does a
// query dispatch. Queries shorter than two characters clear the results
// and cancel any pending timer. Every dispatched query gets a generation
// number; a response tagged with an older generation is stale and must be
// dropped, so a superseded in-flight request can never overwrite newer
// results.

use std::time::{Duration, Instant};

/// Inactivity window before a query dispatches
pub const DEBOUNCE: Duration = Duration::from_millis(300);
/// Minimum trimmed query length that triggers a search
pub const MIN_QUERY_LEN: usize = 2;

/// What the caller should do with the results area after an input edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Keep the current output; a dispatch may follow via [`SearchController::poll`]
    None,
    /// Query too short: clear the results area now
    ClearResults,
}

/// A query ready to go out, tagged with its generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub query: String,
    pub generation: u64,
}

#[derive(Debug)]
struct Pending {
    query: String,
    deadline: Instant,
}

/// Debounce state machine. Owned by the UI task; `poll` is called from
/// the render tick so no real timer is involved.
#[derive(Debug)]
pub struct SearchController {
    debounce: Duration,
    min_len: usize,
    pending: Option<Pending>,
    /// Generation of the most recently dispatched query
    generation: u64,
}

impl SearchController {
    pub fn new() -> Self {
        Self::with_tuning(DEBOUNCE, MIN_QUERY_LEN)
    }

    pub fn with_tuning(debounce: Duration, min_len: usize) -> Self {
        Self {
            debounce,
            min_len,
            pending: None,
            generation: 0,
        }
    }

    /// Register an input edit. Always cancels the previous pending timer;
    /// re-arms it when the trimmed query is long enough.
    pub fn on_input(&mut self, raw: &str, now: Instant) -> InputAction {
        let query = raw.trim();
        self.pending = None;

        if query.chars().count() < self.min_len {
            return InputAction::ClearResults;
        }

        self.pending = Some(Pending {
            query: query.to_string(),
            deadline: now + self.debounce,
        });
        InputAction::None
    }

    /// Take the pending query once its quiet window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<Dispatch> {
        if self.pending.as_ref().is_some_and(|p| now >= p.deadline) {
            let pending = self.pending.take()?;
            self.generation += 1;
            return Some(Dispatch {
                query: pending.query,
                generation: self.generation,
            });
        }
        None
    }

    /// Whether a response for `generation` is still the latest word. A
    /// newer dispatch supersedes any response carrying an older tag.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::{Clock, ManualClock};

    #[test]
    fn test_short_query_clears_and_never_dispatches() {
        let clock = ManualClock::new();
        let mut search = SearchController::new();

        assert_eq!(search.on_input("e", clock.now()), InputAction::ClearResults);
        clock.advance(Duration::from_millis(1000));
        assert_eq!(search.poll(clock.now()), None);
    }

    #[test]
    fn test_whitespace_only_query_is_short() {
        let clock = ManualClock::new();
        let mut search = SearchController::new();
        assert_eq!(
            search.on_input("   a   ", clock.now()),
            InputAction::ClearResults
        );
    }

    #[test]
    fn test_burst_typing_dispatches_once() {
        let clock = ManualClock::new();
        let mut search = SearchController::new();

        // Typing "eco" quickly: each edit re-arms the timer
        assert_eq!(search.on_input("e", clock.now()), InputAction::ClearResults);
        clock.advance(Duration::from_millis(50));
        assert_eq!(search.on_input("ec", clock.now()), InputAction::None);
        clock.advance(Duration::from_millis(50));
        assert_eq!(search.on_input("eco", clock.now()), InputAction::None);

        // Not yet: quiet window still open
        clock.advance(Duration::from_millis(299));
        assert_eq!(search.poll(clock.now()), None);

        // One dispatch for the final query, then nothing further
        clock.advance(Duration::from_millis(1));
        let dispatch = search.poll(clock.now()).unwrap();
        assert_eq!(dispatch.query, "eco");
        clock.advance(Duration::from_millis(1000));
        assert_eq!(search.poll(clock.now()), None);
    }

    #[test]
    fn test_short_query_cancels_pending() {
        let clock = ManualClock::new();
        let mut search = SearchController::new();

        assert_eq!(search.on_input("eco", clock.now()), InputAction::None);
        // Deleting back below the threshold cancels the armed timer
        clock.advance(Duration::from_millis(100));
        assert_eq!(search.on_input("e", clock.now()), InputAction::ClearResults);

        clock.advance(Duration::from_millis(500));
        assert_eq!(search.poll(clock.now()), None);
    }

    #[test]
    fn test_newer_dispatch_invalidates_older_generation() {
        let clock = ManualClock::new();
        let mut search = SearchController::new();

        search.on_input("oceans", clock.now());
        clock.advance(Duration::from_millis(300));
        let first = search.poll(clock.now()).unwrap();

        search.on_input("forests", clock.now());
        clock.advance(Duration::from_millis(300));
        let second = search.poll(clock.now()).unwrap();

        assert!(!search.is_current(first.generation));
        assert!(search.is_current(second.generation));
    }
}
