//! Trailing-edge debouncing on an explicit clock.
//!
//! Callers pass the event time in, which keeps the page deterministic and
//! lets tests drive time directly.

use std::time::{Duration, Instant};

/// Quiet period before a resize is handled.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

/// Quiet period before a scroll is handled.
pub const SCROLL_DEBOUNCE: Duration = Duration::from_millis(10);

/// Collapses a burst of triggers into one firing after `wait` of quiet.
#[derive(Debug, Clone)]
pub struct Debouncer {
    wait: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            deadline: None,
        }
    }

    /// Register an event at `at`, pushing the deadline back.
    pub fn trigger(&mut self, at: Instant) {
        self.deadline = Some(at + self.wait);
    }

    /// True exactly once when the deadline has passed at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }
}
