//! Leading-edge debounce
//!
//! The first change after a quiet period is acted on immediately. Changes
//! that arrive while the window is still open are swallowed and push the
//! window out again, so a burst of writes produces exactly one merge, at the
//! start of the burst.

use std::time::{Duration, Instant};

/// What to do with an incoming change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Fire,
    Suppress,
}

/// Debounce window state
#[derive(Debug, Clone)]
pub struct LeadingEdgeDebouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl LeadingEdgeDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether a change at `now` falls inside the current window
    pub fn is_open(&self, now: Instant) -> bool {
        matches!(self.deadline, Some(deadline) if now < deadline)
    }

    /// (Re)open the window for the full delay starting at `now`
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Decide on a change at `now` and re-arm the window in one step.
    pub fn on_event(&mut self, now: Instant) -> Decision {
        let decision = if self.is_open(now) {
            Decision::Suppress
        } else {
            Decision::Fire
        };
        self.arm(now);
        decision
    }
}
