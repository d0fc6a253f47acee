//! Debounced recomputation
//!
//! Every edit pushes the deadline back by the configured delay; the main
//! loop fires the comparison once the deadline passes without further edits.

use std::time::{Duration, Instant};

/// Deadline tracker for the next comparison
#[derive(Debug, Clone)]
pub struct CompareScheduler {
    delay: Duration,
    due: Option<Instant>,
}

impl CompareScheduler {
    pub fn new(delay: Duration) -> Self {
        Self { delay, due: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Restart the timer from `now`
    pub fn schedule(&mut self, now: Instant) {
        self.due = Some(now + self.delay);
    }

    /// Drop the pending deadline
    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// Clear and return true when the deadline has passed
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the deadline, if one is pending
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.due.map(|due| due.saturating_duration_since(now))
    }
}
