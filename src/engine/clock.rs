//! Injectable clock for the countdown engine.
//!
//! Elapsed-time reconciliation is measured against this clock, so tests
//! drive the engine with `MockClock` instead of real wall-clock waits.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Source of the current wall-clock instant.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// Clock backed by `Instant::now`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Mock clock for testing.
///
/// Time only moves when `advance` is called. Clones share the same instant,
/// so a test can hand a clone to the engine and keep advancing the original.
#[derive(Debug, Clone)]
pub struct MockClock {
    now: Arc<Mutex<Instant>>,
}

impl MockClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    /// Moves the clock forward by the given duration.
    pub fn advance(&self, duration: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += duration;
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap()
    }
}
