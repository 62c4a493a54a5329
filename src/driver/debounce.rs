//! Cancellable debouncing for deferred calls.
//!
//! Rapid configuration input must not apply on every keystroke: a pending
//! deferred apply is superseded by the next submission, and teardown,
//! pause, and reset paths cancel it outright. At most one deferred call is
//! ever in flight.

use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};
use tracing::debug;

/// Defers a call by a fixed delay, superseding any pending one.
///
/// Dropping the debouncer aborts the pending call, so no deferred work can
/// run against torn-down state.
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Creates a debouncer with the given delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedules `f` to run after the delay, aborting any pending call.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit<F>(&mut self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();

        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            f();
        }));
    }

    /// Aborts the pending call, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
            debug!("Pending deferred call cancelled");
        }
    }

    /// Returns true if a deferred call is scheduled and has not yet run.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

// ============================================================================
// Tests
// ============================================================================
