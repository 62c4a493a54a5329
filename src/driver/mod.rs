//! Periodic tick driver for the countdown engine.
//!
//! The driver is the only source of asynchronous `tick` invocations: one
//! loop per engine, ticking at the configured interval and skipping ticks
//! while the engine is not running. Because the loop and all user-triggered
//! calls share one cooperative task, duplicate decrements are impossible.

mod debounce;

pub use debounce::Debouncer;

use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::engine::{Clock, CountdownEngine};
use crate::types::Lifecycle;

/// Drives the engine until the countdown completes.
///
/// Ticks at `tick_interval_ms`; intervals missed while the task was not
/// scheduled are skipped rather than burst (the engine reconciles elapsed
/// time itself). Returns when the lifecycle reaches `Completed`. Dropping
/// the returned future cancels the driver deterministically.
pub async fn run_to_completion<C: Clock>(engine: &mut CountdownEngine<C>) {
    let mut ticker = interval(Duration::from_millis(engine.config().tick_interval_ms));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    // the first tick of a tokio interval fires immediately
    ticker.tick().await;

    loop {
        ticker.tick().await;

        match engine.lifecycle() {
            Lifecycle::Running => {
                engine.tick();
                if engine.lifecycle() == Lifecycle::Completed {
                    return;
                }
            }
            Lifecycle::Completed => return,
            Lifecycle::Idle | Lifecycle::Paused => continue,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
