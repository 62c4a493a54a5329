//! Countdown engine for the timer.
//!
//! This module provides the core timer functionality:
//! - Lifecycle transitions (Idle → Running → {Paused, Completed})
//! - Permissive duration configuration with carry and clamping
//! - Elapsed-time reconciliation after host suspension (missed ticks)
//! - View and Notifier collaborator callbacks on every transition

pub mod clock;
pub mod error;

pub use clock::{Clock, MockClock, SystemClock};
pub use error::{ConfigError, PauseError, StartError};

use tracing::{debug, info, warn};

use crate::input;
use crate::notify::{Announcement, Notifier};
use crate::types::{Lifecycle, TimerConfig, TimerState};
use crate::view::View;

// ============================================================================
// CountdownEngine
// ============================================================================

/// State machine that owns the countdown and notifies its collaborators.
///
/// The engine runs on a single cooperative thread: the periodic driver and
/// user-triggered calls never overlap, so operations run to completion
/// without locking. The lifecycle itself guards against duplicate starts;
/// there is at most one logical countdown at any time.
pub struct CountdownEngine<C: Clock = SystemClock> {
    /// Immutable timer configuration
    config: TimerConfig,
    /// Current timer state
    state: TimerState,
    /// Clock used for elapsed-time reconciliation
    clock: C,
    /// Whether the host is foregrounded and scheduling ticks normally
    host_active: bool,
    /// View notified of time and control-state changes
    view: Box<dyn View>,
    /// Notifier invoked on lifecycle transitions and completion
    notifier: Box<dyn Notifier>,
}

impl CountdownEngine<SystemClock> {
    /// Creates a new engine driven by the system clock.
    pub fn new(config: TimerConfig, view: Box<dyn View>, notifier: Box<dyn Notifier>) -> Self {
        Self::with_clock(config, SystemClock, view, notifier)
    }
}

impl<C: Clock> CountdownEngine<C> {
    /// Creates a new engine with an explicit clock.
    pub fn with_clock(
        config: TimerConfig,
        clock: C,
        view: Box<dyn View>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            state: TimerState::new(),
            clock,
            host_active: true,
            view,
            notifier,
        }
    }

    /// Returns a reference to the current timer state.
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Returns the timer configuration.
    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Returns the current lifecycle.
    pub fn lifecycle(&self) -> Lifecycle {
        self.state.lifecycle
    }

    /// Returns the remaining seconds.
    pub fn remaining_seconds(&self) -> u32 {
        self.state.remaining_seconds
    }

    /// Returns true if the countdown is actively ticking.
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Configures the countdown duration from raw minutes/seconds input.
    ///
    /// Input is sanitized permissively: non-numeric or empty text becomes 0,
    /// seconds of 60 or more carry into minutes, and minutes are clamped to
    /// the configured cap. Malformed input is never an error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotIdle` unless the lifecycle is `Idle`; a
    /// running or paused timer keeps its duration, and a completed one must
    /// be reset first.
    pub fn configure(&mut self, minutes_raw: &str, seconds_raw: &str) -> Result<(), ConfigError> {
        if self.state.lifecycle != Lifecycle::Idle {
            return Err(ConfigError::NotIdle(self.state.lifecycle));
        }

        let (minutes, seconds) = input::normalize(minutes_raw, seconds_raw, self.config.max_minutes);
        let total = minutes.saturating_mul(60).saturating_add(seconds);
        self.state.set_duration(total);

        debug!("Configured duration: {}m{}s ({} seconds)", minutes, seconds, total);
        self.notify_view();
        Ok(())
    }

    /// Starts or resumes the countdown.
    ///
    /// # Errors
    ///
    /// Returns `StartError::AlreadyRunning` while the countdown is active
    /// (the existing countdown is left undisturbed), or
    /// `StartError::NothingToRun` when no time is configured.
    pub fn start(&mut self) -> Result<(), StartError> {
        if self.state.is_running() {
            return Err(StartError::AlreadyRunning);
        }
        if self.state.remaining_seconds == 0 {
            return Err(StartError::NothingToRun);
        }

        let resuming = self.state.is_paused();
        self.state.lifecycle = Lifecycle::Running;
        self.state.last_tick = Some(self.clock.now());

        self.notify_view();
        let announcement = if resuming {
            Announcement::Resumed
        } else {
            Announcement::Started
        };
        self.notifier
            .announce(announcement, self.state.remaining_seconds);

        info!("Timer started ({} seconds remaining)", self.state.remaining_seconds);
        Ok(())
    }

    /// Pauses the countdown, preserving the remaining time.
    ///
    /// # Errors
    ///
    /// Returns `PauseError::NotRunning` unless the countdown is active.
    pub fn pause(&mut self) -> Result<(), PauseError> {
        if !self.state.is_running() {
            return Err(PauseError::NotRunning);
        }

        self.state.lifecycle = Lifecycle::Paused;
        self.state.last_tick = None;

        self.notify_view();
        self.notifier
            .announce(Announcement::Paused, self.state.remaining_seconds);

        info!("Timer paused ({} seconds remaining)", self.state.remaining_seconds);
        Ok(())
    }

    /// Resets the timer to idle with the configured duration restored.
    ///
    /// Always succeeds and is idempotent. Clears any completion decoration
    /// via the view update.
    pub fn reset(&mut self) {
        self.state.lifecycle = Lifecycle::Idle;
        self.state.remaining_seconds = self.state.configured_total_seconds;
        self.state.last_tick = None;

        self.notify_view();
        self.notifier
            .announce(Announcement::Reset, self.state.remaining_seconds);

        info!("Timer reset");
    }

    /// Advances the countdown by one tick interval.
    ///
    /// Invoked by the periodic driver. While the host is foregrounded the
    /// visible countdown stays strictly one second per tick even if the
    /// driver fired early or late; when the host was backgrounded and more
    /// than one interval elapsed, all missed ticks are applied in one step.
    ///
    /// Calling this while not running is a defensive no-op.
    pub fn tick(&mut self) {
        if !self.state.is_running() {
            warn!("Tick received while not running; ignoring");
            return;
        }

        let now = self.clock.now();
        let decrement = match self.state.last_tick {
            Some(last) if !self.host_active => {
                let missed = self.missed_ticks(now.duration_since(last));
                if missed > 1 {
                    debug!("{} ticks elapsed while host was inactive", missed);
                    missed
                } else {
                    1
                }
            }
            _ => 1,
        };

        let completed = self.state.decrement(decrement);
        self.state.last_tick = Some(now);

        if completed {
            self.complete();
        } else {
            self.view
                .on_time_update(self.state.remaining_seconds, self.state.lifecycle);
        }
    }

    /// Applies missed ticks immediately after the host resumes scheduling.
    ///
    /// Called by the host environment when it detects that the process was
    /// suspended (e.g. a backgrounded tab becoming visible again). Does
    /// nothing unless the countdown is running.
    pub fn reconcile_after_gap(&mut self) {
        if !self.state.is_running() {
            return;
        }
        let Some(last) = self.state.last_tick else {
            return;
        };

        let now = self.clock.now();
        let missed = self.missed_ticks(now.duration_since(last));
        self.state.last_tick = Some(now);

        if missed == 0 {
            return;
        }

        debug!("{} ticks elapsed during suspension", missed);
        if self.state.decrement(missed) {
            self.complete();
        } else {
            self.view
                .on_time_update(self.state.remaining_seconds, self.state.lifecycle);
        }
    }

    /// Records whether the host is foregrounded.
    ///
    /// A transition back to active while running reconciles the countdown
    /// against the wall clock immediately, instead of waiting for the next
    /// scheduled tick.
    pub fn set_host_active(&mut self, active: bool) {
        let was_active = self.host_active;
        self.host_active = active;

        if active && !was_active {
            self.reconcile_after_gap();
        }
    }

    /// Converts an elapsed duration into a whole number of missed ticks.
    fn missed_ticks(&self, elapsed: std::time::Duration) -> u32 {
        let ticks = (elapsed.as_millis() as u64) / self.config.tick_interval_ms;
        u32::try_from(ticks).unwrap_or(u32::MAX)
    }

    /// Completes the countdown: final transition, then notifications.
    ///
    /// The view is updated before the notifier runs, so completion stays
    /// observable even if the audio cue fails.
    fn complete(&mut self) {
        self.state.lifecycle = Lifecycle::Completed;
        self.state.remaining_seconds = 0;
        self.state.last_tick = None;

        self.notify_view();
        self.notifier.on_complete();
        self.notifier.announce(Announcement::Completed, 0);

        info!("Timer completed");
    }

    /// Pushes the current time and control state to the view.
    fn notify_view(&mut self) {
        self.view
            .on_time_update(self.state.remaining_seconds, self.state.lifecycle);
        self.view
            .on_button_state_change(self.state.lifecycle, self.state.has_configured_time());
    }
}

// ============================================================================
// Tests
// ============================================================================
