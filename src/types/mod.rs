//! Core data types for the countdown timer.
//!
//! This module defines the data structures used for:
//! - Timer lifecycle and state management
//! - Timer configuration with validation

use std::time::Instant;

use serde::{Deserialize, Serialize};

// ============================================================================
// Lifecycle
// ============================================================================

/// Coarse state of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifecycle {
    /// No countdown in progress; the duration may be configured
    Idle,
    /// Actively counting down
    Running,
    /// Countdown suspended, remaining time preserved
    Paused,
    /// Countdown reached zero; cleared by reset
    Completed,
}

impl Lifecycle {
    /// Returns the string representation of the lifecycle.
    pub fn as_str(&self) -> &'static str {
        match self {
            Lifecycle::Idle => "idle",
            Lifecycle::Running => "running",
            Lifecycle::Paused => "paused",
            Lifecycle::Completed => "completed",
        }
    }

    /// Returns true if the countdown is actively ticking.
    pub fn is_running(&self) -> bool {
        matches!(self, Lifecycle::Running)
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Lifecycle::Idle
    }
}

impl std::fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TimerConfig
// ============================================================================

/// Configuration for the countdown timer.
///
/// Immutable per engine instance; bounds all duration inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Upper bound for the minutes field after carry (0-`max_minutes`)
    pub max_minutes: u32,
    /// Interval between countdown ticks in milliseconds
    pub tick_interval_ms: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            max_minutes: 99,
            tick_interval_ms: 1000,
        }
    }
}

impl TimerConfig {
    /// Creates a new configuration with the specified minute cap.
    pub fn with_max_minutes(mut self, max_minutes: u32) -> Self {
        self.max_minutes = max_minutes;
        self
    }

    /// Creates a new configuration with the specified tick interval.
    pub fn with_tick_interval_ms(mut self, tick_interval_ms: u64) -> Self {
        self.tick_interval_ms = tick_interval_ms;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_minutes < 1 {
            return Err("最大分数は1以上で指定してください".to_string());
        }
        if self.tick_interval_ms < 1 {
            return Err("ティック間隔は1ミリ秒以上で指定してください".to_string());
        }
        Ok(())
    }
}

// ============================================================================
// TimerState
// ============================================================================

/// Mutable state of the countdown timer.
///
/// The engine is the sole mutator; lifecycle transitions are the only
/// way state changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerState {
    /// Current lifecycle of the countdown
    pub lifecycle: Lifecycle,
    /// Duration configured by the user, in seconds
    #[serde(rename = "configuredTotalSeconds")]
    pub configured_total_seconds: u32,
    /// Seconds left in the current countdown
    #[serde(rename = "remainingSeconds")]
    pub remaining_seconds: u32,
    /// Wall-clock point of the last accounted tick; set iff Running
    #[serde(skip)]
    pub(crate) last_tick: Option<Instant>,
}

impl TimerState {
    /// Creates a new state: Idle with zero duration.
    pub fn new() -> Self {
        Self {
            lifecycle: Lifecycle::Idle,
            configured_total_seconds: 0,
            remaining_seconds: 0,
            last_tick: None,
        }
    }

    /// Sets the configured duration and resets the remaining time to it.
    pub(crate) fn set_duration(&mut self, total_seconds: u32) {
        self.configured_total_seconds = total_seconds;
        self.remaining_seconds = total_seconds;
    }

    /// Subtracts `ticks` seconds from the remaining time, clamping at zero.
    ///
    /// Returns true if the countdown has reached zero.
    pub(crate) fn decrement(&mut self, ticks: u32) -> bool {
        self.remaining_seconds = self.remaining_seconds.saturating_sub(ticks);
        self.remaining_seconds == 0
    }

    /// Returns true if the countdown is actively ticking.
    pub fn is_running(&self) -> bool {
        self.lifecycle.is_running()
    }

    /// Returns true if the countdown is paused.
    pub fn is_paused(&self) -> bool {
        self.lifecycle == Lifecycle::Paused
    }

    /// Returns true if a non-zero duration has been configured.
    pub fn has_configured_time(&self) -> bool {
        self.configured_total_seconds > 0 || self.remaining_seconds > 0
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Lifecycle Tests
    // ------------------------------------------------------------------------

    mod lifecycle_tests {
        use super::*;

        #[test]
        fn test_default_is_idle() {
            assert_eq!(Lifecycle::default(), Lifecycle::Idle);
        }

        #[test]
        fn test_as_str() {
            assert_eq!(Lifecycle::Idle.as_str(), "idle");
            assert_eq!(Lifecycle::Running.as_str(), "running");
            assert_eq!(Lifecycle::Paused.as_str(), "paused");
            assert_eq!(Lifecycle::Completed.as_str(), "completed");
        }

        #[test]
        fn test_is_running() {
            assert!(!Lifecycle::Idle.is_running());
            assert!(Lifecycle::Running.is_running());
            assert!(!Lifecycle::Paused.is_running());
            assert!(!Lifecycle::Completed.is_running());
        }

        #[test]
        fn test_display_matches_as_str() {
            assert_eq!(Lifecycle::Paused.to_string(), "paused");
        }

        #[test]
        fn test_serialize_deserialize() {
            let lifecycle = Lifecycle::Running;
            let json = serde_json::to_string(&lifecycle).unwrap();
            assert_eq!(json, "\"running\"");

            let deserialized: Lifecycle = serde_json::from_str(&json).unwrap();
            assert_eq!(deserialized, Lifecycle::Running);
        }
    }

    // ------------------------------------------------------------------------
    // TimerConfig Tests
    // ------------------------------------------------------------------------

    mod timer_config_tests {
        use super::*;

        #[test]
        fn test_default_values() {
            let config = TimerConfig::default();
            assert_eq!(config.max_minutes, 99);
            assert_eq!(config.tick_interval_ms, 1000);
        }

        #[test]
        fn test_builder_pattern() {
            let config = TimerConfig::default()
                .with_max_minutes(59)
                .with_tick_interval_ms(100);

            assert_eq!(config.max_minutes, 59);
            assert_eq!(config.tick_interval_ms, 100);
        }

        #[test]
        fn test_validate_success() {
            assert!(TimerConfig::default().validate().is_ok());
        }

        #[test]
        fn test_validate_zero_max_minutes() {
            let config = TimerConfig::default().with_max_minutes(0);
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_zero_tick_interval() {
            let config = TimerConfig::default().with_tick_interval_ms(0);
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_serialize_deserialize() {
            let config = TimerConfig::default().with_max_minutes(10);
            let json = serde_json::to_string(&config).unwrap();
            let deserialized: TimerConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(config, deserialized);
        }
    }

    // ------------------------------------------------------------------------
    // TimerState Tests
    // ------------------------------------------------------------------------

    mod timer_state_tests {
        use super::*;

        #[test]
        fn test_new_state() {
            let state = TimerState::new();

            assert_eq!(state.lifecycle, Lifecycle::Idle);
            assert_eq!(state.configured_total_seconds, 0);
            assert_eq!(state.remaining_seconds, 0);
            assert!(state.last_tick.is_none());
        }

        #[test]
        fn test_set_duration() {
            let mut state = TimerState::new();

            state.set_duration(90);

            assert_eq!(state.configured_total_seconds, 90);
            assert_eq!(state.remaining_seconds, 90);
        }

        #[test]
        fn test_decrement() {
            let mut state = TimerState::new();
            state.set_duration(2);

            assert!(!state.decrement(1));
            assert_eq!(state.remaining_seconds, 1);

            assert!(state.decrement(1));
            assert_eq!(state.remaining_seconds, 0);
        }

        #[test]
        fn test_decrement_clamps_at_zero() {
            let mut state = TimerState::new();
            state.set_duration(3);

            assert!(state.decrement(10));
            assert_eq!(state.remaining_seconds, 0);
        }

        #[test]
        fn test_has_configured_time() {
            let mut state = TimerState::new();
            assert!(!state.has_configured_time());

            state.set_duration(5);
            assert!(state.has_configured_time());
        }

        #[test]
        fn test_is_running_and_paused() {
            let mut state = TimerState::new();
            assert!(!state.is_running());
            assert!(!state.is_paused());

            state.lifecycle = Lifecycle::Running;
            assert!(state.is_running());

            state.lifecycle = Lifecycle::Paused;
            assert!(state.is_paused());
        }

        #[test]
        fn test_serialize_skips_last_tick() {
            let mut state = TimerState::new();
            state.set_duration(75);
            state.lifecycle = Lifecycle::Running;
            state.last_tick = Some(Instant::now());

            let json = serde_json::to_string(&state).unwrap();
            assert!(json.contains("\"remainingSeconds\":75"));
            assert!(!json.contains("last_tick"));

            let deserialized: TimerState = serde_json::from_str(&json).unwrap();
            assert_eq!(deserialized.lifecycle, Lifecycle::Running);
            assert_eq!(deserialized.remaining_seconds, 75);
            assert!(deserialized.last_tick.is_none());
        }
    }
}
