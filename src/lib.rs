//! Countdown Timer Library
//!
//! This library provides the core functionality for the countdown timer CLI.
//! It includes:
//! - Countdown engine with lifecycle transitions and elapsed-time
//!   reconciliation after host suspension
//! - Permissive input sanitization (carry and clamping of minutes/seconds)
//! - View and Notifier collaborator interfaces decoupled from any UI toolkit
//! - Periodic tick driver and cancellable debouncing on tokio
//! - Terminal view, console announcer, and completion beep playback

pub mod cli;
pub mod driver;
pub mod engine;
pub mod input;
pub mod notify;
pub mod types;
pub mod view;

// Re-export commonly used types for convenience
pub use engine::{
    Clock, ConfigError, CountdownEngine, MockClock, PauseError, StartError, SystemClock,
};
pub use notify::{Announcement, BeepPlayer, MockNotifier, Notifier, NullNotifier, SoundError};
pub use types::{Lifecycle, TimerConfig, TimerState};
pub use view::{button_label, format_mm_ss, start_enabled, MockView, NullView, View};
