//! View collaborator for the countdown timer.
//!
//! The engine is decoupled from any concrete UI: it notifies a `View` of
//! time and lifecycle changes and of start/pause control state. This module
//! also provides the shared `MM:SS` formatting and button-state helpers so
//! that every view renders consistently.

use std::sync::{Arc, Mutex};

use crate::types::Lifecycle;

// ============================================================================
// View trait
// ============================================================================

/// Observer interface notified by the engine on every state change.
pub trait View {
    /// Called whenever the displayed remaining time or lifecycle changes.
    fn on_time_update(&mut self, remaining_seconds: u32, lifecycle: Lifecycle);

    /// Called whenever the start/pause control should be relabeled or
    /// enabled/disabled.
    fn on_button_state_change(&mut self, lifecycle: Lifecycle, has_configured_time: bool);
}

// ============================================================================
// Rendering helpers
// ============================================================================

/// Formats a second count as `MM:SS`, zero-padded to two digits each.
///
/// Minutes are not clamped here; a remaining time above 99 minutes simply
/// renders with three digits.
pub fn format_mm_ss(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

/// Returns the label for the start/pause control in the given lifecycle.
pub fn button_label(lifecycle: Lifecycle) -> &'static str {
    match lifecycle {
        Lifecycle::Running => "一時停止",
        Lifecycle::Paused => "再開",
        Lifecycle::Idle | Lifecycle::Completed => "開始",
    }
}

/// Returns true if the start/pause control should be enabled.
///
/// The control is disabled only when no time is configured and the timer
/// is not running.
pub fn start_enabled(lifecycle: Lifecycle, has_configured_time: bool) -> bool {
    lifecycle.is_running() || has_configured_time
}

// ============================================================================
// NullView
// ============================================================================

/// A view that ignores all notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

impl View for NullView {
    fn on_time_update(&mut self, _remaining_seconds: u32, _lifecycle: Lifecycle) {}

    fn on_button_state_change(&mut self, _lifecycle: Lifecycle, _has_configured_time: bool) {}
}

// ============================================================================
// MockView
// ============================================================================

#[derive(Debug, Default)]
struct MockViewInner {
    time_updates: Vec<(u32, Lifecycle)>,
    button_changes: Vec<(Lifecycle, bool)>,
}

/// Mock view for testing.
///
/// Records every notification; clones share the same record, so a test can
/// hand a clone to the engine and inspect the original.
#[derive(Debug, Default, Clone)]
pub struct MockView {
    inner: Arc<Mutex<MockViewInner>>,
}

impl MockView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded `(remaining_seconds, lifecycle)` updates.
    pub fn time_updates(&self) -> Vec<(u32, Lifecycle)> {
        self.inner.lock().unwrap().time_updates.clone()
    }

    /// Returns the most recent time update, if any.
    pub fn last_update(&self) -> Option<(u32, Lifecycle)> {
        self.inner.lock().unwrap().time_updates.last().copied()
    }

    /// Returns all recorded `(lifecycle, has_configured_time)` changes.
    pub fn button_changes(&self) -> Vec<(Lifecycle, bool)> {
        self.inner.lock().unwrap().button_changes.clone()
    }

    /// Returns the number of time updates recorded so far.
    pub fn update_count(&self) -> usize {
        self.inner.lock().unwrap().time_updates.len()
    }
}

impl View for MockView {
    fn on_time_update(&mut self, remaining_seconds: u32, lifecycle: Lifecycle) {
        self.inner
            .lock()
            .unwrap()
            .time_updates
            .push((remaining_seconds, lifecycle));
    }

    fn on_button_state_change(&mut self, lifecycle: Lifecycle, has_configured_time: bool) {
        self.inner
            .lock()
            .unwrap()
            .button_changes
            .push((lifecycle, has_configured_time));
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod format_tests {
        use super::*;

        #[test]
        fn test_zero() {
            assert_eq!(format_mm_ss(0), "00:00");
        }

        #[test]
        fn test_zero_padding() {
            assert_eq!(format_mm_ss(65), "01:05");
            assert_eq!(format_mm_ss(9), "00:09");
        }

        #[test]
        fn test_typical_values() {
            assert_eq!(format_mm_ss(90), "01:30");
            assert_eq!(format_mm_ss(99 * 60 + 59), "99:59");
        }

        #[test]
        fn test_minutes_above_99_not_truncated() {
            assert_eq!(format_mm_ss(100 * 60), "100:00");
        }
    }

    mod button_tests {
        use super::*;

        #[test]
        fn test_label_by_lifecycle() {
            assert_eq!(button_label(Lifecycle::Idle), "開始");
            assert_eq!(button_label(Lifecycle::Running), "一時停止");
            assert_eq!(button_label(Lifecycle::Paused), "再開");
            assert_eq!(button_label(Lifecycle::Completed), "開始");
        }

        #[test]
        fn test_start_enabled() {
            assert!(!start_enabled(Lifecycle::Idle, false));
            assert!(start_enabled(Lifecycle::Idle, true));
            // running timer can always be paused
            assert!(start_enabled(Lifecycle::Running, false));
            assert!(start_enabled(Lifecycle::Paused, true));
            assert!(!start_enabled(Lifecycle::Completed, false));
        }
    }

    mod mock_view_tests {
        use super::*;

        #[test]
        fn test_records_time_updates() {
            let view = MockView::new();
            let mut handle = view.clone();

            handle.on_time_update(10, Lifecycle::Running);
            handle.on_time_update(9, Lifecycle::Running);

            assert_eq!(view.update_count(), 2);
            assert_eq!(view.last_update(), Some((9, Lifecycle::Running)));
        }

        #[test]
        fn test_records_button_changes() {
            let view = MockView::new();
            let mut handle = view.clone();

            handle.on_button_state_change(Lifecycle::Paused, true);

            assert_eq!(view.button_changes(), vec![(Lifecycle::Paused, true)]);
        }

        #[test]
        fn test_empty_by_default() {
            let view = MockView::new();
            assert!(view.last_update().is_none());
            assert!(view.button_changes().is_empty());
        }
    }
}
