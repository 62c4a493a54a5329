//! Notification collaborator for the countdown timer.
//!
//! The engine announces every lifecycle transition and fires a completion
//! notification (audio cue plus textual announcement) when the countdown
//! reaches zero. Implementations are fire-and-forget: they swallow and log
//! their own failures so a broken audio device can never prevent the
//! transition to Completed from being observable through the view.

mod error;
mod sound;

pub use error::SoundError;
pub use sound::BeepPlayer;

use std::sync::{Arc, Mutex};

// ============================================================================
// Announcement
// ============================================================================

/// Lifecycle transition announced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Announcement {
    /// Countdown started from idle
    Started,
    /// Countdown resumed from pause
    Resumed,
    /// Countdown paused
    Paused,
    /// Timer reset to idle
    Reset,
    /// Countdown reached zero
    Completed,
}

impl Announcement {
    /// Returns the user-facing message for this announcement.
    pub fn message(&self) -> &'static str {
        match self {
            Announcement::Started => "タイマーを開始しました",
            Announcement::Resumed => "タイマーを再開しました",
            Announcement::Paused => "タイマーを一時停止しました",
            Announcement::Reset => "タイマーをリセットしました",
            Announcement::Completed => "タイマー完了！",
        }
    }
}

// ============================================================================
// Notifier trait
// ============================================================================

/// Collaborator invoked by the engine on lifecycle transitions.
///
/// Methods are infallible at the interface; implementations handle and log
/// their own failures.
pub trait Notifier {
    /// Fired once when the countdown completes (audio cue).
    fn on_complete(&mut self);

    /// Announces a lifecycle transition with the remaining time at that
    /// moment.
    fn announce(&mut self, announcement: Announcement, remaining_seconds: u32);
}

// ============================================================================
// NullNotifier
// ============================================================================

/// A notifier that ignores all notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn on_complete(&mut self) {}

    fn announce(&mut self, _announcement: Announcement, _remaining_seconds: u32) {}
}

// ============================================================================
// MockNotifier
// ============================================================================

#[derive(Debug, Default)]
struct MockNotifierInner {
    completions: usize,
    announcements: Vec<(Announcement, u32)>,
}

/// Mock notifier for testing.
///
/// Clones share the same record, so a test can hand a clone to the engine
/// and inspect the original.
#[derive(Debug, Default, Clone)]
pub struct MockNotifier {
    inner: Arc<Mutex<MockNotifierInner>>,
}

impl MockNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of completion notifications fired.
    pub fn completions(&self) -> usize {
        self.inner.lock().unwrap().completions
    }

    /// Returns all recorded announcements and their remaining times.
    pub fn announcements(&self) -> Vec<(Announcement, u32)> {
        self.inner.lock().unwrap().announcements.clone()
    }
}

impl Notifier for MockNotifier {
    fn on_complete(&mut self) {
        self.inner.lock().unwrap().completions += 1;
    }

    fn announce(&mut self, announcement: Announcement, remaining_seconds: u32) {
        self.inner
            .lock()
            .unwrap()
            .announcements
            .push((announcement, remaining_seconds));
    }
}

// ============================================================================
// Tests
// ============================================================================
