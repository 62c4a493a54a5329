//! Terminal collaborators for the countdown CLI.
//!
//! `TerminalView` renders the running countdown in place on one line;
//! `ConsoleNotifier` prints transition announcements and plays the
//! completion beep. Both degrade gracefully: display and announcement
//! failures never disturb the engine.

use std::io::{self, Write};

use tracing::{debug, warn};

use crate::notify::{Announcement, BeepPlayer, Notifier};
use crate::types::Lifecycle;
use crate::view::{button_label, format_mm_ss, start_enabled, View};

// ============================================================================
// TerminalView
// ============================================================================

/// Renders the remaining time as `MM:SS`, rewriting a single line.
#[derive(Debug, Default)]
pub struct TerminalView;

impl TerminalView {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl View for TerminalView {
    fn on_time_update(&mut self, remaining_seconds: u32, lifecycle: Lifecycle) {
        match lifecycle {
            Lifecycle::Running => {
                print!("\r残り時間: {}  ", format_mm_ss(remaining_seconds));
                let _ = io::stdout().flush();
            }
            Lifecycle::Completed => {
                println!("\r残り時間: {}  ", format_mm_ss(remaining_seconds));
            }
            Lifecycle::Idle | Lifecycle::Paused => {}
        }
    }

    fn on_button_state_change(&mut self, lifecycle: Lifecycle, has_configured_time: bool) {
        // a terminal has no buttons; trace what a widget host would render
        debug!(
            "Control state: label='{}' enabled={}",
            button_label(lifecycle),
            start_enabled(lifecycle, has_configured_time)
        );
    }
}

// ============================================================================
// ConsoleNotifier
// ============================================================================

/// Prints transition announcements and plays the completion alarm.
pub struct ConsoleNotifier {
    /// Beep player; `None` when audio is disabled or unavailable.
    beep: Option<BeepPlayer>,
}

impl ConsoleNotifier {
    /// Creates a console notifier.
    ///
    /// When `with_sound` is true the audio device is initialized lazily at
    /// construction; if unavailable the notifier stays silent and only the
    /// visual notification remains.
    #[must_use]
    pub fn new(with_sound: bool) -> Self {
        let beep = if with_sound {
            BeepPlayer::try_create()
        } else {
            None
        };
        Self { beep }
    }

    fn marker(announcement: Announcement) -> &'static str {
        match announcement {
            Announcement::Started | Announcement::Completed => "*",
            Announcement::Resumed => ">",
            Announcement::Paused => "||",
            Announcement::Reset => "[]",
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn on_complete(&mut self) {
        if let Some(beep) = &self.beep {
            if let Err(e) = beep.play_alarm() {
                warn!("音声アラートの再生に失敗しました: {}", e);
            }
        }
    }

    fn announce(&mut self, announcement: Announcement, remaining_seconds: u32) {
        match announcement {
            Announcement::Completed | Announcement::Reset => {
                println!("{} {}", Self::marker(announcement), announcement.message());
            }
            _ => {
                println!(
                    "{} {}（残り時間: {}）",
                    Self::marker(announcement),
                    announcement.message(),
                    format_mm_ss(remaining_seconds)
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers() {
        assert_eq!(ConsoleNotifier::marker(Announcement::Started), "*");
        assert_eq!(ConsoleNotifier::marker(Announcement::Resumed), ">");
        assert_eq!(ConsoleNotifier::marker(Announcement::Paused), "||");
        assert_eq!(ConsoleNotifier::marker(Announcement::Reset), "[]");
        assert_eq!(ConsoleNotifier::marker(Announcement::Completed), "*");
    }

    #[test]
    fn test_silent_notifier_has_no_beep() {
        let notifier = ConsoleNotifier::new(false);
        assert!(notifier.beep.is_none());
    }
}
