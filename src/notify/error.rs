//! Sound error types.
//!
//! All sound errors are recoverable: the countdown must keep functioning
//! and the transition to Completed must remain observable even when the
//! audio cue fails.

use thiserror::Error;

/// Errors that can occur during audio playback.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SoundError {
    /// No audio output device is available.
    #[error("音声デバイスが利用できません: {0}")]
    DeviceNotAvailable(String),

    /// Creating the playback sink failed.
    #[error("音声出力ストリームのエラー: {0}")]
    StreamError(String),
}

impl SoundError {
    /// Returns true if the error is recoverable and the timer should
    /// continue.
    ///
    /// All sound errors are recoverable; audio is a best-effort cue.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        true
    }
}
