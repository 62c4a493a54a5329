//! Completion beep playback using rodio.
//!
//! The alarm is three short sine beeps (800 Hz, 0.5 s each) with a brief
//! gap between them. Playback is non-blocking and best-effort: when no
//! audio device is available the caller degrades to a silent completion.

use std::time::Duration;

use rodio::source::{SineWave, Source, Zero};
use rodio::{OutputStream, OutputStreamHandle, Sink};
use tracing::debug;

use super::error::SoundError;

/// Beep frequency in hertz.
const BEEP_FREQUENCY_HZ: f32 = 800.0;
/// Length of a single beep.
const BEEP_DURATION: Duration = Duration::from_millis(500);
/// Silence between beeps.
const BEEP_GAP: Duration = Duration::from_millis(100);
/// Playback volume (0-1).
const BEEP_VOLUME: f32 = 0.3;
/// Number of beeps in the completion alarm.
const BEEP_COUNT: usize = 3;

/// Plays the completion alarm through the default audio device.
///
/// Thread-safe via `Arc`; playback is detached and continues in the
/// background after `play_alarm` returns.
pub struct BeepPlayer {
    /// The audio output stream (must be kept alive for playback).
    _stream: OutputStream,
    /// Handle to the output stream for creating sinks.
    stream_handle: OutputStreamHandle,
}

impl BeepPlayer {
    /// Creates a new beep player.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::DeviceNotAvailable` if no audio output device
    /// is available.
    pub fn new() -> Result<Self, SoundError> {
        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| SoundError::DeviceNotAvailable(e.to_string()))?;

        debug!("Audio output stream initialized");

        Ok(Self {
            _stream: stream,
            stream_handle,
        })
    }

    /// Attempts to create a beep player, logging and returning `None` when
    /// audio is unavailable.
    #[must_use]
    pub fn try_create() -> Option<Self> {
        match Self::new() {
            Ok(player) => Some(player),
            Err(e) => {
                tracing::warn!("音声アラートは利用できません: {}", e);
                None
            }
        }
    }

    /// Plays the completion alarm.
    ///
    /// Non-blocking; the sinks are detached so the beeps outlive the call.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::StreamError` if the playback sink cannot be
    /// created.
    pub fn play_alarm(&self) -> Result<(), SoundError> {
        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| SoundError::StreamError(e.to_string()))?;

        for i in 0..BEEP_COUNT {
            sink.append(
                SineWave::new(BEEP_FREQUENCY_HZ)
                    .take_duration(BEEP_DURATION)
                    .amplify(BEEP_VOLUME),
            );
            if i + 1 < BEEP_COUNT {
                sink.append(Zero::<f32>::new(1, 48_000).take_duration(BEEP_GAP));
            }
        }

        sink.detach();
        debug!("Completion alarm started (detached)");
        Ok(())
    }
}
