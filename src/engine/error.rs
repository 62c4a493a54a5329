//! Engine error types.
//!
//! All engine errors are local, recoverable precondition failures: the
//! caller surfaces a transient message and the timer state is left
//! unchanged. None of the operations panic for expected violations.

use thiserror::Error;

use crate::types::Lifecycle;

/// Errors returned by `CountdownEngine::configure`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The timer only accepts configuration while idle; a running timer
    /// must be paused and reset, a completed one reset, first.
    #[error("タイマーの動作中は時間を設定できません（状態: {0}）")]
    NotIdle(Lifecycle),
}

/// Errors returned by `CountdownEngine::start`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StartError {
    /// The timer is already running; duplicate starts are rejected without
    /// disturbing the active countdown.
    #[error("タイマーは既に実行中です")]
    AlreadyRunning,

    /// No time is configured; starting at 0:00 is refused.
    #[error("時間を設定してからタイマーを開始してください")]
    NothingToRun,
}

/// Errors returned by `CountdownEngine::pause`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PauseError {
    /// Only a running timer can be paused.
    #[error("タイマーは実行されていません")]
    NotRunning,
}
