//! Command-line interface for the countdown timer.
//!
//! Uses clap derive macro for argument parsing. The CLI hosts a single
//! engine instance: it configures the duration from the raw arguments,
//! starts the countdown, drives it with the periodic tick loop, and tears
//! down cleanly on Ctrl-C.

mod display;

pub use display::{ConsoleNotifier, TerminalView};

use anyhow::Result;
use clap::Parser;

use crate::driver;
use crate::engine::CountdownEngine;
use crate::types::TimerConfig;

// ============================================================================
// CLI Structure
// ============================================================================

/// Countdown timer CLI
#[derive(Parser, Debug)]
#[command(
    name = "countdown",
    version,
    about = "シンプルなカウントダウンタイマーCLI",
    long_about = "ターミナル上で動作するシンプルなカウントダウンタイマー。\n\
                  分と秒を指定してカウントダウンを開始し、完了時に音と\n\
                  メッセージで通知します。"
)]
pub struct Cli {
    /// Minutes to count down (digits are extracted, anything else is 0)
    #[arg(default_value = "0")]
    pub minutes: String,

    /// Seconds to count down (60 or more carry into minutes)
    #[arg(default_value = "0")]
    pub seconds: String,

    /// Upper bound for the minutes field after carry
    #[arg(long, default_value_t = 99)]
    pub max_minutes: u32,

    /// Interval between countdown ticks in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub tick_interval_ms: u64,

    /// Disable the completion beep
    #[arg(long)]
    pub silent: bool,

    /// Print the final timer state as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

// ============================================================================
// Execution
// ============================================================================

/// Runs one countdown to completion.
pub async fn run(cli: Cli) -> Result<()> {
    let config = TimerConfig::default()
        .with_max_minutes(cli.max_minutes)
        .with_tick_interval_ms(cli.tick_interval_ms);
    config.validate().map_err(|msg| anyhow::anyhow!(msg))?;

    let mut engine = CountdownEngine::new(
        config,
        Box::new(TerminalView::new()),
        Box::new(ConsoleNotifier::new(!cli.silent)),
    );

    engine.configure(&cli.minutes, &cli.seconds)?;
    engine.start()?;

    let mut interrupted = false;
    tokio::select! {
        _ = driver::run_to_completion(&mut engine) => {}
        _ = tokio::signal::ctrl_c() => {
            interrupted = true;
        }
    }

    if interrupted {
        println!();
        engine.reset();
        anyhow::bail!("カウントダウンを中断しました");
    }

    if cli.json {
        println!("{}", serde_json::to_string(engine.state())?);
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
