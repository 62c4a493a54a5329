//! Countdown Timer CLI
//!
//! A terminal countdown timer: set minutes and seconds, watch the
//! remaining time tick down, and get an audible and textual notification
//! on completion.

use anyhow::Result;
use clap::Parser;

use countdown::cli::{self, Cli};

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments
    let args = Cli::parse();

    // Initialize logging
    init_tracing(args.verbose);

    // Run the countdown
    if let Err(e) = execute(args).await {
        eprintln!("エラー: {}", e);
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Executes the CLI command.
async fn execute(args: Cli) -> Result<()> {
    cli::run(args).await
}
