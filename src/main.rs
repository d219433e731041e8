//! keyburst-daemon: global keyboard hook daemon
//!
//! Attaches to the system-wide keyboard hook (via rdev) and runs one of two
//! independent consumers over the event stream:
//! - echo: print each typed character immediately
//! - group: debounce events into bursts and print the typed strings on enter
//!
//! The hook provider delivers one transition at a time on a dedicated
//! listener thread; events flow over a bounded channel into the consumer's
//! async run loop, so consumer state needs no locking.

mod config;
mod echo;
mod events;
mod grouper;
mod hook;
mod lifecycle;

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::echo::EchoFilter;
use crate::grouper::BurstGrouper;
use crate::hook::HookListener;
use crate::lifecycle::wait_for_shutdown;

#[derive(Parser)]
#[command(name = "keyburst-daemon", version)]
struct Cli {
    /// Consumer to run over the key event stream
    #[arg(value_enum, default_value = "group")]
    mode: Mode,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Print each typed character as it is pressed
    Echo,
    /// Group events into bursts and print typed strings on enter
    Group,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging. Stdout carries the consumers' output, so logs go
    // to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        mode = ?cli.mode,
        "keyburst-daemon starting"
    );

    // Load configuration
    let config = Config::load()?;
    info!(debounce_ms = config.debounce.as_millis() as u64, "configuration loaded");

    // Channel: hook listener -> consumer
    let (event_tx, event_rx) = mpsc::channel(config.channel_capacity);

    // Start the hook listener (runs on dedicated thread). A registration
    // failure inside the thread closes the channel and ends the run loop.
    let listener = HookListener::new(event_tx);
    listener.start().context("failed to start hook listener")?;
    info!("hook listener started");

    // Drive the selected consumer until the channel closes or a signal
    // arrives
    match cli.mode {
        Mode::Echo => {
            let mut filter = EchoFilter::new(io::stdout());
            tokio::select! {
                result = filter.run(event_rx) => {
                    result.context("echo filter failed")?;
                }
                result = wait_for_shutdown() => {
                    result?;
                    info!("shutdown signal received");
                }
            }
        }
        Mode::Group => {
            let mut grouper = BurstGrouper::new(config.debounce, io::stdout());
            tokio::select! {
                result = grouper.run(event_rx) => {
                    result.context("grouper failed")?;
                }
                result = wait_for_shutdown() => {
                    result?;
                    info!("shutdown signal received");
                }
            }
        }
    }

    info!("shutting down...");
    listener.stop();
    info!("keyburst-daemon stopped");

    Ok(())
}
