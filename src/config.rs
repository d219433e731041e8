//! Configuration loading and management

use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_DEBOUNCE_MS: u64 = 15;
const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Daemon configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum gap between key events of one burst
    pub debounce: Duration,

    /// Capacity of the hook-to-consumer event channel
    pub channel_capacity: usize,
}

impl Config {
    /// Load configuration from environment and defaults
    pub fn load() -> Result<Self> {
        let debounce_ms = match std::env::var("KEYBURST_DEBOUNCE_MS") {
            Ok(value) => value
                .parse::<u64>()
                .context("invalid KEYBURST_DEBOUNCE_MS")?,
            Err(_) => DEFAULT_DEBOUNCE_MS,
        };

        Ok(Self {
            debounce: Duration::from_millis(debounce_ms),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}
