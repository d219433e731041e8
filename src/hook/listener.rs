//! Global keyboard hook listener
//!
//! Runs the provider's blocking listen loop on a dedicated thread and
//! forwards normalized key events into a channel. Delivery is serialized:
//! the provider invokes the callback for one transition at a time, so the
//! consumers on the other end of the channel never need locking.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::events::KeyEvent;

use super::keys;

/// Errors that can occur when starting the hook listener
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("hook listener is already running")]
    AlreadyRunning,

    #[error("failed to spawn listener thread: {0}")]
    ThreadSpawn(String),
}

/// Global hook listener that forwards key transitions to the daemon
pub struct HookListener {
    event_tx: mpsc::Sender<KeyEvent>,
    running: Arc<AtomicBool>,
}

impl HookListener {
    /// Create a new hook listener
    pub fn new(event_tx: mpsc::Sender<KeyEvent>) -> Self {
        Self {
            event_tx,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Start the hook listener
    ///
    /// Spawns a dedicated thread that registers the callback with the hook
    /// provider and blocks inside the provider's event loop. Registration
    /// failure (missing input permissions, no display server) is reported
    /// from the thread by closing the event channel.
    pub fn start(&self) -> Result<(), HookError> {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(HookError::AlreadyRunning);
        }

        let event_tx = self.event_tx.clone();
        let running = Arc::clone(&self.running);

        thread::Builder::new()
            .name("hook-listener".to_string())
            .spawn(move || {
                info!("hook listener thread started");

                let callback_running = Arc::clone(&running);
                let callback = move |raw: rdev::Event| {
                    // The provider offers no unhook call; once stopped the
                    // callback just drops events until process exit.
                    if !callback_running.load(Ordering::SeqCst) {
                        return;
                    }

                    let Some(event) = keys::convert(&raw) else {
                        return;
                    };

                    debug!(%event, "key transition");
                    if event_tx.blocking_send(event).is_err() {
                        warn!("event channel closed, dropping key events");
                        callback_running.store(false, Ordering::SeqCst);
                    }
                };

                if let Err(e) = rdev::listen(callback) {
                    error!(?e, "failed to run keyboard hook - check input permissions");
                }

                running.store(false, Ordering::SeqCst);
                info!("hook listener thread stopped");
            })
            .map_err(|e| HookError::ThreadSpawn(e.to_string()))?;

        Ok(())
    }

    /// Stop forwarding events
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Check if the listener is currently running
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listener_creation() {
        let (tx, _rx) = mpsc::channel(32);
        let listener = HookListener::new(tx);
        assert!(!listener.is_running());
    }

    #[test]
    fn test_double_start_is_rejected() {
        let (tx, _rx) = mpsc::channel(32);
        let listener = HookListener::new(tx);
        listener.running.store(true, Ordering::SeqCst);
        assert!(matches!(listener.start(), Err(HookError::AlreadyRunning)));
    }

    #[test]
    fn test_stop_clears_running_flag() {
        let (tx, _rx) = mpsc::channel(32);
        let listener = HookListener::new(tx);
        listener.running.store(true, Ordering::SeqCst);
        listener.stop();
        assert!(!listener.is_running());
    }
}
