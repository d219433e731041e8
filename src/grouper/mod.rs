//! Typed-string grouper: debounce key events into bursts, flush on enter
//!
//! Buffers every key transition and treats a gap at or above the debounce
//! threshold as a burst boundary, so rapid key bounce or auto-repeat runs
//! stay together while distinct keystrokes reset the buffer. Pressing enter
//! runs typed-string extraction over the current buffer and prints each
//! non-empty result on its own line.
//!
//! The buffer is owned by the grouper and touched only from its run loop;
//! the hook listener guarantees serialized delivery.

mod extract;

use std::io::{self, Write};
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info, trace};

use crate::events::KeyEvent;

pub use extract::typed_strings;

/// Extraction function over a buffered burst. Injected so the extraction
/// semantics stay a replaceable black box.
pub type ExtractFn = fn(&[KeyEvent]) -> Vec<String>;

/// Groups key events into timestamp-delimited bursts
pub struct BurstGrouper<W: Write> {
    /// Events of the current burst, oldest first
    buffer: Vec<KeyEvent>,
    /// Maximum gap between consecutive events of one burst
    threshold: Duration,
    extract: ExtractFn,
    out: W,
}

impl<W: Write> BurstGrouper<W> {
    /// Create a grouper with the default extraction function
    pub fn new(threshold: Duration, out: W) -> Self {
        Self::with_extractor(threshold, out, typed_strings)
    }

    /// Create a grouper with a custom extraction function
    pub fn with_extractor(threshold: Duration, out: W, extract: ExtractFn) -> Self {
        Self {
            buffer: Vec::new(),
            threshold,
            extract,
            out,
        }
    }

    /// Run the grouper, consuming events until the channel closes
    pub async fn run(&mut self, mut event_rx: mpsc::Receiver<KeyEvent>) -> io::Result<()> {
        info!(threshold_ms = self.threshold.as_millis() as u64, "grouper started");

        while let Some(event) = event_rx.recv().await {
            self.handle(event)?;
        }

        info!("grouper stopped");
        Ok(())
    }

    /// Handle a single key event
    ///
    /// Flushes on the enter key-down edge only, so a press-and-release of
    /// enter triggers exactly one flush.
    pub fn handle(&mut self, event: KeyEvent) -> io::Result<()> {
        if event.name == "enter" && event.is_down() {
            self.flush()?;
        }

        if let Some(last) = self.buffer.last() {
            let gap = event.gap_since(last);
            if gap >= self.threshold {
                trace!(gap_us = gap.as_micros() as u64, "burst boundary");
                self.buffer.clear();
            }
        }

        // The triggering event always opens (or extends) a burst, so a
        // reset never loses it.
        self.buffer.push(event);
        Ok(())
    }

    /// Extract and print the current burst, then clear the buffer
    fn flush(&mut self) -> io::Result<()> {
        let strings = (self.extract)(&self.buffer);
        debug!(
            events = self.buffer.len(),
            strings = strings.len(),
            "flushing burst"
        );

        for string in strings {
            if string.is_empty() {
                continue;
            }
            writeln!(self.out, "{string}")?;
        }
        self.out.flush()?;

        self.buffer.clear();
        Ok(())
    }

    /// Events currently buffered, oldest first
    pub fn buffered(&self) -> &[KeyEvent] {
        &self.buffer
    }
}
