//! Echo filter: print each typed character as it is pressed
//!
//! Key-down events for printable keys are written to the output stream one
//! character at a time, flushed immediately so characters appear as they are
//! typed. Key-up events and multi-character key names produce nothing.

use std::io::{self, Write};

use tokio::sync::mpsc;
use tracing::info;

use crate::events::KeyEvent;

/// Stateless per-event character echo over an output stream
pub struct EchoFilter<W: Write> {
    out: W,
}

impl<W: Write> EchoFilter<W> {
    /// Create a new echo filter writing to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Run the filter, echoing events until the channel closes
    pub async fn run(&mut self, mut event_rx: mpsc::Receiver<KeyEvent>) -> io::Result<()> {
        info!("echo filter started");

        while let Some(event) = event_rx.recv().await {
            self.handle(&event)?;
        }

        info!("echo filter stopped");
        Ok(())
    }

    /// Handle a single key event
    pub fn handle(&mut self, event: &KeyEvent) -> io::Result<()> {
        if !event.is_down() {
            return Ok(());
        }

        let Some(ch) = echo_char(&event.name) else {
            return Ok(());
        };

        write!(self.out, "{ch}")?;
        self.out.flush()
    }
}

/// Character echoed for a key name, if any
fn echo_char(name: &str) -> Option<char> {
    match name {
        "enter" => Some('\r'),
        "space" => Some(' '),
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Some(ch),
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use super::*;
    use crate::events::KeyKind;

    fn echo(events: &[KeyEvent]) -> String {
        let mut filter = EchoFilter::new(Vec::new());
        for event in events {
            filter.handle(event).unwrap();
        }
        String::from_utf8(filter.out).unwrap()
    }

    fn down(name: &str) -> KeyEvent {
        KeyEvent::new(name, SystemTime::UNIX_EPOCH, KeyKind::Down)
    }

    fn up(name: &str) -> KeyEvent {
        KeyEvent::new(name, SystemTime::UNIX_EPOCH, KeyKind::Up)
    }

    #[test]
    fn test_key_up_is_silent() {
        assert_eq!(echo(&[up("a"), up("enter"), up("space")]), "");
    }

    #[test]
    fn test_single_chars_echo_themselves() {
        assert_eq!(echo(&[down("h"), down("i"), down("5")]), "hi5");
    }

    #[test]
    fn test_space_and_enter() {
        assert_eq!(echo(&[down("a"), down("space"), down("b")]), "a b");
        assert_eq!(echo(&[down("enter")]), "\r");
    }

    #[test]
    fn test_multi_char_names_are_silent() {
        assert_eq!(echo(&[down("shift"), down("backspace"), down("f1")]), "");
    }

    #[test]
    fn test_run_echoes_until_channel_closes() {
        let mut filter = EchoFilter::new(Vec::new());
        let (tx, rx) = mpsc::channel(8);

        tokio_test::block_on(async {
            tx.send(down("h")).await.unwrap();
            tx.send(up("h")).await.unwrap();
            tx.send(down("i")).await.unwrap();
            drop(tx);
            filter.run(rx).await.unwrap();
        });

        assert_eq!(String::from_utf8(filter.out).unwrap(), "hi");
    }
}
