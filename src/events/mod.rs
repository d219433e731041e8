//! Key event types shared by the hook listener and the consumers
//!
//! A `KeyEvent` is one reported key transition: the provider's canonical
//! key name, the provider timestamp, and the transition direction.

use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

/// Gap reported for a non-monotonic timestamp pair. Large enough that the
/// grouper always treats it as a burst boundary.
const OUT_OF_ORDER_GAP: Duration = Duration::from_secs(1);

/// Direction of a key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyKind {
    /// Key was pressed
    Down,
    /// Key was released
    Up,
}

/// A single key transition reported by the hook provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Canonical lowercase key name ("a", "space", "enter", "shift", ...)
    pub name: String,

    /// Provider timestamp of the transition
    pub time: SystemTime,

    /// Press or release
    pub kind: KeyKind,
}

impl KeyEvent {
    /// Create a new key event
    pub fn new(name: impl Into<String>, time: SystemTime, kind: KeyKind) -> Self {
        Self {
            name: name.into(),
            time,
            kind,
        }
    }

    /// Check if this is a key-down transition
    pub fn is_down(&self) -> bool {
        self.kind == KeyKind::Down
    }

    /// Time elapsed between `earlier` and this event.
    ///
    /// Timestamps are provider-supplied and not validated; a reversed pair
    /// reports a one-second gap so the caller sees a burst boundary instead
    /// of a panic.
    pub fn gap_since(&self, earlier: &KeyEvent) -> Duration {
        self.time
            .duration_since(earlier.time)
            .unwrap_or(OUT_OF_ORDER_GAP)
    }
}

impl std::fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            KeyKind::Down => write!(f, "{} down", self.name),
            KeyKind::Up => write!(f, "{} up", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_ms(ms: u64) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_millis(ms)
    }

    #[test]
    fn test_event_serialization() {
        let event = KeyEvent::new("enter", at_ms(1500), KeyKind::Down);
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("enter"));
        assert!(json.contains("down"));
    }

    #[test]
    fn test_event_deserialization() {
        let json = r#"{"name":"a","time":{"secs_since_epoch":1,"nanos_since_epoch":0},"kind":"up"}"#;
        let event: KeyEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.name, "a");
        assert_eq!(event.kind, KeyKind::Up);
    }

    #[test]
    fn test_gap_between_ordered_events() {
        let first = KeyEvent::new("a", at_ms(100), KeyKind::Down);
        let second = KeyEvent::new("a", at_ms(112), KeyKind::Up);
        assert_eq!(second.gap_since(&first), Duration::from_millis(12));
    }

    #[test]
    fn test_reversed_timestamps_report_large_gap() {
        let first = KeyEvent::new("a", at_ms(200), KeyKind::Down);
        let second = KeyEvent::new("b", at_ms(100), KeyKind::Down);
        assert!(second.gap_since(&first) >= Duration::from_secs(1));
    }

    #[test]
    fn test_display() {
        let event = KeyEvent::new("space", at_ms(0), KeyKind::Up);
        assert_eq!(event.to_string(), "space up");
    }
}
