//! Canonical key names for provider events
//!
//! The hook provider reports keys as an opaque enum; consumers match on
//! lowercase names ("a", "space", "enter"). This module is the single place
//! that knows both vocabularies.

use rdev::{Event, EventType, Key};

use crate::events::{KeyEvent, KeyKind};

/// Canonical name for a provider key, or `None` for keys the daemon does
/// not track (unknown platform-specific codes).
pub fn key_name(key: Key) -> Option<&'static str> {
    let name = match key {
        // Letters
        Key::KeyA => "a",
        Key::KeyB => "b",
        Key::KeyC => "c",
        Key::KeyD => "d",
        Key::KeyE => "e",
        Key::KeyF => "f",
        Key::KeyG => "g",
        Key::KeyH => "h",
        Key::KeyI => "i",
        Key::KeyJ => "j",
        Key::KeyK => "k",
        Key::KeyL => "l",
        Key::KeyM => "m",
        Key::KeyN => "n",
        Key::KeyO => "o",
        Key::KeyP => "p",
        Key::KeyQ => "q",
        Key::KeyR => "r",
        Key::KeyS => "s",
        Key::KeyT => "t",
        Key::KeyU => "u",
        Key::KeyV => "v",
        Key::KeyW => "w",
        Key::KeyX => "x",
        Key::KeyY => "y",
        Key::KeyZ => "z",

        // Digit row and keypad digits
        Key::Num0 | Key::Kp0 => "0",
        Key::Num1 | Key::Kp1 => "1",
        Key::Num2 | Key::Kp2 => "2",
        Key::Num3 | Key::Kp3 => "3",
        Key::Num4 | Key::Kp4 => "4",
        Key::Num5 | Key::Kp5 => "5",
        Key::Num6 | Key::Kp6 => "6",
        Key::Num7 | Key::Kp7 => "7",
        Key::Num8 | Key::Kp8 => "8",
        Key::Num9 | Key::Kp9 => "9",

        // Punctuation (US base layer)
        Key::BackQuote => "`",
        Key::Minus | Key::KpMinus => "-",
        Key::Equal => "=",
        Key::LeftBracket => "[",
        Key::RightBracket => "]",
        Key::SemiColon => ";",
        Key::Quote => "'",
        Key::BackSlash | Key::IntlBackslash => "\\",
        Key::Comma => ",",
        Key::Dot => ".",
        Key::Slash | Key::KpDivide => "/",
        Key::KpPlus => "+",
        Key::KpMultiply => "*",

        // Whitespace and editing
        Key::Space => "space",
        Key::Tab => "tab",
        Key::Return | Key::KpReturn => "enter",
        Key::Backspace => "backspace",
        Key::Delete | Key::KpDelete => "delete",
        Key::Insert => "insert",

        // Modifiers and locks
        Key::ShiftLeft | Key::ShiftRight => "shift",
        Key::ControlLeft | Key::ControlRight => "ctrl",
        Key::Alt => "alt",
        Key::AltGr => "alt gr",
        Key::MetaLeft | Key::MetaRight => "meta",
        Key::CapsLock => "caps lock",
        Key::NumLock => "num lock",
        Key::ScrollLock => "scroll lock",

        // Navigation
        Key::Escape => "esc",
        Key::UpArrow => "up",
        Key::DownArrow => "down",
        Key::LeftArrow => "left",
        Key::RightArrow => "right",
        Key::Home => "home",
        Key::End => "end",
        Key::PageUp => "page up",
        Key::PageDown => "page down",

        // Function row
        Key::F1 => "f1",
        Key::F2 => "f2",
        Key::F3 => "f3",
        Key::F4 => "f4",
        Key::F5 => "f5",
        Key::F6 => "f6",
        Key::F7 => "f7",
        Key::F8 => "f8",
        Key::F9 => "f9",
        Key::F10 => "f10",
        Key::F11 => "f11",
        Key::F12 => "f12",
        Key::PrintScreen => "print screen",
        Key::Pause => "pause",
        Key::Function => "fn",

        Key::Unknown(_) => return None,
    };
    Some(name)
}

/// Normalize a raw provider event into a [`KeyEvent`].
///
/// Mouse and wheel events, and keys without a canonical name, map to `None`
/// and are dropped by the listener.
pub fn convert(event: &Event) -> Option<KeyEvent> {
    let (key, kind) = match event.event_type {
        EventType::KeyPress(key) => (key, KeyKind::Down),
        EventType::KeyRelease(key) => (key, KeyKind::Up),
        _ => return None,
    };

    key_name(key).map(|name| KeyEvent::new(name, event.time, kind))
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use super::*;

    fn raw(event_type: EventType) -> Event {
        Event {
            time: SystemTime::UNIX_EPOCH,
            name: None,
            event_type,
        }
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(key_name(Key::Return), Some("enter"));
        assert_eq!(key_name(Key::KpReturn), Some("enter"));
        assert_eq!(key_name(Key::Space), Some("space"));
        assert_eq!(key_name(Key::CapsLock), Some("caps lock"));
        assert_eq!(key_name(Key::ShiftLeft), Some("shift"));
        assert_eq!(key_name(Key::ShiftRight), Some("shift"));
    }

    #[test]
    fn test_printable_keys_are_single_chars() {
        assert_eq!(key_name(Key::KeyH), Some("h"));
        assert_eq!(key_name(Key::Num3), Some("3"));
        assert_eq!(key_name(Key::Kp3), Some("3"));
        assert_eq!(key_name(Key::SemiColon), Some(";"));
    }

    #[test]
    fn test_unknown_key_has_no_name() {
        assert_eq!(key_name(Key::Unknown(0xFFFF)), None);
    }

    #[test]
    fn test_convert_key_press() {
        let event = convert(&raw(EventType::KeyPress(Key::KeyA))).unwrap();
        assert_eq!(event.name, "a");
        assert_eq!(event.kind, KeyKind::Down);
    }

    #[test]
    fn test_convert_key_release() {
        let event = convert(&raw(EventType::KeyRelease(Key::Return))).unwrap();
        assert_eq!(event.name, "enter");
        assert_eq!(event.kind, KeyKind::Up);
    }

    #[test]
    fn test_convert_ignores_mouse_events() {
        assert!(convert(&raw(EventType::MouseMove { x: 1.0, y: 2.0 })).is_none());
        assert!(convert(&raw(EventType::KeyPress(Key::Unknown(7)))).is_none());
    }
}
