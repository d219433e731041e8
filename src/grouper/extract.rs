//! Default typed-string extraction
//!
//! Replays a buffered event sequence into the strings the user typed.
//! Shift is applied while held and caps lock toggles on key-down; exactly
//! one of the two uppercases a letter. Backspace edits the current string,
//! and any other non-textual key terminates it and starts the next one.
//!
//! Layout-dependent concerns (shifted symbols, dead keys, IME input) belong
//! to the hook provider and are not interpreted here.

use crate::events::{KeyEvent, KeyKind};

/// Extract the typed strings from an ordered event sequence.
///
/// Always yields at least one (possibly empty) string; callers filter
/// empties before printing.
pub fn typed_strings(events: &[KeyEvent]) -> Vec<String> {
    let mut strings = Vec::new();
    let mut current = String::new();
    let mut shift_held = false;
    let mut caps_on = false;

    for event in events {
        match (event.name.as_str(), event.kind) {
            ("shift", KeyKind::Down) => shift_held = true,
            ("shift", KeyKind::Up) => shift_held = false,
            ("caps lock", KeyKind::Down) => caps_on = !caps_on,
            (_, KeyKind::Up) => {}
            ("space", KeyKind::Down) => current.push(' '),
            ("tab", KeyKind::Down) => current.push('\t'),
            ("backspace", KeyKind::Down) => {
                current.pop();
            }
            (name, KeyKind::Down) => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => {
                        if ch.is_alphabetic() && (shift_held != caps_on) {
                            current.extend(ch.to_uppercase());
                        } else {
                            current.push(ch);
                        }
                    }
                    // Non-textual key: close out the current string
                    _ => strings.push(std::mem::take(&mut current)),
                }
            }
        }
    }

    strings.push(current);
    strings
}
