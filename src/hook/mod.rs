//! Hook module for global keyboard event listening
//!
//! Bridges the external hook provider (rdev) to the daemon: raw provider
//! events are normalized into [`crate::events::KeyEvent`]s on a dedicated
//! listener thread and forwarded over a channel.

mod keys;
mod listener;

pub use listener::{HookError, HookListener};
