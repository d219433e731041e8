//! Process lifecycle: shutdown signal handling

mod shutdown;

pub use shutdown::wait_for_shutdown;
