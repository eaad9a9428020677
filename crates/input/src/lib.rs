//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and provides
//! [`TerminalInput`], the keyboard-backed
//! [`InputSource`](tty_tetris_session::InputSource) used by the game loop.

pub mod map;
pub mod poller;

pub use tty_tetris_types as types;

pub use map::{handle_key_event, should_quit};
pub use poller::TerminalInput;
