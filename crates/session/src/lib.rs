//! Game session: the loop that drives the core through its collaborators.
//!
//! The core never touches the terminal. It is driven through two ports:
//!
//! - [`Display`]: redraws the field and shows the end-of-game message
//! - [`InputSource`]: yields at most one player action per bounded wait
//!
//! The bounded wait is what paces gravity: [`run`] asks for a key with the
//! current drop interval as timeout and ticks once whether or not a key came.
//! No timer thread is involved, so a fake input source that returns `None`
//! immediately makes the whole loop deterministic.

pub mod game_loop;
pub mod ports;

pub use tty_tetris_core as core;
pub use tty_tetris_types as types;

pub use game_loop::{run, SessionOutcome};
pub use ports::{Display, InputSource};
