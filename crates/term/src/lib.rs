//! Terminal rendering for the game.
//!
//! Frames are composed into a [`FrameBuffer`] by the pure [`GameView`], then
//! flushed by [`TerminalRenderer`], which only writes the cells that changed
//! since the previous frame. [`TerminalDisplay`] ties both together behind the
//! session's [`Display`](tty_tetris_session::Display) port.

pub mod display;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tty_tetris_core as core;
pub use tty_tetris_types as types;

pub use display::TerminalDisplay;
pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{AnchorY, GameView, Viewport, CELL_COLUMNS, MAX_BOARD_SIZE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
