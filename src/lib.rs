//! TTY Tetris (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` so binaries, tests and
//! benches can reach everything as `tty_tetris::{core,input,session,term,types}`.

pub use tty_tetris_core as core;
pub use tty_tetris_input as input;
pub use tty_tetris_session as session;
pub use tty_tetris_term as term;
pub use tty_tetris_types as types;
