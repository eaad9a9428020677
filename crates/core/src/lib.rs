//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every game rule and has no dependency on the terminal,
//! so the same engine runs under the real game loop, in tests, and in
//! benchmarks.
//!
//! # Module Structure
//!
//! - [`pieces`]: shape grids, the seven-shape library, clockwise rotation
//! - [`board`]: settled blocks, placement checks, merging and line clearing
//! - [`piece`]: the active falling piece
//! - [`scoring`]: points per clear and the drop-interval schedule
//! - [`rng`]: where new pieces come from (seeded or scripted)
//! - [`config`]: per-session dimensions, target and spawn point
//! - [`game_state`]: the engine tying it all together
//!
//! # Game Rules
//!
//! - Pieces spawn with their top-left cell at row 0, column 4
//! - Rotation is clockwise about the top-left anchor, with no wall kicks
//! - Every cleared line scores one point
//! - Gravity speeds up each time the score lands on a multiple of 5
//! - Reaching 10 points wins; a spawn that does not fit loses, and the
//!   loss is checked first
//!
//! # Example
//!
//! ```
//! use tty_tetris_core::GameState;
//! use tty_tetris_types::{GameAction, TickOutcome};
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! assert_eq!(game.tick(), TickOutcome::Continuing);
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod config;
pub mod game_state;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;

pub use tty_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Anchor, Board};
pub use config::GameConfig;
pub use game_state::GameState;
pub use piece::ActivePiece;
pub use pieces::{ShapeGrid, ShapeLibrary};
pub use rng::{PieceSource, RandomPieces, ScriptedPieces};
