//! Core types module - shared data structures and constants
//!
//! Everything in here is plain data with no dependencies, so the same types
//! flow through the core rules, the game loop and the terminal layer.
//!
//! # Board Dimensions
//!
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Width**: 14 columns (indexed 0-13, left to right)
//! - **Spawn anchor**: row 0, column 4 (top-left cell of the shape grid)
//!
//! # Pace
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_MS` | 1000 | Drop interval at score 0 |
//! | `DROP_MS_PER_POINT` | 2 | Interval shaved off per point of score |
//! | `DROP_INTERVAL_FLOOR_MS` | 50 | Fastest possible gravity |
//! | `SPEEDUP_EVERY` | 5 | Pace is recomputed when score lands on a multiple of this |
//!
//! # Examples
//!
//! ```
//! use tty_tetris_types::{Cell, PieceKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_eq!(Cell::from_char('#'), Some(Cell::Filled));
//!
//! assert_eq!(DEFAULT_BOARD_HEIGHT, 20);
//! assert_eq!(DEFAULT_BOARD_WIDTH, 14);
//! ```

/// Board height in cells (20 rows)
pub const DEFAULT_BOARD_HEIGHT: usize = 20;

/// Board width in cells (14 columns)
pub const DEFAULT_BOARD_WIDTH: usize = 14;

/// Row of the spawn anchor
pub const SPAWN_ROW: i32 = 0;

/// Column of the spawn anchor
pub const SPAWN_COL: i32 = 4;

/// Score that ends the game with a win
pub const WIN_SCORE: u32 = 10;

/// Drop interval at score 0 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Milliseconds removed from the drop interval per point of score
pub const DROP_MS_PER_POINT: u32 = 2;

/// Drop interval never goes below this (50ms)
pub const DROP_INTERVAL_FLOOR_MS: u32 = 50;

/// Pace is recomputed whenever the score lands on a multiple of this
pub const SPEEDUP_EVERY: u32 = 5;

/// Shown when a freshly spawned piece has nowhere to go
pub const GAME_OVER_MESSAGE: &str = "Game Over!";

/// Shown when the score reaches the target
pub const VICTORY_MESSAGE: &str = "You Win! Press any key to exit.";

/// A cell on the board or in a shape grid
///
/// Settled blocks do not remember which piece they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled,
}

impl Cell {
    pub fn is_filled(self) -> bool {
        self == Cell::Filled
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Parse an ASCII glyph: `#` is filled, `.` and space are empty
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Cell::Filled),
            '.' | ' ' => Some(Cell::Empty),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Cell::Filled => '#',
            Cell::Empty => '.',
        }
    }
}

/// The seven piece kinds of the shape library
///
/// The names follow the catalogue the game shipped with, which is why the
/// `S` and `T` entries do not look like the guideline pieces of that name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    J,
    L,
    S,
    Z,
    T,
}

impl PieceKind {
    /// All kinds in catalogue order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
    ];
}

/// Player intents produced by an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Apply one extra gravity step
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Leave the session
    Quit,
}

/// Lifecycle of a game session. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// Result of one gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The piece fell one row
    Continuing,
    /// The piece settled and a new one spawned
    Settled,
    /// The freshly spawned piece could not be placed
    GameOver,
    /// The score reached the target
    Victory,
}

impl TickOutcome {
    pub fn is_terminal(self) -> bool {
        matches!(self, TickOutcome::GameOver | TickOutcome::Victory)
    }
}

/// Emitted by the core whenever a piece settles.
///
/// The game loop consumes it to forward pace changes to the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleEvent {
    pub lines_cleared: u32,
    pub score: u32,
    /// New drop interval, only present when the pace changed on this settle.
    pub drop_interval_ms: Option<u32>,
    /// Kind of the piece spawned after the settle.
    pub spawned: PieceKind,
}
