//! Game state module - manages the complete game state
//!
//! This module ties together the board, the active piece, the piece source,
//! score and pace. It owns the settle sequence and the Playing/Won/Lost
//! lifecycle.

use log::{debug, info, warn};

use crate::board::Board;
use crate::config::GameConfig;
use crate::piece::ActivePiece;
use crate::pieces::ShapeLibrary;
use crate::rng::{PieceSource, RandomPieces};
use crate::scoring::{line_clear_points, next_drop_interval};
use crate::types::{GameAction, GameStatus, SettleEvent, TickOutcome};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = RandomPieces> {
    config: GameConfig,
    board: Board,
    active: ActivePiece,
    source: S,
    score: u32,
    drop_interval_ms: u32,
    status: GameStatus,
    /// Last settle event (consumed by the game loop).
    last_event: Option<SettleEvent>,
}

impl GameState<RandomPieces> {
    /// Default 20x14 game whose pieces are drawn from a seeded source
    pub fn new(seed: u64) -> Self {
        Self::with_source(GameConfig::default(), RandomPieces::from_seed(seed))
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a game on an empty board and spawn the first piece.
    ///
    /// If even the first piece does not fit (a board narrower than the
    /// spawn point allows), the game starts out `Lost`.
    pub fn with_source(config: GameConfig, mut source: S) -> Self {
        let board = Board::new(config.height, config.width);
        let (kind, shape) = ShapeLibrary::random_shape(&mut source);
        let active = ActivePiece::new(kind, shape, config.spawn);
        let status = if active.fits(&board) {
            GameStatus::Playing
        } else {
            warn!(
                "first {:?} does not fit a {}x{} board",
                active.kind, config.height, config.width
            );
            GameStatus::Lost
        };

        Self {
            config,
            board,
            active,
            source,
            score: 0,
            drop_interval_ms: config.initial_drop_ms,
            status,
            last_event: None,
        }
    }

    /// Resume from an explicit board and active piece, e.g. to replay a position.
    ///
    /// The board replaces the empty one implied by `config`; its dimensions win.
    pub fn from_parts(
        config: GameConfig,
        board: Board,
        active: ActivePiece,
        score: u32,
        source: S,
    ) -> Self {
        let config = GameConfig {
            height: board.height(),
            width: board.width(),
            ..config
        };
        Self {
            config,
            board,
            active,
            source,
            score,
            drop_interval_ms: config.initial_drop_ms,
            status: GameStatus::Playing,
            last_event: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn win_score(&self) -> u32 {
        self.config.win_score
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Take and clear the last settle event.
    pub fn take_last_event(&mut self) -> Option<SettleEvent> {
        self.last_event.take()
    }

    /// Replace the active piece with `candidate` if it fits.
    fn try_commit(&mut self, candidate: ActivePiece) -> bool {
        if !self.is_playing() || !candidate.fits(&self.board) {
            return false;
        }
        self.active = candidate;
        true
    }

    /// Shift the piece one column left; rejected silently at a wall or block.
    pub fn move_left(&mut self) -> bool {
        self.try_commit(self.active.shifted(0, -1))
    }

    /// Shift the piece one column right; rejected silently at a wall or block.
    pub fn move_right(&mut self) -> bool {
        self.try_commit(self.active.shifted(0, 1))
    }

    /// Rotate clockwise in place. No wall kicks: a blocked rotation is dropped.
    pub fn rotate(&mut self) -> bool {
        let rotated = self.try_commit(self.active.rotated());
        if !rotated && self.is_playing() {
            debug!(
                "rotation of {:?} at {:?} rejected",
                self.active.kind, self.active.anchor
            );
        }
        rotated
    }

    /// One gravity step.
    ///
    /// Falls one row if it can; otherwise settles the piece, clears lines,
    /// updates score and pace, and spawns the next piece. A spawn that does
    /// not fit ends the game as `Lost` before the win threshold is looked at.
    /// Once the game is over this only reports the final outcome.
    pub fn tick(&mut self) -> TickOutcome {
        match self.status {
            GameStatus::Lost => return TickOutcome::GameOver,
            GameStatus::Won => return TickOutcome::Victory,
            GameStatus::Playing => {}
        }

        if self.try_commit(self.active.shifted(1, 0)) {
            return TickOutcome::Continuing;
        }

        self.settle()
    }

    fn settle(&mut self) -> TickOutcome {
        self.board.merge(&self.active.shape, self.active.anchor);

        let lines = self.board.clear_full_lines();
        let before = self.score;
        self.score += line_clear_points(lines);

        let pace = next_drop_interval(self.drop_interval_ms, before, self.score);
        if let Some(ms) = pace {
            info!("score {} reached, drop interval now {}ms", self.score, ms);
            self.drop_interval_ms = ms;
        }

        let (kind, shape) = ShapeLibrary::random_shape(&mut self.source);
        self.active = ActivePiece::new(kind, shape, self.config.spawn);

        debug!(
            "settled, {} line(s) cleared, score {}, next {:?}",
            lines, self.score, kind
        );

        self.last_event = Some(SettleEvent {
            lines_cleared: lines as u32,
            score: self.score,
            drop_interval_ms: pace,
            spawned: kind,
        });

        if !self.active.fits(&self.board) {
            self.status = GameStatus::Lost;
            info!("spawn blocked, game over at score {}", self.score);
            return TickOutcome::GameOver;
        }

        if self.score >= self.config.win_score {
            self.status = GameStatus::Won;
            info!("target {} reached", self.config.win_score);
            return TickOutcome::Victory;
        }

        TickOutcome::Settled
    }

    /// Apply one player action.
    ///
    /// Returns the tick outcome for `SoftDrop`, `None` for everything else.
    /// `Quit` is a session concern and leaves the state untouched.
    pub fn apply_action(&mut self, action: GameAction) -> Option<TickOutcome> {
        match action {
            GameAction::MoveLeft => {
                self.move_left();
                None
            }
            GameAction::MoveRight => {
                self.move_right();
                None
            }
            GameAction::Rotate => {
                self.rotate();
                None
            }
            GameAction::SoftDrop => Some(self.tick()),
            GameAction::Quit => None,
        }
    }
}
