//! Per-session game settings.

use crate::board::Anchor;
use crate::types::{
    BASE_DROP_MS, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, SPAWN_COL, SPAWN_ROW, WIN_SCORE,
};

/// Dimensions, spawn point, target and starting pace of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
    pub win_score: u32,
    pub spawn: Anchor,
    pub initial_drop_ms: u32,
}

impl GameConfig {
    pub fn with_dimensions(mut self, height: usize, width: usize) -> Self {
        self.height = height;
        self.width = width;
        self
    }

    pub fn with_win_score(mut self, win_score: u32) -> Self {
        self.win_score = win_score;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_BOARD_HEIGHT,
            width: DEFAULT_BOARD_WIDTH,
            win_score: WIN_SCORE,
            spawn: Anchor::new(SPAWN_ROW, SPAWN_COL),
            initial_drop_ms: BASE_DROP_MS,
        }
    }
}
