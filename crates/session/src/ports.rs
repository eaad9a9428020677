//! Collaborator interfaces the game loop talks to.

use anyhow::Result;

use crate::core::{ActivePiece, Board};
use crate::types::GameAction;

/// Where frames and messages go.
pub trait Display {
    /// Redraw the whole field: border, settled blocks, the active piece and
    /// the `Score: {score}   Target: {target}` status line.
    fn render(&mut self, board: &Board, active: &ActivePiece, score: u32, target: u32)
        -> Result<()>;

    /// Show `text` and block until the player acknowledges it.
    fn show_message(&mut self, text: &str) -> Result<()>;
}

/// Where player actions come from.
pub trait InputSource {
    /// Wait at most `timeout_ms` for one action; `None` means no key.
    fn poll_key(&mut self, timeout_ms: u32) -> Result<Option<GameAction>>;

    /// Called whenever the drop interval changes.
    fn set_pace_ms(&mut self, ms: u32);
}
