//! The real-terminal implementation of the session's display port.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use log::debug;

use tty_tetris_session::Display;

use crate::core::{ActivePiece, Board};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

/// Owns the terminal for the lifetime of a session.
///
/// The board of the last rendered frame is kept so that end-of-game messages
/// can be laid over it.
pub struct TerminalDisplay {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
    last_board: Option<Board>,
}

impl TerminalDisplay {
    pub fn new(view: GameView) -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view,
            fb: FrameBuffer::new(0, 0),
            last_board: None,
        }
    }

    /// Switch the terminal into game mode.
    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter().context("failed to set up terminal")
    }

    /// Restore the terminal. Also happens on drop.
    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit().context("failed to restore terminal")
    }

    fn viewport() -> Result<Viewport> {
        let (width, height) = terminal::size()?;
        Ok(Viewport::new(width, height))
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new(GameView::default())
    }
}

impl Display for TerminalDisplay {
    fn render(
        &mut self,
        board: &Board,
        active: &ActivePiece,
        score: u32,
        target: u32,
    ) -> Result<()> {
        let viewport = Self::viewport()?;
        self.view
            .render_into(board, active, score, target, viewport, &mut self.fb);
        self.renderer.draw(&self.fb)?;

        match &mut self.last_board {
            Some(last) => last.clone_from(board),
            None => self.last_board = Some(board.clone()),
        }
        Ok(())
    }

    /// Overlay `text` on the last frame and wait for any key press.
    fn show_message(&mut self, text: &str) -> Result<()> {
        let viewport = Self::viewport()?;
        let board = self.last_board.clone().unwrap_or_default();
        self.view.render_message(&board, text, viewport, &mut self.fb);
        self.renderer.draw(&self.fb)?;

        debug!("waiting for key after {:?}", text);
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}
