//! GameView: draws the board, the falling piece and the status line into a
//! framebuffer.
//!
//! Pure, no I/O.

use crate::core::{ActivePiece, Board};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{Cell, PieceKind};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Vertical placement of the frame inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);

/// Terminal columns per board cell; two keeps cells roughly square.
pub const CELL_COLUMNS: u16 = 2;

/// Largest board whose frame, border and status line fit in `u16` terminal
/// coordinates, as (height, width) in cells.
pub const MAX_BOARD_SIZE: (usize, usize) = (
    u16::MAX as usize - 3,
    (u16::MAX as usize - 2) / CELL_COLUMNS as usize,
);

/// Where the last frame landed, so overlays can be drawn on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrameRect {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Lays the game out on a character grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render one frame into `fb`, resizing it to the viewport.
    ///
    /// Settled cells come from `board`; the active piece is drawn over them.
    /// `Score: {score}   Target: {target}` sits on the row under the frame.
    pub fn render_into(
        &self,
        board: &Board,
        active: &ActivePiece,
        score: u32,
        target: u32,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let frame = self.frame_rect(board, viewport);
        draw_border(fb, frame, Style::fg(Rgb::new(200, 200, 200)));

        for (row, cells) in board.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Cell::Filled => {
                        self.fill_cell(fb, frame, row, col, '█', settled_style());
                    }
                    Cell::Empty => {
                        self.fill_cell(fb, frame, row, col, '·', empty_style());
                    }
                }
            }
        }

        let style = piece_style(active.kind);
        for (row, col) in active.cells() {
            if board.is_in_bounds(row, col) {
                self.fill_cell(fb, frame, row as usize, col as usize, '█', style);
            }
        }

        let status = format!("Score: {score}   Target: {target}");
        let status_y = frame.y.saturating_add(frame.h);
        fb.put_str(frame.x, status_y, &status, Style::default().bold());
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        board: &Board,
        active: &ActivePiece,
        score: u32,
        target: u32,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(board, active, score, target, viewport, &mut fb);
        fb
    }

    /// Draw `text` as a banner across the middle of the board frame.
    ///
    /// Meant to go over a frame already produced by [`Self::render_into`]
    /// for the same board and viewport.
    pub fn render_message(
        &self,
        board: &Board,
        text: &str,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let frame = self.frame_rect(board, viewport);
        let text_w = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let banner_w = text_w.saturating_add(2);
        let x = if banner_w < frame.w {
            frame.x + (frame.w - banner_w) / 2
        } else {
            viewport.width.saturating_sub(banner_w) / 2
        };
        let y = frame.y.saturating_add(frame.h / 2);

        let style = Style::fg(Rgb::new(255, 255, 255)).bold();
        fb.fill_rect(x, y, banner_w, 1, ' ', style);
        fb.put_str(x.saturating_add(1), y, text, style);
    }

    fn frame_rect(&self, board: &Board, viewport: Viewport) -> FrameRect {
        let w = to_u16(board.width()).saturating_mul(CELL_COLUMNS).saturating_add(2);
        let h = to_u16(board.height()).saturating_add(2);
        // One extra row for the status line.
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h.saturating_add(1)) / 2,
            AnchorY::Top => 0,
        };
        FrameRect { x, y, w, h }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: FrameRect,
        row: usize,
        col: usize,
        ch: char,
        style: Style,
    ) {
        // Cells past the u16 edge land off-screen and are dropped.
        let px = frame
            .x
            .saturating_add(1)
            .saturating_add(to_u16(col).saturating_mul(CELL_COLUMNS));
        let py = frame.y.saturating_add(1).saturating_add(to_u16(row));
        fb.fill_rect(px, py, CELL_COLUMNS, 1, ch, style);
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: FrameRect, style: Style) {
    let FrameRect { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn settled_style() -> Style {
    Style {
        fg: Rgb::new(170, 170, 180),
        bg: PLAY_BG,
        bold: false,
        dim: false,
    }
}

fn empty_style() -> Style {
    Style {
        fg: Rgb::new(90, 90, 100),
        bg: PLAY_BG,
        bold: false,
        dim: true,
    }
}

/// Settled cells lose their colour; only the falling piece keeps it.
fn piece_style(kind: PieceKind) -> Style {
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    };
    Style {
        fg,
        bg: PLAY_BG,
        bold: true,
        dim: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Anchor;

    fn small_board() -> Board {
        Board::from_ascii(&["....", "....", "#..#"]).unwrap()
    }

    #[test]
    fn frame_is_centered_with_border() {
        let board = small_board();
        let piece = ActivePiece::spawn(PieceKind::O, Anchor::new(0, 1));
        // frame 10x5 plus status row, in a 20x10 viewport
        let fb = GameView::default().render(&board, &piece, 0, 10, Viewport::new(20, 10));

        assert_eq!(fb.get(5, 2).map(|g| g.ch), Some('┌'));
        assert_eq!(fb.get(14, 2).map(|g| g.ch), Some('┐'));
        assert_eq!(fb.get(5, 6).map(|g| g.ch), Some('└'));
        assert_eq!(fb.get(14, 6).map(|g| g.ch), Some('┘'));
    }

    #[test]
    fn cells_are_two_columns_wide() {
        let board = small_board();
        let piece = ActivePiece::spawn(PieceKind::O, Anchor::new(0, 1));
        let fb = GameView::default()
            .with_anchor_y(AnchorY::Top)
            .render(&board, &piece, 0, 10, Viewport::new(10, 6));

        assert_eq!(fb.row_text(0), "┌────────┐");
        assert_eq!(fb.row_text(1), "│··████··│");
        assert_eq!(fb.row_text(2), "│··████··│");
        assert_eq!(fb.row_text(3), "│██····██│");
        assert_eq!(fb.row_text(4), "└────────┘");
    }

    #[test]
    fn active_piece_is_coloured_settled_cells_are_not() {
        let board = small_board();
        let piece = ActivePiece::spawn(PieceKind::Z, Anchor::new(0, 0));
        let fb = GameView::default()
            .with_anchor_y(AnchorY::Top)
            .render(&board, &piece, 0, 10, Viewport::new(10, 6));

        let active = fb.get(1, 1).unwrap();
        let settled = fb.get(1, 3).unwrap();
        assert_eq!(active.style, piece_style(PieceKind::Z));
        assert_eq!(settled.style, settled_style());
    }

    #[test]
    fn status_line_sits_under_frame() {
        let board = small_board();
        let piece = ActivePiece::spawn(PieceKind::I, Anchor::new(0, 0));
        let fb = GameView::default()
            .with_anchor_y(AnchorY::Top)
            .render(&board, &piece, 7, 10, Viewport::new(30, 6));

        assert!(fb.row_text(5).starts_with("Score: 7   Target: 10"));
    }

    #[test]
    fn oversized_board_is_clipped_to_viewport() {
        let piece = ActivePiece::spawn(PieceKind::I, Anchor::new(0, 4));
        let view = GameView::default();
        let viewport = Viewport::new(80, 24);

        // frame wider than u16: pinned to the left edge, centred vertically
        let wide = view.render(&Board::new(2, 40_000), &piece, 0, 10, viewport);
        assert_eq!((wide.width(), wide.height()), (80, 24));
        assert_eq!(wide.get(0, 9).map(|g| g.ch), Some('┌'));
        assert_eq!(wide.row_text(10).chars().nth(9), Some('█'));

        let tall = view.render(&Board::new(70_000, 8), &piece, 0, 10, viewport);
        assert_eq!(tall.get(31, 0).map(|g| g.ch), Some('┌'));
    }

    #[test]
    fn message_banner_is_drawn_over_board() {
        let board = Board::new(5, 10);
        let piece = ActivePiece::spawn(PieceKind::O, Anchor::new(0, 0));
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let viewport = Viewport::new(22, 8);
        let mut fb = view.render(&board, &piece, 0, 10, viewport);

        view.render_message(&board, "Game Over!", viewport, &mut fb);
        assert!(fb.row_text(3).contains(" Game Over! "));
    }
}
