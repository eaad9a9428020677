use tty_tetris::core::{ActivePiece, Anchor, Board, GameState};
use tty_tetris::term::{AnchorY, GameView, Viewport};
use tty_tetris::types::{Cell, PieceKind};

#[test]
fn term_view_renders_border_corners() {
    let state = GameState::new(1);
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    // 14 cells * 2 columns + border => 30 wide, 20 rows + border => 22 high
    let vp = Viewport::new(30, 23);
    let fb = view.render(state.board(), state.active(), 0, 10, vp);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(29, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(29, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_settled_cell_as_two_chars_wide() {
    let mut board = Board::default();
    board.set(19, 0, Cell::Filled);
    let active = ActivePiece::spawn(PieceKind::O, Anchor::new(0, 4));

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&board, &active, 0, 10, Viewport::new(30, 23));

    // Inside border: (1,1) origin.
    let y0 = 1 + 19;
    assert_eq!(fb.get(1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(2, y0).unwrap().ch, '█');
    assert_eq!(fb.get(3, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece_at_anchor() {
    let board = Board::default();
    let active = ActivePiece::spawn(PieceKind::I, Anchor::new(3, 4));

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&board, &active, 0, 10, Viewport::new(30, 23));

    assert_eq!(
        fb.row_text(4),
        "│········████████············│"
    );
}

#[test]
fn term_view_status_line_shows_score_and_target() {
    let state = GameState::new(1);
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let vp = Viewport::new(40, 23);
    let fb = view.render(state.board(), state.active(), 4, 10, vp);

    assert!(fb.row_text(22).starts_with("Score: 4   Target: 10"));
}

#[test]
fn term_view_is_centered_in_large_viewport() {
    let state = GameState::new(1);
    let vp = Viewport::new(50, 33);
    let fb = GameView::default().render(state.board(), state.active(), 0, 10, vp);

    // frame 30x22 plus a status row
    assert_eq!(fb.get(10, 5).unwrap().ch, '┌');
    assert_eq!(fb.get(39, 26).unwrap().ch, '┘');
}

#[test]
fn term_view_tolerates_tiny_viewport() {
    let state = GameState::new(1);
    let vp = Viewport::new(5, 3);
    let fb = GameView::default().render(state.board(), state.active(), 0, 10, vp);
    assert_eq!((fb.width(), fb.height()), (5, 3));
}
