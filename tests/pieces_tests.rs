//! Pieces tests - the shape library and clockwise rotation

use tty_tetris::core::{ActivePiece, Anchor, ShapeGrid, ShapeLibrary};
use tty_tetris::types::PieceKind;

#[test]
fn test_every_kind_has_four_cells() {
    for (kind, shape) in ShapeLibrary::pieces() {
        assert_eq!(shape.filled_count(), 4, "{kind:?}");
    }
}

#[test]
fn test_spawn_dimensions() {
    let dims: Vec<_> = PieceKind::ALL
        .iter()
        .map(|&kind| {
            let shape = ShapeLibrary::shape(kind);
            (shape.rows(), shape.cols())
        })
        .collect();
    assert_eq!(
        dims,
        vec![(1, 4), (2, 2), (2, 3), (2, 3), (2, 3), (2, 3), (2, 3)]
    );
}

#[test]
fn test_four_rotations_are_identity() {
    for (kind, shape) in ShapeLibrary::pieces() {
        let turned = shape.rotate_cw().rotate_cw().rotate_cw().rotate_cw();
        assert_eq!(turned, shape, "{kind:?}");
    }
}

#[test]
fn test_two_rotations_of_o_and_i() {
    let o = ShapeLibrary::shape(PieceKind::O);
    assert_eq!(o.rotate_cw(), o);

    let i = ShapeLibrary::shape(PieceKind::I);
    assert_eq!(i.rotate_cw().rotate_cw(), i);
}

#[test]
fn test_rotate_t_clockwise() {
    // .##      #.
    // ##.  ->  ##
    //          .#
    let t = ShapeLibrary::shape(PieceKind::T).rotate_cw();
    assert_eq!(t.to_ascii(), vec!["#.", "##", ".#"]);
}

#[test]
fn test_rotate_l_clockwise() {
    // ###      .#
    // .#.  ->  ##
    //          .#
    let l = ShapeLibrary::shape(PieceKind::L).rotate_cw();
    assert_eq!(l.to_ascii(), vec![".#", "##", ".#"]);
}

#[test]
fn test_rotate_does_not_touch_source() {
    let s = ShapeLibrary::shape(PieceKind::S);
    let copy = s.clone();
    let _ = s.rotate_cw();
    assert_eq!(s, copy);
}

#[test]
fn test_ragged_rows_are_padded() {
    let grid = ShapeGrid::from_ascii(&["###", "#"]).unwrap();
    assert_eq!(grid.to_ascii(), vec!["###", "#.."]);
}

#[test]
fn test_active_piece_rotation_keeps_anchor() {
    let piece = ActivePiece::spawn(PieceKind::J, Anchor::new(5, 5));
    let turned = piece.rotated();
    assert_eq!(turned.anchor, Anchor::new(5, 5));
    let cells: Vec<_> = turned.cells().collect();
    assert_eq!(cells, vec![(5, 5), (5, 6), (6, 6), (7, 6)]);
}
