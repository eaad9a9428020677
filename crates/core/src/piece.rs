//! The falling piece: a shape grid plus where it sits on the board.

use crate::board::{Anchor, Board};
use crate::pieces::{ShapeGrid, ShapeLibrary};
use crate::types::PieceKind;

/// Active falling piece
///
/// Never mutated in place: moves and rotations build a candidate piece that
/// replaces the current one only if the board accepts it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: ShapeGrid,
    pub anchor: Anchor,
}

impl ActivePiece {
    pub fn new(kind: PieceKind, shape: ShapeGrid, anchor: Anchor) -> Self {
        Self {
            kind,
            shape,
            anchor,
        }
    }

    /// Spawn orientation of `kind` at `anchor`
    pub fn spawn(kind: PieceKind, anchor: Anchor) -> Self {
        Self::new(kind, ShapeLibrary::shape(kind), anchor)
    }

    /// Same shape, anchor moved by (d_row, d_col)
    pub fn shifted(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            anchor: self.anchor.offset(d_row, d_col),
            ..self.clone()
        }
    }

    /// Shape turned clockwise about the unchanged anchor
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotate_cw(),
            ..self.clone()
        }
    }

    /// Check if every filled cell sits on an empty in-bounds board cell
    pub fn fits(&self, board: &Board) -> bool {
        board.can_place(&self.shape, self.anchor)
    }

    /// Absolute (row, col) of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .filled_cells()
            .map(|(r, c)| (self.anchor.row + r as i32, self.anchor.col + c as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_are_board_relative() {
        let piece = ActivePiece::spawn(PieceKind::O, Anchor::new(3, 5));
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(3, 5), (3, 6), (4, 5), (4, 6)]);
    }

    #[test]
    fn test_shifted_keeps_shape() {
        let piece = ActivePiece::spawn(PieceKind::L, Anchor::new(0, 4));
        let moved = piece.shifted(1, -1);
        assert_eq!(moved.anchor, Anchor::new(1, 3));
        assert_eq!(moved.shape, piece.shape);
        assert_eq!(moved.kind, PieceKind::L);
    }

    #[test]
    fn test_rotated_keeps_anchor() {
        let piece = ActivePiece::spawn(PieceKind::I, Anchor::new(2, 2));
        let turned = piece.rotated();
        assert_eq!(turned.anchor, piece.anchor);
        assert_eq!((turned.shape.rows(), turned.shape.cols()), (4, 1));
    }

    #[test]
    fn test_fits_checks_board() {
        let board = Board::default();
        assert!(ActivePiece::spawn(PieceKind::I, Anchor::new(0, 10)).fits(&board));
        assert!(!ActivePiece::spawn(PieceKind::I, Anchor::new(0, 11)).fits(&board));
    }
}
