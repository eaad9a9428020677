//! Pieces module - shape grids, the shape library and clockwise rotation
//!
//! A shape is a small rectangular grid of cells. Rotation never mutates a
//! grid in place: it copies cells into a freshly sized grid, so a rejected
//! rotation can simply drop the candidate.

use arrayvec::ArrayVec;

use crate::rng::PieceSource;
use crate::types::{Cell, PieceKind};

/// Largest grid side any library shape reaches (the I piece stood up).
pub const MAX_SHAPE_SIDE: usize = 4;

const MAX_SHAPE_CELLS: usize = MAX_SHAPE_SIDE * MAX_SHAPE_SIDE;

/// Rectangular grid of cells, row-major, at most 4x4.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShapeGrid {
    rows: usize,
    cols: usize,
    cells: ArrayVec<Cell, MAX_SHAPE_CELLS>,
}

impl ShapeGrid {
    /// Build a grid from ASCII rows (`#` filled, `.` or space empty).
    ///
    /// Short rows are padded with empty cells up to the longest row.
    /// Returns `None` for an empty input, an unknown glyph, or a grid that
    /// exceeds 4x4.
    ///
    /// # Examples
    ///
    /// ```
    /// use tty_tetris_core::ShapeGrid;
    ///
    /// let j = ShapeGrid::from_ascii(&["###", "#"]).unwrap();
    /// assert_eq!((j.rows(), j.cols()), (2, 3));
    /// assert_eq!(j.filled_count(), 4);
    /// ```
    pub fn from_ascii(rows: &[&str]) -> Option<Self> {
        let cols = rows.iter().map(|r| r.chars().count()).max()?;
        if rows.len() > MAX_SHAPE_SIDE || cols == 0 || cols > MAX_SHAPE_SIDE {
            return None;
        }

        let mut cells = ArrayVec::new();
        for row in rows {
            let mut width = 0;
            for ch in row.chars() {
                cells.push(Cell::from_char(ch)?);
                width += 1;
            }
            for _ in width..cols {
                cells.push(Cell::Empty);
            }
        }

        Some(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at local (row, col), `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// Local (row, col) offsets of every filled cell, in row-major order
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_filled())
            .map(move |(idx, _)| (idx / cols, idx % cols))
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_filled()).count()
    }

    /// Rotate 90° clockwise into a new grid.
    ///
    /// New cell (r, c) is old cell (rows - 1 - c, r); dimensions swap.
    pub fn rotate_cw(&self) -> Self {
        let rows = self.cols;
        let cols = self.rows;
        let mut cells = ArrayVec::new();
        for r in 0..rows {
            for c in 0..cols {
                cells.push(self.cells[(self.rows - 1 - c) * self.cols + r]);
            }
        }
        Self { rows, cols, cells }
    }

    /// ASCII rows, mostly for assertions and logs
    pub fn to_ascii(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|cell| cell.as_char()).collect())
            .collect()
    }
}

/// Rows of each library shape, top to bottom.
fn ascii_rows(kind: PieceKind) -> &'static [&'static str] {
    match kind {
        PieceKind::I => &["####"],
        PieceKind::O => &["##", "##"],
        PieceKind::J => &["###", "#.."],
        PieceKind::L => &["###", ".#."],
        PieceKind::S => &["###", "..#"],
        PieceKind::Z => &["##.", ".##"],
        PieceKind::T => &[".##", "##."],
    }
}

/// The immutable catalogue of the seven shapes.
pub struct ShapeLibrary;

impl ShapeLibrary {
    /// Spawn orientation of a piece kind
    pub fn shape(kind: PieceKind) -> ShapeGrid {
        match ShapeGrid::from_ascii(ascii_rows(kind)) {
            Some(grid) => grid,
            None => unreachable!("library shape {kind:?} is malformed"),
        }
    }

    /// All seven shapes, paired with their kind, in catalogue order
    pub fn pieces() -> [(PieceKind, ShapeGrid); 7] {
        PieceKind::ALL.map(|kind| (kind, Self::shape(kind)))
    }

    /// Draw the next shape from `source`
    pub fn random_shape<S: PieceSource + ?Sized>(source: &mut S) -> (PieceKind, ShapeGrid) {
        let kind = source.next_kind();
        (kind, Self::shape(kind))
    }
}
