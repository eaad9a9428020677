//! Board module - manages the grid of settled blocks
//!
//! The board is a `height x width` grid (20x14 by default) stored as a flat
//! row-major vector. Only settled blocks live here; the falling piece is kept
//! separately and merged exactly once when it settles.
//! Coordinates: (row, col) where row 0 is the top and col 0 is the left edge.

use crate::pieces::ShapeGrid;
use crate::types::{Cell, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

/// Board position of a shape's top-left cell.
///
/// Signed so candidate positions left of or above the board can be tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anchor {
    pub row: i32,
    pub col: i32,
}

impl Anchor {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

/// The game board - flat row-major storage, fixed dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![Cell::Empty; height * width],
        }
    }

    /// Build a board from rows of cells.
    ///
    /// Returns `None` unless every row has the same length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        Some(Self {
            height,
            width,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Build a board from ASCII rows (`#` filled, `.` or space empty).
    ///
    /// # Examples
    ///
    /// ```
    /// use tty_tetris_core::Board;
    ///
    /// let board = Board::from_ascii(&["....", "##.#"]).unwrap();
    /// assert!(board.is_occupied(1, 0));
    /// assert!(!board.is_occupied(1, 2));
    /// ```
    pub fn from_ascii(rows: &[&str]) -> Option<Self> {
        let rows = rows
            .iter()
            .map(|row| row.chars().map(Cell::from_char).collect::<Option<Vec<_>>>())
            .collect::<Option<Vec<_>>>()?;
        Self::from_rows(rows)
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if !self.is_in_bounds(row, col) {
            return None;
        }
        Some(row as usize * self.width + col as usize)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Cell at (row, col), `None` when out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and filled
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(Cell::Filled))
    }

    /// Whether every filled cell of `shape` lands on an in-bounds, empty cell
    pub fn can_place(&self, shape: &ShapeGrid, anchor: Anchor) -> bool {
        shape.filled_cells().all(|(r, c)| {
            let row = anchor.row + r as i32;
            let col = anchor.col + c as i32;
            matches!(self.get(row, col), Some(Cell::Empty))
        })
    }

    /// Fill every cell covered by `shape`.
    ///
    /// Callers check [`Board::can_place`] first; cells that fall outside the
    /// board are skipped.
    pub fn merge(&mut self, shape: &ShapeGrid, anchor: Anchor) {
        for (r, c) in shape.filled_cells() {
            self.set(anchor.row + r as i32, anchor.col + c as i32, Cell::Filled);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .is_some_and(|cells| cells.iter().all(|cell| cell.is_filled()))
    }

    /// Cells of one row, `None` past the bottom
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks() rejects a zero size
        self.cells.chunks(self.width.max(1))
    }

    /// Remove every full row at once and return how many were removed.
    ///
    /// Remaining rows keep their order and sink to the bottom; the same
    /// number of empty rows appear at the top. Scans bottom-up with a write
    /// cursor so rows are moved in place with no allocation.
    pub fn clear_full_lines(&mut self) -> usize {
        let width = self.width;
        let mut cleared = 0;
        let mut write_row = self.height;

        for read_row in (0..self.height).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * width;
                    self.cells.copy_within(src..src + width, write_row * width);
                }
            }
        }

        self.cells[..write_row * width].fill(Cell::Empty);
        cleared
    }

    /// ASCII rows (`#` filled, `.` empty)
    pub fn to_ascii(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.as_char()).collect())
            .collect()
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_filled()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH)
    }
}
