//! Board module - the playfield grid
//!
//! A `width` x `height` grid where each cell is empty or holds the kind of a
//! locked block. Storage is one flat row-major buffer allocated once per
//! session. Coordinates are (x, y) with x growing rightwards and y growing
//! downwards; row 0 is the top row. Anything outside `[0, width) x [0, height)`
//! counts as solid for collision purposes.

use crate::piece::ActivePiece;
use crate::types::{Cell, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

/// The playfield
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; usize::from(width) * usize::from(height)],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= i32::from(self.width) || y < 0 || y >= i32::from(self.height) {
            return None;
        }
        Some(y as usize * usize::from(self.width) + x as usize)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at (x, y); `None` when out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y); returns false when out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty
    pub fn is_valid(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// In bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// True if any block of `piece` is out of bounds or on a filled cell.
    ///
    /// Rows above the field (y < 0) are out of bounds like any other side.
    pub fn collides(&self, piece: &ActivePiece) -> bool {
        piece
            .blocks()
            .iter()
            .any(|&(x, y)| !self.is_valid(x, y))
    }

    /// Write the piece's kind into its four cells.
    ///
    /// The caller must have checked `!collides(piece)`.
    pub fn lock(&mut self, piece: &ActivePiece) {
        debug_assert!(
            !self.collides(piece),
            "locking a piece that collides: {piece:?}"
        );
        self.stamp(piece);
    }

    /// Write the piece's in-bounds cells, overwriting whatever is there.
    ///
    /// Blocks outside the field are dropped. Returns how many were written.
    pub fn stamp(&mut self, piece: &ActivePiece) -> usize {
        piece
            .blocks()
            .into_iter()
            .filter(|&(x, y)| self.set(x, y, Some(piece.kind)))
            .count()
    }

    fn row(&self, y: usize) -> &[Cell] {
        let width = usize::from(self.width);
        &self.cells[y * width..(y + 1) * width]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        y < usize::from(self.height) && self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Remove every full row, dropping the rows above it, and return how
    /// many rows were removed.
    ///
    /// Single bottom-up compaction pass: each surviving row is copied once
    /// to its final position and the vacated rows at the top are emptied.
    /// This is equivalent to clearing full rows one by one top-to-bottom
    /// and shifting everything above each of them down by one.
    pub fn clear_full_rows(&mut self) -> u32 {
        let width = usize::from(self.width);
        let mut write_y = usize::from(self.height);
        let mut cleared = 0;

        for read_y in (0..usize::from(self.height)).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    self.cells.copy_within(src..src + width, write_y * width);
                }
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(usize::from(self.width))
    }

    /// Flat row-major view of all cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT)
    }
}
