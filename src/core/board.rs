//! Board module - the fixed 20x10 playfield grid.
//!
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates are (col, row): col ranges 0..9 (left to right), row ranges
//! 0..19 (top to bottom). Rows below 0 are the spawn buffer above the
//! visible field: pieces pass through them, collision checks treat them as
//! empty, and the grid never stores them.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceVariant, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of slots on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The playfield - 10 columns x 20 rows of flat, row-major storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (col, row); None outside the visible field
    #[inline(always)]
    fn index(col: i8, row: i8) -> Option<usize> {
        if col < 0 || col >= BOARD_WIDTH as i8 || row < 0 || row >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((row as usize) * (BOARD_WIDTH as usize) + (col as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get the cell at (col, row)
    /// Returns None outside the visible field
    pub fn get(&self, col: i8, row: i8) -> Option<Cell> {
        Self::index(col, row).map(|idx| self.cells[idx])
    }

    /// Set the cell at (col, row)
    /// Returns false outside the visible field
    pub fn set(&mut self, col: i8, row: i8, cell: Cell) -> bool {
        match Self::index(col, row) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether a piece cell may occupy (col, row).
    ///
    /// Open means: column in range, above the floor, and either in the spawn
    /// buffer (row < 0, always empty by definition) or an empty grid slot.
    /// This single rule backs movement, rotation, and spawn validation.
    pub fn is_open(&self, col: i8, row: i8) -> bool {
        if col < 0 || col >= BOARD_WIDTH as i8 || row >= BOARD_HEIGHT as i8 {
            return false;
        }
        if row < 0 {
            return true;
        }
        self.cells[(row as usize) * (BOARD_WIDTH as usize) + (col as usize)].is_none()
    }

    /// Check if (col, row) holds a settled cell
    pub fn is_occupied(&self, col: i8, row: i8) -> bool {
        matches!(self.get(col, row), Some(Some(_)))
    }

    /// Check if a row is completely filled.
    ///
    /// The grid is structurally 20 rows; an index outside it is a caller bug.
    pub fn is_row_full(&self, row: usize) -> bool {
        assert!(row < BOARD_HEIGHT as usize, "row {row} out of range");
        let start = row * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows and return their indices (sorted top to bottom).
    ///
    /// Two-pointer compaction, bottom to top: surviving rows shift down in
    /// place with `copy_within` (no allocation, preserves relative order)
    /// and the vacated rows at the top are emptied.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared_rows = ArrayVec::new();
        let width = BOARD_WIDTH as usize;
        let mut write_row = BOARD_HEIGHT as usize;

        for read_row in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_row) {
                cleared_rows.push(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * width;
                    let dst = write_row * width;
                    self.cells.copy_within(src..src + width, dst);
                }
            }
        }

        // Fresh empty rows on top, one per cleared row.
        for cell in &mut self.cells[..write_row * width] {
            *cell = None;
        }

        cleared_rows.reverse();
        cleared_rows
    }

    /// Write a locked piece's cells into the grid.
    ///
    /// Cells still in the spawn buffer (row < 0) or otherwise outside the
    /// visible field are silently skipped: that part of the piece never
    /// reached the board.
    pub fn fill_cells(&mut self, cells: &[(i8, i8)], variant: PieceVariant) {
        for &(col, row) in cells {
            self.set(col, row, Some(variant));
        }
    }

    /// Copy the grid into a 2D row-major array (render snapshot export)
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        let width = BOARD_WIDTH as usize;
        for (row, out_row) in out.iter_mut().enumerate() {
            let start = row * width;
            out_row.copy_from_slice(&self.cells[start..start + width]);
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Create from a 2D vector for testing (converts to flat storage)
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells_2d.len(), BOARD_HEIGHT as usize);
        assert!(cells_2d.iter().all(|row| row.len() == BOARD_WIDTH as usize));

        let mut flat = [None; BOARD_SIZE];
        for (row, row_cells) in cells_2d.iter().enumerate() {
            for (col, cell) in row_cells.iter().enumerate() {
                flat[row * BOARD_WIDTH as usize + col] = *cell;
            }
        }
        Self { cells: flat }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
