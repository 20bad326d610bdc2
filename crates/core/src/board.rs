//! Board module - the occupancy grid
//!
//! The board is a flat `B_ROWS x B_COLS` array of booleans addressed by
//! `row * B_COLS + col`. Walls and floor are stored as permanently occupied cells,
//! so "does a shape fit" is a pure occupancy test with no bounds arithmetic.
//! Once a piece locks only occupancy survives; no piece kind is kept per cell.

use crate::types::{A_FIRST, A_LAST, B_COLS, B_ROWS, B_SIZE, INTERIOR_WIDTH};

/// One grid unit: `true` when occupied.
pub type Cell = bool;

/// The playfield, walls and floor included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * B_COLS + col)
    cells: [Cell; B_SIZE],
}

impl Board {
    /// Create an initialized board: floor rows and side walls set, interior empty.
    pub fn new() -> Self {
        let mut board = Self {
            cells: [false; B_SIZE],
        };
        board.initialize();
        board
    }

    /// Reset every cell to the starting layout.
    pub fn initialize(&mut self) {
        for (idx, cell) in self.cells.iter_mut().enumerate() {
            *cell = Self::is_sentinel(idx);
        }
    }

    /// Flat index for `(row, col)`.
    #[inline(always)]
    pub fn index(row: usize, col: usize) -> usize {
        debug_assert!(row < B_ROWS && col < B_COLS);
        row * B_COLS + col
    }

    #[inline(always)]
    pub fn row_of(idx: usize) -> usize {
        idx / B_COLS
    }

    #[inline(always)]
    pub fn col_of(idx: usize) -> usize {
        idx % B_COLS
    }

    /// Whether `idx` is a wall or floor cell.
    pub fn is_sentinel(idx: usize) -> bool {
        let col = Self::col_of(idx);
        Self::row_of(idx) >= A_LAST || col == 0 || col == B_COLS - 1
    }

    /// # Panics
    ///
    /// Panics on an index outside the board; such an index can only come from a
    /// broken shape table or anchor, never from play.
    #[inline]
    pub fn is_occupied(&self, idx: usize) -> bool {
        self.cells[Self::checked(idx)]
    }

    /// # Panics
    ///
    /// Same contract as [`Board::is_occupied`].
    #[inline]
    pub fn set_occupied(&mut self, idx: usize, occupied: bool) {
        self.cells[Self::checked(idx)] = occupied;
    }

    #[inline(always)]
    fn checked(idx: usize) -> usize {
        assert!(
            idx < B_SIZE,
            "board index {idx} out of range (board has {B_SIZE} cells)"
        );
        idx
    }

    /// Interior cells of `row`, walls excluded.
    pub fn interior(&self, row: usize) -> &[Cell] {
        let start = Self::index(row, 1);
        &self.cells[start..start + INTERIOR_WIDTH]
    }

    pub(crate) fn interior_mut(&mut self, row: usize) -> &mut [Cell] {
        let start = Self::index(row, 1);
        &mut self.cells[start..start + INTERIOR_WIDTH]
    }

    /// Check if every interior cell of `row` is occupied
    pub fn is_row_full(&self, row: usize) -> bool {
        self.interior(row).iter().all(|&cell| cell)
    }

    /// Occupied interior cells across the active rows (floor and walls excluded).
    pub fn occupied_count(&self) -> usize {
        (A_FIRST..A_LAST)
            .map(|row| self.interior(row).iter().filter(|&&cell| cell).count())
            .sum()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell; B_SIZE] {
        &self.cells
    }

    /// Copy row `src` over row `dst` (walls included).
    pub(crate) fn copy_row(&mut self, src: usize, dst: usize) {
        let src_start = Self::index(src, 0);
        self.cells
            .copy_within(src_start..src_start + B_COLS, Self::index(dst, 0));
    }

    /// Build a board from an initialized layout plus the listed occupied cells.
    pub fn with_occupied(cells: impl IntoIterator<Item = usize>) -> Self {
        let mut board = Self::new();
        for idx in cells {
            board.set_occupied(idx, true);
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), 0);
        assert_eq!(Board::index(0, 11), 11);
        assert_eq!(Board::index(1, 0), 12);
        assert_eq!(Board::index(22, 11), B_SIZE - 1);
        assert_eq!(Board::row_of(Board::index(7, 3)), 7);
        assert_eq!(Board::col_of(Board::index(7, 3)), 3);
    }

    #[test]
    fn test_initial_layout() {
        let board = Board::new();
        for idx in 0..B_SIZE {
            assert_eq!(
                board.is_occupied(idx),
                Board::is_sentinel(idx),
                "cell {idx} (row {}, col {})",
                Board::row_of(idx),
                Board::col_of(idx)
            );
        }
        assert_eq!(board.occupied_count(), 0);
        assert!(board.is_row_full(A_LAST));
        assert!(board.is_row_full(B_ROWS - 1));
    }

    #[test]
    fn test_set_and_clear_cell() {
        let mut board = Board::new();
        let idx = Board::index(10, 4);

        board.set_occupied(idx, true);
        assert!(board.is_occupied(idx));
        assert_eq!(board.occupied_count(), 1);

        board.set_occupied(idx, false);
        assert!(!board.is_occupied(idx));
        assert_eq!(board, Board::new());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_access_is_fatal() {
        let board = Board::new();
        board.is_occupied(B_SIZE);
    }

    #[test]
    fn test_row_full_ignores_walls() {
        let mut board = Board::new();
        let row = 12;
        for col in 1..B_COLS - 2 {
            board.set_occupied(Board::index(row, col), true);
        }
        assert!(!board.is_row_full(row));
        board.set_occupied(Board::index(row, B_COLS - 2), true);
        assert!(board.is_row_full(row));
    }

    #[test]
    fn test_initialize_resets_board() {
        let mut board = Board::with_occupied([Board::index(5, 5), Board::index(6, 6)]);
        assert_eq!(board.occupied_count(), 2);
        board.initialize();
        assert_eq!(board, Board::new());
    }
}
