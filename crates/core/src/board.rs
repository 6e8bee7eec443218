//! Board module - manages the 8x8 game grid
//!
//! The board is a flat array of 64 cells, row-major (`row * 8 + col`).
//! Occupied snake cells store the index of the next cell toward the head
//! (see [`Cell`]), so the grid is simultaneously the playing field and the
//! snake's forward-linked-list storage - no separate body list, no
//! allocation.
//!
//! All movement math goes through [`Board::index`] / [`Board::row_col`]
//! rather than raw arithmetic on flat indices, to keep wrap-around bugs out
//! of the boundary checks.

use crate::rng::SimpleRng;
use crate::types::{Cell, BOARD_CELLS, GRID_DIM};

/// The game board - 8x8 cells using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * GRID_DIM + col)
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    pub fn index(row: u8, col: u8) -> u8 {
        debug_assert!(row < GRID_DIM && col < GRID_DIM);
        row * GRID_DIM + col
    }

    /// Split a flat index back into (row, col)
    #[inline(always)]
    pub fn row_col(idx: u8) -> (u8, u8) {
        (idx / GRID_DIM, idx % GRID_DIM)
    }

    /// Get cell at flat index
    #[inline]
    pub fn get(&self, idx: u8) -> Cell {
        self.cells[idx as usize]
    }

    /// Set cell at flat index
    #[inline]
    pub fn set(&mut self, idx: u8, cell: Cell) {
        self.cells[idx as usize] = cell;
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; BOARD_CELLS];
    }

    /// Whether no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(Cell::is_empty)
    }

    /// Flat index of the snack, if one is on the board
    pub fn snack_index(&self) -> Option<u8> {
        self.cells
            .iter()
            .position(|c| *c == Cell::Snack)
            .map(|i| i as u8)
    }

    /// Place a snack on a random empty cell.
    ///
    /// Picks a uniformly random starting index and probes forward (wrapping)
    /// to the first empty cell. The up-front full-board check is what makes
    /// the probe terminate: the original firmware looped forever once the
    /// snake covered the grid.
    ///
    /// Returns the chosen index, or `None` if the board has no empty cell
    /// (the caller treats that as the win condition).
    pub fn place_snack(&mut self, rng: &mut SimpleRng) -> Option<u8> {
        if self.is_full() {
            return None;
        }

        let mut idx = rng.next_range(BOARD_CELLS as u32) as u8;
        while !self.get(idx).is_empty() {
            idx = (idx + 1) % BOARD_CELLS as u8;
        }

        self.set(idx, Cell::Snack);
        Some(idx)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
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
    fn test_index_calculation() {
        assert_eq!(Board::index(0, 0), 0);
        assert_eq!(Board::index(0, 7), 7);
        assert_eq!(Board::index(1, 0), 8);
        assert_eq!(Board::index(7, 7), 63);
    }

    #[test]
    fn test_row_col_roundtrip() {
        for idx in 0..BOARD_CELLS as u8 {
            let (row, col) = Board::row_col(idx);
            assert_eq!(Board::index(row, col), idx);
        }
    }

    #[test]
    fn test_new_board_empty() {
        let board = Board::new();
        assert!(board.cells().iter().all(Cell::is_empty));
        assert_eq!(board.snack_index(), None);
        assert!(!board.is_full());
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new();
        board.set(10, Cell::Head);
        board.set(9, Cell::Link(10));

        assert_eq!(board.get(10), Cell::Head);
        assert_eq!(board.get(9), Cell::Link(10));
        assert_eq!(board.get(11), Cell::Empty);
    }

    #[test]
    fn test_place_snack_lands_on_empty() {
        let mut board = Board::new();
        let mut rng = SimpleRng::new(42);

        // Occupy most of the board, leaving a single hole.
        for idx in 0..BOARD_CELLS as u8 {
            if idx != 37 {
                board.set(idx, Cell::Link(0));
            }
        }

        let placed = board.place_snack(&mut rng);
        assert_eq!(placed, Some(37));
        assert_eq!(board.get(37), Cell::Snack);
    }

    #[test]
    fn test_place_snack_full_board() {
        let mut board = Board::new();
        let mut rng = SimpleRng::new(42);

        for idx in 0..BOARD_CELLS as u8 {
            board.set(idx, Cell::Link(0));
        }

        assert!(board.is_full());
        assert_eq!(board.place_snack(&mut rng), None);
    }

    #[test]
    fn test_place_snack_exactly_one() {
        let mut board = Board::new();
        let mut rng = SimpleRng::new(99);

        board.place_snack(&mut rng);
        let snacks = board.cells().iter().filter(|c| **c == Cell::Snack).count();
        assert_eq!(snacks, 1);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut board = Board::new();
        let mut rng = SimpleRng::new(5);
        board.set(3, Cell::Head);
        board.place_snack(&mut rng);

        board.clear();
        assert!(board.cells().iter().all(Cell::is_empty));
    }
}
