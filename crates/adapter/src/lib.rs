//! Adapter module - display-driver frame projection
//!
//! The original hardware drove an 8x8 LED matrix through a MAX7219-class
//! driver chip that takes one byte per row. This crate is that boundary,
//! kept as a pure read-only projection of the board:
//!
//! - **8 bytes, one per row**, row 0 first
//! - **MSB = leftmost column (column 0)**
//! - a bit is set iff the cell is non-empty - snack and body both light a
//!   dot; the matrix is single-color and cannot tell them apart
//! - a frame is produced once per tick and written whole; there is no
//!   partial-frame visibility
//!
//! Everything downstream of the frame (SPI register writes on the device,
//! the terminal view here) consumes this format unchanged.

pub use tui_snake_core as core;
pub use tui_snake_types as types;

use crate::core::Board;
use crate::types::GRID_DIM;

/// One display frame: eight row bytes.
pub type Frame = [u8; GRID_DIM as usize];

/// Encode the board into a display frame.
///
/// Pure projection; never mutates the board.
pub fn encode_frame(board: &Board) -> Frame {
    let mut frame: Frame = [0; GRID_DIM as usize];
    for row in 0..GRID_DIM {
        frame[row as usize] = row_byte(board, row);
    }
    frame
}

/// Encode a single row: column 0 lands in the MSB.
pub fn row_byte(board: &Board, row: u8) -> u8 {
    let mut val = 0u8;
    for col in 0..GRID_DIM {
        let lit = board.get(Board::index(row, col)).is_lit();
        val = (val << 1) | lit as u8;
    }
    val
}

/// Decode a frame back into per-cell occupancy, row-major.
///
/// Inverse of [`encode_frame`] up to occupancy: the frame only knows
/// lit-vs-dark, not snack-vs-body.
pub fn frame_occupancy(frame: &Frame) -> [bool; 64] {
    let mut occ = [false; 64];
    for row in 0..GRID_DIM {
        for col in 0..GRID_DIM {
            let bit = (frame[row as usize] >> (GRID_DIM - 1 - col)) & 1;
            occ[Board::index(row, col) as usize] = bit != 0;
        }
    }
    occ
}
