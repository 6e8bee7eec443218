//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, rendering, input handling).
//!
//! # Board Dimensions
//!
//! The playing field mirrors an 8x8 LED dot matrix:
//!
//! - **Grid**: 8 rows x 8 columns, 64 cells, row-major (`row * 8 + col`)
//! - **Spawn cell**: (row 1, col 1)
//!
//! # Coordinate Convention
//!
//! The direction-to-delta mapping is the one the original matrix hardware
//! used, fixed here so the boundary rules are unambiguous:
//!
//! | Direction | Delta | Fails at |
//! |-----------|-----------|----------|
//! | `Up` | row - 1 | row 0 |
//! | `Down` | row + 1 | row 7 |
//! | `Left` | col + 1 | col 7 |
//! | `Right` | col - 1 | col 0 |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Cell, Direction, GRID_DIM, BOARD_CELLS};
//!
//! let dir = Direction::from_str("up").unwrap();
//! assert_eq!(dir, Direction::Up);
//! assert!(dir.is_reverse_of(Direction::Down));
//!
//! assert!(Cell::Snack.is_lit());
//! assert!(!Cell::Snack.is_body());
//!
//! assert_eq!(GRID_DIM as usize * GRID_DIM as usize, BOARD_CELLS);
//! ```

/// Grid dimension (8 rows and 8 columns)
pub const GRID_DIM: u8 = 8;

/// Total number of cells on the board
pub const BOARD_CELLS: usize = (GRID_DIM as usize) * (GRID_DIM as usize);

/// Spawn row for a fresh snake
pub const START_ROW: u8 = 1;

/// Spawn column for a fresh snake
pub const START_COL: u8 = 1;

/// Tick interval of the control loop in milliseconds
pub const TICK_MS: u32 = 400;

/// Travel direction of a freshly spawned snake
pub const INITIAL_DIRECTION: Direction = Direction::Left;

/// Movement axis, used by the input reader to select which deflections
/// are meaningful for the current travel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// The four directional symbols the engine accepts.
///
/// This is a closed set: the original treated any unknown input byte as a
/// fatal collision, which a Rust enum makes unrepresentable at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Parse a direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// The axis this direction travels along.
    pub fn axis(&self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    /// Whether `other` is the exact 180-degree reverse of `self`.
    ///
    /// The engine does not special-case reversals; a reverse move dies via
    /// the generic self-collision check. This predicate exists for callers
    /// (and tests) that want to reason about it.
    pub fn is_reverse_of(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }
}

/// One cell of the 8x8 board.
///
/// Occupied snake cells double as the snake's linked-list storage: a `Link`
/// holds the index of the next cell toward the head, and the head cell is the
/// `Head` sentinel. Following links from the tail reaches the head, so no
/// separate body list is ever allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Snack,
    Head,
    Link(u8),
}

impl Cell {
    /// True for `Empty` cells only.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// True for cells occupied by the snake (`Head` or `Link`).
    pub fn is_body(&self) -> bool {
        matches!(self, Cell::Head | Cell::Link(_))
    }

    /// True for any non-empty cell - this is the display projection:
    /// snack and body both light a dot on the matrix.
    pub fn is_lit(&self) -> bool {
        !self.is_empty()
    }
}

/// Engine lifecycle states.
///
/// `Collided` and `Won` are terminal for the current game; the driving loop
/// resolves both with a full reset. `Won` is the explicit full-board policy:
/// when the snake covers the whole grid there is nowhere left to spawn a
/// snack, so the game ends rather than looping forever looking for one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Collided,
    Won,
}

/// Result of a single engine step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved into an empty cell; tail advanced.
    Moved,
    /// Consumed the snack and grew; a new snack was placed.
    Ate,
    /// Out-of-bounds or self-collision; game over.
    Collided,
    /// Consumed the last reachable snack with no empty cell left.
    Won,
}

impl StepOutcome {
    /// Whether this outcome ends the current game.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StepOutcome::Collided | StepOutcome::Won)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_reverse_pairs() {
        assert!(Direction::Up.is_reverse_of(Direction::Down));
        assert!(Direction::Down.is_reverse_of(Direction::Up));
        assert!(Direction::Left.is_reverse_of(Direction::Right));
        assert!(Direction::Right.is_reverse_of(Direction::Left));

        assert!(!Direction::Up.is_reverse_of(Direction::Left));
        assert!(!Direction::Left.is_reverse_of(Direction::Left));
    }

    #[test]
    fn direction_axes() {
        assert_eq!(Direction::Up.axis(), Axis::Vertical);
        assert_eq!(Direction::Down.axis(), Axis::Vertical);
        assert_eq!(Direction::Left.axis(), Axis::Horizontal);
        assert_eq!(Direction::Right.axis(), Axis::Horizontal);
    }

    #[test]
    fn direction_str_roundtrip() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
    }

    #[test]
    fn cell_classification() {
        assert!(Cell::Empty.is_empty());
        assert!(!Cell::Empty.is_lit());

        assert!(Cell::Snack.is_lit());
        assert!(!Cell::Snack.is_body());

        assert!(Cell::Head.is_body());
        assert!(Cell::Link(12).is_body());
        assert!(Cell::Link(12).is_lit());
    }

    #[test]
    fn terminal_outcomes() {
        assert!(StepOutcome::Collided.is_terminal());
        assert!(StepOutcome::Won.is_terminal());
        assert!(!StepOutcome::Moved.is_terminal());
        assert!(!StepOutcome::Ate.is_terminal());
    }
}
