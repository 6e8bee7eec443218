//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management. It has
//! **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical snack sequences
//! - **Testable**: Unit tests for every movement and collision rule
//! - **Portable**: Runs in any environment (terminal, headless, embedded)
//! - **Allocation-free**: The board doubles as the snake's body storage
//!
//! # Module Structure
//!
//! - [`board`]: 8x8 grid with the in-place linked-cell snake encoding and
//!   the snack placement scan
//! - [`game`]: The engine - one directional move per tick, collision
//!   detection, growth, terminal states
//! - [`rng`]: Simple LCG for deterministic snack placement
//!
//! # Example
//!
//! ```
//! use tui_snake_core::Game;
//! use tui_snake_types::Direction;
//!
//! let mut game = Game::new(12345);
//! game.start();
//!
//! // The snake spawns at (row 1, col 1) travelling left.
//! let outcome = game.step(Direction::Down);
//! assert!(!outcome.is_terminal());
//! assert_eq!(game.score(), game.snake().length as u32 - 1);
//! ```

pub mod board;
pub mod game;
pub mod rng;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game::{Game, Snake};
pub use rng::SimpleRng;
