//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Direction`] and provides a
//! [`DirectionReader`] with the same contract the original analog joystick
//! reader had: given the current travel direction, yield a new direction or
//! repeat the current one.

pub mod map;
pub mod reader;

pub use tui_snake_types as types;

pub use map::{handle_key_event, is_restart, should_quit};
pub use reader::DirectionReader;
