//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the board is projected through the
//! display adapter into its 8-byte frame and drawn as an LED matrix into a
//! framebuffer, which is then flushed to the terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render from the same frame format the real display driver consumes
//! - Precise control over aspect ratio (2 chars wide per matrix dot)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_adapter as adapter;
pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{MatrixView, Viewport};
pub use renderer::TerminalRenderer;
