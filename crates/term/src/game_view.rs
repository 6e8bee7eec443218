//! MatrixView: maps the game into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The board is drawn *from the adapter frame*, not from the board cells:
//! the real display is a single-color LED matrix, so the terminal view gets
//! exactly the same lit-vs-dark information the hardware would. Score and
//! game status go into a one-line caption under the matrix, which is the one
//! thing the terminal can show that the matrix could not.

use crate::adapter::{encode_frame, Frame};
use crate::core::Game;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, GRID_DIM};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the LED matrix.
pub struct MatrixView {
    /// Matrix dot width in terminal columns.
    dot_w: u16,
    /// Matrix dot height in terminal rows.
    dot_h: u16,
}

impl Default for MatrixView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { dot_w: 2, dot_h: 1 }
    }
}

impl MatrixView {
    pub fn new(dot_w: u16, dot_h: u16) -> Self {
        Self { dot_w, dot_h }
    }

    /// Render the current game into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, game: &Game, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_glyph(' '));

        let frame = encode_frame(game.board());

        let matrix_w = (GRID_DIM as u16) * self.dot_w;
        let matrix_h = (GRID_DIM as u16) * self.dot_h;
        let frame_w = matrix_w + 2;
        let frame_h = matrix_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 1) / 2;

        let off = CellStyle {
            fg: Rgb::new(60, 45, 30),
            bg: Rgb::new(16, 12, 8),
            bold: false,
            dim: true,
        };
        // Classic amber LED.
        let on = CellStyle {
            fg: Rgb::new(255, 176, 0),
            bg: Rgb::new(16, 12, 8),
            bold: true,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(160, 160, 160),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);
        self.draw_matrix(fb, start_x + 1, start_y + 1, &frame, on, off);
        self.draw_caption(fb, game, start_x, start_y + frame_h, frame_w);
    }

    fn draw_matrix(
        &self,
        fb: &mut FrameBuffer,
        x0: u16,
        y0: u16,
        frame: &Frame,
        on: CellStyle,
        off: CellStyle,
    ) {
        for row in 0..GRID_DIM as u16 {
            for col in 0..GRID_DIM as u16 {
                let bit = (frame[row as usize] >> (GRID_DIM as u16 - 1 - col)) & 1;
                let (ch, style) = if bit != 0 { ('\u{2588}', on) } else { ('\u{00b7}', off) };

                let px = x0 + col * self.dot_w;
                let py = y0 + row * self.dot_h;
                for dy in 0..self.dot_h {
                    for dx in 0..self.dot_w {
                        // Only the first column of a wide dot gets the grid
                        // dot glyph; the rest stay blank filler.
                        let c = if bit != 0 || dx == 0 { ch } else { ' ' };
                        fb.put_char(px + dx, py + dy, c, style);
                    }
                }
            }
        }
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: CellStyle,
    ) {
        if w < 2 || h < 2 {
            return;
        }
        fb.put_char(x, y, '\u{250c}', style);
        fb.put_char(x + w - 1, y, '\u{2510}', style);
        fb.put_char(x, y + h - 1, '\u{2514}', style);
        fb.put_char(x + w - 1, y + h - 1, '\u{2518}', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '\u{2500}', style);
            fb.put_char(x + dx, y + h - 1, '\u{2500}', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '\u{2502}', style);
            fb.put_char(x + w - 1, y + dy, '\u{2502}', style);
        }
    }

    fn draw_caption(&self, fb: &mut FrameBuffer, game: &Game, x: u16, y: u16, w: u16) {
        let style = CellStyle::default();
        match game.status() {
            GameStatus::Running => {
                // Score fits in the caption width by construction (<= 63).
                let mut buf = [0u8; 16];
                let text = format_score(game.score(), &mut buf);
                let cx = x + w.saturating_sub(text.len() as u16) / 2;
                fb.put_str(cx, y, text, style);
            }
            GameStatus::Collided => {
                let text = "game over";
                let cx = x + w.saturating_sub(text.len() as u16) / 2;
                fb.put_str(cx, y, text, style);
            }
            GameStatus::Won => {
                let text = "you win";
                let cx = x + w.saturating_sub(text.len() as u16) / 2;
                fb.put_str(cx, y, text, style);
            }
        }
    }
}

/// Format "score NN" without allocating.
fn format_score(score: u32, buf: &mut [u8; 16]) -> &str {
    let prefix = b"score ";
    buf[..prefix.len()].copy_from_slice(prefix);
    let mut len = prefix.len();

    if score >= 10 {
        buf[len] = b'0' + (score / 10 % 10) as u8;
        len += 1;
    }
    buf[len] = b'0' + (score % 10) as u8;
    len += 1;

    // Only ASCII was written above.
    std::str::from_utf8(&buf[..len]).unwrap_or("score ?")
}
