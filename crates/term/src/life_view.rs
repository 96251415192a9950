//! LifeView: maps a generation into a terminal framebuffer.
//!
//! This module is pure (no I/O). Layout:
//!
//! ```text
//!   GOGOL - Iteration: 3/100  Alive: 5
//! ░░░░██░░░░
//! ░░░░░░██░░
//! ░░██████░░
//! ```
//!
//! Row 0 holds the status line, the grid starts on row 1 and every cell is
//! two columns wide to compensate for the usual glyph aspect ratio.

use crate::engine::Frame;
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::Cell;

pub const ALIVE_GLYPH: char = '█';
pub const DEAD_GLYPH: char = '░';

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

pub struct LifeView {
    cell_w: u16,
    alive: Style,
    dead: Style,
    status: Style,
    hint: Style,
}

impl Default for LifeView {
    fn default() -> Self {
        Self {
            cell_w: 2,
            alive: Style::fg(Rgb::WHITE),
            dead: Style::fg(Rgb::new(110, 110, 120)),
            status: Style::fg(Rgb::new(220, 220, 220)).bold(),
            hint: Style::fg(Rgb::new(120, 120, 120)),
        }
    }
}

impl LifeView {
    pub fn status_line(frame: &Frame<'_>) -> String {
        format!(
            "GOGOL - Iteration: {}/{}  Alive: {}",
            frame.iteration,
            frame.max_iterations,
            frame.grid.population()
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Cells that do not fit the viewport are clipped.
    pub fn render_into(&self, frame: &Frame<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);
        fb.put_str(2, 0, &Self::status_line(frame), self.status);

        let grid = frame.grid;
        let mut bottom = 1u16;
        for (y, row) in grid.rows().enumerate() {
            let Some(py) = u16::try_from(y + 1).ok().filter(|&py| py < viewport.height) else {
                break;
            };
            bottom = py + 1;
            for (x, cell) in row.iter().enumerate() {
                let Some(px) = u16::try_from(x)
                    .ok()
                    .and_then(|x| x.checked_mul(self.cell_w))
                    .filter(|&px| px < viewport.width)
                else {
                    break;
                };
                let (ch, style) = match cell {
                    Cell::Alive => (ALIVE_GLYPH, self.alive),
                    Cell::Dead => (DEAD_GLYPH, self.dead),
                };
                for dx in 0..self.cell_w {
                    fb.put(px.saturating_add(dx), py, ch, style);
                }
            }
        }

        if frame.iteration >= frame.max_iterations {
            fb.put_str(2, bottom, "done - press q to quit", self.hint);
        } else {
            fb.put_str(2, bottom, "q to quit", self.hint);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &Frame<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, viewport, &mut fb);
        fb
    }
}
