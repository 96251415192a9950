//! Terminal frontend for the tick driver.

use anyhow::Result;
use crossterm::terminal;

use crate::engine::{Frame, Frontend};
use crate::fb::FrameBuffer;
use crate::life_view::{LifeView, Viewport};
use crate::renderer::TerminalRenderer;

/// Draws each generation to the terminal.
///
/// Call [`TermFrontend::exit`] when done, even if the run failed.
pub struct TermFrontend {
    renderer: TerminalRenderer,
    view: LifeView,
    fb: FrameBuffer,
}

impl TermFrontend {
    pub fn enter() -> Result<Self> {
        let mut renderer = TerminalRenderer::new();
        renderer.enter()?;
        Ok(Self {
            renderer,
            view: LifeView::default(),
            fb: FrameBuffer::new(0, 0),
        })
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl Frontend for TermFrontend {
    fn present(&mut self, frame: &Frame<'_>) -> Result<()> {
        let (w, h) = terminal::size().unwrap_or((80, 24));
        self.view.render_into(frame, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw(&self.fb)
    }
}
