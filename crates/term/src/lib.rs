//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: views draw into a plain
//! framebuffer and the renderer flushes it to the terminal through
//! crossterm, rewriting only what changed between generations.
//!
//! - [`fb`]: framebuffer and style types
//! - [`life_view`]: pure mapping from a generation to a framebuffer
//! - [`renderer`]: alternate-screen setup and full/diff flushing
//! - [`frontend`]: [`Frontend`](gogol_engine::Frontend) implementation
//! - [`input`]: quit-key detection

pub mod fb;
pub mod frontend;
pub mod input;
pub mod life_view;
pub mod renderer;

pub use gogol_core as core;
pub use gogol_engine as engine;
pub use gogol_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use frontend::TermFrontend;
pub use input::{should_quit, spawn_quit_listener};
pub use life_view::{LifeView, Viewport, ALIVE_GLYPH, DEAD_GLYPH};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
