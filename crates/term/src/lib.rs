//! Terminal render layer.
//!
//! A small, game-oriented rendering pipeline: the pure [`GameView`] maps
//! engine state into a [`FrameBuffer`] of styled characters, and the
//! [`TerminalRenderer`] flushes framebuffers to a raw-mode terminal with
//! diff redraws. Keeping the view pure leaves the whole drawing path
//! unit-testable without a terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use retris_core as core;
pub use retris_types as types;

pub use fb::{FrameBuffer, Glyph, GlyphStyle};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
