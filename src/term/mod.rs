//! Terminal presentation layer.
//!
//! `GameView` maps a core snapshot into a styled framebuffer; the
//! `TerminalRenderer` flushes framebuffers to the real terminal. Nothing in
//! here mutates game state.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{format_mm_ss, GameView, Viewport};
pub use renderer::TerminalRenderer;
