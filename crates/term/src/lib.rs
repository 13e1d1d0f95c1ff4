//! Terminal render sink.
//!
//! Draws the per-frame cell list produced by `povtris-core` into a character
//! framebuffer, then flushes only the changed glyphs through crossterm.
//!
//! - [`fb`]: the framebuffer
//! - [`board_view`]: cell list to framebuffer, with transitions applied
//! - [`renderer`]: framebuffer to terminal

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use povtris_core as core;
pub use povtris_types as types;

pub use board_view::{BoardView, Hud, Viewport};
pub use fb::{FrameBuffer, Glyph, Style};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
