//! Terminal rendering module
//!
//! The playfield is rasterised into a small pixel canvas and shown with
//! half-block characters; HUD and messages are printed as text on top.

pub mod canvas;
pub mod scene;
pub mod terminal;

pub use canvas::{Canvas, Rgb};
pub use scene::{TextLine, draw_playfield, hud_lines, overlay_lines};
pub use terminal::TerminalRenderer;
