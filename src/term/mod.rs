//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: [`game_view`] maps engine
//! snapshots into a plain character [`fb::FrameBuffer`], and [`renderer`]
//! flushes that buffer to the terminal. Only the renderer touches I/O.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
