//! Core module - pure, deterministic game logic.
//!
//! Everything in here is free of I/O: the engine is driven entirely by
//! `Game::update` calls from a frame loop and `Game::apply` calls from an
//! input dispatcher, and read back through accessors or [`GameSnapshot`].
//! Same seed, same calls, same game.
//!
//! # Module structure
//!
//! - [`board`]: fixed 20x10 grid with collision queries and line clearing
//! - [`piece`]: piece geometry - movement, centroid rotation, spawn checks
//! - [`rng`]: seeded LCG and the uniform piece source
//! - [`scoring`]: score and gravity-speed rules
//! - [`game`]: the session state machine tying it all together
//! - [`snapshot`]: read-only render-state bundle

pub mod board;
pub mod game;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use game::Game;
pub use piece::{CellPos, Piece};
pub use rng::{PieceRng, SimpleRng};
pub use scoring::{drop_interval_ms, line_clear_points};
pub use snapshot::{GameSnapshot, PieceSnapshot};
