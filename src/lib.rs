//! Terminal falling-block puzzle.
//!
//! The deterministic game engine lives in [`core`]; [`input`] and [`term`]
//! are the thin collaborators that feed it key presses and draw its state.
//! The default binary wires them into a fixed-timestep loop.
//!
//! # Example
//!
//! ```
//! use tui_blockfall::core::Game;
//! use tui_blockfall::types::Command;
//!
//! let mut game = Game::new(42);
//!
//! // The frame loop feeds elapsed milliseconds...
//! game.update(16);
//!
//! // ...the input dispatcher feeds commands...
//! game.apply(Command::MoveLeft);
//! game.apply(Command::HardDrop);
//!
//! // ...and the renderer reads a snapshot each frame.
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.score, 0);
//! assert!(!snapshot.game_over);
//! ```

pub mod core;
pub mod input;
pub mod term;
pub mod types;
