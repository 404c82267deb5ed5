//! Snapshot module - the read-only render surface.
//!
//! Display code consumes this bundle once per frame instead of poking at the
//! live `Game`.

use crate::core::piece::{CellPos, Piece};
use crate::types::{Cell, PieceVariant, BOARD_HEIGHT, BOARD_WIDTH};

/// A piece as the renderer sees it: variant tag plus absolute cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub variant: PieceVariant,
    pub cells: [CellPos; 4],
}

impl From<&Piece> for PieceSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            variant: piece.variant,
            cells: piece.cells,
        }
    }
}

/// Everything a frame needs from the session
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: PieceSnapshot,
    /// Landing preview of the active piece
    pub ghost: PieceSnapshot,
    /// Lookahead piece queued for the next spawn
    pub next: PieceSnapshot,
    pub score: u32,
    pub drop_interval_ms: u32,
    pub game_over: bool,
}
