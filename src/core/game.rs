//! Game module - the session state machine.
//!
//! Ties board, pieces, RNG, and scoring together: accumulates frame time
//! into a gravity timer, advances or settles the active piece, and exposes
//! the player commands plus the read-only render surface.

use crate::core::board::Board;
use crate::core::piece::Piece;
use crate::core::rng::PieceRng;
use crate::core::scoring::{drop_interval_ms, line_clear_points};
use crate::core::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{Command, BASE_DROP_MS, BOARD_HEIGHT, BOARD_WIDTH};

/// A round of play.
///
/// Exactly one active piece exists at a time; the lookahead piece is queued
/// for the next spawn and does not interact with the grid until promoted.
/// Once `game_over` flips true the session is frozen: `update` and every
/// command become no-ops, and a fresh session means a fresh `Game`.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Piece,
    next: Piece,
    rng: PieceRng,
    score: u32,
    drop_timer_ms: u32,
    drop_interval_ms: u32,
    game_over: bool,
}

impl Game {
    /// Create a new session with the given RNG seed.
    ///
    /// The lookahead piece is drawn before the active piece, so a seed pins
    /// the full variant sequence across construction and later spawns.
    pub fn new(seed: u32) -> Self {
        let mut rng = PieceRng::new(seed);
        let next = Piece::spawn(rng.draw());
        let active = Piece::spawn(rng.draw());

        Self {
            board: Board::new(),
            active,
            next,
            rng,
            score: 0,
            drop_timer_ms: 0,
            drop_interval_ms: BASE_DROP_MS,
            game_over: false,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Current gravity interval in milliseconds (derived from score)
    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    /// The lookahead piece queued for the next spawn
    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    /// Where the active piece would land if dropped now (pure; the live
    /// piece is untouched)
    pub fn ghost(&self) -> Piece {
        self.active.ghost(&self.board)
    }

    /// Current piece RNG state (reproduces the remaining variant sequence)
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Advance the session by `elapsed_ms` of frame time.
    ///
    /// Fires at most one gravity step per call once the accumulated time
    /// crosses the drop interval: either the active piece falls one row or,
    /// if it rests on something, it settles. Returns whether a step fired.
    pub fn update(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over {
            return false;
        }

        self.drop_timer_ms += elapsed_ms;
        if self.drop_timer_ms < self.drop_interval_ms {
            return false;
        }
        self.drop_timer_ms = 0;

        if self.active.can_move_down(&self.board) {
            self.active.move_down();
        } else {
            self.settle();
        }
        true
    }

    /// Apply a player command.
    ///
    /// Invalid commands (moving into a wall, rotating into the stack) are
    /// no-ops, not errors. Returns whether the command changed anything.
    pub fn apply(&mut self, command: Command) -> bool {
        if self.game_over {
            return false;
        }

        match command {
            Command::MoveLeft => {
                if self.active.can_move_left(&self.board) {
                    self.active.move_left();
                    true
                } else {
                    false
                }
            }
            Command::MoveRight => {
                if self.active.can_move_right(&self.board) {
                    self.active.move_right();
                    true
                } else {
                    false
                }
            }
            Command::Rotate => self.active.rotate(&self.board),
            Command::HardDrop => {
                self.hard_drop();
                true
            }
        }
    }

    /// Drop the active piece to its resting row and settle immediately,
    /// skipping the remaining gravity ticks
    fn hard_drop(&mut self) {
        while self.active.can_move_down(&self.board) {
            self.active.move_down();
        }
        self.settle();
    }

    /// Lock the active piece, clear lines, rescore, and spawn the lookahead.
    ///
    /// Exactly one settle happens per landed piece, whether the landing came
    /// from a gravity tick or a hard drop.
    fn settle(&mut self) {
        self.board.fill_cells(&self.active.cells, self.active.variant);

        let cleared = self.board.clear_full_rows().len();
        self.score += line_clear_points(cleared);
        self.drop_interval_ms = drop_interval_ms(self.score);

        self.active = std::mem::replace(&mut self.next, Piece::spawn(self.rng.draw()));
        if !self.active.can_spawn(&self.board) {
            self.game_over = true;
        }
    }

    /// Bundle the full render surface into one read-only snapshot
    pub fn snapshot(&self) -> GameSnapshot {
        let mut board = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.board.write_grid(&mut board);

        GameSnapshot {
            board,
            active: PieceSnapshot::from(&self.active),
            ghost: PieceSnapshot::from(&self.ghost()),
            next: PieceSnapshot::from(&self.next),
            score: self.score,
            drop_interval_ms: self.drop_interval_ms,
            game_over: self.game_over,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}
