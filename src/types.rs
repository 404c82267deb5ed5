//! Shared types and constants.
//!
//! Pure data: every other module (core logic, input mapping, terminal
//! rendering) depends on this one, and nothing here depends on anything else.
//!
//! # Playfield
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 visible rows (indexed 0-19, top to bottom)
//! - Rows below 0 form the spawn buffer above the visible field. Pieces may
//!   occupy them while entering play; the grid never stores them.
//!
//! # Timing
//!
//! Values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Gravity interval at score 0 |
//! | `DROP_INTERVAL_STEP_MS` | 100 | Speed-up per 1000 points |
//! | `DROP_INTERVAL_FLOOR_MS` | 100 | Gravity interval lower bound |

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 visible rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at score 0 (1000ms = one row per second)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity interval reduction per speed-up step
pub const DROP_INTERVAL_STEP_MS: u32 = 100;

/// Lower bound for the gravity interval
pub const DROP_INTERVAL_FLOOR_MS: u32 = 100;

/// Score needed to trigger one speed-up step
pub const SPEEDUP_SCORE_STEP: u32 = 1000;

/// Points awarded per cleared row
pub const POINTS_PER_LINE: u32 = 100;

/// The seven piece variants.
///
/// Each variant names the shape of its spawn template:
/// - **LLeft**: L bending left (orange)
/// - **LRight**: L bending right (blue)
/// - **Long**: straight four-cell bar (cyan)
/// - **S1**: S-snake (green)
/// - **S2**: mirrored S-snake (red)
/// - **Square**: 2x2 block (yellow)
/// - **T**: T-junction (purple)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceVariant {
    LLeft,
    LRight,
    Long,
    S1,
    S2,
    Square,
    T,
}

impl PieceVariant {
    /// All variants, in a fixed order usable for uniform selection.
    pub const ALL: [PieceVariant; 7] = [
        PieceVariant::LLeft,
        PieceVariant::LRight,
        PieceVariant::Long,
        PieceVariant::S1,
        PieceVariant::S2,
        PieceVariant::Square,
        PieceVariant::T,
    ];

    /// Parse a variant from its snake_case tag (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall::types::PieceVariant;
    ///
    /// assert_eq!(PieceVariant::from_str("l_left"), Some(PieceVariant::LLeft));
    /// assert_eq!(PieceVariant::from_str("LONG"), Some(PieceVariant::Long));
    /// assert_eq!(PieceVariant::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "l_left" => Some(PieceVariant::LLeft),
            "l_right" => Some(PieceVariant::LRight),
            "long" => Some(PieceVariant::Long),
            "s1" => Some(PieceVariant::S1),
            "s2" => Some(PieceVariant::S2),
            "square" => Some(PieceVariant::Square),
            "t" => Some(PieceVariant::T),
            _ => None,
        }
    }

    /// The variant's snake_case tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceVariant::LLeft => "l_left",
            PieceVariant::LRight => "l_right",
            PieceVariant::Long => "long",
            PieceVariant::S1 => "s1",
            PieceVariant::S2 => "s2",
            PieceVariant::Square => "square",
            PieceVariant::T => "t",
        }
    }
}

/// Player commands accepted by the engine.
///
/// One command per physical key press; the input layer suppresses key
/// repeats. Invalid commands (moving into a wall, rotating into the stack)
/// are silently ignored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the active piece one column left
    MoveLeft,
    /// Move the active piece one column right
    MoveRight,
    /// Rotate the active piece 90° clockwise in place (no kicks)
    Rotate,
    /// Drop the active piece to its resting row and lock it immediately
    HardDrop,
}

/// A slot on the board
///
/// - `None`: empty
/// - `Some(PieceVariant)`: filled by a settled piece of that variant
pub type Cell = Option<PieceVariant>;
