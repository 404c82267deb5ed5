//! Scoring module - score and difficulty curve.
//!
//! Flat 100 points per cleared row, no multi-line or combo bonuses. Gravity
//! speeds up by 100ms for every 1000 points scored, floored at 100ms.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_FLOOR_MS, DROP_INTERVAL_STEP_MS, POINTS_PER_LINE,
    SPEEDUP_SCORE_STEP,
};

/// Points for clearing `rows` rows with one lock
pub fn line_clear_points(rows: usize) -> u32 {
    rows as u32 * POINTS_PER_LINE
}

/// Gravity interval for a given score, in milliseconds.
///
/// Monotonically non-increasing in score: 1000ms at score 0, minus 100ms per
/// full 1000 points, never below 100ms.
pub fn drop_interval_ms(score: u32) -> u32 {
    let steps = score / SPEEDUP_SCORE_STEP;
    BASE_DROP_MS
        .saturating_sub(steps.saturating_mul(DROP_INTERVAL_STEP_MS))
        .max(DROP_INTERVAL_FLOOR_MS)
}
