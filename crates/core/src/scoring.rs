//! Scoring module - score, level, and gravity-speed policy.
//!
//! Flat 100 points per cleared line. The level advances when the score
//! reaches `level * 1000`, and each level gained shaves 50ms off the drop
//! interval down to a 100ms floor.

use retris_types::{BASE_DROP_MS, DROP_FLOOR_MS, DROP_STEP_MS, LEVEL_SCORE_STEP, POINTS_PER_LINE};

/// Points awarded for clearing `lines` rows in one lock.
pub fn line_clear_score(lines: usize) -> u32 {
    lines as u32 * POINTS_PER_LINE
}

/// Score required to advance past the given (1-based) level.
pub fn level_up_threshold(level: u32) -> u32 {
    level.saturating_mul(LEVEL_SCORE_STEP)
}

/// Gravity interval in milliseconds for a (1-based) level.
pub fn drop_interval_ms(level: u32) -> u32 {
    BASE_DROP_MS
        .saturating_sub(level.saturating_sub(1).saturating_mul(DROP_STEP_MS))
        .max(DROP_FLOOR_MS)
}
