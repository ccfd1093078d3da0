//! Scoring module - line-clear points, levels and fall speed
//!
//! Classic rules: clearing N lines awards `LINE_SCORES[N] * (level + 1)`
//! where `level` is the level *before* the clear is counted, plus one bonus
//! point per row the player soft/hard dropped the locking piece. Every ten
//! lines raise the level, and each level change shortens the gravity
//! interval by a fixed step, never below one tick.

use crate::types::{LINES_PER_LEVEL, LINE_SCORES, MIN_FRAMES_PER_FALL};

/// Base points for a clear of `lines` rows (0 outside 1..=4)
pub fn line_clear_base(lines: u32) -> u32 {
    LINE_SCORES.get(lines as usize).copied().unwrap_or(0)
}

/// Points for clearing `lines` rows at `level`
pub fn calculate_line_score(lines: u32, level: u32) -> u32 {
    line_clear_base(lines).saturating_mul(level + 1)
}

/// Level for a cumulative line count
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL
}

/// Gravity interval after one level change
pub fn next_frames_per_fall(current: i32, step: i32) -> i32 {
    current.saturating_sub(step).max(MIN_FRAMES_PER_FALL)
}

/// Result of locking one piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockOutcome {
    pub lines_cleared: u32,
    /// Points added to the score (0 when no line was cleared)
    pub points: u32,
    pub level_changed: bool,
    pub new_high_score: bool,
}

/// Counters for the current session plus the in-memory high score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreState {
    pub lines: u32,
    pub level: u32,
    pub score: u32,
    /// Best score since the engine was created. Survives session restarts.
    pub high_score: u32,
    /// Current gravity interval in ticks
    pub frames_per_fall: i32,
    /// Rows the active piece was dropped by the player; reset on spawn
    pub soft_drops: u32,
}

impl ScoreState {
    pub fn new(initial_frames_per_fall: i32) -> Self {
        Self {
            lines: 0,
            level: 0,
            score: 0,
            high_score: 0,
            frames_per_fall: initial_frames_per_fall,
            soft_drops: 0,
        }
    }

    /// Zero the session counters, keeping the high score
    pub fn reset_for_session(&mut self, initial_frames_per_fall: i32) {
        *self = Self {
            high_score: self.high_score,
            ..Self::new(initial_frames_per_fall)
        };
    }

    /// Account for a lock that cleared `lines_this_step` rows.
    pub fn apply_lock(&mut self, lines_this_step: u32, fall_speed_step: i32) -> LockOutcome {
        let previous_level = calculate_level(self.lines);
        self.lines += lines_this_step;
        self.level = calculate_level(self.lines);

        let level_changed = self.level != previous_level;
        if level_changed {
            self.frames_per_fall = next_frames_per_fall(self.frames_per_fall, fall_speed_step);
        }

        let mut outcome = LockOutcome {
            lines_cleared: lines_this_step,
            level_changed,
            ..LockOutcome::default()
        };

        if lines_this_step > 0 {
            let points =
                calculate_line_score(lines_this_step, previous_level).saturating_add(self.soft_drops);
            self.score = self.score.saturating_add(points);
            outcome.points = points;
            if self.score > self.high_score {
                self.high_score = self.score;
                outcome.new_high_score = true;
            }
        }

        outcome
    }
}
