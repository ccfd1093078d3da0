//! Engine configuration.

use crate::error::GameError;
use crate::types::{
    DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, FALL_SPEED_STEP, INITIAL_FRAMES_PER_FALL,
    MIN_FRAMES_PER_FALL, PIECE_BOX,
};

/// Settings fixed for the lifetime of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Playfield width in cells
    pub width: u8,
    /// Playfield height in cells
    pub height: u8,
    /// Gravity interval (ticks) at level 0 and right after each spawn
    pub initial_frames_per_fall: i32,
    /// Ticks removed from the gravity interval on a level change
    pub fall_speed_step: i32,
    /// Fixed randomizer seed. `None` reseeds from the clock on every session start.
    pub seed: Option<u64>,
    /// Honour [`DebugInput`](crate::types::DebugInput) flags
    pub debug_controls: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            initial_frames_per_fall: INITIAL_FRAMES_PER_FALL,
            fall_speed_step: FALL_SPEED_STEP,
            seed: None,
            debug_controls: cfg!(debug_assertions),
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_size(mut self, width: u8, height: u8) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Every piece must fit at the spawn anchor, so the field needs at least
    /// one full piece box in each direction.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.width < PIECE_BOX || self.height < PIECE_BOX {
            return Err(GameError::FieldTooSmall {
                width: self.width,
                height: self.height,
                min_width: PIECE_BOX,
                min_height: PIECE_BOX,
            });
        }
        if self.initial_frames_per_fall < MIN_FRAMES_PER_FALL {
            return Err(GameError::InvalidFallInterval(self.initial_frames_per_fall));
        }
        if self.fall_speed_step < 0 {
            return Err(GameError::InvalidFallSpeedStep(self.fall_speed_step));
        }
        Ok(())
    }
}
