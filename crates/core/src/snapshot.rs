//! Read-only view of the engine for the presentation layer.

use crate::piece::ActivePiece;
use crate::types::{Cell, GamePhase};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    /// Playfield width; 0 when no session is allocated
    pub width: u8,
    /// Playfield height; 0 when no session is allocated
    pub height: u8,
    /// Row-major cells, `width * height` long
    pub board: Vec<Cell>,
    pub active: Option<ActivePiece>,
    pub lines: u32,
    pub level: u32,
    pub score: u32,
    pub high_score: u32,
    pub frames_per_fall: i32,
    /// Duration of the last frame, for the FPS readout
    pub frame_seconds: f32,
    pub session_id: u32,
}

impl GameSnapshot {
    /// Cell at (x, y); `None` when out of bounds or no board is allocated
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        self.board
            .get(y as usize * usize::from(self.width) + x as usize)
            .copied()
    }

    pub fn has_board(&self) -> bool {
        !self.board.is_empty()
    }

    /// Frames per second derived from the last frame time
    pub fn fps(&self) -> Option<f32> {
        (self.frame_seconds > 0.0).then(|| 1.0 / self.frame_seconds)
    }
}
