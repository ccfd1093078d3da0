//! Error types for the simulation core.
//!
//! A piece that cannot spawn during play is not an error; it moves the game
//! to [`GamePhase::GameOver`](crate::types::GamePhase::GameOver). The errors
//! here cover broken configuration and broken static data only.

use thiserror::Error;

use crate::types::{PieceKind, Rotation};

/// Problems found while validating the tetromino catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog entry for {kind:?} sits in slot {slot}")]
    Misplaced { kind: PieceKind, slot: usize },
    #[error("shape {kind:?}/{rotation:?} is malformed: {reason}")]
    MalformedShape {
        kind: PieceKind,
        rotation: Rotation,
        reason: &'static str,
    },
}

/// Errors returned by engine construction and session start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("playfield {width}x{height} is too small (minimum {min_width}x{min_height})")]
    FieldTooSmall {
        width: u8,
        height: u8,
        min_width: u8,
        min_height: u8,
    },
    #[error("initial fall interval must be at least 1 tick, got {0}")]
    InvalidFallInterval(i32),
    #[error("fall speed step must not be negative, got {0}")]
    InvalidFallSpeedStep(i32),
    #[error("first piece {kind:?} collides at its spawn position on an empty field")]
    SpawnBlockedOnEmptyField { kind: PieceKind },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
