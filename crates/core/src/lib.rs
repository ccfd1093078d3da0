//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules of the game and the simulation engine. It has
//! no dependencies on terminals or input devices, so the same engine can be
//! driven by the terminal binary, by tests, or headless.
//!
//! # Module Structure
//!
//! - [`catalog`]: the seven tetromino shapes, four rotations each, with colors
//! - [`board`]: runtime-sized playfield with collision detection and line clearing
//! - [`piece`]: the active piece (kind, rotation, anchor)
//! - [`scoring`]: line-clear points, levels and the gravity interval
//! - [`rng`]: uniform random piece selection
//! - [`phase`]: the game-phase transition table
//! - [`game_state`]: the engine tying it all together
//! - [`snapshot`]: read-only view handed to the presentation layer
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every spawn picks one of the seven kinds with equal odds
//! - **Simple kick**: a clockwise rotation that collides retries one column
//!   left, then one column right
//! - **Frame gravity**: pieces fall one row every `frames_per_fall` updates;
//!   the interval shrinks by two ticks per level, never below one
//! - **Scoring**: 40/100/300/1200 times (level + 1), plus one point per row
//!   the player dropped the piece
//!
//! # Example
//!
//! ```
//! use blockfall_core::{ActivePiece, GameConfig, GameState};
//! use blockfall_types::{FrameInput, GamePhase, PieceKind};
//!
//! let mut game = GameState::new(GameConfig::default().with_seed(12345)).unwrap();
//! game.update(&FrameInput::start(), 0.016);
//! assert_eq!(game.phase(), GamePhase::Playing);
//!
//! game.set_active(ActivePiece::new(PieceKind::O, 3, 0));
//! let drop = FrameInput { hard_drop: true, ..FrameInput::default() };
//! game.update(&drop, 0.016);
//!
//! assert_eq!(game.board().unwrap().filled_count(), 4);
//! ```

pub mod board;
pub mod catalog;
pub mod config;
pub mod error;
pub mod game_state;
pub mod phase;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use catalog::{color_of, shape_of, tetromino, validate_catalog, TetrominoShape};
pub use config::GameConfig;
pub use error::{CatalogError, GameError};
pub use game_state::GameState;
pub use phase::{menu_trigger, transition, PhaseTrigger};
pub use piece::ActivePiece;
pub use rng::PieceRng;
pub use scoring::{calculate_line_score, LockOutcome, ScoreState};
pub use snapshot::GameSnapshot;
