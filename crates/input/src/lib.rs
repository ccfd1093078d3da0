//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`InputAction`]s and collects the presses
//! of one frame into the [`crate::types::FrameInput`] snapshot the engine
//! consumes. The engine itself never sees terminal events.

pub mod collector;
pub mod map;

pub use blockfall_types as types;

pub use collector::{InputCollector, MAX_ACTIONS_PER_FRAME};
pub use map::{handle_key_event, should_quit, InputAction};
