//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: a [`GameView`] draws a
//! [`core::GameSnapshot`] into a plain framebuffer for whatever phase the game
//! is in, and a [`TerminalRenderer`] flushes that framebuffer to the terminal.
//!
//! - Rendering reads snapshots only and never touches the engine
//! - Board cells are 2 columns wide to offset the terminal glyph aspect ratio

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
