//! Core types module - shared data structures and constants
//!
//! This crate defines the plain data exchanged between the simulation core,
//! the input source and the presentation layer. Everything here is `Copy`
//! data with no external dependencies.
//!
//! # Playfield Dimensions
//!
//! - **Width**: 10 columns by default (indexed 0-9, left to right)
//! - **Height**: 20 rows by default (indexed 0-19, top to bottom)
//! - **Spawn position**: `((width - 4) / 2, 0)`, i.e. (3, 0) on the default field
//!
//! # Gravity Timing
//!
//! Gravity is counted in logic ticks (one tick per engine update), not in
//! milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_FRAMES_PER_FALL` | 48 | Ticks between gravity steps at level 0 |
//! | `FALL_SPEED_STEP` | 2 | Ticks removed from the fall interval per level |
//! | `MIN_FRAMES_PER_FALL` | 1 | Floor for the fall interval |
//! | `LINES_PER_LEVEL` | 10 | Cleared lines needed to advance one level |
//! | `TICK_MS` | 16 | Frame period used by the terminal runner (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, Rotation, GamePhase, DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT};
//!
//! assert_eq!(PieceKind::from_index(5), Some(PieceKind::T));
//! assert_eq!(PieceKind::Z.cycle_next(), PieceKind::I);
//!
//! // The clockwise control walks the rotation table backwards.
//! assert_eq!(Rotation::R0.prev(), Rotation::R3);
//! assert_eq!(Rotation::R3.next(), Rotation::R0);
//!
//! assert_eq!(GamePhase::default(), GamePhase::TitleScreen);
//! assert_eq!(DEFAULT_BOARD_WIDTH, 10);
//! assert_eq!(DEFAULT_BOARD_HEIGHT, 20);
//! ```

/// Default playfield width in cells (10 columns)
pub const DEFAULT_BOARD_WIDTH: u8 = 10;

/// Default playfield height in cells (20 rows)
pub const DEFAULT_BOARD_HEIGHT: u8 = 20;

/// Side length of the box every tetromino shape fits in
pub const PIECE_BOX: u8 = 4;

/// Number of blocks in a tetromino
pub const BLOCKS_PER_PIECE: usize = 4;

/// Number of rotation states per tetromino
pub const ROTATION_COUNT: u8 = 4;

/// Fixed frame period used by the terminal runner (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 0, in logic ticks
pub const INITIAL_FRAMES_PER_FALL: i32 = 48;

/// Ticks removed from the gravity interval on each level change
pub const FALL_SPEED_STEP: i32 = 2;

/// The gravity interval never drops below one tick
pub const MIN_FRAMES_PER_FALL: i32 = 1;

/// Lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Base points for clearing N lines (index = line count), multiplied by `level + 1`
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// The seven tetromino piece kinds, in catalog order.
///
/// The discriminant doubles as the catalog index and as the identifier
/// written into locked playfield cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Number of piece kinds.
    pub const COUNT: usize = 7;

    /// Catalog index (0..7).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a kind by catalog index.
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_index(0), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_index(6), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_index(7), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The next kind in catalog order, wrapping from Z back to I.
    pub fn cycle_next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Rotation index of a piece (0..4).
///
/// `R0` is the spawn orientation. The catalog stores the four states in
/// order; the clockwise control moves to [`Rotation::prev`] and the
/// counter-clockwise control to [`Rotation::next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    R0,
    R1,
    R2,
    R3,
}

impl Rotation {
    /// All rotations in table order.
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R1, Rotation::R2, Rotation::R3];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Rotation for an arbitrary index, taken modulo 4.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % ROTATION_COUNT as usize]
    }

    /// `(index - 1 + 4) mod 4`
    pub fn prev(self) -> Self {
        Self::from_index(self.index() + ROTATION_COUNT as usize - 1)
    }

    /// `(index + 1) mod 4`
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

/// Top-level game phase. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    TitleScreen,
    Playing,
    Paused,
    GameOver,
    HighScoreView,
    RulesView,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::TitleScreen => "title",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "game_over",
            GamePhase::HighScoreView => "high_score",
            GamePhase::RulesView => "rules",
        }
    }

    /// Whether the playfield is visible in this phase.
    pub fn shows_playfield(&self) -> bool {
        matches!(
            self,
            GamePhase::Playing | GamePhase::Paused | GamePhase::GameOver
        )
    }
}

/// Debug-only controls. Ignored by the engine unless debug controls are
/// enabled in its configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DebugInput {
    /// Cycle the active piece to the next kind in catalog order.
    pub change_piece: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub move_up: bool,
    pub move_down: bool,
}

impl DebugInput {
    pub fn any(&self) -> bool {
        self.change_piece || self.move_left || self.move_right || self.move_up || self.move_down
    }
}

/// Immutable per-frame input snapshot.
///
/// Flags are independent: any combination may be set in one frame and the
/// engine applies them in a fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    pub start: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub rotate_cw: bool,
    pub rotate_ccw: bool,
    pub soft_drop: bool,
    pub hard_drop: bool,
    pub pause: bool,
    pub view_high_score: bool,
    pub view_rules: bool,
    pub debug: DebugInput,
}

impl FrameInput {
    /// An input with only `start` set.
    pub fn start() -> Self {
        Self {
            start: true,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A cell on the playfield
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell holding a locked block of that kind
pub type Cell = Option<PieceKind>;
