//! Game state module - the simulation engine
//!
//! Owns the playfield, the active piece, score counters, the randomizer and
//! the current [`GamePhase`]. The frame loop calls [`GameState::update`] once
//! per logic tick with that frame's [`FrameInput`]; gravity counts ticks, not
//! seconds, so fall speed follows the frame rate.

use crate::board::Board;
use crate::catalog::validate_catalog;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::phase::{menu_trigger, transition, PhaseTrigger};
use crate::piece::ActivePiece;
use crate::rng::{time_seed, PieceRng};
use crate::scoring::{LockOutcome, ScoreState};
use crate::snapshot::GameSnapshot;
use crate::types::{DebugInput, FrameInput, GamePhase, PIECE_BOX};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    phase: GamePhase,
    /// Allocated on session start, released when GameOver returns to the title
    board: Option<Board>,
    active: Option<ActivePiece>,
    score: ScoreState,
    frames_until_fall: i32,
    rng: PieceRng,
    /// Monotonic session id (increments on every session start)
    session_id: u32,
    /// Pieces spawned successfully in the current session
    pieces_spawned: u32,
    /// Last lock event (consumed by observers)
    last_event: Option<LockOutcome>,
    last_frame_seconds: f32,
}

impl GameState {
    /// Create an engine sitting on the title screen.
    ///
    /// Fails if the configuration is unusable or the shape catalog is malformed.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        validate_catalog()?;

        Ok(Self {
            config,
            phase: GamePhase::TitleScreen,
            board: None,
            active: None,
            score: ScoreState::new(config.initial_frames_per_fall),
            frames_until_fall: config.initial_frames_per_fall,
            rng: PieceRng::new(config.seed.unwrap_or_default()),
            session_id: 0,
            pieces_spawned: 0,
            last_event: None,
            last_frame_seconds: 0.0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Direct access to the playfield, for staging positions in tests and tools
    pub fn board_mut(&mut self) -> Option<&mut Board> {
        self.board.as_mut()
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    /// Replace the active piece without any collision check
    pub fn set_active(&mut self, piece: ActivePiece) {
        self.active = Some(piece);
    }

    pub fn score_state(&self) -> &ScoreState {
        &self.score
    }

    pub fn score(&self) -> u32 {
        self.score.score
    }

    pub fn high_score(&self) -> u32 {
        self.score.high_score
    }

    pub fn level(&self) -> u32 {
        self.score.level
    }

    pub fn lines(&self) -> u32 {
        self.score.lines
    }

    pub fn frames_per_fall(&self) -> i32 {
        self.score.frames_per_fall
    }

    pub fn frames_until_fall(&self) -> i32 {
        self.frames_until_fall
    }

    pub fn soft_drops(&self) -> u32 {
        self.score.soft_drops
    }

    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// Seed the current session's piece sequence was drawn from
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn last_frame_seconds(&self) -> f32 {
        self.last_frame_seconds
    }

    /// Take the last lock event, leaving `None` behind
    pub fn take_last_event(&mut self) -> Option<LockOutcome> {
        self.last_event.take()
    }

    /// Advance one frame.
    ///
    /// `dt_seconds` is recorded for display only.
    pub fn update(&mut self, input: &FrameInput, dt_seconds: f32) {
        self.last_frame_seconds = dt_seconds;

        match self.phase {
            GamePhase::TitleScreen => match menu_trigger(input) {
                Some(PhaseTrigger::Start) => {
                    if let Err(err) = self.start_session() {
                        log::error!("session start failed: {err}");
                    }
                }
                Some(trigger) => {
                    self.apply_trigger(trigger);
                }
                None => {}
            },
            GamePhase::Playing => {
                self.update_playing(input);
                if input.pause && self.phase == GamePhase::Playing {
                    self.apply_trigger(PhaseTrigger::Pause);
                }
            }
            GamePhase::Paused
            | GamePhase::GameOver
            | GamePhase::HighScoreView
            | GamePhase::RulesView => {
                if input.start {
                    self.apply_trigger(PhaseTrigger::Start);
                }
            }
        }
    }

    /// Begin a new session and enter `Playing`.
    ///
    /// Resets lines, level, score and fall speed (the high score is kept),
    /// allocates an empty playfield, reseeds the randomizer and spawns the
    /// first piece. A spawn failure on the empty field is a configuration
    /// error, not a game over.
    pub fn start_session(&mut self) -> Result<(), GameError> {
        self.session_id = self.session_id.wrapping_add(1);
        self.pieces_spawned = 0;
        self.last_event = None;
        self.score.reset_for_session(self.config.initial_frames_per_fall);
        self.board = Some(Board::new(self.config.width, self.config.height));
        self.rng.reseed(self.config.seed.unwrap_or_else(time_seed));

        if let Err(blocked) = self.place_next_piece() {
            self.board = None;
            self.active = None;
            return Err(GameError::SpawnBlockedOnEmptyField { kind: blocked.kind });
        }

        log::info!(
            "session {} started ({}x{}, seed {})",
            self.session_id,
            self.config.width,
            self.config.height,
            self.rng.seed()
        );
        self.phase = GamePhase::Playing;
        Ok(())
    }

    /// Draw a random kind and place it centered on row 0.
    ///
    /// The new piece becomes active even when it collides, so the final
    /// position can be shown on the game-over screen. Returns false on
    /// collision (or when no board is allocated).
    pub fn spawn_piece(&mut self) -> bool {
        self.place_next_piece().is_ok()
    }

    fn place_next_piece(&mut self) -> Result<(), ActivePiece> {
        let kind = self.rng.next_kind();
        let x = (i32::from(self.config.width) - i32::from(PIECE_BOX)) / 2;
        let piece = ActivePiece::new(kind, x, 0);
        self.active = Some(piece);

        if self.collides(&piece) {
            log::debug!("spawn of {} blocked at ({x}, 0)", kind.as_str());
            return Err(piece);
        }

        self.frames_until_fall = self.config.initial_frames_per_fall;
        self.score.soft_drops = 0;
        self.pieces_spawned += 1;
        Ok(())
    }

    /// Release the playfield and the active piece
    pub fn shutdown(&mut self) {
        self.board = None;
        self.active = None;
    }

    /// Fill `out` with the current state, reusing its buffers
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.phase = self.phase;
        out.board.clear();
        match &self.board {
            Some(board) => {
                out.width = board.width();
                out.height = board.height();
                out.board.extend_from_slice(board.cells());
            }
            None => {
                out.width = 0;
                out.height = 0;
            }
        }
        out.active = self.active;
        out.lines = self.score.lines;
        out.level = self.score.level;
        out.score = self.score.score;
        out.high_score = self.score.high_score;
        out.frames_per_fall = self.score.frames_per_fall;
        out.frame_seconds = self.last_frame_seconds;
        out.session_id = self.session_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    fn apply_trigger(&mut self, trigger: PhaseTrigger) -> bool {
        let Some(next) = transition(self.phase, trigger) else {
            return false;
        };
        log::debug!("phase {} -> {}", self.phase.as_str(), next.as_str());

        if self.phase == GamePhase::GameOver && next == GamePhase::TitleScreen {
            self.shutdown();
        }
        self.phase = next;
        true
    }

    /// Out of bounds, overlapping, or no board at all
    fn collides(&self, piece: &ActivePiece) -> bool {
        self.board
            .as_ref()
            .map_or(true, |board| board.collides(piece))
    }

    /// Commit `piece` if it fits
    fn try_place(&mut self, piece: ActivePiece) -> bool {
        if self.collides(&piece) {
            return false;
        }
        self.active = Some(piece);
        true
    }

    fn update_playing(&mut self, input: &FrameInput) {
        if self.config.debug_controls && input.debug.any() {
            self.apply_debug(&input.debug);
        }

        if input.move_left {
            self.try_shift(-1, 0);
        }
        if input.move_right {
            self.try_shift(1, 0);
        }

        if input.rotate_cw {
            self.rotate_clockwise();
        }
        if input.rotate_ccw {
            self.rotate_counter_clockwise();
        }

        self.gravity_tick();
        if self.phase != GamePhase::Playing {
            return;
        }

        if input.soft_drop && self.try_shift(0, 1) {
            self.score.soft_drops += 1;
        }

        if input.hard_drop {
            self.hard_drop();
        }
    }

    /// Unchecked nudges for debugging; the piece may end up overlapping.
    fn apply_debug(&mut self, debug: &DebugInput) {
        let Some(piece) = self.active.as_mut() else {
            return;
        };
        if debug.change_piece {
            piece.kind = piece.kind.cycle_next();
        }
        if debug.move_left {
            piece.x -= 1;
        }
        if debug.move_right {
            piece.x += 1;
        }
        if debug.move_up {
            piece.y -= 1;
        }
        if debug.move_down {
            piece.y += 1;
        }
    }

    pub(crate) fn try_shift(&mut self, dx: i32, dy: i32) -> bool {
        match self.active {
            Some(piece) => self.try_place(piece.shifted(dx, dy)),
            None => false,
        }
    }

    /// Rotate to the previous index, kicking one column left, then one
    /// column right of the original position. Nothing changes if all three fail.
    pub(crate) fn rotate_clockwise(&mut self) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        let candidate = piece.with_rotation(piece.rotation.prev());

        self.try_place(candidate)
            || self.try_place(candidate.shifted(-1, 0))
            || self.try_place(candidate.shifted(1, 0))
    }

    /// Rotate to the next index without a collision check.
    pub(crate) fn rotate_counter_clockwise(&mut self) {
        if let Some(piece) = self.active.as_mut() {
            piece.rotation = piece.rotation.next();
        }
    }

    fn gravity_tick(&mut self) {
        self.frames_until_fall -= 1;
        if self.frames_until_fall > 0 {
            return;
        }
        self.frames_until_fall = self.score.frames_per_fall;

        let Some(piece) = self.active else {
            return;
        };
        if !self.try_place(piece.shifted(0, 1)) {
            self.lock_and_spawn(piece);
        }
    }

    /// Drop to the lowest fitting row and lock immediately.
    ///
    /// Every row travelled counts toward the drop bonus.
    fn hard_drop(&mut self) {
        let Some(mut piece) = self.active else {
            return;
        };
        while !self.collides(&piece.shifted(0, 1)) {
            piece = piece.shifted(0, 1);
            self.score.soft_drops += 1;
        }
        self.lock_and_spawn(piece);
    }

    fn lock_and_spawn(&mut self, piece: ActivePiece) {
        debug_assert!(
            self.board.is_some(),
            "lock without a playfield in phase {}",
            self.phase.as_str()
        );
        let Some(board) = self.board.as_mut() else {
            log::error!(
                "dropping lock of {piece:?}: no playfield in phase {}",
                self.phase.as_str()
            );
            return;
        };

        if board.collides(&piece) {
            // Reachable only after an unchecked rotation or debug move.
            log::warn!("locking overlapping piece {piece:?}");
            board.stamp(&piece);
        } else {
            board.lock(&piece);
        }
        let cleared = board.clear_full_rows();

        let outcome = self.score.apply_lock(cleared, self.config.fall_speed_step);
        if outcome.lines_cleared > 0 {
            log::debug!(
                "cleared {} line(s) for {} points (score {})",
                outcome.lines_cleared,
                outcome.points,
                self.score.score
            );
        }
        if outcome.level_changed {
            log::info!(
                "level {} reached, {} ticks per fall",
                self.score.level,
                self.score.frames_per_fall
            );
        }
        self.last_event = Some(outcome);

        if !self.spawn_piece() {
            log::info!(
                "game over: session {} scored {} ({} lines)",
                self.session_id,
                self.score.score,
                self.score.lines
            );
            self.apply_trigger(PhaseTrigger::SpawnFailed);
        }
    }
}
