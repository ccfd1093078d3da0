//! Key mapping from terminal events to input actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::FrameInput;

/// One key press, already translated to what it means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    Start,
    MoveLeft,
    MoveRight,
    RotateCw,
    RotateCcw,
    SoftDrop,
    HardDrop,
    Pause,
    ViewHighScore,
    ViewRules,
    DebugChangePiece,
    DebugMoveLeft,
    DebugMoveRight,
    DebugMoveUp,
    DebugMoveDown,
}

impl InputAction {
    /// Raise the matching flag on `input`
    pub fn apply(self, input: &mut FrameInput) {
        match self {
            InputAction::Start => input.start = true,
            InputAction::MoveLeft => input.move_left = true,
            InputAction::MoveRight => input.move_right = true,
            InputAction::RotateCw => input.rotate_cw = true,
            InputAction::RotateCcw => input.rotate_ccw = true,
            InputAction::SoftDrop => input.soft_drop = true,
            InputAction::HardDrop => input.hard_drop = true,
            InputAction::Pause => input.pause = true,
            InputAction::ViewHighScore => input.view_high_score = true,
            InputAction::ViewRules => input.view_rules = true,
            InputAction::DebugChangePiece => input.debug.change_piece = true,
            InputAction::DebugMoveLeft => input.debug.move_left = true,
            InputAction::DebugMoveRight => input.debug.move_right = true,
            InputAction::DebugMoveUp => input.debug.move_up = true,
            InputAction::DebugMoveDown => input.debug.move_down = true,
        }
    }
}

/// Map keyboard input to an action.
///
/// Presses and auto-repeats count; releases (only reported by terminals with
/// keyboard enhancement) are ignored.
pub fn handle_key_event(key: KeyEvent) -> Option<InputAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char(' ') => Some(InputAction::Start),

        // Movement
        KeyCode::Left => Some(InputAction::MoveLeft),
        KeyCode::Right => Some(InputAction::MoveRight),
        KeyCode::Down => Some(InputAction::SoftDrop),
        KeyCode::Up => Some(InputAction::HardDrop),

        // Rotation
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(InputAction::RotateCw),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(InputAction::RotateCcw),

        // Menus
        KeyCode::Char('p') | KeyCode::Char('P') => Some(InputAction::Pause),
        KeyCode::Char('h') | KeyCode::Char('H') => Some(InputAction::ViewHighScore),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputAction::ViewRules),

        // Debug
        KeyCode::Char('t') | KeyCode::Char('T') => Some(InputAction::DebugChangePiece),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(InputAction::DebugMoveLeft),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(InputAction::DebugMoveRight),
        KeyCode::Char('w') | KeyCode::Char('W') => Some(InputAction::DebugMoveUp),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(InputAction::DebugMoveDown),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
