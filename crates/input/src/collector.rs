//! Per-frame input collection.
//!
//! Key events arriving during one tick are queued, then folded into a single
//! [`FrameInput`] snapshot handed to the engine.

use arrayvec::ArrayVec;
use crossterm::event::KeyEvent;

use crate::map::{handle_key_event, InputAction};
use crate::types::FrameInput;

/// Upper bound on actions kept for a single frame; extra presses are dropped.
pub const MAX_ACTIONS_PER_FRAME: usize = 16;

#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    pending: ArrayVec<InputAction, MAX_ACTIONS_PER_FRAME>,
    dropped: u32,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an action; returns false if the frame is already full.
    pub fn push(&mut self, action: InputAction) -> bool {
        if self.pending.try_push(action).is_err() {
            self.dropped = self.dropped.saturating_add(1);
            return false;
        }
        true
    }

    /// Translate and queue a key event; returns true if the key was bound.
    pub fn push_key(&mut self, key: KeyEvent) -> bool {
        match handle_key_event(key) {
            Some(action) => {
                self.push(action);
                true
            }
            None => false,
        }
    }

    pub fn pending(&self) -> &[InputAction] {
        &self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Presses dropped because a frame overflowed, since creation
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Fold the queued actions into one snapshot and start a new frame.
    pub fn take_frame(&mut self) -> FrameInput {
        let mut input = FrameInput::default();
        for action in self.pending.drain(..) {
            action.apply(&mut input);
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn test_frame_folds_actions() {
        let mut collector = InputCollector::new();
        assert!(collector.push_key(KeyEvent::from(KeyCode::Left)));
        assert!(collector.push_key(KeyEvent::from(KeyCode::Char('z'))));
        assert!(collector.push_key(KeyEvent::from(KeyCode::Up)));
        assert!(!collector.push_key(KeyEvent::from(KeyCode::F(5))));

        let input = collector.take_frame();
        assert!(input.move_left);
        assert!(input.rotate_cw);
        assert!(input.hard_drop);
        assert!(!input.move_right);
        assert!(collector.is_empty());
    }

    #[test]
    fn test_empty_frame() {
        let mut collector = InputCollector::new();
        assert!(collector.take_frame().is_empty());
    }

    #[test]
    fn test_repeated_press_is_one_flag() {
        let mut collector = InputCollector::new();
        collector.push(InputAction::SoftDrop);
        collector.push(InputAction::SoftDrop);
        assert_eq!(collector.pending().len(), 2);

        let input = collector.take_frame();
        assert!(input.soft_drop);
    }

    #[test]
    fn test_overflow_drops_extra_presses() {
        let mut collector = InputCollector::new();
        for _ in 0..MAX_ACTIONS_PER_FRAME {
            assert!(collector.push(InputAction::MoveRight));
        }
        assert!(!collector.push(InputAction::Pause));
        assert_eq!(collector.dropped(), 1);

        let input = collector.take_frame();
        assert!(input.move_right);
        assert!(!input.pause);
    }
}
