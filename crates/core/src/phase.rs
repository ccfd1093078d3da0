//! Phase module - the game-phase transition table
//!
//! | Phase | Trigger | Next |
//! |-------|---------|------|
//! | TitleScreen | Start | Playing (starts a session) |
//! | TitleScreen | ViewHighScore | HighScoreView |
//! | TitleScreen | ViewRules | RulesView |
//! | Playing | Pause | Paused |
//! | Playing | SpawnFailed | GameOver |
//! | Paused | Start | Playing |
//! | GameOver | Start | TitleScreen |
//! | HighScoreView | Start | TitleScreen |
//! | RulesView | Start | TitleScreen |
//!
//! Any other pair leaves the phase unchanged.

use crate::types::{FrameInput, GamePhase};

/// Events that can move the game between phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseTrigger {
    Start,
    ViewHighScore,
    ViewRules,
    Pause,
    SpawnFailed,
}

/// Next phase for `trigger` in `phase`, or `None` if the trigger does nothing there.
pub fn transition(phase: GamePhase, trigger: PhaseTrigger) -> Option<GamePhase> {
    use crate::types::GamePhase::*;
    use PhaseTrigger::*;

    match (phase, trigger) {
        (TitleScreen, Start) => Some(Playing),
        (TitleScreen, ViewHighScore) => Some(HighScoreView),
        (TitleScreen, ViewRules) => Some(RulesView),
        (Playing, Pause) => Some(Paused),
        (Playing, SpawnFailed) => Some(GameOver),
        (Paused, Start) => Some(Playing),
        (GameOver, Start) | (HighScoreView, Start) | (RulesView, Start) => Some(TitleScreen),
        _ => None,
    }
}

/// The menu trigger a frame's input carries outside of gameplay.
///
/// When several flags are set, start wins over the high-score view, which
/// wins over the rules view.
pub fn menu_trigger(input: &FrameInput) -> Option<PhaseTrigger> {
    if input.start {
        Some(PhaseTrigger::Start)
    } else if input.view_high_score {
        Some(PhaseTrigger::ViewHighScore)
    } else if input.view_rules {
        Some(PhaseTrigger::ViewRules)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GamePhase::*;

    const PHASES: [GamePhase; 6] = [
        TitleScreen,
        Playing,
        Paused,
        GameOver,
        HighScoreView,
        RulesView,
    ];
    const TRIGGERS: [PhaseTrigger; 5] = [
        PhaseTrigger::Start,
        PhaseTrigger::ViewHighScore,
        PhaseTrigger::ViewRules,
        PhaseTrigger::Pause,
        PhaseTrigger::SpawnFailed,
    ];

    #[test]
    fn table_matches_documented_transitions() {
        let expected = [
            (TitleScreen, PhaseTrigger::Start, Playing),
            (TitleScreen, PhaseTrigger::ViewHighScore, HighScoreView),
            (TitleScreen, PhaseTrigger::ViewRules, RulesView),
            (Playing, PhaseTrigger::Pause, Paused),
            (Playing, PhaseTrigger::SpawnFailed, GameOver),
            (Paused, PhaseTrigger::Start, Playing),
            (GameOver, PhaseTrigger::Start, TitleScreen),
            (HighScoreView, PhaseTrigger::Start, TitleScreen),
            (RulesView, PhaseTrigger::Start, TitleScreen),
        ];

        for phase in PHASES {
            for trigger in TRIGGERS {
                let want = expected
                    .iter()
                    .find(|(p, t, _)| *p == phase && *t == trigger)
                    .map(|(_, _, next)| *next);
                assert_eq!(transition(phase, trigger), want, "{phase:?} + {trigger:?}");
            }
        }
    }

    #[test]
    fn start_takes_priority_on_menus() {
        let input = FrameInput {
            start: true,
            view_high_score: true,
            view_rules: true,
            ..FrameInput::default()
        };
        assert_eq!(menu_trigger(&input), Some(PhaseTrigger::Start));

        let input = FrameInput {
            view_high_score: true,
            view_rules: true,
            ..FrameInput::default()
        };
        assert_eq!(menu_trigger(&input), Some(PhaseTrigger::ViewHighScore));

        assert_eq!(menu_trigger(&FrameInput::default()), None);
    }
}
