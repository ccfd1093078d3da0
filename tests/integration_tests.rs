//! Integration tests - full sessions driven through the public API

use blockfall::core::{ActivePiece, GameConfig, GameState};
use blockfall::input::InputCollector;
use blockfall::types::{FrameInput, GamePhase, PieceKind, Rotation};
use crossterm::event::{KeyCode, KeyEvent};

const DT: f32 = 1.0 / 60.0;

fn new_game(seed: u64) -> GameState {
    GameState::new(GameConfig::default().with_seed(seed)).unwrap()
}

fn started(seed: u64) -> GameState {
    let mut game = new_game(seed);
    game.update(&FrameInput::start(), DT);
    game
}

fn hard_drop() -> FrameInput {
    FrameInput {
        hard_drop: true,
        ..FrameInput::default()
    }
}

#[test]
fn test_hard_drop_on_empty_field_scores_nothing() {
    let mut game = started(2024);
    let spawned = game.active().unwrap();
    assert_eq!((spawned.x, spawned.y, spawned.rotation), (3, 0, Rotation::R0));

    game.update(&hard_drop(), DT);

    let board = game.board().unwrap();
    assert_eq!(board.filled_count(), 4);
    // Landed piece touches the floor.
    let lowest = (0..10).filter_map(|x| {
        (0..20).rev().find(|&y| board.is_occupied(x, y))
    });
    assert_eq!(lowest.max(), Some(19));
    assert_eq!(game.lines(), 0);
    assert_eq!(game.score(), 0);
    assert_eq!(game.phase(), GamePhase::Playing);
}

#[test]
fn test_full_session_until_game_over() {
    let mut game = started(99);
    let mut frames = 0;
    while game.phase() == GamePhase::Playing {
        game.update(&hard_drop(), DT);
        frames += 1;
        assert!(frames < 500, "stacking should end the game");
    }

    assert_eq!(game.phase(), GamePhase::GameOver);
    assert!(game.board().is_some());

    // Back to the title, board released, high score kept.
    let best = game.high_score();
    game.update(&FrameInput::start(), DT);
    assert_eq!(game.phase(), GamePhase::TitleScreen);
    assert!(game.board().is_none());
    assert_eq!(game.high_score(), best);

    game.update(&FrameInput::start(), DT);
    assert_eq!(game.phase(), GamePhase::Playing);
    assert_eq!(game.board().unwrap().filled_count(), 0);
}

#[test]
fn test_blocked_spawn_area_ends_game() {
    let mut game = started(5);
    {
        let board = game.board_mut().unwrap();
        for x in 3..7 {
            board.set(x, 0, Some(PieceKind::T));
            board.set(x, 1, Some(PieceKind::T));
        }
    }
    game.set_active(ActivePiece::new(PieceKind::I, 3, 10));

    game.update(&hard_drop(), DT);
    assert_eq!(game.phase(), GamePhase::GameOver);
}

#[test]
fn test_tetris_scores_1200_plus_drop_bonus() {
    let mut game = started(8);
    {
        let board = game.board_mut().unwrap();
        for y in 16..20 {
            for x in 0..10 {
                if x != 9 {
                    board.set(x, y, Some(PieceKind::L));
                }
            }
        }
    }
    // Vertical I (R1 uses box column 2) over column 9.
    game.set_active(ActivePiece::new(PieceKind::I, 7, 0).with_rotation(Rotation::R1));

    game.update(&hard_drop(), DT);
    assert_eq!(game.lines(), 4);
    // Anchor travels from row 0 to row 16.
    assert_eq!(game.score(), 1200 + 16);
    assert_eq!(game.board().unwrap().filled_count(), 0);
}

#[test]
fn test_sessions_with_same_seed_replay() {
    let play = |seed| {
        let mut game = started(seed);
        let mut kinds = Vec::new();
        for _ in 0..20 {
            kinds.push(game.active().unwrap().kind);
            game.update(&hard_drop(), DT);
            if game.phase() != GamePhase::Playing {
                break;
            }
        }
        kinds
    };
    assert_eq!(play(31337), play(31337));
}

#[test]
fn test_key_events_drive_the_engine() {
    let mut game = new_game(17);
    let mut keys = InputCollector::new();

    keys.push_key(KeyEvent::from(KeyCode::Char(' ')));
    game.update(&keys.take_frame(), DT);
    assert_eq!(game.phase(), GamePhase::Playing);

    game.set_active(ActivePiece::new(PieceKind::T, 3, 4));
    keys.push_key(KeyEvent::from(KeyCode::Left));
    keys.push_key(KeyEvent::from(KeyCode::Char('z')));
    game.update(&keys.take_frame(), DT);
    let piece = game.active().unwrap();
    assert_eq!((piece.x, piece.rotation), (2, Rotation::R3));

    keys.push_key(KeyEvent::from(KeyCode::Char('p')));
    game.update(&keys.take_frame(), DT);
    assert_eq!(game.phase(), GamePhase::Paused);

    keys.push_key(KeyEvent::from(KeyCode::Char(' ')));
    game.update(&keys.take_frame(), DT);
    assert_eq!(game.phase(), GamePhase::Playing);
}

#[test]
fn test_gravity_speeds_up_with_level() {
    let mut game = started(3);
    assert_eq!(game.frames_per_fall(), 48);

    // Clear ten single lines, one at a time.
    for _ in 0..10 {
        {
            let board = game.board_mut().unwrap();
            board.clear();
            for x in 0..10 {
                if !(3..7).contains(&x) {
                    board.set(x, 19, Some(PieceKind::S));
                }
            }
        }
        game.set_active(ActivePiece::new(PieceKind::I, 3, 18));
        game.update(&hard_drop(), DT);
    }

    assert_eq!(game.lines(), 10);
    assert_eq!(game.level(), 1);
    assert_eq!(game.frames_per_fall(), 46);
    assert_eq!(game.score(), 400);
}

#[test]
fn test_snapshot_tracks_phase_changes() {
    let mut game = new_game(1);
    assert_eq!(game.snapshot().phase, GamePhase::TitleScreen);
    assert!(!game.snapshot().has_board());

    game.update(
        &FrameInput {
            view_rules: true,
            ..FrameInput::default()
        },
        DT,
    );
    assert_eq!(game.snapshot().phase, GamePhase::RulesView);

    game.update(&FrameInput::start(), DT);
    game.update(&FrameInput::start(), DT);
    let snap = game.snapshot();
    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(snap.board.len(), 200);
    assert!((snap.frame_seconds - DT).abs() < f32::EPSILON);
}
