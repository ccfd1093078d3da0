//! Board tests - playfield queries, locking and row clearing

use blockfall::core::{ActivePiece, Board};
use blockfall::types::{PieceKind, Rotation, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i32, kind: PieceKind) {
    for x in 0..i32::from(board.width()) {
        board.set(x, y, Some(kind));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::default();
    assert_eq!(board.width(), DEFAULT_BOARD_WIDTH);
    assert_eq!(board.height(), DEFAULT_BOARD_HEIGHT);

    for y in 0..i32::from(DEFAULT_BOARD_HEIGHT) {
        for x in 0..i32::from(DEFAULT_BOARD_WIDTH) {
            assert!(board.is_valid(x, y), "Cell ({x}, {y}) should be valid");
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::default();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(i32::from(DEFAULT_BOARD_WIDTH), 0), None);
    assert_eq!(board.get(0, i32::from(DEFAULT_BOARD_HEIGHT)), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::default();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, 20, Some(PieceKind::T)));
}

#[test]
fn test_spawn_position_never_collides_on_empty_board() {
    for (w, h) in [(4u8, 4u8), (7, 9), (10, 20), (17, 30)] {
        let board = Board::new(w, h);
        let x = (i32::from(w) - 4) / 2;
        for kind in PieceKind::ALL {
            let piece = ActivePiece::new(kind, x, 0);
            assert!(!board.collides(&piece), "{kind:?} collides on {w}x{h}");
        }
    }
}

#[test]
fn test_collision_against_walls_floor_and_blocks() {
    let mut board = Board::default();
    // O occupies box columns 1..=2, rows 0..=1
    let o = ActivePiece::new(PieceKind::O, 0, 0);

    assert!(!board.collides(&o));
    assert!(board.collides(&o.shifted(-2, 0)));
    assert!(!board.collides(&o.shifted(-1, 0)));
    assert!(board.collides(&o.shifted(8, 0)));
    assert!(board.collides(&o.shifted(0, 19)));
    assert!(board.collides(&o.shifted(0, -1)));

    board.set(2, 5, Some(PieceKind::Z));
    assert!(board.collides(&o.shifted(0, 4)));
    assert!(!board.collides(&o.shifted(0, 3)));
}

#[test]
fn test_lock_writes_kind_into_cells() {
    let mut board = Board::default();
    let piece = ActivePiece::new(PieceKind::J, 4, 10).with_rotation(Rotation::R1);
    board.lock(&piece);

    for (x, y) in piece.blocks() {
        assert_eq!(board.get(x, y), Some(Some(PieceKind::J)));
    }
    assert_eq!(board.filled_count(), 4);
}

#[test]
fn test_clear_on_empty_board_is_noop() {
    let mut board = Board::default();
    let before = board.clone();

    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_clear_lone_full_row() {
    let mut board = Board::default();
    fill_row(&mut board, 12, PieceKind::J);

    assert_eq!(board.clear_full_rows(), 1);
    assert_eq!(board, Board::default());

    // A marker on the top row drops by exactly one.
    fill_row(&mut board, 12, PieceKind::J);
    board.set(5, 0, Some(PieceKind::T));

    assert_eq!(board.clear_full_rows(), 1);
    assert_eq!(board.get(5, 1), Some(Some(PieceKind::T)));
    assert!(board.rows().next().unwrap().iter().all(|c| c.is_none()));
    for y in 13..20 {
        assert!((0..10).all(|x| !board.is_occupied(x, y)));
    }
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_clear_single_row_shifts_rows_above() {
    let mut board = Board::default();
    fill_row(&mut board, 15, PieceKind::I);
    board.set(3, 14, Some(PieceKind::T));
    board.set(7, 16, Some(PieceKind::S));

    assert_eq!(board.clear_full_rows(), 1);

    // Row above moved down one, row 0 empty, rows below untouched.
    assert_eq!(board.get(3, 15), Some(Some(PieceKind::T)));
    assert_eq!(board.get(3, 14), Some(None));
    assert_eq!(board.get(7, 16), Some(Some(PieceKind::S)));
    assert!(board.rows().next().unwrap().iter().all(|c| c.is_none()));
    assert_eq!(board.filled_count(), 2);
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut board = Board::default();
    fill_row(&mut board, 19, PieceKind::I);
    fill_row(&mut board, 17, PieceKind::L);
    board.set(0, 18, Some(PieceKind::O));
    board.set(9, 16, Some(PieceKind::Z));

    assert_eq!(board.clear_full_rows(), 2);
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::O)));
    assert_eq!(board.get(9, 18), Some(Some(PieceKind::Z)));
    assert_eq!(board.filled_count(), 2);
}

#[test]
fn test_clear_four_rows() {
    let mut board = Board::default();
    for y in 16..20 {
        fill_row(&mut board, y, PieceKind::I);
    }
    board.set(4, 15, Some(PieceKind::T));

    assert_eq!(board.clear_full_rows(), 4);
    assert_eq!(board.get(4, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_clear_is_idempotent() {
    let mut board = Board::default();
    fill_row(&mut board, 10, PieceKind::O);
    board.set(1, 9, Some(PieceKind::O));

    assert_eq!(board.clear_full_rows(), 1);
    let after_first = board.clone();
    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, after_first);
}

#[test]
fn test_top_row_full_clears() {
    let mut board = Board::new(4, 4);
    fill_row(&mut board, 0, PieceKind::S);
    assert!(board.is_row_full(0));
    assert_eq!(board.clear_full_rows(), 1);
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_is_row_full_out_of_range() {
    let board = Board::new(4, 4);
    assert!(!board.is_row_full(4));
    assert!(!board.is_row_full(0));
}
