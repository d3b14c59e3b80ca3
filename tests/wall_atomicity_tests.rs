//! Every failing `place_wall` call must leave the state untouched — no
//! spent balance, no half-placed segment. Each test snapshots the state,
//! provokes one failure branch, and compares against the snapshot.

use quoridor_rs::{Direction, GameConfig, GameError, GameState, Position};

fn assert_rejected_without_mutation(
    state: &mut GameState,
    player: usize,
    cell: Position,
    edge: Direction,
    extends: Direction,
    expected: GameError,
) {
    let snapshot = state.clone();
    assert_eq!(state.place_wall(player, cell, edge, extends), Err(expected));
    assert_eq!(*state, snapshot, "rejected placement must not mutate");
}

#[test]
fn test_insufficient_walls() {
    let mut state = GameState::with_config(GameConfig {
        board_size: 9,
        walls_per_player: 0,
    });
    assert_rejected_without_mutation(
        &mut state,
        0,
        Position::new(4, 4),
        Direction::Up,
        Direction::Right,
        GameError::InsufficientWalls,
    );
}

#[test]
fn test_invalid_placement_on_the_border() {
    let mut state = GameState::new_game();

    // Top edge of the last row and right edge of the last column are the
    // board border, not wall slots.
    assert_rejected_without_mutation(
        &mut state,
        0,
        Position::new(8, 4),
        Direction::Up,
        Direction::Right,
        GameError::InvalidPlacement,
    );
    assert_rejected_without_mutation(
        &mut state,
        0,
        Position::new(4, 8),
        Direction::Right,
        Direction::Up,
        GameError::InvalidPlacement,
    );
    // Canonicalization walks off the board entirely.
    assert_rejected_without_mutation(
        &mut state,
        0,
        Position::new(0, 4),
        Direction::Down,
        Direction::Right,
        GameError::InvalidPlacement,
    );
}

#[test]
fn test_direction_mismatch() {
    let mut state = GameState::new_game();

    assert_rejected_without_mutation(
        &mut state,
        0,
        Position::new(4, 4),
        Direction::Up,
        Direction::Up,
        GameError::DirectionMismatch,
    );
    assert_rejected_without_mutation(
        &mut state,
        0,
        Position::new(4, 4),
        Direction::Right,
        Direction::Left,
        GameError::DirectionMismatch,
    );
}

#[test]
fn test_second_segment_out_of_bounds() {
    let mut state = GameState::new_game();

    assert_rejected_without_mutation(
        &mut state,
        0,
        Position::new(4, 0),
        Direction::Up,
        Direction::Left,
        GameError::OutOfBounds,
    );
    assert_rejected_without_mutation(
        &mut state,
        0,
        Position::new(0, 4),
        Direction::Right,
        Direction::Down,
        GameError::OutOfBounds,
    );
}

#[test]
fn test_overlap_direct_and_through_second_segment() {
    let mut state = GameState::new_game();
    state
        .place_wall(0, Position::new(4, 4), Direction::Up, Direction::Right)
        .unwrap();

    // Anchor lands on an occupied slot.
    assert_rejected_without_mutation(
        &mut state,
        1,
        Position::new(4, 4),
        Direction::Up,
        Direction::Left,
        GameError::Overlap,
    );
    // Anchor is free but the extension lands on an occupied slot.
    assert_rejected_without_mutation(
        &mut state,
        1,
        Position::new(4, 3),
        Direction::Up,
        Direction::Right,
        GameError::Overlap,
    );
}

#[test]
fn test_impossible_block() {
    let mut state = GameState::new_game();
    state
        .place_wall(0, Position::new(8, 4), Direction::Down, Direction::Right)
        .unwrap();
    state
        .place_wall(0, Position::new(8, 3), Direction::Right, Direction::Down)
        .unwrap();

    assert_rejected_without_mutation(
        &mut state,
        0,
        Position::new(8, 4),
        Direction::Right,
        Direction::Down,
        GameError::ImpossibleBlock(1),
    );
}

#[test]
fn test_failed_moves_do_not_mutate_either() {
    let mut state = GameState::new_game();
    let snapshot = state.clone();

    assert_eq!(state.move_pawn(0, Direction::Down), Err(GameError::OutOfBounds));
    assert_eq!(state, snapshot);

    state
        .place_wall(1, Position::new(0, 4), Direction::Up, Direction::Right)
        .unwrap();
    let snapshot = state.clone();
    assert_eq!(state.move_pawn(0, Direction::Up), Err(GameError::WallBlocked));
    assert_eq!(state, snapshot);
}
