//! Property tests driving the engine with generated action streams. The
//! reachability guarantee is re-checked with an independent search written
//! against the public query API, not the engine's own traversal.

use proptest::prelude::*;
use quoridor_rs::{Direction, GameError, GameState, Position};

/// Depth-first search over `wall_exists` queries only. Mirrors the rule
/// the engine promises (the opponent's square is an obstacle) without
/// sharing any of its code.
fn reaches_goal(state: &GameState, player: usize) -> bool {
    let size = state.board_size();
    let goal = state.goal_row(player);
    let opponent = state.position(1 - player);

    let mut visited = vec![false; size * size];
    let mut stack = vec![state.position(player)];
    while let Some(pos) = stack.pop() {
        if pos.row == goal {
            return true;
        }
        let idx = pos.row as usize * size + pos.col as usize;
        if visited[idx] {
            continue;
        }
        visited[idx] = true;
        for direction in Direction::ALL {
            let next = pos.offset(direction);
            if !next.in_bounds(size) || next == opponent {
                continue;
            }
            if state.wall_exists(pos, direction).unwrap_or(false) {
                continue;
            }
            stack.push(next);
        }
    }
    false
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

fn wall_attempt_strategy() -> impl Strategy<Value = (Position, Direction, Direction)> {
    (0i32..9, 0i32..9, direction_strategy(), direction_strategy())
        .prop_map(|(row, col, edge, extends)| (Position::new(row, col), edge, extends))
}

proptest! {
    /// After every accepted wall placement, both players can still reach
    /// their goal rows, and exactly one wall left the placer's balance.
    #[test]
    fn accepted_walls_never_seal_a_player(
        attempts in prop::collection::vec(wall_attempt_strategy(), 1..60)
    ) {
        let mut state = GameState::new_game();
        for (turn, (cell, edge, extends)) in attempts.into_iter().enumerate() {
            let player = turn % 2;
            let balance = state.wall_balance(player);
            match state.place_wall(player, cell, edge, extends) {
                Ok(()) => {
                    prop_assert_eq!(state.wall_balance(player), balance - 1);
                    prop_assert!(state.wall_exists(cell, edge).unwrap_or(false));
                    prop_assert!(reaches_goal(&state, 0));
                    prop_assert!(reaches_goal(&state, 1));
                }
                Err(_) => {
                    prop_assert_eq!(state.wall_balance(player), balance);
                }
            }
        }
    }

    /// The oracle and the mutating call agree on every attempt, and the
    /// oracle never changes the state.
    #[test]
    fn oracle_agrees_with_place_wall(
        attempts in prop::collection::vec(wall_attempt_strategy(), 1..40)
    ) {
        let mut state = GameState::new_game();
        for (turn, (cell, edge, extends)) in attempts.into_iter().enumerate() {
            let player = turn % 2;
            let verdict = state.wall_placement_allowed(player, cell, edge, extends);
            let applied = state.place_wall(player, cell, edge, extends);
            prop_assert_eq!(applied, verdict);
        }
    }

    /// Pawns stay on the board and never share a square, whatever the
    /// move stream; failed moves leave the mover in place.
    #[test]
    fn pawns_stay_in_bounds_and_apart(
        moves in prop::collection::vec((0usize..2, direction_strategy()), 1..80)
    ) {
        let mut state = GameState::new_game();
        for (player, direction) in moves {
            let before = state.position(player);
            match state.move_pawn(player, direction) {
                Ok(_) => {
                    prop_assert_eq!(state.position(player), before.offset(direction));
                }
                Err(err) => {
                    prop_assert_eq!(state.position(player), before);
                    prop_assert!(matches!(
                        err,
                        GameError::OutOfBounds | GameError::WallBlocked | GameError::Occupied
                    ));
                }
            }
            let size = state.board_size();
            prop_assert!(state.position(0).in_bounds(size));
            prop_assert!(state.position(1).in_bounds(size));
            prop_assert_ne!(state.position(0), state.position(1));
        }
    }
}
