use itertools::Itertools;

use crate::coords::{Direction, Position};
use crate::game::GameState;
use crate::game::game::Game;

/// Renders the board as text, row `N-1` on top so player 0 walks "up" the
/// screen. Pawns print as `0`/`1`, vertical wall segments as `|`,
/// horizontal ones as `---`. Built purely on the engine's read accessors.
pub fn render_board(state: &GameState) -> String {
    let n = state.board_size();
    let width = 3 + 4 * n - 3;
    let mut out = String::new();

    out.push_str("   ");
    out.push_str(&(0..n).map(|col| col.to_string()).join("   "));
    out.push('\n');

    for row in (0..n as i32).rev() {
        let mut line = format!("{row:>2} ");
        for col in 0..n as i32 {
            let pos = Position::new(row, col);
            line.push(marker(state, pos));
            if col < n as i32 - 1 {
                let walled = state.wall_exists(pos, Direction::Right).unwrap_or(false);
                line.push_str(if walled { " | " } else { "   " });
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');

        if row > 0 {
            let mut sep = vec![' '; width];
            for col in 0..n as i32 {
                let below = Position::new(row - 1, col);
                if state.wall_exists(below, Direction::Up).unwrap_or(false) {
                    let center = 3 + 4 * col as usize;
                    for slot in sep
                        .iter_mut()
                        .take((center + 2).min(width))
                        .skip(center.saturating_sub(1))
                    {
                        *slot = '-';
                    }
                }
            }
            let sep: String = sep.into_iter().collect();
            out.push_str(sep.trim_end());
            out.push('\n');
        }
    }
    out
}

fn marker(state: &GameState, pos: Position) -> char {
    if state.position(0) == pos {
        '0'
    } else if state.position(1) == pos {
        '1'
    } else {
        '.'
    }
}

/// Prints the board plus the per-player summary lines.
pub fn display_board(game: &Game) {
    println!("{}", render_board(&game.state));
    for idx in 0..2 {
        println!(
            "Player {idx}: at {}, {} walls left",
            game.state.position(idx),
            game.state.wall_balance(idx)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_board_shows_both_pawns() {
        let state = GameState::new_game();
        let text = render_board(&state);
        let lines: Vec<&str> = text.lines().collect();

        // Row 8 renders first (after the header), row 0 last.
        assert!(lines[1].starts_with(" 8"));
        assert!(lines[1].contains('1'));
        assert!(lines.last().unwrap().starts_with(" 0"));
        assert!(lines.last().unwrap().contains('0'));
        assert!(!text.contains('|'));
        assert!(!text.contains('-'));
    }

    #[test]
    fn walls_show_up_in_both_orientations() {
        let mut state = GameState::new_game();
        state
            .place_wall(0, Position::new(4, 2), Direction::Up, Direction::Right)
            .unwrap();
        state
            .place_wall(1, Position::new(6, 6), Direction::Right, Direction::Up)
            .unwrap();
        let text = render_board(&state);
        assert!(text.contains("---"));
        assert!(text.contains('|'));
    }
}
