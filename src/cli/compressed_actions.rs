use std::collections::HashMap;

use crate::board::{Orientation, canonicalize};
use crate::game::{ActionKind, GameAction};

/// Wall placements come in the dozens on an open board, so the action list
/// groups them by the board line they sit on; moves stay as single-entry
/// groups.
#[derive(Debug, Clone)]
pub struct CompressedActionGroup {
    pub description: String,
    pub actions: Vec<(usize, GameAction)>, // (original index, action)
}

pub fn compress_actions(actions: &[GameAction]) -> Vec<CompressedActionGroup> {
    let mut groups: HashMap<String, CompressedActionGroup> = HashMap::new();

    for (idx, action) in actions.iter().enumerate() {
        let key = group_key(action);
        let description = group_description(action);
        let group = groups.entry(key).or_insert_with(|| CompressedActionGroup {
            description,
            actions: Vec::new(),
        });
        group.actions.push((idx, *action));
    }

    for group in groups.values_mut() {
        group.actions.sort_by_key(|(_, action)| action_detail_label(action));
    }

    let mut groups: Vec<_> = groups.into_values().collect();
    groups.sort_by(|a, b| a.description.cmp(&b.description));
    groups
}

/// Maps the expanded list's indices back to indices into the original
/// action slice.
pub fn expand_group(group: &CompressedActionGroup) -> HashMap<usize, usize> {
    group
        .actions
        .iter()
        .enumerate()
        .map(|(expanded_idx, (original_idx, _))| (expanded_idx, *original_idx))
        .collect()
}

fn group_key(action: &GameAction) -> String {
    match action.kind {
        ActionKind::Move(direction) => format!("move:{direction}"),
        ActionKind::PlaceWall { cell, edge, .. } => {
            let (anchor, orientation) = canonicalize(cell, edge);
            match orientation {
                Orientation::Top => format!("wall:h:{:02}", anchor.row),
                Orientation::Right => format!("wall:v:{:02}", anchor.col),
            }
        }
    }
}

fn group_description(action: &GameAction) -> String {
    match action.kind {
        ActionKind::Move(direction) => format!("Move {direction}"),
        ActionKind::PlaceWall { cell, edge, .. } => {
            let (anchor, orientation) = canonicalize(cell, edge);
            match orientation {
                Orientation::Top => {
                    format!("Wall between rows {} and {}", anchor.row, anchor.row + 1)
                }
                Orientation::Right => {
                    format!("Wall between columns {} and {}", anchor.col, anchor.col + 1)
                }
            }
        }
    }
}

pub fn action_detail_label(action: &GameAction) -> String {
    match action.kind {
        ActionKind::Move(direction) => format!("Move {direction}"),
        ActionKind::PlaceWall { cell, edge, extends } => {
            let (anchor, orientation) = canonicalize(cell, edge);
            let second = anchor.offset(extends);
            let side = match orientation {
                Orientation::Top => "top",
                Orientation::Right => "right",
            };
            format!("Wall on the {side} edge of {anchor} and {second}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Direction, Position};

    #[test]
    fn moves_stay_single_and_walls_group_by_line() {
        let actions = vec![
            GameAction::movement(0, Direction::Up),
            GameAction::wall(0, Position::new(3, 1), Direction::Up, Direction::Right),
            GameAction::wall(0, Position::new(3, 4), Direction::Up, Direction::Right),
            GameAction::wall(0, Position::new(2, 2), Direction::Right, Direction::Up),
        ];
        let groups = compress_actions(&actions);
        assert_eq!(groups.len(), 3);

        let horizontal = groups
            .iter()
            .find(|g| g.description.contains("rows 3 and 4"))
            .unwrap();
        assert_eq!(horizontal.actions.len(), 2);

        let mapping = expand_group(horizontal);
        assert_eq!(mapping.len(), 2);
        assert!(mapping.values().all(|idx| *idx == 1 || *idx == 2));
    }
}
