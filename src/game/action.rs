use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coords::{Direction, Position};

/// One player decision, in the form the engine's `step` consumes. This is
/// the decoded shape of the two externally-supplied commands (`move` and
/// `place_wall`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameAction {
    pub player: usize,
    pub kind: ActionKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Move(Direction),
    PlaceWall {
        cell: Position,
        edge: Direction,
        extends: Direction,
    },
}

impl GameAction {
    pub fn movement(player: usize, direction: Direction) -> Self {
        Self {
            player,
            kind: ActionKind::Move(direction),
        }
    }

    pub fn wall(player: usize, cell: Position, edge: Direction, extends: Direction) -> Self {
        Self {
            player,
            kind: ActionKind::PlaceWall { cell, edge, extends },
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Move(direction) => write!(f, "move {direction}"),
            ActionKind::PlaceWall { cell, edge, extends } => {
                write!(f, "wall at {cell} {edge}, extending {extends}")
            }
        }
    }
}
