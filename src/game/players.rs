use serde::{Deserialize, Serialize};

use crate::coords::Position;

/// One pawn's record: where it stands and how many composite walls it may
/// still place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub position: Position,
    pub wall_balance: u8,
}

impl Player {
    pub fn new(position: Position, wall_balance: u8) -> Self {
        Self {
            position,
            wall_balance,
        }
    }
}
