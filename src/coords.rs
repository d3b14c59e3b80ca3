use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// One of the four orthogonal movement directions. Row numbers grow toward
/// player 0's goal, so `Up` increases the row.
///
/// Parses from the lowercase names `"up"`, `"down"`, `"left"`, `"right"`;
/// anything else fails with `strum::ParseError`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The `(row, col)` delta this direction adds to a position.
    pub fn delta(self) -> (i32, i32) {
        UNIT_VECTORS[&self]
    }
}

pub static UNIT_VECTORS: Lazy<HashMap<Direction, (i32, i32)>> = Lazy::new(|| {
    use Direction::*;
    HashMap::from([(Up, (1, 0)), (Down, (-1, 0)), (Left, (0, -1)), (Right, (0, 1))])
});

/// A cell coordinate. Fields are signed so that offsets past the board edge
/// stay representable until a bounds check rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighboring coordinate one step in `direction`.
    pub fn offset(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self::new(self.row + dr, self.col + dc)
    }

    pub fn in_bounds(self, size: usize) -> bool {
        let size = size as i32;
        (0..size).contains(&self.row) && (0..size).contains(&self.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
