use serde::{Deserialize, Serialize};

use crate::coords::{Direction, Position};

const TOP_BIT: u8 = 0b01;
const RIGHT_BIT: u8 = 0b10;

/// The two stored wall orientations. Every physical wall boundary has
/// exactly one canonical `(position, orientation)` slot: the bottom edge of
/// a cell is the top edge of the cell below it, and the left edge is the
/// right edge of the cell to its left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Top,
    Right,
}

impl Orientation {
    fn bit(self) -> u8 {
        match self {
            Orientation::Top => TOP_BIT,
            Orientation::Right => RIGHT_BIT,
        }
    }

    /// The direction whose canonicalization is the identity for this
    /// orientation.
    pub fn as_direction(self) -> Direction {
        match self {
            Orientation::Top => Direction::Up,
            Orientation::Right => Direction::Right,
        }
    }
}

/// Resolves a user-facing `(position, direction)` wall description to its
/// canonical storage slot. Shared by every query and mutation path so that
/// overlap detection and reachability queries can never disagree about
/// which physical wall a description denotes.
pub fn canonicalize(pos: Position, direction: Direction) -> (Position, Orientation) {
    match direction {
        Direction::Up => (pos, Orientation::Top),
        Direction::Right => (pos, Orientation::Right),
        Direction::Down => (pos.offset(Direction::Down), Orientation::Top),
        Direction::Left => (pos.offset(Direction::Left), Orientation::Right),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("no wall slot on the {orientation:?} edge of ({row}, {col})")]
    OutOfRange {
        row: i32,
        col: i32,
        orientation: Orientation,
    },
}

/// Wall storage for an `N×N` board: one 2-bit mask per cell, recording
/// whether a wall segment sits on the cell's top or right boundary. The
/// outer border never stores a wall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeGrid {
    size: usize,
    cells: Vec<u8>,
}

impl EdgeGrid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Canonical slot index, or `OutOfRange` when the canonical position
    /// falls outside the valid index range for its orientation: top slots
    /// exist for rows `[0, N-1)`, right slots for cols `[0, N-1)`.
    fn slot(&self, pos: Position, orientation: Orientation) -> Result<usize, BoardError> {
        let size = self.size as i32;
        let (row_limit, col_limit) = match orientation {
            Orientation::Top => (size - 1, size),
            Orientation::Right => (size, size - 1),
        };
        if !(0..row_limit).contains(&pos.row) || !(0..col_limit).contains(&pos.col) {
            return Err(BoardError::OutOfRange {
                row: pos.row,
                col: pos.col,
                orientation,
            });
        }
        Ok(pos.row as usize * self.size + pos.col as usize)
    }

    /// Whether a wall sits on the given boundary of `pos`, accepting any of
    /// the four direction aliases.
    pub fn exists(&self, pos: Position, direction: Direction) -> Result<bool, BoardError> {
        let (pos, orientation) = canonicalize(pos, direction);
        let idx = self.slot(pos, orientation)?;
        Ok(self.cells[idx] & orientation.bit() != 0)
    }

    /// Sets a wall segment. This is a low-level primitive: callers are
    /// required to have checked for overlap already, so a double set is an
    /// engine defect and aborts in debug builds.
    pub fn place(&mut self, pos: Position, direction: Direction) -> Result<(), BoardError> {
        let (pos, orientation) = canonicalize(pos, direction);
        let idx = self.slot(pos, orientation)?;
        debug_assert!(
            self.cells[idx] & orientation.bit() == 0,
            "wall segment already present on the {:?} edge of ({}, {})",
            orientation,
            pos.row,
            pos.col,
        );
        self.cells[idx] |= orientation.bit();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_share_one_slot() {
        let mut grid = EdgeGrid::new(9);
        grid.place(Position::new(2, 3), Direction::Down).unwrap();

        // The same physical wall answers under both descriptions.
        assert!(grid.exists(Position::new(2, 3), Direction::Down).unwrap());
        assert!(grid.exists(Position::new(1, 3), Direction::Up).unwrap());

        let mut grid = EdgeGrid::new(9);
        grid.place(Position::new(4, 4), Direction::Left).unwrap();
        assert!(grid.exists(Position::new(4, 4), Direction::Left).unwrap());
        assert!(grid.exists(Position::new(4, 3), Direction::Right).unwrap());
    }

    #[test]
    fn border_slots_are_out_of_range() {
        let grid = EdgeGrid::new(9);
        // Top edge of the top row and right edge of the rightmost column
        // do not exist, nor do their aliases below/left of the board.
        assert!(grid.exists(Position::new(8, 4), Direction::Up).is_err());
        assert!(grid.exists(Position::new(0, 4), Direction::Down).is_err());
        assert!(grid.exists(Position::new(4, 8), Direction::Right).is_err());
        assert!(grid.exists(Position::new(4, 0), Direction::Left).is_err());
    }

    #[test]
    fn slots_next_to_the_border_are_fine() {
        let mut grid = EdgeGrid::new(9);
        grid.place(Position::new(7, 0), Direction::Up).unwrap();
        grid.place(Position::new(0, 7), Direction::Right).unwrap();
        assert!(grid.exists(Position::new(8, 0), Direction::Down).unwrap());
        assert!(grid.exists(Position::new(0, 8), Direction::Left).unwrap());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "wall segment already present")]
    fn double_place_is_fatal() {
        let mut grid = EdgeGrid::new(9);
        grid.place(Position::new(2, 3), Direction::Down).unwrap();
        // Equivalent alias of the slot set above.
        let _ = grid.place(Position::new(1, 3), Direction::Up);
    }
}
