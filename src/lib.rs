#![warn(clippy::all)]
#![deny(rust_2018_idioms)]

pub mod board;
pub mod cli;
pub mod coords;
pub mod game;
pub mod players;

pub use board::{BoardError, EdgeGrid, Orientation};
pub use coords::{Direction, Position};
pub use game::{Game, GameAction, GameConfig, GameError, GameState, MoveOutcome};
