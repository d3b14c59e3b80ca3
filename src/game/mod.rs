pub mod action;
pub mod game;
pub mod players;
pub mod state;

pub use action::{ActionKind, GameAction};
pub use game::Game;
pub use players::Player;
pub use state::{
    DEFAULT_BOARD_SIZE, DEFAULT_WALLS_PER_PLAYER, GameConfig, GameError, GameState, MoveOutcome,
    StepOutcome,
};
