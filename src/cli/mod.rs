pub mod board_display;
pub mod compressed_actions;
pub mod human_player;
pub mod players;
pub mod stats;
pub mod tui;

pub use board_display::{display_board, render_board};
pub use human_player::HumanPlayer;
pub use players::{CLI_PLAYERS, CliPlayer, PlayerInstance, create_player, print_player_help};
pub use stats::{GameStats, StatisticsAccumulator};
