use crate::game::GameAction;
use crate::game::game::Game;
use crate::players::{BasePlayer, RandomPlayer};

pub struct CliPlayer {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const CLI_PLAYERS: &[CliPlayer] = &[CliPlayer {
    code: "R",
    name: "RandomPlayer",
    description: "Chooses uniformly among the legal actions.",
}];

#[derive(Clone)]
pub enum PlayerInstance {
    Random(RandomPlayer),
}

impl BasePlayer for PlayerInstance {
    fn decide(&self, game: &Game, actions: &[GameAction]) -> Option<GameAction> {
        match self {
            PlayerInstance::Random(p) => p.decide(game, actions),
        }
    }
}

pub fn create_player(code: &str) -> Option<PlayerInstance> {
    match code {
        "R" => Some(PlayerInstance::Random(RandomPlayer)),
        _ => None,
    }
}

pub fn print_player_help() {
    println!("Player Legend:");
    println!("{:<5} {:<25} {}", "CODE", "PLAYER", "DESCRIPTION");
    println!("{}", "-".repeat(80));
    for player in CLI_PLAYERS {
        println!(
            "{:<5} {:<25} {}",
            player.code, player.name, player.description
        );
    }
}
