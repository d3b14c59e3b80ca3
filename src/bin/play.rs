use clap::Parser;
use quoridor_rs::cli::players::PlayerInstance;
use quoridor_rs::cli::{HumanPlayer, create_player, display_board, print_player_help};
use quoridor_rs::game::{Game, GameAction, GameConfig};
use quoridor_rs::players::BasePlayer;

#[derive(Clone)]
enum UnifiedPlayer {
    Human(HumanPlayer),
    Bot(PlayerInstance),
}

impl BasePlayer for UnifiedPlayer {
    fn decide(&self, game: &Game, actions: &[GameAction]) -> Option<GameAction> {
        match self {
            UnifiedPlayer::Human(p) => p.decide(game, actions),
            UnifiedPlayer::Bot(p) => p.decide(game, actions),
        }
    }
}

#[derive(Debug, Parser, Clone)]
#[command(name = "quoridor-play")]
#[command(about = "Play Quoridor against a bot")]
struct Args {
    /// Bot player code (R=Random)
    #[arg(short = 'b', long, default_value = "R")]
    bot: String,

    /// Board dimension
    #[arg(long, default_value_t = 9)]
    board_size: usize,

    /// Walls each player starts with
    #[arg(long, default_value_t = 10)]
    walls: u8,

    /// Show player codes and exit
    #[arg(long)]
    help_players: bool,
}

fn main() {
    let args = Args::parse();

    if args.help_players {
        print_player_help();
        return;
    }

    let bot = match create_player(&args.bot) {
        Some(player) => UnifiedPlayer::Bot(player),
        None => {
            eprintln!("Error: Unknown bot code '{}'", args.bot);
            eprintln!("Use --help-players to see available codes");
            std::process::exit(1);
        }
    };

    // Human is always player 0, racing toward the top row.
    let players = [UnifiedPlayer::Human(HumanPlayer::new(0)), bot];

    let config = GameConfig {
        board_size: args.board_size,
        walls_per_player: args.walls,
    };

    println!("Starting game: You (pawn 0) vs Bot (pawn 1)");
    println!(
        "Board: {}x{}, walls per player: {}",
        args.board_size, args.board_size, args.walls
    );
    println!("{}", "=".repeat(60));

    let mut game = Game::new(config);

    loop {
        if let Some(winner) = game.winner {
            println!("\n{}", "=".repeat(60));
            if winner == 0 {
                println!("You win!");
            } else {
                println!("The bot wins. Better luck next time!");
            }
            println!("{}", "=".repeat(60));
            break;
        }
        if game.is_over() {
            println!("\nGame reached the turn limit. No winner declared.");
            break;
        }

        let is_human_turn = game.current_player == 0;
        if !is_human_turn {
            println!("\nBot is thinking...");
        }

        match game.play_tick(&players) {
            Some(action) => {
                let who = if is_human_turn { "You" } else { "Bot" };
                println!("→ {} played: {}", who, action.kind);
                display_board(&game);
            }
            None => break,
        }
    }

    println!("\nTotal turns: {}", game.turn);
}
