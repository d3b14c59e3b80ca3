use std::time::Instant;

use clap::Parser;
use quoridor_rs::cli::players::PlayerInstance;
use quoridor_rs::cli::{StatisticsAccumulator, create_player, print_player_help};
use quoridor_rs::game::{Game, GameConfig};
use serde::Serialize;

#[derive(Debug, Parser, Clone)]
#[command(name = "quoridor-sim")]
#[command(about = "Quoridor Bot Simulator - Simulate games between player strategies")]
struct Args {
    /// Number of games to play
    #[arg(short = 'n', long, default_value_t = 5)]
    num: u32,

    /// Comma-separated player codes for the two seats (e.g., R,R)
    /// Codes: R=Random
    #[arg(long, default_value = "R,R")]
    players: String,

    /// Board dimension
    #[arg(long, default_value_t = 9)]
    board_size: usize,

    /// Walls each player starts with
    #[arg(long, default_value_t = 10)]
    walls: u8,

    /// Show player codes and exit
    #[arg(long)]
    help_players: bool,

    /// Silence console output
    #[arg(long)]
    quiet: bool,

    /// Emit the final summary as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Number of worker threads for parallel execution
    #[arg(long, default_value_t = 1)]
    workers: usize,
}

#[derive(Debug, Serialize)]
struct Summary {
    games: u32,
    draws: u32,
    wins: Vec<u32>,
    avg_turns: f64,
    avg_actions: f64,
    avg_duration_ms: f64,
}

fn main() {
    let args = Args::parse();

    if args.help_players {
        print_player_help();
        return;
    }

    let player_keys: Vec<&str> = args.players.split(',').collect();
    if player_keys.len() != 2 {
        eprintln!("Error: Must specify exactly 2 players (e.g., R,R)");
        std::process::exit(1);
    }

    let mut players: Vec<PlayerInstance> = Vec::new();
    for code in &player_keys {
        match create_player(code) {
            Some(player) => players.push(player),
            None => {
                eprintln!("Error: Unknown player code '{}'", code);
                eprintln!("Use --help-players to see available codes");
                std::process::exit(1);
            }
        }
    }
    let players: [PlayerInstance; 2] = match players.try_into() {
        Ok(pair) => pair,
        Err(_) => unreachable!(),
    };

    let mut stats = StatisticsAccumulator::new();

    if args.workers > 1 {
        run_parallel_simulations(&args, &players, &mut stats);
    } else {
        run_sequential_simulations(&args, &players, &mut stats);
    }

    if args.json {
        print_json_summary(&stats);
    } else if !args.quiet {
        print_summary(&stats, &player_keys);
    }
}

fn run_sequential_simulations(
    args: &Args,
    players: &[PlayerInstance; 2],
    stats: &mut StatisticsAccumulator,
) {
    let config = GameConfig {
        board_size: args.board_size,
        walls_per_player: args.walls,
    };

    for game_idx in 0..args.num {
        let start = Instant::now();
        let mut game = Game::new(config);
        let winner = game.play(players);
        let duration = start.elapsed();

        stats.after(&game, duration);

        if !args.quiet && !args.json {
            let last_n = 10;
            if game_idx < last_n || game_idx >= args.num.saturating_sub(last_n) {
                let winner_str = winner
                    .map(|w| w.to_string())
                    .unwrap_or_else(|| "None".to_string());
                println!(
                    "Game {:>4}: Winner={:>4}, Turns={:>4}, Duration={:?}",
                    game_idx + 1,
                    winner_str,
                    game.turn,
                    duration
                );
            } else if (game_idx + 1) % 100 == 0 {
                print!(".");
                use std::io::Write;
                let _ = std::io::stdout().flush();
            }
        }
    }
}

fn run_parallel_simulations(
    args: &Args,
    players: &[PlayerInstance; 2],
    stats: &mut StatisticsAccumulator,
) {
    use std::sync::Arc;
    use std::thread;

    let players = Arc::new(players.clone());
    let args = Arc::new(args.clone());

    let mut handles = Vec::new();
    let games_per_worker = args.num as usize / args.workers;
    let remainder = args.num as usize % args.workers;

    for worker_id in 0..args.workers {
        let players_clone = Arc::clone(&players);
        let args_clone = Arc::clone(&args);

        let num_games = if worker_id < remainder {
            games_per_worker + 1
        } else {
            games_per_worker
        };

        let handle = thread::spawn(move || {
            let mut local_stats = StatisticsAccumulator::new();
            let config = GameConfig {
                board_size: args_clone.board_size,
                walls_per_player: args_clone.walls,
            };

            for _ in 0..num_games {
                let start = Instant::now();
                let mut game = Game::new(config);
                let _winner = game.play(&*players_clone);
                let duration = start.elapsed();

                local_stats.after(&game, duration);
            }

            local_stats
        });

        handles.push(handle);
    }

    for handle in handles {
        match handle.join() {
            Ok(worker_stats) => stats.stats.merge(&worker_stats.stats),
            Err(_) => {
                eprintln!("Error: a simulation worker panicked");
                std::process::exit(1);
            }
        }
    }
}

fn print_summary(stats: &StatisticsAccumulator, player_keys: &[&str]) {
    println!("\n{}", "=".repeat(60));
    println!("SIMULATION SUMMARY");
    println!("{}", "=".repeat(60));

    println!("\nPlayer Summary:");
    println!("{:<10} {:<12} {:<10} {:<10}", "Seat", "Player", "Wins", "Win Rate");
    println!("{}", "-".repeat(45));

    for (idx, code) in player_keys.iter().enumerate() {
        let wins = stats.stats.wins.get(&idx).copied().unwrap_or(0);
        let win_rate = if stats.stats.games > 0 {
            (wins as f64 / stats.stats.games as f64) * 100.0
        } else {
            0.0
        };
        println!("{:<10} {:<12} {:<10} {:<9.1}%", idx, code, wins, win_rate);
    }

    println!("\nGame Summary:");
    println!("  Total Games: {}", stats.stats.games);
    println!("  Draws (turn limit): {}", stats.stats.draws);
    println!("  Avg Turns: {:.1}", stats.stats.get_avg_turns());
    println!("  Avg Actions: {:.1}", stats.stats.get_avg_actions());
    println!("  Avg Duration: {:?}", stats.stats.get_avg_duration());
}

fn print_json_summary(stats: &StatisticsAccumulator) {
    let summary = Summary {
        games: stats.stats.games,
        draws: stats.stats.draws,
        wins: (0..2)
            .map(|idx| stats.stats.wins.get(&idx).copied().unwrap_or(0))
            .collect(),
        avg_turns: stats.stats.get_avg_turns(),
        avg_actions: stats.stats.get_avg_actions(),
        avg_duration_ms: stats.stats.get_avg_duration().as_secs_f64() * 1000.0,
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(out) => println!("{out}"),
        Err(err) => {
            eprintln!("Error: failed to serialize summary: {err}");
            std::process::exit(1);
        }
    }
}
