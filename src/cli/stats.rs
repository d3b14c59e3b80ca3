use std::collections::HashMap;
use std::time::Duration;

use crate::game::game::Game;

#[derive(Debug, Default, Clone)]
pub struct GameStats {
    pub wins: HashMap<usize, u32>,
    pub draws: u32,
    pub games: u32,
    pub total_actions: u64,
    pub total_turns: u64,
    pub total_duration: Duration,
}

impl GameStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_game(&mut self, game: &Game, duration: Duration) {
        self.games += 1;
        self.total_duration += duration;
        self.total_turns += game.turn as u64;
        self.total_actions += game.actions.len() as u64;

        match game.winner {
            Some(winner) => *self.wins.entry(winner).or_insert(0) += 1,
            None => self.draws += 1,
        }
    }

    pub fn merge(&mut self, other: &GameStats) {
        for (player, wins) in &other.wins {
            *self.wins.entry(*player).or_insert(0) += wins;
        }
        self.draws += other.draws;
        self.games += other.games;
        self.total_actions += other.total_actions;
        self.total_turns += other.total_turns;
        self.total_duration += other.total_duration;
    }

    pub fn get_avg_turns(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_turns as f64 / self.games as f64
    }

    pub fn get_avg_actions(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_actions as f64 / self.games as f64
    }

    pub fn get_avg_duration(&self) -> Duration {
        if self.games == 0 {
            return Duration::ZERO;
        }
        self.total_duration / self.games
    }
}

pub struct StatisticsAccumulator {
    pub stats: GameStats,
}

impl StatisticsAccumulator {
    pub fn new() -> Self {
        Self {
            stats: GameStats::new(),
        }
    }

    pub fn after(&mut self, game: &Game, duration: Duration) {
        self.stats.record_game(game, duration);
    }
}

impl Default for StatisticsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
