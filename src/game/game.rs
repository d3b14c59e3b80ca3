use uuid::Uuid;

use crate::game::action::GameAction;
use crate::game::state::{GameConfig, GameError, GameState, StepOutcome};
use crate::players::BasePlayer;

const TURNS_LIMIT: u32 = 1000;

/// One running game: the rules state plus the turn bookkeeping the engine
/// itself does not own. The wrapper, not the engine, treats a reported win
/// as terminal.
#[derive(Debug, Clone)]
pub struct Game {
    pub id: Uuid,
    pub config: GameConfig,
    pub state: GameState,
    pub current_player: usize,
    pub turn: u32,
    pub winner: Option<usize>,
    pub actions: Vec<GameAction>,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            config,
            state: GameState::with_config(config),
            current_player: 0,
            turn: 1,
            winner: None,
            actions: Vec::new(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.turn > TURNS_LIMIT
    }

    /// Applies an action for the current player and advances the turn
    /// order. Errors pass through untouched so callers can surface the
    /// message and let the player retry.
    pub fn execute(&mut self, action: GameAction) -> Result<StepOutcome, GameError> {
        let outcome = self.state.step(&action)?;
        self.actions.push(action);
        if let Some(winner) = outcome.winner {
            self.winner = Some(winner);
        }
        if self.current_player == 1 {
            self.turn += 1;
        }
        self.current_player = 1 - self.current_player;
        Ok(outcome)
    }

    /// Runs one player decision. Returns the action taken, or `None` when
    /// the game is over or the player declined to act.
    pub fn play_tick<P: BasePlayer>(&mut self, players: &[P; 2]) -> Option<GameAction> {
        if self.is_over() {
            return None;
        }
        let idx = self.current_player;
        let legal = self.state.legal_actions(idx);
        if legal.is_empty() {
            return None;
        }
        let action = players[idx].decide(self, &legal)?;
        match self.execute(action) {
            Ok(_) => Some(action),
            Err(_) => None,
        }
    }

    /// Drives the game to completion, returning the winner's index if one
    /// emerged before the turns limit.
    pub fn play<P: BasePlayer>(&mut self, players: &[P; 2]) -> Option<usize> {
        while !self.is_over() {
            if self.play_tick(players).is_none() {
                break;
            }
        }
        self.winner
    }
}
