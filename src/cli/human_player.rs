use crate::cli::tui::TuiApp;
use crate::game::GameAction;
use crate::game::game::Game;
use crate::players::BasePlayer;

#[derive(Clone)]
pub struct HumanPlayer {
    pub index: usize,
}

impl HumanPlayer {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl BasePlayer for HumanPlayer {
    fn decide(&self, game: &Game, actions: &[GameAction]) -> Option<GameAction> {
        if actions.is_empty() {
            return None;
        }

        let mut app = TuiApp::new(game.clone(), self.index, actions.to_vec());
        match app.run() {
            Ok(action) => action,
            Err(_) => None,
        }
    }
}
