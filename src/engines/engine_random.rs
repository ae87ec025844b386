//! Level 1: uniformly random legal move.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use tracing::debug;

use crate::board_state::chess_types::Color;
use crate::board_state::position::Position;
use crate::engines::engine_trait::Player;
use crate::moves::move_descriptions::ChessMove;

pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        "Computer Level 1"
    }

    fn choose_move(&mut self, position: &Position, color: Color) -> Option<ChessMove> {
        let legal_moves = position.legal_moves(color);
        let picked = legal_moves.choose(&mut self.rng).copied();
        debug!(player = self.name(), legal = legal_moves.len(), ?picked, "move chosen");
        picked
    }
}
