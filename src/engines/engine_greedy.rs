//! Levels 2 and 3: random choice among "interesting" moves.
//!
//! Level 2 prefers captures and checking moves. Level 3 additionally counts
//! moves that pull an attacked piece to safety. With no preferred move the
//! player falls back to any legal move.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use tracing::debug;

use crate::board_state::chess_types::Color;
use crate::board_state::position::Position;
use crate::engines::engine_trait::Player;
use crate::engines::move_heuristics::{captured_kind, escapes_capture, gives_check};
use crate::moves::move_descriptions::ChessMove;

pub struct GreedyPlayer {
    rng: StdRng,
    avoid_capture: bool,
}

impl GreedyPlayer {
    /// Level 2.
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng,
            avoid_capture: false,
        }
    }

    /// Level 3.
    pub fn cautious(rng: StdRng) -> Self {
        Self {
            rng,
            avoid_capture: true,
        }
    }

    fn is_preferred(&self, position: &Position, mv: &ChessMove, color: Color) -> bool {
        captured_kind(position, mv, color).is_some()
            || gives_check(position, mv, color)
            || (self.avoid_capture && escapes_capture(position, mv, color))
    }
}

impl Player for GreedyPlayer {
    fn name(&self) -> &str {
        if self.avoid_capture {
            "Computer Level 3"
        } else {
            "Computer Level 2"
        }
    }

    fn choose_move(&mut self, position: &Position, color: Color) -> Option<ChessMove> {
        let legal_moves = position.legal_moves(color);
        let preferred: Vec<ChessMove> = legal_moves
            .iter()
            .copied()
            .filter(|mv| self.is_preferred(position, mv, color))
            .collect();

        let pool = if preferred.is_empty() { &legal_moves } else { &preferred };
        let picked = pool.choose(&mut self.rng).copied();
        debug!(
            player = self.name(),
            legal = legal_moves.len(),
            preferred = preferred.len(),
            ?picked,
            "move chosen"
        );
        picked
    }
}
