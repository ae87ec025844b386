//! Level 4: fixed priorities instead of a search.
//!
//! 1. Any checking move, chosen at random.
//! 2. The most valuable capture or the rescue of the most valuable attacked
//!    piece, whichever is worth more; ties go to the capture. Within each
//!    category the first move found with the top value is kept.
//! 3. Any legal move, chosen at random.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use tracing::debug;

use crate::board_state::chess_types::Color;
use crate::board_state::position::Position;
use crate::engines::engine_trait::Player;
use crate::engines::move_heuristics::{captured_kind, escapes_capture, gives_check, piece_value, value_on};
use crate::moves::move_descriptions::ChessMove;

pub struct PriorityPlayer {
    rng: StdRng,
}

/// Best move seen so far in one category, with its value.
#[derive(Default)]
struct TopPick {
    best: Option<(u32, ChessMove)>,
}

impl TopPick {
    /// Keeps the first move with the highest strictly positive value.
    fn offer(&mut self, value: u32, mv: ChessMove) {
        let current = self.best.map_or(0, |(v, _)| v);
        if value > current {
            self.best = Some((value, mv));
        }
    }
}

impl PriorityPlayer {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Player for PriorityPlayer {
    fn name(&self) -> &str {
        "Computer Level 4"
    }

    fn choose_move(&mut self, position: &Position, color: Color) -> Option<ChessMove> {
        let legal_moves = position.legal_moves(color);

        let mut checks = Vec::new();
        let mut capture = TopPick::default();
        let mut escape = TopPick::default();

        for mv in &legal_moves {
            if gives_check(position, mv, color) {
                checks.push(*mv);
            }
            if let Some(kind) = captured_kind(position, mv, color) {
                capture.offer(piece_value(kind), *mv);
            }
            if escapes_capture(position, mv, color) {
                escape.offer(value_on(position, mv.from), *mv);
            }
        }

        let picked = if !checks.is_empty() {
            checks.choose(&mut self.rng).copied()
        } else {
            match (capture.best, escape.best) {
                (Some((taken, mv)), Some((saved, _))) if taken >= saved => Some(mv),
                (_, Some((_, mv))) => Some(mv),
                (Some((_, mv)), None) => Some(mv),
                (None, None) => legal_moves.choose(&mut self.rng).copied(),
            }
        };

        debug!(
            player = self.name(),
            legal = legal_moves.len(),
            checks = checks.len(),
            ?picked,
            "move chosen"
        );
        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_fen;
    use rand::SeedableRng;

    fn pick(fen: &str) -> String {
        let (position, side) = parse_fen(fen).expect("valid FEN");
        let mut player = PriorityPlayer::new(StdRng::seed_from_u64(11));
        player.choose_move(&position, side).expect("moves exist").to_string()
    }

    #[test]
    fn prefers_the_queen_over_a_pawn() {
        // Rook a4 can take the a7 pawn or the h4 queen. No move gives check,
        // and the attacked rook's rescue is worth less than the queen.
        assert_eq!(pick("1k6/pp6/8/8/R6q/8/8/K7 w - - 0 1"), "a4h4");
    }

    #[test]
    fn rescues_a_rook_rather_than_taking_a_pawn() {
        // Rook d4 is attacked by the e5 pawn; the knight on b1 could take a pawn on a3.
        assert_eq!(escape_or_capture("6rk/7p/8/4p3/3R4/p7/8/KN6 w - - 0 1"), "escape");
    }

    #[test]
    fn check_beats_everything() {
        // Ra8 is check; the knight could instead win the queen on h4.
        assert_eq!(pick("7k/8/8/8/7q/5N2/8/RK6 w - - 0 1"), "a1a8");
    }

    fn escape_or_capture(fen: &str) -> &'static str {
        let (position, side) = parse_fen(fen).expect("valid FEN");
        let mut player = PriorityPlayer::new(StdRng::seed_from_u64(5));
        let mv = player.choose_move(&position, side).expect("moves exist");
        if escapes_capture(&position, &mv, side) {
            "escape"
        } else if captured_kind(&position, &mv, side).is_some() {
            "capture"
        } else {
            "other"
        }
    }
}
