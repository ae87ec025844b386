use std::thread;

use crate::board_state::chess_types::Color;
use crate::board_state::position::Position;
use crate::moves::move_descriptions::ChessMove;

/// Leaf statistics of a move-tree walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(position: &Position, side_to_move: Color, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in position.legal_moves(side_to_move) {
        perft_recurse(position, side_to_move, &mv, depth, &mut total);
    }
    total
}

/// Same counts as `perft`, one thread per root move.
pub fn perft_multi_threaded(position: &Position, side_to_move: Color, depth: u8) -> PerftCounts {
    if depth == 0 {
        return perft(position, side_to_move, 0);
    }

    let root_moves = position.legal_moves(side_to_move);
    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .iter()
            .map(|mv| {
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    perft_recurse(position, side_to_move, mv, depth, &mut local);
                    local
                })
            })
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            // A panicking worker re-raises on this thread.
            match handle.join() {
                Ok(local) => total.merge(local),
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
        total
    })
}

/// Node count below each root move, for comparing against other move generators.
pub fn perft_divide(position: &Position, side_to_move: Color, depth: u8) -> Vec<(ChessMove, usize)> {
    position
        .legal_moves(side_to_move)
        .into_iter()
        .map(|mv| {
            let next = position.propose_move(mv.from, mv.to, mv.promotion);
            let nodes = perft(&next, side_to_move.opposite(), depth.saturating_sub(1)).nodes;
            (mv, nodes)
        })
        .collect()
}

fn perft_recurse(position: &Position, mover: Color, mv: &ChessMove, depth: u8, counts: &mut PerftCounts) {
    let mut next = position.clone();
    let Some(effects) = next.apply_move(mv.from, mv.to, mv.promotion) else {
        return;
    };
    let opponent = mover.opposite();

    if depth == 1 {
        counts.nodes += 1;
        if effects.captured.is_some() {
            counts.captures += 1;
        }
        if effects.en_passant {
            counts.en_passant += 1;
        }
        if effects.castle.is_some() {
            counts.castles += 1;
        }
        if effects.promoted_to.is_some() {
            counts.promotions += 1;
        }
        if next.is_in_check(opponent) {
            counts.checks += 1;
            if !next.has_legal_move(opponent) {
                counts.checkmates += 1;
            }
        }
        return;
    }

    for child in next.legal_moves(opponent) {
        perft_recurse(&next, opponent, &child, depth - 1, counts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_state::chess_rules::RuleOptions;
    use crate::errors::ChessResult;
    use crate::utils::fen_parser::parse_fen;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const ENDGAME_ROOKS: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    const PROMOTION_TANGLE: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";

    fn strict(fen: &str) -> ChessResult<(Position, Color)> {
        let (mut position, side) = parse_fen(fen)?;
        position.set_options(RuleOptions::strict());
        Ok((position, side))
    }

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let counts = perft(&Position::new_game(), Color::Light, 0);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_counts() -> ChessResult<()> {
        let (position, side) = strict(crate::board_state::chess_rules::STARTING_POSITION_FEN)?;
        assert_eq!(perft(&position, side, 1).nodes, 20);
        assert_eq!(perft(&position, side, 2).nodes, 400);

        let depth3 = perft(&position, side, 3);
        assert_eq!(depth3.nodes, 8_902);
        assert_eq!(depth3.captures, 34);
        assert_eq!(depth3.checks, 12);
        assert_eq!(depth3.checkmates, 0);
        Ok(())
    }

    #[test]
    fn kiwipete_counts() -> ChessResult<()> {
        let (position, side) = strict(KIWIPETE)?;

        let depth1 = perft(&position, side, 1);
        assert_eq!(depth1.nodes, 48);
        assert_eq!(depth1.captures, 8);
        assert_eq!(depth1.castles, 2);

        let depth2 = perft(&position, side, 2);
        assert_eq!(depth2.nodes, 2_039);
        assert_eq!(depth2.captures, 351);
        assert_eq!(depth2.en_passant, 1);
        assert_eq!(depth2.castles, 91);
        assert_eq!(depth2.checks, 3);
        Ok(())
    }

    #[test]
    fn endgame_rook_counts_include_en_passant() -> ChessResult<()> {
        let (position, side) = strict(ENDGAME_ROOKS)?;
        assert_eq!(perft(&position, side, 1).nodes, 14);
        assert_eq!(perft(&position, side, 2).nodes, 191);

        let depth3 = perft(&position, side, 3);
        assert_eq!(depth3.nodes, 2_812);
        assert_eq!(depth3.captures, 209);
        assert_eq!(depth3.en_passant, 2);
        assert_eq!(depth3.checks, 267);
        Ok(())
    }

    #[test]
    fn promotion_heavy_position_counts() -> ChessResult<()> {
        let (position, side) = strict(PROMOTION_TANGLE)?;
        assert_eq!(perft(&position, side, 1).nodes, 6);
        assert_eq!(perft(&position, side, 2).nodes, 264);
        Ok(())
    }

    #[test]
    fn threaded_and_divided_perft_agree_with_single_thread() -> ChessResult<()> {
        let (position, side) = strict(KIWIPETE)?;
        let single = perft(&position, side, 2);
        assert_eq!(perft_multi_threaded(&position, side, 2), single);

        let divided: usize = perft_divide(&position, side, 2).iter().map(|(_, n)| n).sum();
        assert_eq!(divided, single.nodes);
        Ok(())
    }
}
