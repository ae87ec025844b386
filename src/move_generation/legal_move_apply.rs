//! Move application on a `Position`.
//!
//! `apply_move` performs no validation; callers are expected to have checked
//! the move first. `Board` only reaches it through a `ValidatedMove`.

use crate::board_state::castling_flags::CastleSide;
use crate::board_state::chess_types::PieceKind;
use crate::board_state::coordinate::Coordinate;
use crate::board_state::piece::Piece;
use crate::board_state::position::{LastMove, Position};

/// Side effects of an applied move, reported for logging and perft counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppliedMove {
    pub captured: Option<Piece>,
    pub en_passant: bool,
    pub castle: Option<CastleSide>,
    pub promoted_to: Option<PieceKind>,
}

impl Position {
    /// Plays `from -> to` unconditionally.
    ///
    /// Effects, in order: en passant victim removal, castling rook transfer,
    /// castling right updates, relocation with the has-moved mark, promotion
    /// when a pawn lands on its far rank with a queen/rook/bishop/knight
    /// choice, and finally the last-move record. Anything else passed as
    /// `promotion` is ignored. Returns `None` without changes when either
    /// square is off the board or `from` is empty.
    pub fn apply_move(&mut self, from: Coordinate, to: Coordinate, promotion: Option<PieceKind>) -> Option<AppliedMove> {
        if !from.is_valid() || !to.is_valid() {
            return None;
        }
        let mut piece = *self.get_piece(from)?;
        let mut effects = AppliedMove::default();

        if piece.kind == PieceKind::Pawn && self.is_en_passant(from, to, piece.color) {
            effects.captured = self.take(Coordinate::new(from.rank(), to.file()));
            effects.en_passant = true;
        }

        if let Some(side) = self.castling_side_of(from, to) {
            let rank = from.rank();
            let rook_from = Coordinate::new(rank, side.rook_home_file());
            if let Some(mut rook) = self.take(rook_from) {
                rook.has_moved = true;
                self.set(Coordinate::new(rank, side.transit_file()), Some(rook));
            }
            self.castling.mark_rook_moved(piece.color, side);
            effects.castle = Some(side);
        }

        match piece.kind {
            PieceKind::King => self.castling.mark_king_moved(piece.color),
            PieceKind::Rook => self.castling.mark_rook_square(piece.color, from.rank(), from.file()),
            _ => {}
        }
        if let Some(target) = self.get_piece(to).copied() {
            if target.kind == PieceKind::Rook {
                self.castling.mark_rook_square(target.color, to.rank(), to.file());
            }
            effects.captured = Some(target);
        }

        self.take(from);
        piece.has_moved = true;
        self.set(to, Some(piece));

        if piece.kind == PieceKind::Pawn && to.rank() == piece.color.promotion_rank() {
            if let Some(kind) = promotion.filter(|kind| PieceKind::PROMOTIONS.contains(kind)) {
                self.set(to, Some(Piece::new(kind, piece.color)));
                effects.promoted_to = Some(kind);
            }
        }

        self.last_move = Some(LastMove { from, to });
        Some(effects)
    }

    /// The position after `from -> to`, leaving `self` untouched.
    pub fn propose_move(&self, from: Coordinate, to: Coordinate, promotion: Option<PieceKind>) -> Position {
        let mut next = self.clone();
        next.apply_move(from, to, promotion);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_state::chess_types::Color;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn kingside_castle_moves_the_rook_to_f1() {
        let (mut position, _) = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("valid FEN");
        let effects = position
            .apply_move(Coordinate::new(1, 5), Coordinate::new(1, 7), None)
            .expect("king on e1");

        assert_eq!(effects.castle, Some(CastleSide::KingSide));
        assert_eq!(position.get_piece(Coordinate::new(1, 7)).map(|p| p.kind), Some(PieceKind::King));
        assert_eq!(position.get_piece(Coordinate::new(1, 6)).map(|p| p.kind), Some(PieceKind::Rook));
        assert!(position.is_empty(Coordinate::new(1, 8)));
        assert!(!position.can_castle_queen_side(Color::Light));
        assert!(position.can_castle_queen_side(Color::Dark));
    }

    #[test]
    fn queenside_castle_moves_the_rook_to_d8() {
        let (mut position, _) = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").expect("valid FEN");
        position.apply_move(Coordinate::new(8, 5), Coordinate::new(8, 3), None);
        assert_eq!(position.get_piece(Coordinate::new(8, 4)).map(|p| p.symbol()), Some('r'));
        assert!(position.is_empty(Coordinate::new(8, 1)));
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let (mut position, _) = parse_fen("4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 1").expect("valid FEN");
        position.apply_move(Coordinate::new(2, 5), Coordinate::new(4, 5), None);
        let effects = position
            .apply_move(Coordinate::new(4, 4), Coordinate::new(3, 5), None)
            .expect("pawn on d4");

        assert!(effects.en_passant);
        assert_eq!(effects.captured.map(|p| p.color), Some(Color::Light));
        assert!(position.is_empty(Coordinate::new(4, 5)));
        assert_eq!(position.get_piece(Coordinate::new(3, 5)).map(|p| p.symbol()), Some('p'));
    }

    #[test]
    fn promotion_only_on_the_far_rank_with_a_valid_choice() {
        let (position, _) = parse_fen("4k3/P7/8/8/8/8/1P6/4K3 w - - 0 1").expect("valid FEN");
        let a7 = Coordinate::new(7, 1);
        let a8 = Coordinate::new(8, 1);

        let knight = position.propose_move(a7, a8, Some(PieceKind::Knight));
        assert_eq!(knight.get_piece(a8).map(|p| p.symbol()), Some('N'));

        let refused = position.propose_move(a7, a8, Some(PieceKind::King));
        assert_eq!(refused.get_piece(a8).map(|p| p.kind), Some(PieceKind::Pawn));

        let none = position.propose_move(a7, a8, None);
        assert_eq!(none.get_piece(a8).map(|p| p.kind), Some(PieceKind::Pawn));

        let b2 = Coordinate::new(2, 2);
        let b3 = Coordinate::new(3, 2);
        let early = position.propose_move(b2, b3, Some(PieceKind::Queen));
        assert_eq!(early.get_piece(b3).map(|p| p.kind), Some(PieceKind::Pawn));
    }

    #[test]
    fn capturing_a_home_rook_revokes_that_right() {
        let (mut position, _) = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("valid FEN");
        position.apply_move(Coordinate::new(1, 1), Coordinate::new(8, 1), None);
        assert!(!position.castling_flags().right(Color::Dark, CastleSide::QueenSide));
        assert!(!position.castling_flags().right(Color::Light, CastleSide::QueenSide));
        assert!(position.castling_flags().right(Color::Dark, CastleSide::KingSide));
    }

    #[test]
    fn propose_move_leaves_the_original_untouched() {
        let position = Position::new_game();
        let next = position.propose_move(Coordinate::new(2, 5), Coordinate::new(4, 5), None);
        assert_ne!(next, position);
        assert_eq!(position, Position::new_game());
        assert_eq!(
            next.last_move(),
            Some(LastMove {
                from: Coordinate::new(2, 5),
                to: Coordinate::new(4, 5)
            })
        );
        assert!(next.get_piece(Coordinate::new(4, 5)).is_some_and(|p| p.has_moved));
    }
}
