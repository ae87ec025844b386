//! Eligibility of the special moves: castling and en passant.

use crate::board_state::castling_flags::CastleSide;
use crate::board_state::chess_rules::KING_HOME_FILE;
use crate::board_state::chess_types::{Color, PieceKind};
use crate::board_state::coordinate::Coordinate;
use crate::board_state::position::{LastMove, Position};
use crate::moves::king_moves::castle_side_for;

impl Position {
    /// Castling eligibility for `color` on `side`.
    ///
    /// Requires an intact right, king and rook of `color` on their home
    /// squares, empty squares between them and a king not in check. The
    /// square the king crosses is only tested when
    /// `RuleOptions::verify_castling_transit` is set.
    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        if !self.castling.right(color, side) {
            return false;
        }

        let rank = color.back_rank();
        let king_home = Coordinate::new(rank, KING_HOME_FILE);
        let rook_home = Coordinate::new(rank, side.rook_home_file());
        let holds = |pos: Coordinate, kind: PieceKind| {
            self.get_piece(pos)
                .is_some_and(|piece| piece.kind == kind && piece.color == color)
        };
        if !holds(king_home, PieceKind::King) || !holds(rook_home, PieceKind::Rook) {
            return false;
        }

        if !side
            .between_files()
            .all(|file| self.is_empty(Coordinate::new(rank, file)))
        {
            return false;
        }

        if self.is_in_check(color) {
            return false;
        }

        if self.options.verify_castling_transit {
            let transit = Coordinate::new(rank, side.transit_file());
            if self.propose_move(king_home, transit, None).is_in_check(color) {
                return false;
            }
        }

        true
    }

    #[inline]
    pub fn can_castle_king_side(&self, color: Color) -> bool {
        self.can_castle(color, CastleSide::KingSide)
    }

    #[inline]
    pub fn can_castle_queen_side(&self, color: Color) -> bool {
        self.can_castle(color, CastleSide::QueenSide)
    }

    /// The wing if `from -> to` is an eligible castling move of the king on `from`.
    pub fn castling_side_of(&self, from: Coordinate, to: Coordinate) -> Option<CastleSide> {
        let king = self.get_piece(from).filter(|piece| piece.kind == PieceKind::King)?;
        castle_side_for(self, king.color, from, to).filter(|side| self.can_castle(king.color, *side))
    }

    /// Whether `from -> to` is an en passant capture for `turn`.
    ///
    /// Only possible right after the enemy pawn's double step: the last move
    /// must be exactly that pawn leaving its start rank for the square beside
    /// the capturing pawn.
    pub fn is_en_passant(&self, from: Coordinate, to: Coordinate, turn: Color) -> bool {
        if !from.is_valid() || !to.is_valid() {
            return false;
        }
        let is_own_pawn = self
            .get_piece(from)
            .is_some_and(|piece| piece.kind == PieceKind::Pawn && piece.color == turn);
        if !is_own_pawn {
            return false;
        }
        if to.rank() - from.rank() != turn.forward() || (to.file() - from.file()).abs() != 1 {
            return false;
        }
        if !self.is_empty(to) {
            return false;
        }

        let enemy = turn.opposite();
        let victim_square = Coordinate::new(from.rank(), to.file());
        if victim_square.rank() != enemy.pawn_rank() + 2 * enemy.forward() {
            return false;
        }
        let is_enemy_pawn = self
            .get_piece(victim_square)
            .is_some_and(|piece| piece.kind == PieceKind::Pawn && piece.color == enemy);

        is_enemy_pawn
            && self.last_move
                == Some(LastMove {
                    from: Coordinate::new(enemy.pawn_rank(), to.file()),
                    to: victim_square,
                })
    }
}
