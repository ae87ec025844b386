//! Per-kind dispatch of the movement rules.
//!
//! Each kind's geometry lives in its own module; this file routes a `Piece`
//! to the right one and applies the checks common to every kind.

use crate::board_state::chess_types::PieceKind;
use crate::board_state::coordinate::Coordinate;
use crate::board_state::piece::Piece;
use crate::board_state::position::Position;
use crate::moves::bishop_moves::{bishop_destinations, bishop_reaches};
use crate::moves::king_moves::{is_valid_king_move, king_destinations, king_reaches};
use crate::moves::knight_moves::{knight_destinations, knight_reaches};
use crate::moves::pawn_moves::{is_valid_pawn_move, pawn_attacks, pawn_destinations};
use crate::moves::queen_moves::{queen_destinations, queen_reaches};
use crate::moves::rook_moves::{rook_destinations, rook_reaches};

impl Piece {
    /// Shape legality of moving this piece from `from` to `to`.
    ///
    /// Rejects off-board squares, null moves and own-colour destinations.
    /// King safety is not considered.
    pub fn is_valid_move(&self, from: Coordinate, to: Coordinate, position: &Position) -> bool {
        if !from.is_valid() || !to.is_valid() || from == to {
            return false;
        }
        if position.is_occupied_by(to, self.color) {
            return false;
        }

        match self.kind {
            PieceKind::King => is_valid_king_move(position, self.color, from, to),
            PieceKind::Queen => queen_reaches(position, from, to),
            PieceKind::Rook => rook_reaches(position, from, to),
            PieceKind::Bishop => bishop_reaches(position, from, to),
            PieceKind::Knight => knight_reaches(from, to),
            PieceKind::Pawn => is_valid_pawn_move(position, self, from, to),
        }
    }

    /// Every destination the shape rules allow, never an own-colour square.
    /// Castling and en passant destinations are included when eligible.
    pub fn possible_moves(&self, from: Coordinate, position: &Position) -> Vec<Coordinate> {
        let mut out = Vec::new();
        if !from.is_valid() {
            return out;
        }

        match self.kind {
            PieceKind::King => king_destinations(position, self.color, from, &mut out),
            PieceKind::Queen => queen_destinations(position, self.color, from, &mut out),
            PieceKind::Rook => rook_destinations(position, self.color, from, &mut out),
            PieceKind::Bishop => bishop_destinations(position, self.color, from, &mut out),
            PieceKind::Knight => knight_destinations(position, self.color, from, &mut out),
            PieceKind::Pawn => pawn_destinations(position, self, from, &mut out),
        }
        out
    }

    /// Whether this piece on `from` attacks `target`, whatever stands there.
    ///
    /// Differs from `is_valid_move` for pawns (only the diagonals attack) and
    /// kings (castling never attacks).
    pub fn attacks(&self, from: Coordinate, target: Coordinate, position: &Position) -> bool {
        if from == target {
            return false;
        }
        match self.kind {
            PieceKind::King => king_reaches(from, target),
            PieceKind::Queen => queen_reaches(position, from, target),
            PieceKind::Rook => rook_reaches(position, from, target),
            PieceKind::Bishop => bishop_reaches(position, from, target),
            PieceKind::Knight => knight_reaches(from, target),
            PieceKind::Pawn => pawn_attacks(self.color, from, target),
        }
    }
}
