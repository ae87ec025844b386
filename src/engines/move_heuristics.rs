//! Move features the computer players rank by.

use crate::board_state::chess_types::{Color, PieceKind};
use crate::board_state::coordinate::Coordinate;
use crate::board_state::position::Position;
use crate::moves::move_descriptions::ChessMove;

/// Material value used by the players: Q9 R5 B3 N2 P1 K0.
pub const fn piece_value(kind: PieceKind) -> u32 {
    match kind {
        PieceKind::Queen => 9,
        PieceKind::Rook => 5,
        PieceKind::Bishop => 3,
        PieceKind::Knight => 2,
        PieceKind::Pawn => 1,
        PieceKind::King => 0,
    }
}

/// Kind of the enemy piece `mv` takes, en passant included.
pub fn captured_kind(position: &Position, mv: &ChessMove, color: Color) -> Option<PieceKind> {
    match position.get_piece(mv.to) {
        Some(target) if target.color != color => Some(target.kind),
        Some(_) => None,
        None => position
            .is_en_passant(mv.from, mv.to, color)
            .then_some(PieceKind::Pawn),
    }
}

/// Whether `mv` leaves the opponent's king attacked.
pub fn gives_check(position: &Position, mv: &ChessMove, color: Color) -> bool {
    position
        .propose_move(mv.from, mv.to, mv.promotion)
        .is_in_check(color.opposite())
}

/// Whether `mv` takes a currently attacked piece to a square the opponent
/// does not attack once the move is made.
pub fn escapes_capture(position: &Position, mv: &ChessMove, color: Color) -> bool {
    let enemy = color.opposite();
    if !position.is_square_attacked(mv.from, enemy) {
        return false;
    }
    let after = position.propose_move(mv.from, mv.to, mv.promotion);
    !after.is_square_attacked(mv.to, enemy)
}

/// Value of the piece standing on `square`, zero when empty.
pub fn value_on(position: &Position, square: Coordinate) -> u32 {
    position.get_piece(square).map_or(0, |piece| piece_value(piece.kind))
}
