//! Pawn movement: pushes, the initial double step, diagonal captures and
//! en passant. Promotion is not a shape concern and is handled when the move
//! is applied.

use crate::board_state::chess_types::Color;
use crate::board_state::coordinate::Coordinate;
use crate::board_state::piece::Piece;
use crate::board_state::position::Position;

/// Diagonal squares a pawn of `color` on `from` attacks.
#[inline]
pub fn pawn_attacks(color: Color, from: Coordinate, target: Coordinate) -> bool {
    from.is_valid()
        && target.is_valid()
        && target.rank() - from.rank() == color.forward()
        && (target.file() - from.file()).abs() == 1
}

pub fn is_valid_pawn_move(position: &Position, pawn: &Piece, from: Coordinate, to: Coordinate) -> bool {
    if !from.is_valid() || !to.is_valid() {
        return false;
    }

    let dir = pawn.color.forward();
    let d_rank = to.rank() - from.rank();
    let d_file = to.file() - from.file();

    if d_file == 0 {
        if d_rank == dir {
            return position.is_empty(to);
        }
        if d_rank == 2 * dir {
            let unmoved = !pawn.has_moved && from.rank() == pawn.color.pawn_rank();
            let step = Coordinate::new(from.rank() + dir, from.file());
            return unmoved && position.is_empty(step) && position.is_empty(to);
        }
        return false;
    }

    if d_rank == dir && d_file.abs() == 1 {
        return match position.get_piece(to) {
            Some(target) => target.color != pawn.color,
            None => position.is_en_passant(from, to, pawn.color),
        };
    }

    false
}

pub fn pawn_destinations(position: &Position, pawn: &Piece, from: Coordinate, out: &mut Vec<Coordinate>) {
    let dir = pawn.color.forward();
    for (d_rank, d_file) in [(dir, 0), (2 * dir, 0), (dir, -1), (dir, 1)] {
        if let Some(to) = from.offset(d_rank, d_file) {
            if is_valid_pawn_move(position, pawn, from, to) {
                out.push(to);
            }
        }
    }
}
