use crate::board_state::chess_types::Color;
use crate::board_state::coordinate::Coordinate;
use crate::board_state::position::Position;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Knight shape; knights jump, so nothing can block them.
#[inline]
pub fn knight_reaches(from: Coordinate, to: Coordinate) -> bool {
    from.is_valid()
        && to.is_valid()
        && KNIGHT_OFFSETS.contains(&(to.rank() - from.rank(), to.file() - from.file()))
}

pub fn knight_destinations(position: &Position, color: Color, from: Coordinate, out: &mut Vec<Coordinate>) {
    for (d_rank, d_file) in KNIGHT_OFFSETS {
        if let Some(to) = from.offset(d_rank, d_file) {
            if !position.is_occupied_by(to, color) {
                out.push(to);
            }
        }
    }
}
