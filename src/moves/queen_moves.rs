use crate::board_state::chess_types::Color;
use crate::board_state::coordinate::Coordinate;
use crate::board_state::position::Position;
use crate::moves::slider_rays::{slides_to, trace_rays, DIAGONAL_STEPS, ORTHOGONAL_STEPS};

pub const QUEEN_STEPS: [(i8, i8); 8] = [
    ORTHOGONAL_STEPS[0],
    ORTHOGONAL_STEPS[1],
    ORTHOGONAL_STEPS[2],
    ORTHOGONAL_STEPS[3],
    DIAGONAL_STEPS[0],
    DIAGONAL_STEPS[1],
    DIAGONAL_STEPS[2],
    DIAGONAL_STEPS[3],
];

#[inline]
pub fn queen_reaches(position: &Position, from: Coordinate, to: Coordinate) -> bool {
    slides_to(position, from, to, &QUEEN_STEPS)
}

pub fn queen_destinations(position: &Position, color: Color, from: Coordinate, out: &mut Vec<Coordinate>) {
    trace_rays(position, color, from, &QUEEN_STEPS, out);
}
