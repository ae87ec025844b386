use crate::board_state::chess_types::Color;
use crate::board_state::coordinate::Coordinate;
use crate::board_state::position::Position;
use crate::moves::slider_rays::{slides_to, trace_rays, DIAGONAL_STEPS};

/// Bishop shape: along a diagonal with a clear path.
#[inline]
pub fn bishop_reaches(position: &Position, from: Coordinate, to: Coordinate) -> bool {
    slides_to(position, from, to, &DIAGONAL_STEPS)
}

pub fn bishop_destinations(position: &Position, color: Color, from: Coordinate, out: &mut Vec<Coordinate>) {
    trace_rays(position, color, from, &DIAGONAL_STEPS, out);
}
