use crate::board_state::chess_types::Color;
use crate::board_state::coordinate::Coordinate;
use crate::board_state::position::Position;
use crate::moves::slider_rays::{slides_to, trace_rays, ORTHOGONAL_STEPS};

/// Rook shape: along a rank or file with a clear path.
#[inline]
pub fn rook_reaches(position: &Position, from: Coordinate, to: Coordinate) -> bool {
    slides_to(position, from, to, &ORTHOGONAL_STEPS)
}

pub fn rook_destinations(position: &Position, color: Color, from: Coordinate, out: &mut Vec<Coordinate>) {
    trace_rays(position, color, from, &ORTHOGONAL_STEPS, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_from_d4_on_empty_board_has_fourteen_targets() {
        let position = Position::new_empty();
        let mut out = Vec::new();
        rook_destinations(&position, Color::Light, Coordinate::new(4, 4), &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn rook_does_not_move_diagonally() {
        let position = Position::new_empty();
        assert!(!rook_reaches(&position, Coordinate::new(1, 1), Coordinate::new(2, 2)));
        assert!(rook_reaches(&position, Coordinate::new(1, 1), Coordinate::new(8, 1)));
    }
}
