//! King movement: single steps in any direction plus castling.
//!
//! Castling is expressed as a two-file king move from the home square. The
//! shape rule only recognises the geometry; eligibility is delegated to
//! `Position::can_castle`.

use crate::board_state::castling_flags::CastleSide;
use crate::board_state::chess_rules::KING_HOME_FILE;
use crate::board_state::chess_types::Color;
use crate::board_state::coordinate::Coordinate;
use crate::board_state::position::Position;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One step in any direction.
#[inline]
pub fn king_reaches(from: Coordinate, to: Coordinate) -> bool {
    from.is_valid()
        && to.is_valid()
        && KING_OFFSETS.contains(&(to.rank() - from.rank(), to.file() - from.file()))
}

/// The wing a castling attempt `from -> to` would use, if the geometry fits:
/// `from` is the home square of `color`'s king and `to` the empty castling
/// destination on the same rank.
///
/// An occupied destination never counts as castling. `is_in_check` asks the
/// enemy king whether it can reach our king's square, which is occupied, so
/// this rule keeps the castling query out of check detection.
pub fn castle_side_for(position: &Position, color: Color, from: Coordinate, to: Coordinate) -> Option<CastleSide> {
    let rank = color.back_rank();
    if from != Coordinate::new(rank, KING_HOME_FILE) || !to.is_valid() || to.rank() != rank {
        return None;
    }
    let side = CastleSide::from_king_step(from.file(), to.file())?;
    position.is_empty(to).then_some(side)
}

pub fn is_valid_king_move(position: &Position, color: Color, from: Coordinate, to: Coordinate) -> bool {
    if king_reaches(from, to) {
        return true;
    }
    castle_side_for(position, color, from, to).is_some_and(|side| position.can_castle(color, side))
}

pub fn king_destinations(position: &Position, color: Color, from: Coordinate, out: &mut Vec<Coordinate>) {
    for (d_rank, d_file) in KING_OFFSETS {
        if let Some(to) = from.offset(d_rank, d_file) {
            if !position.is_occupied_by(to, color) {
                out.push(to);
            }
        }
    }

    for side in CastleSide::BOTH {
        let to = Coordinate::new(color.back_rank(), side.king_destination_file());
        if castle_side_for(position, color, from, to).is_some() && position.can_castle(color, side) {
            out.push(to);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn king_in_corner_has_three_steps() {
        let position = Position::new_empty();
        let mut out = Vec::new();
        king_destinations(&position, Color::Light, Coordinate::new(1, 1), &mut out);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn far_off_board_destinations_are_never_castling() {
        let position = Position::new_game();
        let e1 = Coordinate::new(1, 5);
        for to in [Coordinate::new(1, i8::MIN), Coordinate::new(1, i8::MAX), Coordinate::new(1, 9)] {
            assert_eq!(castle_side_for(&position, Color::Light, e1, to), None);
            assert!(!is_valid_king_move(&position, Color::Light, e1, to));
            assert!(!position.is_valid_move(e1, to, Color::Light));
        }
    }

    #[test]
    fn castling_destinations_are_offered_when_eligible() {
        let (position, _) = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("valid FEN");
        let mut out = Vec::new();
        king_destinations(&position, Color::Light, Coordinate::new(1, 5), &mut out);
        assert!(out.contains(&Coordinate::new(1, 7)));
        assert!(out.contains(&Coordinate::new(1, 3)));
        assert!(is_valid_king_move(&position, Color::Light, Coordinate::new(1, 5), Coordinate::new(1, 7)));
    }

    #[test]
    fn two_file_step_away_from_home_is_not_castling() {
        let position = Position::new_empty();
        assert!(castle_side_for(&position, Color::Light, Coordinate::new(4, 5), Coordinate::new(4, 7)).is_none());
        assert!(!is_valid_king_move(&position, Color::Light, Coordinate::new(4, 5), Coordinate::new(4, 7)));
    }
}
