//! Shape validation, attack detection and king safety.

use crate::board_state::chess_types::Color;
use crate::board_state::coordinate::Coordinate;
use crate::board_state::position::Position;

impl Position {
    /// Shape legality for the side `turn`: a `turn` piece stands on `from`,
    /// the destination is not an own piece and the piece's movement rule
    /// accepts the move. King safety is not considered.
    pub fn is_valid_move(&self, from: Coordinate, to: Coordinate, turn: Color) -> bool {
        match self.get_piece(from) {
            Some(piece) if piece.color == turn => piece.is_valid_move(from, to, self),
            _ => false,
        }
    }

    /// True if any piece of `by` attacks `square`.
    pub fn is_square_attacked(&self, square: Coordinate, by: Color) -> bool {
        square.is_valid() && self.pieces_of(by).any(|(from, piece)| piece.attacks(from, square, self))
    }

    /// Squares holding `by` pieces that attack `square`.
    pub fn attackers_of(&self, square: Coordinate, by: Color) -> Vec<Coordinate> {
        self.pieces_of(by)
            .filter(|(from, piece)| piece.attacks(*from, square, self))
            .map(|(from, _)| from)
            .collect()
    }

    /// A side without a king is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king) = self.king_square(color) else {
            return false;
        };
        self.is_square_attacked(king, color.opposite())
    }

    /// Whether `turn`'s king would be attacked after playing `from -> to`.
    ///
    /// The move is played on a copy with its full effects (en passant capture,
    /// castling rook), so `self` is never touched. Off-board squares or an
    /// empty source report `true`.
    pub fn would_be_in_check(&self, from: Coordinate, to: Coordinate, turn: Color) -> bool {
        if !from.is_valid() || !to.is_valid() || self.is_empty(from) {
            return true;
        }
        self.propose_move(from, to, None).is_in_check(turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn is_valid_move_requires_the_right_colour() {
        let position = Position::new_game();
        let e2 = Coordinate::new(2, 5);
        let e4 = Coordinate::new(4, 5);
        assert!(position.is_valid_move(e2, e4, Color::Light));
        assert!(!position.is_valid_move(e2, e4, Color::Dark));
        assert!(!position.is_valid_move(Coordinate::new(4, 4), e4, Color::Light));
        // Own piece on the destination.
        assert!(!position.is_valid_move(Coordinate::new(1, 1), Coordinate::new(2, 1), Color::Light));
    }

    #[test]
    fn rook_on_open_file_gives_check() {
        let (position, _) = parse_fen("4k3/8/8/8/8/8/8/4RK2 b - - 0 1").expect("valid FEN");
        assert!(position.is_in_check(Color::Dark));
        assert!(!position.is_in_check(Color::Light));
        assert_eq!(position.attackers_of(Coordinate::new(8, 5), Color::Light), vec![Coordinate::new(1, 5)]);
    }

    #[test]
    fn missing_king_is_never_in_check() {
        let (position, _) = parse_fen("8/8/8/8/8/8/8/R3K3 w - - 0 1").expect("valid FEN");
        assert!(!position.is_in_check(Color::Dark));
    }

    #[test]
    fn pinned_piece_may_not_leave_the_line() {
        let (position, _) = parse_fen("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1").expect("valid FEN");
        let before = position.clone();
        let e2 = Coordinate::new(2, 5);
        assert!(position.would_be_in_check(e2, Coordinate::new(3, 4), Color::Light));
        assert!(!position.would_be_in_check(Coordinate::new(1, 5), Coordinate::new(1, 4), Color::Light));
        assert_eq!(position, before);
    }

    #[test]
    fn would_be_in_check_is_true_and_pure_for_invalid_input() {
        let position = Position::new_game();
        let before = position.clone();
        assert!(position.would_be_in_check(Coordinate::new(0, 0), Coordinate::new(3, 3), Color::Light));
        assert!(position.would_be_in_check(Coordinate::new(4, 4), Coordinate::new(5, 4), Color::Light));
        assert_eq!(position, before);
    }
}
