//! Ad hoc placement and validation used by setup mode.

use crate::board_state::chess_types::{Color, PieceKind};
use crate::board_state::coordinate::Coordinate;
use crate::board_state::piece::Piece;
use crate::board_state::position::Position;
use crate::errors::{ChessError, ChessResult};

impl Position {
    /// Places the piece named by `symbol` on `pos`, replacing any occupant.
    /// Returns `false` and changes nothing for an unknown symbol or an
    /// off-board square.
    pub fn add_piece(&mut self, symbol: char, pos: Coordinate) -> bool {
        if !pos.is_valid() {
            return false;
        }
        let Some(piece) = Piece::from_symbol(symbol) else {
            return false;
        };
        self.set(pos, Some(piece));
        true
    }

    /// Removes and returns the piece on `pos`.
    pub fn remove_piece(&mut self, pos: Coordinate) -> Option<Piece> {
        self.take(pos)
    }

    /// Empties every square and forgets all movement history.
    pub fn clear(&mut self) {
        for pos in Coordinate::all() {
            self.set(pos, None);
        }
        self.reset_history();
    }

    /// Number of pieces on the board matching `symbol` exactly (case counts).
    pub fn count_pieces(&self, symbol: char) -> usize {
        self.pieces().filter(|(_, piece)| piece.symbol() == symbol).count()
    }

    /// True if any pawn of either colour stands on rank 1 or rank 8.
    pub fn has_pawns_on_end_ranks(&self) -> bool {
        self.pieces()
            .any(|(pos, piece)| piece.kind == PieceKind::Pawn && (pos.rank() == 1 || pos.rank() == 8))
    }

    /// Checks that the position can start a game: exactly one king per side,
    /// no pawn on an end rank and neither king in check.
    pub fn validate_setup(&self) -> ChessResult<()> {
        for color in Color::BOTH {
            let kings = self
                .pieces_of(color)
                .filter(|(_, piece)| piece.kind == PieceKind::King)
                .count();
            if kings != 1 {
                return Err(ChessError::InvalidSetup(format!(
                    "{color} must have exactly one king, found {kings}"
                )));
            }
        }
        if self.has_pawns_on_end_ranks() {
            return Err(ChessError::InvalidSetup("pawns may not stand on the first or last rank".to_owned()));
        }
        for color in Color::BOTH {
            if self.is_in_check(color) {
                return Err(ChessError::InvalidSetup(format!("{color} king is in check")));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn is_valid_setup(&self) -> bool {
        self.validate_setup().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kings_only() -> Position {
        let mut position = Position::new_empty();
        assert!(position.add_piece('K', Coordinate::new(1, 5)));
        assert!(position.add_piece('k', Coordinate::new(8, 5)));
        position
    }

    #[test]
    fn add_piece_overwrites_and_rejects_bad_input() {
        let mut position = kings_only();
        assert!(position.add_piece('Q', Coordinate::new(4, 4)));
        assert!(position.add_piece('n', Coordinate::new(4, 4)));
        assert_eq!(position.get_piece(Coordinate::new(4, 4)).map(|p| p.symbol()), Some('n'));

        let before = position.clone();
        assert!(!position.add_piece('x', Coordinate::new(4, 5)));
        assert!(!position.add_piece('Q', Coordinate::new(9, 1)));
        assert_eq!(position, before);
    }

    #[test]
    fn count_pieces_is_case_sensitive() {
        let position = Position::new_game();
        assert_eq!(position.count_pieces('P'), 8);
        assert_eq!(position.count_pieces('p'), 8);
        assert_eq!(position.count_pieces('K'), 1);
        assert_eq!(position.count_pieces('x'), 0);
    }

    #[test]
    fn two_white_kings_are_rejected() {
        let mut position = kings_only();
        position.add_piece('K', Coordinate::new(3, 3));
        assert!(!position.is_valid_setup());
    }

    #[test]
    fn missing_king_is_rejected() {
        let mut position = kings_only();
        position.remove_piece(Coordinate::new(8, 5));
        assert!(matches!(position.validate_setup(), Err(ChessError::InvalidSetup(_))));
    }

    #[test]
    fn pawn_on_rank_one_is_rejected() {
        let mut position = kings_only();
        position.add_piece('P', Coordinate::new(1, 1));
        assert!(position.has_pawns_on_end_ranks());
        assert!(!position.is_valid_setup());
    }

    #[test]
    fn king_in_check_is_rejected() {
        let mut position = kings_only();
        position.add_piece('r', Coordinate::new(4, 5));
        assert!(!position.is_valid_setup());
    }

    #[test]
    fn plain_kings_and_the_start_position_are_valid() {
        assert!(kings_only().is_valid_setup());
        assert!(Position::new_game().is_valid_setup());
    }

    #[test]
    fn clear_forgets_history() {
        let mut position = Position::new_game();
        position.apply_move(Coordinate::new(1, 5), Coordinate::new(2, 5), None);
        position.clear();
        assert_eq!(position, Position::new_empty());
    }
}
