//! Legal move enumeration and terminal-state detection.
//!
//! A legal move is a pseudo-legal destination from `Piece::possible_moves`
//! that passes `is_valid_move` and does not leave the mover in check.

use crate::board_state::chess_types::{Color, PieceKind};
use crate::board_state::coordinate::Coordinate;
use crate::board_state::position::Position;
use crate::errors::{ChessError, ChessResult};
use crate::moves::move_descriptions::ChessMove;

/// Situation of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InPlay,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl Position {
    /// Legal destinations of the `turn` piece on `from`.
    pub fn legal_destinations(&self, from: Coordinate, turn: Color) -> Vec<Coordinate> {
        let Some(piece) = self.get_piece(from).filter(|piece| piece.color == turn) else {
            return Vec::new();
        };
        piece
            .possible_moves(from, self)
            .into_iter()
            .filter(|to| self.is_valid_move(from, *to, turn) && !self.would_be_in_check(from, *to, turn))
            .collect()
    }

    /// Every legal move of `color`. Pawn moves onto the far rank appear once
    /// per promotion choice.
    pub fn legal_moves(&self, color: Color) -> Vec<ChessMove> {
        let mut moves = Vec::new();
        for (from, piece) in self.pieces_of(color) {
            let promotes = piece.kind == PieceKind::Pawn;
            for to in self.legal_destinations(from, color) {
                if promotes && to.rank() == color.promotion_rank() {
                    moves.extend(
                        PieceKind::PROMOTIONS
                            .iter()
                            .map(|kind| ChessMove::with_promotion(from, to, *kind)),
                    );
                } else {
                    moves.push(ChessMove::new(from, to));
                }
            }
        }
        moves
    }

    /// Stops at the first legal move found.
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.pieces_of(color).any(|(from, piece)| {
            piece
                .possible_moves(from, self)
                .into_iter()
                .any(|to| self.is_valid_move(from, to, color) && !self.would_be_in_check(from, to, color))
        })
    }

    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color)
    }

    pub fn is_in_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_move(color)
    }

    pub fn status(&self, color: Color) -> GameStatus {
        match (self.is_in_check(color), self.has_legal_move(color)) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::InPlay,
        }
    }

    /// Checks `from -> to` for `turn` and returns the normalised move.
    ///
    /// The promotion choice is kept only for a pawn reaching its far rank and
    /// only when it names a queen, rook, bishop or knight; otherwise it is
    /// dropped without error.
    pub fn validate_move(
        &self,
        from: Coordinate,
        to: Coordinate,
        turn: Color,
        promotion: Option<PieceKind>,
    ) -> ChessResult<ChessMove> {
        if !self.is_valid_move(from, to, turn) {
            return Err(ChessError::IllegalMove { from, to });
        }
        if self.would_be_in_check(from, to, turn) {
            return Err(ChessError::LeavesKingInCheck { from, to });
        }

        let promotes = self
            .get_piece(from)
            .is_some_and(|piece| piece.kind == PieceKind::Pawn && to.rank() == turn.promotion_rank());
        let promotion = promotion.filter(|kind| promotes && PieceKind::PROMOTIONS.contains(kind));

        Ok(ChessMove { from, to, promotion })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn twenty_moves_from_the_start() {
        let position = Position::new_game();
        assert_eq!(position.legal_moves(Color::Light).len(), 20);
        assert_eq!(position.legal_moves(Color::Dark).len(), 20);
        assert_eq!(position.status(Color::Light), GameStatus::InPlay);
    }

    #[test]
    fn back_rank_mate_is_checkmate() {
        // Black king h8 boxed in by its own pawns, white rook delivers mate on the back rank.
        let (position, _) = parse_fen("R6k/6pp/8/8/8/8/8/K7 b - - 0 1").expect("valid FEN");
        assert!(position.is_in_check(Color::Dark));
        assert!(position.is_in_checkmate(Color::Dark));
        assert!(!position.is_in_stalemate(Color::Dark));
        assert_eq!(position.status(Color::Dark), GameStatus::Checkmate);
    }

    #[test]
    fn rook_on_h1_mates_a_cornered_king() {
        // Kh8 with the white king on f7 covering g7/g8; Rh1 checks along the h-file.
        let (position, _) = parse_fen("7k/5K2/8/8/8/8/8/7R b - - 0 1").expect("valid FEN");
        assert!(position.is_in_checkmate(Color::Dark));
    }

    #[test]
    fn cornered_king_without_moves_is_stalemate() {
        let (position, _) = parse_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("valid FEN");
        assert!(!position.is_in_check(Color::Dark));
        assert!(position.is_in_stalemate(Color::Dark));
        assert!(!position.is_in_checkmate(Color::Dark));
        assert!(position.legal_moves(Color::Dark).is_empty());
    }

    #[test]
    fn checkmate_and_stalemate_never_overlap() {
        let fens = [
            "R6k/6pp/8/8/8/8/8/K7 b - - 0 1",
            "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1",
            "4k3/8/8/8/8/8/8/4R2K b - - 0 1",
        ];
        for fen in fens {
            let (position, side) = parse_fen(fen).expect("valid FEN");
            let no_moves = !position.has_legal_move(side);
            let mate = position.is_in_checkmate(side);
            let stale = position.is_in_stalemate(side);
            assert!(!(mate && stale), "{fen}");
            assert_eq!(no_moves, mate || stale, "{fen}");
        }
    }

    #[test]
    fn promotions_expand_into_four_moves() {
        let (position, _) = parse_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("valid FEN");
        let promotions: Vec<_> = position
            .legal_moves(Color::Light)
            .into_iter()
            .filter(|mv| mv.from == Coordinate::new(7, 1))
            .collect();
        assert_eq!(promotions.len(), 4);
        assert!(promotions.iter().all(|mv| mv.promotion.is_some()));
    }

    #[test]
    fn validate_move_reports_why_a_move_fails() {
        let (position, _) = parse_fen("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1").expect("valid FEN");
        let e2 = Coordinate::new(2, 5);
        assert_eq!(
            position.validate_move(e2, Coordinate::new(3, 4), Color::Light, None),
            Err(ChessError::LeavesKingInCheck {
                from: e2,
                to: Coordinate::new(3, 4)
            })
        );
        assert!(matches!(
            position.validate_move(e2, Coordinate::new(3, 5), Color::Light, None),
            Err(ChessError::IllegalMove { .. })
        ));

        let king_step = position
            .validate_move(Coordinate::new(1, 5), Coordinate::new(1, 4), Color::Light, Some(PieceKind::Queen))
            .expect("king may step aside");
        assert_eq!(king_step.promotion, None);
    }
}
