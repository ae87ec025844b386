//! Move values passed between the rule engine and its callers.

use std::fmt;

use crate::board_state::chess_types::{Color, PieceKind};
use crate::board_state::coordinate::Coordinate;

/// A move request: source, destination and optional promotion choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Coordinate,
    pub to: Coordinate,
    pub promotion: Option<PieceKind>,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Coordinate, to: Coordinate) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Coordinate, to: Coordinate, promotion: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }
}

/// Long algebraic text, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}

/// A move that passed shape and king-safety validation for `color` on a
/// specific board revision.
///
/// Only `Board::validate_move` creates these, and `Board::make_move` accepts
/// nothing else, so an unchecked move can never reach the mutation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedMove {
    mv: ChessMove,
    color: Color,
    revision: u64,
}

impl ValidatedMove {
    pub(crate) const fn new(mv: ChessMove, color: Color, revision: u64) -> Self {
        Self { mv, color, revision }
    }

    #[inline]
    pub const fn chess_move(&self) -> ChessMove {
        self.mv
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Board revision the move was checked against.
    #[inline]
    pub const fn revision(&self) -> u64 {
        self.revision
    }
}
