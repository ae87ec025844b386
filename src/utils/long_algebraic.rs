//! Long algebraic move text (`e2e4`, `e7e8q`) to and from `ChessMove`.

use crate::board_state::chess_types::PieceKind;
use crate::board_state::coordinate::Coordinate;
use crate::errors::{ChessError, ChessResult};
use crate::moves::move_descriptions::ChessMove;

pub fn move_to_long_algebraic(mv: &ChessMove) -> String {
    mv.to_string()
}

/// Parses `e2e4` style text. A trailing promotion letter must name a queen,
/// rook, bishop or knight in either case.
pub fn long_algebraic_to_move(text: &str) -> ChessResult<ChessMove> {
    let text = text.trim();
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(ChessError::InvalidMoveText(text.to_owned()));
    }

    let from: Coordinate = text[0..2].parse()?;
    let to: Coordinate = text[2..4].parse()?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(ch) => Some(
            PieceKind::promotion_from_symbol(ch).ok_or_else(|| ChessError::InvalidMoveText(text.to_owned()))?,
        ),
    };

    Ok(ChessMove { from, to, promotion })
}

impl std::str::FromStr for ChessMove {
    type Err = ChessError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        long_algebraic_to_move(text)
    }
}
