//! Conversions between algebraic square names (`e4`) and `Coordinate`.

use crate::board_state::coordinate::Coordinate;
use crate::errors::{ChessError, ChessResult};

/// Parses a square such as `"e4"`; the file letter may be uppercase.
pub fn algebraic_to_coordinate(square: &str) -> ChessResult<Coordinate> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraicSquare(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraicSquare(square.to_owned()));
    }

    Ok(Coordinate::new((rank - b'0') as i8, (file - b'a' + 1) as i8))
}

/// Square name for a valid coordinate.
pub fn coordinate_to_algebraic(coordinate: Coordinate) -> ChessResult<String> {
    if !coordinate.is_valid() {
        return Err(ChessError::InvalidFileOrRank {
            rank: coordinate.rank(),
            file: coordinate.file(),
        });
    }
    let file_char = char::from(b'a' + (coordinate.file() - 1) as u8);
    Ok(format!("{file_char}{}", coordinate.rank()))
}
