//! FEN-to-Position parser.
//!
//! The referee keeps no clocks and no explicit castling-rights set, so the
//! FEN fields are mapped onto the state it does keep: missing castling
//! letters mark the matching rook as moved, an en passant square becomes the
//! last-move record of the double step that produced it, and pawns standing
//! off their start rank are marked as moved. The clock fields are optional
//! and validated but not stored.

use crate::board_state::castling_flags::CastleSide;
use crate::board_state::chess_types::{Color, PieceKind};
use crate::board_state::coordinate::Coordinate;
use crate::board_state::piece::Piece;
use crate::board_state::position::{LastMove, Position};
use crate::errors::{ChessError, ChessResult};
use crate::utils::algebraic::algebraic_to_coordinate;

/// Parses a FEN string into a position and the side to move.
pub fn parse_fen(fen: &str) -> ChessResult<(Position, Color)> {
    let invalid = |reason: &str| ChessError::InvalidFen(format!("{reason}: {fen}"));
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en passant square"))?;
    for clock in parts.by_ref().take(2) {
        clock
            .parse::<u16>()
            .map_err(|_| invalid("clock fields must be numbers"))?;
    }
    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut position = Position::new_empty();
    parse_board(board_part, &mut position).map_err(|reason| invalid(&reason))?;
    let side = parse_side_to_move(side_part).ok_or_else(|| invalid("side to move must be w or b"))?;
    parse_castling_rights(castling_part, &mut position).map_err(|reason| invalid(&reason))?;
    position.last_move = parse_en_passant_square(en_passant_part, side).map_err(|reason| invalid(&reason))?;

    Ok((position, side))
}

fn parse_board(board_part: &str, position: &mut Position) -> Result<(), String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("board layout must contain 8 ranks".to_owned());
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 8 - fen_rank_idx as i8;
        let mut file = 1usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("invalid empty-square count '{ch}'"));
                }
                file += empty_count as usize;
                if file > 9 {
                    return Err(format!("rank {rank} has too many files"));
                }
                continue;
            }

            let mut piece = Piece::from_symbol(ch).ok_or_else(|| format!("invalid piece character '{ch}'"))?;
            if file > 8 {
                return Err(format!("rank {rank} has too many files"));
            }
            if piece.kind == PieceKind::Pawn && rank != piece.color.pawn_rank() {
                piece.has_moved = true;
            }
            position.set(Coordinate::new(rank, file as i8), Some(piece));
            file += 1;
        }

        if file != 9 {
            return Err(format!("rank {rank} does not sum to 8 files"));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Option<Color> {
    match side_part {
        "w" => Some(Color::Light),
        "b" => Some(Color::Dark),
        _ => None,
    }
}

fn parse_castling_rights(castling_part: &str, position: &mut Position) -> Result<(), String> {
    let mut granted = Vec::new();
    if castling_part != "-" {
        for ch in castling_part.chars() {
            let right = match ch {
                'K' => (Color::Light, CastleSide::KingSide),
                'Q' => (Color::Light, CastleSide::QueenSide),
                'k' => (Color::Dark, CastleSide::KingSide),
                'q' => (Color::Dark, CastleSide::QueenSide),
                _ => return Err(format!("invalid castling rights character '{ch}'")),
            };
            granted.push(right);
        }
    }

    for color in Color::BOTH {
        for side in CastleSide::BOTH {
            if !granted.contains(&(color, side)) {
                position.castling.mark_rook_moved(color, side);
            }
        }
    }
    Ok(())
}

/// The en passant target square `e3` means Light just played `e2e4`.
fn parse_en_passant_square(en_passant_part: &str, side_to_move: Color) -> Result<Option<LastMove>, String> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let target = algebraic_to_coordinate(en_passant_part).map_err(|err| err.to_string())?;
    let pusher = side_to_move.opposite();
    if target.rank() != pusher.pawn_rank() + pusher.forward() {
        return Err(format!("en passant square {target} does not match the side to move"));
    }

    Ok(Some(LastMove {
        from: Coordinate::new(pusher.pawn_rank(), target.file()),
        to: Coordinate::new(target.rank() + pusher.forward(), target.file()),
    }))
}
