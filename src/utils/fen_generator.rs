use crate::board_state::castling_flags::CastleSide;
use crate::board_state::chess_rules::KING_HOME_FILE;
use crate::board_state::chess_types::{Color, PieceKind};
use crate::board_state::coordinate::Coordinate;
use crate::board_state::position::Position;

/// FEN for `position` with `side_to_move` to play. Clocks are not tracked and
/// are always written as `0 1`.
pub fn generate_fen(position: &Position, side_to_move: Color) -> String {
    let side = match side_to_move {
        Color::Light => "w",
        Color::Dark => "b",
    };

    format!(
        "{} {} {} {} 0 1",
        generate_board_field(position),
        side,
        generate_castling_field(position),
        generate_en_passant_field(position)
    )
}

fn generate_board_field(position: &Position) -> String {
    let mut out = String::new();

    for rank in (1..=8).rev() {
        let mut empty_count = 0u8;

        for file in 1..=8 {
            match position.get_piece(Coordinate::new(rank, file)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.symbol());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if rank > 1 {
            out.push('/');
        }
    }

    out
}

/// A right is written only while the flags allow it and king and rook still
/// stand on their home squares.
fn generate_castling_field(position: &Position) -> String {
    let mut out = String::new();

    for color in Color::BOTH {
        for side in CastleSide::BOTH {
            let rank = color.back_rank();
            let king_home = position
                .get_piece(Coordinate::new(rank, KING_HOME_FILE))
                .is_some_and(|p| p.kind == PieceKind::King && p.color == color);
            let rook_home = position
                .get_piece(Coordinate::new(rank, side.rook_home_file()))
                .is_some_and(|p| p.kind == PieceKind::Rook && p.color == color);

            if king_home && rook_home && position.castling_flags().right(color, side) {
                let letter = match side {
                    CastleSide::KingSide => 'k',
                    CastleSide::QueenSide => 'q',
                };
                out.push(match color {
                    Color::Light => letter.to_ascii_uppercase(),
                    Color::Dark => letter,
                });
            }
        }
    }

    if out.is_empty() {
        out.push('-');
    }
    out
}

fn generate_en_passant_field(position: &Position) -> String {
    let Some(last) = position.last_move() else {
        return "-".to_owned();
    };
    let Some(pawn) = position.get_piece(last.to).filter(|p| p.kind == PieceKind::Pawn) else {
        return "-".to_owned();
    };

    let double_step = last.from.file() == last.to.file()
        && last.from.rank() == pawn.color.pawn_rank()
        && last.to.rank() - last.from.rank() == 2 * pawn.color.forward();
    if !double_step {
        return "-".to_owned();
    }

    Coordinate::new(last.from.rank() + pawn.color.forward(), last.from.file()).to_string()
}
