//! Text renderers for a `Position`.
//!
//! The ASCII form prints ranks 8 down to 1, each prefixed by its digit. Empty
//! light squares are blanks and empty dark squares underscores, followed by a
//! blank line and the file letters.

use crate::board_state::coordinate::Coordinate;
use crate::board_state::position::Position;

pub fn render_board(position: &Position) -> String {
    render_with(position, |piece| piece.symbol())
}

/// Same layout with Unicode chess glyphs in place of letters.
pub fn render_board_unicode(position: &Position) -> String {
    render_with(position, |piece| piece.unicode())
}

fn render_with(position: &Position, glyph: impl Fn(&crate::board_state::piece::Piece) -> char) -> String {
    let mut out = String::new();

    for rank in (1..=8).rev() {
        out.push(char::from(b'0' + rank as u8));
        out.push(' ');
        for file in 1..=8 {
            let pos = Coordinate::new(rank, file);
            out.push(match position.get_piece(pos) {
                Some(piece) => glyph(piece),
                None if pos.is_light_square() => ' ',
                None => '_',
            });
        }
        out.push('\n');
    }

    out.push_str("\n  abcdefgh\n");
    out
}
