use crate::board_state::chess_types::{Color, PieceKind};

/// A piece standing on the board.
///
/// Movement rules live in `crate::moves`; this record only carries identity
/// and the movement-history flag used for pawn double steps and castling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    /// Builds an unmoved piece from its symbol: uppercase is light, lowercase dark.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        let kind = PieceKind::from_letter(symbol)?;
        let color = if symbol.is_ascii_uppercase() {
            Color::Light
        } else {
            Color::Dark
        };
        Some(Self::new(kind, color))
    }

    /// Display symbol derived from kind and colour, e.g. `K` or `n`.
    #[inline]
    pub fn symbol(&self) -> char {
        symbol_for(self.kind, self.color)
    }

    /// Independent copy with the same kind, colour and movement history.
    #[inline]
    pub fn duplicate(&self) -> Piece {
        *self
    }

    pub fn unicode(&self) -> char {
        match (self.color, self.kind) {
            (Color::Light, PieceKind::Pawn) => '♙',
            (Color::Light, PieceKind::Knight) => '♘',
            (Color::Light, PieceKind::Bishop) => '♗',
            (Color::Light, PieceKind::Rook) => '♖',
            (Color::Light, PieceKind::Queen) => '♕',
            (Color::Light, PieceKind::King) => '♔',
            (Color::Dark, PieceKind::Pawn) => '♟',
            (Color::Dark, PieceKind::Knight) => '♞',
            (Color::Dark, PieceKind::Bishop) => '♝',
            (Color::Dark, PieceKind::Rook) => '♜',
            (Color::Dark, PieceKind::Queen) => '♛',
            (Color::Dark, PieceKind::King) => '♚',
        }
    }
}

#[inline]
pub fn symbol_for(kind: PieceKind, color: Color) -> char {
    match color {
        Color::Light => kind.letter().to_ascii_uppercase(),
        Color::Dark => kind.letter(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_case_encodes_colour() {
        let king = Piece::from_symbol('K').expect("K is a piece");
        assert_eq!(king.kind, PieceKind::King);
        assert_eq!(king.color, Color::Light);
        assert_eq!(king.symbol(), 'K');

        let knight = Piece::from_symbol('n').expect("n is a piece");
        assert_eq!(knight.color, Color::Dark);
        assert_eq!(knight.symbol(), 'n');

        assert!(Piece::from_symbol('x').is_none());
        assert!(Piece::from_symbol('1').is_none());
    }

    #[test]
    fn duplicate_keeps_movement_history() {
        let mut rook = Piece::new(PieceKind::Rook, Color::Dark);
        rook.has_moved = true;
        let copy = rook.duplicate();
        assert_eq!(copy, rook);
        assert!(copy.has_moved);
    }
}
