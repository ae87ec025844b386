//! Side and piece-kind enums shared by every layer of the referee.

use std::fmt;

/// Side of a piece or side to move. `Light` moves first and is written with
/// uppercase symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::Light, Color::Dark];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Rank delta of a single pawn step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// Rank holding this side's king and rooks in the starting layout.
    #[inline]
    pub const fn back_rank(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => 8,
        }
    }

    #[inline]
    pub const fn pawn_rank(self) -> i8 {
        match self {
            Color::Light => 2,
            Color::Dark => 7,
        }
    }

    /// Far rank on which this side's pawns promote.
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        match self {
            Color::Light => 8,
            Color::Dark => 1,
        }
    }

    /// Parses `white` / `black` in any case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "white" | "w" => Some(Color::Light),
            "black" | "b" => Some(Color::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "White"),
            Color::Dark => write!(f, "Black"),
        }
    }
}

/// Piece kind (colour is carried separately by `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Pieces a pawn may become, in the order they are offered.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Lowercase letter used in symbols and move text.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Letter lookup ignoring case.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Promotion choice named by `symbol`; kings, pawns and unknown letters
    /// yield `None`.
    pub fn promotion_from_symbol(symbol: char) -> Option<Self> {
        Self::from_letter(symbol).filter(|kind| Self::PROMOTIONS.contains(kind))
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{name}")
    }
}
