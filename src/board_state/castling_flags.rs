use crate::board_state::chess_rules::KING_HOME_FILE;
use crate::board_state::chess_types::Color;

/// Wing on which a castle happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Side implied by a two-file king move, if the move is one.
    pub fn from_king_step(from_file: i8, to_file: i8) -> Option<Self> {
        match to_file.checked_sub(from_file)? {
            2 => Some(CastleSide::KingSide),
            -2 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }

    #[inline]
    pub const fn rook_home_file(self) -> i8 {
        match self {
            CastleSide::KingSide => 8,
            CastleSide::QueenSide => 1,
        }
    }

    #[inline]
    pub const fn king_destination_file(self) -> i8 {
        match self {
            CastleSide::KingSide => KING_HOME_FILE + 2,
            CastleSide::QueenSide => KING_HOME_FILE - 2,
        }
    }

    /// File the king crosses on its way; also where the rook lands.
    #[inline]
    pub const fn transit_file(self) -> i8 {
        match self {
            CastleSide::KingSide => KING_HOME_FILE + 1,
            CastleSide::QueenSide => KING_HOME_FILE - 1,
        }
    }

    /// Files strictly between king and rook.
    pub fn between_files(self) -> std::ops::RangeInclusive<i8> {
        match self {
            CastleSide::KingSide => (KING_HOME_FILE + 1)..=7,
            CastleSide::QueenSide => 2..=(KING_HOME_FILE - 1),
        }
    }
}

/// Movement history of both kings and the four original rooks.
///
/// Flags only ever go from `false` to `true` during a game; `reset` is the
/// single way back.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CastlingFlags {
    pub light_king_moved: bool,
    pub dark_king_moved: bool,
    pub light_kingside_rook_moved: bool,
    pub light_queenside_rook_moved: bool,
    pub dark_kingside_rook_moved: bool,
    pub dark_queenside_rook_moved: bool,
}

impl CastlingFlags {
    #[inline]
    pub fn king_moved(&self, color: Color) -> bool {
        match color {
            Color::Light => self.light_king_moved,
            Color::Dark => self.dark_king_moved,
        }
    }

    #[inline]
    pub fn rook_moved(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::Light, CastleSide::KingSide) => self.light_kingside_rook_moved,
            (Color::Light, CastleSide::QueenSide) => self.light_queenside_rook_moved,
            (Color::Dark, CastleSide::KingSide) => self.dark_kingside_rook_moved,
            (Color::Dark, CastleSide::QueenSide) => self.dark_queenside_rook_moved,
        }
    }

    /// True while neither the king nor the rook of `side` has moved.
    #[inline]
    pub fn right(&self, color: Color, side: CastleSide) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, side)
    }

    pub fn mark_king_moved(&mut self, color: Color) {
        match color {
            Color::Light => self.light_king_moved = true,
            Color::Dark => self.dark_king_moved = true,
        }
    }

    pub fn mark_rook_moved(&mut self, color: Color, side: CastleSide) {
        match (color, side) {
            (Color::Light, CastleSide::KingSide) => self.light_kingside_rook_moved = true,
            (Color::Light, CastleSide::QueenSide) => self.light_queenside_rook_moved = true,
            (Color::Dark, CastleSide::KingSide) => self.dark_kingside_rook_moved = true,
            (Color::Dark, CastleSide::QueenSide) => self.dark_queenside_rook_moved = true,
        }
    }

    /// Revokes the right tied to a rook standing on `(rank, file)` if that is
    /// one of `color`'s original rook squares.
    pub fn mark_rook_square(&mut self, color: Color, rank: i8, file: i8) {
        if rank != color.back_rank() {
            return;
        }
        for side in CastleSide::BOTH {
            if file == side.rook_home_file() {
                self.mark_rook_moved(color, side);
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
