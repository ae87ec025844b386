//! Core board position representation.
//!
//! `Position` is a plain value: the 8×8 occupancy grid, the castling history,
//! the last-move record used for en passant, and the rule options. Every rule
//! query is answered from a `&Position`, and hypothetical positions for king
//! safety checks are produced by cloning it, so simulation can never leave
//! the original half-modified.
//!
//! The rule queries themselves are spread over `crate::move_generation`
//! (checks, special moves, legal move enumeration and move application) and
//! `crate::board_state::setup` (setup-mode placement and validation).

use crate::board_state::castling_flags::CastlingFlags;
use crate::board_state::chess_rules::{RuleOptions, BACK_RANK_LAYOUT};
use crate::board_state::chess_types::{Color, PieceKind};
use crate::board_state::coordinate::Coordinate;
use crate::board_state::piece::Piece;

/// Source and destination of the most recently applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LastMove {
    pub from: Coordinate,
    pub to: Coordinate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Position {
    // [rank - 1][file - 1]
    grid: [[Option<Piece>; 8]; 8],

    pub(crate) last_move: Option<LastMove>,
    pub(crate) castling: CastlingFlags,
    pub(crate) options: RuleOptions,
}

impl Position {
    /// An empty board with default rule options.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn with_options(options: RuleOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// The standard starting layout.
    pub fn new_game() -> Self {
        let mut position = Self::new_empty();
        position.setup_starting_position();
        position
    }

    /// Replaces the contents with the standard starting layout and forgets all
    /// movement history. Rule options are kept.
    pub fn setup_starting_position(&mut self) {
        self.clear();
        for color in Color::BOTH {
            for (idx, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                let file = idx as i8 + 1;
                self.set(Coordinate::new(color.back_rank(), file), Some(Piece::new(*kind, color)));
                self.set(
                    Coordinate::new(color.pawn_rank(), file),
                    Some(Piece::new(PieceKind::Pawn, color)),
                );
            }
        }
    }

    /// Forgets the last move and restores every castling right.
    pub fn reset_history(&mut self) {
        self.last_move = None;
        self.castling.reset();
    }

    /// Piece on `pos`; `None` for empty or off-board squares.
    #[inline]
    pub fn get_piece(&self, pos: Coordinate) -> Option<&Piece> {
        if !pos.is_valid() {
            return None;
        }
        let (row, col) = pos.grid_index();
        self.grid[row][col].as_ref()
    }

    #[inline]
    pub fn is_empty(&self, pos: Coordinate) -> bool {
        self.get_piece(pos).is_none()
    }

    /// True when `pos` holds a piece of `color`.
    #[inline]
    pub fn is_occupied_by(&self, pos: Coordinate, color: Color) -> bool {
        self.get_piece(pos).is_some_and(|piece| piece.color == color)
    }

    /// Writes a cell; off-board coordinates are ignored.
    #[inline]
    pub(crate) fn set(&mut self, pos: Coordinate, piece: Option<Piece>) {
        if !pos.is_valid() {
            return;
        }
        let (row, col) = pos.grid_index();
        self.grid[row][col] = piece;
    }

    /// Empties a cell and hands back its previous occupant.
    #[inline]
    pub(crate) fn take(&mut self, pos: Coordinate) -> Option<Piece> {
        if !pos.is_valid() {
            return None;
        }
        let (row, col) = pos.grid_index();
        self.grid[row][col].take()
    }

    /// All occupied squares, rank 1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, &Piece)> + '_ {
        Coordinate::all().filter_map(move |pos| self.get_piece(pos).map(|piece| (pos, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Coordinate, &Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// First king of `color` found scanning from a1.
    pub fn king_square(&self, color: Color) -> Option<Coordinate> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(pos, _)| pos)
    }

    #[inline]
    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    #[inline]
    pub fn castling_flags(&self) -> &CastlingFlags {
        &self.castling
    }

    #[inline]
    pub fn options(&self) -> RuleOptions {
        self.options
    }

    #[inline]
    pub fn set_options(&mut self, options: RuleOptions) {
        self.options = options;
    }
}
