//! The authoritative, observable game board.
//!
//! `Board` wraps a `Position` and adds a revision counter plus the observer
//! registry. Read-only rule queries are reached through `Deref<Target =
//! Position>`; every mutation goes through a `Board` method, which bumps the
//! revision and notifies subscribers before returning.

use std::ops::Deref;
use std::sync::mpsc::Receiver;

use tracing::debug;

use crate::board_state::chess_rules::RuleOptions;
use crate::board_state::chess_types::{Color, PieceKind};
use crate::board_state::coordinate::Coordinate;
use crate::board_state::observers::{BoardChanged, ObserverRegistry, SubscriptionId};
use crate::board_state::piece::Piece;
use crate::board_state::position::Position;
use crate::errors::{ChessError, ChessResult};
use crate::move_generation::legal_move_apply::AppliedMove;
use crate::moves::move_descriptions::ValidatedMove;

#[derive(Debug, Default)]
pub struct Board {
    position: Position,
    revision: u64,
    observers: ObserverRegistry,
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RuleOptions) -> Self {
        Self::from_position(Position::with_options(options))
    }

    /// A board in the standard starting layout.
    pub fn new_game() -> Self {
        Self::from_position(Position::new_game())
    }

    pub fn from_position(position: Position) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Incremented by every mutation.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn subscribe(&mut self) -> (SubscriptionId, Receiver<BoardChanged>) {
        self.observers.subscribe()
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Validates `from -> to` for `turn` against the current revision.
    pub fn validate_move(
        &self,
        from: Coordinate,
        to: Coordinate,
        turn: Color,
        promotion: Option<PieceKind>,
    ) -> ChessResult<ValidatedMove> {
        let mv = self.position.validate_move(from, to, turn, promotion)?;
        Ok(ValidatedMove::new(mv, turn, self.revision))
    }

    /// Applies a move validated on this revision of the board.
    pub fn make_move(&mut self, validated: ValidatedMove) -> ChessResult<AppliedMove> {
        if validated.revision() != self.revision {
            return Err(ChessError::StaleMove {
                validated: validated.revision(),
                current: self.revision,
            });
        }

        let mv = validated.chess_move();
        let effects = self
            .position
            .apply_move(mv.from, mv.to, mv.promotion)
            .ok_or(ChessError::IllegalMove { from: mv.from, to: mv.to })?;
        debug!(side = %validated.color(), mv = %mv, ?effects, "move applied");
        self.changed();
        Ok(effects)
    }

    /// Setup-mode placement; see `Position::add_piece`. Notifies only when a
    /// piece was placed.
    pub fn add_piece(&mut self, symbol: char, pos: Coordinate) -> bool {
        let placed = self.position.add_piece(symbol, pos);
        if placed {
            debug!(%symbol, square = %pos, "piece added");
            self.changed();
        }
        placed
    }

    pub fn remove_piece(&mut self, pos: Coordinate) -> Option<Piece> {
        let removed = self.position.remove_piece(pos);
        if pos.is_valid() {
            debug!(square = %pos, removed = ?removed.map(|p| p.symbol()), "piece removed");
            self.changed();
        }
        removed
    }

    pub fn clear(&mut self) {
        self.position.clear();
        debug!("board cleared");
        self.changed();
    }

    /// Standard starting layout with fresh castling rights.
    pub fn setup_starting_position(&mut self) {
        self.position.setup_starting_position();
        debug!("board reset to starting position");
        self.changed();
    }

    /// Keeps the pieces but restores castling rights and forgets the last move.
    pub fn reset_history(&mut self) {
        self.position.reset_history();
        self.changed();
    }

    /// Switches rule options. Counts as a change, so moves validated under
    /// the old rules become stale.
    pub fn set_options(&mut self, options: RuleOptions) {
        self.position.set_options(options);
        debug!(?options, "rule options changed");
        self.changed();
    }

    fn changed(&mut self) {
        self.revision += 1;
        self.observers.notify(BoardChanged {
            revision: self.revision,
        });
    }
}

impl Deref for Board {
    type Target = Position;

    fn deref(&self) -> &Position {
        &self.position
    }
}
