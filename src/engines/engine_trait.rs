//! Player abstraction shared by humans and the automated opponents.
//!
//! Computer players only see the board through `Position`'s public query
//! surface and hand back a move; the game session validates and applies it.

use crate::board_state::chess_types::Color;
use crate::board_state::position::Position;
use crate::moves::move_descriptions::ChessMove;

pub trait Player: Send {
    fn name(&self) -> &str;

    /// Humans enter their moves through the command interface instead of
    /// `choose_move`.
    fn is_human(&self) -> bool {
        false
    }

    /// Picks a legal move for `color`, or `None` when there is none (or the
    /// player is human).
    fn choose_move(&mut self, position: &Position, color: Color) -> Option<ChessMove>;
}

/// Player whose moves come from outside.
#[derive(Debug, Default, Clone, Copy)]
pub struct HumanPlayer;

impl Player for HumanPlayer {
    fn name(&self) -> &str {
        "Human"
    }

    fn is_human(&self) -> bool {
        true
    }

    fn choose_move(&mut self, _position: &Position, _color: Color) -> Option<ChessMove> {
        None
    }
}
