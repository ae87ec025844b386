//! Canonical chess-rule constants and the rule-engine option table.

use crate::board_state::chess_types::PieceKind;
use crate::errors::{ChessError, ChessResult};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// File of both kings in the starting layout (the e-file).
pub const KING_HOME_FILE: i8 = 5;

/// Back-rank layout from the a-file to the h-file.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Option name accepted by [`RuleOptions::set_option`].
pub const OPTION_CASTLING_TRANSIT_CHECK: &str = "CastlingTransitCheck";

/// Switches for rule details where the engine deliberately departs from
/// tournament chess.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RuleOptions {
    /// When set, castling also requires the square the king crosses to be
    /// unattacked. Off by default: only the king's starting square is checked.
    pub verify_castling_transit: bool,
}

impl RuleOptions {
    /// Tournament rules, including the transit-square castling check.
    pub const fn strict() -> Self {
        Self {
            verify_castling_transit: true,
        }
    }

    /// Sets an option by name, engine-option style.
    pub fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        let invalid = || ChessError::InvalidOption {
            name: name.to_owned(),
            value: value.to_owned(),
        };

        if name.eq_ignore_ascii_case(OPTION_CASTLING_TRANSIT_CHECK) {
            self.verify_castling_transit = parse_bool(value).ok_or_else(invalid)?;
            Ok(())
        } else {
            Err(invalid())
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "1" | "yes" => Some(true),
        "false" | "off" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preserves_lenient_castling() {
        assert!(!RuleOptions::default().verify_castling_transit);
        assert!(RuleOptions::strict().verify_castling_transit);
    }

    #[test]
    fn set_option_by_name() {
        let mut options = RuleOptions::default();
        options
            .set_option("castlingtransitcheck", "on")
            .expect("known option should set");
        assert!(options.verify_castling_transit);

        assert!(options.set_option("CastlingTransitCheck", "maybe").is_err());
        assert!(options.set_option("Hash", "64").is_err());
    }
}
