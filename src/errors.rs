//! Errors used throughout the referee.
//!
//! Rule queries (`is_valid_move`, `is_in_check`, ...) never fail; they answer
//! with `bool` or `Option`. `ChessError` covers the surfaces around them:
//! notation parsing, the validated-move API, session management and option
//! handling.

use crate::board_state::coordinate::Coordinate;

/// Unified error type for the crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// A square string such as `"e9"` could not be parsed.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraicSquare(String),

    /// Rank or file outside `1..=8`.
    #[error("rank {rank} / file {file} is off the board")]
    InvalidFileOrRank { rank: i8, file: i8 },

    /// A piece letter outside `KQRBNP` (either case).
    #[error("invalid piece symbol '{0}'")]
    InvalidPieceSymbol(char),

    /// Move text such as `"e2e4"` could not be parsed.
    #[error("invalid move text: {0}")]
    InvalidMoveText(String),

    /// FEN string rejected by the parser.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// The move is not shape-legal for the side to move.
    #[error("illegal move {from}{to}")]
    IllegalMove { from: Coordinate, to: Coordinate },

    /// The move would leave the mover's own king attacked.
    #[error("move {from}{to} would leave the king in check")]
    LeavesKingInCheck { from: Coordinate, to: Coordinate },

    /// A validated move was applied after the board changed underneath it.
    #[error("move was validated against revision {validated} but the board is at revision {current}")]
    StaleMove { validated: u64, current: u64 },

    /// The side to move has no legal move.
    #[error("no legal moves available")]
    NoLegalMoves,

    /// Player type string did not name `human` or `computer1..4`.
    #[error("invalid player type: {0}")]
    InvalidPlayerType(String),

    /// The current player is human and cannot be asked for a move.
    #[error("current player is not a computer")]
    NotAComputerPlayer,

    #[error("no game in progress")]
    NoGameInProgress,

    #[error("a game is already in progress")]
    GameInProgress,

    /// Setup mode was left with a position that cannot start a game.
    #[error("invalid setup: {0}")]
    InvalidSetup(String),

    /// Unknown option name or unparsable option value.
    #[error("invalid option {name}={value}")]
    InvalidOption { name: String, value: String },
}

/// Result alias used by the fallible surfaces of the crate.
pub type ChessResult<T> = Result<T, ChessError>;
