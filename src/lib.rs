//! Crate root module declarations for the chess referee.
//!
//! The rule engine (board state, piece movement and move legality)
//! is usable on its own; the game session, automated players and the text
//! command interface are layered on top of it.

pub mod errors;

pub mod board_state {
    pub mod board;
    pub mod castling_flags;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod coordinate;
    pub mod observers;
    pub mod piece;
    pub mod position;
    pub mod setup;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod piece_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod slider_rays;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_special;
    pub mod perft;
}

pub mod engines {
    pub mod engine_factory;
    pub mod engine_greedy;
    pub mod engine_priority;
    pub mod engine_random;
    pub mod engine_trait;
    pub mod move_heuristics;
}

pub mod game {
    pub mod game;
    pub mod scores;
}

pub mod interface {
    pub mod command_loop;
    pub mod text_display;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_board;
}
