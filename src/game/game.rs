//! Game session: players, turn order, scoring and setup mode around a `Board`.
//!
//! Every move goes through `Board::validate_move` before it is applied, for
//! humans and computers alike. After each move the opponent's situation is
//! checked for the end of the game or for check.

use std::sync::mpsc::Receiver;

use tracing::{debug, info};

use crate::board_state::board::Board;
use crate::board_state::chess_rules::RuleOptions;
use crate::board_state::chess_types::{Color, PieceKind};
use crate::board_state::coordinate::Coordinate;
use crate::board_state::observers::{BoardChanged, SubscriptionId};
use crate::board_state::piece::Piece;
use crate::engines::engine_factory::{create_player, PlayerKind, PlayerRngSource};
use crate::engines::engine_trait::Player;
use crate::errors::{ChessError, ChessResult};
use crate::game::scores::Scores;
use crate::move_generation::legal_move_generator::GameStatus;
use crate::moves::move_descriptions::ChessMove;

/// What a move led to, seen from the side that now has to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Continue { in_check: bool },
    Checkmate { winner: Color },
    Stalemate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub mover: Color,
    pub mv: ChessMove,
    pub outcome: MoveOutcome,
}

pub struct Game {
    board: Board,
    players: Option<[Box<dyn Player>; 2]>,
    turn: Color,
    in_progress: bool,
    setup_active: bool,
    from_setup: bool,
    scores: Scores,
    rngs: PlayerRngSource,
}

impl Game {
    /// A session with no game running. `seed` makes computer players
    /// reproducible.
    pub fn new(options: RuleOptions, seed: Option<u64>) -> Self {
        let mut board = Board::with_options(options);
        board.setup_starting_position();
        Self {
            board,
            players: None,
            turn: Color::Light,
            in_progress: false,
            setup_active: false,
            from_setup: false,
            scores: Scores::default(),
            rngs: PlayerRngSource::new(seed),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn subscribe(&mut self) -> (SubscriptionId, Receiver<BoardChanged>) {
        self.board.subscribe()
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.board.unsubscribe(id)
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    #[inline]
    pub fn is_setup_active(&self) -> bool {
        self.setup_active
    }

    #[inline]
    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn set_options(&mut self, options: RuleOptions) {
        self.board.set_options(options);
    }

    /// Starts a game. A board prepared in setup mode is played from as is,
    /// with its chosen side to move; otherwise the standard layout is set up
    /// and White begins. Any game still running is abandoned unscored.
    pub fn start(&mut self, white: PlayerKind, black: PlayerKind) -> ChessResult<Color> {
        if self.setup_active {
            return Err(ChessError::InvalidSetup("finish setup mode with `done` first".to_owned()));
        }

        self.players = Some([
            create_player(white, self.rngs.next_rng()),
            create_player(black, self.rngs.next_rng()),
        ]);

        if self.from_setup {
            self.board.reset_history();
            self.from_setup = false;
        } else {
            self.board.setup_starting_position();
            self.turn = Color::Light;
        }

        self.in_progress = true;
        info!(%white, %black, first = %self.turn, "game started");
        Ok(self.turn)
    }

    /// Plays a move typed by a human. A pawn reaching the far rank without a
    /// promotion choice becomes a queen.
    pub fn make_player_move(
        &mut self,
        from: Coordinate,
        to: Coordinate,
        promotion: Option<PieceKind>,
    ) -> ChessResult<MoveReport> {
        self.ensure_in_progress()?;

        let reaches_far_rank = self
            .board
            .get_piece(from)
            .is_some_and(|piece| piece.kind == PieceKind::Pawn && to.rank() == self.turn.promotion_rank());
        let promotion = match promotion {
            None if reaches_far_rank => Some(PieceKind::Queen),
            other => other,
        };

        self.play(from, to, promotion)
    }

    /// Asks the computer whose turn it is for a move and plays it.
    pub fn make_computer_move(&mut self) -> ChessResult<MoveReport> {
        self.ensure_in_progress()?;

        let turn = self.turn;
        let players = self.players.as_mut().ok_or(ChessError::NoGameInProgress)?;
        let player = &mut players[turn.index()];
        if player.is_human() {
            return Err(ChessError::NotAComputerPlayer);
        }

        let mv = player
            .choose_move(self.board.position(), turn)
            .ok_or(ChessError::NoLegalMoves)?;
        debug!(player = player.name(), %mv, "computer move");
        self.play(mv.from, mv.to, mv.promotion)
    }

    /// The side to move gives up; returns the winner.
    pub fn resign(&mut self) -> ChessResult<Color> {
        self.ensure_in_progress()?;
        let winner = self.turn.opposite();
        self.scores.record_win(winner);
        self.in_progress = false;
        info!(loser = %self.turn, %winner, "resigned");
        Ok(winner)
    }

    /// Enters setup mode on an empty board with White to move.
    pub fn enter_setup(&mut self) -> ChessResult<()> {
        if self.in_progress {
            return Err(ChessError::GameInProgress);
        }
        self.board.clear();
        self.turn = Color::Light;
        self.setup_active = true;
        self.from_setup = false;
        info!("setup mode entered");
        Ok(())
    }

    pub fn setup_add(&mut self, symbol: char, pos: Coordinate) -> ChessResult<()> {
        self.ensure_setup()?;
        if !pos.is_valid() {
            return Err(ChessError::InvalidFileOrRank {
                rank: pos.rank(),
                file: pos.file(),
            });
        }
        if Piece::from_symbol(symbol).is_none() {
            return Err(ChessError::InvalidPieceSymbol(symbol));
        }
        self.board.add_piece(symbol, pos);
        Ok(())
    }

    pub fn setup_remove(&mut self, pos: Coordinate) -> ChessResult<Option<Piece>> {
        self.ensure_setup()?;
        if !pos.is_valid() {
            return Err(ChessError::InvalidFileOrRank {
                rank: pos.rank(),
                file: pos.file(),
            });
        }
        Ok(self.board.remove_piece(pos))
    }

    pub fn setup_set_turn(&mut self, color: Color) -> ChessResult<()> {
        self.ensure_setup()?;
        self.turn = color;
        Ok(())
    }

    /// Leaves setup mode if the position is playable; stays in it otherwise.
    pub fn finish_setup(&mut self) -> ChessResult<()> {
        self.ensure_setup()?;
        self.board.validate_setup()?;
        self.setup_active = false;
        self.from_setup = true;
        info!(first = %self.turn, "setup finished");
        Ok(())
    }

    fn play(&mut self, from: Coordinate, to: Coordinate, promotion: Option<PieceKind>) -> ChessResult<MoveReport> {
        let mover = self.turn;
        let validated = self.board.validate_move(from, to, mover, promotion)?;
        self.board.make_move(validated)?;

        self.turn = mover.opposite();
        let outcome = match self.board.status(self.turn) {
            GameStatus::Checkmate => {
                self.scores.record_win(mover);
                self.in_progress = false;
                info!(winner = %mover, "checkmate");
                MoveOutcome::Checkmate { winner: mover }
            }
            GameStatus::Stalemate => {
                self.scores.record_draw();
                self.in_progress = false;
                info!("stalemate");
                MoveOutcome::Stalemate
            }
            GameStatus::Check => MoveOutcome::Continue { in_check: true },
            GameStatus::InPlay => MoveOutcome::Continue { in_check: false },
        };

        Ok(MoveReport {
            mover,
            mv: validated.chess_move(),
            outcome,
        })
    }

    fn ensure_in_progress(&self) -> ChessResult<()> {
        if self.in_progress {
            Ok(())
        } else {
            Err(ChessError::NoGameInProgress)
        }
    }

    fn ensure_setup(&self) -> ChessResult<()> {
        if self.in_progress {
            Err(ChessError::GameInProgress)
        } else if !self.setup_active {
            Err(ChessError::InvalidSetup("not in setup mode".to_owned()))
        } else {
            Ok(())
        }
    }
}
