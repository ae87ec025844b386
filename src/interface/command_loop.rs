//! Line-oriented command front-end.
//!
//! Parses referee commands and drives the `Game` session with them.
//! While setup mode is active the `+`, `-`, `=` and `done` sub-commands are
//! accepted instead of the regular ones. The running score is printed when
//! input ends.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::board_state::chess_rules::RuleOptions;
use crate::board_state::chess_types::{Color, PieceKind};
use crate::board_state::coordinate::Coordinate;
use crate::engines::engine_factory::PlayerKind;
use crate::errors::ChessError;
use crate::game::game::{Game, MoveOutcome, MoveReport};
use crate::interface::text_display::{BoardStyle, TextDisplay};
use crate::utils::fen_generator::generate_fen;
use crate::utils::long_algebraic::{long_algebraic_to_move, move_to_long_algebraic};

/// Start-up settings for a command session.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoopConfig {
    pub options: RuleOptions,
    pub seed: Option<u64>,
    pub style: BoardStyle,
}

pub fn run_stdio_loop(config: LoopConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_loop(stdin.lock(), &mut stdout, config)
}

/// Feeds every line of `input` to a fresh session, then prints the score.
pub fn run_loop(input: impl BufRead, out: &mut impl Write, config: LoopConfig) -> io::Result<()> {
    let mut session = CommandSession::new(config);

    for line in input.lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, out)?;
        out.flush()?;
        if should_quit {
            break;
        }
    }

    session.print_scores(out)?;
    out.flush()
}

pub struct CommandSession {
    game: Game,
    display: TextDisplay,
}

impl CommandSession {
    pub fn new(config: LoopConfig) -> Self {
        let mut game = Game::new(config.options, config.seed);
        let display = TextDisplay::attach(&mut game, config.style);
        Self { game, display }
    }

    #[inline]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Handles one input line; returns `true` when the session should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let args = parts.collect::<Vec<_>>();

        if cmd.eq_ignore_ascii_case("quit") {
            return Ok(true);
        }

        let result = if self.game.is_setup_active() {
            self.handle_setup_command(cmd, &args, out)
        } else {
            match cmd.to_ascii_lowercase().as_str() {
                "game" => self.handle_game(&args, out),
                "move" => self.handle_move(&args, out),
                "resign" => self.handle_resign(out),
                "setup" => self.handle_enter_setup(out),
                "fen" => self.handle_fen(out),
                "option" => self.handle_option(&args),
                _ => Err(CommandError::Usage(format!("unknown command '{cmd}'"))),
            }
        };

        match result {
            Ok(()) => {}
            Err(CommandError::Io(err)) => return Err(err),
            Err(CommandError::Rejected(err)) => {
                warn!(command = trimmed, %err, "command rejected");
                writeln!(out, "Error: {err}")?;
            }
            Err(CommandError::Usage(message)) => {
                warn!(command = trimmed, "{message}");
                writeln!(out, "Error: {message}")?;
            }
        }

        self.display.refresh(self.game.board(), out)?;
        Ok(false)
    }

    pub fn print_scores(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", self.game.scores())
    }

    fn handle_game(&mut self, args: &[&str], out: &mut impl Write) -> CommandResult {
        let [white, black] = args else {
            return Err(CommandError::Usage("usage: game <white> <black>".to_owned()));
        };
        let white = white.parse::<PlayerKind>()?;
        let black = black.parse::<PlayerKind>()?;

        let first = self.game.start(white, black)?;
        self.display.refresh(self.game.board(), out)?;
        writeln!(out, "New game: {white} (White) vs {black} (Black). {first} to move.")?;
        Ok(())
    }

    fn handle_move(&mut self, args: &[&str], out: &mut impl Write) -> CommandResult {
        let report = match args {
            [] => self.game.make_computer_move()?,
            [text] => {
                let mv = long_algebraic_to_move(text)?;
                self.game.make_player_move(mv.from, mv.to, mv.promotion)?
            }
            [from, to] => self.game.make_player_move(from.parse()?, to.parse()?, None)?,
            [from, to, promo] => {
                let promotion = promo.chars().next().and_then(PieceKind::promotion_from_symbol);
                self.game.make_player_move(from.parse()?, to.parse()?, promotion)?
            }
            _ => return Err(CommandError::Usage("usage: move [<from> <to> [promotion] | <from><to>[promotion]]".to_owned())),
        };

        self.display.refresh(self.game.board(), out)?;
        write_report(&report, out)?;
        Ok(())
    }

    fn handle_resign(&mut self, out: &mut impl Write) -> CommandResult {
        let loser = self.game.turn();
        let winner = self.game.resign()?;
        writeln!(out, "{loser} resigns. {winner} wins!")?;
        Ok(())
    }

    fn handle_enter_setup(&mut self, out: &mut impl Write) -> CommandResult {
        self.game.enter_setup()?;
        writeln!(out, "Setup mode: + <piece> <square>, - <square>, = <white|black>, done")?;
        Ok(())
    }

    fn handle_setup_command(&mut self, cmd: &str, args: &[&str], out: &mut impl Write) -> CommandResult {
        match (cmd, args) {
            ("+", [symbol, square]) => {
                let mut letters = symbol.chars();
                let (Some(symbol), None) = (letters.next(), letters.next()) else {
                    return Err(CommandError::Usage(format!("'{symbol}' is not a single piece letter")));
                };
                self.game.setup_add(symbol, square.parse::<Coordinate>()?)?;
            }
            ("-", [square]) => {
                if self.game.setup_remove(square.parse()?)?.is_none() {
                    writeln!(out, "{square} was already empty.")?;
                }
            }
            ("=", [side]) => {
                let color = Color::from_name(side)
                    .ok_or_else(|| CommandError::Usage(format!("'{side}' is not white or black")))?;
                self.game.setup_set_turn(color)?;
                writeln!(out, "{color} to move.")?;
            }
            ("done", []) => {
                self.game.finish_setup()?;
                writeln!(out, "Setup complete. {} to move.", self.game.turn())?;
            }
            _ => {
                return Err(CommandError::Usage(
                    "setup mode accepts + <piece> <square>, - <square>, = <white|black>, done".to_owned(),
                ))
            }
        }
        Ok(())
    }

    fn handle_fen(&mut self, out: &mut impl Write) -> CommandResult {
        writeln!(out, "{}", generate_fen(self.game.board(), self.game.turn()))?;
        Ok(())
    }

    fn handle_option(&mut self, args: &[&str]) -> CommandResult {
        let [name, value] = args else {
            return Err(CommandError::Usage("usage: option <name> <value>".to_owned()));
        };
        if self.game.in_progress() {
            return Err(ChessError::GameInProgress.into());
        }
        let mut options = self.game.board().options();
        options.set_option(name, value)?;
        self.game.set_options(options);
        Ok(())
    }
}

type CommandResult = Result<(), CommandError>;

/// Why a command produced no effect.
#[derive(Debug, thiserror::Error)]
enum CommandError {
    #[error(transparent)]
    Rejected(#[from] ChessError),
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn write_report(report: &MoveReport, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{} plays {}", report.mover, move_to_long_algebraic(&report.mv))?;
    match report.outcome {
        MoveOutcome::Checkmate { winner } => writeln!(out, "Checkmate! {winner} wins!"),
        MoveOutcome::Stalemate => writeln!(out, "Stalemate! The game is a draw."),
        MoveOutcome::Continue { in_check: true } => {
            writeln!(out, "{} is in check!", report.mover.opposite())
        }
        MoveOutcome::Continue { in_check: false } => Ok(()),
    }
}

/// Runs a scripted session and returns everything it printed.
#[cfg(test)]
fn run_script(script: &str) -> String {
    let config = LoopConfig {
        seed: Some(42),
        ..LoopConfig::default()
    };
    let mut out = Vec::new();
    run_loop(io::Cursor::new(script), &mut out, config).expect("writes to a Vec cannot fail");
    String::from_utf8(out).expect("output is utf8")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fools_mate_session_reports_and_scores() {
        let text = run_script("game human human\nmove f2 f3\nmove e7 e5\nmove g2 g4\nmove d8 h4\n");
        assert!(text.contains("New game: human (White) vs human (Black). White to move."), "{text}");
        assert!(text.contains("Black plays d8h4"), "{text}");
        assert!(text.contains("Checkmate! Black wins!"), "{text}");
        assert!(text.ends_with("Final Score:\nWhite: 0\nBlack: 1\nDraws: 0\n"), "{text}");
    }

    #[test]
    fn check_is_announced_for_the_side_to_move() {
        let text = run_script("game human human\nmove e2e4\nmove f7 f6\nmove d1h5\n");
        assert!(text.contains("Black is in check!"), "{text}");
    }

    #[test]
    fn illegal_and_unknown_commands_are_reported() {
        let text = run_script("move e2 e4\ngame human human\nmove e2 e5\nmove e2\nmove a b c d\ndance\n");
        assert!(text.contains("Error: no game in progress"), "{text}");
        assert!(text.contains("Error: illegal move e2e5"), "{text}");
        assert!(text.contains("Error: invalid move text: e2"), "{text}");
        assert!(text.contains("Error: usage: move"), "{text}");
        assert!(text.contains("Error: unknown command 'dance'"), "{text}");
    }

    #[test]
    fn setup_session_builds_a_position_and_keeps_it_for_the_game() {
        let script = "\
setup
+ K e1
+ k e8
+ x a1
= black
done
fen
game human computer1
move
quit
";
        let text = run_script(script);
        assert!(text.contains("Error: invalid piece symbol 'x'"), "{text}");
        assert!(text.contains("Setup complete. Black to move."), "{text}");
        assert!(text.contains("4k3/8/8/8/8/8/8/4K3 b - - 0 1"), "{text}");
        assert!(text.contains("Black to move."), "{text}");
        assert!(text.contains("Black plays e8"), "{text}");
    }

    #[test]
    fn invalid_setup_stays_in_setup_mode() {
        let text = run_script("setup\n+ K e1\ndone\ngame human human\n+ k e8\ndone\n");
        assert!(text.contains("Error: invalid setup"), "{text}");
        assert!(text.contains("setup mode accepts"), "{text}");
        assert!(text.contains("Setup complete. White to move."), "{text}");
    }

    #[test]
    fn setup_is_refused_during_a_game_and_resign_scores() {
        let text = run_script("game human human\nsetup\nresign\n");
        assert!(text.contains("Error: a game is already in progress"), "{text}");
        assert!(text.contains("White resigns. Black wins!"), "{text}");
        assert!(text.contains("Black: 1"), "{text}");
    }

    #[test]
    fn every_change_is_rendered() {
        let text = run_script("game human human\nmove e2 e4\n");
        assert_eq!(text.matches("abcdefgh").count(), 2, "{text}");
    }

    #[test]
    fn options_are_set_by_name_between_games() {
        let mut session = CommandSession::new(LoopConfig::default());
        let mut out = Vec::new();
        session
            .handle_command("option CastlingTransitCheck on", &mut out)
            .expect("vec write");
        assert!(session.game().board().options().verify_castling_transit);

        session.handle_command("option Hash 64", &mut out).expect("vec write");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("Error: invalid option Hash=64"), "{text}");
    }
}
