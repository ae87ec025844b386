//! Board view driven by change notifications.
//!
//! The display never polls the board for differences: it drains its
//! subscription channel and redraws once if anything arrived since the last
//! refresh.

use std::io::{self, Write};
use std::sync::mpsc::Receiver;

use crate::board_state::observers::{BoardChanged, SubscriptionId};
use crate::board_state::position::Position;
use crate::game::game::Game;
use crate::utils::render_board::{render_board, render_board_unicode};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoardStyle {
    #[default]
    Ascii,
    Unicode,
}

pub struct TextDisplay {
    subscription: SubscriptionId,
    events: Receiver<BoardChanged>,
    style: BoardStyle,
    shown_revision: Option<u64>,
}

impl TextDisplay {
    pub fn attach(game: &mut Game, style: BoardStyle) -> Self {
        let (subscription, events) = game.subscribe();
        Self {
            subscription,
            events,
            style,
            shown_revision: None,
        }
    }

    /// Redraws `position` if a change was announced since the last call.
    /// Returns whether anything was written.
    pub fn refresh(&mut self, position: &Position, out: &mut impl Write) -> io::Result<bool> {
        let Some(latest) = self.events.try_iter().last() else {
            return Ok(false);
        };
        self.shown_revision = Some(latest.revision);
        self.draw(position, out)?;
        Ok(true)
    }

    /// Unconditional redraw.
    pub fn draw(&self, position: &Position, out: &mut impl Write) -> io::Result<()> {
        let text = match self.style {
            BoardStyle::Ascii => render_board(position),
            BoardStyle::Unicode => render_board_unicode(position),
        };
        writeln!(out)?;
        write!(out, "{text}")
    }

    #[inline]
    pub fn shown_revision(&self) -> Option<u64> {
        self.shown_revision
    }

    pub fn detach(self, game: &mut Game) -> bool {
        game.unsubscribe(self.subscription)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_state::chess_rules::RuleOptions;
    use crate::engines::engine_factory::PlayerKind;

    #[test]
    fn redraws_once_per_batch_of_changes() {
        let mut game = Game::new(RuleOptions::default(), Some(3));
        let mut display = TextDisplay::attach(&mut game, BoardStyle::Ascii);
        let mut out = Vec::new();

        assert!(!display.refresh(game.board(), &mut out).expect("write to vec"));
        assert!(out.is_empty());

        game.enter_setup().expect("setup available");
        game.setup_add('K', "e1".parse().expect("square")).expect("placed");
        assert!(display.refresh(game.board(), &mut out).expect("write to vec"));
        assert_eq!(display.shown_revision(), Some(game.board().revision()));

        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(text.matches("abcdefgh").count(), 1);
        assert!(text.contains("1 _ _ K _ \n"), "{text}");
    }

    #[test]
    fn detached_display_hears_nothing() {
        let mut game = Game::new(RuleOptions::default(), None);
        let display = TextDisplay::attach(&mut game, BoardStyle::Unicode);
        assert!(display.detach(&mut game));
        game.start(PlayerKind::Human, PlayerKind::Human).expect("game starts");
        assert!(game.board().revision() > 0);
    }
}
