use std::fmt;

use crate::board_state::chess_types::Color;

/// Running tally across the games of one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scores {
    pub white: u32,
    pub black: u32,
    pub draws: u32,
}

impl Scores {
    pub fn record_win(&mut self, winner: Color) {
        match winner {
            Color::Light => self.white += 1,
            Color::Dark => self.black += 1,
        }
    }

    pub fn record_draw(&mut self) {
        self.draws += 1;
    }

    pub fn wins(&self, color: Color) -> u32 {
        match color {
            Color::Light => self.white,
            Color::Dark => self.black,
        }
    }
}

impl fmt::Display for Scores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Final Score:")?;
        writeln!(f, "White: {}", self.white)?;
        writeln!(f, "Black: {}", self.black)?;
        write!(f, "Draws: {}", self.draws)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_and_report() {
        let mut scores = Scores::default();
        scores.record_win(Color::Dark);
        scores.record_win(Color::Dark);
        scores.record_draw();
        assert_eq!(scores.wins(Color::Dark), 2);
        assert_eq!(scores.to_string(), "Final Score:\nWhite: 0\nBlack: 2\nDraws: 1");
    }
}
