//! Player construction from the type names used on the command line.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_greedy::GreedyPlayer;
use crate::engines::engine_priority::PriorityPlayer;
use crate::engines::engine_random::RandomPlayer;
use crate::engines::engine_trait::{HumanPlayer, Player};
use crate::errors::ChessError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    /// Computer opponent of level `1..=4`.
    Computer(u8),
}

impl FromStr for PlayerKind {
    type Err = ChessError;

    /// Accepts `human` and `computer1` to `computer4`, ignoring case.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let lower = text.trim().to_ascii_lowercase();
        if lower == "human" {
            return Ok(PlayerKind::Human);
        }
        match lower
            .strip_prefix("computer")
            .filter(|level| level.len() == 1)
            .and_then(|level| level.parse::<u8>().ok())
        {
            Some(level @ 1..=4) => Ok(PlayerKind::Computer(level)),
            _ => Err(ChessError::InvalidPlayerType(text.to_owned())),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "human"),
            PlayerKind::Computer(level) => write!(f, "computer{level}"),
        }
    }
}

/// Builds a player owning `rng`; humans ignore it.
pub fn create_player(kind: PlayerKind, rng: StdRng) -> Box<dyn Player> {
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer),
        PlayerKind::Computer(1) => Box::new(RandomPlayer::new(rng)),
        PlayerKind::Computer(2) => Box::new(GreedyPlayer::new(rng)),
        PlayerKind::Computer(3) => Box::new(GreedyPlayer::cautious(rng)),
        PlayerKind::Computer(_) => Box::new(PriorityPlayer::new(rng)),
    }
}

/// Source of per-player random generators: seeded for reproducible games,
/// otherwise freshly seeded from the thread RNG.
#[derive(Debug, Clone)]
pub struct PlayerRngSource {
    seed: Option<u64>,
    issued: u64,
}

impl PlayerRngSource {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed, issued: 0 }
    }

    pub fn next_rng(&mut self) -> StdRng {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(self.issued)),
            None => StdRng::seed_from_u64(rand::random()),
        };
        self.issued += 1;
        rng
    }
}
