//! Terminal result of a game.

use crate::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Outcome produced once, at the moment a win is first detected.
///
/// There is no draw: a full board without a line never yields an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Always true for an outcome that was actually produced.
    ended: bool,
    /// Player who completed a line.
    winner: Player,
}

impl GameOutcome {
    /// Outcome for a game won by `winner`.
    pub fn won(winner: Player) -> Self {
        Self {
            ended: true,
            winner,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {} won!", self.winner)
    }
}
