//! Match outcomes.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;

/// How a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// The player emptied their hand.
    Domino(PlayerId),
    /// Nobody could move for a full round with the boneyard empty; the lowest
    /// hand sum wins, ties going to the lowest seat.
    Blocked { winner: PlayerId, hand_sum: u32 },
}

impl GameResult {
    /// The winning seat.
    #[must_use]
    pub fn winner(&self) -> PlayerId {
        match *self {
            GameResult::Domino(player) => player,
            GameResult::Blocked { winner, .. } => winner,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner() == player
    }

    #[must_use]
    pub fn is_blocked(&self) -> bool {
        matches!(self, GameResult::Blocked { .. })
    }
}
