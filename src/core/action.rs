//! Actions taken on a turn and the match history.
//!
//! `GameAction` is the record of what happened, not a request: the engine
//! produces it while resolving a play, draw or pass.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// What the last resolved turn step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameAction {
    /// No legal tile and nothing to draw, or a tile that attached nowhere.
    Pass,
    /// Drew a tile that attached nowhere; it went into the hand.
    DrawAndPass,
    /// Drew a tile and placed it on the left end.
    DrawAndPlayLeft,
    /// Drew a tile and placed it on the right end.
    DrawAndPlayRight,
    /// Placed a tile from the hand on the left end.
    PlayLeft,
    /// Placed a tile from the hand on the right end.
    PlayRight,
}

impl GameAction {
    /// The same outcome, preceded by a draw.
    #[must_use]
    pub const fn after_draw(self) -> Self {
        match self {
            GameAction::Pass | GameAction::DrawAndPass => GameAction::DrawAndPass,
            GameAction::PlayLeft | GameAction::DrawAndPlayLeft => GameAction::DrawAndPlayLeft,
            GameAction::PlayRight | GameAction::DrawAndPlayRight => GameAction::DrawAndPlayRight,
        }
    }

    /// True when a tile landed on the board.
    #[must_use]
    pub const fn is_play(self) -> bool {
        match self {
            GameAction::Pass | GameAction::DrawAndPass => false,
            GameAction::DrawAndPlayLeft
            | GameAction::DrawAndPlayRight
            | GameAction::PlayLeft
            | GameAction::PlayRight => true,
        }
    }

    /// True when the boneyard was drawn from.
    #[must_use]
    pub const fn is_draw(self) -> bool {
        match self {
            GameAction::DrawAndPass
            | GameAction::DrawAndPlayLeft
            | GameAction::DrawAndPlayRight => true,
            GameAction::Pass | GameAction::PlayLeft | GameAction::PlayRight => false,
        }
    }
}

impl std::fmt::Display for GameAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            GameAction::Pass => "pass",
            GameAction::DrawAndPass => "draw and pass",
            GameAction::DrawAndPlayLeft => "draw and play left",
            GameAction::DrawAndPlayRight => "draw and play right",
            GameAction::PlayLeft => "play left",
            GameAction::PlayRight => "play right",
        };
        f.write_str(label)
    }
}

/// A resolved action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: GameAction,

    /// Pips of the tile placed or drawn, as oriented when the action resolved.
    pub tile: Option<(u8, u8)>,

    /// Turn number when the action was taken.
    pub turn: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: GameAction, tile: Option<(u8, u8)>, turn: u32) -> Self {
        Self {
            player,
            action,
            tile,
            turn,
        }
    }
}
