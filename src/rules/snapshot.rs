//! Serializable read-only view of a match, for rendering and logging.

use serde::{Deserialize, Serialize};

use crate::core::action::GameAction;
use crate::core::config::DominoSettings;
use crate::core::player::{Player, PlayerId, PlayerRole};
use crate::core::rng::GameRngState;
use crate::core::tile::{Ends, Tile};

use super::engine::GameEngine;
use super::result::GameResult;

/// One seat as seen from outside the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub role: PlayerRole,
    pub tiles: Vec<Tile>,
    pub hand_sum: u32,
}

/// Everything a presentation layer needs to draw the table.
///
/// Hiding opponent or boneyard tiles is left to the renderer; the settings
/// flags travel along for that purpose. `rng` lets a later engine resume the
/// same sequence of deals through `GameEngine::with_rng_state`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub settings: DominoSettings,
    pub rng: GameRngState,
    pub current_turn: Option<PlayerId>,
    pub turn_number: u32,
    pub board: Vec<Tile>,
    pub ends: Option<Ends>,
    pub boneyard: Vec<Tile>,
    pub players: Vec<PlayerSnapshot>,
    pub last_action: Option<GameAction>,
    pub last_played: Option<Tile>,
    pub last_drawn: Option<Tile>,
    pub pending: Option<Tile>,
    pub pass_count: usize,
    pub result: Option<GameResult>,
}

impl MatchSnapshot {
    #[must_use]
    pub fn capture(engine: &GameEngine) -> Self {
        Self {
            settings: engine.settings(),
            rng: engine.rng_state(),
            current_turn: engine.current_turn(),
            turn_number: engine.turn_number(),
            board: engine.board().tiles().cloned().collect(),
            ends: engine.ends(),
            boneyard: engine.boneyard().tiles().cloned().collect(),
            players: engine
                .players()
                .map(|(id, player)| PlayerSnapshot::capture(id, player))
                .collect(),
            last_action: engine.last_action(),
            last_played: engine.last_played_tile().cloned(),
            last_drawn: engine.last_drawn_tile().cloned(),
            pending: engine.pending_tile().cloned(),
            pass_count: engine.pass_count(),
            result: engine.result(),
        }
    }

    /// Total tiles across board, boneyard, hands and the pending slot.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.board.len()
            + self.boneyard.len()
            + self.players.iter().map(|p| p.tiles.len()).sum::<usize>()
            + usize::from(self.pending.is_some())
    }
}

impl PlayerSnapshot {
    fn capture(id: PlayerId, player: &Player) -> Self {
        Self {
            id,
            role: player.role(),
            tiles: player.tiles().to_vec(),
            hand_sum: player.hand_sum(),
        }
    }
}
