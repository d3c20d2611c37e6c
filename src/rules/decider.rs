//! The seam between the engine and whoever makes decisions for a seat.
//!
//! A human front end or an automated policy implements `TurnDecider`;
//! `GameEngine::play_turn` calls back into it at the two points where the
//! rules leave a choice open.

use serde::{Deserialize, Serialize};

use crate::core::action::GameAction;
use crate::core::player::PlayerId;
use crate::core::tile::Tile;
use crate::zones::Side;

use super::engine::GameEngine;
use super::result::GameResult;

/// Makes the choices for the current player.
pub trait TurnDecider {
    /// Pick one of the legal tiles by its position in `legal`.
    ///
    /// `legal` is never empty and keeps hand order. Returning an index past
    /// the end makes `play_turn` fail with `IndexOutOfRange`.
    fn choose_tile(&mut self, engine: &GameEngine, legal: &[&Tile]) -> usize;

    /// Pick an end for a tile that matches both.
    fn choose_side(&mut self, engine: &GameEngine, tile: &Tile) -> Side;
}

/// What one call to `play_turn` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// The player who acted.
    pub player: PlayerId,
    /// The resolved action.
    pub action: GameAction,
    /// Pips of the tile placed or drawn, if any.
    pub tile: Option<(u8, u8)>,
    /// Whose turn it is now.
    pub next: PlayerId,
    /// Set when this turn ended the match.
    pub result: Option<GameResult>,
}
