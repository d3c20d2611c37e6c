//! # domino-engine
//!
//! Rules engine for block dominoes with 2 to 4 players.
//!
//! ## Design Principles
//!
//! 1. **Caller-Driven**: The engine never decides for a player. It exposes
//!    legal tiles and resolves the play, draw, pass or side choice it is given.
//!
//! 2. **N-Player First**: Every seat is a `PlayerId` into a `PlayerMap`; no
//!    API assumes two players.
//!
//! 3. **Tile Identity**: Each tile of a set has its own `TileId`. Tiles are
//!    compared by identity, never by pips.
//!
//! ## Modules
//!
//! - `core`: Tiles, players, settings, actions, errors and RNG
//! - `zones`: The board (line of play) and the boneyard
//! - `rules`: `GameEngine`, match results, snapshots and the `TurnDecider` seam
//!
//! ## Example
//!
//! ```
//! use domino_engine::{DominoSettings, GameEngine, Side, Tile, TurnDecider};
//!
//! struct FirstTile;
//!
//! impl TurnDecider for FirstTile {
//!     fn choose_tile(&mut self, _: &GameEngine, _: &[&Tile]) -> usize {
//!         0
//!     }
//!     fn choose_side(&mut self, _: &GameEngine, _: &Tile) -> Side {
//!         Side::Left
//!     }
//! }
//!
//! let mut engine = GameEngine::with_seed(DominoSettings::new().with_players(4), 42);
//! engine.start_match().unwrap();
//!
//! let mut decider = FirstTile;
//! while engine.result().is_none() {
//!     engine.play_turn(&mut decider).unwrap();
//! }
//! assert!(engine.winner_turn().is_some());
//! ```

pub mod core;
pub mod zones;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    attach, AttachSide, Ends, Tile, TileId,
    Player, PlayerId, PlayerMap, PlayerRole,
    GameRng, GameRngState,
    DominoSettings, MAX_PLAYERS, MIN_PLAYERS,
    ActionRecord, GameAction,
    ConfigError, DominoError, DominoResult,
};

pub use crate::zones::{Board, Boneyard, Side};

pub use crate::rules::{
    GameEngine, GameResult, Layout,
    MatchSnapshot, PlayerSnapshot,
    TurnDecider, TurnOutcome,
};
