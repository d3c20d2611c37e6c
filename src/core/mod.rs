//! Core types: tiles, players, settings, actions, errors and RNG.

pub mod tile;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use tile::{attach, AttachSide, Ends, Tile, TileId};
pub use player::{Player, PlayerId, PlayerMap, PlayerRole};
pub use rng::{GameRng, GameRngState};
pub use config::{DominoSettings, MAX_PLAYERS, MIN_PLAYERS};
pub use action::{ActionRecord, GameAction};
pub use error::{ConfigError, DominoError, DominoResult};
