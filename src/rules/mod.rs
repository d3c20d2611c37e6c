//! Turn resolution for block dominoes.
//!
//! `GameEngine` holds one match and enforces the play/draw/pass protocol.
//! Decisions come from outside, either step by step or through a
//! `TurnDecider` passed to `GameEngine::play_turn`.

pub mod decider;
pub mod engine;
pub mod result;
pub mod snapshot;

pub use decider::{TurnDecider, TurnOutcome};
pub use engine::{GameEngine, Layout};
pub use result::GameResult;
pub use snapshot::{MatchSnapshot, PlayerSnapshot};
