//! Shared tile containers: the line of play and the draw pile.
//!
//! Player hands live on `core::Player`. Together with these two zones they
//! hold every tile of a match exactly once.

pub mod board;
pub mod boneyard;

pub use board::{Board, Side};
pub use boneyard::Boneyard;
