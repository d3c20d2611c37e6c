//! The shared draw pile.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::rng::GameRng;
use crate::core::tile::Tile;

/// Undealt tiles. Order only matters for display and for which tile a draw
/// takes (always the front).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Boneyard {
    tiles: Vector<Tile>,
}

impl Boneyard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles front first; the front is drawn next.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.tiles.len()
    }

    /// Add a tile while populating the pile.
    pub fn add(&mut self, tile: Tile) {
        self.tiles.push_back(tile);
    }

    /// Remove and return the front tile.
    pub fn draw_one(&mut self) -> Option<Tile> {
        self.tiles.pop_front()
    }

    /// Randomize the order.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut order: Vec<Tile> = self.tiles.iter().cloned().collect();
        rng.shuffle(&mut order);
        self.tiles = order.into_iter().collect();
    }
}
