//! The line of play.
//!
//! Tiles are stored positionally, leftmost first, in an `im::Vector` so both
//! ends take O(1)-ish inserts and snapshots are cheap to clone. Every adjacent
//! pair shares its touching pip value (the chain invariant).

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::tile::{Ends, Tile};

/// An end of the line of play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Placed tiles plus which end received the most recent one.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Board {
    tiles: Vector<Tile>,
    last_side: Option<Side>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// The open ends: left pip of the first tile, right pip of the last.
    ///
    /// `None` while the board is empty.
    #[must_use]
    pub fn ends(&self) -> Option<Ends> {
        let first = self.tiles.front()?;
        let last = self.tiles.back()?;
        Some(Ends::new(first.left(), last.right()))
    }

    /// Tiles leftmost first.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter()
    }

    /// The most recently placed tile.
    #[must_use]
    pub fn last_placed(&self) -> Option<&Tile> {
        match self.last_side? {
            Side::Left => self.tiles.front(),
            Side::Right => self.tiles.back(),
        }
    }

    /// The board as it looked before the last placement.
    pub fn tiles_excluding_last_placed(&self) -> impl Iterator<Item = &Tile> + '_ {
        let last = self.last_placed().map(Tile::id);
        self.tiles.iter().filter(move |t| Some(t.id()) != last)
    }

    /// Place `tile` on the left end, flipping it once if needed.
    ///
    /// An empty board accepts any tile. When the tile cannot attach in either
    /// orientation it is handed back unchanged in `Err`.
    pub fn insert_left(&mut self, tile: Tile) -> Result<(), Tile> {
        self.insert(Side::Left, tile)
    }

    /// Place `tile` on the right end, flipping it once if needed.
    ///
    /// An empty board accepts any tile. When the tile cannot attach in either
    /// orientation it is handed back unchanged in `Err`.
    pub fn insert_right(&mut self, tile: Tile) -> Result<(), Tile> {
        self.insert(Side::Right, tile)
    }

    /// Place `tile` on the given end.
    pub fn insert(&mut self, side: Side, mut tile: Tile) -> Result<(), Tile> {
        let Some(ends) = self.ends() else {
            trace!(%tile, "first tile on the board");
            self.tiles.push_front(tile);
            self.last_side = Some(Side::Left);
            return Ok(());
        };

        if !fits(ends, side, &tile) {
            tile.flip();
            trace!(%tile, %side, "flipped candidate");
            if !fits(ends, side, &tile) {
                tile.flip();
                trace!(%tile, %side, %ends, "tile does not attach");
                return Err(tile);
            }
        }

        trace!(%tile, %side, "tile placed");
        match side {
            Side::Left => self.tiles.push_front(tile),
            Side::Right => self.tiles.push_back(tile),
        }
        self.last_side = Some(side);
        Ok(())
    }

    /// Check the chain invariant over every adjacent pair.
    #[must_use]
    pub fn is_chain_valid(&self) -> bool {
        self.tiles
            .iter()
            .zip(self.tiles.iter().skip(1))
            .all(|(a, b)| a.right() == b.left())
    }
}

fn fits(ends: Ends, side: Side, tile: &Tile) -> bool {
    match side {
        Side::Left => tile.right() == ends.left,
        Side::Right => tile.left() == ends.right,
    }
}
