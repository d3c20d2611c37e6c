//! Domino tiles and the attachability rule.
//!
//! A tile carries two pip values and a `TileId`. Identity is the id, never the
//! pips: two physical tiles may show the same pair, and flipping a tile swaps
//! its pips without turning it into a different piece.
//!
//! ```
//! use domino_engine::core::{attach, AttachSide, Ends, Tile, TileId};
//!
//! let tile = Tile::new(TileId::new(0), 2, 4);
//! assert_eq!(attach(Ends::new(4, 6), &tile), AttachSide::Left);
//! ```

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Identifier of one physical tile within a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u16);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Which open end(s) of a reference a candidate tile can connect to.
///
/// Ordered so that `side > AttachSide::None` means "attaches somewhere".
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AttachSide {
    None,
    Left,
    Right,
    Both,
}

impl AttachSide {
    /// True for every variant except `None`.
    #[must_use]
    pub const fn attaches(self) -> bool {
        !matches!(self, AttachSide::None)
    }
}

/// A pair of exposed pip values: the open ends of the board, or a tile's own
/// `(left, right)` when used as a reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ends {
    pub left: u8,
    pub right: u8,
}

impl Ends {
    #[must_use]
    pub const fn new(left: u8, right: u8) -> Self {
        Self { left, right }
    }
}

impl std::fmt::Display for Ends {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}|{}]", self.left, self.right)
    }
}

/// A domino tile.
///
/// Equality and hashing use the id only.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tile {
    id: TileId,
    left: u8,
    right: u8,
}

impl Tile {
    /// Create a tile showing `left` and `right` in that orientation.
    #[must_use]
    pub const fn new(id: TileId, left: u8, right: u8) -> Self {
        Self { id, left, right }
    }

    #[must_use]
    pub const fn id(&self) -> TileId {
        self.id
    }

    #[must_use]
    pub const fn left(&self) -> u8 {
        self.left
    }

    #[must_use]
    pub const fn right(&self) -> u8 {
        self.right
    }

    /// `(left, right)` in the current orientation.
    #[must_use]
    pub const fn pips(&self) -> (u8, u8) {
        (self.left, self.right)
    }

    /// The tile's pips as a reference pair.
    #[must_use]
    pub const fn ends(&self) -> Ends {
        Ends::new(self.left, self.right)
    }

    /// Sum of both pip values.
    #[must_use]
    pub const fn sum(&self) -> u32 {
        self.left as u32 + self.right as u32
    }

    #[must_use]
    pub const fn is_double(&self) -> bool {
        self.left == self.right
    }

    /// Check whether either end shows `value`.
    #[must_use]
    pub const fn has(&self, value: u8) -> bool {
        self.left == value || self.right == value
    }

    /// Swap both pip values at once.
    pub fn flip(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}|{}]", self.left, self.right)
    }
}

/// Compute which end(s) of `reference` the candidate can connect to in either
/// orientation.
///
/// The candidate is left-eligible when either of its pips equals
/// `reference.left`, and right-eligible when either equals `reference.right`.
#[must_use]
pub fn attach(reference: Ends, candidate: &Tile) -> AttachSide {
    let left = candidate.has(reference.left);
    let right = candidate.has(reference.right);

    match (left, right) {
        (true, true) => AttachSide::Both,
        (true, false) => AttachSide::Left,
        (false, true) => AttachSide::Right,
        (false, false) => AttachSide::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(left: u8, right: u8) -> Tile {
        Tile::new(TileId::new(0), left, right)
    }

    #[test]
    fn test_tile_basics() {
        let t = tile(3, 5);
        assert_eq!(t.left(), 3);
        assert_eq!(t.right(), 5);
        assert_eq!(t.sum(), 8);
        assert!(!t.is_double());
        assert!(tile(4, 4).is_double());
        assert_eq!(format!("{}", t), "[3|5]");
    }

    #[test]
    fn test_flip_twice_restores() {
        let mut t = tile(1, 6);
        t.flip();
        assert_eq!(t.pips(), (6, 1));
        t.flip();
        assert_eq!(t.pips(), (1, 6));
    }

    #[test]
    fn test_identity_ignores_pips() {
        let a = Tile::new(TileId::new(1), 2, 3);
        let b = Tile::new(TileId::new(2), 2, 3);
        let mut c = a.clone();
        c.flip();

        assert_ne!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_attach_table() {
        let cases = [
            (Ends::new(4, 6), tile(2, 4), AttachSide::Left),
            (Ends::new(4, 6), tile(6, 1), AttachSide::Right),
            (Ends::new(4, 6), tile(1, 2), AttachSide::None),
            (Ends::new(4, 6), tile(4, 6), AttachSide::Both),
            (Ends::new(3, 3), tile(3, 1), AttachSide::Both),
            (Ends::new(5, 2), tile(5, 5), AttachSide::Left),
            (Ends::new(0, 0), tile(0, 0), AttachSide::Both),
        ];

        for (ends, candidate, expected) in cases {
            assert_eq!(attach(ends, &candidate), expected, "{} vs {}", ends, candidate);
        }
    }

    #[test]
    fn test_attach_is_orientation_independent() {
        let ends = Ends::new(1, 5);
        for (a, b) in [(1, 2), (5, 0), (1, 5), (3, 4)] {
            let t = tile(a, b);
            let mut flipped = t.clone();
            flipped.flip();
            assert_eq!(attach(ends, &t), attach(ends, &flipped));
        }
    }

    #[test]
    fn test_attach_side_ordering() {
        assert!(AttachSide::Left > AttachSide::None);
        assert!(AttachSide::Both.attaches());
        assert!(!AttachSide::None.attaches());
    }
}
