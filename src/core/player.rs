//! Players, per-player storage and hands.
//!
//! ## PlayerId
//!
//! Seat index in turn order, 0-based.
//!
//! ## PlayerMap
//!
//! Per-player data backed by `Vec` for O(1) access, indexable by `PlayerId`.
//!
//! ## Player
//!
//! A hand of tiles plus a role tag. The role never changes engine behavior;
//! it tells the orchestration layer who makes this seat's decisions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use super::tile::Tile;

/// Player identifier (seat index in turn order).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping around a roster of `player_count`.
    #[must_use]
    pub const fn next(self, player_count: usize) -> Self {
        Self(((self.0 as usize + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a roster of `player_count` seats.
    ///
    /// ```
    /// use domino_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use domino_engine::core::{PlayerId, PlayerMap};
///
/// let mut passes: PlayerMap<u32> = PlayerMap::with_value(4, 0);
/// passes[PlayerId::new(1)] += 1;
/// assert_eq!(passes[PlayerId::new(1)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data, or `None` past the roster.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the stored values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Default for PlayerMap<T> {
    /// An empty roster, used before the first match is dealt.
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// Who makes the decisions for a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerRole {
    Human,
    Automated,
}

/// A seat at the table: a hand of tiles and a role.
///
/// The hand is unordered for the rules and ordered for display; tiles keep
/// the order in which they arrived.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    role: PlayerRole,
    hand: SmallVec<[Tile; 8]>,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(role: PlayerRole) -> Self {
        Self {
            role,
            hand: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn role(&self) -> PlayerRole {
        self.role
    }

    #[must_use]
    pub fn is_human(&self) -> bool {
        self.role == PlayerRole::Human
    }

    #[must_use]
    pub fn has_any_tile(&self) -> bool {
        !self.hand.is_empty()
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.hand
    }

    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.hand.len()
    }

    /// All doubles in hand, in hand order.
    pub fn double_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.hand.iter().filter(|t| t.is_double())
    }

    #[must_use]
    pub fn has_any_double(&self) -> bool {
        self.double_tiles().next().is_some()
    }

    /// Sum of every tile's pips. Lower is better on a blocked game.
    #[must_use]
    pub fn hand_sum(&self) -> u32 {
        self.hand.iter().map(Tile::sum).sum()
    }

    /// The double with the highest pip value, if any.
    ///
    /// Each double rank exists once per set, so there is never a tie.
    #[must_use]
    pub fn biggest_double(&self) -> Option<&Tile> {
        self.double_tiles().max_by_key(|t| t.left())
    }

    /// Add a tile to the end of the hand.
    pub fn add(&mut self, tile: Tile) {
        self.hand.push(tile);
    }

    /// Remove and return the tile at `index`, or `None` if out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<Tile> {
        if index < self.hand.len() {
            Some(self.hand.remove(index))
        } else {
            None
        }
    }
}
