//! Match settings.
//!
//! `DominoSettings` is a plain `Copy` value. The engine keeps its own copy and
//! reads the roster and pip range when a match starts; a restore point is
//! just another copy. The two hide flags are stored for the presentation
//! layer and never read by the engine.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Smallest supported roster.
pub const MIN_PLAYERS: usize = 2;
/// Largest supported roster.
pub const MAX_PLAYERS: usize = 4;

/// Roster, pip range and display flags for a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DominoSettings {
    /// Seats at the table (2-4).
    pub players: usize,

    /// How many of the seats are human. Humans take the first seats.
    pub humans: usize,

    /// Lowest pip value in the set.
    pub min_pips: u8,

    /// Highest pip value in the set (a double-six set has 6).
    pub max_pips: u8,

    /// Presentation hint: render opponents' hands face down.
    pub hide_opponent_tiles: bool,

    /// Presentation hint: render the boneyard face down.
    pub hide_boneyard_tiles: bool,
}

impl Default for DominoSettings {
    fn default() -> Self {
        Self {
            players: 4,
            humans: 1,
            min_pips: 0,
            max_pips: 6,
            hide_opponent_tiles: true,
            hide_boneyard_tiles: true,
        }
    }
}

impl DominoSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of seats.
    #[must_use]
    pub fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Set how many seats are human.
    #[must_use]
    pub fn with_humans(mut self, humans: usize) -> Self {
        self.humans = humans;
        self
    }

    /// Set the pip range, inclusive on both ends.
    #[must_use]
    pub fn with_pip_range(mut self, min_pips: u8, max_pips: u8) -> Self {
        self.min_pips = min_pips;
        self.max_pips = max_pips;
        self
    }

    #[must_use]
    pub fn hide_opponent_tiles(mut self, hidden: bool) -> Self {
        self.hide_opponent_tiles = hidden;
        self
    }

    #[must_use]
    pub fn hide_boneyard_tiles(mut self, hidden: bool) -> Self {
        self.hide_boneyard_tiles = hidden;
        self
    }

    /// Number of automated seats.
    #[must_use]
    pub fn automated(&self) -> usize {
        self.players.saturating_sub(self.humans)
    }

    /// Number of tiles in the full set: one per unordered pip pair, doubles included.
    #[must_use]
    pub fn full_set_size(&self) -> usize {
        if self.max_pips < self.min_pips {
            return 0;
        }
        let ranks = (self.max_pips - self.min_pips) as usize + 1;
        ranks * (ranks + 1) / 2
    }

    /// Tiles each player receives; the remainder stays in the boneyard.
    #[must_use]
    pub fn tiles_per_player(&self) -> usize {
        if self.players == 0 {
            return 0;
        }
        self.full_set_size() / self.players
    }

    /// Check the seat counts alone.
    pub fn validate_roster(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players) {
            return Err(ConfigError::PlayerCount {
                players: self.players,
            });
        }
        if self.humans > self.players {
            return Err(ConfigError::HumanCount {
                humans: self.humans,
                players: self.players,
            });
        }
        Ok(())
    }

    /// Check that a match can be dealt with these settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_roster()?;
        if self.max_pips <= self.min_pips {
            return Err(ConfigError::PipRange {
                min: self.min_pips,
                max: self.max_pips,
            });
        }
        if self.tiles_per_player() == 0 {
            return Err(ConfigError::TooFewTiles {
                tiles: self.full_set_size(),
                players: self.players,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = DominoSettings::default();

        assert_eq!(settings.players, 4);
        assert_eq!(settings.humans, 1);
        assert_eq!(settings.automated(), 3);
        assert_eq!((settings.min_pips, settings.max_pips), (0, 6));
        assert!(settings.hide_opponent_tiles);
        assert!(settings.hide_boneyard_tiles);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_set_sizes() {
        let double_six = DominoSettings::new();
        assert_eq!(double_six.full_set_size(), 28);
        assert_eq!(double_six.tiles_per_player(), 7);

        let double_nine = DominoSettings::new().with_players(3).with_pip_range(0, 9);
        assert_eq!(double_nine.full_set_size(), 55);
        assert_eq!(double_nine.tiles_per_player(), 18);

        let shifted = DominoSettings::new().with_pip_range(2, 4);
        assert_eq!(shifted.full_set_size(), 6);
    }

    #[test]
    fn test_builder() {
        let settings = DominoSettings::new()
            .with_players(2)
            .with_humans(0)
            .with_pip_range(1, 5)
            .hide_opponent_tiles(false)
            .hide_boneyard_tiles(false);

        assert_eq!(settings.players, 2);
        assert_eq!(settings.automated(), 2);
        assert_eq!(settings.min_pips, 1);
        assert!(!settings.hide_opponent_tiles);
        assert!(!settings.hide_boneyard_tiles);
    }

    #[test]
    fn test_validate_rejects() {
        assert_eq!(
            DominoSettings::new().with_players(5).validate(),
            Err(ConfigError::PlayerCount { players: 5 })
        );
        assert_eq!(
            DominoSettings::new().with_players(2).with_humans(3).validate(),
            Err(ConfigError::HumanCount { humans: 3, players: 2 })
        );
        assert_eq!(
            DominoSettings::new().with_pip_range(4, 4).validate(),
            Err(ConfigError::PipRange { min: 4, max: 4 })
        );
        assert_eq!(
            DominoSettings::new().with_pip_range(0, 1).validate(),
            Err(ConfigError::TooFewTiles { tiles: 3, players: 4 })
        );
    }

    #[test]
    fn test_validate_roster_ignores_pips() {
        let settings = DominoSettings::new().with_players(2).with_pip_range(3, 3);
        assert!(settings.validate_roster().is_ok());
        assert!(settings.validate().is_err());

        assert_eq!(
            DominoSettings::new().with_humans(5).validate_roster(),
            Err(ConfigError::HumanCount { humans: 5, players: 4 })
        );
    }

    #[test]
    fn test_copy_is_restore_point() {
        let mut settings = DominoSettings::new();
        let saved = settings;
        settings.players = 2;

        assert_eq!(saved.players, 4);
        assert_ne!(saved, settings);
    }
}
