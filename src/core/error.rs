use std::fmt;

/// Reasons a `DominoSettings` value cannot start a match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Player count outside 2..=4.
    PlayerCount { players: usize },
    /// More human seats than seats.
    HumanCount { humans: usize, players: usize },
    /// `max_pips` must be strictly greater than `min_pips`.
    PipRange { min: u8, max: u8 },
    /// The full set cannot give every player at least one tile.
    TooFewTiles { tiles: usize, players: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::PlayerCount { players } => {
                write!(f, "player count must be 2-4, got {}", players)
            }
            ConfigError::HumanCount { humans, players } => {
                write!(f, "{} human players do not fit in {} seats", humans, players)
            }
            ConfigError::PipRange { min, max } => {
                write!(f, "max pips ({}) must be greater than min pips ({})", max, min)
            }
            ConfigError::TooFewTiles { tiles, players } => {
                write!(f, "{} tiles cannot be dealt to {} players", tiles, players)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors surfaced by `GameEngine` operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DominoError {
    /// Settings rejected by `start_match`.
    Config(ConfigError),
    /// No match has been started yet.
    NoMatchInProgress,
    /// Index outside the current player's legal tiles.
    IndexOutOfRange { index: usize, len: usize },
    /// Draw requested with an empty boneyard.
    BoneyardEmpty,
    /// A tile matching both ends is waiting for `play_left`/`play_right`.
    PendingSideChoice,
    /// `play_left`/`play_right` called with nothing to place.
    NoPendingTile,
    /// The match already has a winner or is blocked.
    MatchOver,
    /// A prearranged layout cannot be played from.
    InvalidLayout { reason: &'static str },
}

impl fmt::Display for DominoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DominoError::Config(err) => write!(f, "Invalid settings: {}", err),
            DominoError::NoMatchInProgress => write!(f, "No match in progress"),
            DominoError::IndexOutOfRange { index, len } => {
                write!(f, "Tile index {} out of range for {} playable tiles", index, len)
            }
            DominoError::BoneyardEmpty => write!(f, "Boneyard is empty"),
            DominoError::PendingSideChoice => {
                write!(f, "A tile is waiting for a side to be chosen")
            }
            DominoError::NoPendingTile => write!(f, "No tile is waiting for a side"),
            DominoError::MatchOver => write!(f, "Match is over"),
            DominoError::InvalidLayout { reason } => write!(f, "Invalid layout: {}", reason),
        }
    }
}

impl std::error::Error for DominoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DominoError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for DominoError {
    fn from(err: ConfigError) -> Self {
        DominoError::Config(err)
    }
}

pub type DominoResult<T> = Result<T, DominoError>;
