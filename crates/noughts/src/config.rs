//! Session configuration: player names, marks and who opens each round.

use crate::error::{ConfigError, SessionError};
use crate::types::{Mark, Seat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Construction parameters for one player.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Initial display name.
    name: String,

    /// Mark placed by this player.
    #[getter(skip)]
    mark: Mark,
}

impl PlayerConfig {
    /// Creates a player configuration.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }

    /// Returns the configured mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

/// Construction parameters for a session.
///
/// ```toml
/// starting_seat = "second"
///
/// [first]
/// name = "Ada"
/// mark = "X"
///
/// [second]
/// name = "Grace"
/// mark = "O"
/// ```
///
/// Omitted tables and `starting_seat` take the defaults from
/// [`SessionConfig::default`]. A table that is present needs both keys.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seat that opens every round.
    #[serde(default)]
    #[getter(skip)]
    starting_seat: Seat,

    /// Player in the first seat.
    #[serde(default = "default_first")]
    first: PlayerConfig,

    /// Player in the second seat.
    #[serde(default = "default_second")]
    second: PlayerConfig,
}

fn default_first() -> PlayerConfig {
    PlayerConfig::new("Player 1", Mark::X)
}

fn default_second() -> PlayerConfig {
    PlayerConfig::new("Player 2", Mark::O)
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            first: default_first(),
            second: default_second(),
            starting_seat: Seat::default(),
        }
    }
}

impl SessionConfig {
    /// Creates a configuration from two players, first seat opening.
    pub fn new(first: PlayerConfig, second: PlayerConfig) -> Self {
        Self {
            first,
            second,
            starting_seat: Seat::First,
        }
    }

    /// Sets the seat that opens every round.
    #[must_use]
    pub fn with_starting_seat(mut self, seat: Seat) -> Self {
        self.starting_seat = seat;
        self
    }

    /// Returns the seat that opens every round.
    pub fn starting_seat(&self) -> Seat {
        self.starting_seat
    }

    /// Returns the configuration of the player in `seat`.
    pub fn player(&self, seat: Seat) -> &PlayerConfig {
        match seat {
            Seat::First => &self.first,
            Seat::Second => &self.second,
        }
    }

    /// Checks names are non-blank and marks are printable and distinct.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), SessionError> {
        for seat in [Seat::First, Seat::Second] {
            let player = self.player(seat);
            if player.name.trim().is_empty() {
                warn!(%seat, "Blank player name in config");
                return Err(SessionError::BlankName(seat));
            }
            if player.mark.is_blank() {
                warn!(%seat, "Blank mark in config");
                return Err(SessionError::BlankMark(seat));
            }
        }

        if self.first.mark == self.second.mark {
            warn!(mark = %self.first.mark, "Both seats share a mark");
            return Err(SessionError::DuplicateMark(self.first.mark));
        }

        Ok(())
    }

    /// Parses and validates a TOML document.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        debug!(?config, "Config parsed");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(
            first = %config.first.name,
            second = %config.second.name,
            "Config loaded successfully"
        );
        Ok(config)
    }
}
