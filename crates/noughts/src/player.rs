//! Player records: display name, mark and running score.

use crate::types::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One of the two participants in a session.
///
/// The mark is fixed at creation. The win count only ever grows and
/// survives grid resets.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,

    /// Mark this player places.
    #[getter(skip)]
    mark: Mark,

    /// Rounds won this session.
    #[getter(skip)]
    wins: u32,
}

impl Player {
    /// Creates a player with no wins.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>, mark: Mark) -> Self {
        Self {
            name: name.as_ref().to_string(),
            mark,
            wins: 0,
        }
    }

    /// Returns the player's mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the number of rounds won.
    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Replaces the display name.
    ///
    /// Returns `false` and keeps the current name if `name` is blank.
    #[instrument(skip(self, name), fields(old = %self.name))]
    pub(crate) fn rename(&mut self, name: &str) -> bool {
        if name.trim().is_empty() {
            return false;
        }
        debug!(new = name, "Player renamed");
        self.name = name.to_string();
        true
    }

    /// Credits one won round.
    pub(crate) fn record_win(&mut self) {
        self.wins += 1;
    }
}
