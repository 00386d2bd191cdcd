//! Error types for session construction and configuration.
//!
//! Gameplay itself never fails: rejected moves surface as
//! [`crate::TurnOutcome::Ignored`]. Errors only arise while building a
//! session or loading its configuration.

use crate::types::{Mark, Seat};
use derive_more::{Display, Error};
use tracing::instrument;

/// Invalid session parameters.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// Both players were given the same mark.
    #[display("Both players cannot use mark '{}'", _0)]
    DuplicateMark(Mark),

    /// A player's mark is whitespace or a control character.
    #[display("Mark for {} seat is blank", _0)]
    BlankMark(Seat),

    /// A player's name is empty or whitespace only.
    #[display("Name for {} seat is blank", _0)]
    BlankName(Seat),

    /// A restored snapshot could not have been reached by legal play.
    #[display("Inconsistent session snapshot: {}", _0)]
    InconsistentSnapshot(String),
}

impl std::error::Error for SessionError {}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<SessionError> for ConfigError {
    #[track_caller]
    fn from(err: SessionError) -> Self {
        Self::new(format!("Invalid session: {}", err))
    }
}

impl From<toml::de::Error> for ConfigError {
    #[track_caller]
    fn from(err: toml::de::Error) -> Self {
        Self::new(format!("Failed to parse config: {}", err))
    }
}
