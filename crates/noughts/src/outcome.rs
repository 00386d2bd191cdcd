//! Results of a turn and of a round.

use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// What happened when a turn was played.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The active player completed a line. Carries their display name.
    Victory(String),
    /// The last open cell was filled without completing a line.
    Draw,
    /// Mark placed, round goes on with the other player.
    Continue,
    /// Nothing changed.
    Ignored(Ignored),
}

impl TurnOutcome {
    /// Checks if this turn ended the round.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnOutcome::Victory(_) | TurnOutcome::Draw)
    }

    /// Checks if a mark was placed.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, TurnOutcome::Ignored(_))
    }
}

impl std::fmt::Display for TurnOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnOutcome::Victory(name) => write!(f, "{} victory!", name),
            TurnOutcome::Draw => write!(f, "It's a draw!"),
            TurnOutcome::Continue => write!(f, "Next turn"),
            TurnOutcome::Ignored(reason) => write!(f, "Move ignored: {}", reason),
        }
    }
}

/// Why a turn left the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Ignored {
    /// Coordinate out of range or cell already marked.
    #[display("cell unavailable")]
    Rejected,
    /// The round already has a result and has not been reset.
    #[display("round is over")]
    RoundOver,
}

/// State of the current round, derived from the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Moves are still accepted.
    InProgress,
    /// A line was completed by this mark.
    Won(Mark),
    /// Grid full, no line.
    Drawn,
}

impl RoundStatus {
    /// Checks if the round has ended.
    pub fn is_over(self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }

    /// Returns the winning mark if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            RoundStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_text() {
        assert_eq!(TurnOutcome::Victory("Ada".into()).to_string(), "Ada victory!");
        assert_eq!(TurnOutcome::Draw.to_string(), "It's a draw!");
        assert_eq!(
            TurnOutcome::Ignored(Ignored::RoundOver).to_string(),
            "Move ignored: round is over"
        );
    }

    #[test]
    fn test_terminal_and_accepted() {
        assert!(TurnOutcome::Draw.is_terminal());
        assert!(TurnOutcome::Victory("Ada".into()).is_terminal());
        assert!(!TurnOutcome::Continue.is_terminal());
        assert!(TurnOutcome::Continue.is_accepted());
        assert!(!TurnOutcome::Ignored(Ignored::Rejected).is_accepted());
    }

    #[test]
    fn test_round_status() {
        assert!(!RoundStatus::InProgress.is_over());
        assert!(RoundStatus::Drawn.is_over());
        assert_eq!(RoundStatus::Won(Mark::O).winner(), Some(Mark::O));
        assert_eq!(RoundStatus::Drawn.winner(), None);
    }
}
