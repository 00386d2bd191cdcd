//! Turn sequencing for a two-player session.
//!
//! The [`Controller`] is the session object: it owns the grid, both
//! players and the active seat. Callers construct it explicitly; there is
//! no shared global session.

use crate::config::{PlayerConfig, SessionConfig};
use crate::error::SessionError;
use crate::grid::Grid;
use crate::invariants::{InvariantSet, SessionInvariants, assert_invariants};
use crate::outcome::{Ignored, RoundStatus, TurnOutcome};
use crate::player::Player;
use crate::types::{Mark, Seat};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

/// Drives one session: places the active player's mark, awards wins and
/// alternates turns.
///
/// Round state (in progress, won, drawn) is never stored; it is read off
/// the grid on every call.
///
/// Serialized snapshots can be restored. Restoring re-runs the
/// construction checks and the session invariants, so a snapshot that
/// legal play could not produce fails to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Snapshot")]
pub struct Controller {
    pub(crate) grid: Grid,
    players: [Player; 2],
    active: Seat,
    starting: Seat,
}

/// Unchecked wire form of a [`Controller`].
#[derive(Deserialize)]
struct Snapshot {
    grid: Grid,
    players: [Player; 2],
    active: Seat,
    starting: Seat,
}

// ─────────────────────────────────────────────────────────────
//  Construction
// ─────────────────────────────────────────────────────────────

impl Controller {
    /// Creates a session from validated construction parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if a name or mark is blank, or both
    /// players share a mark.
    #[instrument(skip(config), fields(starting = %config.starting_seat()))]
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        config.validate()?;
        let controller = Self::from_config(&config);
        info!(
            first = %controller.players[0].name(),
            second = %controller.players[1].name(),
            "Session created"
        );
        Ok(controller)
    }

    fn from_config(config: &SessionConfig) -> Self {
        let players = [Seat::First, Seat::Second].map(|seat| {
            let player = config.player(seat);
            Player::new(player.name(), player.mark())
        });

        Self {
            grid: Grid::new(),
            players,
            active: config.starting_seat(),
            starting: config.starting_seat(),
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}

impl TryFrom<Snapshot> for Controller {
    type Error = SessionError;

    #[instrument(skip(snapshot), fields(active = %snapshot.active, starting = %snapshot.starting))]
    fn try_from(snapshot: Snapshot) -> Result<Self, Self::Error> {
        let [first, second] = &snapshot.players;
        SessionConfig::new(
            PlayerConfig::new(first.name().clone(), first.mark()),
            PlayerConfig::new(second.name().clone(), second.mark()),
        )
        .validate()?;

        let controller = Self {
            grid: snapshot.grid,
            players: snapshot.players,
            active: snapshot.active,
            starting: snapshot.starting,
        };

        SessionInvariants::check_all(&controller).map_err(|violations| {
            let described: Vec<_> = violations
                .iter()
                .map(|violation| violation.description.as_str())
                .collect();
            warn!(violations = ?described, "Rejected session snapshot");
            SessionError::InconsistentSnapshot(described.join("; "))
        })?;

        debug!(scores = ?controller.scores(), "Session restored");
        Ok(controller)
    }
}

// ─────────────────────────────────────────────────────────────
//  Turns and rounds
// ─────────────────────────────────────────────────────────────

impl Controller {
    /// Attempts to place the active player's mark at `(row, col)`.
    ///
    /// - Round already over: [`Ignored::RoundOver`], nothing changes.
    /// - Cell out of range or taken: [`Ignored::Rejected`], nothing changes.
    /// - Line completed: the active player is credited a win and
    ///   [`TurnOutcome::Victory`] carries their name. The active seat stays.
    /// - Grid filled: [`TurnOutcome::Draw`]. The active seat stays.
    /// - Otherwise the other seat becomes active: [`TurnOutcome::Continue`].
    #[instrument(skip(self), fields(active = %self.active))]
    pub fn play_turn(&mut self, row: usize, col: usize) -> TurnOutcome {
        if self.status().is_over() {
            debug!("Round already over, ignoring input");
            return TurnOutcome::Ignored(Ignored::RoundOver);
        }

        let mark = self.active_player().mark();
        if !self.grid.place(row, col, mark) {
            return TurnOutcome::Ignored(Ignored::Rejected);
        }

        let outcome = if self.grid.winner().is_some() {
            let player = &mut self.players[self.active.index()];
            player.record_win();
            info!(winner = %player.name(), wins = player.wins(), "Round won");
            TurnOutcome::Victory(player.name().clone())
        } else if self.grid.is_full() {
            info!("Round drawn");
            TurnOutcome::Draw
        } else {
            self.active = self.active.other();
            debug!(next = %self.active, "Turn passed");
            TurnOutcome::Continue
        };

        assert_invariants(self);
        outcome
    }

    /// Clears the grid for a new round.
    ///
    /// The starting seat becomes active again. Scores are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.grid.reset();
        self.active = self.starting;
        info!(scores = ?self.scores(), "New round");
    }

    /// Returns the state of the current round.
    pub fn status(&self) -> RoundStatus {
        if let Some(mark) = self.grid.winner() {
            RoundStatus::Won(mark)
        } else if self.grid.is_full() {
            RoundStatus::Drawn
        } else {
            RoundStatus::InProgress
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Players
// ─────────────────────────────────────────────────────────────

impl Controller {
    /// Renames the player in `seat`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::BlankName`] for an empty or whitespace name;
    /// the old name is kept.
    pub fn rename(&mut self, seat: Seat, name: &str) -> Result<(), SessionError> {
        if self.players[seat.index()].rename(name) {
            Ok(())
        } else {
            warn!(%seat, "Rejected blank player name");
            Err(SessionError::BlankName(seat))
        }
    }

    /// Returns the player in `seat`.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Both players with their seats, first seat first.
    pub fn players(&self) -> impl Iterator<Item = (Seat, &Player)> + '_ {
        Seat::iter().map(move |seat| (seat, self.player(seat)))
    }

    /// Finds the player placing `mark`.
    pub fn player_with_mark(&self, mark: Mark) -> Option<(Seat, &Player)> {
        self.players().find(|(_, player)| player.mark() == mark)
    }

    /// Returns the seat whose mark goes into the next accepted placement.
    pub fn active_seat(&self) -> Seat {
        self.active
    }

    /// Returns the player whose mark goes into the next accepted placement.
    pub fn active_player(&self) -> &Player {
        self.player(self.active)
    }

    /// Returns the seat that opens every round.
    pub fn starting_seat(&self) -> Seat {
        self.starting
    }

    /// Win counts as `(first, second)`.
    pub fn scores(&self) -> (u32, u32) {
        (self.players[0].wins(), self.players[1].wins())
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invariants::{ActiveSeatInvariant, Invariant};

    #[test]
    fn test_default_session() {
        let controller = Controller::default();
        assert_eq!(controller.active_seat(), Seat::First);
        assert_eq!(controller.active_player().mark(), Mark::X);
        assert_eq!(controller.player(Seat::Second).name(), "Player 2");
        assert_eq!(controller.scores(), (0, 0));
        assert_eq!(controller.status(), RoundStatus::InProgress);
    }

    #[test]
    fn test_new_rejects_duplicate_marks() {
        let config = SessionConfig::new(
            PlayerConfig::new("Ada", Mark::O),
            PlayerConfig::new("Grace", Mark::O),
        );
        assert_eq!(
            Controller::new(config),
            Err(SessionError::DuplicateMark(Mark::O))
        );
    }

    #[test]
    fn test_turn_alternates() {
        let mut controller = Controller::default();
        assert_eq!(controller.play_turn(0, 0), TurnOutcome::Continue);
        assert_eq!(controller.active_seat(), Seat::Second);
        assert_eq!(controller.play_turn(1, 1), TurnOutcome::Continue);
        assert_eq!(controller.active_seat(), Seat::First);
        assert_eq!(controller.grid().count_of(Mark::O), 1);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut controller = Controller::default();
        controller.play_turn(0, 0);
        assert_eq!(
            controller.play_turn(0, 0),
            TurnOutcome::Ignored(Ignored::Rejected)
        );
        assert_eq!(
            controller.play_turn(5, 0),
            TurnOutcome::Ignored(Ignored::Rejected)
        );
        assert_eq!(controller.active_seat(), Seat::Second);
        assert_eq!(controller.grid().marked_count(), 1);
    }

    #[test]
    fn test_player_with_mark() {
        let controller = Controller::default();
        let (seat, player) = controller.player_with_mark(Mark::O).unwrap();
        assert_eq!(seat, Seat::Second);
        assert_eq!(player.name(), "Player 2");
        assert!(controller.player_with_mark(Mark::new('#')).is_none());
    }

    #[test]
    fn test_rename() {
        let mut controller = Controller::default();
        controller.rename(Seat::First, "Ada").unwrap();
        assert_eq!(controller.player(Seat::First).name(), "Ada");
        assert_eq!(
            controller.rename(Seat::Second, ""),
            Err(SessionError::BlankName(Seat::Second))
        );
        assert_eq!(controller.player(Seat::Second).name(), "Player 2");
    }

    #[test]
    fn test_restore_rechecks_invariants() {
        let mut controller = Controller::default();
        controller.play_turn(0, 0);
        controller.active = Seat::First;

        let snapshot = Snapshot {
            grid: controller.grid.clone(),
            players: controller.players.clone(),
            active: controller.active,
            starting: controller.starting,
        };
        match Controller::try_from(snapshot) {
            Err(SessionError::InconsistentSnapshot(reason)) => {
                assert!(reason.contains(ActiveSeatInvariant::description()));
            }
            other => panic!("expected inconsistent snapshot, got {:?}", other),
        }
    }
}
