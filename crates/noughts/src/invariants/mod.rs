//! First-class invariants for a session.
//!
//! Invariants are logical properties that must hold after every accepted
//! placement. They are checked in debug builds by the controller and are
//! testable on their own.

pub mod active_seat;
pub mod balanced_marks;
pub mod single_winner;

pub use active_seat::ActiveSeatInvariant;
pub use balanced_marks::BalancedMarksInvariant;
pub use single_winner::SingleWinnerInvariant;

use crate::controller::Controller;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so sets compose without boxing.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not only the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (
    BalancedMarksInvariant,
    SingleWinnerInvariant,
    ActiveSeatInvariant,
);

/// Asserts that all session invariants hold.
///
/// Only runs in debug builds, where a violation panics.
pub(crate) fn assert_invariants(controller: &Controller) {
    if cfg!(debug_assertions) {
        let result = SessionInvariants::check_all(controller);
        if let Err(violations) = &result {
            for violation in violations {
                warn!(invariant = %violation.description, "Session invariant violated");
            }
        }
        debug_assert!(result.is_ok(), "Session invariants violated: {:?}", result);
    }
}
