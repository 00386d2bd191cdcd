//! Balanced marks invariant: the opening seat leads by at most one mark.

use super::Invariant;
use crate::controller::Controller;

/// Invariant: marks on the grid reflect strict alternation.
///
/// The starting seat has placed as many marks as the other seat, or
/// exactly one more. No third mark appears on the grid.
pub struct BalancedMarksInvariant;

impl Invariant<Controller> for BalancedMarksInvariant {
    fn holds(controller: &Controller) -> bool {
        let grid = controller.grid();
        let starting = controller.starting_seat();
        let opener = grid.count_of(controller.player(starting).mark());
        let follower = grid.count_of(controller.player(starting.other()).mark());

        opener + follower == grid.marked_count() && (opener == follower || opener == follower + 1)
    }

    fn description() -> &'static str {
        "Starting seat leads by at most one mark"
    }
}
