//! Active seat invariant: the seat to move follows from the marks placed.

use super::Invariant;
use crate::controller::Controller;
use crate::types::Seat;

/// Invariant: the active seat matches the number of placed marks.
///
/// While the round is in progress the seat to move is the starting seat
/// after an even number of placements and the other seat after an odd
/// number. Once the round is over the active seat is the one that placed
/// the final mark.
pub struct ActiveSeatInvariant;

impl ActiveSeatInvariant {
    fn expected(controller: &Controller) -> Seat {
        let starting = controller.starting_seat();
        let placed = controller.grid().marked_count();
        let opener_to_act = if controller.status().is_over() {
            placed % 2 == 1
        } else {
            placed % 2 == 0
        };

        if opener_to_act { starting } else { starting.other() }
    }
}

impl Invariant<Controller> for ActiveSeatInvariant {
    fn holds(controller: &Controller) -> bool {
        controller.active_seat() == Self::expected(controller)
    }

    fn description() -> &'static str {
        "Active seat follows from the number of placed marks"
    }
}
