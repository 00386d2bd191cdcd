//! Single winner invariant: only one mark can own complete lines.

use super::Invariant;
use crate::controller::Controller;
use crate::rules::complete_lines;

/// Invariant: complete lines, if any, all belong to the same mark.
///
/// Play stops at the first complete line, so two marks can never both
/// finish one.
pub struct SingleWinnerInvariant;

impl Invariant<Controller> for SingleWinnerInvariant {
    fn holds(controller: &Controller) -> bool {
        let mut marks = complete_lines(controller.grid()).map(|(_, mark)| mark);
        match marks.next() {
            Some(first) => marks.all(|mark| mark == first),
            None => true,
        }
    }

    fn description() -> &'static str {
        "At most one mark owns complete lines"
    }
}
