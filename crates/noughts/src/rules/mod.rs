//! Game rules for the noughts grid.
//!
//! Pure functions evaluating a grid: which line (if any) is complete and
//! whether every cell is taken. Kept apart from grid storage so the
//! controller and the invariant checks share one definition.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, check_winner, complete_lines};
