//! Draw detection logic.

use super::win::check_winner;
use crate::grid::Grid;
use tracing::instrument;

/// Checks if the grid is full (every cell marked).
#[instrument(skip(grid))]
pub fn is_full(grid: &Grid) -> bool {
    grid.cells().all(|cell| !cell.is_empty())
}

/// A full grid with no complete line.
#[instrument(skip(grid))]
pub fn is_draw(grid: &Grid) -> bool {
    is_full(grid) && check_winner(grid).is_none()
}
