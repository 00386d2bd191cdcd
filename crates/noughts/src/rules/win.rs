//! Win detection logic.

use crate::grid::Grid;
use crate::types::{Cell, GRID_SIZE, Mark};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// A row, column or diagonal of the grid: the unit of win detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Horizontal line at the given row index.
    Row(usize),
    /// Vertical line at the given column index.
    Column(usize),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// All lines in scan order: rows, columns, main diagonal, anti-diagonal.
    pub fn all() -> impl Iterator<Item = Line> {
        (0..GRID_SIZE)
            .map(Line::Row)
            .chain((0..GRID_SIZE).map(Line::Column))
            .chain([Line::Diagonal, Line::AntiDiagonal])
    }

    /// Returns the `(row, col)` coordinates covered by this line.
    pub fn coordinates(self) -> [(usize, usize); GRID_SIZE] {
        std::array::from_fn(|i| match self {
            Line::Row(row) => (row, i),
            Line::Column(col) => (i, col),
            Line::Diagonal => (i, i),
            Line::AntiDiagonal => (i, GRID_SIZE - 1 - i),
        })
    }
}

/// Iterates over every complete line in scan order with the mark filling it.
///
/// A line of empty cells never counts.
pub fn complete_lines(grid: &Grid) -> impl Iterator<Item = (Line, Mark)> + '_ {
    Line::all().filter_map(move |line| {
        let [first, rest @ ..] = line.coordinates();
        let Cell::Marked(mark) = grid.cell_at(first) else {
            return None;
        };

        rest.iter()
            .all(|&pos| grid.cell_at(pos) == Cell::Marked(mark))
            .then_some((line, mark))
    })
}

/// Checks if there is a winner on the grid.
///
/// Returns the first complete line in scan order (rows, columns, main
/// diagonal, anti-diagonal) together with the mark that fills it.
#[instrument(skip(grid))]
pub fn check_winner(grid: &Grid) -> Option<(Line, Mark)> {
    let found = complete_lines(grid).next();
    if let Some((line, mark)) = found {
        trace!(?line, %mark, "Complete line found");
    }
    found
}
