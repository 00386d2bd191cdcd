//! The 3x3 grid of marks.

use crate::rules::{self, Line};
use crate::types::{Cell, GRID_SIZE, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Fixed-size grid of cells.
///
/// The grid knows nothing about players or turns. It accepts a mark into
/// an empty in-range cell and answers terminal-state queries. Once marked,
/// a cell only becomes empty again through [`Grid::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Creates an empty grid.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; GRID_SIZE]; GRID_SIZE];
        debug!("Grid cleared");
    }

    /// Places `mark` at `(row, col)`.
    ///
    /// Returns `false` and leaves the grid untouched if the coordinate is
    /// out of range or the cell is already marked. Both cases are ordinary
    /// rejected moves, not faults.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) if cell.is_empty() => {
                *cell = Cell::Marked(mark);
                debug!("Mark placed");
                true
            }
            Some(_) => {
                debug!("Cell already occupied");
                false
            }
            None => {
                debug!("Coordinate out of range");
                false
            }
        }
    }

    /// Returns the mark owning the first complete line, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.winning_line().map(|(_, mark)| mark)
    }

    /// Returns the first complete line and its mark.
    pub fn winning_line(&self) -> Option<(Line, Mark)> {
        rules::check_winner(self)
    }

    /// Checks if every cell is marked.
    ///
    /// Only signals a draw when [`Grid::winner`] is `None`.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Gets the cell at `(row, col)`.
    ///
    /// Out-of-range coordinates yield `None` so callers can ask without
    /// bounds-checking first.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Checks if `(row, col)` is in range and unmarked.
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Open coordinates in row-major order.
    #[instrument(skip(self))]
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        (0..GRID_SIZE)
            .flat_map(|row| (0..GRID_SIZE).map(move |col| (row, col)))
            .filter(|&pos| self.cell_at(pos).is_empty())
            .collect()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Number of marked cells.
    pub fn marked_count(&self) -> usize {
        self.cells().filter(|cell| !cell.is_empty()).count()
    }

    /// Number of cells holding `mark`.
    pub fn count_of(&self, mark: Mark) -> usize {
        self.cells().filter(|&cell| cell == Cell::Marked(mark)).count()
    }

    /// Unchecked cell access for coordinates produced inside the crate.
    pub(crate) fn cell_at(&self, (row, col): (usize, usize)) -> Cell {
        self.cells[row][col]
    }
}
