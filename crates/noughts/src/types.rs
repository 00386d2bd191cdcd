//! Core domain types for the noughts grid.

use serde::{Deserialize, Serialize};

/// Side length of the square grid.
pub const GRID_SIZE: usize = 3;

/// Symbol a player places into grid cells.
///
/// Any single non-whitespace character works; the two players of a
/// session must hold distinct marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(transparent)]
#[display("{}", _0)]
pub struct Mark(char);

impl Mark {
    /// Conventional mark of the first seat.
    pub const X: Mark = Mark('X');

    /// Conventional mark of the second seat.
    pub const O: Mark = Mark('O');

    /// Creates a mark from a symbol.
    pub const fn new(symbol: char) -> Self {
        Self(symbol)
    }

    /// Returns the underlying symbol.
    pub const fn symbol(self) -> char {
        self.0
    }

    /// Returns true if the symbol would render as nothing.
    pub fn is_blank(self) -> bool {
        self.0.is_whitespace() || self.0.is_control()
    }
}

impl From<char> for Mark {
    fn from(symbol: char) -> Self {
        Self(symbol)
    }
}

/// A cell on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// One of the two player slots in a session.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Seat {
    /// The first-created player.
    #[default]
    First,
    /// The second-created player.
    Second,
}

impl Seat {
    /// Returns the opposite seat.
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Index into a two-element array of per-seat data.
    pub(crate) fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_other_seat() {
        assert_eq!(Seat::First.other(), Seat::Second);
        assert_eq!(Seat::Second.other(), Seat::First);
    }

    #[test]
    fn test_seat_iteration_order() {
        let seats: Vec<_> = Seat::iter().collect();
        assert_eq!(seats, vec![Seat::First, Seat::Second]);
        assert_eq!(Seat::First.to_string(), "first");
    }

    #[test]
    fn test_blank_marks() {
        assert!(Mark::new(' ').is_blank());
        assert!(Mark::new('\t').is_blank());
        assert!(!Mark::X.is_blank());
        assert_eq!(Mark::from('#').symbol(), '#');
    }

    #[test]
    fn test_cell_mark() {
        assert_eq!(Cell::Empty.mark(), None);
        assert_eq!(Cell::Marked(Mark::O).mark(), Some(Mark::O));
        assert!(Cell::default().is_empty());
    }
}
