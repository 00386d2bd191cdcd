//! Noughts - a two-player grid game engine
//!
//! Maintains a 3x3 grid of marks, detects completed lines and full grids,
//! and sequences turns between two players while keeping score across
//! rounds. Rendering and input handling belong to the caller.
//!
//! # Architecture
//!
//! - **Grid**: cell storage, placement and terminal-state queries
//! - **Rules**: pure win and draw detection over a grid
//! - **Controller**: the session object; owns the grid, both players and
//!   the active seat
//! - **Invariants**: consistency checks asserted after every accepted move
//! - **Config**: construction parameters, loadable from TOML
//!
//! # Example
//!
//! ```
//! use noughts::{Controller, Seat, TurnOutcome};
//!
//! let mut session = Controller::default();
//! for (row, col) in [(0, 0), (1, 0), (1, 1), (2, 0)] {
//!     assert_eq!(session.play_turn(row, col), TurnOutcome::Continue);
//! }
//! assert_eq!(session.play_turn(2, 2), TurnOutcome::Victory("Player 1".into()));
//! assert_eq!(session.player(Seat::First).wins(), 1);
//!
//! session.reset();
//! assert_eq!(session.active_seat(), Seat::First);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod controller;
mod error;
mod grid;
mod outcome;
mod player;
mod types;

pub mod invariants;
pub mod rules;

// Crate-level exports - Domain types
pub use types::{Cell, GRID_SIZE, Mark, Seat};

// Crate-level exports - Grid and rules
pub use grid::Grid;
pub use rules::Line;

// Crate-level exports - Session
pub use controller::Controller;
pub use outcome::{Ignored, RoundStatus, TurnOutcome};
pub use player::Player;

// Crate-level exports - Configuration and errors
pub use config::{PlayerConfig, SessionConfig};
pub use error::{ConfigError, SessionError};
