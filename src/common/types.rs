//! Common types used throughout grid_astar

use std::fmt;

/// Grid coordinate, row first
///
/// Signed so that stepping off the top or left edge produces a coordinate
/// the grid simply reports as out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn origin() -> Self {
        Self { row: 0, col: 0 }
    }

    /// Coordinate shifted by a row/column delta
    pub fn offset(&self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl From<(i32, i32)> for Coord {
    fn from(tuple: (i32, i32)) -> Self {
        Self { row: tuple.0, col: tuple.1 }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// State of a single grid cell
///
/// During a search a free cell only moves forward:
/// `Empty -> Closed -> Path -> Start/Goal`. Obstacles never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    Obstacle,
    /// Queued on the frontier (and possibly expanded)
    Closed,
    /// Selected for expansion
    Path,
    Start,
    Goal,
}

impl CellState {
    /// Map a raw board value: zero is free, anything else blocks
    pub fn from_value(value: i64) -> Self {
        if value == 0 {
            CellState::Empty
        } else {
            CellState::Obstacle
        }
    }

    /// True for every state a search paints onto a free cell
    pub fn is_visited(&self) -> bool {
        matches!(
            self,
            CellState::Closed | CellState::Path | CellState::Start | CellState::Goal
        )
    }
}
