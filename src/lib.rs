//! grid_astar - A* shortest paths on occupancy grids
//!
//! This crate provides a 4-connected A* planner with a Manhattan heuristic
//! that paints its progress onto the grid it searches, together with a
//! board loader, text and gnuplot renderers.

// Core modules
pub mod common;
pub mod utils;

// Algorithm modules
pub mod path_planning;

// Re-export common types for convenience
pub use common::{CellState, Coord, GridPlanner, NoopObserver, SearchObserver};
pub use common::{PlannerError, PlanningResult};
pub use path_planning::{search, AStarConfig, AStarPlanner, SearchOutcome, SearchStats, Solution};
pub use utils::Grid;
