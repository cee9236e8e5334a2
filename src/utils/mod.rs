//! Utility modules for grid_astar

pub mod grid_map;
pub mod board;
pub mod render;
pub mod visualization;

pub use grid_map::*;
pub use board::*;
pub use render::*;
pub use visualization::{quick_plot_solution, colors, PathStyle, PointStyle, Visualizer};
