//! Error types for grid_astar

use thiserror::Error;

/// Main error type for grid planning
///
/// A search that exhausts its frontier is not an error; it is reported as
/// [`crate::path_planning::SearchOutcome::Failed`]. These variants cover
/// caller mistakes and I/O around the planner.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Caller supplied a grid or endpoints the planner cannot work with
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// A board file line could not be parsed
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Visualization error
    #[error("Visualization error: {0}")]
    Visualization(String),
}

/// Result type alias for planner operations
pub type PlanningResult<T> = Result<T, PlannerError>;
