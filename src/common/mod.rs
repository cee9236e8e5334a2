//! Common types, traits, and error definitions for grid_astar
//!
//! This module provides the foundational building blocks shared by the
//! grid model, the planners and the board I/O.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;
