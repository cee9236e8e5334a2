// Path Planning algorithms module

pub mod heuristic;
pub mod frontier;
pub mod a_star;

pub use heuristic::*;
pub use frontier::*;
pub use a_star::*;
