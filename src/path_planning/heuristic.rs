//! Distance heuristics for grid search

use crate::common::Coord;

/// Manhattan (L1) distance between two cells
///
/// Admissible and consistent for 4-connected unit-cost moves.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> u32 {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}
