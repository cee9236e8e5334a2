//! Common traits defining interfaces for grid planners

use crate::common::error::PlanningResult;
use crate::common::types::Coord;
use crate::path_planning::{Candidate, SearchOutcome};
use crate::utils::Grid;

/// Trait for grid-based path planning algorithms
pub trait GridPlanner {
    /// Plan on `grid` from `start` to `goal`, consuming the grid
    fn plan(&self, grid: Grid, start: Coord, goal: Coord) -> PlanningResult<SearchOutcome>;
}

/// Hooks invoked while a search runs
///
/// Every method defaults to doing nothing.
pub trait SearchObserver {
    /// A candidate was pushed onto the frontier
    fn on_insert(&mut self, _candidate: &Candidate) {}

    /// A queued cell was reached again by a shorter route
    fn on_improve(&mut self, _candidate: &Candidate) {}

    /// A candidate was removed from the frontier for expansion
    fn on_select(&mut self, _candidate: &Candidate) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        inserts: usize,
    }

    impl SearchObserver for Counter {
        fn on_insert(&mut self, _candidate: &Candidate) {
            self.inserts += 1;
        }
    }

    #[test]
    fn test_default_hooks_are_noops() {
        let mut counter = Counter { inserts: 0 };
        let candidate = Candidate::new(Coord::origin(), 0, 3);
        counter.on_select(&candidate);
        counter.on_insert(&candidate);
        assert_eq!(counter.inserts, 1);

        let mut noop = NoopObserver;
        noop.on_insert(&candidate);
        noop.on_select(&candidate);
    }
}
