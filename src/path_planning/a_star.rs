//! A* path planning on a 4-connected occupancy grid
//!
//! The planner paints its progress directly onto the grid it owns:
//! every queued cell becomes `Closed`, every selected cell becomes `Path`,
//! and on success the endpoints are relabelled `Start` and `Goal`.
//! Alongside the painted grid a parent map is kept so the ordered route
//! from start to goal can be rebuilt.
//!
//! A cell is queued at most once. When a queued cell is reached again by a
//! shorter route its cost and parent are lowered in place, which keeps the
//! route optimal even though cells are closed as soon as they are queued.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::common::{
    CellState, Coord, GridPlanner, NoopObserver, PlannerError, PlanningResult, SearchObserver,
};
use crate::path_planning::frontier::{Candidate, Frontier};
use crate::path_planning::heuristic::manhattan;
use crate::utils::Grid;

/// Neighbor deltas (row, col): up, left, down, right
const MOTION: [(i32, i32); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Configuration for A* planner
#[derive(Debug, Clone)]
pub struct AStarConfig {
    /// Emit a debug progress event every this many selections (0 disables)
    pub log_interval: usize,
}

impl Default for AStarConfig {
    fn default() -> Self {
        Self { log_interval: 100 }
    }
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidates taken off the frontier (the goal included)
    pub selected: usize,
    /// Candidates pushed onto the frontier (the start included)
    pub inserted: usize,
    /// Queued cells whose cost was lowered by a shorter route
    pub improved: usize,
}

/// A successful search
#[derive(Debug, Clone)]
pub struct Solution {
    /// The painted grid
    pub grid: Grid,
    /// Ordered cells from start to goal, both included
    pub route: Vec<Coord>,
    pub stats: SearchStats,
}

impl Solution {
    /// Number of moves along the route
    pub fn steps(&self) -> usize {
        self.route.len().saturating_sub(1)
    }
}

/// Terminal state of a search
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    Succeeded(Solution),
    /// Frontier exhausted before the goal was selected
    Failed(SearchStats),
}

impl SearchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchOutcome::Succeeded(_))
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchOutcome::Succeeded(solution) => Some(solution),
            SearchOutcome::Failed(_) => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution> {
        match self {
            SearchOutcome::Succeeded(solution) => Some(solution),
            SearchOutcome::Failed(_) => None,
        }
    }

    /// The painted grid, or `None` when no path exists
    pub fn into_grid(self) -> Option<Grid> {
        self.into_solution().map(|s| s.grid)
    }

    pub fn stats(&self) -> SearchStats {
        match self {
            SearchOutcome::Succeeded(solution) => solution.stats,
            SearchOutcome::Failed(stats) => *stats,
        }
    }
}

/// A* planner for Manhattan-distance grids
#[derive(Debug, Clone, Default)]
pub struct AStarPlanner {
    config: AStarConfig,
}

impl AStarPlanner {
    pub fn new(config: AStarConfig) -> Self {
        AStarPlanner { config }
    }

    pub fn config(&self) -> &AStarConfig {
        &self.config
    }

    /// Plan while reporting every frontier insertion and selection to `observer`
    pub fn plan_with_observer<O: SearchObserver>(
        &self,
        mut grid: Grid,
        start: Coord,
        goal: Coord,
        observer: &mut O,
    ) -> PlanningResult<SearchOutcome> {
        validate_input(&grid, start, goal)?;

        let mut frontier = Frontier::new();
        let mut parents: HashMap<Coord, Coord> = HashMap::new();
        let mut stats = SearchStats::default();

        let seed = Candidate::new(start, 0, manhattan(start, goal));
        frontier.insert(seed, &mut grid);
        observer.on_insert(&seed);
        stats.inserted += 1;

        while let Some(current) = frontier.select_best() {
            observer.on_select(&current);
            stats.selected += 1;
            if self.config.log_interval > 0 && stats.selected % self.config.log_interval == 0 {
                debug!(
                    selected = stats.selected,
                    inserted = stats.inserted,
                    open = frontier.len(),
                    "search progress"
                );
            }

            grid.mark_path(current.coord);

            if current.coord == goal {
                // relabel after the path mark so the endpoints win
                grid.mark_start(start);
                grid.mark_goal(goal);
                let route = backtrack(&parents, start, goal);
                info!(
                    %start,
                    %goal,
                    steps = route.len() - 1,
                    selected = stats.selected,
                    "found goal"
                );
                return Ok(SearchOutcome::Succeeded(Solution { grid, route, stats }));
            }

            for (dr, dc) in MOTION {
                let neighbor = current.coord.offset(dr, dc);
                let next = Candidate::new(neighbor, current.g + 1, manhattan(neighbor, goal));

                if grid.is_traversable(neighbor) {
                    frontier.insert(next, &mut grid);
                    parents.insert(neighbor, current.coord);
                    observer.on_insert(&next);
                    stats.inserted += 1;
                } else if frontier.improve(next) {
                    parents.insert(neighbor, current.coord);
                    observer.on_improve(&next);
                    stats.improved += 1;
                }
            }
        }

        warn!(%start, %goal, selected = stats.selected, "no path found");
        Ok(SearchOutcome::Failed(stats))
    }
}

impl GridPlanner for AStarPlanner {
    fn plan(&self, grid: Grid, start: Coord, goal: Coord) -> PlanningResult<SearchOutcome> {
        self.plan_with_observer(grid, start, goal, &mut NoopObserver)
    }
}

/// Run A* with the default configuration
pub fn search(grid: Grid, start: Coord, goal: Coord) -> PlanningResult<SearchOutcome> {
    AStarPlanner::default().plan(grid, start, goal)
}

fn validate_input(grid: &Grid, start: Coord, goal: Coord) -> PlanningResult<()> {
    if grid.is_empty() {
        return Err(PlannerError::InvalidInput(format!(
            "grid is empty ({}x{})",
            grid.rows(),
            grid.cols()
        )));
    }

    for (name, coord) in [("start", start), ("goal", goal)] {
        match grid.get(coord) {
            None => {
                return Err(PlannerError::InvalidInput(format!(
                    "{} {} is outside the {}x{} grid",
                    name,
                    coord,
                    grid.rows(),
                    grid.cols()
                )))
            }
            Some(CellState::Obstacle) => {
                return Err(PlannerError::InvalidInput(format!(
                    "{} {} is on an obstacle",
                    name, coord
                )))
            }
            Some(_) => {}
        }
    }

    if let Some((coord, state)) = grid
        .cells()
        .find(|(_, s)| !matches!(s, CellState::Empty | CellState::Obstacle))
    {
        return Err(PlannerError::InvalidInput(format!(
            "cell {} is already marked {:?}",
            coord, state
        )));
    }

    Ok(())
}

fn backtrack(parents: &HashMap<Coord, Coord>, start: Coord, goal: Coord) -> Vec<Coord> {
    let mut route = vec![goal];
    let mut current = goal;

    while current != start {
        match parents.get(&current) {
            Some(&parent) => {
                route.push(parent);
                current = parent;
            }
            None => break,
        }
    }

    route.reverse();
    route
}
