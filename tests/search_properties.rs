use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use grid_astar::path_planning::manhattan;
use grid_astar::utils::random_board;
use grid_astar::{search, CellState, Coord, Grid, SearchOutcome};

/// Plain breadth-first distance on the unpainted grid
fn bfs_distance(grid: &Grid, start: Coord, goal: Coord) -> Option<usize> {
    let mut dist = vec![vec![None; grid.cols()]; grid.rows()];
    let mut queue = VecDeque::new();
    dist[start.row as usize][start.col as usize] = Some(0);
    queue.push_back(start);

    while let Some(cur) = queue.pop_front() {
        let d = dist[cur.row as usize][cur.col as usize].unwrap();
        if cur == goal {
            return Some(d);
        }
        for (dr, dc) in [(-1, 0), (0, -1), (1, 0), (0, 1)] {
            let next = cur.offset(dr, dc);
            if grid.get(next) == Some(CellState::Empty)
                && dist[next.row as usize][next.col as usize].is_none()
            {
                dist[next.row as usize][next.col as usize] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }
    None
}

fn random_cell<R: Rng>(rng: &mut R, rows: usize, cols: usize) -> Coord {
    Coord::new(rng.gen_range(0..rows) as i32, rng.gen_range(0..cols) as i32)
}

#[test]
fn route_length_matches_bfs_on_random_boards() {
    let mut rng = StdRng::seed_from_u64(20240611);
    let mut found = 0;
    let mut missed = 0;

    for _ in 0..300 {
        let rows = rng.gen_range(1..=10);
        let cols = rng.gen_range(1..=10);
        let mut grid = random_board(rows, cols, 0.3, &mut rng).unwrap();
        let start = random_cell(&mut rng, rows, cols);
        let goal = random_cell(&mut rng, rows, cols);
        grid.set(start, CellState::Empty);
        grid.set(goal, CellState::Empty);

        let expected = bfs_distance(&grid, start, goal);
        let outcome = search(grid.clone(), start, goal).unwrap();

        match (expected, outcome) {
            (Some(d), SearchOutcome::Succeeded(solution)) => {
                found += 1;
                assert_eq!(solution.steps(), d, "start {} goal {}\n{}", start, goal, grid);
                assert_eq!(solution.route.first(), Some(&start));
                assert_eq!(solution.route.last(), Some(&goal));
                for pair in solution.route.windows(2) {
                    assert_eq!(manhattan(pair[0], pair[1]), 1);
                }
                for c in &solution.route {
                    assert_eq!(grid.get(*c), Some(CellState::Empty));
                    assert!(matches!(
                        solution.grid.get(*c),
                        Some(CellState::Path) | Some(CellState::Start) | Some(CellState::Goal)
                    ));
                }
            }
            (None, SearchOutcome::Failed(_)) => missed += 1,
            (expected, outcome) => panic!(
                "bfs said {:?} but search succeeded = {}\n{}",
                expected,
                outcome.is_success(),
                grid
            ),
        }
    }

    assert!(found > 0 && missed > 0, "found {} missed {}", found, missed);
}

#[test]
fn open_board_route_is_manhattan_optimal() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..50 {
        let rows = rng.gen_range(1..=12);
        let cols = rng.gen_range(1..=12);
        let start = random_cell(&mut rng, rows, cols);
        let goal = random_cell(&mut rng, rows, cols);

        let solution = search(Grid::new(rows, cols), start, goal)
            .unwrap()
            .into_solution()
            .expect("open board always has a path");
        assert_eq!(solution.steps() as u32, manhattan(start, goal));
    }
}

#[test]
fn painted_grid_keeps_only_search_states() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut grid = random_board(9, 9, 0.2, &mut rng).unwrap();
    let start = Coord::new(0, 0);
    let goal = Coord::new(8, 8);
    grid.set(start, CellState::Empty);
    grid.set(goal, CellState::Empty);
    let obstacles = grid.count(CellState::Obstacle);

    if let Some(solution) = search(grid, start, goal).unwrap().into_solution() {
        assert_eq!(solution.grid.count(CellState::Obstacle), obstacles);
        assert_eq!(solution.grid.count(CellState::Start), 1);
        assert_eq!(solution.grid.count(CellState::Goal), 1);
        assert_eq!(
            solution.grid.count(CellState::Path) + 2,
            solution.stats.selected
        );
        assert_eq!(
            solution.grid.count(CellState::Closed) + solution.stats.selected,
            solution.stats.inserted
        );
    }
}
