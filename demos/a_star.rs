//! A* Grid Search Example
//!
//! Demonstrates the A* planner on the sample board shipped in `boards/`.

use grid_astar::utils::{quick_plot_solution, read_board_file, render, GlyphSet};
use grid_astar::{search, Coord};

fn main() {
    println!("A* grid search start!!");

    let start = Coord::new(0, 0);
    let goal = Coord::new(6, 4);

    let grid = match read_board_file("boards/1.board") {
        Ok(grid) => grid,
        Err(e) => {
            println!("Failed to load board: {}", e);
            return;
        }
    };
    println!("Loaded {}x{} board", grid.rows(), grid.cols());

    match search(grid, start, goal) {
        Ok(outcome) => match outcome.into_solution() {
            Some(solution) => {
                println!("Path found with {} steps", solution.steps());
                print!("{}", render(&solution.grid, &GlyphSet::emoji()));

                let mut vis = quick_plot_solution(&solution.grid, &solution.route, "A* Grid Search");
                let _ = vis.save_png("img/a_star_result.png", 800, 600);
                println!("Plot saved to: img/a_star_result.png");
                let _ = vis.show();
            }
            None => println!("No path found!"),
        },
        Err(e) => {
            println!("Planning failed: {}", e);
        }
    }

    println!("A* grid search finish!!");
}
