// A* board search from the command line
// loads (or generates) a board, searches it and prints the painted result

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use grid_astar::utils::{quick_plot_solution, random_board, read_board_file, render, GlyphSet};
use grid_astar::{AStarConfig, AStarPlanner, CellState, Coord, Grid, GridPlanner, SearchOutcome};

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest path on a grid board with A*")]
struct Cli {
    /// Board file: one row per line, comma separated, 0 = free
    #[arg(long, conflicts_with = "random")]
    board: Option<PathBuf>,

    /// Generate a random board instead, e.g. `12x20`
    #[arg(long, value_parser = parse_size)]
    random: Option<(usize, usize)>,

    /// Obstacle probability for random boards
    #[arg(long, default_value_t = 0.25)]
    density: f64,

    /// Seed for random boards
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Start cell as `row,col`
    #[arg(long, default_value = "0,0", value_parser = parse_coord)]
    start: Coord,

    /// Goal cell as `row,col`
    #[arg(long, default_value = "6,4", value_parser = parse_coord)]
    goal: Coord,

    #[arg(long, value_enum, default_value_t = Glyphs::Emoji)]
    glyphs: Glyphs,

    /// Also print the ordered route
    #[arg(long)]
    route: bool,

    /// Save a gnuplot figure of the result
    #[arg(long)]
    png: Option<PathBuf>,

    /// Selections between progress log events (0 disables)
    #[arg(long, default_value_t = 100)]
    log_interval: usize,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Glyphs {
    Emoji,
    Ascii,
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let grid = load_grid(&cli)?;
    let planner = AStarPlanner::new(AStarConfig {
        log_interval: cli.log_interval,
    });
    let outcome = planner
        .plan(grid, cli.start, cli.goal)
        .context("search rejected its input")?;

    let solution = match outcome {
        SearchOutcome::Succeeded(solution) => solution,
        SearchOutcome::Failed(_) => {
            println!("No path found!");
            return Ok(ExitCode::from(2));
        }
    };

    let glyphs = match cli.glyphs {
        Glyphs::Emoji => GlyphSet::emoji(),
        Glyphs::Ascii => GlyphSet::ascii(),
    };
    print!("{}", render(&solution.grid, &glyphs));

    if cli.route {
        println!("Route ({} steps):", solution.steps());
        for coord in &solution.route {
            println!("- {}", coord);
        }
    }

    if let Some(png) = &cli.png {
        let path = png.to_str().ok_or_else(|| anyhow!("non UTF-8 path {}", png.display()))?;
        quick_plot_solution(&solution.grid, &solution.route, "A* grid search")
            .save_png(path, 800, 600)
            .with_context(|| format!("failed to write {}", png.display()))?;
        println!("Plot saved to: {}", png.display());
    }

    Ok(ExitCode::SUCCESS)
}

fn load_grid(cli: &Cli) -> Result<Grid> {
    match (&cli.board, cli.random) {
        (Some(path), _) => read_board_file(path)
            .with_context(|| format!("failed to load board from {}", path.display())),
        (None, Some((rows, cols))) => {
            let mut rng = StdRng::seed_from_u64(cli.seed);
            let mut grid = random_board(rows, cols, cli.density, &mut rng)?;
            // keep the endpoints usable
            grid.set(cli.start, CellState::Empty);
            grid.set(cli.goal, CellState::Empty);
            Ok(grid)
        }
        (None, None) => bail!("either --board or --random is required"),
    }
}

fn parse_coord(s: &str) -> Result<Coord, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got `{}`", s))?;
    let row = row.trim().parse::<i32>().map_err(|e| e.to_string())?;
    let col = col.trim().parse::<i32>().map_err(|e| e.to_string())?;
    Ok(Coord::new(row, col))
}

fn parse_size(s: &str) -> Result<(usize, usize), String> {
    let (rows, cols) = s
        .split_once('x')
        .ok_or_else(|| format!("expected `ROWSxCOLS`, got `{}`", s))?;
    let rows = rows.trim().parse::<usize>().map_err(|e| e.to_string())?;
    let cols = cols.trim().parse::<usize>().map_err(|e| e.to_string())?;
    Ok((rows, cols))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
