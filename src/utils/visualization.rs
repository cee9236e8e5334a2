//! Visualization utilities for grid_astar
//!
//! Draws painted grids and routes with gnuplot. Row 0 is drawn at the top
//! so the figure reads like the text rendering.

use gnuplot::{AutoOption, AxesCommon, Caption, Color, Figure, LineWidth, PointSize, PointSymbol};

use crate::common::{CellState, Coord, PlannerError, PlanningResult};
use crate::utils::Grid;

/// Color palette for consistent styling
pub mod colors {
    pub const BLACK: &str = "#000000";
    pub const RED: &str = "#FF0000";
    pub const GREEN: &str = "#00FF00";
    pub const BLUE: &str = "#0000FF";
    pub const GRAY: &str = "#808080";
    pub const ORANGE: &str = "#FFA500";

    // Semantic colors
    pub const OBSTACLE: &str = BLACK;
    pub const CLOSED: &str = GRAY;
    pub const SELECTED: &str = ORANGE;
    pub const START: &str = GREEN;
    pub const GOAL: &str = BLUE;
    pub const ROUTE: &str = RED;
}

/// Style for route rendering
#[derive(Debug, Clone)]
pub struct PathStyle {
    pub color: String,
    pub line_width: f64,
    pub caption: String,
}

impl PathStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            line_width: 2.0,
            caption: caption.to_string(),
        }
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::new(colors::ROUTE, "Route")
    }
}

/// Style for cell markers
#[derive(Debug, Clone)]
pub struct PointStyle {
    pub color: String,
    pub size: f64,
    pub symbol: char,
    pub caption: String,
}

impl PointStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            size: 1.0,
            symbol: 'O',
            caption: caption.to_string(),
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_symbol(mut self, symbol: char) -> Self {
        self.symbol = symbol;
        self
    }

    /// Default marker for a painted cell state; `None` for empty cells
    pub fn for_state(state: CellState) -> Option<Self> {
        match state {
            CellState::Empty => None,
            CellState::Obstacle => Some(Self::new(colors::OBSTACLE, "Obstacles").with_symbol('S')),
            CellState::Closed => Some(Self::new(colors::CLOSED, "Queued").with_symbol('o').with_size(0.6)),
            CellState::Path => Some(Self::new(colors::SELECTED, "Selected").with_size(0.8)),
            CellState::Start => Some(Self::new(colors::START, "Start").with_size(1.5)),
            CellState::Goal => Some(Self::new(colors::GOAL, "Goal").with_size(1.5)),
        }
    }
}

#[derive(Debug, Clone)]
enum Series {
    Points { x: Vec<f64>, y: Vec<f64>, style: PointStyle },
    Lines { x: Vec<f64>, y: Vec<f64>, style: PathStyle },
}

/// Main visualizer struct
pub struct Visualizer {
    figure: Figure,
    series: Vec<Series>,
    title: String,
    x_label: String,
    y_label: String,
    aspect_ratio: Option<f64>,
}

impl Visualizer {
    /// Create a new visualizer
    pub fn new() -> Self {
        Self {
            figure: Figure::new(),
            series: Vec::new(),
            title: String::new(),
            x_label: "column".to_string(),
            y_label: "row".to_string(),
            aspect_ratio: Some(1.0),
        }
    }

    /// Set the plot title
    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    /// Set aspect ratio (None for auto)
    pub fn set_aspect_ratio(&mut self, ratio: Option<f64>) -> &mut Self {
        self.aspect_ratio = ratio;
        self
    }

    /// Number of data series queued for drawing
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Plot every non-empty cell, one series per state
    pub fn plot_grid(&mut self, grid: &Grid) -> &mut Self {
        let rows = grid.rows();
        for state in [
            CellState::Obstacle,
            CellState::Closed,
            CellState::Path,
            CellState::Start,
            CellState::Goal,
        ] {
            let Some(style) = PointStyle::for_state(state) else {
                continue;
            };
            let cells: Vec<Coord> = grid
                .cells()
                .filter(|&(_, s)| s == state)
                .map(|(c, _)| c)
                .collect();
            if !cells.is_empty() {
                self.plot_cells(&cells, rows, &style);
            }
        }
        self
    }

    /// Plot cell markers
    pub fn plot_cells(&mut self, cells: &[Coord], rows: usize, style: &PointStyle) -> &mut Self {
        let (x, y) = to_xy(cells, rows);
        self.series.push(Series::Points {
            x,
            y,
            style: style.clone(),
        });
        self
    }

    /// Plot an ordered route as a polyline
    pub fn plot_route(&mut self, route: &[Coord], rows: usize, style: &PathStyle) -> &mut Self {
        let (x, y) = to_xy(route, rows);
        self.series.push(Series::Lines {
            x,
            y,
            style: style.clone(),
        });
        self
    }

    /// Finalize and show the plot
    pub fn show(&mut self) -> PlanningResult<()> {
        self.draw();
        self.figure
            .show()
            .map(|_| ())
            .map_err(|e| PlannerError::Visualization(e.to_string()))
    }

    /// Save plot to PNG file
    pub fn save_png(&mut self, path: &str, width: u32, height: u32) -> PlanningResult<()> {
        self.draw();
        self.figure
            .save_to_png(path, width, height)
            .map_err(|e| PlannerError::Visualization(e.to_string()))
    }

    /// Save plot to SVG file
    pub fn save_svg(&mut self, path: &str) -> PlanningResult<()> {
        self.draw();
        self.figure
            .save_to_svg(path, 800, 600)
            .map_err(|e| PlannerError::Visualization(e.to_string()))
    }

    fn draw(&mut self) {
        self.figure.clear_axes();
        let axes = self.figure.axes2d();

        for series in &self.series {
            match series {
                Series::Points { x, y, style } => {
                    axes.points(
                        x,
                        y,
                        &[
                            Caption(&style.caption),
                            Color(style.color.as_str()),
                            PointSymbol(style.symbol),
                            PointSize(style.size),
                        ],
                    );
                }
                Series::Lines { x, y, style } => {
                    axes.lines(
                        x,
                        y,
                        &[
                            Caption(&style.caption),
                            Color(style.color.as_str()),
                            LineWidth(style.line_width),
                        ],
                    );
                }
            }
        }

        if !self.title.is_empty() {
            axes.set_title(&self.title, &[]);
        }
        axes.set_x_label(&self.x_label, &[]);
        axes.set_y_label(&self.y_label, &[]);
        if let Some(ratio) = self.aspect_ratio {
            axes.set_aspect_ratio(AutoOption::Fix(ratio));
        }
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}

// x is the column, y flips the row so row 0 sits at the top
fn to_xy(cells: &[Coord], rows: usize) -> (Vec<f64>, Vec<f64>) {
    let top = rows as f64 - 1.0;
    cells
        .iter()
        .map(|c| (c.col as f64, top - c.row as f64))
        .unzip()
}

/// Quick plot of a finished search
pub fn quick_plot_solution(grid: &Grid, route: &[Coord], title: &str) -> Visualizer {
    let mut vis = Visualizer::new();
    vis.set_title(title);
    vis.plot_grid(grid);
    if route.len() > 1 {
        vis.plot_route(route, grid.rows(), &PathStyle::default());
    }
    vis
}
