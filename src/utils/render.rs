//! Text rendering of painted grids

use std::fmt;

use itertools::Itertools;

use crate::common::CellState;
use crate::utils::Grid;

/// One display token per cell state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet {
    pub empty: &'static str,
    pub obstacle: &'static str,
    pub closed: &'static str,
    pub path: &'static str,
    pub start: &'static str,
    pub goal: &'static str,
    /// Placed between cells of a row
    pub separator: &'static str,
}

impl GlyphSet {
    /// Console glyphs, each padded to a fixed-width column
    pub fn emoji() -> Self {
        Self {
            empty: "0   ",
            obstacle: "⛰️   ",
            closed: "·   ",
            path: "🚗   ",
            start: "🚦   ",
            goal: "🏁   ",
            separator: "",
        }
    }

    pub fn ascii() -> Self {
        Self {
            empty: ".",
            obstacle: "#",
            closed: "o",
            path: "*",
            start: "S",
            goal: "G",
            separator: " ",
        }
    }

    pub fn glyph(&self, state: CellState) -> &'static str {
        match state {
            CellState::Empty => self.empty,
            CellState::Obstacle => self.obstacle,
            CellState::Closed => self.closed,
            CellState::Path => self.path,
            CellState::Start => self.start,
            CellState::Goal => self.goal,
        }
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::emoji()
    }
}

/// Render one line per grid row, each terminated by a newline
pub fn render(grid: &Grid, glyphs: &GlyphSet) -> String {
    grid.to_rows()
        .into_iter()
        .map(|row| {
            let mut line = row.into_iter().map(|s| glyphs.glyph(s)).join(glyphs.separator);
            line.push('\n');
            line
        })
        .collect()
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, &GlyphSet::ascii()))
    }
}
