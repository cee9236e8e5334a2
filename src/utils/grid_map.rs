// grid map definition
// cell states held in an nalgebra matrix, indexed (row, col)

use std::ops::Deref;
extern crate nalgebra as na;

use itertools::iproduct;

use crate::common::{CellState, Coord, PlannerError, PlanningResult};

/// Rectangular board of cell states
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: na::DMatrix<CellState>,
}

impl Grid {
    /// All-`Empty` grid of the given size
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: na::DMatrix::from_element(rows, cols, CellState::Empty),
        }
    }

    /// Build from row vectors; every row must have the same length
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> PlanningResult<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());

        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != ncols) {
            return Err(PlannerError::InvalidInput(format!(
                "row {} has {} cells, expected {}",
                i,
                row.len(),
                ncols
            )));
        }

        let flat: Vec<CellState> = rows.into_iter().flatten().collect();
        Ok(Self {
            cells: na::DMatrix::from_row_slice(nrows, ncols, &flat),
        })
    }

    /// Build from a numeric occupancy matrix: 0 is free, anything else is an obstacle
    pub fn from_matrix(matrix: &na::DMatrix<i32>) -> Self {
        Self {
            cells: matrix.map(|v| CellState::from_value(i64::from(v))),
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// True when the grid has no cells at all
    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    // Row bound is checked first so a grid without rows never touches a column.
    fn index(&self, coord: Coord) -> Option<(usize, usize)> {
        if coord.row < 0 || coord.row as usize >= self.rows() {
            return None;
        }
        if coord.col < 0 || coord.col as usize >= self.cols() {
            return None;
        }
        Some((coord.row as usize, coord.col as usize))
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.index(coord).is_some()
    }

    pub fn get(&self, coord: Coord) -> Option<CellState> {
        self.index(coord).map(|ix| self.cells[ix])
    }

    /// Overwrite a cell. Returns false (and changes nothing) when `coord` is off the grid.
    pub fn set(&mut self, coord: Coord, state: CellState) -> bool {
        match self.index(coord) {
            Some(ix) => {
                self.cells[ix] = state;
                true
            }
            None => false,
        }
    }

    /// In bounds and still `Empty`. Off-grid coordinates are simply not traversable.
    pub fn is_traversable(&self, coord: Coord) -> bool {
        self.get(coord) == Some(CellState::Empty)
    }

    pub fn mark_closed(&mut self, coord: Coord) -> bool {
        self.set(coord, CellState::Closed)
    }

    pub fn mark_path(&mut self, coord: Coord) -> bool {
        self.set(coord, CellState::Path)
    }

    pub fn mark_start(&mut self, coord: Coord) -> bool {
        self.set(coord, CellState::Start)
    }

    pub fn mark_goal(&mut self, coord: Coord) -> bool {
        self.set(coord, CellState::Goal)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        iproduct!(0..self.rows(), 0..self.cols())
            .map(move |(r, c)| (Coord::new(r as i32, c as i32), self.cells[(r, c)]))
    }

    /// Number of cells currently in `state`
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    pub fn to_rows(&self) -> Vec<Vec<CellState>> {
        (0..self.rows())
            .map(|r| self.cells.row(r).iter().copied().collect())
            .collect()
    }
}

impl Deref for Grid {
    type Target = na::DMatrix<CellState>;

    fn deref(&self) -> &Self::Target {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellState::*;

    #[test]
    fn test_from_rows_rejects_ragged() {
        let result = Grid::from_rows(vec![vec![Empty, Empty], vec![Empty]]);
        assert!(matches!(result, Err(PlannerError::InvalidInput(_))));
    }

    #[test]
    fn test_from_rows_keeps_row_major_layout() {
        let grid = Grid::from_rows(vec![vec![Empty, Obstacle, Empty], vec![Obstacle, Empty, Empty]])
            .unwrap();
        assert_eq!(grid.shape(), (2, 3));
        assert_eq!(grid.get(Coord::new(0, 1)), Some(Obstacle));
        assert_eq!(grid.get(Coord::new(1, 0)), Some(Obstacle));
        assert_eq!(grid.get(Coord::new(1, 2)), Some(Empty));
        assert_eq!(grid.to_rows()[0], vec![Empty, Obstacle, Empty]);
    }

    #[test]
    fn test_from_matrix() {
        let m = na::DMatrix::from_row_slice(2, 2, &[0, 1, 0, 7]);
        let grid = Grid::from_matrix(&m);
        assert_eq!(grid.count(Obstacle), 2);
        assert!(grid.is_traversable(Coord::new(1, 0)));
        assert!(!grid.is_traversable(Coord::new(1, 1)));
    }

    #[test]
    fn test_is_traversable_out_of_bounds() {
        let grid = Grid::new(3, 4);
        for c in [
            Coord::new(-1, 0),
            Coord::new(0, -1),
            Coord::new(3, 0),
            Coord::new(0, 4),
            Coord::new(i32::MIN, i32::MAX),
        ] {
            assert!(!grid.is_traversable(c), "{} should not be traversable", c);
        }
        assert!(grid.is_traversable(Coord::new(2, 3)));
    }

    #[test]
    fn test_is_traversable_zero_sized() {
        let grid = Grid::new(0, 0);
        assert!(grid.is_empty());
        assert!(!grid.is_traversable(Coord::origin()));

        let no_cols = Grid::from_rows(vec![vec![]]).unwrap();
        assert!(no_cols.is_empty());
        assert!(!no_cols.is_traversable(Coord::origin()));
    }

    #[test]
    fn test_marks_are_idempotent() {
        let mut grid = Grid::new(2, 2);
        let c = Coord::new(1, 1);
        assert!(grid.mark_closed(c));
        assert!(grid.mark_closed(c));
        assert_eq!(grid.get(c), Some(Closed));
        assert!(!grid.is_traversable(c));

        grid.mark_path(c);
        assert_eq!(grid.get(c), Some(Path));
        grid.mark_goal(c);
        assert_eq!(grid.get(c), Some(Goal));

        assert!(!grid.mark_start(Coord::new(5, 5)));
        assert_eq!(grid.count(Start), 0);
    }

    #[test]
    fn test_cells_row_major() {
        let grid = Grid::new(2, 2);
        let coords: Vec<Coord> = grid.cells().map(|(c, _)| c).collect();
        assert_eq!(
            coords,
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 1)]
        );
    }
}
