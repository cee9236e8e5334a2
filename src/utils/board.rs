//! Board loading
//!
//! Boards are plain text, one row per line, with integer cell values
//! separated by commas. A trailing comma is allowed:
//!
//! ```text
//! 0,1,0,0,0,0,
//! 0,1,0,0,0,0,
//! 0,0,0,0,1,0,
//! ```
//!
//! Zero is a free cell; any other integer is an obstacle.

use std::fs;
use std::path::Path;

use itertools::iproduct;
use rand::Rng;
use tracing::debug;

use crate::common::{CellState, Coord, PlannerError, PlanningResult};
use crate::utils::Grid;

/// Parse one board line. `line_no` is 1-based and only used for error messages.
pub fn parse_line(line_no: usize, line: &str) -> PlanningResult<Vec<CellState>> {
    line.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .map(CellState::from_value)
                .map_err(|_| PlannerError::Parse {
                    line: line_no,
                    message: format!("`{}` is not an integer", token),
                })
        })
        .collect()
}

/// Parse a whole board. Blank lines are skipped; rows must all be the same length.
pub fn parse_board(text: &str) -> PlanningResult<Grid> {
    let rows = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_line(i + 1, line))
        .collect::<PlanningResult<Vec<_>>>()?;

    Grid::from_rows(rows)
}

pub fn read_board_file<P: AsRef<Path>>(path: P) -> PlanningResult<Grid> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let grid = parse_board(&text)?;
    debug!(path = %path.display(), rows = grid.rows(), cols = grid.cols(), "loaded board");
    Ok(grid)
}

/// Board with each cell independently blocked with probability `obstacle_ratio`
pub fn random_board<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    obstacle_ratio: f64,
    rng: &mut R,
) -> PlanningResult<Grid> {
    if !(0.0..=1.0).contains(&obstacle_ratio) {
        return Err(PlannerError::InvalidInput(format!(
            "obstacle ratio must be within [0, 1], got {}",
            obstacle_ratio
        )));
    }

    let mut grid = Grid::new(rows, cols);
    for (r, c) in iproduct!(0..rows, 0..cols) {
        if rng.gen_bool(obstacle_ratio) {
            grid.set(Coord::new(r as i32, c as i32), CellState::Obstacle);
        }
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use CellState::*;

    #[test]
    fn test_parse_line_trailing_comma() {
        assert_eq!(
            parse_line(1, "0,1,0,0,").unwrap(),
            vec![Empty, Obstacle, Empty, Empty]
        );
    }

    #[test]
    fn test_parse_line_without_trailing_comma() {
        assert_eq!(parse_line(1, " 0, 2 ,0").unwrap(), vec![Empty, Obstacle, Empty]);
    }

    #[test]
    fn test_parse_line_rejects_garbage() {
        match parse_line(4, "0,x,0,") {
            Err(PlannerError::Parse { line, message }) => {
                assert_eq!(line, 4);
                assert!(message.contains("`x`"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_board() {
        let text = "0,1,0,0,0,0,\n0,1,0,0,0,0,\n\n0,0,0,0,1,0,\n";
        let grid = parse_board(text).unwrap();
        assert_eq!(grid.shape(), (3, 6));
        assert_eq!(grid.count(Obstacle), 3);
        assert_eq!(grid.get(Coord::new(2, 4)), Some(Obstacle));
    }

    #[test]
    fn test_parse_board_ragged() {
        let result = parse_board("0,0,0,\n0,0,\n");
        assert!(matches!(result, Err(PlannerError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_board_empty_text() {
        let grid = parse_board("").unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_random_board_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        let clear = random_board(4, 5, 0.0, &mut rng).unwrap();
        assert_eq!(clear.count(Empty), 20);

        let full = random_board(4, 5, 1.0, &mut rng).unwrap();
        assert_eq!(full.count(Obstacle), 20);
    }

    #[test]
    fn test_random_board_rejects_bad_ratio() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_board(2, 2, 1.5, &mut rng).is_err());
        assert!(random_board(2, 2, f64::NAN, &mut rng).is_err());
    }
}
