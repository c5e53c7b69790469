//! Rectangular integer grid with a minimum-positive scan
//!
//! A standalone exercise with no connection to the header recognizer:
//! callers fill an N×M table and ask for its smallest strictly positive
//! entry. The TUI form in [`crate::ui`] is one such caller.

use std::fmt;

/// Largest accepted value for either grid dimension.
pub const MAX_DIM: usize = 100;

/// Error for dimension or index violations.
#[derive(Debug, PartialEq, Eq)]
pub struct GridError {
    pub message: String,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid error: {}", self.message)
    }
}

impl std::error::Error for GridError {}

/// An N×M table of integers, 1..=[`MAX_DIM`] in each dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<i32>>,
}

impl Default for Grid {
    /// A zero-filled 5×5 table, the size the form starts with.
    fn default() -> Self {
        Grid {
            cells: vec![vec![0; 5]; 5],
        }
    }
}

impl Grid {
    /// Create a zero-filled grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        check_dimension("row", rows)?;
        check_dimension("column", cols)?;
        Ok(Grid {
            cells: vec![vec![0; cols]; rows],
        })
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn set(
        &mut self,
        row: usize,
        col: usize,
        value: i32,
    ) -> Result<(), GridError> {
        let (rows, cols) = (self.rows(), self.cols());
        let cell =
            self.cells.get_mut(row).and_then(|r| r.get_mut(col)).ok_or_else(
                || GridError {
                    message: format!(
                        "cell ({row}, {col}) outside {rows}×{cols} grid"
                    ),
                },
            )?;
        *cell = value;
        Ok(())
    }

    /// Resize in place, zero-filling new cells and keeping the overlap.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<(), GridError> {
        check_dimension("row", rows)?;
        check_dimension("column", cols)?;
        self.cells.resize(rows, Vec::new());
        for row in &mut self.cells {
            row.resize(cols, 0);
        }
        Ok(())
    }
}

fn check_dimension(name: &str, value: usize) -> Result<(), GridError> {
    if (1..=MAX_DIM).contains(&value) {
        Ok(())
    } else {
        Err(GridError {
            message: format!(
                "{name} count {value} outside 1..={MAX_DIM}"
            ),
        })
    }
}

/// Smallest strictly positive entry, or `None` when there is none. Zeros and
/// negatives never count.
pub fn min_positive(grid: &Grid) -> Option<i32> {
    grid.cells
        .iter()
        .flatten()
        .copied()
        .filter(|&value| value > 0)
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_positive_picks_smallest() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set(0, 0, 7).unwrap();
        grid.set(0, 2, 3).unwrap();
        grid.set(1, 1, 12).unwrap();
        grid.set(1, 2, -5).unwrap();
        assert_eq!(min_positive(&grid), Some(3));
    }

    #[test]
    fn test_min_positive_ignores_zero_and_negative() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(0, 0, -1).unwrap();
        grid.set(1, 1, -9).unwrap();
        assert_eq!(min_positive(&grid), None);
    }

    #[test]
    fn test_new_rejects_bad_dimensions() {
        assert!(Grid::new(0, 4).is_err());
        assert!(Grid::new(4, MAX_DIM + 1).is_err());
        assert!(Grid::new(MAX_DIM, MAX_DIM).is_ok());
    }

    #[test]
    fn test_set_out_of_range() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert!(grid.set(2, 0, 1).is_err());
        assert!(grid.set(0, 5, 1).is_err());
    }

    #[test]
    fn test_resize_keeps_overlap() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(1, 1, 42).unwrap();

        grid.resize(3, 4).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.get(1, 1), Some(42));
        assert_eq!(grid.get(2, 3), Some(0));

        grid.resize(1, 1).unwrap();
        assert_eq!(grid.get(0, 0), Some(0));
        assert_eq!(grid.get(1, 1), None);
    }
}
