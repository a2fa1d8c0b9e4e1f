//! Directional co-occurrence counting
//!
//! Walks the gray level grid once per direction and counts how often gray
//! value `r` at `(i, j)` is followed by gray value `c` at the neighbouring
//! cell. Ranges per direction:
//!
//! | direction | neighbour        | `i` range      | `j` range        |
//! |-----------|------------------|----------------|------------------|
//! | 0°        | `(i, j + 1)`     | `0..rows`      | `0..cols - 1`    |
//! | 45°       | `(i - 1, j + 1)` | `1..rows`      | `0..cols - 1`    |
//! | 90°       | `(i - 1, j)`     | `1..rows`      | `0..cols`        |
//! | 135°      | `(i - 1, j - 1)` | `1..rows`      | `1..cols`        |

use std::ops::Range;

use super::direction::Direction;
use super::errors::{GlcmError, GlcmResult};
use super::matrix::CountMatrix;
use super::quantizer::GrayLevelGrid;

/// Builds co-occurrence count matrices of a fixed size
#[derive(Debug, Clone, Copy)]
pub struct CoOccurrenceBuilder {
    levels: usize,
}

impl CoOccurrenceBuilder {
    /// Create a builder producing `levels × levels` matrices
    pub fn new(levels: usize) -> Self {
        CoOccurrenceBuilder { levels }
    }

    /// Side length of the matrices this builder produces
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// Count adjacent pairs of the grid in one direction
    ///
    /// # Arguments
    /// * `grid` - Quantized gray values
    /// * `direction` - Neighbour offset to count
    ///
    /// # Returns
    /// A fresh count matrix, or `InvalidConfiguration` if the grid holds a
    /// gray value the matrix has no row for
    pub fn build(&self, grid: &GrayLevelGrid, direction: Direction) -> GlcmResult<CountMatrix> {
        if let Some(max) = grid.max_value() {
            if usize::from(max) >= self.levels {
                return Err(GlcmError::InvalidConfiguration(format!(
                    "gray value {} does not fit a {}-level co-occurrence matrix",
                    max, self.levels
                )));
            }
        }

        let mut matrix = CountMatrix::new(direction, self.levels);
        let (row_range, col_range) = Self::ranges(grid, direction);
        let (di, dj) = direction.offset();

        for i in row_range {
            let ni = (i as isize + di) as usize;
            for j in col_range.clone() {
                let nj = (j as isize + dj) as usize;
                matrix.increment(usize::from(grid.get(i, j)), usize::from(grid.get(ni, nj)));
            }
        }

        Ok(matrix)
    }

    /// Reference cell ranges whose neighbour lies inside the grid
    fn ranges(grid: &GrayLevelGrid, direction: Direction) -> (Range<usize>, Range<usize>) {
        let rows = grid.rows();
        let cols = grid.cols();

        match direction {
            Direction::Deg0 => (0..rows, 0..cols.saturating_sub(1)),
            Direction::Deg45 => (1..rows, 0..cols.saturating_sub(1)),
            Direction::Deg90 => (1..rows, 0..cols),
            Direction::Deg135 => (1..rows, 1..cols),
        }
    }
}
