//! Co-occurrence count and probability matrices
//!
//! Both matrices are square, `levels × levels`, stored as flat row-major
//! buffers. A count matrix remembers the direction it was built for so a
//! failed normalization can name it.

use super::direction::Direction;
use super::errors::{GlcmError, GlcmResult};

/// Pair counts for one direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountMatrix {
    direction: Direction,
    levels: usize,
    counts: Vec<u64>,
}

impl CountMatrix {
    /// Create a zeroed `levels × levels` matrix
    pub fn new(direction: Direction, levels: usize) -> Self {
        CountMatrix {
            direction,
            levels,
            counts: vec![0; levels * levels],
        }
    }

    /// Direction the counts were collected for
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Side length of the matrix
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// Count at row `r`, column `c`
    #[inline]
    pub fn get(&self, r: usize, c: usize) -> u64 {
        self.counts[self.index(r, c)]
    }

    /// Record one `(r, c)` pair
    ///
    /// Panics if either gray value is outside the matrix.
    #[inline]
    pub fn increment(&mut self, r: usize, c: usize) {
        let idx = self.index(r, c);
        self.counts[idx] += 1;
    }

    /// Sum of all entries
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Transposed copy, `Mᵗ[j][i] = M[i][j]`
    pub fn transpose(&self) -> CountMatrix {
        let mut transposed = CountMatrix::new(self.direction, self.levels);
        for r in 0..self.levels {
            for c in 0..self.levels {
                transposed.counts[c * self.levels + r] = self.counts[r * self.levels + c];
            }
        }
        transposed
    }

    /// `M + Mᵗ`
    pub fn symmetrize(&self) -> CountMatrix {
        let transposed = self.transpose();
        let counts = self
            .counts
            .iter()
            .zip(&transposed.counts)
            .map(|(a, b)| a + b)
            .collect();

        CountMatrix {
            direction: self.direction,
            levels: self.levels,
            counts,
        }
    }

    #[inline]
    fn index(&self, r: usize, c: usize) -> usize {
        debug_assert!(r < self.levels && c < self.levels);
        r * self.levels + c
    }
}

/// Joint probability of gray-level pairs for one direction
///
/// Entries are non-negative, sum to 1 and are symmetric.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityMatrix {
    direction: Direction,
    levels: usize,
    values: Vec<f64>,
}

impl ProbabilityMatrix {
    /// Symmetrize a count matrix and divide it by its grand total
    ///
    /// The total is taken over the symmetrized matrix itself.
    ///
    /// # Arguments
    /// * `counts` - Raw directional counts
    ///
    /// # Returns
    /// The probability matrix, or `DegenerateInput` when there are no pairs to normalize
    pub fn from_counts(counts: &CountMatrix) -> GlcmResult<Self> {
        let symmetric = counts.symmetrize();
        let total = symmetric.total();

        if total == 0 {
            return Err(GlcmError::DegenerateInput {
                direction: counts.direction(),
            });
        }

        let total = total as f64;
        let values = symmetric
            .counts
            .iter()
            .map(|&count| count as f64 / total)
            .collect();

        Ok(ProbabilityMatrix {
            direction: counts.direction(),
            levels: counts.levels(),
            values,
        })
    }

    /// Direction the matrix describes
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Side length of the matrix
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// Probability at row `i`, column `j`
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.levels && j < self.levels);
        self.values[i * self.levels + j]
    }

    /// Iterate over `(i, j, p)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let levels = self.levels;
        self.values
            .iter()
            .enumerate()
            .map(move |(idx, &p)| (idx / levels, idx % levels, p))
    }

    /// Sum of all entries
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Whether `P[i][j] == P[j][i]` for every cell
    pub fn is_symmetric(&self) -> bool {
        (0..self.levels).all(|i| (0..i).all(|j| self.get(i, j) == self.get(j, i)))
    }
}
