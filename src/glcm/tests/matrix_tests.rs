//! Tests for count and probability matrices

use super::test_utils::{assert_close, noise_image, stair_grid};
use crate::glcm::cooccurrence::CoOccurrenceBuilder;
use crate::glcm::direction::Direction;
use crate::glcm::errors::GlcmError;
use crate::glcm::matrix::{CountMatrix, ProbabilityMatrix};
use crate::glcm::quantizer::GrayLevelGrid;

#[test]
fn test_transpose_and_symmetrize() {
    let mut m = CountMatrix::new(Direction::Deg45, 3);
    m.increment(1, 0);
    m.increment(1, 0);
    m.increment(2, 1);

    let t = m.transpose();
    assert_eq!(t.get(0, 1), 2);
    assert_eq!(t.get(1, 2), 1);
    assert_eq!(t.get(1, 0), 0);
    assert_eq!(t.direction(), Direction::Deg45);

    let s = m.symmetrize();
    assert_eq!(s.get(1, 0), 2);
    assert_eq!(s.get(0, 1), 2);
    assert_eq!(s.get(2, 1), 1);
    assert_eq!(s.get(1, 2), 1);
    assert_eq!(s.total(), 2 * m.total());
}

#[test]
fn test_stair_grid_probabilities() {
    let counts = CoOccurrenceBuilder::new(3).build(&stair_grid(), Direction::Deg90).unwrap();
    let p = ProbabilityMatrix::from_counts(&counts).unwrap();

    assert_eq!(p.levels(), 3);
    assert_eq!(p.direction(), Direction::Deg90);
    for (i, j) in [(1, 0), (0, 1), (2, 1), (1, 2)] {
        assert_close(p.get(i, j), 0.25);
    }
    for (i, j) in [(0, 0), (1, 1), (2, 2), (0, 2), (2, 0)] {
        assert_eq!(p.get(i, j), 0.0);
    }
}

#[test]
fn test_zero_pairs_are_degenerate() {
    let counts = CountMatrix::new(Direction::Deg135, 4);
    let result = ProbabilityMatrix::from_counts(&counts);
    assert!(matches!(
        result,
        Err(GlcmError::DegenerateInput { direction: Direction::Deg135 })
    ));
}

#[test]
fn test_probabilities_are_symmetric_and_sum_to_one() {
    for seed in [1, 7, 1234, 98765] {
        let img = noise_image(13, 9, seed);
        let grid = GrayLevelGrid::from_source(&img, 15);
        let builder = CoOccurrenceBuilder::new(16);

        for direction in Direction::ALL {
            let counts = builder.build(&grid, direction).unwrap();
            let p = ProbabilityMatrix::from_counts(&counts).unwrap();

            assert!(p.is_symmetric(), "seed {} {}", seed, direction);
            assert!((p.sum() - 1.0).abs() < 1e-9, "seed {} {} sums to {}", seed, direction, p.sum());
            assert!(p.iter().all(|(_, _, v)| (0.0..=1.0).contains(&v)));
        }
    }
}

#[test]
fn test_iter_is_row_major() {
    let counts = CoOccurrenceBuilder::new(3).build(&stair_grid(), Direction::Deg0).unwrap();
    let p = ProbabilityMatrix::from_counts(&counts).unwrap();

    let cells: Vec<(usize, usize)> = p.iter().map(|(i, j, _)| (i, j)).collect();
    assert_eq!(cells.len(), 9);
    assert_eq!(cells[0], (0, 0));
    assert_eq!(cells[1], (0, 1));
    assert_eq!(cells[3], (1, 0));
    assert_eq!(cells[8], (2, 2));
}
