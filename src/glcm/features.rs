//! Texture statistics over a probability matrix
//!
//! Each statistic is an independent reduction over the same matrix.

use super::direction::Direction;
use super::matrix::ProbabilityMatrix;

/// Σ P(i,j) · (i - j)²
pub fn contrast(matrix: &ProbabilityMatrix) -> f64 {
    matrix.iter().fold(0.0, |acc, (i, j, p)| {
        let diff = i as f64 - j as f64;
        acc + p * diff.powi(2)
    })
}

/// Σ P(i,j) / (1 + (i - j)²)
pub fn homogeneity(matrix: &ProbabilityMatrix) -> f64 {
    matrix.iter().fold(0.0, |acc, (i, j, p)| {
        let diff = i as f64 - j as f64;
        acc + p / (1.0 + diff.powi(2))
    })
}

/// Σ -P(i,j) · log10 P(i,j), skipping empty cells
pub fn entropy(matrix: &ProbabilityMatrix) -> f64 {
    matrix
        .iter()
        .filter(|&(_, _, p)| p != 0.0)
        .fold(0.0, |acc, (_, _, p)| acc + (p * p.log10()) * -1.0)
}

/// Σ P(i,j)²
pub fn energy(matrix: &ProbabilityMatrix) -> f64 {
    matrix.iter().fold(0.0, |acc, (_, _, p)| acc + p.powi(2))
}

/// Σ P(i,j) · |i - j|
pub fn dissimilarity(matrix: &ProbabilityMatrix) -> f64 {
    matrix.iter().fold(0.0, |acc, (i, j, p)| {
        let diff = i as f64 - j as f64;
        acc + p * diff.abs()
    })
}

/// The five GLCM texture statistics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureSet {
    pub contrast: f64,
    pub homogeneity: f64,
    pub entropy: f64,
    pub energy: f64,
    pub dissimilarity: f64,
}

impl FeatureSet {
    /// Statistic names in reporting order
    pub const NAMES: [&'static str; 5] = ["contrast", "homogeneity", "entropy", "energy", "dissimilarity"];

    /// Compute all five statistics for one matrix
    pub fn from_matrix(matrix: &ProbabilityMatrix) -> Self {
        FeatureSet {
            contrast: contrast(matrix),
            homogeneity: homogeneity(matrix),
            entropy: entropy(matrix),
            energy: energy(matrix),
            dissimilarity: dissimilarity(matrix),
        }
    }

    /// Arithmetic mean of each statistic
    ///
    /// Values are summed in slice order and divided once, so the same
    /// inputs in the same order always give bit-identical output.
    ///
    /// # Returns
    /// The averaged set, or `None` for an empty slice
    pub fn mean(sets: &[FeatureSet]) -> Option<Self> {
        if sets.is_empty() {
            return None;
        }

        Some(FeatureSet {
            contrast: Self::average(sets, |f| f.contrast),
            homogeneity: Self::average(sets, |f| f.homogeneity),
            entropy: Self::average(sets, |f| f.entropy),
            energy: Self::average(sets, |f| f.energy),
            dissimilarity: Self::average(sets, |f| f.dissimilarity),
        })
    }

    fn average(sets: &[FeatureSet], select: fn(&FeatureSet) -> f64) -> f64 {
        sets.iter().map(select).fold(0.0, |acc, v| acc + v) / sets.len() as f64
    }

    /// `(name, value)` pairs in reporting order
    pub fn named_values(&self) -> [(&'static str, f64); 5] {
        let [contrast, homogeneity, entropy, energy, dissimilarity] = Self::NAMES;
        [
            (contrast, self.contrast),
            (homogeneity, self.homogeneity),
            (entropy, self.entropy),
            (energy, self.energy),
            (dissimilarity, self.dissimilarity),
        ]
    }
}

/// Statistics computed for a single direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalFeatures {
    pub direction: Direction,
    pub features: FeatureSet,
}
