//! GLCM feature extractor
//!
//! Quantizes a source image once, then runs the co-occurrence, normalization
//! and statistics pipeline for each of the four directions and averages the
//! results. The direction pipelines share only the read-only grid, so they
//! run in parallel when the `parallel` feature is enabled.

use crate::maybe_rayon::*;
use crate::source::PixelSource;

use super::cooccurrence::CoOccurrenceBuilder;
use super::direction::Direction;
use super::errors::{GlcmError, GlcmResult};
use super::features::{DirectionalFeatures, FeatureSet};
use super::matrix::ProbabilityMatrix;
use super::quantizer::{GrayLevelGrid, MAX_GRAY};

/// Lifecycle stage of an extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractorStage {
    /// Constructed, nothing computed yet
    Uninitialized,
    /// Gray level grid built, features not (yet) available
    Quantized,
    /// Features available
    Extracted,
}

/// Averaged features plus the per-direction values they came from
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    features: FeatureSet,
    directional: Vec<DirectionalFeatures>,
}

impl Extraction {
    /// Features averaged over the four directions
    pub fn features(&self) -> &FeatureSet {
        &self.features
    }

    /// Features of each direction, in `Direction::ALL` order
    pub fn directional(&self) -> &[DirectionalFeatures] {
        &self.directional
    }
}

#[derive(Debug, Clone)]
enum State {
    Uninitialized,
    Quantized,
    Extracted(Extraction),
}

/// Matrix side length for a configured gray level
///
/// Quantized values never exceed 255, so levels above that only add empty
/// rows and are clamped.
///
/// # Returns
/// `min(gray_level, 255) + 1`, or `InvalidConfiguration` for a non-positive level
pub fn matrix_levels(gray_level: i32) -> GlcmResult<usize> {
    if gray_level <= 0 {
        return Err(GlcmError::InvalidConfiguration(format!(
            "gray level must be positive, got {}",
            gray_level
        )));
    }

    Ok(gray_level.min(i32::from(MAX_GRAY)) as usize + 1)
}

/// Run the four direction pipelines over a quantized grid
///
/// # Arguments
/// * `grid` - Quantized gray values
/// * `levels` - Side length of the co-occurrence matrices
///
/// # Returns
/// The averaged and per-direction features, or the first error any direction hit
pub fn extract_from_grid(grid: &GrayLevelGrid, levels: usize) -> GlcmResult<Extraction> {
    let builder = CoOccurrenceBuilder::new(levels);

    let directional = Direction::ALL
        .to_vec()
        .into_par_iter()
        .map(|direction| -> GlcmResult<DirectionalFeatures> {
            let counts = builder.build(grid, direction)?;
            let probabilities = ProbabilityMatrix::from_counts(&counts)?;
            Ok(DirectionalFeatures {
                direction,
                features: FeatureSet::from_matrix(&probabilities),
            })
        })
        .collect::<GlcmResult<Vec<_>>>()?;

    let sets: Vec<FeatureSet> = directional.iter().map(|d| d.features).collect();
    let features = FeatureSet::mean(&sets).ok_or_else(|| {
        GlcmError::InvalidConfiguration("no directions to average".to_string())
    })?;

    Ok(Extraction {
        features,
        directional,
    })
}

/// Extracts GLCM texture features from one image
///
/// Accessors fail with `NotExtracted` until [`GlcmExtractor::extract`] has
/// succeeded. A failed extraction leaves the extractor without features.
pub struct GlcmExtractor<S> {
    source: S,
    gray_level: i32,
    levels: usize,
    state: State,
}

impl<S: PixelSource> GlcmExtractor<S> {
    /// Create an extractor for an image
    ///
    /// # Arguments
    /// * `source` - Image supplying RGB pixels
    /// * `gray_level` - Gray level count used for quantization
    ///
    /// # Returns
    /// The extractor, or `InvalidConfiguration` if `gray_level` is not positive
    pub fn new(source: S, gray_level: i32) -> GlcmResult<Self> {
        let levels = matrix_levels(gray_level)?;

        Ok(GlcmExtractor {
            source,
            gray_level,
            levels,
            state: State::Uninitialized,
        })
    }

    /// Compute the features
    ///
    /// Every call recomputes from the stored image and gray level, so
    /// repeated calls give identical results.
    ///
    /// # Returns
    /// The averaged features, or the error that aborted extraction
    pub fn extract(&mut self) -> GlcmResult<&FeatureSet> {
        self.state = State::Uninitialized;

        let grid = GrayLevelGrid::from_source(&self.source, self.gray_level);
        self.state = State::Quantized;

        let extraction = extract_from_grid(&grid, self.levels)?;
        self.state = State::Extracted(extraction);

        self.features()
    }

    /// Current lifecycle stage
    pub fn stage(&self) -> ExtractorStage {
        match self.state {
            State::Uninitialized => ExtractorStage::Uninitialized,
            State::Quantized => ExtractorStage::Quantized,
            State::Extracted(_) => ExtractorStage::Extracted,
        }
    }

    /// Full extraction result
    pub fn extraction(&self) -> GlcmResult<&Extraction> {
        match &self.state {
            State::Extracted(extraction) => Ok(extraction),
            _ => Err(GlcmError::NotExtracted),
        }
    }

    /// Averaged features
    pub fn features(&self) -> GlcmResult<&FeatureSet> {
        self.extraction().map(Extraction::features)
    }

    /// Per-direction features
    pub fn directional_features(&self) -> GlcmResult<&[DirectionalFeatures]> {
        self.extraction().map(Extraction::directional)
    }

    pub fn contrast(&self) -> GlcmResult<f64> {
        Ok(self.features()?.contrast)
    }

    /// Alias of [`GlcmExtractor::homogeneity`] kept under its historical spelling
    pub fn homogenity(&self) -> GlcmResult<f64> {
        self.homogeneity()
    }

    pub fn homogeneity(&self) -> GlcmResult<f64> {
        Ok(self.features()?.homogeneity)
    }

    pub fn entropy(&self) -> GlcmResult<f64> {
        Ok(self.features()?.entropy)
    }

    pub fn energy(&self) -> GlcmResult<f64> {
        Ok(self.features()?.energy)
    }

    pub fn dissimilarity(&self) -> GlcmResult<f64> {
        Ok(self.features()?.dissimilarity)
    }

    /// Configured gray level
    pub fn gray_level(&self) -> i32 {
        self.gray_level
    }

    /// Side length of the co-occurrence matrices
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// The source image
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Give back the source image
    pub fn into_source(self) -> S {
        self.source
    }
}
