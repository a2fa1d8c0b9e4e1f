//! Gray-Level Co-occurrence Matrix texture features
//!
//! This module holds the algorithmic core: quantization, directional
//! co-occurrence counting, symmetrization and normalization, the five
//! texture statistics, and the extractor that ties them together.

pub mod cooccurrence;
pub mod direction;
pub mod errors;
pub mod extractor;
pub mod features;
pub mod matrix;
pub mod quantizer;
#[cfg(test)]
mod tests;

pub use cooccurrence::CoOccurrenceBuilder;
pub use direction::Direction;
pub use errors::{GlcmError, GlcmResult};
pub use extractor::{extract_from_grid, matrix_levels, Extraction, ExtractorStage, GlcmExtractor};
pub use features::{DirectionalFeatures, FeatureSet};
pub use matrix::{CountMatrix, ProbabilityMatrix};
pub use quantizer::{quantize_rgb, GrayLevelGrid};
