//! GLCM texture feature extraction
//!
//! Computes contrast, homogeneity, entropy, energy and dissimilarity from a
//! gray-level co-occurrence matrix, averaged over the 0°, 45°, 90° and 135°
//! directions at unit pixel distance.

pub mod glcm;
pub mod source;
pub mod config;
pub mod utils;
pub mod commands;
pub mod cli;
pub mod api;
mod maybe_rayon;

pub use crate::api::{FeatureReport, GlcmKit};

pub use glcm::{Direction, Extraction, FeatureSet, GlcmError, GlcmExtractor, GlcmResult};
pub use source::PixelSource;
pub use config::{ExtractionConfig, OutputFormat};
