use std::path::Path;

use log::{debug, info, warn};

use crate::config::ExtractionConfig;
use crate::glcm::errors::GlcmResult;
use crate::glcm::extractor::{matrix_levels, Extraction, GlcmExtractor};
use crate::source::{load_image, load_image_from_bytes, PixelSource};
use crate::utils::progress::ProgressTracker;

/// Features extracted from one image, labelled with where it came from
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureReport {
    /// Path or caller-supplied label of the image
    pub source: String,
    /// Averaged and per-direction features
    pub extraction: Extraction,
}

/// Main interface to the GlcmKit library
pub struct GlcmKit {
    config: ExtractionConfig,
}

impl GlcmKit {
    /// Create a new GlcmKit instance
    ///
    /// # Arguments
    /// * `config` - Extraction settings
    ///
    /// # Returns
    /// A GlcmKit instance, or `InvalidConfiguration` if the gray level is not positive
    pub fn new(config: ExtractionConfig) -> GlcmResult<Self> {
        let levels = matrix_levels(config.gray_level)?;
        debug!("Using gray level {} ({}x{} matrices)", config.gray_level, levels, levels);

        Ok(GlcmKit { config })
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract features from an image already in memory
    ///
    /// # Arguments
    /// * `source` - Pixel source to analyse
    /// * `label` - Name recorded in the report
    ///
    /// # Returns
    /// The feature report or the error that aborted extraction
    pub fn extract_image<S: PixelSource>(&self, source: S, label: &str) -> GlcmResult<FeatureReport> {
        let (width, height) = source.dimensions();
        debug!("Extracting features from {} ({}x{})", label, width, height);

        let mut extractor = GlcmExtractor::new(source, self.config.gray_level)?;
        extractor.extract()?;
        let extraction = extractor.extraction()?.clone();

        Ok(FeatureReport {
            source: label.to_string(),
            extraction,
        })
    }

    /// Decode an image file and extract its features
    ///
    /// # Arguments
    /// * `input_path` - Path to the image file
    ///
    /// # Returns
    /// The feature report, or a decode or extraction error
    pub fn extract_file(&self, input_path: &str) -> GlcmResult<FeatureReport> {
        info!("Analyzing file: {}", input_path);
        let image = load_image(Path::new(input_path))?;
        self.extract_image(&image, input_path)
    }

    /// Decode an encoded image held in memory and extract its features
    ///
    /// # Arguments
    /// * `bytes` - Encoded image data
    /// * `label` - Name recorded in the report
    ///
    /// # Returns
    /// The feature report, or a decode or extraction error
    pub fn extract_bytes(&self, bytes: &[u8], label: &str) -> GlcmResult<FeatureReport> {
        let image = load_image_from_bytes(bytes)?;
        self.extract_image(&image, label)
    }

    /// Extract features from several files
    ///
    /// Each file is processed independently; a failure is recorded for that
    /// file and the remaining files are still processed.
    ///
    /// # Arguments
    /// * `input_paths` - Paths to the image files
    /// * `progress` - Tracker advanced once per file
    ///
    /// # Returns
    /// One `(path, result)` pair per input, in input order
    pub fn extract_files(&self, input_paths: &[String],
                         progress: &ProgressTracker) -> Vec<(String, GlcmResult<FeatureReport>)> {
        let mut results = Vec::with_capacity(input_paths.len());

        for path in input_paths {
            progress.set_message(path);
            let result = self.extract_file(path);
            if let Err(e) = &result {
                warn!("Skipping {}: {}", path, e);
            }
            results.push((path.clone(), result));
            progress.increment(1);
        }

        progress.finish();
        results
    }
}
