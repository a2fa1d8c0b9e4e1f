//! Custom error types for GLCM feature extraction

use std::io;

use thiserror::Error;

use super::direction::Direction;

/// Errors raised while extracting texture features
#[derive(Debug, Error)]
pub enum GlcmError {
    /// I/O error while reading input or writing results
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The image collaborator could not decode the input
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// A direction produced no adjacent pixel pairs, so its matrix cannot be normalized
    #[error("degenerate input: no adjacent pixel pairs in the {direction} direction")]
    DegenerateInput { direction: Direction },

    /// Configuration value outside the supported range
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Features were requested before `extract()` completed
    #[error("features are not available until extract() has completed")]
    NotExtracted,

    /// Some images of a batch could not be processed
    #[error("{failed} of {total} images could not be processed")]
    BatchFailed { failed: usize, total: usize },
}

/// Result type for GLCM operations
pub type GlcmResult<T> = Result<T, GlcmError>;
