//! Image decoding through the `image` crate

use std::path::Path;

use image::DynamicImage;

use crate::glcm::errors::GlcmResult;

/// Decode an image file
///
/// The format is taken from the file contents and extension. Decoder
/// failures surface as `GlcmError::Decode`, missing files as `GlcmError::Decode`
/// wrapping the underlying I/O error.
///
/// # Arguments
/// * `path` - Path to a raster image (PNG, JPEG, TIFF, ...)
///
/// # Returns
/// The decoded image or an error
pub fn load_image<P: AsRef<Path>>(path: P) -> GlcmResult<DynamicImage> {
    Ok(image::open(path)?)
}

/// Decode an image held in memory
///
/// # Arguments
/// * `bytes` - Encoded image data; the format is guessed from its header
///
/// # Returns
/// The decoded image or an error
pub fn load_image_from_bytes(bytes: &[u8]) -> GlcmResult<DynamicImage> {
    Ok(image::load_from_memory(bytes)?)
}
