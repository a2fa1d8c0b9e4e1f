//! Output destination helpers

use std::fs::File;
use std::io::{self, BufWriter, Write};

use log::debug;

use crate::glcm::errors::GlcmResult;

/// Open the destination for formatted results
///
/// # Arguments
/// * `output_path` - File to create, or `None` for standard output
///
/// # Returns
/// A buffered writer or an I/O error
pub fn open_output(output_path: Option<&str>) -> GlcmResult<Box<dyn Write>> {
    match output_path {
        Some(path) => {
            debug!("Writing results to {}", path);
            let file = File::create(path)?;
            Ok(Box::new(BufWriter::new(file)))
        },
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}
