//! Single image feature extraction command
//!
//! Extracts the GLCM texture features of one image and writes them in the
//! configured output format.

use std::io::Write;

use clap::ArgMatches;
use log::{debug, info};

use crate::api::GlcmKit;
use crate::commands::command_traits::Command;
use crate::config::ExtractionConfig;
use crate::glcm::errors::{GlcmError, GlcmResult};
use crate::utils::format_utils::write_reports;
use crate::utils::write_utils::open_output;

/// Command for extracting features from a single image
pub struct ExtractCommand {
    /// Path to the input image
    input_file: String,
    /// Optional path for the results (stdout when absent)
    output_file: Option<String>,
    /// Resolved extraction settings
    config: ExtractionConfig,
}

impl ExtractCommand {
    /// Create a new extract command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `config` - Resolved extraction settings
    ///
    /// # Returns
    /// A new ExtractCommand instance or an error
    pub fn new(args: &ArgMatches, config: ExtractionConfig) -> GlcmResult<Self> {
        let input_file = args.get_many::<String>("input")
            .and_then(|mut inputs| inputs.next())
            .ok_or_else(|| GlcmError::InvalidConfiguration("Missing input file".to_string()))?
            .clone();

        let output_file = args.get_one::<String>("output").cloned();

        Ok(ExtractCommand {
            input_file,
            output_file,
            config,
        })
    }
}

impl Command for ExtractCommand {
    fn execute(&self) -> GlcmResult<()> {
        let kit = GlcmKit::new(self.config.clone())?;
        let report = kit.extract_file(&self.input_file)?;

        let features = report.extraction.features();
        info!("Extraction complete for {}", self.input_file);
        debug!("Averaged features: {:?}", features);

        let mut writer = open_output(self.output_file.as_deref())?;
        write_reports(&mut writer, std::slice::from_ref(&report),
                      self.config.output_format, self.config.per_direction)?;
        writer.flush()?;

        Ok(())
    }
}
