//! Batch feature extraction command
//!
//! Extracts features from several images, showing a progress bar, and
//! writes all successful results together. Images that fail are logged and
//! make the command report an error once the others are written.

use std::io::Write;

use clap::ArgMatches;
use log::{error, info};

use crate::api::{FeatureReport, GlcmKit};
use crate::commands::command_traits::Command;
use crate::config::ExtractionConfig;
use crate::glcm::errors::{GlcmError, GlcmResult};
use crate::utils::format_utils::write_reports;
use crate::utils::progress::ProgressTracker;
use crate::utils::write_utils::open_output;

/// Command for extracting features from many images
pub struct BatchCommand {
    /// Paths to the input images
    input_files: Vec<String>,
    /// Optional path for the results (stdout when absent)
    output_file: Option<String>,
    /// Resolved extraction settings
    config: ExtractionConfig,
}

impl BatchCommand {
    /// Create a new batch command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `config` - Resolved extraction settings
    ///
    /// # Returns
    /// A new BatchCommand instance or an error
    pub fn new(args: &ArgMatches, config: ExtractionConfig) -> GlcmResult<Self> {
        let input_files: Vec<String> = args.get_many::<String>("input")
            .map(|inputs| inputs.cloned().collect())
            .unwrap_or_default();

        if input_files.is_empty() {
            return Err(GlcmError::InvalidConfiguration("Missing input files".to_string()));
        }

        let output_file = args.get_one::<String>("output").cloned();

        Ok(BatchCommand {
            input_files,
            output_file,
            config,
        })
    }
}

impl Command for BatchCommand {
    fn execute(&self) -> GlcmResult<()> {
        let kit = GlcmKit::new(self.config.clone())?;
        let total = self.input_files.len();
        info!("Extracting features from {} images", total);

        let progress = ProgressTracker::new(total as u64, "Extracting GLCM features");
        let results = kit.extract_files(&self.input_files, &progress);

        let mut reports: Vec<FeatureReport> = Vec::with_capacity(total);
        let mut failed = 0;
        for (path, result) in results {
            match result {
                Ok(report) => reports.push(report),
                Err(e) => {
                    error!("Failed to process {}: {}", path, e);
                    failed += 1;
                }
            }
        }

        let mut writer = open_output(self.output_file.as_deref())?;
        write_reports(&mut writer, &reports, self.config.output_format, self.config.per_direction)?;
        writer.flush()?;

        info!("Processed {} of {} images", reports.len(), total);

        if failed > 0 {
            return Err(GlcmError::BatchFailed { failed, total });
        }

        Ok(())
    }
}
