//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod extract_command;
pub mod batch_command;

pub use command_traits::{Command, CommandFactory};
pub use extract_command::ExtractCommand;
pub use batch_command::BatchCommand;

use clap::ArgMatches;
use log::debug;

use crate::config::{ExtractionConfig, OutputFormat};
use crate::glcm::errors::GlcmResult;

/// Resolve the configuration for a run
///
/// Starts from the built-in defaults, applies `--config FILE` when given,
/// then any explicit flags.
///
/// # Arguments
/// * `args` - CLI argument matches from clap
///
/// # Returns
/// The resolved configuration or an error
pub fn resolve_config(args: &ArgMatches) -> GlcmResult<ExtractionConfig> {
    let mut config = match args.get_one::<String>("config") {
        Some(path) => ExtractionConfig::from_file(path)?,
        None => ExtractionConfig::default(),
    };

    if let Some(level) = args.get_one::<i32>("gray-level") {
        config.gray_level = *level;
    }

    if let Some(format) = args.get_one::<String>("format") {
        config.output_format = format.parse::<OutputFormat>()?;
    }

    if args.get_flag("per-direction") {
        config.per_direction = true;
    }

    if let Some(path) = args.get_one::<String>("log-file") {
        config.log_file = Some(path.clone());
    }

    Ok(config)
}

/// Factory for creating command instances based on CLI arguments
///
/// A single input runs the extract command; several inputs run the batch
/// command.
pub struct GlcmkitCommandFactory;

impl GlcmkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GlcmkitCommandFactory
    }
}

impl Default for GlcmkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFactory for GlcmkitCommandFactory {
    fn create_command(&self, args: &ArgMatches,
                      config: ExtractionConfig) -> GlcmResult<Box<dyn Command>> {
        let input_count = args.get_many::<String>("input").map_or(0, |inputs| inputs.len());
        debug!("Creating command for {} input(s)", input_count);

        if input_count > 1 {
            Ok(Box::new(BatchCommand::new(args, config)?))
        } else {
            Ok(Box::new(ExtractCommand::new(args, config)?))
        }
    }
}
