//! Logger setup for the command-line tool
//!
//! Installs `env_logger` as the backend of the `log` facade. `RUST_LOG`
//! takes precedence over the level chosen here, and output can be sent to
//! a file instead of stderr.

use std::fs::File;
use std::io;

use env_logger::{Builder, Target};
use log::LevelFilter;

/// Global logger configuration
pub struct Logger;

impl Logger {
    /// Initialize the global logger
    ///
    /// # Arguments
    /// * `verbose` - Log at debug level instead of info
    /// * `log_file` - Optional path receiving log output instead of stderr
    ///
    /// # Returns
    /// Ok, or an error if the log file cannot be created
    pub fn init(verbose: bool, log_file: Option<&str>) -> io::Result<()> {
        let mut builder = Builder::new();
        builder
            .filter_level(Self::level(verbose))
            .format_timestamp(None)
            .parse_default_env();

        if let Some(path) = log_file {
            let file = File::create(path)?;
            builder.target(Target::Pipe(Box::new(file)));
        }

        // A logger installed earlier (e.g. by a test harness) stays in place
        if builder.try_init().is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        Ok(())
    }

    /// Level filter for the requested verbosity
    pub fn level(verbose: bool) -> LevelFilter {
        if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}
