//! Utility modules for common functionality
//!
//! This module provides the logging, progress and output helpers used by the
//! command-line layer.

pub mod logger;
pub mod progress;
pub mod format_utils;
pub(crate) mod write_utils;
