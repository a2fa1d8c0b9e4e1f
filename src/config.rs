//! Extraction configuration
//!
//! Settings are read from TOML. The built-in defaults ship as
//! `glcmkit.toml` and are parsed once at first use; a user file only needs
//! to name the keys it changes.

use std::fmt;
use std::fs;
use std::str::FromStr;

use lazy_static::lazy_static;

use crate::glcm::errors::{GlcmError, GlcmResult};

lazy_static! {
    static ref DEFAULT_CONFIG: ExtractionConfig = {
        let content = include_str!("../glcmkit.toml");
        ExtractionConfig::builtin().merge_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse built-in configuration: {}", e);
            ExtractionConfig::builtin()
        })
    };
}

/// How extracted features are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `Name: value` lines
    Text,
    /// Header row plus one row per image
    Csv,
    /// Array of objects, one per image
    Json,
}

impl FromStr for OutputFormat {
    type Err = GlcmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(GlcmError::InvalidConfiguration(format!(
                "unsupported output format: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// Settings for one extraction run
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionConfig {
    /// Gray level count used for quantization
    pub gray_level: i32,
    /// Output format for results
    pub output_format: OutputFormat,
    /// Whether to report per-direction features as well
    pub per_direction: bool,
    /// Optional file receiving log output
    pub log_file: Option<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

impl ExtractionConfig {
    /// Hard-coded fallback used when the embedded defaults cannot be parsed
    fn builtin() -> Self {
        ExtractionConfig {
            gray_level: 15,
            output_format: OutputFormat::Text,
            per_direction: false,
            log_file: None,
        }
    }

    /// Parse a configuration on top of the defaults
    ///
    /// # Arguments
    /// * `content` - TOML document
    ///
    /// # Returns
    /// The configuration or an `InvalidConfiguration` error
    pub fn from_toml_str(content: &str) -> GlcmResult<Self> {
        ExtractionConfig::default().merge_str(content)
    }

    /// Load a configuration file on top of the defaults
    ///
    /// # Arguments
    /// * `path` - Path to a TOML file
    ///
    /// # Returns
    /// The configuration or an error
    pub fn from_file(path: &str) -> GlcmResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Override the keys present in a TOML document
    fn merge_str(mut self, content: &str) -> GlcmResult<Self> {
        let toml_value: toml::Table = content.parse().map_err(|e| {
            GlcmError::InvalidConfiguration(format!("failed to parse TOML: {}", e))
        })?;

        if let Some(value) = toml_value.get("gray_level") {
            let level = value.as_integer().ok_or_else(|| {
                GlcmError::InvalidConfiguration("gray_level must be an integer".to_string())
            })?;
            self.gray_level = i32::try_from(level).map_err(|_| {
                GlcmError::InvalidConfiguration(format!("gray_level {} is out of range", level))
            })?;
        }

        if let Some(value) = toml_value.get("output_format") {
            let name = value.as_str().ok_or_else(|| {
                GlcmError::InvalidConfiguration("output_format must be a string".to_string())
            })?;
            self.output_format = name.parse()?;
        }

        if let Some(value) = toml_value.get("per_direction") {
            self.per_direction = value.as_bool().ok_or_else(|| {
                GlcmError::InvalidConfiguration("per_direction must be a boolean".to_string())
            })?;
        }

        if let Some(value) = toml_value.get("log_file") {
            let path = value.as_str().ok_or_else(|| {
                GlcmError::InvalidConfiguration("log_file must be a string".to_string())
            })?;
            self.log_file = Some(path.to_string());
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults() {
        let config = ExtractionConfig::default();
        assert_eq!(config.gray_level, 15);
        assert_eq!(config.output_format, OutputFormat::Text);
        assert!(!config.per_direction);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = ExtractionConfig::from_toml_str("gray_level = 63\noutput_format = \"CSV\"").unwrap();
        assert_eq!(config.gray_level, 63);
        assert_eq!(config.output_format, OutputFormat::Csv);
        assert!(!config.per_direction);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(ExtractionConfig::from_toml_str("gray_level = \"many\"").is_err());
        assert!(ExtractionConfig::from_toml_str("gray_level = 99999999999").is_err());
        assert!(ExtractionConfig::from_toml_str("output_format = \"xml\"").is_err());
        assert!(ExtractionConfig::from_toml_str("per_direction = 1").is_err());
        assert!(ExtractionConfig::from_toml_str("gray_level = ").is_err());
    }

    #[test]
    fn test_output_format_names() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("txt".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
    }
}
