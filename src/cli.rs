//! Command-line interface definition

use clap::{value_parser, Arg, ArgAction, Command as ClapCommand};

/// Build the argument parser for the `glcmkit` binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("GlcmKit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract GLCM texture features (contrast, homogeneity, entropy, energy, dissimilarity) from images")
        .arg(
            Arg::new("input")
                .help("Input image file(s)")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("gray-level")
                .short('g')
                .long("gray-level")
                .help("Gray levels to quantize into; 1-254 rescales, 255 or more keeps raw gray values")
                .value_name("LEVEL")
                .value_parser(value_parser!(i32))
                .allow_negative_numbers(true)
                .required(false),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Output format (text, csv, json)")
                .value_name("FORMAT")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write results to this file instead of stdout")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("per-direction")
                .long("per-direction")
                .help("Also report features for each of the four directions")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log output to this file instead of stderr")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::resolve_config;
    use crate::config::OutputFormat;

    #[test]
    fn test_flags_override_defaults() {
        let matches = build_cli().get_matches_from([
            "glcmkit", "a.png", "b.png", "-g", "31", "--format", "json", "--per-direction",
        ]);
        let config = resolve_config(&matches).unwrap();

        assert_eq!(config.gray_level, 31);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(config.per_direction);
        assert_eq!(matches.get_many::<String>("input").unwrap().len(), 2);
    }

    #[test]
    fn test_defaults_without_flags() {
        let matches = build_cli().get_matches_from(["glcmkit", "a.png"]);
        let config = resolve_config(&matches).unwrap();

        assert_eq!(config.gray_level, 15);
        assert_eq!(config.output_format, OutputFormat::Text);
    }

    #[test]
    fn test_negative_gray_level_parses() {
        let matches = build_cli().get_matches_from(["glcmkit", "a.png", "-g", "-3"]);
        let config = resolve_config(&matches).unwrap();
        assert_eq!(config.gray_level, -3);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let matches = build_cli().get_matches_from(["glcmkit", "a.png", "-f", "yaml"]);
        assert!(resolve_config(&matches).is_err());
    }

    #[test]
    fn test_missing_input_is_rejected() {
        assert!(build_cli().try_get_matches_from(["glcmkit"]).is_err());
    }
}
