//! Result formatting utilities
//!
//! Writes extracted features as plain text, CSV or JSON.

use std::io::Write;

use crate::api::FeatureReport;
use crate::config::OutputFormat;
use crate::glcm::direction::Direction;
use crate::glcm::errors::GlcmResult;
use crate::glcm::features::FeatureSet;

/// Labels used by the text format, in `FeatureSet::named_values` order
const TEXT_LABELS: [&str; 5] = ["Contrast", "Homogenity", "Entropy", "Energy", "Dissimilarity"];

/// Write reports in the requested format
///
/// # Arguments
/// * `writer` - Destination for the formatted output
/// * `reports` - One report per analysed image
/// * `format` - Output format
/// * `per_direction` - Whether to include the four per-direction feature sets
///
/// # Returns
/// Result indicating success or an I/O error
pub fn write_reports(
    writer: &mut dyn Write,
    reports: &[FeatureReport],
    format: OutputFormat,
    per_direction: bool,
) -> GlcmResult<()> {
    match format {
        OutputFormat::Text => write_text(writer, reports, per_direction),
        OutputFormat::Csv => write_csv(writer, reports, per_direction),
        OutputFormat::Json => write_json(writer, reports, per_direction),
    }
}

fn write_text(writer: &mut dyn Write, reports: &[FeatureReport], per_direction: bool) -> GlcmResult<()> {
    let multiple = reports.len() > 1;

    for (index, report) in reports.iter().enumerate() {
        if multiple {
            if index > 0 {
                writeln!(writer)?;
            }
            writeln!(writer, "File: {}", report.source)?;
        }

        write_text_features(writer, report.extraction.features(), "")?;

        if per_direction {
            for directional in report.extraction.directional() {
                writeln!(writer, "Direction {}:", directional.direction)?;
                write_text_features(writer, &directional.features, "  ")?;
            }
        }
    }

    Ok(())
}

fn write_text_features(writer: &mut dyn Write, features: &FeatureSet, indent: &str) -> GlcmResult<()> {
    for (label, (_, value)) in TEXT_LABELS.iter().zip(features.named_values()) {
        writeln!(writer, "{}{}: {}", indent, label, value)?;
    }
    Ok(())
}

fn write_csv(writer: &mut dyn Write, reports: &[FeatureReport], per_direction: bool) -> GlcmResult<()> {
    let names = FeatureSet::NAMES;

    write!(writer, "file")?;
    for name in names {
        write!(writer, ",{}", name)?;
    }
    if per_direction {
        for direction in Direction::ALL {
            for name in names {
                write!(writer, ",{}_{}", name, direction.degrees())?;
            }
        }
    }
    writeln!(writer)?;

    for report in reports {
        write!(writer, "{}", csv_field(&report.source))?;
        for (_, value) in report.extraction.features().named_values() {
            write!(writer, ",{}", value)?;
        }
        if per_direction {
            for directional in report.extraction.directional() {
                for (_, value) in directional.features.named_values() {
                    write!(writer, ",{}", value)?;
                }
            }
        }
        writeln!(writer)?;
    }

    Ok(())
}

fn write_json(writer: &mut dyn Write, reports: &[FeatureReport], per_direction: bool) -> GlcmResult<()> {
    writeln!(writer, "[")?;

    for (index, report) in reports.iter().enumerate() {
        writeln!(writer, "  {{")?;
        write!(writer, "    \"file\": \"{}\"", json_escape(&report.source))?;
        for (name, value) in report.extraction.features().named_values() {
            write!(writer, ",\n    \"{}\": {}", name, value)?;
        }

        if per_direction {
            writeln!(writer, ",")?;
            writeln!(writer, "    \"directions\": [")?;
            let directional = report.extraction.directional();
            for (d, entry) in directional.iter().enumerate() {
                write!(writer, "      {{\"angle\": {}", entry.direction.degrees())?;
                for (name, value) in entry.features.named_values() {
                    write!(writer, ", \"{}\": {}", name, value)?;
                }
                if d + 1 < directional.len() {
                    writeln!(writer, "}},")?;
                } else {
                    writeln!(writer, "}}")?;
                }
            }
            writeln!(writer, "    ]")?;
        } else {
            writeln!(writer)?;
        }

        if index + 1 < reports.len() {
            writeln!(writer, "  }},")?;
        } else {
            writeln!(writer, "  }}")?;
        }
    }

    writeln!(writer, "]")?;
    Ok(())
}

/// Quote a CSV field when it contains a separator, quote or line break
fn csv_field(value: &str) -> String {
    if value.contains(&[',', '"', '\n', '\r'][..]) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn json_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if (c as u32) < 0x20 => escaped.push_str(&format!("\\u{:04x}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}
