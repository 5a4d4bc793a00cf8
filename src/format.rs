//! Report output formats.
//!
//! Library-level format selection, independent of the CLI.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "json-output")]
//! # fn example() -> chatlens::Result<()> {
//! use chatlens::filter::Filter;
//! use chatlens::format::{OutputFormat, to_format_string};
//! use chatlens::query::Insights;
//!
//! let collection = chatlens::parse("01/02/2023, 10:00 - Alice: hello")?;
//! let report = Insights::new(&collection).report(&Filter::Overall)?;
//!
//! let json = to_format_string(&report, OutputFormat::Json)?;
//! assert!(json.starts_with('{'));
//!
//! // Or detect the format from an extension
//! let format = OutputFormat::from_path("report.txt")?;
//! assert_eq!(format, OutputFormat::Text);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ChatlensError;
use crate::output::DEFAULT_TOP;
use crate::report::AnalysisReport;

/// Output format for analysis reports.
///
/// - [`Text`](OutputFormat::Text) - aligned tables for reading in a terminal
/// - [`Json`](OutputFormat::Json) - every table, for charts and other tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Plain text (default)
    #[default]
    Text,

    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatlens::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Text.extension(), "txt");
    /// assert_eq!(OutputFormat::Json.extension(), "json");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Text, OutputFormat::Json]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text/plain",
            OutputFormat::Json => "application/json",
        }
    }

    /// Detects format from a file path based on extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChatlensError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "txt" | "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ChatlensError::invalid_format(
                "output",
                format!("Unknown file extension: '.{}'. Expected one of: txt, json", ext),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Renders a report in the specified format.
///
/// # Errors
///
/// Returns an error if the required feature for the format is not enabled
/// or serialization fails.
pub fn to_format_string(report: &AnalysisReport, format: OutputFormat) -> Result<String, ChatlensError> {
    match format {
        OutputFormat::Text => Ok(crate::output::to_text(report, DEFAULT_TOP)),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::output::to_json(report),
        #[allow(unreachable_patterns)]
        _ => Err(ChatlensError::invalid_format(
            "output",
            format!("Output format {format} requires the 'json-output' feature to be enabled"),
        )),
    }
}

/// Writes a report to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
pub fn write_to_format(
    report: &AnalysisReport,
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<(), ChatlensError> {
    let rendered = to_format_string(report, format)?;
    std::fs::write(path, rendered)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("TXT").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("csv").is_err());
    }

    #[test]
    fn test_format_display() {
        assert_eq!(OutputFormat::Text.to_string(), "Text");
        assert_eq!(OutputFormat::Json.to_string(), "JSON");
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            OutputFormat::from_path("report.json").unwrap(),
            OutputFormat::Json
        );
        assert_eq!(
            OutputFormat::from_path("/tmp/out/REPORT.TXT").unwrap(),
            OutputFormat::Text
        );
        assert!(OutputFormat::from_path("report.xml").unwrap_err().is_invalid_format());
        assert!(OutputFormat::from_path("report").is_err());
    }

    #[test]
    fn test_format_default_and_all() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
        assert_eq!(OutputFormat::all().len(), 2);
        assert_eq!(OutputFormat::Json.mime_type(), "application/json");
    }

    #[test]
    fn test_format_serde() {
        let json = serde_json::to_string(&OutputFormat::Json).unwrap();
        assert_eq!(json, "\"json\"");
        let parsed: OutputFormat = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(parsed, OutputFormat::Text);
    }
}
