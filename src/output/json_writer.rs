//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::report::AnalysisReport;

/// Writes a report to a JSON file.
///
/// # Format
/// ```json
/// {
///   "filter": "Overall",
///   "stats": {"messages": 3, "words": 12, "media": 1, "links": 0},
///   "monthly_timeline": [{"year": 2023, "month": 2, "label": "Feb-2023", "count": 3}],
///   ...
/// }
/// ```
pub fn write_json(report: &AnalysisReport, output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts a report to a pretty-printed JSON string.
pub fn to_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
