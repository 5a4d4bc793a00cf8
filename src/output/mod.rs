//! Output writers.
//!
//! - [`to_text`] / [`write_text`] - aligned plain-text report for terminals
//! - [`to_json`] / [`write_json`] - the full [`AnalysisReport`](crate::report::AnalysisReport)
//!   as JSON - requires `json-output` feature
//! - [`to_csv`] / [`write_csv`] - the record table, `;` delimited - requires
//!   `csv-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::filter::Filter;
//! use chatlens::output::{to_text, write_csv, write_json};
//! use chatlens::query::Insights;
//!
//! let collection = chatlens::TranscriptParser::new().parse_file("chat.txt")?;
//! let report = Insights::new(&collection).report(&Filter::Overall)?;
//!
//! write_json(&report, "report.json")?;
//! write_csv(&collection, "records.csv")?;
//! println!("{}", to_text(&report, 10));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
pub use text_writer::{DEFAULT_TOP, to_text, write_text};
