//! # Chatlens
//!
//! A Rust library for turning exported WhatsApp chat transcripts into
//! activity, participation, vocabulary and emoji statistics.
//!
//! ## Overview
//!
//! A transcript goes through two stages:
//!
//! 1. **Parsing**: the raw export (Android 24-hour or iOS 12-hour layout,
//!    day-first or month-first dates) is split into logical messages and
//!    turned into a [`RecordCollection`] of typed [`MessageRecord`]s.
//!    Continuation lines stay with their message; lines that cannot be
//!    understood are counted in [`ParseDiagnostics`] instead of aborting.
//! 2. **Analytics**: pure queries over a [`Filter`]ed view of the
//!    collection: headline counts, timelines, weekday and month activity,
//!    the weekday x hour heatmap, the busiest participants, word and emoji
//!    frequency tables.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let raw = "\
//! 13/01/2023, 21:04 - Alice: Movie night? 🍿
//! 13/01/2023, 21:05 - Bob: yes!
//! but not a horror movie
//! 13/01/2023, 21:06 - Bob: <Media omitted>
//! ";
//!
//! let collection = chatlens::parse(raw)?;
//! let insights = Insights::new(&collection);
//!
//! let stats = insights.fetch_stats(&Filter::Overall)?;
//! assert_eq!(stats.messages, 3);
//! assert_eq!(stats.media, 1);
//!
//! let words = insights.create_wordcloud(&Filter::Overall)?;
//! assert_eq!(words[0].term, "movie");
//! # Ok::<(), ChatlensError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] - line-level building blocks: export layouts, span
//!   splitting, header parsing, timestamp layouts
//! - [`parser`] - [`TranscriptParser`], the end-to-end entry point
//! - [`builder`] - [`RecordBuilder`](builder::RecordBuilder), turns parsed
//!   spans into records
//! - [`record`] - [`MessageRecord`], [`Sender`] and derived calendar fields
//! - [`collection`] - [`RecordCollection`], [`RecordView`], [`ParseDiagnostics`]
//! - [`filter`] - [`Filter`] (participant selection) and [`DateRange`](filter::DateRange)
//! - [`analytics`] - the aggregation queries and [`AnalyticsEngine`]
//! - [`query`] - [`Insights`], the facade presentation layers talk to
//! - [`report`] - [`AnalysisReport`], every table for one filter
//! - [`output`] - text, JSON and CSV writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) selection
//! - [`config`] - [`ParserConfig`] and [`AnalyticsConfig`]
//! - [`error`] - [`ChatlensError`] and [`Result`]
//! - [`prelude`] - convenient re-exports
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `full` | Everything below (default) |
//! | `cli` | The `chatlens` binary and its logging setup |
//! | `json-output` | JSON report rendering |
//! | `csv-output` | CSV export of the record table |
//! | `gen-test` | The `gen_test` synthetic transcript generator |

pub mod analytics;
pub mod builder;
#[cfg(feature = "cli")]
pub mod cli;
pub mod collection;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
#[cfg(feature = "cli")]
pub mod logging;
pub mod output;
pub mod parser;
pub mod parsing;
pub mod query;
pub mod record;
pub mod report;

// Re-export the main types at the crate root for convenience
pub use analytics::AnalyticsEngine;
pub use collection::{ParseDiagnostics, RecordCollection, RecordView};
pub use config::{AnalyticsConfig, ParserConfig};
pub use error::{ChatlensError, Result, UnparsableLineError, UnparsableReason};
pub use filter::Filter;
pub use parser::TranscriptParser;
pub use query::Insights;
pub use record::{MessageRecord, Sender};
pub use report::AnalysisReport;

/// Parses a transcript with the default [`ParserConfig`].
///
/// Shorthand for `TranscriptParser::new().parse_str(raw)`.
///
/// # Errors
///
/// Returns [`ChatlensError::EmptyInput`] when no message could be built.
pub fn parse(raw: &str) -> Result<RecordCollection> {
    TranscriptParser::new().parse_str(raw)
}

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Records and collections
    pub use crate::collection::{ParseDiagnostics, RecordCollection, RecordView};
    pub use crate::record::{MessageRecord, Sender};

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::config::{AnalyticsConfig, ParserConfig};
    pub use crate::parser::TranscriptParser;
    pub use crate::parsing::{DateOrder, ExportFormat};

    // Filtering
    pub use crate::filter::{DateRange, Filter};

    // Analytics
    pub use crate::analytics::{
        ActivityHeatmap, AnalyticsEngine, BusyUsers, ChatStats, DailyCount, MonthCount,
        MonthlyCount, TermCount, WeekdayCount,
    };
    pub use crate::query::Insights;
    pub use crate::report::AnalysisReport;

    // Output
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
    pub use crate::output::{to_text, write_text};
    #[cfg(feature = "csv-output")]
    pub use crate::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::output::{to_json, write_json};
}
