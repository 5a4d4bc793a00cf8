//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure
//! - [`ReportFormat`] - report format choices, convertible to
//!   [`format::OutputFormat`](crate::format::OutputFormat)

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::filter::{Filter, OVERALL};
use crate::output::DEFAULT_TOP;

/// Analyze an exported WhatsApp chat: activity timelines, busiest
/// participants, word and emoji usage.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens \"WhatsApp Chat with Friends.txt\"
    chatlens chat.txt -u Alice
    chatlens chat.txt -f json -o report.json
    chatlens chat.txt --after 2024-01-01 --records records.csv
    chatlens chat.txt --list-users")]
pub struct Args {
    /// Path to the exported transcript
    pub input: PathBuf,

    /// Analyze a single participant instead of the whole chat
    #[arg(short, long, value_name = "USER", default_value = OVERALL)]
    pub user: String,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Only include messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only include messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Also export the parsed record table as CSV
    #[arg(long, value_name = "PATH")]
    pub records: Option<PathBuf>,

    /// Replace the built-in English stop words with a word list (one per line)
    #[arg(long, value_name = "PATH")]
    pub stop_words: Option<PathBuf>,

    /// Rows shown per table in the text report
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TOP)]
    pub top: usize,

    /// Body text that marks an omitted attachment
    #[arg(long, value_name = "TEXT")]
    pub media_placeholder: Option<String>,

    /// Print the participant list and exit
    #[arg(long)]
    pub list_users: bool,

    /// Log filter when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Args {
    /// Participant filter selected with `--user`.
    pub fn filter(&self) -> Filter {
        Filter::from(self.user.as_str())
    }
}

/// Report format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Aligned plain-text tables
    #[default]
    #[value(alias = "txt")]
    Text,

    /// Every table as JSON
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "Text"),
            ReportFormat::Json => write!(f, "JSON"),
        }
    }
}

// Conversion to library format type
impl From<ReportFormat> for crate::format::OutputFormat {
    fn from(format: ReportFormat) -> crate::format::OutputFormat {
        match format {
            ReportFormat::Text => crate::format::OutputFormat::Text,
            ReportFormat::Json => crate::format::OutputFormat::Json,
        }
    }
}
