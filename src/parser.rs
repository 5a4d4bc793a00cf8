//! Transcript parser entry point.
//!
//! [`TranscriptParser`] runs the whole pipeline: split the blob into spans,
//! match each span's header, vote on the date order, resolve timestamps and
//! build the [`RecordCollection`].
//!
//! # Example
//!
//! ```rust
//! use chatlens::TranscriptParser;
//!
//! let raw = "\
//! 01/02/2023, 10:00 - Alice: hello
//! 01/02/2023, 10:05 - Bob joined using this group's invite link
//! 13/02/2023, 21:30 - Bob: hi Alice
//! ";
//!
//! let collection = TranscriptParser::new().parse_str(raw)?;
//! assert_eq!(collection.len(), 3);
//! assert_eq!(collection.participants(), vec!["Alice", "Bob"]);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```
//!
//! Parsing a file on disk:
//!
//! ```rust,no_run
//! use chatlens::TranscriptParser;
//!
//! let collection = TranscriptParser::new().parse_file("WhatsApp Chat with Friends.txt")?;
//! println!("{} records", collection.len());
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::builder::RecordBuilder;
use crate::collection::RecordCollection;
use crate::config::ParserConfig;
use crate::error::{ChatlensError, Result};
use crate::parsing::{DateOrder, LineParser, SpanSplitter, TimestampLayouts};

/// Parser for exported chat transcripts.
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
    lines: LineParser,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            lines: LineParser::new(),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a transcript held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::EmptyInput`] when the text holds no message
    /// that could be parsed.
    pub fn parse_str(&self, raw: &str) -> Result<RecordCollection> {
        let mut splitter = SpanSplitter::new(raw);
        let spans: Vec<_> = splitter.by_ref().collect();
        let boundaries = spans.len();

        let parsed: Vec<_> = spans.iter().map(|span| self.lines.parse(span)).collect();

        let order = DateOrder::detect(parsed.iter().flatten().map(|p| p.timestamp.date))
            .unwrap_or(self.config.default_date_order);
        debug!(boundaries, ?order, "resolved date order");

        let mut builder = RecordBuilder::new(&self.config, TimestampLayouts::new(order));
        for result in parsed {
            match result {
                Ok(span) => builder.push(&span),
                Err(err) => builder.reject(err),
            }
        }

        builder.finish(boundaries, splitter.preamble_lines())
    }

    /// Reads and parses a transcript file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::Io`] if the file cannot be read,
    /// [`ChatlensError::Utf8`] if it is not valid UTF-8, and the errors of
    /// [`parse_str`](Self::parse_str).
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<RecordCollection> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes)
            .map_err(|e| ChatlensError::utf8(format!("reading {}", path.display()), e))?;
        self.parse_str(&content)
    }
}
