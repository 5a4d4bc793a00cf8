//! Turns parsed spans into [`MessageRecord`]s.
//!
//! The builder resolves timestamps, assigns sequence numbers in input order,
//! flags media placeholders and keeps the bookkeeping that ends up in
//! [`ParseDiagnostics`].

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use crate::collection::{ParseDiagnostics, RecordCollection};
use crate::config::ParserConfig;
use crate::error::{ChatlensError, Result, UnparsableLineError};
use crate::parsing::{ParsedSpan, TimestampLayouts};
use crate::record::{MessageRecord, Sender};

/// Accumulates records for one transcript.
#[derive(Debug)]
pub struct RecordBuilder<'c> {
    config: &'c ParserConfig,
    layouts: TimestampLayouts,
    records: Vec<MessageRecord>,
    diagnostics: ParseDiagnostics,
    last_timestamp: Option<NaiveDateTime>,
}

impl<'c> RecordBuilder<'c> {
    pub fn new(config: &'c ParserConfig, layouts: TimestampLayouts) -> Self {
        Self {
            config,
            layouts,
            records: Vec::new(),
            diagnostics: ParseDiagnostics {
                date_order: Some(layouts.preferred()),
                ..ParseDiagnostics::default()
            },
            last_timestamp: None,
        }
    }

    /// Builds a record from `span`.
    ///
    /// A timestamp no layout accepts rejects the span instead.
    pub fn push(&mut self, span: &ParsedSpan<'_>) {
        let Some(timestamp) = self.layouts.parse(&span.timestamp) else {
            self.reject(UnparsableLineError::invalid_timestamp(
                span.line,
                span.timestamp.to_string(),
            ));
            return;
        };

        if self.diagnostics.format.is_none() {
            self.diagnostics.format = Some(span.format);
        }

        if self.last_timestamp.is_some_and(|last| timestamp < last) {
            self.diagnostics.out_of_order += 1;
        }
        self.last_timestamp = Some(timestamp);

        let sender = match span.sender {
            Some(name) => Sender::participant(name),
            None => {
                self.diagnostics.system_notifications += 1;
                Sender::System
            }
        };
        let has_media = span.body.trim() == self.config.media_placeholder;

        let record = MessageRecord::new(self.records.len(), timestamp, sender, span.body, has_media);
        self.records.push(record);
    }

    /// Records a span that could not be parsed.
    pub fn reject(&mut self, error: UnparsableLineError) {
        debug!(line = error.line, reason = %error.reason, "skipping unparsable message");
        self.diagnostics.unparsable += 1;
        if self.diagnostics.unparsable_samples.len() < self.config.max_unparsable_samples {
            self.diagnostics.unparsable_samples.push(error);
        }
    }

    /// Number of records built so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Finalizes the collection.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::EmptyInput`] when no record was built.
    pub fn finish(mut self, boundaries: usize, preamble_lines: usize) -> Result<RecordCollection> {
        self.diagnostics.boundaries = boundaries;
        self.diagnostics.preamble_lines = preamble_lines;

        if self.records.is_empty() {
            warn!(
                boundaries,
                unparsable = self.diagnostics.unparsable,
                "transcript contains no analyzable messages"
            );
            return Err(ChatlensError::empty_input(
                boundaries,
                self.diagnostics.unparsable,
            ));
        }

        if self.diagnostics.unparsable > 0 {
            warn!(
                unparsable = self.diagnostics.unparsable,
                "some messages could not be parsed and were skipped"
            );
        }
        info!(
            records = self.records.len(),
            system = self.diagnostics.system_notifications,
            out_of_order = self.diagnostics.out_of_order,
            preamble_lines,
            "parsed transcript"
        );

        Ok(RecordCollection::new(self.records, self.diagnostics))
    }
}
