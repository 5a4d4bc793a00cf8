//! Header and sender extraction for a single logical span.

use crate::error::UnparsableLineError;

use super::format::ExportFormat;
use super::splitter::LogicalSpan;
use super::timestamp::RawTimestamp;

/// Separator between the sender name and the message body.
const SENDER_SEPARATOR: &str = ": ";

/// A span whose header was recognized.
///
/// The timestamp is still raw: it is resolved once the whole transcript has
/// been seen and the date order is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedSpan<'a> {
    /// 1-based line number of the header
    pub line: usize,
    /// Export format whose header matched
    pub format: ExportFormat,
    pub timestamp: RawTimestamp<'a>,
    /// `None` for system notifications
    pub sender: Option<&'a str>,
    /// Message text, possibly spanning several lines
    pub body: &'a str,
}

/// Matches spans against the supported export formats in priority order.
#[derive(Debug, Clone)]
pub struct LineParser {
    formats: Vec<ExportFormat>,
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LineParser {
    /// Creates a parser that tries every supported format.
    pub fn new() -> Self {
        Self {
            formats: ExportFormat::all().to_vec(),
        }
    }

    /// Creates a parser restricted to `formats`, tried in the given order.
    pub fn with_formats(formats: impl IntoIterator<Item = ExportFormat>) -> Self {
        Self {
            formats: formats.into_iter().collect(),
        }
    }

    /// Parses one span. The first matching format wins.
    pub fn parse<'a>(&self, span: &LogicalSpan<'a>) -> Result<ParsedSpan<'a>, UnparsableLineError> {
        let text = span.text;

        for &format in &self.formats {
            let Some(header) = format.match_header(text) else {
                continue;
            };
            let (sender, body) = split_sender(&text[header.end..]);
            return Ok(ParsedSpan {
                line: span.line,
                format,
                timestamp: RawTimestamp {
                    date: header.date,
                    clock: header.clock,
                    meridiem: header.meridiem,
                },
                sender,
                body,
            });
        }

        Err(UnparsableLineError::no_matching_format(span.line))
    }
}

/// Splits `rest` into sender and body.
///
/// Only the first line is searched for `": "`, so a colon inside a
/// continuation line of a system notification is never taken for a sender.
fn split_sender(rest: &str) -> (Option<&str>, &str) {
    let first_line_end = rest.find('\n').unwrap_or(rest.len());
    match rest[..first_line_end].find(SENDER_SEPARATOR) {
        Some(idx) if idx > 0 => (
            Some(&rest[..idx]),
            &rest[idx + SENDER_SEPARATOR.len()..],
        ),
        _ => (None, rest),
    }
}
