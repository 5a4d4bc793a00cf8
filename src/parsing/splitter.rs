//! Splits a transcript into logical message spans.
//!
//! A span starts at a line that looks like a message header (see
//! [`ExportFormat::is_boundary`]) and runs up to, but not including, the next
//! such line. Continuation lines stay inside the span with their line breaks.
//!
//! ```rust
//! use chatlens::parsing::SpanSplitter;
//!
//! let raw = "Exported chat\n01/02/2023, 10:00 - Alice: line one\nline two\n01/02/2023, 10:01 - Bob: hi\n";
//! let mut splitter = SpanSplitter::new(raw);
//! let spans: Vec<_> = splitter.by_ref().collect();
//!
//! assert_eq!(spans.len(), 2);
//! assert_eq!(spans[0].text, "01/02/2023, 10:00 - Alice: line one\nline two");
//! assert_eq!(spans[1].line, 4);
//! assert_eq!(splitter.preamble_lines(), 1);
//! ```

use super::format::ExportFormat;

const BOM: char = '\u{feff}';

/// One logical message: a header line plus its continuation lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalSpan<'a> {
    /// 1-based line number of the header line
    pub line: usize,
    /// Span text without its trailing line terminator
    pub text: &'a str,
}

/// Lazy iterator over the [`LogicalSpan`]s of a transcript.
#[derive(Debug, Clone)]
pub struct SpanSplitter<'a> {
    input: &'a str,
    /// Byte offset of the next unread line
    pos: usize,
    /// 1-based number of the line at `pos`
    line: usize,
    preamble_lines: usize,
}

impl<'a> SpanSplitter<'a> {
    pub fn new(input: &'a str) -> Self {
        let input = input.strip_prefix(BOM).unwrap_or(input);
        let mut splitter = Self {
            input,
            pos: 0,
            line: 1,
            preamble_lines: 0,
        };
        splitter.skip_preamble();
        splitter
    }

    /// Number of lines before the first boundary that were discarded.
    pub fn preamble_lines(&self) -> usize {
        self.preamble_lines
    }

    /// Returns the line starting at `pos` (without terminator) and the
    /// offset just past its terminator.
    fn line_at(&self, pos: usize) -> (&'a str, usize) {
        let rest = &self.input[pos..];
        match rest.find('\n') {
            Some(i) => (rest[..i].trim_end_matches('\r'), pos + i + 1),
            None => (rest.trim_end_matches('\r'), self.input.len()),
        }
    }

    fn skip_preamble(&mut self) {
        while self.pos < self.input.len() {
            let (line, next) = self.line_at(self.pos);
            if ExportFormat::is_boundary(line) {
                return;
            }
            self.pos = next;
            self.line += 1;
            self.preamble_lines += 1;
        }
    }
}

impl<'a> Iterator for SpanSplitter<'a> {
    type Item = LogicalSpan<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        let start = self.pos;
        let start_line = self.line;
        let (_, mut next) = self.line_at(start);
        self.line += 1;

        while next < self.input.len() {
            let (line, after) = self.line_at(next);
            if ExportFormat::is_boundary(line) {
                break;
            }
            next = after;
            self.line += 1;
        }

        self.pos = next;
        let text = self.input[start..next].trim_end_matches(['\r', '\n']);
        Some(LogicalSpan {
            line: start_line,
            text,
        })
    }
}
