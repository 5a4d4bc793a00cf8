//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum for every error a
//! caller can see, plus [`UnparsableLineError`], which is only ever
//! *recorded*: the parser skips spans it cannot understand and reports them
//! through [`ParseDiagnostics`](crate::collection::ParseDiagnostics).
//!
//! # Error Handling Philosophy
//!
//! - **Malformed lines** are recovered locally and counted
//! - **Structural problems** (nothing parsed at all) are surfaced to the caller
//! - **Analytics queries** never fail; sparse data yields zero-valued results

use std::io;

use serde::Serialize;
use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::RecordCollection;
///
/// fn load(raw: &str) -> Result<RecordCollection> {
///     chatlens::parse(raw)
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input transcript doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing a report)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The transcript contains nothing that could be analyzed.
    ///
    /// Raised when the blob has zero recognizable message boundaries, or when
    /// every span that looked like a message failed to parse. Callers use
    /// this to tell "nothing parsed at all" apart from "valid chat, zero
    /// messages in filter".
    #[error(
        "No analyzable content: found {boundaries} message boundaries, {unparsable} unparsable"
    )]
    EmptyInput {
        /// Number of lines that looked like the start of a message
        boundaries: usize,
        /// Number of those spans that could not be parsed
        unparsable: usize,
    },

    /// The requested participant does not occur in the transcript.
    ///
    /// Usually indicates a stale selection in the presentation layer.
    #[error("Participant '{participant}' not found in this chat")]
    FilterNotFound {
        /// The participant name that was requested
        participant: String,
    },

    /// Unknown or unavailable output format.
    ///
    /// Raised for an unrecognized file extension or a format whose cargo
    /// feature is disabled.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What kind of format was being resolved
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Invalid date in a date range.
    ///
    /// Date ranges expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// UTF-8 encoding error.
    ///
    /// Occurs when an input file is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates an empty-input error.
    pub fn empty_input(boundaries: usize, unparsable: usize) -> Self {
        ChatlensError::EmptyInput {
            boundaries,
            unparsable,
        }
    }

    /// Creates a filter-not-found error.
    pub fn filter_not_found(participant: impl Into<String>) -> Self {
        ChatlensError::FilterNotFound {
            participant: participant.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatlensError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates a UTF-8 error with context.
    pub fn utf8(context: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if the transcript had nothing to analyze.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, ChatlensError::EmptyInput { .. })
    }

    /// Returns `true` if a participant filter could not be resolved.
    pub fn is_filter_not_found(&self) -> bool {
        matches!(self, ChatlensError::FilterNotFound { .. })
    }

    /// Returns `true` if this is a format-related error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlensError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatlensError::InvalidDate { .. })
    }
}

// ============================================================================
// Recorded (non-fatal) parse errors
// ============================================================================

/// Why a logical span could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "raw", rename_all = "snake_case")]
pub enum UnparsableReason {
    /// The span starts like a message but fits no supported export layout.
    #[error("no supported export format matches")]
    NoMatchingFormat,
    /// The header matched, but no timestamp layout accepts the date/time.
    #[error("timestamp '{0}' matches no known layout")]
    InvalidTimestamp(String),
}

/// A span that was skipped during parsing.
///
/// Never returned from the public parsing entry points; collected in
/// [`ParseDiagnostics`](crate::collection::ParseDiagnostics) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("unparsable message at line {line}: {reason}")]
pub struct UnparsableLineError {
    /// 1-based line number where the span starts
    pub line: usize,
    /// What went wrong
    pub reason: UnparsableReason,
}

impl UnparsableLineError {
    pub fn no_matching_format(line: usize) -> Self {
        Self {
            line,
            reason: UnparsableReason::NoMatchingFormat,
        }
    }

    pub fn invalid_timestamp(line: usize, raw: impl Into<String>) -> Self {
        Self {
            line,
            reason: UnparsableReason::InvalidTimestamp(raw.into()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatlensError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_empty_input_display() {
        let err = ChatlensError::empty_input(0, 0);
        assert!(err.to_string().contains("No analyzable content"));
        assert!(err.is_empty_input());
        assert!(!err.is_io());
    }

    #[test]
    fn test_filter_not_found_display() {
        let err = ChatlensError::filter_not_found("Mallory");
        assert!(err.to_string().contains("Mallory"));
        assert!(err.is_filter_not_found());
        assert!(!err.is_empty_input());
    }

    #[test]
    fn test_invalid_date_display() {
        let err = ChatlensError::invalid_date("not-a-date");
        let display = err.to_string();
        assert!(display.contains("not-a-date"));
        assert!(display.contains("YYYY-MM-DD"));
        assert!(err.is_invalid_date());
    }

    #[test]
    fn test_invalid_format_display() {
        let err = ChatlensError::invalid_format("output", "Unknown file extension: '.xml'");
        let display = err.to_string();
        assert!(display.contains("Invalid output format"));
        assert!(display.contains(".xml"));
        assert!(err.is_invalid_format());
    }

    #[test]
    fn test_utf8_error_display() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err = ChatlensError::utf8("reading transcript", utf8_err);
        let display = err.to_string();
        assert!(display.contains("UTF-8"));
        assert!(display.contains("reading transcript"));
    }

    #[test]
    fn test_from_utf8_error() {
        let utf8_err = String::from_utf8(vec![0xff]).unwrap_err();
        let err: ChatlensError = utf8_err.into();
        assert!(err.to_string().contains("output conversion"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = ChatlensError::from(io_err);
        assert!(err.source().is_some());
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: ChatlensError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_unparsable_line_display() {
        let err = UnparsableLineError::no_matching_format(7);
        assert_eq!(err.line, 7);
        assert!(err.to_string().contains("line 7"));

        let err = UnparsableLineError::invalid_timestamp(3, "31/02/2023, 10:00");
        assert!(err.to_string().contains("31/02/2023, 10:00"));
        assert_eq!(
            err.reason,
            UnparsableReason::InvalidTimestamp("31/02/2023, 10:00".into())
        );
    }

    #[test]
    fn test_error_debug() {
        let err = ChatlensError::invalid_date("bad");
        let debug = format!("{:?}", err);
        assert!(debug.contains("InvalidDate"));
    }
}
