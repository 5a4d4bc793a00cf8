//! Transcript parsing building blocks.
//!
//! The pipeline is split into small stages that can be used on their own:
//!
//! | Stage | Type | Output |
//! |-------|------|--------|
//! | Split | [`SpanSplitter`] | [`LogicalSpan`] per message |
//! | Match header | [`LineParser`] | [`ParsedSpan`] with raw timestamp |
//! | Resolve time | [`TimestampLayouts`] | `NaiveDateTime` |
//!
//! [`TranscriptParser`](crate::TranscriptParser) wires the stages together
//! with the record builder.

pub mod format;
pub mod line;
pub mod splitter;
pub mod timestamp;

pub use format::{ExportFormat, HeaderMatch};
pub use line::{LineParser, ParsedSpan};
pub use splitter::{LogicalSpan, SpanSplitter};
pub use timestamp::{DateOrder, RawTimestamp, TimestampLayout, TimestampLayouts};
