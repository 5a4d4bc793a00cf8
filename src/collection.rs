//! The parsed transcript and views over it.
//!
//! A [`RecordCollection`] is built once per transcript and never mutated
//! afterwards. Narrowing it by participant yields a borrowed [`RecordView`];
//! narrowing it by date yields a new collection.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{ChatlensError, Result, UnparsableLineError};
use crate::filter::{DateRange, Filter, OVERALL};
use crate::parsing::{DateOrder, ExportFormat};
use crate::record::MessageRecord;

/// What happened while a transcript was parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseDiagnostics {
    /// Lines that started a new message span
    pub boundaries: usize,
    /// Lines before the first boundary that were discarded
    pub preamble_lines: usize,
    /// Spans that could not be turned into a record
    pub unparsable: usize,
    /// The first few unparsable spans
    pub unparsable_samples: Vec<UnparsableLineError>,
    /// Records with [`Sender::System`](crate::record::Sender::System)
    pub system_notifications: usize,
    /// Records whose timestamp is earlier than the previous record's
    pub out_of_order: usize,
    /// Format of the first recognized header
    pub format: Option<ExportFormat>,
    /// Date order the timestamps were resolved with
    pub date_order: Option<DateOrder>,
}

impl ParseDiagnostics {
    /// Returns `true` if every span became a record.
    pub fn is_clean(&self) -> bool {
        self.unparsable == 0
    }
}

/// Ordered, immutable set of records for one transcript.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordCollection {
    records: Vec<MessageRecord>,
    diagnostics: ParseDiagnostics,
}

impl RecordCollection {
    pub(crate) fn new(records: Vec<MessageRecord>, diagnostics: ParseDiagnostics) -> Self {
        Self {
            records,
            diagnostics,
        }
    }

    /// Number of records, system notifications included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MessageRecord> {
        self.records.iter()
    }

    pub fn diagnostics(&self) -> &ParseDiagnostics {
        &self.diagnostics
    }

    /// Distinct participant names, sorted, `SYSTEM` excluded.
    pub fn participants(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter_map(|r| r.sender().name())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Participant choices for a selector: `"Overall"` followed by
    /// [`participants`](Self::participants).
    ///
    /// A participant literally named `"Overall"` is listed once, as the
    /// overall entry. Select them with [`Filter::participant`].
    pub fn participant_options(&self) -> Vec<String> {
        std::iter::once(OVERALL)
            .chain(self.participants().into_iter().filter(|&name| name != OVERALL))
            .map(str::to_string)
            .collect()
    }

    /// Returns `true` if `name` sent at least one message.
    pub fn has_participant(&self, name: &str) -> bool {
        self.records.iter().any(|r| r.sender().name() == Some(name))
    }

    /// Resolves `filter` into a view of the matching non-system records.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::FilterNotFound`] when a participant filter
    /// names someone who never sent a message.
    pub fn view(&self, filter: &Filter) -> Result<RecordView<'_>> {
        let records = match filter {
            Filter::Overall => self.records.iter().filter(|r| !r.is_system()).collect(),
            Filter::Participant(name) => {
                let selected: Vec<_> = self
                    .records
                    .iter()
                    .filter(|r| r.sender().name() == Some(name.as_str()))
                    .collect();
                if selected.is_empty() {
                    return Err(ChatlensError::filter_not_found(name.as_str()));
                }
                selected
            }
        };

        Ok(RecordView {
            filter: filter.clone(),
            records,
        })
    }

    /// Returns a new collection holding only records inside `range`.
    ///
    /// Sequence numbers are kept, so gaps mark the records that were cut.
    /// Counts derived from records (`system_notifications`, `out_of_order`)
    /// are recomputed for the narrowed set. The rest of the diagnostics
    /// describe the whole parse and are carried over unchanged.
    pub fn within(&self, range: &DateRange) -> RecordCollection {
        let records: Vec<MessageRecord> = self
            .records
            .iter()
            .filter(|r| range.contains(r.timestamp()))
            .cloned()
            .collect();

        let diagnostics = ParseDiagnostics {
            system_notifications: records.iter().filter(|r| r.is_system()).count(),
            out_of_order: records
                .windows(2)
                .filter(|w| w[1].timestamp() < w[0].timestamp())
                .count(),
            ..self.diagnostics.clone()
        };

        RecordCollection::new(records, diagnostics)
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = &'a MessageRecord;
    type IntoIter = std::slice::Iter<'a, MessageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Borrowed, filtered slice of a collection. Never contains system records.
#[derive(Debug, Clone)]
pub struct RecordView<'a> {
    filter: Filter,
    records: Vec<&'a MessageRecord>,
}

impl<'a> RecordView<'a> {
    /// Builds a view directly from records, dropping system notifications.
    pub fn from_records(filter: Filter, records: impl IntoIterator<Item = &'a MessageRecord>) -> Self {
        Self {
            filter,
            records: records.into_iter().filter(|r| !r.is_system()).collect(),
        }
    }

    /// A view with no records.
    pub fn empty(filter: Filter) -> Self {
        Self {
            filter,
            records: Vec::new(),
        }
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a MessageRecord> + '_ {
        self.records.iter().copied()
    }
}
