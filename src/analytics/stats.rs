//! Headline counts.

use serde::Serialize;

use crate::collection::RecordView;

/// Top-line numbers for a filtered set of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChatStats {
    /// Messages in the working set
    pub messages: usize,
    /// Whitespace-delimited tokens over non-media bodies
    pub words: usize,
    /// Messages whose body is the media placeholder
    pub media: usize,
    /// URL occurrences
    pub links: usize,
}

pub fn fetch_stats(view: &RecordView<'_>) -> ChatStats {
    view.iter().fold(ChatStats::default(), |mut stats, record| {
        stats.messages += 1;
        if record.has_media() {
            stats.media += 1;
        } else {
            stats.words += record.word_count();
        }
        stats.links += record.urls().count();
        stats
    })
}
