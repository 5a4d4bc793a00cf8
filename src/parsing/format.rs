//! Supported export header formats.
//!
//! WhatsApp exports vary by platform and locale. Every message starts with a
//! header holding the date and time; the header shape differs between the
//! Android and iOS apps:
//!
//! - Android: `15/01/2024, 10:30 - Sender: Message`
//! - iOS: `[1/15/24, 10:30:45 AM] Sender: Message`
//!
//! Dates use `/` or `.` separators, 2- or 4-digit years, and either
//! day-month or month-day order (resolved later, see
//! [`timestamp`](super::timestamp)). Times are 24-hour or 12-hour with an
//! AM/PM marker that may be written `AM`, `pm` or `a.m.` and separated by a
//! regular, no-break or narrow no-break space.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// Date with `/` or `.` separators.
const DATE: &str = r"(\d{1,2}[./]\d{1,2}[./]\d{2,4})";

/// Clock time, then an optional AM/PM marker captured by its first letter.
/// `\s` covers U+00A0 and U+202F, which newer exports put before the marker.
const TIME: &str = r"(\d{1,2}:\d{2}(?::\d{2})?)(?:\s?([AaPp])\.?\s?[Mm]\.?)?";

/// Optional bidi marks some exports put in front of a line.
const BIDI: &str = r"[\u{200E}\u{200F}]?";

static ANDROID_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{BIDI}{DATE},?\s{TIME}\s[-–]\s?")).expect("valid Android header pattern")
});

static IOS_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{BIDI}\[{DATE},?\s{TIME}\]\s?")).expect("valid iOS header pattern")
});

/// Header format of an exported transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Android export
    /// Example: 15/01/2024, 10:30 - Alice: Hello
    Android,
    /// iOS export with bracketed header
    /// Example: [1/15/24, 10:30:45 AM] Alice: Hello
    Ios,
}

/// Fields captured from a message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderMatch<'a> {
    /// Raw date, e.g. `15/01/2024`
    pub date: &'a str,
    /// Raw clock time without marker, e.g. `10:30` or `10:30:45`
    pub clock: &'a str,
    /// `Some('A')` / `Some('P')` for 12-hour times
    pub meridiem: Option<char>,
    /// Byte offset where the header ends and the message text begins
    pub end: usize,
}

impl ExportFormat {
    /// Returns all formats in matching priority order.
    pub fn all() -> &'static [ExportFormat] {
        &[ExportFormat::Android, ExportFormat::Ios]
    }

    /// Returns the compiled header pattern for this format.
    pub fn header(self) -> &'static Regex {
        match self {
            ExportFormat::Android => &ANDROID_HEADER,
            ExportFormat::Ios => &IOS_HEADER,
        }
    }

    /// Matches this format's header at the start of `text`.
    pub fn match_header(self, text: &str) -> Option<HeaderMatch<'_>> {
        self.header()
            .captures(text)
            .and_then(|caps| header_from_captures(&caps))
    }

    /// Returns `true` if `line` starts a new message in any supported format.
    ///
    /// Only a complete header counts. A continuation line that happens to
    /// begin with a date and a time stays inside its message.
    pub fn is_boundary(line: &str) -> bool {
        ExportFormat::all().iter().any(|f| f.header().is_match(line))
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Android => write!(f, "Android"),
            ExportFormat::Ios => write!(f, "iOS"),
        }
    }
}

fn header_from_captures<'a>(caps: &Captures<'a>) -> Option<HeaderMatch<'a>> {
    Some(HeaderMatch {
        date: caps.get(1)?.as_str(),
        clock: caps.get(2)?.as_str(),
        meridiem: caps
            .get(3)
            .and_then(|m| m.as_str().chars().next())
            .map(|c| c.to_ascii_uppercase()),
        end: caps.get(0)?.end(),
    })
}
