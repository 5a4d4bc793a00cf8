//! Structured message records.
//!
//! [`MessageRecord`] is the atomic unit every analytic works on. Records are
//! immutable once built: fields are private and exposed through accessors,
//! and everything the analytics need per record (calendar fields, media flag)
//! is derived up front by the record builder.
//!
//! # Example
//!
//! ```
//! use chatlens::record::{MessageRecord, Sender};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 2, 1)
//!     .unwrap()
//!     .and_hms_opt(13, 45, 0)
//!     .unwrap();
//! let record = MessageRecord::new(0, ts, Sender::participant("Alice"), "see https://example.com", false);
//!
//! assert_eq!(record.sender().name(), Some("Alice"));
//! assert_eq!(record.calendar().period().to_string(), "13-14");
//! assert_eq!(record.calendar().day_name(), "Wednesday");
//! assert_eq!(record.urls().count(), 1);
//! ```

use std::fmt;
use std::sync::LazyLock;

use chrono::{Datelike, Month, NaiveDate, NaiveDateTime, Timelike, Weekday};
use regex::Regex;
use serde::{Serialize, Serializer};

/// Display name of the system sender.
pub const SYSTEM_SENDER: &str = "SYSTEM";

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+|www\.\S+").expect("valid URL pattern"));

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Author of a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sender {
    /// A human participant, by display name.
    Participant(String),
    /// Notifications with no human sender: joins, leaves, subject changes.
    System,
}

impl Sender {
    pub fn participant(name: impl Into<String>) -> Self {
        Sender::Participant(name.into())
    }

    /// Participant name, `None` for [`Sender::System`].
    pub fn name(&self) -> Option<&str> {
        match self {
            Sender::Participant(name) => Some(name),
            Sender::System => None,
        }
    }

    pub fn is_system(&self) -> bool {
        matches!(self, Sender::System)
    }

    /// Name as shown to users; `SYSTEM` for notifications.
    pub fn as_str(&self) -> &str {
        self.name().unwrap_or(SYSTEM_SENDER)
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Sender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One-hour bucket of the day, rendered `"13-14"`.
///
/// The last bucket wraps: hour 23 is `"23-0"`, hour 0 is `"0-1"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HourPeriod(u8);

impl HourPeriod {
    /// Bucket for `hour`, taken modulo 24.
    pub fn new(hour: u32) -> Self {
        HourPeriod((hour % 24) as u8)
    }

    /// Iterates the 24 buckets from `"0-1"` to `"23-0"`.
    pub fn all() -> impl Iterator<Item = HourPeriod> {
        (0..24).map(HourPeriod)
    }

    pub fn start(self) -> u32 {
        u32::from(self.0)
    }

    pub fn end(self) -> u32 {
        (u32::from(self.0) + 1) % 24
    }
}

impl fmt::Display for HourPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start(), self.end())
    }
}

impl Serialize for HourPeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Calendar fields derived from a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Calendar {
    date: NaiveDate,
    hour: u32,
    minute: u32,
}

impl Calendar {
    pub fn from_timestamp(ts: NaiveDateTime) -> Self {
        Self {
            date: ts.date(),
            hour: ts.hour(),
            minute: ts.minute(),
        }
    }

    /// Date without time of day.
    pub fn only_date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Month number, 1-12.
    pub fn month_num(&self) -> u32 {
        self.date.month()
    }

    pub fn month(&self) -> Month {
        month_from_number(self.date.month())
    }

    /// Full month name, e.g. `"January"`.
    pub fn month_name(&self) -> &'static str {
        self.month().name()
    }

    /// Three-letter month name, e.g. `"Jan"`.
    pub fn month_short(&self) -> &'static str {
        &self.month_name()[..3]
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Full weekday name, e.g. `"Monday"`.
    pub fn day_name(&self) -> &'static str {
        weekday_name(self.weekday())
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn period(&self) -> HourPeriod {
        HourPeriod::new(self.hour)
    }
}

impl Serialize for Calendar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("Calendar", 8)?;
        s.serialize_field("only_date", &self.date)?;
        s.serialize_field("year", &self.year())?;
        s.serialize_field("month_num", &self.month_num())?;
        s.serialize_field("month", self.month_name())?;
        s.serialize_field("day", &self.day())?;
        s.serialize_field("day_name", self.day_name())?;
        s.serialize_field("hour", &self.hour)?;
        s.serialize_field("minute", &self.minute)?;
        s.end()
    }
}

/// Full English name of a weekday.
pub fn weekday_name(day: Weekday) -> &'static str {
    DAY_NAMES[day.num_days_from_monday() as usize]
}

/// Month for a 1-based month number; out-of-range numbers wrap into 1-12.
pub(crate) fn month_from_number(month: u32) -> Month {
    let index = (month.saturating_sub(1) % 12) as u8;
    Month::try_from(index + 1).unwrap_or(Month::January)
}

/// A single parsed chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageRecord {
    sequence: usize,
    timestamp: NaiveDateTime,
    sender: Sender,
    body: String,
    has_media: bool,
    calendar: Calendar,
}

impl MessageRecord {
    /// Creates a record and derives its calendar fields.
    pub fn new(
        sequence: usize,
        timestamp: NaiveDateTime,
        sender: Sender,
        body: impl Into<String>,
        has_media: bool,
    ) -> Self {
        Self {
            sequence,
            timestamp,
            sender,
            body: body.into(),
            has_media,
            calendar: Calendar::from_timestamp(timestamp),
        }
    }

    /// Position in transcript order, starting at 0.
    pub fn sequence(&self) -> usize {
        self.sequence
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn sender(&self) -> &Sender {
        &self.sender
    }

    /// Message text; may contain line breaks.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// `true` when the body is the omitted-media placeholder.
    pub fn has_media(&self) -> bool {
        self.has_media
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    pub fn is_system(&self) -> bool {
        self.sender.is_system()
    }

    /// URLs found in the body.
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        URL.find_iter(&self.body).map(|m| m.as_str())
    }

    /// Number of whitespace-delimited tokens in the body.
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }
}
