//! Timestamp layouts and trial parsing.
//!
//! Exports carry no format tag, so a raw `date, time` pair is parsed by
//! trying a fixed, ordered list of layouts and keeping the first one that
//! succeeds. The list covers:
//!
//! | Date            | Time                 |
//! |-----------------|----------------------|
//! | `%d/%m/%y`      | `%I:%M:%S %p`        |
//! | `%d/%m/%Y`      | `%I:%M %p`           |
//! | `%m/%d/%y`      | `%H:%M:%S`           |
//! | `%m/%d/%Y`      | `%H:%M`              |
//!
//! Two-digit years are tried before four-digit years because `%Y` happily
//! reads `24` as the year 24. Whether day-first or month-first dates are
//! tried first is decided once per transcript by [`DateOrder::detect`].

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Order of the day and month fields in a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// `15/01/2024`
    DayFirst,
    /// `1/15/2024`
    MonthFirst,
}

impl DateOrder {
    /// Votes on the date order of a transcript.
    ///
    /// A first field above 12 can only be a day, a second field above 12 can
    /// only be a day too. Returns `None` when no date settles the question
    /// (e.g. every day is 12 or less) or the votes tie.
    pub fn detect<'a>(dates: impl IntoIterator<Item = &'a str>) -> Option<DateOrder> {
        let mut day_first = 0usize;
        let mut month_first = 0usize;

        for date in dates {
            let mut fields = date.split(['/', '.']).map(|f| f.parse::<u32>().ok());
            let (Some(Some(first)), Some(Some(second))) = (fields.next(), fields.next()) else {
                continue;
            };
            if first > 12 && second <= 12 {
                day_first += 1;
            } else if second > 12 && first <= 12 {
                month_first += 1;
            }
        }

        match day_first.cmp(&month_first) {
            std::cmp::Ordering::Greater => Some(DateOrder::DayFirst),
            std::cmp::Ordering::Less => Some(DateOrder::MonthFirst),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Returns the other order.
    pub fn flipped(self) -> DateOrder {
        match self {
            DateOrder::DayFirst => DateOrder::MonthFirst,
            DateOrder::MonthFirst => DateOrder::DayFirst,
        }
    }

    fn date_layouts(self) -> &'static [&'static str] {
        match self {
            DateOrder::DayFirst => &["%d/%m/%y", "%d/%m/%Y"],
            DateOrder::MonthFirst => &["%m/%d/%y", "%m/%d/%Y"],
        }
    }
}

/// Clock layouts, 12-hour before 24-hour. A marker-less time never parses
/// with `%p` and a marked time never parses without it, so the two groups
/// cannot shadow each other.
const TIME_LAYOUTS: &[&str] = &["%I:%M:%S %p", "%I:%M %p", "%H:%M:%S", "%H:%M"];

/// One date layout combined with one time layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampLayout {
    pub date: &'static str,
    pub time: &'static str,
}

/// Raw timestamp fields as captured from a message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTimestamp<'a> {
    pub date: &'a str,
    pub clock: &'a str,
    /// `'A'` or `'P'` for 12-hour times
    pub meridiem: Option<char>,
}

impl RawTimestamp<'_> {
    /// Date with `.` separators rewritten to `/`.
    fn normalized_date(&self) -> String {
        self.date.replace('.', "/")
    }

    /// Time with a canonical ` AM` / ` PM` suffix.
    fn normalized_time(&self) -> String {
        match self.meridiem {
            Some('A') => format!("{} AM", self.clock),
            Some('P') => format!("{} PM", self.clock),
            _ => self.clock.to_string(),
        }
    }
}

impl std::fmt::Display for RawTimestamp<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.date, self.normalized_time())
    }
}

/// Ordered layout list for one transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampLayouts {
    preferred: DateOrder,
}

impl TimestampLayouts {
    /// Layouts preferring `order`, falling back to the other order.
    pub fn new(preferred: DateOrder) -> Self {
        Self { preferred }
    }

    /// Returns the preferred date order.
    pub fn preferred(&self) -> DateOrder {
        self.preferred
    }

    /// Iterates every layout in trial order.
    pub fn layouts(&self) -> impl Iterator<Item = TimestampLayout> + '_ {
        self.date_layouts().flat_map(|date| {
            TIME_LAYOUTS
                .iter()
                .map(move |&time| TimestampLayout { date, time })
        })
    }

    /// Parses `raw` with the first layout that accepts it.
    ///
    /// Date and time are independent, so trying the date layouts and then
    /// the time layouts gives the same result as walking
    /// [`layouts`](Self::layouts) in order, without re-parsing the date for
    /// every clock layout.
    pub fn parse(&self, raw: &RawTimestamp<'_>) -> Option<NaiveDateTime> {
        let date_str = raw.normalized_date();
        let time_str = raw.normalized_time();

        let date = self
            .date_layouts()
            .find_map(|layout| NaiveDate::parse_from_str(&date_str, layout).ok())?;
        let time = TIME_LAYOUTS
            .iter()
            .find_map(|layout| NaiveTime::parse_from_str(&time_str, layout).ok())?;

        Some(date.and_time(time))
    }

    fn date_layouts(&self) -> impl Iterator<Item = &'static str> {
        self.preferred
            .date_layouts()
            .iter()
            .chain(self.preferred.flipped().date_layouts())
            .copied()
    }
}

impl Default for TimestampLayouts {
    fn default() -> Self {
        Self::new(DateOrder::DayFirst)
    }
}
