//! Participant filters and date ranges.
//!
//! | Type | Narrows by | Applied with |
//! |------|------------|--------------|
//! | [`Filter`] | participant (or everyone) | [`RecordCollection::view`](crate::RecordCollection::view) |
//! | [`DateRange`] | inclusive calendar dates | [`RecordCollection::within`](crate::RecordCollection::within) |
//!
//! # Examples
//!
//! ```
//! use chatlens::filter::{DateRange, Filter};
//!
//! # fn main() -> chatlens::Result<()> {
//! let everyone: Filter = "Overall".parse().unwrap();
//! assert_eq!(everyone, Filter::Overall);
//!
//! let alice = Filter::from("Alice");
//! assert_eq!(alice.participant_name(), Some("Alice"));
//!
//! let h1 = DateRange::new()
//!     .with_date_from("2024-01-01")?
//!     .with_date_to("2024-06-30")?;
//! assert!(h1.is_active());
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Participant names match exactly, including case
//! - Both ends of a date range are inclusive whole days

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::ChatlensError;

/// Selector value meaning "every participant".
pub const OVERALL: &str = "Overall";

/// Which participant's messages an analytic looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Filter {
    /// Every participant; system notifications are still excluded.
    #[default]
    Overall,
    /// A single participant, by exact display name.
    Participant(String),
}

impl Filter {
    pub fn participant(name: impl Into<String>) -> Self {
        Filter::Participant(name.into())
    }

    pub fn is_overall(&self) -> bool {
        matches!(self, Filter::Overall)
    }

    /// Selected participant, `None` for [`Filter::Overall`].
    pub fn participant_name(&self) -> Option<&str> {
        match self {
            Filter::Overall => None,
            Filter::Participant(name) => Some(name),
        }
    }
}

/// `"Overall"` always maps to [`Filter::Overall`], even when a participant
/// has that name. Use [`Filter::participant`] to select them.
impl From<&str> for Filter {
    fn from(value: &str) -> Self {
        if value == OVERALL {
            Filter::Overall
        } else {
            Filter::Participant(value.to_string())
        }
    }
}

impl From<String> for Filter {
    fn from(value: String) -> Self {
        if value == OVERALL {
            Filter::Overall
        } else {
            Filter::Participant(value)
        }
    }
}

impl From<Filter> for String {
    fn from(filter: Filter) -> Self {
        filter.to_string()
    }
}

impl FromStr for Filter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Filter::from(s))
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Overall => f.write_str(OVERALL),
            Filter::Participant(name) => f.write_str(name),
        }
    }
}

/// Inclusive calendar date range.
///
/// # Examples
///
/// ```
/// use chatlens::filter::DateRange;
///
/// # fn main() -> chatlens::Result<()> {
/// let range = DateRange::new().with_date_to("2024-12-31")?;
/// assert!(range.before.is_some());
/// assert!(range.after.is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Include only records on or after this moment.
    pub after: Option<NaiveDateTime>,

    /// Include only records on or before this moment.
    pub before: Option<NaiveDateTime>,
}

impl DateRange {
    /// Creates an open range; every record passes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first included day. Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        let date = parse_date(date_str)?;
        self.after = Some(date.and_time(NaiveTime::MIN));
        Ok(self)
    }

    /// Sets the last included day. Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        let date = parse_date(date_str)?;
        // Last second of the day
        let end = date
            .and_hms_opt(23, 59, 59)
            .ok_or_else(|| ChatlensError::invalid_date(date_str))?;
        self.before = Some(end);
        Ok(self)
    }

    /// Returns `true` if either bound is set.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if `ts` falls inside the range.
    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        !self.after.is_some_and(|after| ts < after) && !self.before.is_some_and(|before| ts > before)
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate, ChatlensError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| ChatlensError::invalid_date(date_str))
}
