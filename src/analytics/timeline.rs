//! Monthly and daily message timelines.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::collection::RecordView;
use crate::record::month_from_number;

/// Messages in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    pub year: i32,
    /// 1-12
    pub month: u32,
    /// Axis label, e.g. `"Jan-2023"`
    pub label: String,
    pub count: usize,
}

/// Messages on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Counts per `(year, month)`, oldest first. Months without messages are
/// left out.
pub fn monthly_timeline(view: &RecordView<'_>) -> Vec<MonthlyCount> {
    let mut months: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for record in view.iter() {
        let cal = record.calendar();
        *months.entry((cal.year(), cal.month_num())).or_default() += 1;
    }

    months
        .into_iter()
        .map(|((year, month), count)| MonthlyCount {
            year,
            month,
            label: format!("{}-{}", &month_from_number(month).name()[..3], year),
            count,
        })
        .collect()
}

/// Counts per day, oldest first.
///
/// With `fill_gaps`, every day strictly between the first and last active
/// day is present, with a zero count when nothing was sent.
pub fn daily_timeline(view: &RecordView<'_>, fill_gaps: bool) -> Vec<DailyCount> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in view.iter() {
        *days.entry(record.calendar().only_date()).or_default() += 1;
    }

    let (Some(&first), Some(&last)) = (days.keys().next(), days.keys().next_back()) else {
        return Vec::new();
    };

    if !fill_gaps {
        return days
            .into_iter()
            .map(|(date, count)| DailyCount { date, count })
            .collect();
    }

    first
        .iter_days()
        .take_while(|date| *date <= last)
        .map(|date| DailyCount {
            date,
            count: days.get(&date).copied().unwrap_or(0),
        })
        .collect()
}
