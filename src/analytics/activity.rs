//! Weekday, month and hour-of-week activity distributions.

use chrono::Weekday;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::collection::RecordView;
use crate::record::{HourPeriod, month_from_number, weekday_name};

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Messages sent on one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct WeekdayCount {
    /// Full name, e.g. `"Monday"`
    pub day: &'static str,
    pub count: usize,
}

/// Messages sent in one calendar month, all years together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct MonthCount {
    /// Full name, e.g. `"January"`
    pub month: &'static str,
    pub count: usize,
}

/// Seven weekdays, Monday first, zeros included.
pub fn week_activity_map(view: &RecordView<'_>) -> Vec<WeekdayCount> {
    let mut counts = [0usize; 7];
    for record in view.iter() {
        counts[record.calendar().weekday().num_days_from_monday() as usize] += 1;
    }

    WEEK.iter()
        .zip(counts)
        .map(|(&day, count)| WeekdayCount {
            day: weekday_name(day),
            count,
        })
        .collect()
}

/// Twelve months, January first, zeros included.
pub fn month_activity_map(view: &RecordView<'_>) -> Vec<MonthCount> {
    let mut counts = [0usize; 12];
    for record in view.iter() {
        counts[record.calendar().month_num() as usize - 1] += 1;
    }

    (1..=12u32)
        .zip(counts)
        .map(|(month, count)| MonthCount {
            month: month_from_number(month).name(),
            count,
        })
        .collect()
}

/// Message counts by weekday (rows, Monday first) and hour bucket
/// (columns, `0-1` to `23-0`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityHeatmap {
    cells: [[usize; 24]; 7],
}

impl ActivityHeatmap {
    /// Count for one weekday and hour bucket.
    pub fn get(&self, day: Weekday, period: HourPeriod) -> usize {
        self.cells[day.num_days_from_monday() as usize][period.start() as usize]
    }

    /// Rows, Monday first.
    pub fn rows(&self) -> &[[usize; 24]; 7] {
        &self.cells
    }

    pub fn row_total(&self, day: Weekday) -> usize {
        self.cells[day.num_days_from_monday() as usize].iter().sum()
    }

    pub fn column_total(&self, period: HourPeriod) -> usize {
        self.cells.iter().map(|row| row[period.start() as usize]).sum()
    }

    /// Sum of every cell.
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }

    /// Busiest weekday and hour bucket, `None` when the map is empty.
    /// Ties go to the earlier day, then the earlier hour.
    pub fn peak(&self) -> Option<(Weekday, HourPeriod, usize)> {
        let mut best: Option<(Weekday, HourPeriod, usize)> = None;
        for (day, row) in WEEK.iter().zip(&self.cells) {
            for (period, &count) in HourPeriod::all().zip(row) {
                if count > 0 && best.is_none_or(|(_, _, c)| count > c) {
                    best = Some((*day, period, count));
                }
            }
        }
        best
    }
}

impl Serialize for ActivityHeatmap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let days: Vec<&str> = WEEK.iter().map(|&d| weekday_name(d)).collect();
        let periods: Vec<String> = HourPeriod::all().map(|p| p.to_string()).collect();

        let mut s = serializer.serialize_struct("ActivityHeatmap", 3)?;
        s.serialize_field("days", &days)?;
        s.serialize_field("periods", &periods)?;
        s.serialize_field("cells", &self.cells)?;
        s.end()
    }
}

pub fn activity_heatmap(view: &RecordView<'_>) -> ActivityHeatmap {
    let mut heatmap = ActivityHeatmap::default();
    for record in view.iter() {
        let cal = record.calendar();
        heatmap.cells[cal.weekday().num_days_from_monday() as usize][cal.period().start() as usize] += 1;
    }
    heatmap
}
