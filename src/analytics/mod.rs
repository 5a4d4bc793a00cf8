//! Aggregations over parsed records.
//!
//! Every function here is pure: it reads a [`RecordView`] and returns fresh
//! data. Nothing is cached and nothing is written back to the collection.
//! An empty view yields empty or zero-valued results, never an error.
//!
//! | Query | Module | Result |
//! |-------|--------|--------|
//! | `fetch_stats` | [`stats`] | [`ChatStats`] |
//! | `monthly_timeline` | [`timeline`] | `Vec<`[`MonthlyCount`]`>` |
//! | `daily_timeline` | [`timeline`] | `Vec<`[`DailyCount`]`>` |
//! | `week_activity_map` | [`activity`] | `Vec<`[`WeekdayCount`]`>` (7 rows) |
//! | `month_activity_map` | [`activity`] | `Vec<`[`MonthCount`]`>` (12 rows) |
//! | `activity_heatmap` | [`activity`] | [`ActivityHeatmap`] (7 x 24) |
//! | `most_busy_users` | [`users`] | [`BusyUsers`] |
//! | `create_wordcloud` | [`words`] | `Vec<`[`TermCount`]`>` |
//! | `emoji_helper` | [`words`] | `Vec<`[`TermCount`]`>` |

pub mod activity;
pub mod stats;
pub mod timeline;
pub mod users;
pub mod words;

pub use activity::{ActivityHeatmap, MonthCount, WeekdayCount};
pub use stats::ChatStats;
pub use timeline::{DailyCount, MonthlyCount};
pub use users::{BusyUsers, ParticipantCount, ParticipantShare};
pub use words::TermCount;

use crate::collection::RecordView;
use crate::config::AnalyticsConfig;

/// Runs the analytics with one fixed configuration.
///
/// # Example
///
/// ```rust
/// use chatlens::analytics::AnalyticsEngine;
/// use chatlens::filter::Filter;
///
/// let collection = chatlens::parse("01/02/2023, 10:00 - Alice: hello world")?;
/// let view = collection.view(&Filter::Overall)?;
///
/// let engine = AnalyticsEngine::default();
/// assert_eq!(engine.fetch_stats(&view).words, 2);
/// assert_eq!(engine.activity_heatmap(&view).total(), 1);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnalyticsEngine {
    config: AnalyticsConfig,
}

impl AnalyticsEngine {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    pub fn fetch_stats(&self, view: &RecordView<'_>) -> ChatStats {
        stats::fetch_stats(view)
    }

    pub fn monthly_timeline(&self, view: &RecordView<'_>) -> Vec<MonthlyCount> {
        timeline::monthly_timeline(view)
    }

    pub fn daily_timeline(&self, view: &RecordView<'_>) -> Vec<DailyCount> {
        timeline::daily_timeline(view, self.config.fill_date_gaps)
    }

    pub fn week_activity_map(&self, view: &RecordView<'_>) -> Vec<WeekdayCount> {
        activity::week_activity_map(view)
    }

    pub fn month_activity_map(&self, view: &RecordView<'_>) -> Vec<MonthCount> {
        activity::month_activity_map(view)
    }

    pub fn activity_heatmap(&self, view: &RecordView<'_>) -> ActivityHeatmap {
        activity::activity_heatmap(view)
    }

    pub fn most_busy_users(&self, view: &RecordView<'_>) -> BusyUsers {
        users::most_busy_users(view, self.config.busy_users_limit)
    }

    pub fn create_wordcloud(&self, view: &RecordView<'_>) -> Vec<TermCount> {
        words::create_wordcloud(view, &self.config)
    }

    pub fn emoji_helper(&self, view: &RecordView<'_>) -> Vec<TermCount> {
        words::emoji_helper(view)
    }
}
