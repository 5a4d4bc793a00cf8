//! Full analysis report for one filter.

use serde::Serialize;

use crate::analytics::{
    ActivityHeatmap, BusyUsers, ChatStats, DailyCount, MonthCount, MonthlyCount, TermCount,
    WeekdayCount,
};
use crate::collection::ParseDiagnostics;
use crate::filter::Filter;

/// Every table the analytics produce, gathered for rendering or export.
///
/// Built by [`Insights::report`](crate::query::Insights::report).
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub filter: Filter,
    pub stats: ChatStats,
    pub monthly_timeline: Vec<MonthlyCount>,
    pub daily_timeline: Vec<DailyCount>,
    pub week_activity: Vec<WeekdayCount>,
    pub month_activity: Vec<MonthCount>,
    pub heatmap: ActivityHeatmap,
    /// Only present for [`Filter::Overall`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busy_users: Option<BusyUsers>,
    pub wordcloud: Vec<TermCount>,
    pub emojis: Vec<TermCount>,
    pub diagnostics: ParseDiagnostics,
}

impl AnalysisReport {
    /// Returns `true` if the filter selected no messages.
    pub fn is_empty(&self) -> bool {
        self.stats.messages == 0
    }
}
