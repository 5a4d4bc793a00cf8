//! Query facade for presentation layers.
//!
//! [`Insights`] is what a UI or the CLI talks to. Every query takes a
//! [`Filter`], resolves it against the collection and hands the resulting
//! view to the [`AnalyticsEngine`].
//!
//! # Example
//!
//! ```rust
//! use chatlens::filter::Filter;
//! use chatlens::query::Insights;
//!
//! let raw = "\
//! 01/02/2023, 10:00 - Alice: pizza tonight?
//! 01/02/2023, 10:01 - Bob: pizza!
//! ";
//! let collection = chatlens::parse(raw)?;
//! let insights = Insights::new(&collection);
//!
//! assert_eq!(insights.participant_options(), vec!["Overall", "Alice", "Bob"]);
//! assert_eq!(insights.fetch_stats(&Filter::Overall)?.messages, 2);
//! assert_eq!(insights.create_wordcloud(&Filter::Overall)?[0].term, "pizza");
//!
//! let report = insights.report(&Filter::participant("Bob"))?;
//! assert!(report.busy_users.is_none());
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use crate::analytics::{
    ActivityHeatmap, AnalyticsEngine, BusyUsers, ChatStats, DailyCount, MonthCount, MonthlyCount,
    TermCount, WeekdayCount,
};
use crate::collection::RecordCollection;
use crate::config::AnalyticsConfig;
use crate::error::Result;
use crate::filter::Filter;
use crate::report::AnalysisReport;

/// Participant choices for a selector: `"Overall"` then every participant,
/// sorted.
pub fn participant_options(collection: &RecordCollection) -> Vec<String> {
    collection.participant_options()
}

/// Read-only queries over one collection.
#[derive(Debug, Clone)]
pub struct Insights<'c> {
    collection: &'c RecordCollection,
    engine: AnalyticsEngine,
}

impl<'c> Insights<'c> {
    /// Creates a facade with the default analytics configuration.
    pub fn new(collection: &'c RecordCollection) -> Self {
        Self::with_config(collection, AnalyticsConfig::default())
    }

    pub fn with_config(collection: &'c RecordCollection, config: AnalyticsConfig) -> Self {
        Self {
            collection,
            engine: AnalyticsEngine::new(config),
        }
    }

    pub fn collection(&self) -> &'c RecordCollection {
        self.collection
    }

    pub fn engine(&self) -> &AnalyticsEngine {
        &self.engine
    }

    pub fn participant_options(&self) -> Vec<String> {
        participant_options(self.collection)
    }

    pub fn fetch_stats(&self, filter: &Filter) -> Result<ChatStats> {
        let view = self.collection.view(filter)?;
        Ok(self.engine.fetch_stats(&view))
    }

    pub fn monthly_timeline(&self, filter: &Filter) -> Result<Vec<MonthlyCount>> {
        let view = self.collection.view(filter)?;
        Ok(self.engine.monthly_timeline(&view))
    }

    pub fn daily_timeline(&self, filter: &Filter) -> Result<Vec<DailyCount>> {
        let view = self.collection.view(filter)?;
        Ok(self.engine.daily_timeline(&view))
    }

    pub fn week_activity_map(&self, filter: &Filter) -> Result<Vec<WeekdayCount>> {
        let view = self.collection.view(filter)?;
        Ok(self.engine.week_activity_map(&view))
    }

    pub fn month_activity_map(&self, filter: &Filter) -> Result<Vec<MonthCount>> {
        let view = self.collection.view(filter)?;
        Ok(self.engine.month_activity_map(&view))
    }

    pub fn activity_heatmap(&self, filter: &Filter) -> Result<ActivityHeatmap> {
        let view = self.collection.view(filter)?;
        Ok(self.engine.activity_heatmap(&view))
    }

    /// Ranking over every participant; takes no filter.
    pub fn most_busy_users(&self) -> BusyUsers {
        let view = self
            .collection
            .view(&Filter::Overall)
            .unwrap_or_else(|_| crate::collection::RecordView::empty(Filter::Overall));
        self.engine.most_busy_users(&view)
    }

    pub fn create_wordcloud(&self, filter: &Filter) -> Result<Vec<TermCount>> {
        let view = self.collection.view(filter)?;
        Ok(self.engine.create_wordcloud(&view))
    }

    pub fn emoji_helper(&self, filter: &Filter) -> Result<Vec<TermCount>> {
        let view = self.collection.view(filter)?;
        Ok(self.engine.emoji_helper(&view))
    }

    /// Runs every query for `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::FilterNotFound`](crate::ChatlensError::FilterNotFound)
    /// for an unknown participant.
    pub fn report(&self, filter: &Filter) -> Result<AnalysisReport> {
        let view = self.collection.view(filter)?;
        let engine = &self.engine;

        Ok(AnalysisReport {
            filter: filter.clone(),
            stats: engine.fetch_stats(&view),
            monthly_timeline: engine.monthly_timeline(&view),
            daily_timeline: engine.daily_timeline(&view),
            week_activity: engine.week_activity_map(&view),
            month_activity: engine.month_activity_map(&view),
            heatmap: engine.activity_heatmap(&view),
            busy_users: filter.is_overall().then(|| engine.most_busy_users(&view)),
            wordcloud: engine.create_wordcloud(&view),
            emojis: engine.emoji_helper(&view),
            diagnostics: self.collection.diagnostics().clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAT: &str = "\
13/01/2023, 10:00 - Alice: hello 👋
13/01/2023, 10:01 - Bob: hi
13/01/2023, 10:02 - Carol joined using this group's invite link
14/01/2023, 22:30 - Alice: good night
";

    #[test]
    fn test_unknown_participant_is_an_error() {
        let collection = crate::parse(CHAT).unwrap();
        let insights = Insights::new(&collection);
        let err = insights.fetch_stats(&Filter::participant("Carol")).unwrap_err();
        assert!(err.is_filter_not_found());
    }

    #[test]
    fn test_participant_counts_add_up_to_overall() {
        let collection = crate::parse(CHAT).unwrap();
        let insights = Insights::new(&collection);

        let overall = insights.fetch_stats(&Filter::Overall).unwrap().messages;
        let per_participant: usize = collection
            .participants()
            .into_iter()
            .map(|p| insights.fetch_stats(&Filter::participant(p)).unwrap().messages)
            .sum();
        assert_eq!(overall, 3);
        assert_eq!(per_participant, overall);
        assert_eq!(
            insights.most_busy_users().shares.iter().map(|p| p.count).sum::<usize>(),
            overall
        );
    }

    #[test]
    fn test_report_overall() {
        let collection = crate::parse(CHAT).unwrap();
        let report = Insights::new(&collection).report(&Filter::Overall).unwrap();

        assert_eq!(report.stats.messages, 3);
        assert_eq!(report.heatmap.total(), 3);
        assert_eq!(report.week_activity.len(), 7);
        assert_eq!(report.month_activity.len(), 12);
        assert_eq!(report.daily_timeline.len(), 2);
        assert_eq!(report.emojis[0].term, "👋");
        assert!(report.busy_users.is_some());
        assert!(!report.is_empty());
    }

    #[test]
    fn test_report_for_participant() {
        let collection = crate::parse(CHAT).unwrap();
        let report = Insights::new(&collection)
            .report(&Filter::participant("Alice"))
            .unwrap();

        assert_eq!(report.stats.messages, 2);
        assert!(report.busy_users.is_none());
        assert_eq!(report.filter, Filter::participant("Alice"));
    }

    #[test]
    fn test_custom_config_is_used() {
        let collection = crate::parse(CHAT).unwrap();
        let insights = Insights::with_config(
            &collection,
            AnalyticsConfig::new().with_stop_words(["hello"]).with_max_words(1),
        );
        let words = insights.create_wordcloud(&Filter::Overall).unwrap();
        assert_eq!(words.len(), 1);
        assert_ne!(words[0].term, "hello");
    }
}
