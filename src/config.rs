//! Configuration types for the parser and the analytics engine.
//!
//! Both structs are plain values handed to their component at construction
//! time, so alternate locales, placeholders or stop-word lists can be
//! swapped in without touching code.
//!
//! - [`ParserConfig`] - media placeholder and date-order fallback
//! - [`AnalyticsConfig`] - stop words and table limits
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{AnalyticsConfig, ParserConfig};
//!
//! let parser = ParserConfig::new().with_media_placeholder("<Médias omis>");
//!
//! let analytics = AnalyticsConfig::new()
//!     .with_extra_stop_words(["lol", "ok"])
//!     .with_max_words(50);
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use stop_words::{LANGUAGE, get};

use crate::parsing::DateOrder;

/// Placeholder WhatsApp writes instead of an attachment when exporting
/// "without media".
pub const DEFAULT_MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ParserConfig;
/// use chatlens::parsing::DateOrder;
///
/// let config = ParserConfig::new()
///     .with_default_date_order(DateOrder::MonthFirst);
/// assert_eq!(config.media_placeholder, "<Media omitted>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Body text that marks an omitted attachment (default: `<Media omitted>`)
    pub media_placeholder: String,

    /// Date order tried first when the transcript gives no hint
    /// (default: day-first)
    pub default_date_order: DateOrder,

    /// How many unparsable spans to keep as samples in the diagnostics
    /// (default: 16)
    pub max_unparsable_samples: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            media_placeholder: DEFAULT_MEDIA_PLACEHOLDER.to_string(),
            default_date_order: DateOrder::DayFirst,
            max_unparsable_samples: 16,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the media placeholder.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Sets the fallback date order.
    #[must_use]
    pub fn with_default_date_order(mut self, order: DateOrder) -> Self {
        self.default_date_order = order;
        self
    }

    /// Sets how many unparsable spans are kept as samples.
    #[must_use]
    pub fn with_max_unparsable_samples(mut self, max: usize) -> Self {
        self.max_unparsable_samples = max;
        self
    }
}

/// Configuration for the analytics engine.
///
/// # Example
///
/// ```rust
/// use chatlens::config::AnalyticsConfig;
///
/// let config = AnalyticsConfig::new().with_stop_words(["the", "a"]);
/// assert!(config.is_stop_word("the"));
/// assert!(!config.is_stop_word("pizza"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Lower-case tokens excluded from the word table
    /// (default: English list from the `stop-words` crate)
    pub stop_words: BTreeSet<String>,

    /// Maximum number of rows in the word table (default: 200)
    pub max_words: usize,

    /// Number of participants in the busiest-users ranking (default: 5)
    pub busy_users_limit: usize,

    /// Insert zero-count days between the first and last active day
    /// (default: true)
    pub fill_date_gaps: bool,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            stop_words: default_stop_words(),
            max_words: 200,
            busy_users_limit: 5,
            fill_date_gaps: true,
        }
    }
}

impl AnalyticsConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stop-word list.
    #[must_use]
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words = normalize_words(words);
        self
    }

    /// Adds words to the current stop-word list.
    #[must_use]
    pub fn with_extra_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words.extend(normalize_words(words));
        self
    }

    /// Sets the maximum number of rows in the word table.
    #[must_use]
    pub fn with_max_words(mut self, max: usize) -> Self {
        self.max_words = max;
        self
    }

    /// Sets the number of participants in the busiest-users ranking.
    #[must_use]
    pub fn with_busy_users_limit(mut self, limit: usize) -> Self {
        self.busy_users_limit = limit;
        self
    }

    /// Enables or disables gap filling in the daily timeline.
    #[must_use]
    pub fn with_fill_date_gaps(mut self, fill: bool) -> Self {
        self.fill_date_gaps = fill;
        self
    }

    /// Returns `true` if `token` (already lower-cased) is a stop word.
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }
}

/// Parses a stop-word file: one word per line, blank lines and `#` comments
/// ignored.
///
/// # Example
///
/// ```rust
/// use chatlens::config::stop_words_from_str;
///
/// let words = stop_words_from_str("# hinglish\nhai\n\nKya\n");
/// assert_eq!(words, vec!["hai".to_string(), "kya".to_string()]);
/// ```
pub fn stop_words_from_str(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

fn default_stop_words() -> BTreeSet<String> {
    get(LANGUAGE::English)
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn normalize_words<I, S>(words: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_config_default() {
        let config = ParserConfig::default();
        assert_eq!(config.media_placeholder, DEFAULT_MEDIA_PLACEHOLDER);
        assert_eq!(config.default_date_order, DateOrder::DayFirst);
        assert_eq!(config.max_unparsable_samples, 16);
    }

    #[test]
    fn test_parser_config_builder() {
        let config = ParserConfig::new()
            .with_media_placeholder("<attached>")
            .with_default_date_order(DateOrder::MonthFirst)
            .with_max_unparsable_samples(0);

        assert_eq!(config.media_placeholder, "<attached>");
        assert_eq!(config.default_date_order, DateOrder::MonthFirst);
        assert_eq!(config.max_unparsable_samples, 0);
    }

    #[test]
    fn test_analytics_config_default() {
        let config = AnalyticsConfig::default();
        assert!(config.is_stop_word("the"));
        assert!(config.is_stop_word("and"));
        assert_eq!(config.max_words, 200);
        assert_eq!(config.busy_users_limit, 5);
        assert!(config.fill_date_gaps);
    }

    #[test]
    fn test_with_stop_words_replaces_and_lowercases() {
        let config = AnalyticsConfig::new().with_stop_words(["Hai", " kya ", ""]);
        assert_eq!(config.stop_words.len(), 2);
        assert!(config.is_stop_word("hai"));
        assert!(config.is_stop_word("kya"));
        assert!(!config.is_stop_word("the"));
    }

    #[test]
    fn test_with_extra_stop_words_extends() {
        let config = AnalyticsConfig::new().with_extra_stop_words(["LOL"]);
        assert!(config.is_stop_word("lol"));
        assert!(config.is_stop_word("the"));
    }

    #[test]
    fn test_stop_words_from_str() {
        let words = stop_words_from_str("a\n  \n# comment\nB\n");
        assert_eq!(words, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = AnalyticsConfig::new().with_stop_words(["x"]).with_max_words(3);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AnalyticsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
