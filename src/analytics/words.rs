//! Word and emoji frequency tables.
//!
//! Both tables are sorted by descending count; equal counts keep the order
//! in which the terms first appeared, so output is deterministic.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::collection::RecordView;
use crate::config::AnalyticsConfig;

static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{Extended_Pictographic}\p{Emoji_Presentation}]").expect("valid emoji pattern")
});

/// A term and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

/// Counts terms, remembering first-appearance order for tie-breaking.
#[derive(Debug, Default)]
struct Tally {
    index: HashMap<String, usize>,
    terms: Vec<TermCount>,
}

impl Tally {
    fn add(&mut self, term: &str) {
        if let Some(&i) = self.index.get(term) {
            self.terms[i].count += 1;
        } else {
            self.index.insert(term.to_string(), self.terms.len());
            self.terms.push(TermCount {
                term: term.to_string(),
                count: 1,
            });
        }
    }

    fn into_ranked(self, limit: usize) -> Vec<TermCount> {
        let mut terms = self.terms;
        // Stable sort keeps first-appearance order among equal counts.
        terms.sort_by(|a, b| b.count.cmp(&a.count));
        terms.truncate(limit);
        terms
    }
}

/// Lower-cases a token and strips punctuation from both ends.
pub fn normalize_token(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

/// Word frequency table.
///
/// Media placeholders and stop words are skipped. At most
/// `config.max_words` rows are returned.
pub fn create_wordcloud(view: &RecordView<'_>, config: &AnalyticsConfig) -> Vec<TermCount> {
    let mut tally = Tally::default();
    for record in view.iter().filter(|r| !r.has_media()) {
        for token in record.body().split_whitespace() {
            let word = normalize_token(token);
            if !word.is_empty() && !config.is_stop_word(&word) {
                tally.add(&word);
            }
        }
    }
    tally.into_ranked(config.max_words)
}

/// Emoji frequency table, one row per emoji code point.
pub fn emoji_helper(view: &RecordView<'_>) -> Vec<TermCount> {
    let mut tally = Tally::default();
    for record in view.iter() {
        for m in EMOJI.find_iter(record.body()) {
            tally.add(m.as_str());
        }
    }
    tally.into_ranked(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Filter;

    const CHAT: &str = "\
13/01/2023, 10:00 - Alice: Pizza tonight? 🍕🍕
13/01/2023, 10:01 - Bob: PIZZA! yes 😂
13/01/2023, 10:02 - Bob: <Media omitted>
13/01/2023, 10:03 - Alice: the movie, then pizza 😂🍕
13/01/2023, 10:04 - Carol changed the subject to \"Pizza club 🍕\"
";

    fn term(term: &str, count: usize) -> TermCount {
        TermCount {
            term: term.to_string(),
            count,
        }
    }

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("PIZZA!"), "pizza");
        assert_eq!(normalize_token("\"hello,\""), "hello");
        assert_eq!(normalize_token("don't"), "don't");
        assert_eq!(normalize_token("..."), "");
        assert_eq!(normalize_token("Ünïcode"), "ünïcode");
    }

    #[test]
    fn test_wordcloud_counts_and_order() {
        let collection = crate::parse(CHAT).unwrap();
        let config = AnalyticsConfig::new().with_stop_words(["the", "then"]);
        let words = create_wordcloud(&collection.view(&Filter::Overall).unwrap(), &config);

        assert_eq!(
            words,
            vec![
                term("pizza", 3),
                term("tonight", 1),
                term("yes", 1),
                term("movie", 1),
            ]
        );
    }

    #[test]
    fn test_wordcloud_limit() {
        let collection = crate::parse(CHAT).unwrap();
        let config = AnalyticsConfig::new()
            .with_stop_words(Vec::<String>::new())
            .with_max_words(2);
        let words = create_wordcloud(&collection.view(&Filter::Overall).unwrap(), &config);
        assert_eq!(words, vec![term("pizza", 3), term("tonight", 1)]);
    }

    #[test]
    fn test_wordcloud_skips_media_and_system() {
        let collection = crate::parse(CHAT).unwrap();
        let config = AnalyticsConfig::new().with_stop_words(Vec::<String>::new());
        let words = create_wordcloud(&collection.view(&Filter::Overall).unwrap(), &config);
        assert!(words.iter().all(|w| w.term != "media" && w.term != "omitted"));
        assert!(words.iter().all(|w| w.term != "club"));
    }

    #[test]
    fn test_emoji_table() {
        let collection = crate::parse(CHAT).unwrap();
        let emojis = emoji_helper(&collection.view(&Filter::Overall).unwrap());
        assert_eq!(emojis, vec![term("🍕", 3), term("😂", 2)]);
    }

    #[test]
    fn test_emoji_ties_keep_first_appearance() {
        let collection = crate::parse("13/01/2023, 10:00 - Alice: 😂🎉").unwrap();
        let emojis = emoji_helper(&collection.view(&Filter::Overall).unwrap());
        assert_eq!(emojis, vec![term("😂", 1), term("🎉", 1)]);
    }

    #[test]
    fn test_digits_are_not_emoji() {
        let collection = crate::parse("13/01/2023, 10:00 - Alice: 1 2 3 # *").unwrap();
        assert!(emoji_helper(&collection.view(&Filter::Overall).unwrap()).is_empty());
    }

    #[test]
    fn test_empty_view() {
        let view = RecordView::empty(Filter::Overall);
        assert!(create_wordcloud(&view, &AnalyticsConfig::default()).is_empty());
        assert!(emoji_helper(&view).is_empty());
    }
}
