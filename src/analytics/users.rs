//! Busiest-participant ranking and message shares.

use std::collections::HashMap;

use serde::Serialize;

use crate::collection::RecordView;

/// A participant with their message count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantCount {
    pub name: String,
    pub count: usize,
}

/// A participant's message count and share of all messages, in percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantShare {
    pub name: String,
    pub count: usize,
    pub percent: f64,
}

/// Ranking and share table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BusyUsers {
    /// Most active participants, truncated to the configured limit
    pub ranking: Vec<ParticipantCount>,
    /// Every participant, same order as `ranking`. Counts add up to the
    /// number of messages in the view.
    pub shares: Vec<ParticipantShare>,
}

/// Ranks participants by message count.
///
/// Ties go to whoever wrote first. Percentages are not rounded and add up
/// to 100 over all participants.
pub fn most_busy_users(view: &RecordView<'_>, limit: usize) -> BusyUsers {
    // name -> (count, first sequence)
    let mut tally: HashMap<&str, (usize, usize)> = HashMap::new();
    for record in view.iter() {
        let Some(name) = record.sender().name() else {
            continue;
        };
        tally
            .entry(name)
            .and_modify(|(count, _)| *count += 1)
            .or_insert((1, record.sequence()));
    }

    let mut ranked: Vec<(&str, usize, usize)> = tally
        .into_iter()
        .map(|(name, (count, first))| (name, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    let total: usize = ranked.iter().map(|(_, count, _)| count).sum();

    let shares = ranked
        .iter()
        .map(|&(name, count, _)| ParticipantShare {
            name: name.to_string(),
            count,
            percent: count as f64 / total as f64 * 100.0,
        })
        .collect();

    let ranking = ranked
        .into_iter()
        .take(limit)
        .map(|(name, count, _)| ParticipantCount {
            name: name.to_string(),
            count,
        })
        .collect();

    BusyUsers { ranking, shares }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Filter;

    const CHAT: &str = "\
13/01/2023, 10:00 - Bob: one
13/01/2023, 10:01 - Alice: two
13/01/2023, 10:02 - Alice: three
13/01/2023, 10:03 - Carol: four
13/01/2023, 10:04 - Bob: five
13/01/2023, 10:05 - Dave joined using this group's invite link
13/01/2023, 10:06 - Dave: six
";

    #[test]
    fn test_ranking_order_and_ties() {
        let collection = crate::parse(CHAT).unwrap();
        let busy = most_busy_users(&collection.view(&Filter::Overall).unwrap(), 5);

        let names: Vec<_> = busy.ranking.iter().map(|p| p.name.as_str()).collect();
        // Bob and Alice tie on 2; Bob wrote first.
        assert_eq!(names, vec!["Bob", "Alice", "Carol", "Dave"]);
        assert_eq!(busy.ranking[0].count, 2);
    }

    #[test]
    fn test_ranking_is_truncated_but_shares_are_not() {
        let collection = crate::parse(CHAT).unwrap();
        let busy = most_busy_users(&collection.view(&Filter::Overall).unwrap(), 2);

        assert_eq!(busy.ranking.len(), 2);
        assert_eq!(busy.shares.len(), 4);
    }

    #[test]
    fn test_counts_sum_to_overall() {
        let collection = crate::parse(CHAT).unwrap();
        let view = collection.view(&Filter::Overall).unwrap();
        let busy = most_busy_users(&view, usize::MAX);

        let sum: usize = busy.ranking.iter().map(|p| p.count).sum();
        assert_eq!(sum, view.len());
    }

    #[test]
    fn test_share_counts_sum_to_overall_past_the_limit() {
        let mut raw = String::new();
        for name in ["A", "B", "C", "D", "E", "F"] {
            raw.push_str(&format!("13/01/2023, 10:00 - {name}: hi\n"));
        }
        let collection = crate::parse(&raw).unwrap();
        let view = collection.view(&Filter::Overall).unwrap();
        let busy = most_busy_users(&view, 5);

        assert_eq!(busy.ranking.len(), 5);
        assert_eq!(busy.shares.len(), 6);
        let sum: usize = busy.shares.iter().map(|s| s.count).sum();
        assert_eq!(sum, view.len());
        assert_eq!(sum, 6);
    }

    #[test]
    fn test_percentages_sum_to_100() {
        let collection = crate::parse(CHAT).unwrap();
        let busy = most_busy_users(&collection.view(&Filter::Overall).unwrap(), 5);

        let sum: f64 = busy.shares.iter().map(|s| s.percent).sum();
        assert!((sum - 100.0).abs() < 0.1);
        assert!((busy.shares[0].percent - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_view() {
        let busy = most_busy_users(&RecordView::empty(Filter::Overall), 5);
        assert_eq!(busy, BusyUsers::default());
    }
}
