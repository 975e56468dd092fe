//! Token-overlap ranking of dataset locations against a free-text address.
//!
//! The query is split on commas; each non-empty trimmed token that occurs as a
//! substring of a dataset location adds one point to that location.

use crate::dataset::LocationDataset;
use serde::Serialize;

/// Maximum number of candidates returned by [`rank`].
pub const MAX_CANDIDATES: usize = 10;

/// A dataset location that shares at least one token with the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchCandidate {
    pub location: String,
    /// One film shot at `location`. Which one is unspecified.
    pub sample_film: String,
    pub score: usize,
}

/// Split a query on commas into trimmed, non-empty tokens.
pub fn tokenize(query: &str) -> Vec<&str> {
    query
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Number of `tokens` that occur in `location`.
pub fn overlap_score(tokens: &[&str], location: &str) -> usize {
    tokens.iter().filter(|t| location.contains(**t)).count()
}

/// Top [`MAX_CANDIDATES`] locations by token overlap with `query`.
pub fn rank(dataset: &LocationDataset, query: &str) -> Vec<MatchCandidate> {
    rank_with_limit(dataset, query, MAX_CANDIDATES)
}

/// Like [`rank`] but with an explicit limit.
pub fn rank_with_limit(dataset: &LocationDataset, query: &str, limit: usize) -> Vec<MatchCandidate> {
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<MatchCandidate> = dataset
        .iter()
        .filter_map(|(location, films)| {
            let score = overlap_score(&tokens, location);
            if score == 0 {
                return None;
            }
            let sample_film = films.iter().next()?.clone();
            Some(MatchCandidate {
                location: location.clone(),
                sample_film,
                score,
            })
        })
        .collect();

    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates.truncate(limit);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paris_berlin() -> LocationDataset {
        LocationDataset::from_entries(
            2000,
            [
                ("Paris, France", "A"),
                ("Paris, France", "B"),
                ("Berlin, Germany", "C"),
            ],
        )
    }

    #[test]
    fn test_tokenize_trims_and_drops_empty() {
        assert_eq!(tokenize(" Lviv , Lviv Oblast,, Ukraine, "), vec!["Lviv", "Lviv Oblast", "Ukraine"]);
        assert!(tokenize(" , ,").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_overlap_counts_membership_not_occurrences() {
        assert_eq!(overlap_score(&["Paris"], "Paris, Paris, France"), 1);
        assert_eq!(overlap_score(&["Paris", "France"], "Paris, France"), 2);
        assert_eq!(overlap_score(&["paris"], "Paris, France"), 0);
    }

    #[test]
    fn test_paris_scenario() {
        let ranked = rank(&paris_berlin(), "Paris, somewhere");
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].location, "Paris, France");
        assert_eq!(ranked[0].score, 1);
        assert!(["A", "B"].contains(&ranked[0].sample_film.as_str()));
    }

    #[test]
    fn test_zero_overlap_excluded() {
        assert!(rank(&paris_berlin(), "Tokyo, Japan").is_empty());
    }

    #[test]
    fn test_empty_tokens_do_not_match_everything() {
        assert!(rank(&paris_berlin(), ",,").is_empty());
        let ranked = rank(&paris_berlin(), "Berlin,,");
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score, 1);
    }

    #[test]
    fn test_sorted_by_score_descending() {
        let ds = LocationDataset::from_entries(
            2010,
            [
                ("Kyiv", "K"),
                ("Lviv, Ukraine", "L1"),
                ("Rynok Square, Lviv, Ukraine", "L2"),
                ("Odesa, Ukraine", "O"),
            ],
        );
        let ranked = rank(&ds, "Rynok Square, Lviv, Lviv Oblast, Ukraine");
        let scores: Vec<usize> = ranked.iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![3, 2, 1]);
        assert_eq!(ranked[0].location, "Rynok Square, Lviv, Ukraine");
        assert_eq!(ranked[1].location, "Lviv, Ukraine");
        assert_eq!(ranked[2].location, "Odesa, Ukraine");
    }

    #[test]
    fn test_at_most_ten_candidates() {
        let entries: Vec<(String, String)> = (0..25)
            .map(|i| (format!("Studio {}, California, USA", i), format!("Film {}", i)))
            .collect();
        let ds = LocationDataset::from_entries(1999, entries);

        let ranked = rank(&ds, "Los Angeles, California, USA");
        assert_eq!(ranked.len(), MAX_CANDIDATES);
        assert!(ranked.iter().all(|c| c.score >= 1));
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_best_match_survives_truncation() {
        let mut entries: Vec<(String, String)> = (0..12)
            .map(|i| (format!("Studio {}, Hollywood", i), format!("Film {}", i)))
            .collect();
        entries.push(("Zzz, California, USA".into(), "Late Film".into()));
        let ds = LocationDataset::from_entries(1999, entries);

        let ranked = rank(&ds, "Hollywood, California, USA");
        assert_eq!(ranked.len(), MAX_CANDIDATES);
        assert_eq!(ranked[0].location, "Zzz, California, USA");
        assert_eq!(ranked[0].score, 2);
        assert!(ranked[1..].iter().all(|c| c.score == 1));
    }

    #[test]
    fn test_scores_are_deterministic() {
        let ds = paris_berlin();
        let query = "Berlin, Germany, Paris";
        let mut first: Vec<(String, usize)> = rank(&ds, query).into_iter().map(|c| (c.location, c.score)).collect();
        let mut second: Vec<(String, usize)> = rank(&ds, query).into_iter().map(|c| (c.location, c.score)).collect();
        first.sort();
        second.sort();
        assert_eq!(first, second);
        assert_eq!(first, vec![("Berlin, Germany".to_string(), 2), ("Paris, France".to_string(), 1)]);
    }

    #[test]
    fn test_custom_limit() {
        let ranked = rank_with_limit(&paris_berlin(), "Paris, Berlin", 1);
        assert_eq!(ranked.len(), 1);
    }
}
