//! Ranked best-match search over a candidate list
//!
//! Candidates are scored independently, filtered by a minimum score, sorted
//! best first and truncated. The sort is stable, so equal scores keep the
//! order the candidates were given in.

use crate::algorithms::normalize::normalize;
use crate::algorithms::Similarity;
use crate::config::MatcherConfig;
use crate::matcher::similarity_of_prepared;
use crate::types::Algorithm;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Candidate count at which scoring switches to rayon.
///
/// Below this, thread-pool coordination costs more than the comparisons.
pub const PARALLEL_THRESHOLD: usize = 100;

/// A ranked candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The candidate as given (not normalized)
    pub text: String,
    /// Similarity score (0.0-1.0)
    pub score: f64,
    /// Position of the candidate in the input slice
    pub index: usize,
}

/// The best `max_results` candidates for `query`, highest score first.
///
/// Scores come from [`crate::get_similarity`] with normalization on.
/// Candidates below `min_similarity` are dropped and ties keep input order.
///
/// # Examples
/// ```
/// use fuzzymatch::{find_best_matches, Algorithm};
/// let fruit = ["apple", "apply", "maple", "orange"];
/// let best = find_best_matches("aple", &fruit, 2, 0.5, Algorithm::JaroWinkler);
/// assert_eq!(best, vec!["apple", "maple"]);
/// ```
#[must_use]
pub fn find_best_matches<S: AsRef<str> + Sync>(
    query: &str,
    candidates: &[S],
    max_results: usize,
    min_similarity: f64,
    algorithm: Algorithm,
) -> Vec<String> {
    find_best_matches_scored(query, candidates, max_results, min_similarity, algorithm)
        .into_iter()
        .map(|m| m.text)
        .collect()
}

/// [`find_best_matches`] keeping the score and input index of each match.
#[must_use]
pub fn find_best_matches_scored<S: AsRef<str> + Sync>(
    query: &str,
    candidates: &[S],
    max_results: usize,
    min_similarity: f64,
    algorithm: Algorithm,
) -> Vec<MatchResult> {
    let config = MatcherConfig::default();
    let prepared_query = normalize(query);
    rank_candidates(candidates, max_results, min_similarity, |candidate| {
        similarity_of_prepared(&prepared_query, &normalize(candidate), algorithm, &config)
    })
}

/// Rank candidates with any [`Similarity`] metric.
///
/// Query and candidates are normalized before scoring.
///
/// # Examples
/// ```
/// use fuzzymatch::find_best_matches_with;
/// use fuzzymatch::algorithms::Levenshtein;
///
/// let best = find_best_matches_with("kitten", &["sitting", "mitten", "kitchen"], &Levenshtein::new(), 1, 0.0);
/// assert_eq!(best[0].text, "mitten");
/// ```
#[must_use]
pub fn find_best_matches_with<S: AsRef<str> + Sync>(
    query: &str,
    candidates: &[S],
    metric: &dyn Similarity,
    max_results: usize,
    min_similarity: f64,
) -> Vec<MatchResult> {
    let prepared_query = normalize(query);
    tracing::trace!(metric = metric.name(), "ranking with custom metric");
    rank_candidates(candidates, max_results, min_similarity, |candidate| {
        metric.similarity(&prepared_query, &normalize(candidate))
    })
}

/// Score, filter, stable-sort descending and truncate.
pub(crate) fn rank_candidates<S, F>(
    candidates: &[S],
    max_results: usize,
    min_similarity: f64,
    score: F,
) -> Vec<MatchResult>
where
    S: AsRef<str> + Sync,
    F: Fn(&str) -> f64 + Sync,
{
    let to_result = |(index, candidate): (usize, &S)| {
        let text = candidate.as_ref();
        MatchResult {
            text: text.to_string(),
            score: score(text),
            index,
        }
    };

    let parallel = candidates.len() >= PARALLEL_THRESHOLD;
    tracing::trace!(candidates = candidates.len(), parallel, "scoring candidates");

    // Indexed collect keeps input order in both branches
    let mut results: Vec<MatchResult> = if parallel {
        candidates
            .par_iter()
            .enumerate()
            .map(to_result)
            .filter(|r| r.score >= min_similarity)
            .collect()
    } else {
        candidates
            .iter()
            .enumerate()
            .map(to_result)
            .filter(|r| r.score >= min_similarity)
            .collect()
    };

    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    results.truncate(max_results);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::jaro::jaro_winkler_default;

    #[test]
    fn test_find_best_matches_aple() {
        let fruit = ["apple", "apply", "maple", "orange"];
        let best = find_best_matches("aple", &fruit, 2, 0.5, Algorithm::JaroWinkler);
        assert_eq!(best, vec!["apple", "maple"]);
        assert!(!best.contains(&"orange".to_string()));
    }

    #[test]
    fn test_scored_results_are_sorted_and_bounded() {
        let fruit = ["apple", "apply", "maple", "orange"];
        let results = find_best_matches_scored("aple", &fruit, 10, 0.5, Algorithm::JaroWinkler);
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(results.iter().all(|r| r.score >= 0.5));
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].index, 0);
        // "orange" scores about 0.61: above the floor but last
        assert_eq!(results[3].text, "orange");
        assert!(find_best_matches("aple", &fruit, 10, 0.7, Algorithm::JaroWinkler)
            .iter()
            .all(|t| t != "orange"));
        assert!((results[0].score - jaro_winkler_default("aple", "apple")).abs() < 1e-12);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let candidates = ["bcd", "xyz", "abd", "abc", "acc"];
        let results = find_best_matches_scored("abc", &candidates, 10, 0.0, Algorithm::Hamming);
        let order: Vec<usize> = results.iter().map(|r| r.index).collect();
        // abc: 1.0, then abd/acc (2/3) in input order, then bcd/xyz (0) in input order
        assert_eq!(order, vec![3, 2, 4, 0, 1]);
    }

    #[test]
    fn test_ties_keep_input_order_in_parallel() {
        let mut candidates: Vec<String> = (0..PARALLEL_THRESHOLD * 2)
            .map(|i| if i % 2 == 0 { "abd".to_string() } else { "xyz".to_string() })
            .collect();
        candidates.push("abc".to_string());

        let results = find_best_matches_scored("abc", &candidates, 5, 0.5, Algorithm::Hamming);
        let order: Vec<usize> = results.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![PARALLEL_THRESHOLD * 2, 0, 2, 4, 6]);
    }

    #[test]
    fn test_min_similarity_and_max_results() {
        let candidates = ["apple", "apples", "applesauce"];
        assert!(find_best_matches("zzz", &candidates, 5, 0.5, Algorithm::Levenshtein).is_empty());
        assert_eq!(find_best_matches("apple", &candidates, 1, 0.0, Algorithm::Levenshtein), vec!["apple"]);
        assert!(find_best_matches("apple", &candidates, 0, 0.0, Algorithm::Auto).is_empty());
    }

    #[test]
    fn test_candidates_are_normalized_but_returned_verbatim() {
        let candidates = ["  APPLE ", "banana"];
        let results = find_best_matches_scored("apple", &candidates, 5, 0.9, Algorithm::Levenshtein);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].text, "  APPLE ");
        assert_eq!(results[0].score, 1.0);
    }

    #[test]
    fn test_find_best_matches_with_metric() {
        use crate::algorithms::ngram::Dice;
        let results = find_best_matches_with("night", &["nacht", "nightly", "day"], &Dice::new(2), 2, 0.1);
        assert_eq!(results[0].text, "nightly");
        assert_eq!(results[1].text, "nacht");
        assert_eq!(results[1].score, 0.25);
    }

    #[test]
    fn test_owned_candidates() {
        let candidates = vec!["kitten".to_string(), "sitting".to_string()];
        let best = find_best_matches("kitten", &candidates, 5, 0.0, Algorithm::Auto);
        assert_eq!(best[0], "kitten");
    }
}
