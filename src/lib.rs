//! fuzzymatch - approximate string matching
//!
//! Edit-distance, alignment, subsequence, n-gram, phonetic and
//! keyboard/visual similarity measures, plus a multi-metric comparison and a
//! ranked best-match search built on top of them.
//!
//! # Features
//! - Levenshtein, Damerau-Levenshtein, Optimal String Alignment, Hamming
//! - Jaro and Jaro-Winkler
//! - Longest common subsequence / substring
//! - N-gram sets with Dice, Jaccard and Cosine
//! - Soundex and a simplified (double) Metaphone
//! - QWERTY keyboard proximity, visually confusable glyphs, typo detection
//! - Parallel batch search with deterministic ordering
//!
//! Every algorithm is a pure function over `&str`, counts characters rather
//! than bytes and never fails: degenerate inputs map to documented defaults.
//!
//! # Example
//! ```
//! use fuzzymatch::{compare_strings, find_best_matches, Algorithm};
//!
//! let m = compare_strings("apple", "applesauce", true);
//! assert_eq!(m.levenshtein_distance, 5);
//!
//! let best = find_best_matches("aple", &["apple", "orange"], 5, 0.7, Algorithm::Auto);
//! assert_eq!(best, vec!["apple"]);
//! ```

pub mod algorithms;
pub mod config;
pub mod matcher;
pub mod search;
pub mod types;

pub use algorithms::normalize::{normalize, NormalizationConfig, NormalizationMode};
pub use algorithms::{EditDistance, FallibleEditDistance, Similarity};
pub use config::{ConfigError, MatcherConfig};
pub use matcher::{
    compare_strings, compare_with_algorithm, get_edit_distance, get_similarity, prepare,
    FuzzyMatcher,
};
pub use search::{
    find_best_matches, find_best_matches_scored, find_best_matches_with, MatchResult,
    PARALLEL_THRESHOLD,
};
pub use types::{Algorithm, AlgorithmError, StringMatch};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::*;

    const WORDS: &[&str] = &["", "a", "kitten", "sitting", "Robert", "naïve", "night", "banana"];

    #[test]
    fn test_identity() {
        for s in WORDS {
            assert_eq!(levenshtein(s, s), 0);
            assert_eq!(soundex(s), soundex(s));
            if !s.is_empty() {
                assert_eq!(jaro(s, s), 1.0);
                assert_eq!(jaro_winkler_default(s, s), 1.0);
                assert_eq!(dice(s, s, 2), 1.0);
                assert_eq!(jaccard(s, s, 2), 1.0);
                assert_eq!(cosine(s, s, 2), 1.0);
            }
        }
    }

    #[test]
    fn test_symmetry_and_bounds() {
        for a in WORDS {
            for b in WORDS {
                assert_eq!(levenshtein(a, b), levenshtein(b, a));
                assert!((jaro(a, b) - jaro(b, a)).abs() < 1e-12);
                assert!(jaro_winkler_default(a, b) >= jaro(a, b));
                assert_eq!(hamming(a, b).is_none(), a.chars().count() != b.chars().count());

                for score in [
                    jaro(a, b),
                    jaro_winkler_default(a, b),
                    dice(a, b, 2),
                    jaccard(a, b, 2),
                    cosine(a, b, 2),
                    keyboard_distance(a, b),
                    levenshtein_similarity(a, b),
                ] {
                    assert!((0.0..=1.0).contains(&score), "{a}/{b}: {score}");
                }
            }
        }
    }

    #[test]
    fn test_empty_edit_distance_is_length() {
        for s in WORDS {
            let len = s.chars().count();
            assert_eq!(levenshtein("", s), len);
            assert_eq!(levenshtein(s, ""), len);
            assert_eq!(damerau_levenshtein("", s), len);
            assert_eq!(optimal_alignment(s, ""), len);
        }
    }

    #[test]
    fn test_reference_scenarios() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(soundex("Robert"), "R163");
        assert_eq!(soundex("Rupert"), "R163");
        assert_eq!(dice("night", "nacht", 2), 0.25);
        assert_eq!(hamming("abc", "abcd"), None);
        assert_eq!(hamming("abc", "abd"), Some(1));
    }
}
