//! N-gram sets and the Dice / Jaccard coefficients
//!
//! Grams are taken with a sliding window over the characters of the source
//! string, without padding. A source shorter than `n` (the empty string
//! included) degrades to a single gram holding the whole string, so short
//! inputs never produce an empty set.
//!
//! Dice uses multiset semantics (per-gram counts), Jaccard uses set semantics
//! (distinct grams only). The two deliberately disagree on repeated grams.
//!
//! # N-gram Size Limits
//!
//! - `n = 0` yields an empty set and a similarity of 0.0
//! - an empty string on either side scores 0.0 under every coefficient
//! - [`MAX_NGRAM_SIZE`] is the largest size accepted by the matcher config

use super::Similarity;
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

/// Largest n-gram size accepted by [`crate::config::MatcherConfig`].
pub const MAX_NGRAM_SIZE: usize = 32;

/// Default n-gram size (bigrams).
pub const DEFAULT_NGRAM_SIZE: usize = 2;

/// Multiset of n-grams drawn from one source string.
///
/// `total` always equals the sum of the counts in `grams`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NGramSet {
    pub n: usize,
    pub source: String,
    pub grams: AHashMap<String, usize>,
    pub total: usize,
    pub case_sensitive: bool,
}

impl NGramSet {
    /// Build the gram multiset for `source`.
    ///
    /// When `case_sensitive` is false the source is lowercased first.
    #[must_use]
    pub fn new(source: &str, n: usize, case_sensitive: bool) -> Self {
        let folded;
        let text = if case_sensitive {
            source
        } else {
            folded = source.to_lowercase();
            folded.as_str()
        };

        let mut grams: AHashMap<String, usize> = AHashMap::new();
        let mut total = 0usize;

        if n > 0 {
            let chars: Vec<char> = text.chars().collect();
            if chars.len() < n {
                grams.insert(text.to_string(), 1);
                total = 1;
            } else {
                for window in chars.windows(n) {
                    *grams.entry(window.iter().collect()).or_insert(0) += 1;
                    total += 1;
                }
            }
        }

        Self {
            n,
            source: source.to_string(),
            grams,
            total,
            case_sensitive,
        }
    }

    /// Number of distinct grams.
    #[must_use]
    pub fn len(&self) -> usize {
        self.grams.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Occurrences of `gram` in the set.
    #[must_use]
    pub fn count(&self, gram: &str) -> usize {
        self.grams.get(gram).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn contains(&self, gram: &str) -> bool {
        self.grams.contains_key(gram)
    }

    /// Distinct grams, in no particular order.
    pub fn distinct(&self) -> impl Iterator<Item = &str> {
        self.grams.keys().map(String::as_str)
    }

    /// Multiset intersection size: sum over shared grams of the smaller count.
    #[must_use]
    pub fn intersection_count(&self, other: &Self) -> usize {
        let (small, large) = if self.grams.len() <= other.grams.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .grams
            .iter()
            .map(|(gram, &count)| count.min(large.count(gram)))
            .sum()
    }

    /// Number of distinct grams present in both sets.
    #[must_use]
    pub fn distinct_intersection(&self, other: &Self) -> usize {
        let a: AHashSet<&str> = self.distinct().collect();
        other.distinct().filter(|gram| a.contains(gram)).count()
    }

    /// Euclidean norm of the count vector.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.grams
            .values()
            .map(|&count| (count * count) as f64)
            .sum::<f64>()
            .sqrt()
    }

    /// Dot product of the two count vectors.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.grams
            .iter()
            .map(|(gram, &count)| (count * other.count(gram)) as f64)
            .sum()
    }
}

/// Case-sensitive n-gram set of `source`.
///
/// # Examples
/// ```
/// use fuzzymatch::algorithms::ngram::ngrams;
/// let set = ngrams("night", 2);
/// assert_eq!(set.total, 4);
/// assert_eq!(set.count("gh"), 1);
///
/// // shorter than n: one gram holding the whole string
/// assert_eq!(ngrams("a", 2).count("a"), 1);
/// ```
#[must_use]
pub fn ngrams(source: &str, n: usize) -> NGramSet {
    NGramSet::new(source, n, true)
}

/// N-gram set with explicit case handling.
#[must_use]
pub fn ngrams_with_case(source: &str, n: usize, case_sensitive: bool) -> NGramSet {
    NGramSet::new(source, n, case_sensitive)
}

/// Sørensen-Dice coefficient over gram multisets:
/// `2 * |A ∩ B| / (|A| + |B|)`.
///
/// Returns 0.0 if either string is empty or `n == 0`, 1.0 for identical
/// non-empty strings.
///
/// # Examples
/// ```
/// use fuzzymatch::algorithms::ngram::dice;
/// assert_eq!(dice("night", "nacht", 2), 0.25);
/// ```
#[must_use]
pub fn dice(a: &str, b: &str, n: usize) -> f64 {
    if n == 0 || a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let set_a = ngrams(a, n);
    let set_b = ngrams(b, n);
    dice_of_sets(&set_a, &set_b)
}

/// Dice coefficient of two prebuilt gram sets.
#[must_use]
pub fn dice_of_sets(a: &NGramSet, b: &NGramSet) -> f64 {
    let denominator = a.total + b.total;
    if denominator == 0 {
        return 0.0;
    }
    2.0 * a.intersection_count(b) as f64 / denominator as f64
}

/// Jaccard index over the distinct gram vocabularies: `|A ∩ B| / |A ∪ B|`.
///
/// Returns 0.0 if either string is empty or `n == 0`.
///
/// # Examples
/// ```
/// use fuzzymatch::algorithms::ngram::jaccard;
/// assert!((jaccard("night", "nacht", 2) - 1.0 / 7.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn jaccard(a: &str, b: &str, n: usize) -> f64 {
    if n == 0 || a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let set_a = ngrams(a, n);
    let set_b = ngrams(b, n);
    jaccard_of_sets(&set_a, &set_b)
}

/// Jaccard index of two prebuilt gram sets.
#[must_use]
pub fn jaccard_of_sets(a: &NGramSet, b: &NGramSet) -> f64 {
    let intersection = a.distinct_intersection(b);
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Dice coefficient calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dice {
    pub n: usize,
}

impl Default for Dice {
    fn default() -> Self {
        Self {
            n: DEFAULT_NGRAM_SIZE,
        }
    }
}

impl Dice {
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl Similarity for Dice {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        dice(a, b, self.n)
    }

    fn name(&self) -> &'static str {
        "dice"
    }
}

/// Jaccard index calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jaccard {
    pub n: usize,
}

impl Default for Jaccard {
    fn default() -> Self {
        Self {
            n: DEFAULT_NGRAM_SIZE,
        }
    }
}

impl Jaccard {
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl Similarity for Jaccard {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        jaccard(a, b, self.n)
    }

    fn name(&self) -> &'static str {
        "jaccard"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ngram_extraction() {
        let set = ngrams("night", 2);
        assert_eq!(set.total, 4);
        assert_eq!(set.len(), 4);
        for gram in ["ni", "ig", "gh", "ht"] {
            assert!(set.contains(gram));
        }
    }

    #[test]
    fn test_ngram_counts_sum_to_total() {
        let set = ngrams("banana", 2);
        assert_eq!(set.count("an"), 2);
        assert_eq!(set.count("na"), 2);
        assert_eq!(set.count("ba"), 1);
        assert_eq!(set.grams.values().sum::<usize>(), set.total);
        assert_eq!(set.total, 5);
    }

    #[test]
    fn test_short_source_single_gram() {
        let set = ngrams("ab", 3);
        assert_eq!(set.total, 1);
        assert_eq!(set.count("ab"), 1);
    }

    #[test]
    fn test_empty_source_is_one_empty_gram() {
        let set = ngrams("", 2);
        assert_eq!(set.total, 1);
        assert_eq!(set.len(), 1);
        assert_eq!(set.count(""), 1);
        assert!(!set.is_empty());
        assert_eq!(ngrams_with_case("", 3, false).count(""), 1);

        // the placeholder gram never makes empty inputs similar
        assert_eq!(dice("", "", 2), 0.0);
        assert_eq!(jaccard("", "", 2), 0.0);
        assert_eq!(jaccard("", "a", 2), 0.0);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(ngrams("abc", 0).is_empty());
        assert!(ngrams("", 0).is_empty());
        assert_eq!(dice("abc", "abc", 0), 0.0);
        assert_eq!(jaccard("abc", "abc", 0), 0.0);
    }

    #[test]
    fn test_case_handling() {
        assert_eq!(ngrams("AB", 2).count("ab"), 0);
        let folded = ngrams_with_case("AB", 2, false);
        assert_eq!(folded.count("ab"), 1);
        assert_eq!(folded.source, "AB");
        assert!(!folded.case_sensitive);
    }

    #[test]
    fn test_dice() {
        assert_eq!(dice("night", "nacht", 2), 0.25);
        assert_eq!(dice("abc", "abc", 2), 1.0);
        assert_eq!(dice("", "abc", 2), 0.0);
        assert_eq!(dice("", "", 2), 0.0);
        assert_eq!(dice("abc", "xyz", 2), 0.0);
    }

    #[test]
    fn test_dice_multiset_vs_jaccard_set() {
        // "aaaa" has bigram "aa" x3, "aa" has it x1
        assert_eq!(dice("aaaa", "aa", 2), 2.0 * 1.0 / 4.0);
        assert_eq!(jaccard("aaaa", "aa", 2), 1.0);
    }

    #[test]
    fn test_jaccard() {
        assert!((jaccard("night", "nacht", 2) - 1.0 / 7.0).abs() < 1e-9);
        assert_eq!(jaccard("hello", "hello", 2), 1.0);
        assert_eq!(jaccard("", "", 2), 0.0);
        assert_eq!(jaccard("", "abc", 2), 0.0);
    }

    #[test]
    fn test_symmetry() {
        for (a, b) in [("night", "nacht"), ("banana", "bandana"), ("ab", "abc")] {
            assert_eq!(dice(a, b, 2), dice(b, a, 2));
            assert_eq!(jaccard(a, b, 2), jaccard(b, a, 2));
        }
    }

    #[test]
    fn test_structs() {
        assert_eq!(Dice::default().n, 2);
        assert_eq!(Similarity::similarity(&Dice::new(2), "night", "nacht"), 0.25);
        assert_eq!(Similarity::name(&Jaccard::new(3)), "jaccard");
    }
}
