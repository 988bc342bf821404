//! Cosine similarity over n-gram count vectors
//!
//! Each string becomes a sparse vector indexed by gram with occurrence counts
//! as components (see [`NGramSet`]).
//!
//! # Complexity
//! - Time: O(m+n) for building the gram maps and the dot product
//! - Space: O(unique grams)

use super::ngram::{ngrams, NGramSet, DEFAULT_NGRAM_SIZE};
use super::Similarity;

/// Cosine similarity calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cosine {
    pub n: usize,
}

impl Default for Cosine {
    fn default() -> Self {
        Self {
            n: DEFAULT_NGRAM_SIZE,
        }
    }
}

impl Cosine {
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl Similarity for Cosine {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        cosine(a, b, self.n)
    }

    fn name(&self) -> &'static str {
        "cosine"
    }
}

/// Cosine of the angle between the gram count vectors of `a` and `b`.
///
/// Returns 0.0 if either string is empty, `n == 0`, or a vector has zero
/// magnitude.
///
/// # Examples
/// ```
/// use fuzzymatch::algorithms::cosine::cosine;
/// assert!((cosine("night", "nacht", 2) - 0.25).abs() < 1e-9);
/// assert_eq!(cosine("", "abc", 2), 0.0);
/// ```
#[must_use]
pub fn cosine(a: &str, b: &str, n: usize) -> f64 {
    if n == 0 || a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }
    let set_a = ngrams(a, n);
    let set_b = ngrams(b, n);
    cosine_of_sets(&set_a, &set_b)
}

/// Cosine similarity of two prebuilt gram sets.
#[must_use]
pub fn cosine_of_sets(a: &NGramSet, b: &NGramSet) -> f64 {
    let magnitude = a.magnitude() * b.magnitude();
    if magnitude == 0.0 {
        return 0.0;
    }
    (a.dot(b) / magnitude).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_basic() {
        assert_eq!(cosine("hello", "hello", 2), 1.0);
        assert_eq!(cosine("abc", "xyz", 2), 0.0);
        // one shared bigram out of four on each side
        assert!((cosine("night", "nacht", 2) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_zero_magnitude() {
        assert_eq!(cosine("", "", 2), 0.0);
        assert_eq!(cosine("", "abc", 2), 0.0);
        assert_eq!(cosine("abc", "abc", 0), 0.0);
    }

    #[test]
    fn test_cosine_empty_despite_placeholder_gram() {
        // "" builds the one-gram set {"": 1}, which has non-zero magnitude
        assert_eq!(ngrams("", 2).magnitude(), 1.0);
        assert_eq!(cosine("", "", 2), 0.0);
        assert_eq!(cosine("a", "", 2), 0.0);
        assert_eq!(cosine("a", "a", 2), 1.0);
    }

    #[test]
    fn test_cosine_uses_counts() {
        // "abab": ab x2, ba x1; "ab": ab x1 -> 2 / (sqrt(5) * 1)
        let expected = 2.0 / 5f64.sqrt();
        assert!((cosine("abab", "ab", 2) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_symmetric_and_bounded() {
        for (a, b) in [("night", "nacht"), ("banana", "bandana"), ("a", "ab")] {
            let ab = cosine(a, b, 2);
            assert!((ab - cosine(b, a, 2)).abs() < 1e-12);
            assert!((0.0..=1.0).contains(&ab));
        }
    }

    #[test]
    fn test_cosine_struct() {
        let metric = Cosine::default();
        assert_eq!(Similarity::name(&metric), "cosine");
        assert_eq!(Similarity::similarity(&metric, "same", "same"), 1.0);
    }
}
