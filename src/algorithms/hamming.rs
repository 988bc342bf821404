//! Hamming distance implementation
//!
//! Counts positions where characters differ. Only defined for strings with
//! the same number of characters:
//!
//! - [`hamming`] and [`FallibleEditDistance`] return `None` for unequal lengths.
//! - [`Similarity`] scores unequal lengths as `0.0`.
//!
//! # Complexity
//! - Time: O(n)
//! - Space: O(1), characters are zipped without collecting

use super::{FallibleEditDistance, Similarity};

/// Hamming distance calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hamming;

impl Hamming {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FallibleEditDistance for Hamming {
    fn distance(&self, a: &str, b: &str) -> Option<usize> {
        hamming(a, b)
    }

    fn name(&self) -> &'static str {
        "hamming"
    }
}

impl Similarity for Hamming {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        hamming_similarity(a, b)
    }

    fn name(&self) -> &'static str {
        "hamming"
    }
}

/// Number of positions at which the characters of `a` and `b` differ.
///
/// Returns `None` when the strings have different character counts.
///
/// # Examples
/// ```
/// use fuzzymatch::algorithms::hamming::hamming;
/// assert_eq!(hamming("abc", "abd"), Some(1));
/// assert_eq!(hamming("abc", "abcd"), None);
/// ```
#[inline]
#[must_use]
pub fn hamming(a: &str, b: &str) -> Option<usize> {
    if a.is_ascii() && b.is_ascii() {
        if a.len() != b.len() {
            return None;
        }
        return Some(
            a.bytes()
                .zip(b.bytes())
                .filter(|(ca, cb)| ca != cb)
                .count(),
        );
    }

    let mut a_iter = a.chars();
    let mut b_iter = b.chars();
    let mut diff = 0usize;

    loop {
        match (a_iter.next(), b_iter.next()) {
            (Some(ca), Some(cb)) => diff += usize::from(ca != cb),
            (None, None) => return Some(diff),
            _ => return None,
        }
    }
}

/// `1 - d / len`, or `0.0` when the distance is undefined.
///
/// Two empty strings score 1.0.
#[must_use]
pub fn hamming_similarity(a: &str, b: &str) -> f64 {
    match hamming(a, b) {
        Some(d) => super::normalized_similarity(d, a, b),
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hamming_basic() {
        assert_eq!(hamming("", ""), Some(0));
        assert_eq!(hamming("karolin", "kathrin"), Some(3));
        assert_eq!(hamming("abc", "abd"), Some(1));
        assert_eq!(hamming("abc", "abc"), Some(0));
    }

    #[test]
    fn test_hamming_unequal_length() {
        assert_eq!(hamming("abc", "abcd"), None);
        assert_eq!(hamming("", "a"), None);
    }

    #[test]
    fn test_hamming_counts_chars_not_bytes() {
        assert_eq!(hamming("café", "cafe"), Some(1));
        assert_eq!(hamming("naïve", "naive!"), None);
    }

    #[test]
    fn test_hamming_similarity() {
        assert_eq!(hamming_similarity("abcd", "abce"), 0.75);
        assert_eq!(hamming_similarity("abc", "abcd"), 0.0);
        assert_eq!(hamming_similarity("", ""), 1.0);
    }

    #[test]
    fn test_hamming_traits() {
        let h = Hamming::new();
        assert_eq!(FallibleEditDistance::distance(&h, "abc", "abcd"), None);
        assert_eq!(FallibleEditDistance::similarity(&h, "ab", "ax"), Some(0.5));
        assert_eq!(Similarity::similarity(&h, "ab", "abc"), 0.0);
    }
}
