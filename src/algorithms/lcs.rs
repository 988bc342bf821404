//! Longest Common Subsequence and Longest Common Substring
//!
//! Both use a two-row dynamic program over Unicode scalar values.
//!
//! # Complexity
//! - Time: O(m*n)
//! - Space: O(n)

use super::Similarity;
use smallvec::SmallVec;

/// Longest Common Subsequence similarity calculator
///
/// Similarity is `lcs_length / max(len(a), len(b))`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lcs;

impl Lcs {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Similarity for Lcs {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        lcs_similarity(a, b)
    }

    fn name(&self) -> &'static str {
        "lcs"
    }
}

/// Longest Common Substring similarity calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lcss;

impl Lcss {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Similarity for Lcss {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        lcss_similarity(a, b)
    }

    fn name(&self) -> &'static str {
        "lcss"
    }
}

/// Length of the longest (not necessarily contiguous) common subsequence.
///
/// # Examples
/// ```
/// use fuzzymatch::algorithms::lcs::lcs_length;
/// assert_eq!(lcs_length("ABCBDAB", "BDCABA"), 4);
/// ```
#[must_use]
pub fn lcs_length(a: &str, b: &str) -> usize {
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();

    let n = b_chars.len();
    if a_chars.is_empty() || n == 0 {
        return 0;
    }

    let mut prev: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];
    let mut curr: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];

    for &ac in &a_chars {
        for j in 1..=n {
            curr[j] = if ac == b_chars[j - 1] {
                prev[j - 1] + 1
            } else {
                prev[j].max(curr[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Length of the longest contiguous common substring.
///
/// # Examples
/// ```
/// use fuzzymatch::algorithms::lcs::lcss_length;
/// assert_eq!(lcss_length("xabcdy", "zabcdw"), 4);
/// ```
#[must_use]
pub fn lcss_length(a: &str, b: &str) -> usize {
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();

    let n = b_chars.len();
    if a_chars.is_empty() || n == 0 {
        return 0;
    }

    let mut prev: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];
    let mut curr: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];
    let mut longest = 0usize;

    for &ac in &a_chars {
        for j in 1..=n {
            if ac == b_chars[j - 1] {
                curr[j] = prev[j - 1] + 1;
                longest = longest.max(curr[j]);
            } else {
                curr[j] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    longest
}

/// `lcs_length / max(len)`; two empty strings score 1.0.
#[must_use]
pub fn lcs_similarity(a: &str, b: &str) -> f64 {
    ratio_of_longer(lcs_length(a, b), a, b)
}

/// `lcss_length / max(len)`; two empty strings score 1.0.
#[must_use]
pub fn lcss_similarity(a: &str, b: &str) -> f64 {
    ratio_of_longer(lcss_length(a, b), a, b)
}

#[inline]
fn ratio_of_longer(len: usize, a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        1.0
    } else {
        len as f64 / max_len as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcs_length() {
        assert_eq!(lcs_length("", ""), 0);
        assert_eq!(lcs_length("abc", ""), 0);
        assert_eq!(lcs_length("abc", "abc"), 3);
        assert_eq!(lcs_length("ABCBDAB", "BDCABA"), 4);
        assert_eq!(lcs_length("apple", "applesauce"), 5);
        assert_eq!(lcs_length("abc", "xyz"), 0);
    }

    #[test]
    fn test_lcss_length() {
        assert_eq!(lcss_length("", "abc"), 0);
        assert_eq!(lcss_length("xabcdy", "zabcdw"), 4);
        assert_eq!(lcss_length("abcxdef", "abcydef"), 3);
        assert_eq!(lcss_length("apple", "applesauce"), 5);
    }

    #[test]
    fn test_substring_never_exceeds_subsequence() {
        for (a, b) in [("ABCBDAB", "BDCABA"), ("kitten", "sitting"), ("night", "nacht")] {
            assert!(lcss_length(a, b) <= lcs_length(a, b));
        }
    }

    #[test]
    fn test_similarities() {
        assert_eq!(lcs_similarity("apple", "applesauce"), 0.5);
        assert_eq!(lcss_similarity("", ""), 1.0);
        assert_eq!(Similarity::similarity(&Lcss::new(), "abcd", "abxd"), 0.5);
        assert_eq!(Similarity::name(&Lcs::new()), "lcs");
    }

    #[test]
    fn test_unicode() {
        assert_eq!(lcs_length("日本語", "日語"), 2);
        assert_eq!(lcss_length("日本語", "本語"), 2);
    }
}
