//! Damerau-Levenshtein and Optimal String Alignment distances
//!
//! Both extend Levenshtein with adjacent transpositions:
//!
//! - [`damerau_levenshtein`] is the unrestricted distance. It keeps, per
//!   character, the last row where that character appeared in `a`, so a
//!   transposition may span characters that are edited again.
//! - [`optimal_alignment`] is the restricted variant: a transposed pair may not
//!   be edited further. It can exceed the unrestricted distance
//!   (`"ca"` → `"abc"` is 2 vs. 3).

use super::EditDistance;
use ahash::AHashMap;
use smallvec::SmallVec;

/// Unrestricted Damerau-Levenshtein distance calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DamerauLevenshtein;

impl DamerauLevenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EditDistance for DamerauLevenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        damerau_levenshtein(a, b)
    }

    fn name(&self) -> &'static str {
        "damerau_levenshtein"
    }
}

/// Optimal String Alignment (restricted Damerau-Levenshtein) calculator
///
/// # Complexity
/// - Time: O(m*n)
/// - Space: O(n), three rolling rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptimalAlignment;

impl OptimalAlignment {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EditDistance for OptimalAlignment {
    fn distance(&self, a: &str, b: &str) -> usize {
        optimal_alignment(a, b)
    }

    fn name(&self) -> &'static str {
        "optimal_alignment"
    }
}

/// Damerau-Levenshtein distance with unrestricted adjacent transpositions.
///
/// The matrix is seeded with `len(a) + len(b)` along its outer border so a
/// transposition reaching back past the first row or column is never cheaper
/// than plain edits.
///
/// # Examples
/// ```
/// use fuzzymatch::algorithms::damerau::damerau_levenshtein;
/// assert_eq!(damerau_levenshtein("ca", "abc"), 2);
/// assert_eq!(damerau_levenshtein("abcd", "acbd"), 1);
/// ```
#[must_use]
pub fn damerau_levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let max_dist = m + n;
    let width = n + 2;

    // (m + 2) x (n + 2) matrix, row-major
    let mut d = vec![0usize; (m + 2) * width];
    let idx = |i: usize, j: usize| i * width + j;

    d[idx(0, 0)] = max_dist;
    for i in 0..=m {
        d[idx(i + 1, 0)] = max_dist;
        d[idx(i + 1, 1)] = i;
    }
    for j in 0..=n {
        d[idx(0, j + 1)] = max_dist;
        d[idx(1, j + 1)] = j;
    }

    // Last row (1-based) in which each character of `a` was seen
    let mut last_row: AHashMap<char, usize> = AHashMap::new();

    for i in 1..=m {
        // Last column (1-based) in this row where a[i-1] matched b
        let mut last_match_col = 0usize;

        for j in 1..=n {
            let k = last_row.get(&b_chars[j - 1]).copied().unwrap_or(0);
            let l = last_match_col;

            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                last_match_col = j;
                0
            } else {
                1
            };

            let substitution = d[idx(i, j)] + cost;
            let insertion = d[idx(i + 1, j)] + 1;
            let deletion = d[idx(i, j + 1)] + 1;
            let transposition = d[idx(k, l)] + (i - k - 1) + 1 + (j - l - 1);

            d[idx(i + 1, j + 1)] = substitution.min(insertion).min(deletion).min(transposition);
        }

        last_row.insert(a_chars[i - 1], i);
    }

    d[idx(m + 1, n + 1)]
}

/// Restricted edit distance: adjacent swaps count as one edit, but no
/// substring is edited more than once.
///
/// # Examples
/// ```
/// use fuzzymatch::algorithms::damerau::optimal_alignment;
/// assert_eq!(optimal_alignment("ca", "abc"), 3);
/// assert_eq!(optimal_alignment("teh", "the"), 1);
/// ```
#[must_use]
pub fn optimal_alignment(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev2_row: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];
    let mut prev_row: SmallVec<[usize; 64]> = (0..=n).collect();
    let mut curr_row: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution

            if i > 1
                && j > 1
                && a_chars[i - 1] == b_chars[j - 2]
                && a_chars[i - 2] == b_chars[j - 1]
            {
                curr_row[j] = curr_row[j].min(prev2_row[j - 2] + 1);
            }
        }

        std::mem::swap(&mut prev2_row, &mut prev_row);
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Length-normalized Damerau-Levenshtein similarity.
#[inline]
#[must_use]
pub fn damerau_levenshtein_similarity(a: &str, b: &str) -> f64 {
    super::normalized_similarity(damerau_levenshtein(a, b), a, b)
}

/// Length-normalized Optimal String Alignment similarity.
#[inline]
#[must_use]
pub fn optimal_alignment_similarity(a: &str, b: &str) -> f64 {
    super::normalized_similarity(optimal_alignment(a, b), a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::levenshtein::levenshtein;

    #[test]
    fn test_damerau_basic() {
        assert_eq!(damerau_levenshtein("", ""), 0);
        assert_eq!(damerau_levenshtein("abc", ""), 3);
        assert_eq!(damerau_levenshtein("", "abc"), 3);
        assert_eq!(damerau_levenshtein("abc", "abc"), 0);
        assert_eq!(damerau_levenshtein("ab", "ba"), 1);
        assert_eq!(damerau_levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn test_unrestricted_vs_restricted() {
        assert_eq!(damerau_levenshtein("ca", "abc"), 2);
        assert_eq!(optimal_alignment("ca", "abc"), 3);
    }

    #[test]
    fn test_optimal_alignment_basic() {
        assert_eq!(optimal_alignment("", ""), 0);
        assert_eq!(optimal_alignment("", "ab"), 2);
        assert_eq!(optimal_alignment("ab", "ba"), 1);
        assert_eq!(optimal_alignment("abcdef", "abcdfe"), 1);
        assert_eq!(optimal_alignment("kitten", "sitting"), 3);
    }

    #[test]
    fn test_never_exceeds_levenshtein() {
        for (a, b) in [("apple", "applesauce"), ("hte", "the"), ("receive", "recieve"), ("abc", "cba")] {
            assert!(damerau_levenshtein(a, b) <= optimal_alignment(a, b));
            assert!(optimal_alignment(a, b) <= levenshtein(a, b));
        }
    }

    #[test]
    fn test_similarity_helpers() {
        assert_eq!(damerau_levenshtein_similarity("ab", "ba"), 0.5);
        assert_eq!(optimal_alignment_similarity("", ""), 1.0);
    }

    #[test]
    fn test_trait_names() {
        assert_eq!(EditDistance::name(&DamerauLevenshtein::new()), "damerau_levenshtein");
        assert_eq!(EditDistance::distance(&OptimalAlignment::new(), "teh", "the"), 1);
    }
}
