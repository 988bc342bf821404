//! Levenshtein (edit) distance
//!
//! Single-row dynamic program over Unicode scalar values, with the shorter
//! string on the column axis so memory stays O(min(m, n)).

use super::EditDistance;
use smallvec::SmallVec;

/// Levenshtein distance as an [`EditDistance`] metric.
///
/// # Complexity
/// - Time: O(m*n)
/// - Space: O(min(m,n))
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein;

impl Levenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EditDistance for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        levenshtein(a, b)
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

/// Minimum number of single-character insertions, deletions and
/// substitutions that turn `a` into `b`.
///
/// # Examples
/// ```
/// use fuzzymatch::algorithms::levenshtein::levenshtein;
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("", "abc"), 3);
/// ```
#[inline]
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();

    dp_distance(&a_chars, &b_chars)
}

/// Length-normalized Levenshtein similarity: `1 - d / max(len(a), len(b))`.
///
/// Two empty strings score 1.0.
#[inline]
#[must_use]
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    super::normalized_similarity(levenshtein(a, b), a, b)
}

/// Single-row DP over char slices.
#[inline]
fn dp_distance(a: &[char], b: &[char]) -> usize {
    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let (target, source) = if m < n { (a, b) } else { (b, a) };
    let n_target = target.len();

    let mut row: SmallVec<[usize; 64]> = (0..=n_target).collect();

    for (i, &sc) in source.iter().enumerate() {
        let mut prev = row[0];
        row[0] = i + 1;

        for j in 0..n_target {
            let cost = usize::from(sc != target[j]);
            let substitution = prev + cost;
            let deletion = row[j + 1] + 1;
            let insertion = row[j] + 1;

            prev = row[j + 1];
            row[j + 1] = substitution.min(deletion).min(insertion);
        }
    }

    row[n_target]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_basic() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", "abc"), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("saturday", "sunday"), 3);
        assert_eq!(levenshtein("apple", "applesauce"), 5);
    }

    #[test]
    fn test_levenshtein_symmetric() {
        for (a, b) in [("kitten", "sitting"), ("flaw", "lawn"), ("", "xyz"), ("ab", "ba")] {
            assert_eq!(levenshtein(a, b), levenshtein(b, a));
        }
    }

    #[test]
    fn test_levenshtein_unicode() {
        assert_eq!(levenshtein("café", "cafe"), 1);
        assert_eq!(levenshtein("日本語", "日本"), 1);
    }

    #[test]
    fn test_levenshtein_swap_is_two_edits() {
        assert_eq!(levenshtein("ab", "ba"), 2);
        assert_eq!(levenshtein("intention", "execution"), 5);
    }

    #[test]
    fn test_levenshtein_struct() {
        let lev = Levenshtein::new();
        assert_eq!(EditDistance::distance(&lev, "abc", "xyz"), 3);
        assert_eq!(EditDistance::name(&lev), "levenshtein");
        assert_eq!(EditDistance::similarity(&lev, "apple", "applesauce"), 0.5);
    }

    #[test]
    fn test_levenshtein_similarity() {
        assert_eq!(levenshtein_similarity("", ""), 1.0);
        assert_eq!(levenshtein_similarity("apple", "applesauce"), 0.5);
        assert_eq!(levenshtein_similarity("abc", ""), 0.0);
    }
}
