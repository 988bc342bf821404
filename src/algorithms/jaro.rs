//! Jaro and Jaro-Winkler similarity implementations
//!
//! Well suited to names and short strings. Jaro-Winkler adds a boost for a
//! shared prefix, but only once the Jaro score has reached
//! [`WINKLER_BOOST_THRESHOLD`].

use super::Similarity;
use smallvec::SmallVec;

/// Jaro scores below this are returned by Jaro-Winkler without a prefix boost.
pub const WINKLER_BOOST_THRESHOLD: f64 = 0.7;

/// Longest common prefix that contributes to the Winkler boost.
pub const MAX_PREFIX_LENGTH: usize = 4;

/// Default Winkler prefix scale.
pub const DEFAULT_PREFIX_SCALE: f64 = 0.1;

/// Prefix scales above this can push the score past 1.0.
pub const MAX_PREFIX_SCALE: f64 = 0.25;

/// Jaro similarity calculator
///
/// # Complexity
/// - Time: O(m*w) where w is the match window
/// - Space: O(m+n) for match flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jaro;

impl Jaro {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Similarity for Jaro {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        jaro(a, b)
    }

    fn name(&self) -> &'static str {
        "jaro"
    }
}

/// Jaro-Winkler similarity calculator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JaroWinkler {
    /// Prefix scale, clamped to `[0, 0.25]` at use
    pub prefix_scale: f64,
}

impl Default for JaroWinkler {
    fn default() -> Self {
        Self {
            prefix_scale: DEFAULT_PREFIX_SCALE,
        }
    }
}

impl JaroWinkler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_prefix_scale(prefix_scale: f64) -> Self {
        Self { prefix_scale }
    }
}

impl Similarity for JaroWinkler {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        jaro_winkler(a, b, self.prefix_scale)
    }

    fn name(&self) -> &'static str {
        "jaro_winkler"
    }
}

/// Jaro similarity in `[0, 1]`.
///
/// Characters match when equal and no further apart than
/// `max(len(a), len(b)) / 2 - 1` positions (at least 1). Returns 0.0 when
/// either string is empty or nothing matches, 1.0 for identical strings.
///
/// # Examples
/// ```
/// use fuzzymatch::algorithms::jaro::jaro;
/// assert!((jaro("MARTHA", "MARHTA") - 0.9444).abs() < 1e-3);
/// assert_eq!(jaro("", ""), 0.0);
/// ```
#[must_use]
pub fn jaro(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    let window = (a_len.max(b_len) / 2).saturating_sub(1).max(1);

    let mut a_matched: SmallVec<[bool; 64]> = smallvec::smallvec![false; a_len];
    let mut b_matched: SmallVec<[bool; 64]> = smallvec::smallvec![false; b_len];
    let mut matches = 0usize;

    for (i, &ac) in a_chars.iter().enumerate() {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(b_len);

        for j in start..end {
            if b_matched[j] || b_chars[j] != ac {
                continue;
            }
            a_matched[i] = true;
            b_matched[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Matched characters that appear in a different order
    let mut out_of_order = 0usize;
    let mut k = 0usize;
    for (i, &ac) in a_chars.iter().enumerate() {
        if !a_matched[i] {
            continue;
        }
        while !b_matched[k] {
            k += 1;
        }
        if ac != b_chars[k] {
            out_of_order += 1;
        }
        k += 1;
    }
    let transpositions = out_of_order / 2;

    let m = matches as f64;
    (m / a_len as f64 + m / b_len as f64 + (m - transpositions as f64) / m) / 3.0
}

/// Jaro-Winkler similarity with an explicit prefix scale.
///
/// Below a Jaro score of 0.7 the Jaro score is returned unchanged. Above it,
/// the score is boosted by `prefix * prefix_scale * (1 - jaro)` where
/// `prefix` is the shared leading run capped at 4 characters. Scales outside
/// `[0, 0.25]` are clamped.
///
/// # Examples
/// ```
/// use fuzzymatch::algorithms::jaro::jaro_winkler;
/// assert!((jaro_winkler("MARTHA", "MARHTA", 0.1) - 0.9611).abs() < 1e-3);
/// ```
#[must_use]
pub fn jaro_winkler(a: &str, b: &str, prefix_scale: f64) -> f64 {
    let jaro_score = jaro(a, b);
    if jaro_score < WINKLER_BOOST_THRESHOLD {
        return jaro_score;
    }

    let scale = clamp_prefix_scale(prefix_scale);
    let prefix = common_prefix_length(a, b, MAX_PREFIX_LENGTH);

    (jaro_score + prefix as f64 * scale * (1.0 - jaro_score)).min(1.0)
}

/// Jaro-Winkler with the standard 0.1 prefix scale.
#[inline]
#[must_use]
pub fn jaro_winkler_default(a: &str, b: &str) -> f64 {
    jaro_winkler(a, b, DEFAULT_PREFIX_SCALE)
}

/// Number of leading characters `a` and `b` share, capped at `max`.
#[inline]
#[must_use]
pub fn common_prefix_length(a: &str, b: &str, max: usize) -> usize {
    a.chars()
        .zip(b.chars())
        .take(max)
        .take_while(|(ca, cb)| ca == cb)
        .count()
}

fn clamp_prefix_scale(prefix_scale: f64) -> f64 {
    if prefix_scale.is_nan() {
        tracing::warn!("jaro-winkler prefix scale is NaN, using {}", DEFAULT_PREFIX_SCALE);
        return DEFAULT_PREFIX_SCALE;
    }
    if !(0.0..=MAX_PREFIX_SCALE).contains(&prefix_scale) {
        tracing::warn!(
            prefix_scale,
            "jaro-winkler prefix scale outside [0, {}], clamping",
            MAX_PREFIX_SCALE
        );
    }
    prefix_scale.clamp(0.0, MAX_PREFIX_SCALE)
}
