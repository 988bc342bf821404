//! Keyboard-proximity similarity and typo detection
//!
//! Keys of a US QWERTY keyboard are placed on a grid of key widths, with the
//! home and bottom rows shifted right by a quarter and half key. Substituting
//! a neighbouring key costs little; keys on opposite sides of the keyboard
//! cost a lot.

use super::damerau::optimal_alignment;
use super::Similarity;
use ahash::AHashMap;
use smallvec::SmallVec;
use std::sync::LazyLock;

/// Key centre per lowercase letter or digit, as `(column, row)`.
static KEYBOARD_LAYOUT: LazyLock<AHashMap<char, (f64, f64)>> = LazyLock::new(|| {
    // (keys, stagger) per row, top to bottom
    const ROWS: &[(&str, f64)] = &[
        ("1234567890", 0.0),
        ("qwertyuiop", 0.0),
        ("asdfghjkl", 0.25),
        ("zxcvbnm", 0.5),
    ];

    let mut layout = AHashMap::with_capacity(36);
    for (row, (keys, stagger)) in ROWS.iter().enumerate() {
        for (col, key) in keys.chars().enumerate() {
            layout.insert(key, (col as f64 + stagger, row as f64));
        }
    }
    tracing::debug!(keys = layout.len(), "keyboard layout built");
    layout
});

/// Key distance at which a substitution scores 0.
pub const MAX_KEY_DISTANCE: f64 = 10.0;

/// Default Optimal-Alignment distance still treated as a typo.
pub const DEFAULT_MAX_TYPO_DISTANCE: usize = 1;

/// Keyboard-proximity similarity calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardDistance;

impl KeyboardDistance {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Similarity for KeyboardDistance {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        keyboard_distance(a, b)
    }

    fn name(&self) -> &'static str {
        "keyboard_distance"
    }
}

/// Grid position of a key, if it is on the layout. Case-insensitive.
#[must_use]
pub fn key_position(c: char) -> Option<(f64, f64)> {
    KEYBOARD_LAYOUT.get(&c.to_ascii_lowercase()).copied()
}

/// Euclidean distance between two keys, in key widths.
#[must_use]
pub fn key_distance(a: char, b: char) -> Option<f64> {
    let (ax, ay) = key_position(a)?;
    let (bx, by) = key_position(b)?;
    Some((ax - bx).hypot(ay - by))
}

/// Keyboard-proximity similarity in `[0, 1]`.
///
/// Characters are compared position by position over the shorter length,
/// ignoring case: equal characters score 1, keys on the layout score
/// `1 - distance / 10` (clamped), anything else scores 0. The average is then
/// scaled by `1 - |len(a) - len(b)| / max(len)`.
///
/// Either string empty gives 0.0; identical strings give 1.0.
///
/// # Examples
/// ```
/// use fuzzymatch::algorithms::keyboard::keyboard_distance;
/// assert!((keyboard_distance("a", "s") - 0.9).abs() < 1e-9);
/// assert_eq!(keyboard_distance("ab", "abcd"), 0.5);
/// ```
#[must_use]
pub fn keyboard_distance(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();

    let compared = a_chars.len().min(b_chars.len());
    let longest = a_chars.len().max(b_chars.len());

    let total: f64 = a_chars
        .iter()
        .zip(b_chars.iter())
        .map(|(&ca, &cb)| substitution_score(ca, cb))
        .sum();

    let length_penalty = 1.0 - (longest - compared) as f64 / longest as f64;
    (total / compared as f64) * length_penalty
}

#[inline]
fn substitution_score(a: char, b: char) -> f64 {
    let a = lowercase_char(a);
    let b = lowercase_char(b);
    if a == b {
        return 1.0;
    }
    key_distance(a, b).map_or(0.0, |d| (1.0 - d / MAX_KEY_DISTANCE).clamp(0.0, 1.0))
}

/// Single-char lowercase; characters with multi-char lowercase forms are kept.
#[inline]
fn lowercase_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Whether `b` looks like a small slip away from `a`: the Optimal-Alignment
/// distance is non-zero and at most `max_distance`.
///
/// # Examples
/// ```
/// use fuzzymatch::algorithms::keyboard::is_probable_typo;
/// assert!(is_probable_typo("teh", "the", 1));
/// assert!(!is_probable_typo("the", "the", 1));
/// ```
#[must_use]
pub fn is_probable_typo(a: &str, b: &str, max_distance: usize) -> bool {
    let distance = optimal_alignment(a, b);
    distance > 0 && distance <= max_distance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        assert_eq!(key_position('q'), Some((0.0, 1.0)));
        assert_eq!(key_position('A'), Some((0.25, 2.0)));
        assert_eq!(key_position('m'), Some((6.5, 3.0)));
        assert_eq!(key_position('0'), Some((9.0, 0.0)));
        assert_eq!(key_position('!'), None);
    }

    #[test]
    fn test_key_distance() {
        assert_eq!(key_distance('q', 'w'), Some(1.0));
        assert_eq!(key_distance('a', '?'), None);
        let d = key_distance('c', 'd').unwrap_or_default();
        assert!((d - (0.0625f64 + 1.0).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_keyboard_distance_edges() {
        assert_eq!(keyboard_distance("", "abc"), 0.0);
        assert_eq!(keyboard_distance("", ""), 0.0);
        assert_eq!(keyboard_distance("abc", "abc"), 1.0);
        assert_eq!(keyboard_distance("ABC", "abc"), 1.0);
    }

    #[test]
    fn test_keyboard_distance_neighbours_beat_far_keys() {
        let near = keyboard_distance("cat", "cst");
        let far = keyboard_distance("cat", "cpt");
        assert!(near > far);
        assert!((0.0..=1.0).contains(&far));
    }

    #[test]
    fn test_keyboard_distance_unmapped_and_length() {
        assert_eq!(keyboard_distance("a!", "a?"), 0.5);
        assert_eq!(keyboard_distance("ab", "abcd"), 0.5);
    }

    #[test]
    fn test_is_probable_typo() {
        assert!(is_probable_typo("teh", "the", 1));
        assert!(is_probable_typo("apple", "appel", 1));
        assert!(!is_probable_typo("apple", "apple", 1));
        assert!(!is_probable_typo("apple", "orange", 1));
        assert!(is_probable_typo("apple", "aple", DEFAULT_MAX_TYPO_DISTANCE));
    }

    #[test]
    fn test_struct() {
        assert_eq!(Similarity::name(&KeyboardDistance::new()), "keyboard_distance");
        assert_eq!(Similarity::similarity(&KeyboardDistance::new(), "x", "x"), 1.0);
    }
}
