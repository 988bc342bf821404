//! Visually confusable characters
//!
//! Glyphs that are easy to misread for one another (`0`/`O`, `1`/`l`, ...).
//! Confusability is symmetric and each character belongs to at most one
//! group, so the table maps a character to its group index.

use ahash::AHashMap;
use std::sync::LazyLock;

const CONFUSABLE_GROUPS: &[&str] = &[
    "0Oo", "1lI|", "5Ss", "2Zz", "8B", "6G", "bd", "mn", "vw",
];

static CONFUSABLES: LazyLock<AHashMap<char, usize>> = LazyLock::new(|| {
    let mut table = AHashMap::with_capacity(32);
    for (group, members) in CONFUSABLE_GROUPS.iter().enumerate() {
        for c in members.chars() {
            table.insert(c, group);
        }
    }
    tracing::debug!(entries = table.len(), "visual confusable table built");
    table
});

/// Whether two characters are identical or commonly confused visually.
///
/// # Examples
/// ```
/// use fuzzymatch::algorithms::visual::are_confusable_chars;
/// assert!(are_confusable_chars('0', 'O'));
/// assert!(!are_confusable_chars('0', 'Q'));
/// ```
#[inline]
#[must_use]
pub fn are_confusable_chars(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    match (CONFUSABLES.get(&a), CONFUSABLES.get(&b)) {
        (Some(ga), Some(gb)) => ga == gb,
        _ => false,
    }
}

/// Whether `b` could be a visual misreading of `a`.
///
/// Requires equal length; every position must hold identical or confusable
/// characters. Identical strings are always confusable.
///
/// # Examples
/// ```
/// use fuzzymatch::algorithms::visual::visual_confusables;
/// assert!(visual_confusables("l0l", "1O|"));
/// assert!(!visual_confusables("cat", "cot"));
/// ```
#[must_use]
pub fn visual_confusables(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }

    let mut a_iter = a.chars();
    let mut b_iter = b.chars();
    loop {
        match (a_iter.next(), b_iter.next()) {
            (Some(ca), Some(cb)) => {
                if !are_confusable_chars(ca, cb) {
                    return false;
                }
            }
            (None, None) => return true,
            _ => return false,
        }
    }
}
