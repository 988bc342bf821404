//! Character-level comparison
//!
//! Scores a single substitution from several angles at once: exact match,
//! keyboard proximity, visual confusability, phonetic class and character
//! category. Used to judge how plausible one character is as a typo of another.

use super::keyboard::keyboard_distance;
use super::phonetic::soundex_code;
use super::visual::are_confusable_chars;
use serde::{Deserialize, Serialize};

pub const EXACT_WEIGHT: f64 = 0.4;
pub const KEYBOARD_WEIGHT: f64 = 0.2;
pub const VISUAL_WEIGHT: f64 = 0.15;
pub const PHONETIC_WEIGHT: f64 = 0.15;
pub const CATEGORY_WEIGHT: f64 = 0.1;

/// Coarse character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharCategory {
    Letter,
    Digit,
    Whitespace,
    Other,
}

impl CharCategory {
    #[must_use]
    pub fn of(c: char) -> Self {
        if c.is_alphabetic() {
            Self::Letter
        } else if c.is_numeric() {
            Self::Digit
        } else if c.is_whitespace() {
            Self::Whitespace
        } else {
            Self::Other
        }
    }
}

/// Per-aspect similarity of two characters, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CharacterMatch {
    pub character_a: char,
    pub character_b: char,
    pub exact: f64,
    pub keyboard: f64,
    pub visual: f64,
    pub phonetic: f64,
    pub category: f64,
}

impl CharacterMatch {
    /// `0.4 * exact + 0.2 * keyboard + 0.15 * visual + 0.15 * phonetic + 0.1 * category`
    #[must_use]
    pub fn weighted_similarity(&self) -> f64 {
        self.exact * EXACT_WEIGHT
            + self.keyboard * KEYBOARD_WEIGHT
            + self.visual * VISUAL_WEIGHT
            + self.phonetic * PHONETIC_WEIGHT
            + self.category * CATEGORY_WEIGHT
    }
}

/// Compare two characters on every aspect.
///
/// # Examples
/// ```
/// use fuzzymatch::algorithms::character::compare_characters;
/// let m = compare_characters('c', 'k');
/// assert_eq!(m.phonetic, 1.0);
/// assert_eq!(m.exact, 0.0);
/// ```
#[must_use]
pub fn compare_characters(a: char, b: char) -> CharacterMatch {
    let mut buf_a = [0u8; 4];
    let mut buf_b = [0u8; 4];

    CharacterMatch {
        character_a: a,
        character_b: b,
        exact: score(a == b),
        keyboard: keyboard_distance(a.encode_utf8(&mut buf_a), b.encode_utf8(&mut buf_b)),
        visual: score(are_confusable_chars(a, b)),
        phonetic: score(sound_alike(a, b)),
        category: score(CharCategory::of(a) == CharCategory::of(b)),
    }
}

/// Letters that are the same ignoring case, or share a Soundex class.
fn sound_alike(a: char, b: char) -> bool {
    if !a.is_alphabetic() || !b.is_alphabetic() {
        return false;
    }
    if a.to_lowercase().eq(b.to_lowercase()) {
        return true;
    }
    matches!((soundex_code(a), soundex_code(b)), (Some(ca), Some(cb)) if ca == cb)
}

#[inline]
fn score(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}
