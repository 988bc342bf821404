//! Phonetic matching algorithms
//!
//! These encode strings by how they sound, useful for name matching
//! and handling spelling variations of the same pronunciation.
//!
//! # Algorithms
//! - **Soundex**: first character plus three digits, zero padded
//! - **Metaphone**: a compact consonant skeleton of at most four symbols,
//!   with an optional secondary encoding where `TH` is read as `T` instead of `0`

use super::Similarity;
use ahash::AHashMap;
use std::sync::LazyLock;

/// Soundex digit for each coded letter (uppercase keys).
static SOUNDEX_TABLE: LazyLock<AHashMap<char, char>> = LazyLock::new(|| {
    const CLASSES: &[(&str, char)] = &[
        ("BFPV", '1'),
        ("CGJKQSXZ", '2'),
        ("DT", '3'),
        ("L", '4'),
        ("MN", '5'),
        ("R", '6'),
    ];

    let mut table = AHashMap::with_capacity(20);
    for (letters, digit) in CLASSES {
        for c in letters.chars() {
            table.insert(c, *digit);
        }
    }
    tracing::debug!(entries = table.len(), "soundex table built");
    table
});

/// Length of a Soundex code.
pub const SOUNDEX_LENGTH: usize = 4;

/// Maximum length of a primary Metaphone encoding before encoding stops.
pub const METAPHONE_MAX_LENGTH: usize = 4;

/// Soundex phonetic encoder
///
/// Stateless encoder - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Soundex;

impl Soundex {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Encode a string to its Soundex code
    #[must_use]
    pub fn encode(&self, s: &str) -> String {
        soundex(s)
    }
}

impl Similarity for Soundex {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        soundex_similarity(a, b)
    }

    fn name(&self) -> &'static str {
        "soundex"
    }
}

/// Metaphone phonetic encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metaphone {
    /// Also produce the secondary encoding when it differs
    pub double: bool,
}

impl Default for Metaphone {
    fn default() -> Self {
        Self { double: true }
    }
}

impl Metaphone {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn single() -> Self {
        Self { double: false }
    }

    #[must_use]
    pub fn encode(&self, s: &str) -> Vec<String> {
        metaphone(s, self.double)
    }
}

impl Similarity for Metaphone {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        if encodings_overlap(&metaphone(a, self.double), &metaphone(b, self.double)) {
            1.0
        } else {
            0.0
        }
    }

    fn name(&self) -> &'static str {
        "metaphone"
    }
}

/// Soundex digit of a letter, or `None` for vowels, H, W, Y and non-letters.
#[inline]
#[must_use]
pub fn soundex_code(c: char) -> Option<char> {
    SOUNDEX_TABLE.get(&c.to_ascii_uppercase()).copied()
}

/// Soundex code of `input`: the uppercased first character followed by
/// three digits.
///
/// The first character is kept as is and is not itself coded, so a second
/// letter from the same class still produces a digit. Adjacent letters with
/// the same digit collapse, vowels and H/W/Y do not separate them, and any
/// non-letter does. An empty input yields `"0000"`.
///
/// # Examples
/// ```
/// use fuzzymatch::algorithms::phonetic::soundex;
/// assert_eq!(soundex("Robert"), "R163");
/// assert_eq!(soundex("Rupert"), "R163");
/// assert_eq!(soundex(""), "0000");
/// ```
#[must_use]
pub fn soundex(input: &str) -> String {
    let mut chars = input.chars();

    let Some(first) = chars.next() else {
        return "0".repeat(SOUNDEX_LENGTH);
    };

    // Only the first char of a multi-char uppercase form ("ß" -> "SS") is kept
    let mut code = String::with_capacity(SOUNDEX_LENGTH);
    code.push(first.to_uppercase().next().unwrap_or(first));

    let mut emitted = 1usize;
    let mut last_digit = '0';
    for c in chars {
        if emitted >= SOUNDEX_LENGTH {
            break;
        }
        match SOUNDEX_TABLE.get(&c.to_ascii_uppercase()) {
            Some(&digit) => {
                if digit != last_digit {
                    code.push(digit);
                    emitted += 1;
                    last_digit = digit;
                }
            }
            None if !c.is_alphabetic() => last_digit = '0',
            None => {}
        }
    }

    for _ in emitted..SOUNDEX_LENGTH {
        code.push('0');
    }
    code
}

/// Whether two strings share a Soundex code.
#[must_use]
pub fn soundex_match(a: &str, b: &str) -> bool {
    soundex(a) == soundex(b)
}

/// 1.0 when the Soundex codes match, 0.0 otherwise.
#[must_use]
pub fn soundex_similarity(a: &str, b: &str) -> f64 {
    if soundex_match(a, b) {
        1.0
    } else {
        0.0
    }
}

/// Simplified Metaphone encoding.
///
/// Returns the primary encoding, followed by the secondary one when `double`
/// is set and the two differ. Encoding stops once the primary reaches four
/// symbols (a trailing `X` can still add two). An empty input yields a single
/// empty encoding.
///
/// Rules, applied to the uppercased input:
/// - a leading `GN`, `KN`, `PN` or `WR` drops its first letter; a leading `X` is `S`
/// - vowels (and `Y`) are kept only in first position
/// - `CH` → `X`, `C` before `E`/`I`/`Y` → `S`, otherwise `C` → `K`
/// - `PH` → `F`, `GH` → `K`, `Q` → `K`, `D` → `T`, `V` → `F`, `X` → `KS`, `Z` → `S`
/// - `TH` → `0` in the primary and `T` in the secondary encoding
/// - `H` is kept only after a non-letter (or at the start) and before a letter
///
/// # Examples
/// ```
/// use fuzzymatch::algorithms::phonetic::metaphone;
/// assert_eq!(metaphone("Thomas", true), vec!["0MS", "TMS"]);
/// assert_eq!(metaphone("Knight", false), vec!["NKT"]);
/// ```
#[must_use]
pub fn metaphone(input: &str, double: bool) -> Vec<String> {
    if input.is_empty() {
        return vec![String::new()];
    }

    let chars: Vec<char> = input.to_uppercase().chars().collect();
    let len = chars.len();

    let mut primary = String::new();
    let mut secondary = String::new();
    let mut pos = 0usize;

    if len > 1 {
        match (chars[0], chars[1]) {
            ('G' | 'K' | 'P', 'N') | ('W', 'R') => pos = 1,
            ('X', _) => {
                primary.push('S');
                secondary.push('S');
                pos = 1;
            }
            _ => {}
        }
    }

    while pos < len && primary.len() < METAPHONE_MAX_LENGTH {
        let c = chars[pos];
        let next = chars.get(pos + 1).copied();

        // (primary, secondary) symbols for this position
        let emitted: Option<(&str, &str)> = match c {
            'A' | 'E' | 'I' | 'O' | 'U' | 'Y' => {
                if pos == 0 {
                    primary.push(c);
                    secondary.push(c);
                }
                None
            }
            'B' => {
                if next == Some('B') {
                    pos += 1;
                }
                Some(("B", "B"))
            }
            'C' => match next {
                Some('H') => {
                    pos += 1;
                    Some(("X", "X"))
                }
                Some('I' | 'E' | 'Y') => Some(("S", "S")),
                _ => Some(("K", "K")),
            },
            'D' => Some(("T", "T")),
            'F' => Some(("F", "F")),
            'G' => {
                if next == Some('H') {
                    pos += 1;
                }
                Some(("K", "K"))
            }
            'H' => {
                let after_break = pos == 0 || !chars[pos - 1].is_alphabetic();
                let before_letter = next.is_some_and(char::is_alphabetic);
                (after_break && before_letter).then_some(("H", "H"))
            }
            'J' => Some(("J", "J")),
            'K' => Some(("K", "K")),
            'L' => Some(("L", "L")),
            'M' => Some(("M", "M")),
            'N' => Some(("N", "N")),
            'P' => {
                if next == Some('H') {
                    pos += 1;
                    Some(("F", "F"))
                } else {
                    Some(("P", "P"))
                }
            }
            'Q' => Some(("K", "K")),
            'R' => Some(("R", "R")),
            'S' => Some(("S", "S")),
            'T' => {
                if next == Some('H') {
                    pos += 1;
                    Some(("0", "T"))
                } else {
                    Some(("T", "T"))
                }
            }
            'V' => Some(("F", "F")),
            'W' => Some(("W", "W")),
            'X' => Some(("KS", "KS")),
            'Z' => Some(("S", "S")),
            _ => None,
        };

        if let Some((p, s)) = emitted {
            primary.push_str(p);
            secondary.push_str(s);
        }
        pos += 1;
    }

    if double && secondary != primary {
        vec![primary, secondary]
    } else {
        vec![primary]
    }
}

/// Whether any Metaphone encoding of `a` equals any encoding of `b`
/// (double encodings on both sides).
#[must_use]
pub fn metaphone_match(a: &str, b: &str) -> bool {
    encodings_overlap(&metaphone(a, true), &metaphone(b, true))
}

/// True if two strings "sound alike": same Soundex code, or any shared
/// Metaphone encoding.
///
/// # Examples
/// ```
/// use fuzzymatch::algorithms::phonetic::phonetically_equal;
/// assert!(phonetically_equal("Catherine", "Kathryn"));
/// assert!(!phonetically_equal("apple", "orange"));
/// ```
#[must_use]
pub fn phonetically_equal(a: &str, b: &str) -> bool {
    soundex_match(a, b) || metaphone_match(a, b)
}

/// Whether two encoding lists share at least one entry.
#[inline]
pub(crate) fn encodings_overlap(a: &[String], b: &[String]) -> bool {
    a.iter().any(|ea| b.iter().any(|eb| ea == eb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soundex_reference() {
        assert_eq!(soundex("Robert"), "R163");
        assert_eq!(soundex("Rupert"), "R163");
        assert_eq!(soundex("Ashcraft"), "A261");
        assert_eq!(soundex("Lee"), "L000");
    }

    #[test]
    fn test_soundex_edge_cases() {
        assert_eq!(soundex(""), "0000");
        assert_eq!(soundex("a"), "A000");
        assert_eq!(soundex("robert"), soundex("ROBERT"));
        assert_eq!(soundex("123"), "1000");
    }

    #[test]
    fn test_soundex_first_letter_not_coded() {
        // P and F share a class, but the leading P does not suppress F
        assert_eq!(soundex("Pfister"), "P123");
    }

    #[test]
    fn test_soundex_separators() {
        // vowels do not separate equal digits, non-letters do
        assert_eq!(soundex("Tymczak"), "T520");
        assert_eq!(soundex("Ab-b"), "A110");
    }

    #[test]
    fn test_soundex_multi_char_uppercase() {
        // "ß" uppercases to "SS"; the second S must not be coded
        assert_eq!(soundex("ßa"), "S000");
        assert_eq!(soundex("aß"), "A000");
        assert_eq!(soundex("ßa").chars().count(), 4);
    }

    #[test]
    fn test_soundex_code() {
        assert_eq!(soundex_code('b'), Some('1'));
        assert_eq!(soundex_code('R'), Some('6'));
        assert_eq!(soundex_code('a'), None);
        assert_eq!(soundex_code('7'), None);
    }

    #[test]
    fn test_metaphone_basic() {
        assert_eq!(metaphone("", true), vec![String::new()]);
        assert_eq!(metaphone("Phone", false), vec!["FN"]);
        assert_eq!(metaphone("Knight", false), vec!["NKT"]);
        assert_eq!(metaphone("Xavier", false), vec!["SFR"]);
        assert_eq!(metaphone("apple", false), vec!["APPL"]);
    }

    #[test]
    fn test_metaphone_double() {
        assert_eq!(metaphone("Thomas", true), vec!["0MS", "TMS"]);
        assert_eq!(metaphone("Thomas", false), vec!["0MS"]);
        // no TH: secondary equals primary and is dropped
        assert_eq!(metaphone("Mark", true), vec!["MRK"]);
    }

    #[test]
    fn test_metaphone_soft_c() {
        assert_eq!(metaphone("Cicero", false), vec!["SSR"]);
        assert_eq!(metaphone("Church", false), vec!["XRX"]);
    }

    #[test]
    fn test_metaphone_stops_at_four() {
        assert_eq!(metaphone("Bartholomew", false), vec!["BR0L"]);
    }

    #[test]
    fn test_phonetically_equal() {
        assert!(phonetically_equal("Robert", "Rupert"));
        assert!(phonetically_equal("Catherine", "Kathryn"));
        assert!(!phonetically_equal("apple", "orange"));
    }

    #[test]
    fn test_structs() {
        assert_eq!(Soundex::new().encode("Robert"), "R163");
        assert_eq!(Similarity::similarity(&Soundex::new(), "Robert", "Rupert"), 1.0);
        assert_eq!(Similarity::similarity(&Metaphone::new(), "Thomas", "Tomas"), 1.0);
        assert_eq!(Metaphone::single().encode("Thomas"), vec!["0MS"]);
    }
}
