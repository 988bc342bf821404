//! String normalization utilities
//!
//! Prepares strings for comparison. The default pipeline folds Latin
//! diacritics through a fixed character map, lowercases, trims and collapses
//! whitespace. Inputs are never modified in place; every function returns a
//! new `String`.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Fixed Latin accent map (accented char -> base char).
static ACCENT_MAP: LazyLock<AHashMap<char, char>> = LazyLock::new(|| {
    const GROUPS: &[(&str, char)] = &[
        ("àáâãäåæ", 'a'),
        ("ç", 'c'),
        ("èéêë", 'e'),
        ("ìíîï", 'i'),
        ("ñ", 'n'),
        ("òóôõöø", 'o'),
        ("ùúûü", 'u'),
        ("ýÿ", 'y'),
        ("ÀÁÂÃÄÅÆ", 'A'),
        ("Ç", 'C'),
        ("ÈÉÊË", 'E'),
        ("ÌÍÎÏ", 'I'),
        ("Ñ", 'N'),
        ("ÒÓÔÕÖØ", 'O'),
        ("ÙÚÛÜ", 'U'),
        ("ÝŸ", 'Y'),
    ];

    let mut map = AHashMap::with_capacity(64);
    for (accented, base) in GROUPS {
        for c in accented.chars() {
            map.insert(c, *base);
        }
    }
    tracing::debug!(entries = map.len(), "accent map built");
    map
});

/// Normalization mode for string preprocessing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMode {
    /// Return the input unchanged
    None,
    /// Convert to lowercase only
    Lowercase,
    /// Convert to uppercase only
    Uppercase,
    /// Trim leading and trailing whitespace only
    TrimWhitespace,
    /// Fold accents through the fixed Latin map only
    RemoveAccents,
    /// The default pipeline ([`NormalizationConfig::default`])
    Full,
    /// NFKD decomposition with combining marks stripped, then the default pipeline.
    /// Folds diacritics the fixed map does not know about (e.g. `ő`, `š`).
    Unicode,
}

/// Which normalization steps to apply.
///
/// Steps run in a fixed order: accents, case, punctuation, numbers,
/// trim, collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationConfig {
    pub lowercase: bool,
    pub trim_whitespace: bool,
    pub remove_accents: bool,
    pub collapse_whitespace: bool,
    pub remove_punctuation: bool,
    pub remove_numbers: bool,
    /// Overrides `lowercase` when set
    pub preserve_case: bool,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            trim_whitespace: true,
            remove_accents: true,
            collapse_whitespace: true,
            remove_punctuation: false,
            remove_numbers: false,
            preserve_case: false,
        }
    }
}

impl NormalizationConfig {
    /// Everything on: also strips punctuation and digits.
    #[must_use]
    pub fn aggressive() -> Self {
        Self {
            remove_punctuation: true,
            remove_numbers: true,
            ..Self::default()
        }
    }

    /// Trim only, case preserved.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            lowercase: false,
            trim_whitespace: true,
            remove_accents: false,
            collapse_whitespace: false,
            remove_punctuation: false,
            remove_numbers: false,
            preserve_case: true,
        }
    }
}

/// Normalize with the default pipeline: accent-folded, lowercase, trimmed,
/// internal whitespace runs collapsed to one space.
///
/// # Examples
/// ```
/// use fuzzymatch::algorithms::normalize::normalize;
/// assert_eq!(normalize("  Crème   Brûlée "), "creme brulee");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    normalize_with_config(text, &NormalizationConfig::default())
}

/// Normalize with an explicit set of steps.
#[must_use]
pub fn normalize_with_config(text: &str, config: &NormalizationConfig) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut result = text.to_string();

    if config.remove_accents {
        result = remove_accents(&result);
    }
    if config.lowercase && !config.preserve_case {
        result = to_lowercase(&result);
    }
    if config.remove_punctuation {
        result = remove_punctuation(&result, true);
    }
    if config.remove_numbers {
        result = remove_numbers(&result);
    }
    if config.trim_whitespace {
        result = trim_whitespace(&result);
    }
    if config.collapse_whitespace {
        result = collapse_whitespace(&result);
    }

    result
}

/// Normalize a string according to the specified mode
#[must_use]
pub fn normalize_with_mode(text: &str, mode: NormalizationMode) -> String {
    match mode {
        NormalizationMode::None => text.to_string(),
        NormalizationMode::Lowercase => to_lowercase(text),
        NormalizationMode::Uppercase => to_uppercase(text),
        NormalizationMode::TrimWhitespace => trim_whitespace(text),
        NormalizationMode::RemoveAccents => remove_accents(text),
        NormalizationMode::Full => normalize(text),
        NormalizationMode::Unicode => normalize(&fold_unicode(text)),
    }
}

/// Normalize both strings according to the specified mode
#[must_use]
pub fn normalize_pair(a: &str, b: &str, mode: NormalizationMode) -> (String, String) {
    (normalize_with_mode(a, mode), normalize_with_mode(b, mode))
}

#[must_use]
pub fn to_lowercase(text: &str) -> String {
    text.to_lowercase()
}

#[must_use]
pub fn to_uppercase(text: &str) -> String {
    text.to_uppercase()
}

#[must_use]
pub fn trim_whitespace(text: &str) -> String {
    text.trim().to_string()
}

/// Replace every run of whitespace with a single space.
///
/// Leading/trailing runs become a single space too; trim first if they
/// should disappear.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut last_was_space = false;

    for c in text.chars() {
        if c.is_whitespace() {
            if !last_was_space {
                result.push(' ');
                last_was_space = true;
            }
        } else {
            result.push(c);
            last_was_space = false;
        }
    }

    result
}

/// Fold accented Latin characters through the fixed map (é → e, Ñ → N).
#[must_use]
pub fn remove_accents(text: &str) -> String {
    text.chars().map(remove_accent_from_char).collect()
}

#[must_use]
pub fn remove_accent_from_char(c: char) -> char {
    ACCENT_MAP.get(&c).copied().unwrap_or(c)
}

#[must_use]
pub fn is_accented_char(c: char) -> bool {
    ACCENT_MAP.contains_key(&c)
}

/// Keep alphanumerics (and whitespace when `keep_spaces`).
#[must_use]
pub fn remove_punctuation(text: &str, keep_spaces: bool) -> String {
    keep_alphanumeric(text, keep_spaces)
}

#[must_use]
pub fn remove_numbers(text: &str) -> String {
    text.chars().filter(|c| !c.is_numeric()).collect()
}

#[must_use]
pub fn keep_alphanumeric(text: &str, keep_spaces: bool) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || (keep_spaces && c.is_whitespace()))
        .collect()
}

/// NFKD-decompose and drop combining marks.
fn fold_unicode(text: &str) -> String {
    use unicode_normalization::char::is_combining_mark;
    use unicode_normalization::UnicodeNormalization;

    text.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_normalize() {
        assert_eq!(normalize("Hello World"), "hello world");
        assert_eq!(normalize("  Café  "), "cafe");
        assert_eq!(normalize("Niño\t\n España"), "nino espana");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_keeps_punctuation() {
        assert_eq!(normalize("Hello, World!"), "hello, world!");
    }

    #[test]
    fn test_aggressive() {
        let config = NormalizationConfig::aggressive();
        assert_eq!(normalize_with_config("  R2-D2, Über! ", &config), "rd uber");
    }

    #[test]
    fn test_minimal() {
        let config = NormalizationConfig::minimal();
        assert_eq!(normalize_with_config("  Café  ", &config), "Café");
    }

    #[test]
    fn test_modes() {
        assert_eq!(normalize_with_mode(" Ab ", NormalizationMode::None), " Ab ");
        assert_eq!(normalize_with_mode("Ab", NormalizationMode::Uppercase), "AB");
        assert_eq!(normalize_with_mode(" Ab ", NormalizationMode::TrimWhitespace), "Ab");
        assert_eq!(normalize_with_mode("Ünïcödé", NormalizationMode::RemoveAccents), "Unicode");
    }

    #[test]
    fn test_unicode_mode_folds_beyond_fixed_map() {
        // ő and š are outside the fixed Latin map
        assert_eq!(normalize("Erdős"), "erdős");
        assert_eq!(normalize_with_mode("Erdős Šimon", NormalizationMode::Unicode), "erdos simon");
    }

    #[test]
    fn test_accent_helpers() {
        assert!(is_accented_char('é'));
        assert!(!is_accented_char('e'));
        assert_eq!(remove_accent_from_char('Ø'), 'O');
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("a  b\t\tc"), "a b c");
    }

    #[test]
    fn test_normalize_pair() {
        let (a, b) = normalize_pair("Hello", "WORLD", NormalizationMode::Lowercase);
        assert_eq!(a, "hello");
        assert_eq!(b, "world");
    }
}
