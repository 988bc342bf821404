//! Algorithm selector and the aggregate comparison result

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an unknown algorithm name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    #[error("Unknown algorithm: {0}")]
    Unknown(String),
}

/// Which metric a single-score request should use.
///
/// `Auto` is a policy rather than a metric: single-score requests read it as
/// Jaro-Winkler, composite requests as the maximum of the normalized metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Insertions, deletions and substitutions
    Levenshtein,

    /// Levenshtein plus unrestricted adjacent transpositions
    DamerauLevenshtein,

    /// Levenshtein plus adjacent transpositions, each substring edited once
    OptimalAlignment,

    /// Substitutions only; undefined for unequal lengths
    Hamming,

    /// Matching characters within a window, with transpositions
    Jaro,

    /// Jaro with a common-prefix boost
    ///
    /// **Best for**: Person names, titles, short identifiers
    JaroWinkler,

    /// Longest common subsequence length over the longer length
    Lcs,

    /// Longest common substring length over the longer length
    Lcss,

    /// Distinct n-gram overlap
    Jaccard,

    /// Multiset n-gram overlap
    Dice,

    /// Angle between n-gram count vectors
    Cosine,

    /// 1.0 when Soundex codes match
    Soundex,

    /// 1.0 when any Metaphone encodings match
    Metaphone,

    /// Physical key proximity
    ///
    /// **Best for**: Typing errors on a QWERTY keyboard
    KeyboardDistance,

    #[default]
    Auto,
}

impl Algorithm {
    /// Every selector, `Auto` last.
    pub const ALL: [Algorithm; 15] = [
        Algorithm::Levenshtein,
        Algorithm::DamerauLevenshtein,
        Algorithm::OptimalAlignment,
        Algorithm::Hamming,
        Algorithm::Jaro,
        Algorithm::JaroWinkler,
        Algorithm::Lcs,
        Algorithm::Lcss,
        Algorithm::Jaccard,
        Algorithm::Dice,
        Algorithm::Cosine,
        Algorithm::Soundex,
        Algorithm::Metaphone,
        Algorithm::KeyboardDistance,
        Algorithm::Auto,
    ];

    /// Canonical snake_case name (the serde form).
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Levenshtein => "levenshtein",
            Algorithm::DamerauLevenshtein => "damerau_levenshtein",
            Algorithm::OptimalAlignment => "optimal_alignment",
            Algorithm::Hamming => "hamming",
            Algorithm::Jaro => "jaro",
            Algorithm::JaroWinkler => "jaro_winkler",
            Algorithm::Lcs => "lcs",
            Algorithm::Lcss => "lcss",
            Algorithm::Jaccard => "jaccard",
            Algorithm::Dice => "dice",
            Algorithm::Cosine => "cosine",
            Algorithm::Soundex => "soundex",
            Algorithm::Metaphone => "metaphone",
            Algorithm::KeyboardDistance => "keyboard_distance",
            Algorithm::Auto => "auto",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = AlgorithmError;

    /// Case-insensitive; `-`, spaces and `_` are interchangeable and a few
    /// common aliases are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        let algorithm = match key.as_str() {
            "levenshtein" | "edit" => Algorithm::Levenshtein,
            "damerau_levenshtein" | "damerau" => Algorithm::DamerauLevenshtein,
            "optimal_alignment" | "osa" => Algorithm::OptimalAlignment,
            "hamming" => Algorithm::Hamming,
            "jaro" => Algorithm::Jaro,
            "jaro_winkler" | "jarowinkler" => Algorithm::JaroWinkler,
            "lcs" => Algorithm::Lcs,
            "lcss" => Algorithm::Lcss,
            "jaccard" => Algorithm::Jaccard,
            "dice" => Algorithm::Dice,
            "cosine" => Algorithm::Cosine,
            "soundex" => Algorithm::Soundex,
            "metaphone" => Algorithm::Metaphone,
            "keyboard_distance" | "keyboard" => Algorithm::KeyboardDistance,
            "auto" => Algorithm::Auto,
            _ => return Err(AlgorithmError::Unknown(s.to_string())),
        };
        Ok(algorithm)
    }
}

/// Every metric computed by one comparison of two strings.
///
/// Built once per [`crate::compare_strings`] call and never mutated after.
/// Lengths and distances are in characters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StringMatch {
    pub string_a: String,
    pub string_b: String,
    /// Inputs after optional normalization; every metric is computed on these
    pub prepared_a: String,
    pub prepared_b: String,

    pub levenshtein_distance: usize,
    pub normalized_levenshtein: f64,
    pub damerau_levenshtein_distance: usize,
    /// `None` when the prepared strings differ in length
    pub hamming_distance: Option<usize>,
    pub optimal_alignment_distance: usize,

    pub jaro_similarity: f64,
    pub jaro_winkler_similarity: f64,

    pub longest_common_subsequence: usize,
    pub longest_common_substring: usize,

    pub dice_coefficient: f64,
    pub jaccard_index: f64,
    pub cosine_similarity: f64,

    pub soundex_a: String,
    pub soundex_b: String,
    pub soundex_match: bool,
    pub metaphone_a: Vec<String>,
    pub metaphone_b: Vec<String>,
    pub metaphone_match: bool,

    pub keyboard_distance: f64,
    pub visually_confusable: bool,

    /// Headline score in `[0, 1]`
    pub best_similarity: f64,
    pub computation_time_ms: f64,
}

impl StringMatch {
    /// The largest of the normalized Levenshtein, Jaro-Winkler, Dice,
    /// Jaccard and Cosine scores.
    #[must_use]
    pub fn max_normalized_similarity(&self) -> f64 {
        [
            self.normalized_levenshtein,
            self.jaro_winkler_similarity,
            self.dice_coefficient,
            self.jaccard_index,
            self.cosine_similarity,
        ]
        .into_iter()
        .fold(0.0, f64::max)
    }
}
