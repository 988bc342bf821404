//! Multi-metric comparison
//!
//! [`compare_strings`] runs every algorithm family over one pair of strings
//! and collects the results in a [`StringMatch`]. [`get_similarity`] computes
//! just one metric. [`FuzzyMatcher`] carries a validated [`MatcherConfig`] so
//! the n-gram size, prefix weight and defaults can be tuned once.

use crate::algorithms::cosine::cosine;
use crate::algorithms::damerau::{
    damerau_levenshtein, damerau_levenshtein_similarity, optimal_alignment,
    optimal_alignment_similarity,
};
use crate::algorithms::hamming::{hamming, hamming_similarity};
use crate::algorithms::jaro::{jaro, jaro_winkler};
use crate::algorithms::keyboard::{is_probable_typo, keyboard_distance};
use crate::algorithms::lcs::{lcs_length, lcs_similarity, lcss_length, lcss_similarity};
use crate::algorithms::levenshtein::{levenshtein, levenshtein_similarity};
use crate::algorithms::ngram::{dice, jaccard};
use crate::algorithms::normalize::{normalize, normalize_pair, NormalizationMode};
use crate::algorithms::normalized_similarity;
use crate::algorithms::phonetic::{
    encodings_overlap, metaphone, metaphone_match, soundex, soundex_similarity,
};
use crate::algorithms::visual::visual_confusables;
use crate::config::{ConfigError, MatcherConfig};
use crate::search::{rank_candidates, MatchResult};
use crate::types::{Algorithm, StringMatch};
use std::time::Instant;

/// Normalize `input` with the default pipeline, or copy it unchanged.
#[inline]
#[must_use]
pub fn prepare(input: &str, normalize_input: bool) -> String {
    if normalize_input {
        normalize(input)
    } else {
        input.to_string()
    }
}

/// Compute every metric for `a` and `b`.
///
/// Equal prepared strings short-circuit to a perfect record (scores 1,
/// distances 0, every flag set). A prepared empty string on either side gives
/// a zero record: all scores 0 and distances equal to the other length.
/// `best_similarity` is the max of the normalized Levenshtein, Jaro-Winkler,
/// Dice, Jaccard and Cosine scores.
///
/// # Examples
/// ```
/// use fuzzymatch::compare_strings;
/// let m = compare_strings("apple", "applesauce", true);
/// assert_eq!(m.levenshtein_distance, 5);
/// assert_eq!(m.normalized_levenshtein, 0.5);
/// assert!(m.jaro_winkler_similarity > m.normalized_levenshtein);
/// ```
#[must_use]
pub fn compare_strings(a: &str, b: &str, normalize_input: bool) -> StringMatch {
    compare_with_config(a, b, &MatcherConfig::default().with_normalize(normalize_input))
}

/// [`compare_strings`], then `best_similarity` taken from the selected metric.
///
/// Edit distances become `1 - d / max(len)` over the prepared strings, an
/// undefined Hamming distance scores 0, LCS/LCSS lengths are divided by the
/// longer prepared length and the phonetic flags score 1 or 0. `Auto` keeps
/// the max-of-normalized fallback.
#[must_use]
pub fn compare_with_algorithm(
    a: &str,
    b: &str,
    algorithm: Algorithm,
    normalize_input: bool,
) -> StringMatch {
    let mut result = compare_strings(a, b, normalize_input);
    result.best_similarity = select_similarity(&result, algorithm);
    result
}

/// Compute a single similarity score in `[0, 1]`.
///
/// Only the requested metric runs. Equal prepared strings score 1.0, a
/// prepared empty string on either side scores 0.0, and `Auto` means
/// Jaro-Winkler.
///
/// # Examples
/// ```
/// use fuzzymatch::{get_similarity, Algorithm};
/// assert_eq!(get_similarity("Hello", "hello", Algorithm::Levenshtein, true), 1.0);
/// assert_eq!(get_similarity("", "abc", Algorithm::Auto, true), 0.0);
/// ```
#[must_use]
pub fn get_similarity(a: &str, b: &str, algorithm: Algorithm, normalize_input: bool) -> f64 {
    let config = MatcherConfig::default();
    similarity_of_prepared(
        &prepare(a, normalize_input),
        &prepare(b, normalize_input),
        algorithm,
        &config,
    )
}

/// Raw edit distance between `a` and `b`, without normalization.
///
/// Levenshtein, Damerau-Levenshtein, Optimal Alignment and Hamming map to
/// their algorithm; Hamming is `None` for unequal lengths. Every other
/// selector falls back to Levenshtein.
///
/// # Examples
/// ```
/// use fuzzymatch::{get_edit_distance, Algorithm};
/// assert_eq!(get_edit_distance("ca", "abc", Algorithm::DamerauLevenshtein), Some(2));
/// assert_eq!(get_edit_distance("abc", "abcd", Algorithm::Hamming), None);
/// assert_eq!(get_edit_distance("kitten", "sitting", Algorithm::Jaro), Some(3));
/// ```
#[must_use]
pub fn get_edit_distance(a: &str, b: &str, algorithm: Algorithm) -> Option<usize> {
    match algorithm {
        Algorithm::DamerauLevenshtein => Some(damerau_levenshtein(a, b)),
        Algorithm::OptimalAlignment => Some(optimal_alignment(a, b)),
        Algorithm::Hamming => hamming(a, b),
        _ => Some(levenshtein(a, b)),
    }
}

pub(crate) fn compare_with_config(a: &str, b: &str, config: &MatcherConfig) -> StringMatch {
    let start = Instant::now();

    let mode = if config.normalize {
        NormalizationMode::Full
    } else {
        NormalizationMode::None
    };
    let (prepared_a, prepared_b) = normalize_pair(a, b, mode);

    let mut result = if prepared_a == prepared_b {
        perfect_match(&prepared_a)
    } else if prepared_a.is_empty() || prepared_b.is_empty() {
        zero_match(&prepared_a, &prepared_b)
    } else {
        full_match(&prepared_a, &prepared_b, config)
    };

    result.string_a = a.to_string();
    result.string_b = b.to_string();
    result.prepared_a = prepared_a;
    result.prepared_b = prepared_b;
    result.best_similarity = result.max_normalized_similarity();
    result.computation_time_ms = start.elapsed().as_secs_f64() * 1000.0;

    tracing::debug!(
        best = result.best_similarity,
        elapsed_ms = result.computation_time_ms,
        "compared strings"
    );
    result
}

fn perfect_match(prepared: &str) -> StringMatch {
    let len = prepared.chars().count();
    let code = soundex(prepared);
    let encodings = metaphone(prepared, true);

    StringMatch {
        levenshtein_distance: 0,
        normalized_levenshtein: 1.0,
        damerau_levenshtein_distance: 0,
        hamming_distance: Some(0),
        optimal_alignment_distance: 0,
        jaro_similarity: 1.0,
        jaro_winkler_similarity: 1.0,
        longest_common_subsequence: len,
        longest_common_substring: len,
        dice_coefficient: 1.0,
        jaccard_index: 1.0,
        cosine_similarity: 1.0,
        soundex_a: code.clone(),
        soundex_b: code,
        soundex_match: true,
        metaphone_a: encodings.clone(),
        metaphone_b: encodings,
        metaphone_match: true,
        keyboard_distance: 1.0,
        visually_confusable: true,
        ..StringMatch::default()
    }
}

fn zero_match(prepared_a: &str, prepared_b: &str) -> StringMatch {
    let other_len = prepared_a.chars().count().max(prepared_b.chars().count());

    StringMatch {
        levenshtein_distance: other_len,
        damerau_levenshtein_distance: other_len,
        optimal_alignment_distance: other_len,
        hamming_distance: None,
        soundex_a: soundex(prepared_a),
        soundex_b: soundex(prepared_b),
        metaphone_a: metaphone(prepared_a, true),
        metaphone_b: metaphone(prepared_b, true),
        ..StringMatch::default()
    }
}

fn full_match(a: &str, b: &str, config: &MatcherConfig) -> StringMatch {
    let levenshtein_distance = levenshtein(a, b);
    let soundex_a = soundex(a);
    let soundex_b = soundex(b);
    let metaphone_a = metaphone(a, true);
    let metaphone_b = metaphone(b, true);
    let n = config.ngram_size;

    StringMatch {
        levenshtein_distance,
        normalized_levenshtein: normalized_similarity(levenshtein_distance, a, b),
        damerau_levenshtein_distance: damerau_levenshtein(a, b),
        hamming_distance: hamming(a, b),
        optimal_alignment_distance: optimal_alignment(a, b),
        jaro_similarity: jaro(a, b),
        jaro_winkler_similarity: jaro_winkler(a, b, config.prefix_weight),
        longest_common_subsequence: lcs_length(a, b),
        longest_common_substring: lcss_length(a, b),
        dice_coefficient: dice(a, b, n),
        jaccard_index: jaccard(a, b, n),
        cosine_similarity: cosine(a, b, n),
        soundex_match: soundex_a == soundex_b,
        soundex_a,
        soundex_b,
        metaphone_match: encodings_overlap(&metaphone_a, &metaphone_b),
        metaphone_a,
        metaphone_b,
        keyboard_distance: keyboard_distance(a, b),
        visually_confusable: visual_confusables(a, b),
        ..StringMatch::default()
    }
}

/// Read the score for `algorithm` off an already computed record.
fn select_similarity(result: &StringMatch, algorithm: Algorithm) -> f64 {
    let a = result.prepared_a.as_str();
    let b = result.prepared_b.as_str();
    let longest = a.chars().count().max(b.chars().count());
    let length_ratio = |len: usize| {
        if longest == 0 {
            1.0
        } else {
            len as f64 / longest as f64
        }
    };
    let flag = |set: bool| if set { 1.0 } else { 0.0 };

    match algorithm {
        Algorithm::Levenshtein => result.normalized_levenshtein,
        Algorithm::DamerauLevenshtein => {
            normalized_similarity(result.damerau_levenshtein_distance, a, b)
        }
        Algorithm::OptimalAlignment => {
            normalized_similarity(result.optimal_alignment_distance, a, b)
        }
        Algorithm::Hamming => result
            .hamming_distance
            .map_or(0.0, |d| normalized_similarity(d, a, b)),
        Algorithm::Jaro => result.jaro_similarity,
        Algorithm::JaroWinkler => result.jaro_winkler_similarity,
        Algorithm::Lcs => length_ratio(result.longest_common_subsequence),
        Algorithm::Lcss => length_ratio(result.longest_common_substring),
        Algorithm::Jaccard => result.jaccard_index,
        Algorithm::Dice => result.dice_coefficient,
        Algorithm::Cosine => result.cosine_similarity,
        Algorithm::Soundex => flag(result.soundex_match),
        Algorithm::Metaphone => flag(result.metaphone_match),
        Algorithm::KeyboardDistance => result.keyboard_distance,
        Algorithm::Auto => result.max_normalized_similarity(),
    }
}

/// Single-metric score of two already prepared strings.
pub(crate) fn similarity_of_prepared(
    a: &str,
    b: &str,
    algorithm: Algorithm,
    config: &MatcherConfig,
) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let n = config.ngram_size;
    match algorithm {
        Algorithm::Levenshtein => levenshtein_similarity(a, b),
        Algorithm::DamerauLevenshtein => damerau_levenshtein_similarity(a, b),
        Algorithm::OptimalAlignment => optimal_alignment_similarity(a, b),
        Algorithm::Hamming => hamming_similarity(a, b),
        Algorithm::Jaro => jaro(a, b),
        Algorithm::JaroWinkler | Algorithm::Auto => jaro_winkler(a, b, config.prefix_weight),
        Algorithm::Lcs => lcs_similarity(a, b),
        Algorithm::Lcss => lcss_similarity(a, b),
        Algorithm::Jaccard => jaccard(a, b, n),
        Algorithm::Dice => dice(a, b, n),
        Algorithm::Cosine => cosine(a, b, n),
        Algorithm::Soundex => soundex_similarity(a, b),
        Algorithm::Metaphone => {
            if metaphone_match(a, b) {
                1.0
            } else {
                0.0
            }
        }
        Algorithm::KeyboardDistance => keyboard_distance(a, b),
    }
}

/// Configured entry point to the matcher.
///
/// # Examples
/// ```
/// use fuzzymatch::{Algorithm, FuzzyMatcher, MatcherConfig};
///
/// let matcher = FuzzyMatcher::new(
///     MatcherConfig::new()
///         .with_algorithm(Algorithm::JaroWinkler)
///         .with_max_results(2),
/// )
/// .unwrap();
///
/// let best = matcher.best_matches("aple", &["apple", "apply", "maple", "orange"]);
/// assert_eq!(best.len(), 2);
/// assert!(!best.contains(&"orange".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FuzzyMatcher {
    config: MatcherConfig,
}

impl FuzzyMatcher {
    /// Create a matcher; fails if `config` does not validate.
    pub fn new(config: MatcherConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// All metrics, with `best_similarity` taken from the configured algorithm.
    #[must_use]
    pub fn compare(&self, a: &str, b: &str) -> StringMatch {
        let mut result = compare_with_config(a, b, &self.config);
        result.best_similarity = select_similarity(&result, self.config.algorithm);
        result
    }

    /// Score with the configured algorithm.
    #[must_use]
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        self.similarity_with(a, b, self.config.algorithm)
    }

    /// Score with an explicit algorithm, keeping the other settings.
    #[must_use]
    pub fn similarity_with(&self, a: &str, b: &str, algorithm: Algorithm) -> f64 {
        similarity_of_prepared(
            &prepare(a, self.config.normalize),
            &prepare(b, self.config.normalize),
            algorithm,
            &self.config,
        )
    }

    /// Edit distance for the configured algorithm, on the prepared strings.
    #[must_use]
    pub fn edit_distance(&self, a: &str, b: &str) -> Option<usize> {
        get_edit_distance(
            &prepare(a, self.config.normalize),
            &prepare(b, self.config.normalize),
            self.config.algorithm,
        )
    }

    /// Whether `b` is within `max_typo_distance` edits of `a` (and not equal).
    #[must_use]
    pub fn is_probable_typo(&self, a: &str, b: &str) -> bool {
        is_probable_typo(
            &prepare(a, self.config.normalize),
            &prepare(b, self.config.normalize),
            self.config.max_typo_distance,
        )
    }

    /// Ranked candidates scoring at least `min_similarity`, best first.
    #[must_use]
    pub fn best_matches<S: AsRef<str> + Sync>(&self, query: &str, candidates: &[S]) -> Vec<String> {
        self.best_matches_scored(query, candidates)
            .into_iter()
            .map(|m| m.text)
            .collect()
    }

    /// [`Self::best_matches`] with scores and candidate indices.
    #[must_use]
    pub fn best_matches_scored<S: AsRef<str> + Sync>(
        &self,
        query: &str,
        candidates: &[S],
    ) -> Vec<MatchResult> {
        let prepared_query = prepare(query, self.config.normalize);
        rank_candidates(
            candidates,
            self.config.max_results,
            self.config.min_similarity,
            |candidate| {
                similarity_of_prepared(
                    &prepared_query,
                    &prepare(candidate, self.config.normalize),
                    self.config.algorithm,
                    &self.config,
                )
            },
        )
    }
}
