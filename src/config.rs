//! Matcher configuration
//!
//! The algorithm functions take their parameters directly and never fail.
//! [`MatcherConfig`] bundles the tunables for [`crate::FuzzyMatcher`] and is
//! checked once, up front, by [`MatcherConfig::validate`].

use crate::algorithms::jaro::{DEFAULT_PREFIX_SCALE, MAX_PREFIX_SCALE};
use crate::algorithms::keyboard::DEFAULT_MAX_TYPO_DISTANCE;
use crate::algorithms::ngram::{DEFAULT_NGRAM_SIZE, MAX_NGRAM_SIZE};
use crate::types::Algorithm;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default cap on the number of best matches returned.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Default minimum score for a candidate to be returned.
pub const DEFAULT_MIN_SIMILARITY: f64 = 0.5;

/// Errors reported by [`MatcherConfig::validate`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("ngram_size must be in range [1, {max}], got {0}", max = MAX_NGRAM_SIZE)]
    InvalidNgramSize(usize),

    #[error(
        "prefix_weight must be a finite number in range [0.0, {max}], got {0} (values > {max} can produce scores > 1.0)",
        max = MAX_PREFIX_SCALE
    )]
    InvalidPrefixWeight(f64),

    #[error("min_similarity must be a finite number in range [0.0, 1.0], got {0}")]
    InvalidMinSimilarity(f64),

    #[error("max_results must be at least 1")]
    ZeroMaxResults,
}

/// Tunables for a [`crate::FuzzyMatcher`].
///
/// Missing fields take their defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Normalize inputs before comparing (accents, case, whitespace)
    pub normalize: bool,
    /// N-gram size for Dice, Jaccard and Cosine
    pub ngram_size: usize,
    /// Jaro-Winkler prefix scale
    pub prefix_weight: f64,
    /// Largest Optimal-Alignment distance still reported as a typo
    pub max_typo_distance: usize,
    /// Metric for single-score requests and ranking
    pub algorithm: Algorithm,
    pub max_results: usize,
    pub min_similarity: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            normalize: true,
            ngram_size: DEFAULT_NGRAM_SIZE,
            prefix_weight: DEFAULT_PREFIX_SCALE,
            max_typo_distance: DEFAULT_MAX_TYPO_DISTANCE,
            algorithm: Algorithm::Auto,
            max_results: DEFAULT_MAX_RESULTS,
            min_similarity: DEFAULT_MIN_SIMILARITY,
        }
    }
}

impl MatcherConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    #[must_use]
    pub fn with_ngram_size(mut self, ngram_size: usize) -> Self {
        self.ngram_size = ngram_size;
        self
    }

    #[must_use]
    pub fn with_prefix_weight(mut self, prefix_weight: f64) -> Self {
        self.prefix_weight = prefix_weight;
        self
    }

    #[must_use]
    pub fn with_max_typo_distance(mut self, max_typo_distance: usize) -> Self {
        self.max_typo_distance = max_typo_distance;
        self
    }

    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    #[must_use]
    pub fn with_min_similarity(mut self, min_similarity: f64) -> Self {
        self.min_similarity = min_similarity;
        self
    }

    /// Check every field against its valid range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_NGRAM_SIZE).contains(&self.ngram_size) {
            return Err(ConfigError::InvalidNgramSize(self.ngram_size));
        }
        if !self.prefix_weight.is_finite() || !(0.0..=MAX_PREFIX_SCALE).contains(&self.prefix_weight) {
            return Err(ConfigError::InvalidPrefixWeight(self.prefix_weight));
        }
        if !self.min_similarity.is_finite() || !(0.0..=1.0).contains(&self.min_similarity) {
            return Err(ConfigError::InvalidMinSimilarity(self.min_similarity));
        }
        if self.max_results == 0 {
            return Err(ConfigError::ZeroMaxResults);
        }
        Ok(())
    }
}
