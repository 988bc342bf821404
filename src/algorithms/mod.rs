//! Core string similarity algorithms
//!
//! Every algorithm family is a set of standalone free functions, plus small
//! metric structs implementing the traits below so callers can pass a metric
//! around as a value (see [`crate::search::find_best_matches_with`]).

pub mod character;
pub mod cosine;
pub mod damerau;
pub mod hamming;
pub mod jaro;
pub mod keyboard;
pub mod lcs;
pub mod levenshtein;
pub mod ngram;
pub mod normalize;
pub mod phonetic;
pub mod visual;

pub use character::*;
pub use cosine::*;
pub use damerau::*;
pub use hamming::*;
pub use jaro::*;
pub use keyboard::*;
pub use lcs::*;
pub use levenshtein::*;
pub use ngram::*;
pub use phonetic::*;
pub use visual::*;

/// Trait for all similarity metrics.
/// Returns a value between 0.0 (completely different) and 1.0 (identical).
pub trait Similarity: Send + Sync {
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Convenience method for distance (1.0 - similarity)
    fn distance(&self, a: &str, b: &str) -> f64 {
        1.0 - self.similarity(a, b)
    }

    /// Name of the algorithm for debugging/logging
    fn name(&self) -> &'static str;
}

/// Trait for edit distance algorithms that return integer distances
pub trait EditDistance: Send + Sync {
    fn distance(&self, a: &str, b: &str) -> usize;

    /// Length-normalized similarity: `1 - distance / max(len(a), len(b))`.
    fn similarity(&self, a: &str, b: &str) -> f64 {
        normalized_similarity(self.distance(a, b), a, b)
    }

    fn name(&self) -> &'static str;
}

/// Any EditDistance is also a Similarity
impl<T: EditDistance> Similarity for T {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        EditDistance::similarity(self, a, b)
    }

    fn name(&self) -> &'static str {
        EditDistance::name(self)
    }
}

/// Trait for edit distances that are only defined on part of the input domain.
///
/// Hamming distance is the only member: it has no value for strings of
/// different lengths, which is reported as `None` rather than a magic number.
pub trait FallibleEditDistance: Send + Sync {
    fn distance(&self, a: &str, b: &str) -> Option<usize>;

    fn similarity(&self, a: &str, b: &str) -> Option<f64> {
        self.distance(a, b).map(|dist| normalized_similarity(dist, a, b))
    }

    fn name(&self) -> &'static str;
}

/// Convert an edit distance to a 0-1 similarity using the longer length.
///
/// Two empty strings are identical (1.0). The result is clamped so a
/// distance larger than the longer length can never go negative.
#[inline]
#[must_use]
pub fn normalized_similarity(distance: usize, a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        1.0
    } else {
        (1.0 - distance as f64 / max_len as f64).clamp(0.0, 1.0)
    }
}
