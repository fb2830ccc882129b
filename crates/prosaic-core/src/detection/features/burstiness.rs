//! Sentence-length burstiness.

use crate::text;

use super::population_std_dev;

/// Standard deviation that maps to full burstiness.
const FULL_SPREAD_WORDS: f64 = 15.0;

/// Population std-dev of per-sentence word counts over 15, clamped to [0, 1].
///
/// Uniform sentence lengths give 0, which the scorer reads as machine-like.
pub fn burstiness(sentences: &[String]) -> f64 {
    let lengths: Vec<f64> = sentences
        .iter()
        .map(|s| text::count_words(s) as f64)
        .collect();
    (population_std_dev(&lengths) / FULL_SPREAD_WORDS).clamp(0.0, 1.0)
}
