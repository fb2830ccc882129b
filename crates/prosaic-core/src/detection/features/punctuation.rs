//! Punctuation rhythm.

use super::population_std_dev;

/// Std-dev (in marks) at which regularity reaches zero.
const IRREGULAR_SPREAD: f64 = 3.0;

/// `1 - stddev/3` of per-sentence `, ; : . ! ?` counts, clamped to [0, 1].
///
/// Higher means a more uniform rhythm. Zero for no sentences.
pub fn punctuation_regularity(sentences: &[String]) -> f64 {
    if sentences.is_empty() {
        return 0.0;
    }
    let counts: Vec<f64> = sentences.iter().map(|s| punctuation_marks(s) as f64).collect();
    (1.0 - population_std_dev(&counts) / IRREGULAR_SPREAD).clamp(0.0, 1.0)
}

fn punctuation_marks(sentence: &str) -> usize {
    sentence
        .chars()
        .filter(|c| matches!(c, ',' | ';' | ':' | '.' | '!' | '?'))
        .count()
}
