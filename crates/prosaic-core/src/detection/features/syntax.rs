//! Clause-join density.

use regex::Regex;
use std::sync::LazyLock;

use crate::word_lists::CONJUNCTIONS;

static CONJUNCTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = CONJUNCTIONS.join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("valid regex")
});

/// Mean of (commas + conjunctions) per sentence. Zero for no sentences.
pub fn syntax_complexity(sentences: &[String]) -> f64 {
    if sentences.is_empty() {
        return 0.0;
    }
    let total: usize = sentences.iter().map(|s| clause_joins(s)).sum();
    total as f64 / sentences.len() as f64
}

fn clause_joins(sentence: &str) -> usize {
    let commas = sentence.matches(',').count();
    commas + CONJUNCTION_PATTERN.find_iter(sentence).count()
}
