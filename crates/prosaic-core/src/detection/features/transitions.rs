//! Formal connector overuse.

use regex::Regex;
use std::sync::LazyLock;

use crate::word_lists::TRANSITIONS;

/// One whole-word pattern per connector, so overlapping entries each count.
static TRANSITION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    TRANSITIONS
        .iter()
        .map(|t| Regex::new(&format!(r"\b{}\b", regex::escape(t))).expect("valid regex"))
        .collect()
});

/// Connector occurrences per 100 words.
///
/// Matches whole words and phrases anywhere in the lower-cased document.
/// `word_count` is the document's word-list length; zero is treated as one.
pub fn transition_overuse(text: &str, word_count: usize) -> f64 {
    let lower = text.to_lowercase();
    let hits: usize = TRANSITION_PATTERNS
        .iter()
        .map(|pattern| pattern.find_iter(&lower).count())
        .sum();
    hits as f64 / word_count.max(1) as f64 * 100.0
}
