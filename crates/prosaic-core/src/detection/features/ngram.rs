//! Stock phrase predictability.

use aho_corasick::AhoCorasick;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::word_lists::STOCK_PHRASES;

static STOCK_PHRASE_MATCHER: LazyLock<AhoCorasick> =
    LazyLock::new(|| AhoCorasick::new(STOCK_PHRASES).expect("valid patterns"));

/// Number of distinct stock phrases present in the document, divided by 10.
///
/// Phrases match as literal substrings of the lower-cased text; repeats of
/// the same phrase count once. Not clamped here.
pub fn ngram_predictability(text: &str) -> f64 {
    let lower = text.to_lowercase();
    let found: HashSet<usize> = STOCK_PHRASE_MATCHER
        .find_overlapping_iter(&lower)
        .map(|m| m.pattern().as_usize())
        .collect();
    found.len() as f64 / 10.0
}
