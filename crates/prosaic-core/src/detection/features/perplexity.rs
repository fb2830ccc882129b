//! Perplexity proxy from local n-gram entropy.

use std::collections::HashMap;

/// Mean Shannon entropy (bits) of the bigram and trigram distributions.
///
/// N-grams overlap with stride 1 over the lower-cased words. Only observed
/// n-grams contribute. Higher means more varied word transitions.
pub fn perplexity_proxy(words: &[String]) -> f64 {
    let lower: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
    let bigram = entropy(&ngram_counts(&lower, 2));
    let trigram = entropy(&ngram_counts(&lower, 3));
    (bigram + trigram) / 2.0
}

fn ngram_counts(words: &[String], n: usize) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    if words.len() < n {
        return counts;
    }
    for window in words.windows(n) {
        *counts.entry(window.join(" ")).or_insert(0) += 1;
    }
    counts
}

fn entropy(counts: &HashMap<String, usize>) -> f64 {
    let total: usize = counts.values().sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}
