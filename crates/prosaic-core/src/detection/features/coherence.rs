//! Adjacent-sentence word overlap.

use std::collections::HashSet;

use crate::text;

/// Mean Jaccard similarity of lower-cased word sets over adjacent pairs.
///
/// Zero when fewer than two sentences exist. Pairs whose union is empty
/// contribute zero.
pub fn semantic_coherence(sentences: &[String]) -> f64 {
    if sentences.len() < 2 {
        return 0.0;
    }

    let sets: Vec<HashSet<String>> = sentences
        .iter()
        .map(|s| text::extract_lowercase_words(s).into_iter().collect())
        .collect();

    let total: f64 = sets.windows(2).map(|pair| jaccard(&pair[0], &pair[1])).sum();
    total / (sentences.len() - 1) as f64
}

fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn single_sentence_is_zero() {
        assert_eq!(semantic_coherence(&sentences(&["Only one here."])), 0.0);
        assert_eq!(semantic_coherence(&[]), 0.0);
    }

    #[test]
    fn identical_sentences_are_one() {
        let s = sentences(&["The sky is blue.", "The SKY is blue!"]);
        assert_eq!(semantic_coherence(&s), 1.0);
    }

    #[test]
    fn disjoint_sentences_are_zero() {
        let s = sentences(&["Cats purr.", "Dogs bark."]);
        assert_eq!(semantic_coherence(&s), 0.0);
    }

    #[test]
    fn averages_over_pairs() {
        // pair 1: {a,b} vs {b,c} = 1/3; pair 2: {b,c} vs {b,c} = 1
        let s = sentences(&["a b.", "b c.", "c b."]);
        assert!((semantic_coherence(&s) - (1.0 / 3.0 + 1.0) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn punctuation_only_pair_contributes_zero() {
        let s = sentences(&["!!!", "???"]);
        assert_eq!(semantic_coherence(&s), 0.0);
    }
}
