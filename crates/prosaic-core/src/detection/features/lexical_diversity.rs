//! Type–token ratio.

use std::collections::HashSet;

/// Distinct lower-cased words divided by total words. Zero for no words.
pub fn lexical_diversity(words: &[String]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let distinct: HashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
    distinct.len() as f64 / words.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(lexical_diversity(&[]), 0.0);
    }

    #[test]
    fn all_distinct_is_one() {
        assert_eq!(lexical_diversity(&words("alpha beta gamma")), 1.0);
    }

    #[test]
    fn counts_case_insensitively() {
        assert_eq!(lexical_diversity(&words("Echo echo ECHO echo")), 0.25);
    }
}
