//! Contextual synonym substitution.

use std::collections::HashMap;
use std::sync::LazyLock;

use rand::Rng;
use rand::seq::IndexedRandom;
use regex::{Captures, Regex};

use super::profiles::{self, ToneProfile};

/// Chance that any single match of a base word is replaced.
pub const SYNONYM_PROBABILITY: f64 = 0.4;

/// Case-insensitive whole-word matchers for every base word in the tables.
static WORD_MATCHERS: LazyLock<HashMap<&'static str, Regex>> = LazyLock::new(|| {
    profiles::all_base_words()
        .map(|word| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(word));
            (word, Regex::new(&pattern).expect("valid regex"))
        })
        .collect()
});

/// Replace each whole-word match of each base word, independently, with
/// probability [`SYNONYM_PROBABILITY`].
///
/// Base words are applied in table order, each over the output of the
/// previous one.
pub fn replace_synonyms<R: Rng + ?Sized>(
    sentence: &str,
    profile: &ToneProfile,
    rng: &mut R,
) -> String {
    let mut out = sentence.to_string();
    for (word, candidates) in profile.synonyms {
        let Some(matcher) = WORD_MATCHERS.get(word) else {
            continue;
        };
        out = matcher
            .replace_all(&out, |caps: &Captures| {
                let original = &caps[0];
                if rng.random_bool(SYNONYM_PROBABILITY)
                    && let Some(replacement) = candidates.choose(&mut *rng)
                {
                    preserve_case(original, replacement)
                } else {
                    original.to_string()
                }
            })
            .into_owned();
    }
    out
}

/// Apply the profile's deterministic substitutions, keeping the initial
/// letter's case.
pub fn apply_substitutions(sentence: &str, profile: &ToneProfile) -> String {
    let mut out = sentence.to_string();
    for (from, to) in profile.substitutions {
        let Some(matcher) = WORD_MATCHERS.get(from) else {
            continue;
        };
        out = matcher
            .replace_all(&out, |caps: &Captures| preserve_case(&caps[0], to))
            .into_owned();
    }
    out
}

/// Capitalize `replacement` when `original` starts with an uppercase letter.
pub fn preserve_case(original: &str, replacement: &str) -> String {
    if original.chars().next().is_some_and(char::is_uppercase) {
        super::capitalize_first(replacement)
    } else {
        replacement.to_string()
    }
}
