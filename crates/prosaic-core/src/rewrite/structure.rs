//! Per-sentence structural transforms, one per tone family.

use std::sync::LazyLock;

use rand::Rng;
use rand::seq::IndexedRandom;
use regex::{Captures, Regex};

use super::profiles::ToneProfile;
use super::{Tone, capitalize_first, synonyms};
use crate::language::Language;

/// Chance that an Indonesian first-person clause turns impersonal.
pub const PASSIVE_PROBABILITY: f64 = 0.3;
/// Chance that an academic sentence gains a leading connector.
pub const CONNECTOR_PROBABILITY: f64 = 0.2;
/// Chance that a business sentence gains a preamble.
pub const PREAMBLE_PROBABILITY: f64 = 0.15;
/// Chance that a casual sentence gains a filler word.
pub const FILLER_PROBABILITY: f64 = 0.25;
/// Casual sentences need more words than this to take a filler.
pub const FILLER_MIN_WORDS: usize = 5;

/// "saya"/"kami" followed by the next word.
static FIRST_PERSON_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(saya|kami) (\w+)").expect("valid regex"));

/// Apply the structural transform for `tone` to one sentence.
pub fn restructure<R: Rng + ?Sized>(
    sentence: &str,
    tone: Tone,
    language: Language,
    profile: &ToneProfile,
    rng: &mut R,
) -> String {
    match tone {
        Tone::Academic | Tone::Formal => academic(sentence, language, profile, rng),
        Tone::Business => business(sentence, profile, rng),
        Tone::Casual => casual(sentence, profile, rng),
    }
}

fn academic<R: Rng + ?Sized>(
    sentence: &str,
    language: Language,
    profile: &ToneProfile,
    rng: &mut R,
) -> String {
    let mut out = if language == Language::Indonesian {
        impersonal(sentence, rng)
    } else {
        sentence.to_string()
    };

    if rng.random_bool(CONNECTOR_PROBABILITY)
        && let Some(connector) = profile.prefixes.choose(rng)
    {
        out = capitalize_first(&format!("{connector} {}", out.to_lowercase()));
    }
    out
}

/// Reword "saya X" / "kami X" as "X dilakukan", per match.
fn impersonal<R: Rng + ?Sized>(sentence: &str, rng: &mut R) -> String {
    FIRST_PERSON_CLAUSE
        .replace_all(sentence, |caps: &Captures| {
            if rng.random_bool(PASSIVE_PROBABILITY) {
                format!("{} dilakukan", &caps[2])
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

fn business<R: Rng + ?Sized>(sentence: &str, profile: &ToneProfile, rng: &mut R) -> String {
    let mut out = sentence.to_string();
    if rng.random_bool(PREAMBLE_PROBABILITY)
        && let Some(preamble) = profile.prefixes.choose(rng)
    {
        out = format!("{preamble} {}", out.to_lowercase());
    }
    synonyms::apply_substitutions(&out, profile)
}

fn casual<R: Rng + ?Sized>(sentence: &str, profile: &ToneProfile, rng: &mut R) -> String {
    if !rng.random_bool(FILLER_PROBABILITY) {
        return sentence.to_string();
    }
    let mut words: Vec<&str> = sentence.split(' ').collect();
    if words.len() <= FILLER_MIN_WORDS {
        return sentence.to_string();
    }
    let Some(filler) = profile.fillers.choose(rng) else {
        return sentence.to_string();
    };
    words.insert(words.len() / 2, filler);
    words.join(" ")
}
