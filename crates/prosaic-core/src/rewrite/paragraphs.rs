//! Regrouping rewritten sentences into paragraphs.
//!
//! Grouping never drops or reorders a sentence: joining the paragraphs'
//! sentences back together yields the input list.

use rand::Rng;

/// Sentences per structured paragraph.
pub const STRUCTURED_RUN: usize = 3;
/// Chance of closing a casual paragraph at each eligible boundary.
pub const CASUAL_BREAK_PROBABILITY: f64 = 0.3;
/// Casual paragraphs hold at least this many sentences before a break.
pub const CASUAL_MIN_RUN: usize = 2;
/// Casual paragraphs never grow past this many sentences.
pub const CASUAL_MAX_RUN: usize = 5;

/// Fixed runs of three; a lone trailing sentence joins the run before it.
pub fn structured(sentences: &[String]) -> Vec<String> {
    let mut groups: Vec<Vec<&str>> = sentences
        .chunks(STRUCTURED_RUN)
        .map(|chunk| chunk.iter().map(String::as_str).collect())
        .collect();

    if groups.len() > 1 && groups.last().is_some_and(|g| g.len() == 1) {
        let tail = groups.pop().unwrap_or_default();
        if let Some(previous) = groups.last_mut() {
            previous.extend(tail);
        }
    }

    groups.into_iter().map(|g| g.join(" ")).collect()
}

/// Random runs of two to five sentences.
///
/// Once a paragraph holds [`CASUAL_MIN_RUN`] sentences it closes with
/// probability [`CASUAL_BREAK_PROBABILITY`] at each boundary, and it always
/// closes at [`CASUAL_MAX_RUN`]. The final paragraph may be shorter.
pub fn casual<R: Rng + ?Sized>(sentences: &[String], rng: &mut R) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for (i, sentence) in sentences.iter().enumerate() {
        current.push(sentence);
        let is_last = i + 1 == sentences.len();
        let close = is_last
            || current.len() >= CASUAL_MAX_RUN
            || (current.len() >= CASUAL_MIN_RUN && rng.random_bool(CASUAL_BREAK_PROBABILITY));
        if close {
            paragraphs.push(current.join(" "));
            current.clear();
        }
    }

    paragraphs
}
