//! Text segmentation shared by detection and rewriting.
//!
//! Sentence splitting is deliberately naive: a `.`, `!` or `?` followed by
//! whitespace ends a sentence. Abbreviations and decimals are not special
//! cased, so "Dr. Smith" splits after "Dr.".

use regex::Regex;
use std::sync::LazyLock;

/// Maximal runs of word characters (letters, digits, underscore).
static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Split text into trimmed, non-empty sentences.
///
/// A boundary is a sentence terminator immediately followed by whitespace;
/// the whole whitespace run is consumed. Never fails, and returns an empty
/// list for empty or blank input.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        let at_boundary = is_sentence_terminator(ch)
            && chars.peek().is_some_and(|(_, next)| next.is_whitespace());
        if !at_boundary {
            continue;
        }

        push_trimmed(&mut sentences, &text[start..idx + ch.len_utf8()]);
        while chars.peek().is_some_and(|(_, c)| c.is_whitespace()) {
            chars.next();
        }
        start = chars.peek().map_or(text.len(), |(i, _)| *i);
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

/// Extract word tokens, preserving their original case.
pub fn extract_words(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extract word tokens, lower-cased for counting.
pub fn extract_lowercase_words(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Count word tokens without allocating them.
pub fn count_words(text: &str) -> usize {
    WORD_PATTERN.find_iter(text).count()
}

/// Split text into paragraphs (separated by blank lines).
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

/// Whether the text ends in `.`, `!` or `?`.
pub fn has_terminal_punctuation(text: &str) -> bool {
    text.chars().last().is_some_and(is_sentence_terminator)
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

fn push_trimmed(sentences: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        sentences.push(piece.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_sentences() {
        let sentences = split_sentences("This is a sentence. This is another sentence.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "This is a sentence.");
        assert_eq!(sentences[1], "This is another sentence.");
    }

    #[test]
    fn question_and_exclamation() {
        let sentences = split_sentences("Are you serious? I can't believe it! This is amazing.");
        assert_eq!(sentences.len(), 3);
    }

    #[test]
    fn abbreviations_split_naively() {
        let sentences = split_sentences("Dr. Smith went home.");
        assert_eq!(sentences, vec!["Dr.", "Smith went home."]);
    }

    #[test]
    fn terminator_without_whitespace_is_not_a_boundary() {
        let sentences = split_sentences("Pi is 3.14 exactly. Next one.");
        assert_eq!(sentences, vec!["Pi is 3.14 exactly.", "Next one."]);

        // A closing quote sits between the period and the space.
        let quoted = split_sentences("He said \"stop.\" Then he left.");
        assert_eq!(quoted.len(), 1);
    }

    #[test]
    fn whitespace_runs_and_newlines_are_consumed() {
        let sentences = split_sentences("  First one.\n\n\tSecond one!   Third  ");
        assert_eq!(sentences, vec!["First one.", "Second one!", "Third"]);
    }

    #[test]
    fn ellipsis_splits_once() {
        let sentences = split_sentences("Wait... what happened?");
        assert_eq!(sentences, vec!["Wait...", "what happened?"]);
    }

    #[test]
    fn empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
        assert!(split_sentences("\n\t").is_empty());
    }

    #[test]
    fn extract_words_preserves_case() {
        let words = extract_words("Hello, world! It's a_test 42.");
        assert_eq!(words, vec!["Hello", "world", "It", "s", "a_test", "42"]);
    }

    #[test]
    fn lowercase_words_for_counting() {
        let words = extract_lowercase_words("The THE the");
        assert_eq!(words, vec!["the", "the", "the"]);
    }

    #[test]
    fn hyphenated_words_split() {
        assert_eq!(extract_words("kira-kira"), vec!["kira", "kira"]);
    }

    #[test]
    fn unicode_letters_are_word_characters() {
        assert_eq!(count_words("naïve café déjà vu"), 4);
    }

    #[test]
    fn count_matches_extract() {
        let text = "One, two; three: four. Five!";
        assert_eq!(count_words(text), extract_words(text).len());
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn split_paragraphs_basic() {
        let text = "First paragraph.\n\nSecond paragraph.\n\nThird.";
        let paras = split_paragraphs(text);
        assert_eq!(paras.len(), 3);
    }

    #[test]
    fn terminal_punctuation_check() {
        assert!(has_terminal_punctuation("Done."));
        assert!(has_terminal_punctuation("Really?"));
        assert!(!has_terminal_punctuation("No stop"));
        assert!(!has_terminal_punctuation(""));
    }
}
