//! Local, rule-based tone rewriting.
//!
//! [`paraphrase`] rewrites each sentence with a tone-specific structural
//! transform ([`structure`]) and the (language, tone) synonym table
//! ([`synonyms`], [`profiles`]), then regroups the result into paragraphs
//! ([`paragraphs`]). Output varies between calls; pass a seeded generator to
//! [`paraphrase_with_rng`] for reproducible output.

pub mod paragraphs;
pub mod profiles;
pub mod structure;
pub mod synonyms;

use std::str::FromStr;

use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ParseToneError;
use crate::language::{self, Language};
use crate::text;

/// Stylistic target of a rewrite.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Tone {
    /// Scholarly connectors, impersonal phrasing.
    Academic,
    /// Preambles and firm wording.
    Business,
    /// Same rules as academic.
    Formal,
    /// Fillers and loose paragraphs.
    #[default]
    Casual,
}

impl Tone {
    /// All tones, in display order.
    pub const ALL: [Self; 4] = [Self::Academic, Self::Business, Self::Formal, Self::Casual];

    /// Returns the tone name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Academic => "academic",
            Self::Business => "business",
            Self::Formal => "formal",
            Self::Casual => "casual",
        }
    }

    /// Whether paragraphs are grouped randomly rather than in fixed runs.
    pub const fn loose_paragraphs(&self) -> bool {
        matches!(self, Self::Casual)
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = ParseToneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tone| tone.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseToneError {
                name: s.to_string(),
            })
    }
}

/// Rewrite `text` in `tone` using the thread-local random source.
///
/// Returns an empty string only for blank input.
pub fn paraphrase(text: &str, tone: Tone) -> String {
    paraphrase_with_rng(text, tone, &mut rand::rng())
}

/// Rewrite `text` in `tone`, drawing every random choice from `rng`.
#[tracing::instrument(skip_all, fields(text_len = text.len(), tone = tone.as_str()))]
pub fn paraphrase_with_rng<R: Rng + ?Sized>(text: &str, tone: Tone, rng: &mut R) -> String {
    let language = language::detect_language(text);
    paraphrase_as(text, tone, language, rng)
}

/// Rewrite `text` in `tone` with the tables for an already-known `language`.
pub fn paraphrase_as<R: Rng + ?Sized>(
    text: &str,
    tone: Tone,
    language: Language,
    rng: &mut R,
) -> String {
    let sentences = text::split_sentences(text);
    if sentences.is_empty() {
        return String::new();
    }

    let tables = profiles::tables(language);
    let (structural, lexical) = (tables.structure_for(tone), tables.synonyms_for(tone));
    let rewritten: Vec<String> = sentences
        .iter()
        .map(|sentence| {
            let restructured = structure::restructure(sentence, tone, language, structural, rng);
            let mut out = synonyms::replace_synonyms(&restructured, lexical, rng);
            if !text::has_terminal_punctuation(&out) {
                out.push('.');
            }
            out
        })
        .collect();

    let paragraphs = if tone.loose_paragraphs() {
        paragraphs::casual(&rewritten, rng)
    } else {
        paragraphs::structured(&rewritten)
    };

    tracing::debug!(
        language = language.code(),
        sentences = rewritten.len(),
        paragraphs = paragraphs.len(),
        "paraphrase complete"
    );

    paragraphs.join("\n\n")
}

/// Uppercase the first character, leaving the rest untouched.
pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
