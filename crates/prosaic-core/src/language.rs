//! Two-way language identification (Indonesian vs English).
//!
//! Counts function-word hits in the opening of the document. This is a
//! fixed binary decision, not a general language detector.

use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ParseLanguageError;
use crate::text;
use crate::word_lists::{ENGLISH_KEYWORDS, INDONESIAN_KEYWORDS};

/// Number of leading characters sampled for identification.
pub const SAMPLE_CHARS: usize = 500;

/// Languages the rewrite tables cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Language {
    /// Bahasa Indonesia.
    #[serde(rename = "id")]
    #[cfg_attr(feature = "clap", value(name = "id"))]
    Indonesian,
    /// English.
    #[serde(rename = "en")]
    #[cfg_attr(feature = "clap", value(name = "en"))]
    English,
}

impl Language {
    /// Returns the ISO 639-1 code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Indonesian => "id",
            Self::English => "en",
        }
    }

    /// Returns the English name of the language.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Indonesian => "Indonesian",
            Self::English => "English",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "id" | "indonesian" => Ok(Self::Indonesian),
            "en" | "english" => Ok(Self::English),
            _ => Err(ParseLanguageError {
                code: s.to_string(),
            }),
        }
    }
}

/// Keyword hit counts behind a language decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LanguageVotes {
    /// Indonesian function-word hits.
    pub indonesian: usize,
    /// English function-word hits.
    pub english: usize,
}

impl LanguageVotes {
    /// Indonesian only on a strict majority; ties (including 0–0) go to English.
    pub const fn winner(&self) -> Language {
        if self.indonesian > self.english {
            Language::Indonesian
        } else {
            Language::English
        }
    }
}

/// Count keyword hits in the first [`SAMPLE_CHARS`] characters of `text`.
pub fn count_votes(text: &str) -> LanguageVotes {
    let sample: String = text.chars().take(SAMPLE_CHARS).collect();
    let mut votes = LanguageVotes::default();

    for word in text::extract_lowercase_words(&sample) {
        if INDONESIAN_KEYWORDS.contains(word.as_str()) {
            votes.indonesian += 1;
        } else if ENGLISH_KEYWORDS.contains(word.as_str()) {
            votes.english += 1;
        }
    }

    votes
}

/// Classify text as Indonesian or English.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn detect_language(text: &str) -> Language {
    let votes = count_votes(text);
    let language = votes.winner();
    tracing::debug!(
        indonesian = votes.indonesian,
        english = votes.english,
        language = language.code(),
        "language identified"
    );
    language
}
