//! The eight detection signals.
//!
//! Each feature is a pure function in its own module over the sentence list,
//! the word list, or the raw document. [`extract_features`] runs all eight.

pub mod burstiness;
pub mod coherence;
pub mod lexical_diversity;
pub mod ngram;
pub mod perplexity;
pub mod punctuation;
pub mod syntax;
pub mod transitions;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Names of the eight features, in scoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Mean bigram/trigram entropy.
    Perplexity,
    /// Normalized spread of sentence lengths.
    Burstiness,
    /// Type–token ratio.
    LexicalDiversity,
    /// Commas and conjunctions per sentence.
    SyntaxComplexity,
    /// Discourse connectors per 100 words.
    TransitionScore,
    /// Uniformity of per-sentence punctuation.
    PunctuationRegularity,
    /// Mean word overlap of adjacent sentences.
    SemanticCoherence,
    /// Stock phrase hits, tenths.
    NgramPredictability,
}

impl Feature {
    /// Returns the feature name as used in reports.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Perplexity => "perplexity",
            Self::Burstiness => "burstiness",
            Self::LexicalDiversity => "lexical_diversity",
            Self::SyntaxComplexity => "syntax_complexity",
            Self::TransitionScore => "transition_score",
            Self::PunctuationRegularity => "punctuation_regularity",
            Self::SemanticCoherence => "semantic_coherence",
            Self::NgramPredictability => "ngram_predictability",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw (unrounded) values of the eight features.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FeatureVector {
    /// Perplexity proxy in bits.
    pub perplexity: f64,
    /// Burstiness in [0, 1].
    pub burstiness: f64,
    /// Lexical diversity in [0, 1].
    pub lexical_diversity: f64,
    /// Mean clause joins per sentence.
    pub syntax_complexity: f64,
    /// Connectors per 100 words.
    pub transition_score: f64,
    /// Punctuation regularity in [0, 1].
    pub punctuation_regularity: f64,
    /// Semantic coherence in [0, 1].
    pub semantic_coherence: f64,
    /// Stock phrase hits divided by 10.
    pub ngram_predictability: f64,
}

impl FeatureVector {
    /// Look up a feature by name.
    pub const fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Perplexity => self.perplexity,
            Feature::Burstiness => self.burstiness,
            Feature::LexicalDiversity => self.lexical_diversity,
            Feature::SyntaxComplexity => self.syntax_complexity,
            Feature::TransitionScore => self.transition_score,
            Feature::PunctuationRegularity => self.punctuation_regularity,
            Feature::SemanticCoherence => self.semantic_coherence,
            Feature::NgramPredictability => self.ngram_predictability,
        }
    }
}

/// Compute all eight features.
///
/// `text` is the raw document, `sentences` its sentence list and `words` its
/// word list (case preserved).
#[tracing::instrument(skip_all, fields(sentences = sentences.len(), words = words.len()))]
pub fn extract_features(text: &str, sentences: &[String], words: &[String]) -> FeatureVector {
    FeatureVector {
        perplexity: perplexity::perplexity_proxy(words),
        burstiness: burstiness::burstiness(sentences),
        lexical_diversity: lexical_diversity::lexical_diversity(words),
        syntax_complexity: syntax::syntax_complexity(sentences),
        transition_score: transitions::transition_overuse(text, words.len()),
        punctuation_regularity: punctuation::punctuation_regularity(sentences),
        semantic_coherence: coherence::semantic_coherence(sentences),
        ngram_predictability: ngram::ngram_predictability(text),
    }
}

/// Population standard deviation. Zero for an empty slice.
pub(crate) fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let count = values.len() as f64;
    let mean = values.iter().sum::<f64>() / count;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count;
    variance.sqrt()
}
