//! Report structs for detection.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in both CLI JSON output and MCP tool responses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::features::{Feature, FeatureVector};

/// Classification of a document, ordered from human-like to machine-like.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Verdict {
    /// No sentences or no words to score.
    #[serde(rename = "Insufficient text")]
    InsufficientText,
    /// Score below 30.
    #[serde(rename = "Likely Human-Written")]
    LikelyHuman,
    /// Score 30–44.
    #[serde(rename = "Possibly AI-Generated")]
    PossiblyAi,
    /// Score 45–59.
    #[serde(rename = "Likely AI-Generated")]
    LikelyAi,
    /// Score 60–74.
    #[serde(rename = "Highly Likely AI-Generated")]
    HighlyLikelyAi,
    /// Score 75 and above.
    #[serde(rename = "Almost Certainly AI-Generated")]
    AlmostCertainlyAi,
}

impl Verdict {
    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::InsufficientText => "Insufficient text",
            Self::LikelyHuman => "Likely Human-Written",
            Self::PossiblyAi => "Possibly AI-Generated",
            Self::LikelyAi => "Likely AI-Generated",
            Self::HighlyLikelyAi => "Highly Likely AI-Generated",
            Self::AlmostCertainlyAi => "Almost Certainly AI-Generated",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How strongly the verdict is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Confidence {
    /// Weak evidence.
    Low,
    /// Mixed evidence.
    Moderate,
    /// Strong evidence.
    High,
    /// Overwhelming evidence.
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl Confidence {
    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Presentation tag for a score band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Severity {
    /// 60 and above. The top two bands share this tag.
    #[serde(rename = "score-high")]
    High,
    /// 45–59.
    #[serde(rename = "score-medium")]
    Medium,
    /// 30–44, and the insufficient-text sentinel.
    #[serde(rename = "score-low")]
    Low,
    /// Below 30.
    #[serde(rename = "score-very-low")]
    VeryLow,
}

impl Severity {
    /// CSS-style class name.
    pub const fn class(&self) -> &'static str {
        match self {
            Self::High => "score-high",
            Self::Medium => "score-medium",
            Self::Low => "score-low",
            Self::VeryLow => "score-very-low",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.class())
    }
}

/// One scoring term's clamped contribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TermContribution {
    /// Feature the term reads.
    pub feature: Feature,
    /// Points after clamping to the term's band.
    pub points: f64,
    /// Upper bound of the term's band.
    pub max_points: f64,
}

/// Feature values and text statistics behind a score.
///
/// Feature values are rounded for display; scoring uses raw values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DetectionDetails {
    /// Perplexity proxy (3 decimals).
    pub perplexity: f64,
    /// Burstiness (3 decimals).
    pub burstiness: f64,
    /// Lexical diversity (3 decimals).
    pub lexical_diversity: f64,
    /// Syntax complexity (2 decimals).
    pub syntax_complexity: f64,
    /// Transition score (3 decimals).
    pub transition_score: f64,
    /// Punctuation regularity (3 decimals).
    pub punctuation_regularity: f64,
    /// Semantic coherence (3 decimals).
    pub semantic_coherence: f64,
    /// N-gram predictability (3 decimals).
    pub ngram_predictability: f64,
    /// Number of sentences.
    pub sentence_count: usize,
    /// Number of word tokens.
    pub word_count: usize,
    /// Words per sentence (1 decimal).
    pub avg_sentence_length: f64,
    /// Per-term points, in weight-table order.
    pub contributions: Vec<TermContribution>,
}

impl DetectionDetails {
    /// Build display details from raw features and counts.
    pub fn new(
        features: &FeatureVector,
        sentence_count: usize,
        word_count: usize,
        contributions: Vec<TermContribution>,
    ) -> Self {
        let avg = if sentence_count == 0 {
            0.0
        } else {
            word_count as f64 / sentence_count as f64
        };
        Self {
            perplexity: round_to(features.perplexity, 3),
            burstiness: round_to(features.burstiness, 3),
            lexical_diversity: round_to(features.lexical_diversity, 3),
            syntax_complexity: round_to(features.syntax_complexity, 2),
            transition_score: round_to(features.transition_score, 3),
            punctuation_regularity: round_to(features.punctuation_regularity, 3),
            semantic_coherence: round_to(features.semantic_coherence, 3),
            ngram_predictability: round_to(features.ngram_predictability, 3),
            sentence_count,
            word_count,
            avg_sentence_length: round_to(avg, 1),
            contributions,
        }
    }
}

/// Result of scoring one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DetectionReport {
    /// Integer score in [0, 100].
    pub score: u8,
    /// Classification band.
    pub label: Verdict,
    /// Confidence attached to the band.
    pub confidence: Confidence,
    /// Presentation tag for the band.
    pub color_class: Severity,
    /// Features and statistics; absent for insufficient text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<DetectionDetails>,
}

impl DetectionReport {
    /// The sentinel for input with no sentences or no words.
    pub const fn insufficient() -> Self {
        Self {
            score: 0,
            label: Verdict::InsufficientText,
            confidence: Confidence::Low,
            color_class: Severity::Low,
            details: None,
        }
    }

    /// Whether this is the insufficient-text sentinel.
    pub fn is_insufficient(&self) -> bool {
        self.label == Verdict::InsufficientText
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
