//! Heuristic detection of machine-generated prose.
//!
//! [`detect`] segments the document, extracts the eight features in
//! [`features`], and weights them through [`scoring::SCORE_TERMS`] into a
//! [`DetectionReport`]. It is a fixed feature-weighting heuristic, not a
//! trained classifier.

pub mod features;
pub mod reports;
pub mod scoring;

pub use features::{Feature, FeatureVector, extract_features};
pub use reports::{
    Confidence, DetectionDetails, DetectionReport, Severity, TermContribution, Verdict,
};

use crate::text;

/// Score a document.
///
/// Total over all inputs: a document with no sentences or no words yields
/// [`DetectionReport::insufficient`].
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn detect(text: &str) -> DetectionReport {
    let sentences = text::split_sentences(text);
    let words = text::extract_words(text);

    if sentences.is_empty() || words.is_empty() {
        tracing::debug!("insufficient text for detection");
        return DetectionReport::insufficient();
    }

    let features = extract_features(text, &sentences, &words);
    let (score, contributions) = scoring::score_features(&features);
    let (label, confidence, color_class) = scoring::classify(score);

    tracing::debug!(
        score,
        verdict = label.label(),
        sentences = sentences.len(),
        words = words.len(),
        "detection complete"
    );

    DetectionReport {
        score,
        label,
        confidence,
        color_class,
        details: Some(DetectionDetails::new(
            &features,
            sentences.len(),
            words.len(),
            contributions,
        )),
    }
}
