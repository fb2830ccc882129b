//! Feature weighting and score classification.
//!
//! The score is a sum of eight clamped terms, one per feature. The terms are
//! data in [`SCORE_TERMS`], evaluated uniformly by [`score_features`].

use super::features::{Feature, FeatureVector};
use super::reports::{Confidence, Severity, TermContribution, Verdict};

/// One row of the weight table.
#[derive(Debug, Clone, Copy)]
pub struct ScoreTerm {
    /// Feature the term reads.
    pub feature: Feature,
    /// Maps the raw feature value to points before clamping.
    pub transform: fn(f64) -> f64,
    /// Lower bound of the term's band.
    pub min: f64,
    /// Upper bound of the term's band.
    pub max: f64,
}

impl ScoreTerm {
    /// Points contributed by this term for the given features.
    pub fn points(&self, features: &FeatureVector) -> f64 {
        let raw = (self.transform)(features.get(self.feature));
        raw.clamp(self.min, self.max)
    }
}

/// The weight table, in evaluation order.
pub const SCORE_TERMS: &[ScoreTerm] = &[
    ScoreTerm {
        feature: Feature::Perplexity,
        transform: low_perplexity,
        min: 0.0,
        max: 25.0,
    },
    ScoreTerm {
        feature: Feature::Burstiness,
        transform: low_burstiness,
        min: 0.0,
        max: 30.0,
    },
    ScoreTerm {
        feature: Feature::LexicalDiversity,
        transform: extreme_diversity,
        min: 0.0,
        max: 10.0,
    },
    ScoreTerm {
        feature: Feature::SyntaxComplexity,
        transform: syntax_deviation,
        min: 0.0,
        max: 10.0,
    },
    ScoreTerm {
        feature: Feature::TransitionScore,
        transform: scale_by_10,
        min: 0.0,
        max: 10.0,
    },
    ScoreTerm {
        feature: Feature::PunctuationRegularity,
        transform: scale_by_10,
        min: 0.0,
        max: 10.0,
    },
    ScoreTerm {
        feature: Feature::SemanticCoherence,
        transform: high_coherence,
        min: 0.0,
        max: 10.0,
    },
    ScoreTerm {
        feature: Feature::NgramPredictability,
        transform: stock_phrases,
        min: 0.0,
        max: 15.0,
    },
];

fn low_perplexity(perplexity: f64) -> f64 {
    (5.0 - perplexity) * 10.0
}

fn low_burstiness(burstiness: f64) -> f64 {
    (1.0 - burstiness) * 30.0
}

fn extreme_diversity(diversity: f64) -> f64 {
    if !(0.4..=0.8).contains(&diversity) {
        10.0
    } else {
        0.0
    }
}

fn syntax_deviation(complexity: f64) -> f64 {
    (complexity - 2.5).abs() * 5.0
}

fn scale_by_10(value: f64) -> f64 {
    value * 10.0
}

fn high_coherence(coherence: f64) -> f64 {
    (coherence - 0.3) * 20.0
}

fn stock_phrases(predictability: f64) -> f64 {
    predictability * 15.0
}

/// Sum the weight table over `features`.
///
/// Returns the rounded score in [0, 100] and each term's clamped points.
pub fn score_features(features: &FeatureVector) -> (u8, Vec<TermContribution>) {
    let contributions: Vec<TermContribution> = SCORE_TERMS
        .iter()
        .map(|term| TermContribution {
            feature: term.feature,
            points: term.points(features),
            max_points: term.max,
        })
        .collect();

    let total: f64 = contributions.iter().map(|c| c.points).sum();
    let score = total.round().clamp(0.0, 100.0) as u8;
    (score, contributions)
}

/// Map a score to its verdict, confidence and severity tag.
///
/// Scores of 75 and above share the `score-high` tag with the 60–74 band.
/// The human-written band reports High confidence, unlike the monotonic
/// pattern of the other bands.
pub const fn classify(score: u8) -> (Verdict, Confidence, Severity) {
    match score {
        75.. => (Verdict::AlmostCertainlyAi, Confidence::VeryHigh, Severity::High),
        60..=74 => (Verdict::HighlyLikelyAi, Confidence::High, Severity::High),
        45..=59 => (Verdict::LikelyAi, Confidence::Moderate, Severity::Medium),
        30..=44 => (Verdict::PossiblyAi, Confidence::Low, Severity::Low),
        _ => (Verdict::LikelyHuman, Confidence::High, Severity::VeryLow),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neutral() -> FeatureVector {
        // Every term at zero points.
        FeatureVector {
            perplexity: 5.0,
            burstiness: 1.0,
            lexical_diversity: 0.6,
            syntax_complexity: 2.5,
            transition_score: 0.0,
            punctuation_regularity: 0.0,
            semantic_coherence: 0.3,
            ngram_predictability: 0.0,
        }
    }

    #[test]
    fn neutral_features_score_zero() {
        let (score, contributions) = score_features(&neutral());
        assert_eq!(score, 0);
        assert_eq!(contributions.len(), 8);
        assert!(contributions.iter().all(|c| c.points == 0.0));
    }

    #[test]
    fn saturated_features_score_one_hundred() {
        let features = FeatureVector {
            perplexity: -100.0,
            burstiness: 0.0,
            lexical_diversity: 0.1,
            syntax_complexity: 50.0,
            transition_score: 10.0,
            punctuation_regularity: 1.0,
            semantic_coherence: 1.0,
            ngram_predictability: 1.6,
        };
        let (score, contributions) = score_features(&features);
        assert_eq!(score, 100);
        for c in &contributions {
            assert_eq!(c.points, c.max_points, "{} not saturated", c.feature);
        }
    }

    #[test]
    fn terms_are_clamped_to_their_band() {
        let features = FeatureVector {
            perplexity: 20.0,
            ..neutral()
        };
        let (_, contributions) = score_features(&features);
        assert_eq!(contributions[0].points, 0.0);

        let features = FeatureVector {
            perplexity: 0.0,
            ..neutral()
        };
        let (score, contributions) = score_features(&features);
        assert_eq!(contributions[0].points, 25.0);
        assert_eq!(score, 25);
    }

    #[test]
    fn lexical_diversity_is_flat() {
        for (diversity, expected) in [(0.39, 10.0), (0.4, 0.0), (0.8, 0.0), (0.81, 10.0)] {
            let features = FeatureVector {
                lexical_diversity: diversity,
                ..neutral()
            };
            let (_, contributions) = score_features(&features);
            assert_eq!(contributions[2].points, expected, "diversity {diversity}");
        }
    }

    #[test]
    fn syntax_penalizes_both_directions() {
        let low = FeatureVector {
            syntax_complexity: 0.5,
            ..neutral()
        };
        let high = FeatureVector {
            syntax_complexity: 4.5,
            ..neutral()
        };
        assert_eq!(score_features(&low).0, 10);
        assert_eq!(score_features(&high).0, 10);
    }

    #[test]
    fn more_burstiness_never_raises_the_score() {
        let mut previous = u8::MAX;
        for step in 0..=10 {
            let features = FeatureVector {
                burstiness: f64::from(step) / 10.0,
                perplexity: 3.0,
                punctuation_regularity: 0.8,
                ..neutral()
            };
            let (score, _) = score_features(&features);
            assert!(score <= previous);
            previous = score;
        }
    }

    #[test]
    fn score_rounds_to_nearest() {
        let features = FeatureVector {
            // (5 - 4.95) * 10 = 0.5 rounds away from zero
            perplexity: 4.95,
            ..neutral()
        };
        let (score, _) = score_features(&features);
        assert!(score <= 1);
        let features = FeatureVector {
            perplexity: 4.7,
            ..neutral()
        };
        assert_eq!(score_features(&features).0, 3);
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(classify(100).0, Verdict::AlmostCertainlyAi);
        assert_eq!(classify(75).0, Verdict::AlmostCertainlyAi);
        assert_eq!(classify(74).0, Verdict::HighlyLikelyAi);
        assert_eq!(classify(60).0, Verdict::HighlyLikelyAi);
        assert_eq!(classify(59).0, Verdict::LikelyAi);
        assert_eq!(classify(45).0, Verdict::LikelyAi);
        assert_eq!(classify(44).0, Verdict::PossiblyAi);
        assert_eq!(classify(30).0, Verdict::PossiblyAi);
        assert_eq!(classify(29).0, Verdict::LikelyHuman);
        assert_eq!(classify(0).0, Verdict::LikelyHuman);
    }

    #[test]
    fn confidence_and_severity_per_band() {
        assert_eq!(
            classify(80),
            (Verdict::AlmostCertainlyAi, Confidence::VeryHigh, Severity::High)
        );
        assert_eq!(classify(100).2, Severity::High);
        assert_eq!(classify(75).2, classify(74).2);
        assert_eq!(
            classify(65),
            (Verdict::HighlyLikelyAi, Confidence::High, Severity::High)
        );
        assert_eq!(
            classify(50),
            (Verdict::LikelyAi, Confidence::Moderate, Severity::Medium)
        );
        assert_eq!(
            classify(35),
            (Verdict::PossiblyAi, Confidence::Low, Severity::Low)
        );
        assert_eq!(
            classify(10),
            (Verdict::LikelyHuman, Confidence::High, Severity::VeryLow)
        );
    }
}
