//! The detect → rewrite → re-detect workflow.
//!
//! [`humanize`] scores a document, rewrites it in the requested tone, and
//! scores the rewrite, repeating up to [`HumanizeOptions::max_passes`] times.
//! Rewrites go through a [`Paraphraser`]; a backend that fails or returns
//! nothing usable is replaced by the local engine for that pass.

use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::detection::{self, DetectionReport};
use crate::error::BackendError;
use crate::language::{self, Language};
use crate::markdown;
use crate::rewrite::{self, Tone};

/// Name reported for rewrites produced by the local engine.
pub const LOCAL_SOURCE: &str = "local";

/// Score above which input is reported as machine-generated.
pub const DEFAULT_FLAG_THRESHOLD: u8 = 50;
/// Score below which a rewrite passes.
pub const DEFAULT_PASS_THRESHOLD: u8 = 40;

/// Something that can rewrite text in a tone.
pub trait Paraphraser {
    /// Short backend name, reported in [`HumanizeOutcome::source`].
    fn name(&self) -> &str;

    /// Rewrite `text` in `tone`. `language` is the caller's detection result.
    fn paraphrase(
        &mut self,
        text: &str,
        tone: Tone,
        language: Language,
    ) -> Result<String, BackendError>;
}

/// The rule-based engine behind the [`Paraphraser`] seam. Never fails.
#[derive(Debug)]
pub struct LocalParaphraser<R> {
    rng: R,
}

impl LocalParaphraser<rand::rngs::ThreadRng> {
    /// Local engine on the thread-local random source.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for LocalParaphraser<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> LocalParaphraser<R> {
    /// Local engine on a caller-supplied (for example, seeded) source.
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Paraphraser for LocalParaphraser<R> {
    fn name(&self) -> &str {
        LOCAL_SOURCE
    }

    fn paraphrase(
        &mut self,
        text: &str,
        tone: Tone,
        language: Language,
    ) -> Result<String, BackendError> {
        Ok(rewrite::paraphrase_as(text, tone, language, &mut self.rng))
    }
}

/// Knobs for [`humanize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HumanizeOptions {
    /// Target tone.
    pub tone: Tone,
    /// `before.score` above this marks the input as flagged.
    pub flag_threshold: u8,
    /// `after.score` below this marks the rewrite as passed.
    pub pass_threshold: u8,
    /// Upper bound on rewrite passes (at least one pass always runs).
    pub max_passes: u32,
}

impl Default for HumanizeOptions {
    fn default() -> Self {
        Self {
            tone: Tone::default(),
            flag_threshold: DEFAULT_FLAG_THRESHOLD,
            pass_threshold: DEFAULT_PASS_THRESHOLD,
            max_passes: 1,
        }
    }
}

/// Result of one humanize run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HumanizeOutcome {
    /// Report for the input.
    pub before: DetectionReport,
    /// Report for [`Self::rewritten`].
    pub after: DetectionReport,
    /// Language detected on the input.
    pub language: Language,
    /// Tone used for every pass.
    pub tone: Tone,
    /// Passes actually run.
    pub passes: u32,
    /// Lowest-scoring rewrite across all passes.
    pub rewritten: String,
    /// Backend that produced [`Self::rewritten`].
    pub source: String,
    /// Whether the input scored above the flag threshold.
    pub flagged: bool,
    /// Whether the rewrite scored below the pass threshold.
    pub passed: bool,
}

/// Run the workflow on the local engine only.
pub fn humanize<R: Rng + ?Sized>(
    text: &str,
    options: &HumanizeOptions,
    rng: &mut R,
) -> HumanizeOutcome {
    run(text, options, None, rng)
}

/// Run the workflow through `backend`, falling back to the local engine
/// (drawing from `rng`) whenever the backend fails.
pub fn humanize_with<R: Rng + ?Sized>(
    text: &str,
    options: &HumanizeOptions,
    backend: &mut dyn Paraphraser,
    rng: &mut R,
) -> HumanizeOutcome {
    run(text, options, Some(backend), rng)
}

#[tracing::instrument(skip_all, fields(text_len = text.len(), tone = options.tone.as_str()))]
fn run<R: Rng + ?Sized>(
    text: &str,
    options: &HumanizeOptions,
    mut backend: Option<&mut dyn Paraphraser>,
    rng: &mut R,
) -> HumanizeOutcome {
    let before = detection::detect(text);
    let language = language::detect_language(text);
    let flagged = before.score > options.flag_threshold;

    if before.is_insufficient() {
        tracing::debug!("nothing to humanize");
        return HumanizeOutcome {
            after: before.clone(),
            before,
            language,
            tone: options.tone,
            passes: 0,
            rewritten: String::new(),
            source: LOCAL_SOURCE.to_string(),
            flagged: false,
            passed: false,
        };
    }

    let mut current = text.to_string();
    let mut best: Option<(String, DetectionReport, String)> = None;
    let mut passes = 0;

    for pass in 1..=options.max_passes.max(1) {
        passes = pass;
        let (candidate, source) = match backend.as_deref_mut() {
            Some(b) => rewrite_or_fallback(b, &current, options.tone, language, rng),
            None => (
                rewrite::paraphrase_as(&current, options.tone, language, rng),
                LOCAL_SOURCE.to_string(),
            ),
        };
        let report = detection::detect(&candidate);
        tracing::debug!(pass, score = report.score, source = %source, "rewrite scored");

        let done = report.score < options.pass_threshold;
        if best.as_ref().is_none_or(|(_, r, _)| report.score < r.score) {
            best = Some((candidate.clone(), report, source));
        }
        if done {
            break;
        }
        current = candidate;
    }

    let (rewritten, after, source) = best.unwrap_or_else(|| {
        (
            current.clone(),
            detection::detect(&current),
            LOCAL_SOURCE.to_string(),
        )
    });
    let passed = after.score < options.pass_threshold;

    tracing::info!(
        before = before.score,
        after = after.score,
        passes,
        flagged,
        passed,
        "humanize complete"
    );

    HumanizeOutcome {
        before,
        after,
        language,
        tone: options.tone,
        passes,
        rewritten,
        source,
        flagged,
        passed,
    }
}

/// One rewrite through `backend`, sanitized, or the local engine on failure.
pub fn rewrite_or_fallback<R: Rng + ?Sized>(
    backend: &mut dyn Paraphraser,
    text: &str,
    tone: Tone,
    language: Language,
    rng: &mut R,
) -> (String, String) {
    match backend.paraphrase(text, tone, language) {
        Ok(raw) => {
            let clean = markdown::strip_markup(&raw);
            if !clean.is_empty() {
                return (clean, backend.name().to_string());
            }
            tracing::warn!(backend = backend.name(), "empty rewrite, using local engine");
        }
        Err(e) => {
            tracing::warn!(backend = backend.name(), error = %e, "rewrite failed, using local engine");
        }
    }
    (
        rewrite::paraphrase_as(text, tone, language, rng),
        LOCAL_SOURCE.to_string(),
    )
}
