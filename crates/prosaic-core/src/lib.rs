//! Core library for prosaic.
//!
//! Two coupled capabilities over English and Indonesian prose:
//!
//! - [`detection`] scores how machine-generated a passage looks, from eight
//!   statistical features weighted into a 0–100 score and a verdict.
//! - [`rewrite`] rewrites prose into one of four tones with local rules and
//!   bilingual synonym tables, no generative model involved.
//!
//! [`humanize`] chains them (detect, rewrite, detect again), and
//! [`config`] loads the layered settings the CLI and MCP server share.
//!
//! # Quick Start
//!
//! ```
//! use prosaic_core::{Tone, detect, paraphrase};
//!
//! let text = "The cat sat on the mat. The dog ran in the park.";
//! let report = detect(text);
//! assert!(report.score <= 100);
//!
//! let rewritten = paraphrase(text, Tone::Academic);
//! assert!(!rewritten.is_empty());
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod detection;
pub mod error;
pub mod humanize;
pub mod language;
pub mod markdown;
pub mod rewrite;
pub mod text;
pub mod word_lists;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use detection::{Confidence, DetectionReport, Severity, Verdict, detect};
pub use error::{BackendError, ConfigError, ConfigResult, ParseLanguageError, ParseToneError};
pub use humanize::{
    HumanizeOptions, HumanizeOutcome, LocalParaphraser, Paraphraser, humanize, humanize_with,
};
pub use language::{Language, detect_language};
pub use rewrite::{Tone, paraphrase, paraphrase_with_rng};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
