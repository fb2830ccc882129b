//! Error types for prosaic-core.
//!
//! Detection and rewriting are total and never fail; the types here cover
//! the ambient surfaces around them (configuration, parsing user-supplied
//! names, and remote paraphrasing backends).

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// An unrecognized tone name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown tone: {name}. Use: academic, business, formal, casual")]
pub struct ParseToneError {
    /// The tone name that was requested.
    pub name: String,
}

/// An unrecognized language code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown language: {code}. Use: id, en")]
pub struct ParseLanguageError {
    /// The language code that was requested.
    pub code: String,
}

/// Failures reported by a remote paraphrasing backend.
///
/// These never escape into detection or the local rewrite path; the
/// humanize workflow logs them and falls back to the local engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The requested model does not exist (HTTP 404).
    #[error("model not found: {model}")]
    ModelNotFound {
        /// Model identifier sent to the backend.
        model: String,
    },

    /// The credential was rejected (HTTP 403).
    #[error("invalid API credential")]
    InvalidCredential,

    /// The account ran out of quota (HTTP 429).
    #[error("quota exhausted, wait or raise the quota")]
    Quota,

    /// Any other non-success HTTP status.
    #[error("backend error ({status}): {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// The backend refused to process the content.
    #[error("content blocked: {reason}")]
    Blocked {
        /// Block reason reported by the backend.
        reason: String,
    },

    /// The response had no usable text.
    #[error("unexpected backend response")]
    UnexpectedResponse,
}

impl BackendError {
    /// Classify a failed HTTP response.
    pub fn from_status(status: u16, model: &str, message: impl Into<String>) -> Self {
        match status {
            404 => Self::ModelNotFound {
                model: model.to_string(),
            },
            403 => Self::InvalidCredential,
            429 => Self::Quota,
            _ => Self::Http {
                status,
                message: message.into(),
            },
        }
    }
}
