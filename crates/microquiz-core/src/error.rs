//! Domain error types.
//!
//! These are the conditions callers must be able to tell apart from plain
//! I/O or parse failures, which travel as `anyhow::Error` with file context.

use thiserror::Error;

/// Errors raised by the quiz core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// The requested category matches no task in the catalog.
    #[error("unknown category: '{0}'")]
    UnknownCategory(String),

    /// A date string was not in `YYYY-MM-DD` form.
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The requested display language is not supported.
    #[error("unknown language: {0}")]
    UnknownLocale(String),
}
