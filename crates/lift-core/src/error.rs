//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` where a
//! configuration failure bubbles up from here.

use thiserror::Error;

/// The top-level error type for `lift-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `lift-core`.
pub type CoreResult<T> = Result<T, CoreError>;
