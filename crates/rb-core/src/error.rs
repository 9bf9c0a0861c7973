//! Shared error type for `rb-core`.
//!
//! Sub-crates define their own error enums (`ClockError`, `BlockError`, …)
//! and the run driver folds them together with `#[from]` conversions.

use thiserror::Error;

/// Errors raised while parsing or validating core values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("invalid simulation time {0}: must be finite and non-negative")]
    InvalidTime(f64),

    #[error("unknown train category {0:?}")]
    UnknownCategory(String),
}

/// Shorthand result type for `rb-core`.
pub type CoreResult<T> = Result<T, CoreError>;
