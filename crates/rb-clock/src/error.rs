use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClockError {
    #[error("invalid delay {0}: must be finite and non-negative")]
    InvalidDelay(f64),
}

pub type ClockResult<T> = Result<T, ClockError>;
