use thiserror::Error;

/// Errors raised while validating the input of the solvers and the harness.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RodCuttingError {
    #[error("rod length must be non-negative, got {0}")]
    InvalidLength(i64),
    #[error("could not parse rod length '{0}'")]
    UnparsableLength(String),
    #[error("sample count must be positive, got {0}")]
    InvalidSampleCount(usize),
    #[error("price table must contain at least one price")]
    EmptyPriceTable,
    #[error("invalid price '{0}', prices must be non-negative integers")]
    InvalidPrice(String),
}
