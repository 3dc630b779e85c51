//! Error types for phrase evaluation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MockDateError {
    #[error("Unrecognized expression: {0}")]
    UnrecognizedExpression(String),

    #[error("Invalid format pattern: {0}")]
    InvalidFormatPattern(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, MockDateError>;
