use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuantumError>;

/// Failures outside the conversion paths themselves.
///
/// Converting a sample never fails: out-of-range values saturate. These
/// variants cover configuration, text parsing and buffer shapes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuantumError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("parse error: {0}")]
    Parse(String),
}
