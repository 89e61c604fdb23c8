//! Error types for spectral estimation

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpectralError {
    #[error("Signal length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Signal too short for analysis: {length} samples")]
    SignalTooShort { length: usize },

    #[error("Invalid sample spacing: {0}")]
    InvalidSpacing(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for spectral operations
pub type Result<T> = std::result::Result<T, SpectralError>;
