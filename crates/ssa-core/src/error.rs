//! Error types for singular spectrum analysis
//!
//! Provides a unified error type for all ssa crates.

use thiserror::Error;

/// Core error type for SSA operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Component index outside the decomposition rank
    #[error("Index out of bounds: component {index} requested, rank is {rank}")]
    IndexOutOfBounds { index: usize, rank: usize },

    /// A reconstructed component with zero weighted norm
    #[error("Degenerate component: component {index} has zero weighted norm")]
    DegenerateComponent { index: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a window length outside `[2, N/2]`
    pub fn invalid_window(window_length: usize, len: usize) -> Self {
        Self::InvalidParameter(format!(
            "Window length {window_length} must be in the interval [2, N/2] for N = {len}"
        ))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }
}
