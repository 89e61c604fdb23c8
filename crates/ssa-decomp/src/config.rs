//! Configuration types for the decomposition

use crate::embedding::validate_window;
use serde::{Deserialize, Serialize};
use ssa_core::{Error, Result};

/// Whether intermediate elementary matrices outlive construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryMode {
    /// Discard each elementary matrix once its component is extracted,
    /// and do not keep the right singular vectors
    SaveMemory,

    /// Keep every elementary matrix and the right singular vectors
    Retain,
}

impl Default for MemoryMode {
    fn default() -> Self {
        Self::SaveMemory
    }
}

/// Threshold below which a singular value counts as zero
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankTolerance {
    /// `max(L, K) * f64::EPSILON * sigma_max`
    Auto,

    /// Fixed absolute threshold
    Absolute(f64),
}

impl Default for RankTolerance {
    fn default() -> Self {
        Self::Auto
    }
}

impl RankTolerance {
    /// Resolve the threshold for an `rows x cols` trajectory matrix
    pub fn threshold(&self, sigma_max: f64, rows: usize, cols: usize) -> f64 {
        match *self {
            Self::Auto => rows.max(cols) as f64 * f64::EPSILON * sigma_max,
            Self::Absolute(tol) => tol,
        }
    }
}

/// Parameters fixed at construction of a decomposition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SsaParameters {
    /// Window (embedding) length L, must lie in `[2, N/2]`
    pub window_length: usize,

    #[serde(default)]
    pub memory_mode: MemoryMode,

    #[serde(default)]
    pub rank_tolerance: RankTolerance,
}

impl SsaParameters {
    /// Parameters with the given window length and default memory mode and tolerance
    pub fn new(window_length: usize) -> Self {
        Self {
            window_length,
            memory_mode: MemoryMode::default(),
            rank_tolerance: RankTolerance::default(),
        }
    }

    pub fn with_memory_mode(mut self, memory_mode: MemoryMode) -> Self {
        self.memory_mode = memory_mode;
        self
    }

    /// Shorthand for `with_memory_mode(MemoryMode::Retain)`
    pub fn retain_elementary(self) -> Self {
        self.with_memory_mode(MemoryMode::Retain)
    }

    pub fn with_rank_tolerance(mut self, rank_tolerance: RankTolerance) -> Self {
        self.rank_tolerance = rank_tolerance;
        self
    }

    /// Check these parameters against a series of length `len`
    ///
    /// # Errors
    /// Returns `Error::InvalidParameter` if the window length is outside
    /// `[2, len/2]` or an absolute tolerance is negative or non-finite.
    pub fn validate(&self, len: usize) -> Result<()> {
        validate_window(len, self.window_length)?;
        if let RankTolerance::Absolute(tol) = self.rank_tolerance {
            if !tol.is_finite() || tol < 0.0 {
                return Err(Error::InvalidParameter(format!(
                    "Rank tolerance {tol} must be finite and non-negative"
                )));
            }
        }
        Ok(())
    }
}
