//! Trajectory-matrix embedding

use nalgebra::DMatrix;
use ssa_core::{Error, Result};

/// Number of lagged windows `K = N - L + 1`
pub fn lagged_count(len: usize, window_length: usize) -> usize {
    len + 1 - window_length
}

/// Check `2 <= L <= N/2`
pub fn validate_window(len: usize, window_length: usize) -> Result<()> {
    if window_length < 2 || window_length > len / 2 {
        return Err(Error::invalid_window(window_length, len));
    }
    Ok(())
}

/// Build the `L x K` trajectory matrix of a series
///
/// Column `k` holds samples `[k, k + L)`, so every anti-diagonal of the
/// result is constant (a Hankel matrix).
///
/// # Errors
/// Returns `Error::InvalidParameter` if the window length is outside `[2, N/2]`.
pub fn trajectory_matrix(values: &[f64], window_length: usize) -> Result<DMatrix<f64>> {
    validate_window(values.len(), window_length)?;
    let k = lagged_count(values.len(), window_length);
    Ok(DMatrix::from_fn(window_length, k, |row, col| values[row + col]))
}
