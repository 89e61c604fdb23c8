//! Singular value decomposition of the trajectory matrix
//!
//! Wraps nalgebra's SVD with the two guarantees the rest of the crate relies
//! on: singular triplets are ordered by descending singular value, and the
//! numerical rank is resolved once against a documented [`RankTolerance`].

use crate::config::RankTolerance;
use nalgebra::DMatrix;
use ssa_core::{Error, Result};
use tracing::debug;

/// Upper bound on SVD iterations per singular value before giving up
const MAX_ITERATIONS_PER_VALUE: usize = 100;

/// Singular triplets of a trajectory matrix, sorted by descending singular value
#[derive(Debug, Clone)]
pub struct SingularTriplets {
    /// Left singular vectors as columns, `L x min(L, K)`
    pub u: DMatrix<f64>,
    /// Singular values in descending order, length `min(L, K)`
    pub singular_values: Vec<f64>,
    /// Right singular vectors as rows, `min(L, K) x K`
    pub v_t: DMatrix<f64>,
    /// Number of singular values above the rank threshold
    pub rank: usize,
}

impl SingularTriplets {
    /// Largest singular value, 0 for an empty decomposition
    pub fn sigma_max(&self) -> f64 {
        self.singular_values.first().copied().unwrap_or(0.0)
    }
}

/// Decompose a trajectory matrix into sorted singular triplets
///
/// # Errors
/// Returns `Error::Computation` if the SVD does not converge.
pub fn decompose(trajectory: DMatrix<f64>, tolerance: RankTolerance) -> Result<SingularTriplets> {
    let (rows, cols) = trajectory.shape();
    let max_iterations = MAX_ITERATIONS_PER_VALUE * rows.min(cols).max(1);

    let svd = trajectory
        .try_svd(true, true, f64::EPSILON, max_iterations)
        .ok_or_else(|| {
            Error::Computation(format!(
                "SVD of {rows}x{cols} trajectory matrix did not converge"
            ))
        })?;

    let u = svd
        .u
        .ok_or_else(|| Error::Computation("SVD returned no left singular vectors".to_string()))?;
    let v_t = svd
        .v_t
        .ok_or_else(|| Error::Computation("SVD returned no right singular vectors".to_string()))?;

    let mut order: Vec<usize> = (0..svd.singular_values.len()).collect();
    order.sort_by(|&a, &b| svd.singular_values[b].total_cmp(&svd.singular_values[a]));

    let singular_values: Vec<f64> = order.iter().map(|&i| svd.singular_values[i]).collect();
    let u = u.select_columns(order.iter());
    let v_t = v_t.select_rows(order.iter());

    let sigma_max = singular_values.first().copied().unwrap_or(0.0);
    let threshold = tolerance.threshold(sigma_max, rows, cols);
    let rank = singular_values.iter().filter(|&&s| s > threshold).count();

    debug!(rows, cols, rank, sigma_max, threshold, "trajectory matrix decomposed");

    Ok(SingularTriplets {
        u,
        singular_values,
        v_t,
        rank,
    })
}
