//! Weighted correlation between reconstructed components
//!
//! Two components are well separated when their weighted correlation is close
//! to zero. The weight of sample `t` is the number of trajectory-matrix
//! entries it appears in, which gives a triangular profile
//! `1, 2, ..., L, L, ..., L, L, ..., 2, 1`.

use crate::averaging::anti_diagonal_len;
use nalgebra::DMatrix;
use ssa_core::{Error, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Triangular weights for a series of length `len` embedded with window `window_length`
pub fn weights(len: usize, window_length: usize) -> Vec<f64> {
    if len == 0 {
        return Vec::new();
    }
    let k = len + 1 - window_length;
    (0..len)
        .map(|t| anti_diagonal_len(t, window_length, k) as f64)
        .collect()
}

/// Weighted inner product `sum_t w_t * a_t * b_t`
pub fn weighted_inner(weights: &[f64], a: &[f64], b: &[f64]) -> f64 {
    weights
        .iter()
        .zip(a.iter().zip(b.iter()))
        .map(|(w, (x, y))| w * x * y)
        .sum()
}

/// Symmetric matrix of weighted correlations between components
#[derive(Debug, Clone, PartialEq)]
pub struct WCorrelation {
    matrix: DMatrix<f64>,
}

impl WCorrelation {
    /// Compute the w-correlation matrix of `components`
    ///
    /// The diagonal is exactly 1. Off-diagonal entries are the absolute
    /// weighted cosine similarity, capped at 1 so rounding never pushes them
    /// past the Cauchy-Schwarz bound.
    ///
    /// # Errors
    /// Returns `Error::DegenerateComponent` if a component has zero weighted norm.
    pub fn compute(components: &[Vec<f64>], weights: &[f64]) -> Result<Self> {
        let d = components.len();

        let inv_norms = components
            .iter()
            .enumerate()
            .map(|(index, component)| {
                let norm = weighted_inner(weights, component, component);
                if norm > 0.0 && norm.is_finite() {
                    Ok(norm.powf(-0.5))
                } else {
                    Err(Error::DegenerateComponent { index })
                }
            })
            .collect::<Result<Vec<f64>>>()?;

        let entry = |i: usize, j: usize| -> f64 {
            let inner = weighted_inner(weights, &components[i], &components[j]);
            (inner.abs() * inv_norms[i] * inv_norms[j]).min(1.0)
        };

        #[cfg(feature = "parallel")]
        let upper: Vec<Vec<f64>> = (0..d)
            .into_par_iter()
            .map(|i| ((i + 1)..d).map(|j| entry(i, j)).collect())
            .collect();

        #[cfg(not(feature = "parallel"))]
        let upper: Vec<Vec<f64>> = (0..d)
            .map(|i| ((i + 1)..d).map(|j| entry(i, j)).collect())
            .collect();

        let mut matrix = DMatrix::identity(d, d);
        for (i, row) in upper.iter().enumerate() {
            for (offset, &value) in row.iter().enumerate() {
                let j = i + 1 + offset;
                matrix[(i, j)] = value;
                matrix[(j, i)] = value;
            }
        }

        Ok(Self { matrix })
    }

    /// Number of components covered
    pub fn len(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.nrows() == 0
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.len() && j < self.len() {
            Some(self.matrix[(i, j)])
        } else {
            None
        }
    }

    pub fn row(&self, i: usize) -> Option<Vec<f64>> {
        (i < self.len()).then(|| self.matrix.row(i).iter().copied().collect())
    }

    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }
}
