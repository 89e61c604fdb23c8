//! Elementary matrices and diagonal averaging
//!
//! Each singular triplet `(sigma_i, U_i, V_i)` defines a rank-1 elementary
//! matrix `sigma_i * U_i * V_i^T`. Averaging that matrix along its
//! anti-diagonals maps it back to a series of length `N = L + K - 1`: the
//! reconstructed component. Because the trajectory matrix is Hankel and the
//! elementary matrices sum to it, the components sum to the original series.

use nalgebra::DMatrix;

/// Rank-1 elementary matrix `sigma * u[:, i] * v_t[i, :]`
pub fn elementary_matrix(u: &DMatrix<f64>, sigma: f64, v_t: &DMatrix<f64>, i: usize) -> DMatrix<f64> {
    (u.column(i) * v_t.row(i)) * sigma
}

/// Mean of diagonal `offset` of the row-reversed matrix
///
/// Reversing the rows turns the anti-diagonal `row + col = offset + rows - 1`
/// into an ordinary diagonal, so offsets run from `-(rows - 1)` to `cols - 1`.
fn reversed_diagonal_mean(matrix: &DMatrix<f64>, offset: isize) -> f64 {
    let rows = matrix.nrows() as isize;
    let cols = matrix.ncols() as isize;
    let start = (-offset).max(0);
    let end = rows.min(cols - offset);

    let mut sum = 0.0;
    for r in start..end {
        sum += matrix[((rows - 1 - r) as usize, (r + offset) as usize)];
    }
    sum / (end - start) as f64
}

/// Anti-diagonal average of an `L x K` matrix into a series of length `L + K - 1`
///
/// Entry `t` of the result is the mean of all `matrix[(a, b)]` with `a + b = t`.
pub fn diagonal_average(matrix: &DMatrix<f64>) -> Vec<f64> {
    let (rows, cols) = matrix.shape();
    if rows == 0 || cols == 0 {
        return Vec::new();
    }
    (-(rows as isize - 1)..cols as isize)
        .map(|offset| reversed_diagonal_mean(matrix, offset))
        .collect()
}

/// Number of trajectory entries sample `t` contributes to: `min(t + 1, L, K, N - t)`
pub fn anti_diagonal_len(t: usize, rows: usize, cols: usize) -> usize {
    let len = rows + cols - 1;
    (t + 1).min(rows).min(cols).min(len - t)
}
