//! Core traits for singular spectrum analysis on Polars DataFrames

use crate::Result;
use polars::prelude::*;
use ssa_decomp::{ComponentSelection, Ssa, SsaParameters};

/// Name of the index column in frames produced by [`SsaDataFrame`]
pub const INDEX_COLUMN: &str = "index";

/// Extension trait for decomposing a DataFrame column
pub trait SsaFrameExt {
    /// Decompose a numeric column
    ///
    /// # Arguments
    /// * `value_col` - Column holding the series values
    /// * `index_col` - Optional column holding a strictly increasing index
    ///   (e.g. years); positions `0..N` are used when `None`
    /// * `params` - Decomposition parameters
    ///
    /// # Returns
    /// The completed decomposition, labelled by the index column
    ///
    /// # Errors
    /// Fails with `Error::InvalidColumn` for a missing column, `Error::TypeMismatch`
    /// for a non-numeric column, `Error::InvalidInput` for nulls and `Error::Core`
    /// when the decomposition itself rejects the series.
    fn ssa_decompose(
        &self,
        value_col: &str,
        index_col: Option<&str>,
        params: SsaParameters,
    ) -> Result<Ssa>;
}

/// Conversion of decomposition results into DataFrames
pub trait SsaDataFrame {
    /// The first `min(n, rank)` components, all of them for `n = 0`
    ///
    /// # Returns
    /// DataFrame with the `index` column followed by `F0, F1, ...`
    fn components_frame(&self, n: usize) -> Result<DataFrame>;

    /// Sum of the selected components
    ///
    /// # Arguments
    /// * `selection` - Component indices to sum
    /// * `name` - Name of the value column
    ///
    /// # Returns
    /// DataFrame with columns `index` and `name`
    ///
    /// # Errors
    /// Fails with `Error::InvalidColumn` when `name` is `index`.
    fn reconstruct_frame<S: ComponentSelection>(&self, selection: S, name: &str) -> Result<DataFrame>;

    /// The `d x d` w-correlation matrix
    ///
    /// # Returns
    /// DataFrame with one column per component, `F0, F1, ...`; row `i` of
    /// column `Fj` holds the w-correlation of components `i` and `j`
    fn wcorr_frame(&self) -> Result<DataFrame>;
}
