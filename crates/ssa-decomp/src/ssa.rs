//! The singular spectrum analysis engine

use crate::averaging::{diagonal_average, elementary_matrix};
use crate::config::{MemoryMode, SsaParameters};
use crate::decomposition::{decompose, SingularTriplets};
use crate::embedding::{lagged_count, trajectory_matrix};
use crate::selection::ComponentSelection;
use crate::table::ComponentTable;
use crate::wcorr::{self, WCorrelation};
use nalgebra::DMatrix;
use ssa_core::{Error, IntoTimeSeries, Result, TimeIndex, TimeSeries};
use tracing::{debug, instrument, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A completed singular spectrum decomposition of one series
///
/// Construction embeds the series into its `L x K` trajectory matrix,
/// decomposes it, diagonally averages every elementary matrix into a
/// reconstructed component and computes the w-correlation matrix. All of that
/// happens eagerly in [`Ssa::new`]; afterwards the value is immutable and every
/// query is a pure function of the stored components, so a shared `&Ssa` can
/// be queried from any number of threads.
///
/// # Examples
///
/// ```rust
/// use ssa_decomp::Ssa;
///
/// let series: Vec<f64> = (1..=10).map(f64::from).collect();
/// let ssa = Ssa::with_window(&series, 3).unwrap();
///
/// assert_eq!(ssa.k(), 8);
/// assert!(ssa.rank() <= 3);
///
/// // All components together give back the series
/// let full = ssa.reconstruct(0..ssa.rank()).unwrap();
/// for (a, b) in full.values().iter().zip(&series) {
///     assert!((a - b).abs() < 1e-9);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Ssa {
    params: SsaParameters,
    series: TimeSeries,
    k: usize,
    rank: usize,
    singular_values: Vec<f64>,
    u: DMatrix<f64>,
    v: Option<DMatrix<f64>>,
    elementary: Option<Vec<DMatrix<f64>>>,
    components: Vec<Vec<f64>>,
    wcorr: WCorrelation,
}

impl Ssa {
    /// Decompose `series` with the given parameters
    ///
    /// # Errors
    /// - `Error::InvalidInput` if the series contains NaN or infinite values
    /// - `Error::InvalidParameter` if the window length is outside `[2, N/2]`
    ///   or the rank tolerance is invalid
    /// - `Error::Computation` if the SVD does not converge
    /// - `Error::DegenerateComponent` if a component has zero weighted norm
    ///
    /// Input validation finishes before any decomposition work starts.
    #[instrument(skip_all, fields(window_length = params.window_length, memory_mode = ?params.memory_mode))]
    pub fn new<S: IntoTimeSeries>(series: S, params: SsaParameters) -> Result<Self> {
        let series = series.into_time_series()?;
        let n = series.len();
        params.validate(n)?;

        let l = params.window_length;
        let k = lagged_count(n, l);
        debug!(n, l, k, "embedding series");

        let trajectory = trajectory_matrix(series.values(), l)?;
        let triplets = decompose(trajectory, params.rank_tolerance)?;
        let rank = triplets.rank;

        let retain = params.memory_mode == MemoryMode::Retain;
        let (components, elementary) = extract_components(&triplets, retain);
        debug!(rank, retain, "components extracted");

        let weights = wcorr::weights(n, l);
        let wcorr = WCorrelation::compute(&components, &weights)?;
        debug!(rank, "w-correlation computed");

        let SingularTriplets {
            u,
            singular_values,
            v_t,
            ..
        } = triplets;

        Ok(Self {
            params,
            series,
            k,
            rank,
            singular_values,
            u,
            v: retain.then(|| v_t.transpose()),
            elementary,
            components,
            wcorr,
        })
    }

    /// Decompose with window length `window_length` and default settings
    pub fn with_window<S: IntoTimeSeries>(series: S, window_length: usize) -> Result<Self> {
        Self::new(series, SsaParameters::new(window_length))
    }

    pub fn params(&self) -> &SsaParameters {
        &self.params
    }

    /// Series length N
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Window length L
    pub fn window_length(&self) -> usize {
        self.params.window_length
    }

    /// Number of lagged windows `K = N - L + 1`
    pub fn k(&self) -> usize {
        self.k
    }

    /// Numerical rank d, the number of reconstructed components
    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn memory_mode(&self) -> MemoryMode {
        self.params.memory_mode
    }

    pub fn original(&self) -> &TimeSeries {
        &self.series
    }

    pub fn index(&self) -> &TimeIndex {
        self.series.index()
    }

    /// All `min(L, K)` singular values in descending order
    ///
    /// Only the first [`rank`](Self::rank) of them have components.
    pub fn singular_values(&self) -> &[f64] {
        &self.singular_values
    }

    /// Left singular vectors as columns (`L x min(L, K)`)
    pub fn left_singular_vectors(&self) -> &DMatrix<f64> {
        &self.u
    }

    /// Right singular vectors as columns (`K x min(L, K)`), kept only in
    /// [`MemoryMode::Retain`]
    pub fn right_singular_vectors(&self) -> Option<&DMatrix<f64>> {
        self.v.as_ref()
    }

    /// Elementary matrices of the first `rank` triplets, kept only in
    /// [`MemoryMode::Retain`]
    pub fn elementary_matrices(&self) -> Option<&[DMatrix<f64>]> {
        self.elementary.as_deref()
    }

    /// Elementary matrix `i`, `None` when out of range or not retained
    pub fn elementary_matrix(&self, i: usize) -> Option<&DMatrix<f64>> {
        self.elementary.as_ref().and_then(|e| e.get(i))
    }

    /// Reconstructed component `i`
    ///
    /// # Errors
    /// Returns `Error::IndexOutOfBounds` if `i >= rank`.
    pub fn component(&self, i: usize) -> Result<&[f64]> {
        self.components
            .get(i)
            .map(Vec::as_slice)
            .ok_or(Error::IndexOutOfBounds {
                index: i,
                rank: self.rank,
            })
    }

    /// The first `min(n, rank)` components as a labelled table, all of them for `n = 0`
    pub fn components(&self, n: usize) -> ComponentTable {
        let n = if n > 0 { n.min(self.rank) } else { self.rank };
        ComponentTable::new(self.series.index().clone(), self.components[..n].to_vec())
    }

    /// Sum of the selected components, labelled by the original index
    ///
    /// # Errors
    /// Returns `Error::IndexOutOfBounds` if any selected index is `>= rank`.
    pub fn reconstruct<S: ComponentSelection>(&self, selection: S) -> Result<TimeSeries> {
        let mut values = vec![0.0; self.len()];
        for i in selection.component_indices() {
            let component = self.component(i)?;
            for (acc, x) in values.iter_mut().zip(component) {
                *acc += x;
            }
        }
        TimeSeries::new(self.series.index().clone(), values)
    }

    /// Original series minus the selected components
    pub fn residual<S: ComponentSelection>(&self, selection: S) -> Result<TimeSeries> {
        let reconstructed = self.reconstruct(selection)?;
        let values = self
            .series
            .values()
            .iter()
            .zip(reconstructed.values())
            .map(|(x, r)| x - r)
            .collect();
        TimeSeries::new(self.series.index().clone(), values)
    }

    /// Share of the total squared singular values carried by each component
    pub fn contribution(&self) -> Vec<f64> {
        let total: f64 = self.singular_values.iter().map(|s| s * s).sum();
        if total == 0.0 {
            return Vec::new();
        }
        self.singular_values[..self.rank]
            .iter()
            .map(|s| s * s / total)
            .collect()
    }

    pub fn wcorr(&self) -> &WCorrelation {
        &self.wcorr
    }
}

/// Reconstructed component `i` and its elementary matrix
fn extract_component(triplets: &SingularTriplets, i: usize) -> (Vec<f64>, DMatrix<f64>) {
    let elementary = elementary_matrix(&triplets.u, triplets.singular_values[i], &triplets.v_t, i);
    let component = diagonal_average(&elementary);
    trace!(component = i, sigma = triplets.singular_values[i], "diagonal averaging done");
    (component, elementary)
}

fn extract_components(
    triplets: &SingularTriplets,
    retain: bool,
) -> (Vec<Vec<f64>>, Option<Vec<DMatrix<f64>>>) {
    let keep = |(component, elementary): (Vec<f64>, DMatrix<f64>)| {
        (component, retain.then_some(elementary))
    };

    #[cfg(feature = "parallel")]
    let (components, elementary): (Vec<Vec<f64>>, Vec<Option<DMatrix<f64>>>) = (0..triplets.rank)
        .into_par_iter()
        .map(|i| keep(extract_component(triplets, i)))
        .unzip();

    #[cfg(not(feature = "parallel"))]
    let (components, elementary): (Vec<Vec<f64>>, Vec<Option<DMatrix<f64>>>) = (0..triplets.rank)
        .map(|i| keep(extract_component(triplets, i)))
        .unzip();

    let elementary = retain.then(|| elementary.into_iter().flatten().collect());
    (components, elementary)
}
