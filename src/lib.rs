//! Singular spectrum analysis toolkit
//!
//! Umbrella crate re-exporting the workspace:
//!
//! - [`ssa_core`]: error taxonomy, numeric trait and time-series types
//! - [`ssa_decomp`]: the SSA engine, reconstruction and w-correlation
//! - [`ssa_spectral`]: periodogram and frequency-band queries
//! - [`ssa_polars`]: DataFrame integration
//!
//! # Example
//!
//! ```rust
//! use ssa_stats::prelude::*;
//!
//! let series: Vec<f64> = (0..128)
//!     .map(|t| (std::f64::consts::TAU * t as f64 / 16.0).sin())
//!     .collect();
//! let ssa = Ssa::with_window(&series, 32).unwrap();
//!
//! let spectra = component_spectra(&ssa, 2).unwrap();
//! let peak = spectra[0].dominant_frequency().unwrap();
//! assert!((peak - 1.0 / 16.0).abs() < 1e-9);
//! ```

pub use ssa_core;
pub use ssa_decomp;
pub use ssa_polars;
pub use ssa_spectral;

use ssa_decomp::Ssa;
use ssa_spectral::{Periodogram, Spectrum};

/// Periodograms of the first `min(n, rank)` components, all of them for `n = 0`
///
/// Every component shares the index of the decomposed series, so one FFT
/// plan serves all of them.
pub fn component_spectra(ssa: &Ssa, n: usize) -> ssa_spectral::Result<Vec<Spectrum>> {
    let table = ssa.components(n);
    let periodogram = Periodogram::new(table.len());
    let time = table.index().as_slice();

    table
        .columns()
        .iter()
        .map(|component| periodogram.compute(time, component))
        .collect()
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::component_spectra;
    pub use ssa_core::{Error, IntoTimeSeries, Result, TimeIndex, TimeSeries};
    pub use ssa_decomp::{
        ComponentSelection, ComponentTable, MemoryMode, RankTolerance, Ssa, SsaParameters,
        WCorrelation,
    };
    pub use ssa_polars::{SsaDataFrame, SsaFrameExt};
    pub use ssa_spectral::{periodogram, FrequencyBand, Periodogram, SpectralError, Spectrum};
}
