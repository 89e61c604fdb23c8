//! Singular spectrum analysis
//!
//! This crate decomposes a univariate series into additive reconstructed
//! components (RCs) using the classic SSA pipeline:
//!
//! 1. **Embedding**: the series is laid out in an `L x K` Hankel trajectory matrix
//! 2. **SVD**: the trajectory matrix is factored into sorted singular triplets
//! 3. **Diagonal averaging**: each rank-1 elementary matrix is mapped back to a series
//! 4. **W-correlation**: weighted correlations measure how well RCs separate
//!
//! The RCs always sum back to the original series, so any subset can be
//! recombined into a trend, a periodic part or a residual.
//!
//! # Features
//!
//! - `parallel`: extract components and compute the w-correlation matrix with rayon
//!
//! # Example
//!
//! ```rust
//! use ssa_decomp::{Ssa, SsaParameters};
//!
//! let series: Vec<f64> = (0..120)
//!     .map(|t| 0.05 * t as f64 + (t as f64 * std::f64::consts::TAU / 12.0).sin())
//!     .collect();
//!
//! let ssa = Ssa::new(&series, SsaParameters::new(24)).unwrap();
//!
//! // Leading components, labelled F0, F1, ...
//! let table = ssa.components(3);
//! assert_eq!(table.names()[0], "F0");
//!
//! // Recombine a subset
//! let smooth = ssa.reconstruct(0..3).unwrap();
//! assert_eq!(smooth.len(), series.len());
//!
//! // Separability of the first two components
//! let w01 = ssa.wcorr().get(0, 1).unwrap();
//! assert!((0.0..=1.0).contains(&w01));
//! ```

pub mod averaging;
pub mod config;
pub mod decomposition;
pub mod embedding;
pub mod selection;
pub mod ssa;
pub mod table;
pub mod wcorr;

// Re-export main types
pub use config::{MemoryMode, RankTolerance, SsaParameters};
pub use decomposition::SingularTriplets;
pub use selection::ComponentSelection;
pub use ssa::Ssa;
pub use table::{column_name, ComponentTable};
pub use wcorr::WCorrelation;

// Re-export from ssa-core
pub use ssa_core::{Error, IntoTimeSeries, Result, TimeIndex, TimeSeries};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        ComponentSelection, ComponentTable, Error, IntoTimeSeries, MemoryMode, Result, Ssa,
        SsaParameters, TimeSeries, WCorrelation,
    };
}
