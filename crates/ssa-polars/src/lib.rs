//! Polars integration for singular spectrum analysis
//!
//! This crate decomposes a DataFrame column and hands the results back as
//! DataFrames, through two extension traits:
//!
//! - [`SsaFrameExt`] on `DataFrame` builds an [`Ssa`] from a value column and
//!   an optional index column
//! - [`SsaDataFrame`] on [`Ssa`] turns components, reconstructions and the
//!   w-correlation matrix into DataFrames
//!
//! # Example
//!
//! ```rust
//! use polars::prelude::*;
//! use ssa_polars::{SsaDataFrame, SsaFrameExt, SsaParameters};
//!
//! let years: Vec<i32> = (1950..2000).collect();
//! let data: Vec<f64> = (0..50).map(|i| (i as f64 * 0.8).sin() + 0.1 * i as f64).collect();
//! let df = df!["year" => years, "data" => data].unwrap();
//!
//! let ssa = df
//!     .ssa_decompose("data", Some("year"), SsaParameters::new(12))
//!     .unwrap();
//!
//! let components = ssa.components_frame(3).unwrap();
//! assert_eq!(components.width(), 4);
//! assert!(components.column("index").is_ok());
//! assert!(components.column("F2").is_ok());
//!
//! let trend = ssa.reconstruct_frame(0, "trend").unwrap();
//! assert_eq!(trend.shape(), (50, 2));
//! ```

mod error;
mod methods;
mod traits;

pub use error::{Error, Result};
pub use traits::*;

// Re-export commonly used types from dependencies
pub use ssa_decomp::{ComponentSelection, MemoryMode, RankTolerance, Ssa, SsaParameters};
