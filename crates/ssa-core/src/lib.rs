//! Core types for singular spectrum analysis
//!
//! This crate holds the pieces every other crate in the workspace agrees on:
//!
//! - [`Error`] / [`Result`]: the error taxonomy shared by the decomposition
//!   engine and its integrations
//! - [`Numeric`]: the sample types a series may be built from
//! - [`TimeIndex`] / [`TimeSeries`]: an evenly sampled, fully observed series
//!   together with the index used to label its samples
//!
//! # Example
//!
//! ```rust
//! use ssa_core::{IntoTimeSeries, TimeIndex, TimeSeries};
//!
//! // Bare values get a positional index 0, 1, 2, ...
//! let series = vec![1.0, 2.0, 3.0].into_time_series().unwrap();
//! assert_eq!(series.index().as_slice(), &[0.0, 1.0, 2.0]);
//!
//! // An explicit index is carried through unchanged
//! let index = TimeIndex::new(vec![0.0, 2.5, 5.0]).unwrap();
//! let series = TimeSeries::new(index, vec![4.1, 4.3, 4.2]).unwrap();
//! assert_eq!(series.len(), 3);
//! ```

pub mod error;
pub mod numeric;
pub mod series;

pub use error::{Error, Result};
pub use numeric::Numeric;
pub use series::{IntoTimeSeries, TimeIndex, TimeSeries};
