//! Time index and time series types
//!
//! A [`TimeSeries`] pairs a fully observed, finite sequence of samples with a
//! strictly increasing [`TimeIndex`]. The index is only used to label samples
//! (and to derive a sampling rate for spectral estimates); the decomposition
//! itself works on the values alone.

use crate::{Error, Numeric, Result};
use serde::{Deserialize, Serialize};

/// Strictly increasing, finite sample positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct TimeIndex {
    values: Vec<f64>,
}

impl TimeIndex {
    /// Create an index from explicit positions
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if any position is non-finite or the
    /// positions are not strictly increasing.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("time index"));
        }
        if let Some(pos) = values.windows(2).position(|w| w[1] <= w[0]) {
            return Err(Error::InvalidInput(format!(
                "time index must be strictly increasing (position {} -> {})",
                pos,
                pos + 1
            )));
        }
        Ok(Self { values })
    }

    /// Positional index `0, 1, ..., len - 1`
    pub fn positional(len: usize) -> Self {
        Self {
            values: (0..len).map(|i| i as f64).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Mean spacing between consecutive positions, `None` for fewer than two
    pub fn mean_spacing(&self) -> Option<f64> {
        let n = self.values.len();
        if n < 2 {
            return None;
        }
        Some((self.values[n - 1] - self.values[0]) / (n - 1) as f64)
    }
}

impl TryFrom<Vec<f64>> for TimeIndex {
    type Error = Error;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl From<TimeIndex> for Vec<f64> {
    fn from(index: TimeIndex) -> Self {
        index.values
    }
}

#[derive(Deserialize)]
struct TimeSeriesRepr {
    index: TimeIndex,
    values: Vec<f64>,
}

/// An evenly sampled, fully observed series with its time index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TimeSeriesRepr")]
pub struct TimeSeries {
    index: TimeIndex,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Create a series from an index and matching values
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if the lengths differ or any value is
    /// NaN or infinite.
    pub fn new(index: TimeIndex, values: Vec<f64>) -> Result<Self> {
        if index.len() != values.len() {
            return Err(Error::size_mismatch(index.len(), values.len(), "time series"));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("time series"));
        }
        Ok(Self { index, values })
    }

    /// Create a series with a positional index from any numeric slice
    pub fn from_values<T: Numeric>(values: &[T]) -> Result<Self> {
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("time series"));
        }
        Ok(Self {
            index: TimeIndex::positional(values.len()),
            values: values.iter().map(Numeric::to_f64).collect(),
        })
    }

    pub fn index(&self) -> &TimeIndex {
        &self.index
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(time, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.index
            .as_slice()
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    pub fn into_parts(self) -> (TimeIndex, Vec<f64>) {
        (self.index, self.values)
    }
}

impl TryFrom<TimeSeriesRepr> for TimeSeries {
    type Error = Error;

    fn try_from(repr: TimeSeriesRepr) -> Result<Self> {
        Self::new(repr.index, repr.values)
    }
}

/// Conversion into a validated [`TimeSeries`]
///
/// Implemented for the sequence representations the engine supports:
/// numeric slices, vectors and arrays (positional index) and `TimeSeries`
/// itself. Values that type-check but are not a valid series (NaN, infinite
/// samples) are rejected at runtime with `Error::InvalidInput`.
pub trait IntoTimeSeries {
    fn into_time_series(self) -> Result<TimeSeries>;
}

impl IntoTimeSeries for TimeSeries {
    fn into_time_series(self) -> Result<TimeSeries> {
        Ok(self)
    }
}

impl IntoTimeSeries for &TimeSeries {
    fn into_time_series(self) -> Result<TimeSeries> {
        Ok(self.clone())
    }
}

impl<T: Numeric> IntoTimeSeries for &[T] {
    fn into_time_series(self) -> Result<TimeSeries> {
        TimeSeries::from_values(self)
    }
}

impl<T: Numeric> IntoTimeSeries for Vec<T> {
    fn into_time_series(self) -> Result<TimeSeries> {
        TimeSeries::from_values(&self)
    }
}

impl<T: Numeric> IntoTimeSeries for &Vec<T> {
    fn into_time_series(self) -> Result<TimeSeries> {
        TimeSeries::from_values(self)
    }
}

impl<T: Numeric, const N: usize> IntoTimeSeries for [T; N] {
    fn into_time_series(self) -> Result<TimeSeries> {
        TimeSeries::from_values(&self)
    }
}

impl<T: Numeric, const N: usize> IntoTimeSeries for &[T; N] {
    fn into_time_series(self) -> Result<TimeSeries> {
        TimeSeries::from_values(self)
    }
}
