//! One-sided power spectra and frequency bands

use crate::error::{Result, SpectralError};

/// A one-sided power spectral density on an evenly spaced frequency grid
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    frequencies: Vec<f64>,
    power: Vec<f64>,
}

impl Spectrum {
    pub(crate) fn new(frequencies: Vec<f64>, power: Vec<f64>) -> Self {
        debug_assert_eq!(frequencies.len(), power.len());
        Self { frequencies, power }
    }

    /// Bin frequencies `k * fs / nfft`, starting at DC
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Power spectral density per bin
    pub fn power(&self) -> &[f64] {
        &self.power
    }

    pub fn len(&self) -> usize {
        self.power.len()
    }

    pub fn is_empty(&self) -> bool {
        self.power.is_empty()
    }

    /// Iterate over `(frequency, power)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequencies.iter().copied().zip(self.power.iter().copied())
    }

    /// Sum of the power over all bins
    pub fn total_power(&self) -> f64 {
        self.power.iter().sum()
    }

    /// Frequency of the strongest non-DC bin
    ///
    /// Returns `None` when there is no bin above DC or the spectrum carries no power.
    pub fn dominant_frequency(&self) -> Option<f64> {
        self.iter()
            .skip(1)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .filter(|&(_, p)| p > 0.0)
            .map(|(f, _)| f)
    }

    /// Sum of the power over bins with `low <= f <= high`
    pub fn band_power(&self, low: f64, high: f64) -> f64 {
        self.iter()
            .filter(|&(f, _)| f >= low && f <= high)
            .map(|(_, p)| p)
            .sum()
    }

    /// Power within `band`, see [`Spectrum::band_power`]
    pub fn power_in(&self, band: &FrequencyBand) -> f64 {
        self.band_power(band.low(), band.high())
    }
}

/// A named closed frequency interval `[low, high]`
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyBand {
    name: String,
    low: f64,
    high: f64,
}

impl FrequencyBand {
    /// # Errors
    /// Returns `SpectralError::InvalidInput` unless `0 <= low <= high` and both are finite.
    pub fn new(name: impl Into<String>, low: f64, high: f64) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() || low < 0.0 || low > high {
            return Err(SpectralError::InvalidInput(format!(
                "frequency band [{low}, {high}] must satisfy 0 <= low <= high"
            )));
        }
        Ok(Self {
            name: name.into(),
            low,
            high,
        })
    }

    /// Band covering all cycles with a period between `short_period` and `long_period`
    ///
    /// ```rust
    /// use ssa_spectral::FrequencyBand;
    ///
    /// let band = FrequencyBand::from_periods("decadal", 12.0, 8.0).unwrap();
    /// assert_eq!(band.low(), 1.0 / 12.0);
    /// assert_eq!(band.high(), 1.0 / 8.0);
    /// ```
    pub fn from_periods(name: impl Into<String>, long_period: f64, short_period: f64) -> Result<Self> {
        if short_period.is_nan() || long_period.is_nan() || short_period <= 0.0 || long_period < short_period {
            return Err(SpectralError::InvalidInput(format!(
                "periods must satisfy 0 < short ({short_period}) <= long ({long_period})"
            )));
        }
        Self::new(name, 1.0 / long_period, 1.0 / short_period)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, frequency: f64) -> bool {
        frequency >= self.low && frequency <= self.high
    }
}
