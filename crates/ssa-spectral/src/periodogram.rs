//! Periodogram power spectral density estimate

use crate::error::{Result, SpectralError};
use crate::spectrum::Spectrum;
use num_complex::Complex;
use rustfft::{Fft, FftPlanner};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Smallest power of two `>= n`, with `next_power_of_two(0) = 1`
///
/// # Examples
///
/// ```rust
/// use ssa_spectral::next_power_of_two;
///
/// assert_eq!(next_power_of_two(0), 1);
/// assert_eq!(next_power_of_two(200), 256);
/// assert_eq!(next_power_of_two(256), 256);
/// ```
pub fn next_power_of_two(n: usize) -> usize {
    n.next_power_of_two()
}

/// Sampling rate `1 / mean(diff(time))` of a sample time axis
///
/// # Errors
/// - `SpectralError::SignalTooShort` for fewer than two samples
/// - `SpectralError::InvalidSpacing` if the mean spacing is not a positive finite number
pub fn sampling_rate(time: &[f64]) -> Result<f64> {
    let n = time.len();
    if n < 2 {
        return Err(SpectralError::SignalTooShort { length: n });
    }
    // mean of consecutive differences telescopes to the end points
    let spacing = (time[n - 1] - time[0]) / (n - 1) as f64;
    if !spacing.is_finite() || spacing <= 0.0 {
        return Err(SpectralError::InvalidSpacing(format!(
            "mean spacing {spacing} must be positive and finite"
        )));
    }
    Ok(1.0 / spacing)
}

/// A periodogram processor for signals of a fixed length
///
/// The estimate follows the classic one-sided density periodogram:
///
/// 1. The sample mean is removed (constant detrend)
/// 2. The signal is zero padded to `nfft = next_power_of_two(n)` and transformed
///    with a boxcar window
/// 3. `|X_k|^2` is scaled by `1 / (fs * n)`
/// 4. Bins `k = 0..=nfft/2` are kept, and every bin except DC and Nyquist is doubled
///
/// With this scaling `sum(power) * fs / nfft` equals the population variance
/// of the signal, so the area under the spectrum is the signal power.
///
/// The FFT plan is built once, so a processor can be reused across all
/// components of a decomposition, which share one length.
///
/// # Examples
///
/// ```rust
/// use ssa_spectral::Periodogram;
/// use std::f64::consts::TAU;
///
/// let time: Vec<f64> = (0..256).map(f64::from).collect();
/// let signal: Vec<f64> = time.iter().map(|t| (TAU * t / 16.0).sin()).collect();
///
/// let periodogram = Periodogram::new(signal.len());
/// let spectrum = periodogram.compute(&time, &signal).unwrap();
///
/// assert_eq!(spectrum.dominant_frequency(), Some(1.0 / 16.0));
/// ```
#[derive(Clone)]
pub struct Periodogram {
    length: usize,
    nfft: usize,
    fft: Arc<dyn Fft<f64>>,
}

impl fmt::Debug for Periodogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Periodogram")
            .field("length", &self.length)
            .field("nfft", &self.nfft)
            .finish()
    }
}

impl Periodogram {
    /// Create a processor for signals of `length` samples
    pub fn new(length: usize) -> Self {
        let nfft = next_power_of_two(length);
        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(nfft);
        Self { length, nfft, fft }
    }

    /// Signal length this processor handles
    pub fn length(&self) -> usize {
        self.length
    }

    /// FFT length after zero padding
    pub fn nfft(&self) -> usize {
        self.nfft
    }

    /// Periodogram of `values` sampled at times `time`
    ///
    /// The sampling rate is derived from the time axis via [`sampling_rate`].
    ///
    /// # Errors
    /// - `SpectralError::LengthMismatch` if either input does not match the processor length
    /// - `SpectralError::SignalTooShort` for fewer than two samples
    /// - `SpectralError::InvalidSpacing` if the time axis is not increasing on average
    /// - `SpectralError::InvalidInput` if a value is NaN or infinite
    pub fn compute(&self, time: &[f64], values: &[f64]) -> Result<Spectrum> {
        self.check_length(time.len())?;
        let fs = sampling_rate(time)?;
        self.compute_with_rate(values, fs)
    }

    /// Periodogram of `values` sampled at a known rate `fs`
    pub fn compute_with_rate(&self, values: &[f64], fs: f64) -> Result<Spectrum> {
        self.check_length(values.len())?;
        if self.length < 2 {
            return Err(SpectralError::SignalTooShort {
                length: self.length,
            });
        }
        if !fs.is_finite() || fs <= 0.0 {
            return Err(SpectralError::InvalidSpacing(format!(
                "sampling rate {fs} must be positive and finite"
            )));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(SpectralError::InvalidInput(
                "signal contains NaN or infinite values".to_string(),
            ));
        }

        let n = self.length;
        let mean = values.iter().sum::<f64>() / n as f64;

        let mut buffer = vec![Complex::new(0.0, 0.0); self.nfft];
        for (slot, &v) in buffer.iter_mut().zip(values) {
            *slot = Complex::new(v - mean, 0.0);
        }
        self.fft.process(&mut buffer);

        let scale = 1.0 / (fs * n as f64);
        let half = self.nfft / 2;
        let nyquist_bin = (self.nfft % 2 == 0).then_some(half);

        let power: Vec<f64> = buffer[..=half]
            .iter()
            .enumerate()
            .map(|(k, x)| {
                let p = x.norm_sqr() * scale;
                if k == 0 || Some(k) == nyquist_bin {
                    p
                } else {
                    2.0 * p
                }
            })
            .collect();
        let frequencies: Vec<f64> = (0..=half)
            .map(|k| k as f64 * fs / self.nfft as f64)
            .collect();

        debug!(n, nfft = self.nfft, fs, "periodogram computed");
        Ok(Spectrum::new(frequencies, power))
    }

    fn check_length(&self, actual: usize) -> Result<()> {
        if actual != self.length {
            return Err(SpectralError::LengthMismatch {
                expected: self.length,
                actual,
            });
        }
        Ok(())
    }
}

/// Convenience function for a one-off periodogram
///
/// # Arguments
/// * `time` - Sample times, increasing on average
/// * `values` - Signal values, one per sample time
pub fn periodogram(time: &[f64], values: &[f64]) -> Result<Spectrum> {
    if time.len() != values.len() {
        return Err(SpectralError::LengthMismatch {
            expected: time.len(),
            actual: values.len(),
        });
    }
    Periodogram::new(values.len()).compute(time, values)
}
