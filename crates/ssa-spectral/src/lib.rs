//! # Spectral estimation for reconstructed components
//!
//! A periodogram implementation on top of RustFFT, used to inspect which
//! frequencies each reconstructed component of a singular spectrum
//! decomposition carries.
//!
//! ## Mathematical Background
//!
//! For a signal `x_0..x_{n-1}` sampled at rate `fs` the periodogram estimates
//! the power spectral density as
//!
//! ```text
//! P_k = c_k * |X_k|^2 / (fs * n),    f_k = k * fs / nfft,    k = 0..=nfft/2
//! ```
//!
//! where `X` is the DFT of the mean-removed signal zero padded to
//! `nfft = next_power_of_two(n)` and `c_k` is 2 for every bin except DC and
//! Nyquist (1). The sampling rate is taken as `1 / mean(diff(time))`.
//!
//! ## Basic Usage
//!
//! ```rust
//! use ssa_spectral::{periodogram, FrequencyBand};
//! use std::f64::consts::TAU;
//!
//! // Yearly samples of a 10 year cycle
//! let time: Vec<f64> = (0..128).map(|i| 1900.0 + i as f64).collect();
//! let signal: Vec<f64> = time.iter().map(|t| (TAU * t / 10.0).cos()).collect();
//!
//! let spectrum = periodogram(&time, &signal).unwrap();
//! let peak = spectrum.dominant_frequency().unwrap();
//! assert!((1.0 / peak - 10.0).abs() < 1.0);
//!
//! // Most of the power sits in the 8 to 12 year band
//! let band = FrequencyBand::from_periods("decadal", 12.0, 8.0).unwrap();
//! assert!(spectrum.power_in(&band) > 0.5 * spectrum.total_power());
//! ```

pub mod error;
pub mod periodogram;
pub mod spectrum;

pub use error::{Result, SpectralError};
pub use periodogram::{next_power_of_two, periodogram, sampling_rate, Periodogram};
pub use spectrum::{FrequencyBand, Spectrum};
