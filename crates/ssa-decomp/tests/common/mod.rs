//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use std::f64::consts::TAU;

pub const EPSILON: f64 = 1e-9;

/// Route `tracing` output to the test harness, honouring `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// `amplitude * sin(2 pi t / period)` for `t = 0..len`
pub fn sine(len: usize, period: f64, amplitude: f64) -> Vec<f64> {
    (0..len)
        .map(|t| amplitude * (TAU * t as f64 / period).sin())
        .collect()
}

/// Gaussian noise with a fixed seed
pub fn noise(len: usize, std_dev: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(0.0, std_dev).unwrap();
    (0..len).map(|_| normal.sample(&mut rng)).collect()
}

/// Uniform values in `[-scale, scale)` with a fixed seed
pub fn uniform(len: usize, scale: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-scale..scale)).collect()
}

/// Linear trend plus a seasonal term plus noise
pub fn trend_season_noise(len: usize, seed: u64) -> Vec<f64> {
    let season = sine(len, 12.0, 2.0);
    let noise = noise(len, 0.3, seed);
    (0..len)
        .map(|t| 10.0 + 0.1 * t as f64 + season[t] + noise[t])
        .collect()
}

/// Elementwise sum of vectors of equal length
pub fn sum_columns(columns: &[&[f64]]) -> Vec<f64> {
    let len = columns.first().map_or(0, |c| c.len());
    (0..len).map(|t| columns.iter().map(|c| c[t]).sum()).collect()
}

/// Assert two vectors agree within `tolerance`, relative to the larger magnitude
pub fn assert_close(actual: &[f64], expected: &[f64], tolerance: f64, context: &str) {
    assert_eq!(actual.len(), expected.len(), "length mismatch for {context}");
    for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        let scale = a.abs().max(e.abs()).max(1.0);
        assert!(
            (a - e).abs() <= tolerance * scale,
            "{context}: index {i} differs, {a} vs {e}"
        );
    }
}
