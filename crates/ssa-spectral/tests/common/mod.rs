//! Shared utilities for integration tests

#![allow(dead_code)]

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use std::f64::consts::TAU;

/// Evenly spaced sample times starting at `start`
pub fn time_axis(len: usize, start: f64, step: f64) -> Vec<f64> {
    (0..len).map(|i| start + step * i as f64).collect()
}

/// `amplitude * sin(2 pi t / period)` evaluated at each time
pub fn sine_at(time: &[f64], period: f64, amplitude: f64) -> Vec<f64> {
    time.iter()
        .map(|t| amplitude * (TAU * t / period).sin())
        .collect()
}

/// Gaussian noise with a fixed seed
pub fn noise(len: usize, std_dev: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(0.0, std_dev).unwrap();
    (0..len).map(|_| normal.sample(&mut rng)).collect()
}

pub fn variance(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}
