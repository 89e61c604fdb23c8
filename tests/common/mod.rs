//! Shared utilities for end-to-end tests

#![allow(dead_code)]

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use std::f64::consts::TAU;

/// Route `tracing` output to the test harness, honouring `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Sample times in kyr, one sample per kyr
pub fn kyr_axis(len: usize) -> Vec<f64> {
    (0..len).map(|i| i as f64).collect()
}

/// Offset plus 100, 41 and 23 kyr cycles of decreasing amplitude, with seeded noise
pub fn orbital_signal(time: &[f64], seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 0.05).unwrap();

    time.iter()
        .map(|&t| {
            5.0 + 3.0 * (TAU * t / 100.0).sin()
                + 2.0 * (TAU * t / 41.0).cos()
                + 1.0 * (TAU * t / 23.0).sin()
                + normal.sample(&mut rng)
        })
        .collect()
}
