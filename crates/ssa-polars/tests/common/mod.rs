//! Common test utilities for ssa-polars tests

#![allow(dead_code)]

use polars::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use std::f64::consts::TAU;

/// Yearly `data` series: trend, a 10 year cycle and seeded noise
pub fn yearly_df(len: usize, seed: u64) -> DataFrame {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 0.1).unwrap();

    let years: Vec<i64> = (0..len as i64).map(|i| 1900 + i).collect();
    let data: Vec<f64> = (0..len)
        .map(|i| {
            let t = i as f64;
            1.0 + 0.02 * t + (TAU * t / 10.0).sin() + normal.sample(&mut rng)
        })
        .collect();

    df!["year" => years, "data" => data].unwrap()
}

/// Extract an `f64` column as a vector
pub fn f64_values(df: &DataFrame, name: &str) -> Vec<f64> {
    df.column(name)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap())
        .collect()
}
