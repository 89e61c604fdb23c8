//! Property-based tests for the decomposition invariants
//!
//! Random series and window lengths are checked for completeness of the
//! reconstruction, w-correlation bounds and the rank bound.

mod common;

use common::assert_close;
use proptest::prelude::*;
use ssa_decomp::{MemoryMode, Ssa, SsaParameters};

/// A random series together with a valid window length
fn series_and_window() -> impl Strategy<Value = (Vec<f64>, usize)> {
    (8usize..80).prop_flat_map(|len| {
        (
            prop::collection::vec(-100.0f64..100.0, len),
            2usize..=len / 2,
        )
    })
}

fn max_abs(values: &[f64]) -> f64 {
    values.iter().fold(0.0f64, |m, v| m.max(v.abs()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Property: all components together give back the series
    #[test]
    fn prop_full_reconstruction_is_complete((series, window) in series_and_window()) {
        let ssa = Ssa::with_window(&series, window).unwrap();
        let full = ssa.reconstruct(0..ssa.rank()).unwrap();

        let scale = max_abs(&series).max(1.0);
        for (a, b) in full.values().iter().zip(&series) {
            prop_assert!((a - b).abs() <= 1e-9 * scale, "{} vs {}", a, b);
        }
    }

    // Property: w-correlations lie in [0, 1] with a unit diagonal and symmetry
    #[test]
    fn prop_wcorr_bounds((series, window) in series_and_window()) {
        let ssa = Ssa::with_window(&series, window).unwrap();
        let wcorr = ssa.wcorr();
        prop_assert_eq!(wcorr.len(), ssa.rank());

        for i in 0..wcorr.len() {
            prop_assert_eq!(wcorr.get(i, i), Some(1.0));
            for j in 0..wcorr.len() {
                let w = wcorr.get(i, j).unwrap();
                prop_assert!((0.0..=1.0).contains(&w), "w[{}][{}] = {}", i, j, w);
                prop_assert_eq!(w, wcorr.get(j, i).unwrap());
            }
        }
    }

    // Property: the rank never exceeds the window length
    #[test]
    fn prop_rank_bound((series, window) in series_and_window()) {
        let ssa = Ssa::with_window(&series, window).unwrap();
        prop_assert!(ssa.rank() <= window);
        prop_assert!(ssa.rank() <= ssa.k());
        prop_assert_eq!(ssa.singular_values().len(), window.min(ssa.k()));
        prop_assert!(ssa.singular_values().windows(2).all(|w| w[0] >= w[1]));
    }

    // Property: every component has the length of the series
    #[test]
    fn prop_component_lengths((series, window) in series_and_window()) {
        let ssa = Ssa::with_window(&series, window).unwrap();
        let table = ssa.components(0);
        prop_assert_eq!(table.len(), series.len());
        for (_, column) in table.iter() {
            prop_assert_eq!(column.len(), series.len());
        }
    }

    // Property: selection order does not change the reconstruction
    #[test]
    fn prop_order_invariance((series, window) in series_and_window()) {
        let ssa = Ssa::with_window(&series, window).unwrap();
        prop_assume!(ssa.rank() >= 2);

        let forward: Vec<usize> = (0..ssa.rank()).collect();
        let backward: Vec<usize> = forward.iter().rev().copied().collect();
        let a = ssa.reconstruct(&forward).unwrap();
        let b = ssa.reconstruct(&backward).unwrap();

        let scale = max_abs(&series).max(1.0);
        assert_close(a.values(), b.values(), 1e-12 * scale, "order invariance");
    }

    // Property: a pair reconstructs to the sum of its single components
    #[test]
    fn prop_pair_is_sum_of_singles(
        (series, window) in series_and_window(),
        a in 0usize..64,
        b in 0usize..64,
    ) {
        let ssa = Ssa::with_window(&series, window).unwrap();
        prop_assume!(ssa.rank() >= 2);
        let (i, j) = (a % ssa.rank(), b % ssa.rank());
        prop_assume!(i != j);

        let pair = ssa.reconstruct([i, j]).unwrap();
        let swapped = ssa.reconstruct([j, i]).unwrap();
        let first = ssa.reconstruct(i).unwrap();
        let second = ssa.reconstruct(j).unwrap();
        let summed: Vec<f64> = first
            .values()
            .iter()
            .zip(second.values())
            .map(|(x, y)| x + y)
            .collect();

        let scale = max_abs(&series).max(1.0);
        assert_close(pair.values(), &summed, 1e-12 * scale, "pair vs singles");
        assert_close(pair.values(), swapped.values(), 1e-12 * scale, "pair order");
    }

    // Property: retaining elementary matrices does not change the components
    #[test]
    fn prop_memory_mode_is_transparent((series, window) in series_and_window()) {
        let saved = Ssa::with_window(&series, window).unwrap();
        let retained = Ssa::new(
            &series,
            SsaParameters::new(window).with_memory_mode(MemoryMode::Retain),
        )
        .unwrap();

        prop_assert_eq!(saved.rank(), retained.rank());
        for i in 0..saved.rank() {
            prop_assert_eq!(saved.component(i).unwrap(), retained.component(i).unwrap());
        }
    }
}

#[test]
fn test_reconstruct_is_idempotent() {
    let series = common::trend_season_noise(96, 7);
    let ssa = Ssa::with_window(&series, 24).unwrap();

    let first = ssa.reconstruct([0, 1, 2]).unwrap();
    let second = ssa.reconstruct([0, 1, 2]).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_duplicate_indices_count_twice() {
    let series = common::uniform(40, 5.0, 11);
    let ssa = Ssa::with_window(&series, 8).unwrap();

    let once = ssa.reconstruct(1).unwrap();
    let twice = ssa.reconstruct([1, 1]).unwrap();
    let doubled: Vec<f64> = once.values().iter().map(|v| 2.0 * v).collect();
    assert_close(twice.values(), &doubled, 1e-12, "duplicate indices");
}
