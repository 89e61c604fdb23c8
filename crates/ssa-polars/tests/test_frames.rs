//! DataFrame views of decomposition results

mod common;

use approx::assert_relative_eq;
use common::{f64_values, yearly_df};
use ssa_polars::{Error, Ssa, SsaDataFrame, SsaFrameExt, SsaParameters, INDEX_COLUMN};

fn decomposition() -> Ssa {
    yearly_df(80, 11)
        .ssa_decompose("data", Some("year"), SsaParameters::new(20))
        .unwrap()
}

#[test]
fn test_components_frame() {
    let ssa = decomposition();
    let frame = ssa.components_frame(4).unwrap();

    assert_eq!(frame.shape(), (80, 5));
    let index = f64_values(&frame, INDEX_COLUMN);
    assert_eq!(index[0], 1900.0);
    assert_eq!(index[79], 1979.0);

    for i in 0..4 {
        let column = f64_values(&frame, &format!("F{i}"));
        assert_eq!(column.as_slice(), ssa.component(i).unwrap());
    }
    assert!(frame.column("F4").is_err());
}

#[test]
fn test_components_frame_all() {
    let ssa = decomposition();
    let frame = ssa.components_frame(0).unwrap();
    assert_eq!(frame.width(), ssa.rank() + 1);

    let frame = ssa.components_frame(ssa.rank() + 5).unwrap();
    assert_eq!(frame.width(), ssa.rank() + 1);
}

#[test]
fn test_components_frame_sums_to_data() {
    let df = yearly_df(50, 12);
    let ssa = df
        .ssa_decompose("data", None, SsaParameters::new(15))
        .unwrap();
    let frame = ssa.components_frame(0).unwrap();
    let data = f64_values(&df, "data");

    let mut total = vec![0.0; 50];
    for i in 0..ssa.rank() {
        for (acc, v) in total.iter_mut().zip(f64_values(&frame, &format!("F{i}"))) {
            *acc += v;
        }
    }
    for (a, b) in total.iter().zip(&data) {
        assert_relative_eq!(a, b, epsilon = 1e-9);
    }
}

#[test]
fn test_reconstruct_frame() {
    let ssa = decomposition();
    let frame = ssa.reconstruct_frame(0..3, "smooth").unwrap();

    assert_eq!(frame.shape(), (80, 2));
    let smooth = f64_values(&frame, "smooth");
    let expected = ssa.reconstruct(0..3).unwrap();
    assert_eq!(smooth.as_slice(), expected.values());

    assert!(ssa.reconstruct_frame(ssa.rank(), "bad").is_err());
}

#[test]
fn test_reconstruct_frame_rejects_index_name() -> anyhow::Result<()> {
    let ssa = decomposition();
    let err = ssa.reconstruct_frame(0..2, INDEX_COLUMN).unwrap_err();
    assert!(matches!(err, Error::InvalidColumn(_)), "{err}");

    // Any other name is fine
    let frame = ssa.reconstruct_frame(0..2, "index_smooth")?;
    assert_eq!(frame.width(), 2);
    assert_eq!(f64_values(&frame, "index_smooth"), ssa.reconstruct(0..2)?.values());
    Ok(())
}

#[test]
fn test_wcorr_frame() {
    let ssa = decomposition();
    let frame = ssa.wcorr_frame().unwrap();
    let d = ssa.rank();

    assert_eq!(frame.shape(), (d, d));
    for j in 0..d {
        let column = f64_values(&frame, &format!("F{j}"));
        assert_eq!(column[j], 1.0);
        for (i, &w) in column.iter().enumerate() {
            assert_eq!(Some(w), ssa.wcorr().get(i, j));
        }
    }
}
