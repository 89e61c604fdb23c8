//! DataFrame column extraction and decomposition

use crate::{Error, Result, SsaFrameExt};
use polars::prelude::*;
use ssa_core::{TimeIndex, TimeSeries};
use ssa_decomp::{Ssa, SsaParameters};
use tracing::debug;

impl SsaFrameExt for DataFrame {
    fn ssa_decompose(
        &self,
        value_col: &str,
        index_col: Option<&str>,
        params: SsaParameters,
    ) -> Result<Ssa> {
        let values = numeric_column(self, value_col)?;
        let index = match index_col {
            Some(name) => TimeIndex::new(numeric_column(self, name)?)?,
            None => TimeIndex::positional(values.len()),
        };
        debug!(value_col, ?index_col, n = values.len(), "decomposing column");

        let series = TimeSeries::new(index, values)?;
        Ok(Ssa::new(series, params)?)
    }
}

/// Read a numeric column as `f64` values, rejecting nulls
fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = df
        .column(name)
        .map_err(|_| Error::InvalidColumn(name.to_string()))?;

    let column = match column.dtype() {
        DataType::Float64 => column.clone(),
        DataType::Float32
        | DataType::Int64
        | DataType::Int32
        | DataType::Int16
        | DataType::Int8
        | DataType::UInt64
        | DataType::UInt32
        | DataType::UInt16
        | DataType::UInt8 => column.cast(&DataType::Float64)?,
        dt => {
            return Err(Error::TypeMismatch {
                expected: "numeric".to_string(),
                got: format!("{:?}", dt),
            });
        }
    };

    let ca = column.f64()?;
    if ca.null_count() > 0 {
        return Err(Error::InvalidInput(format!(
            "column '{}' contains {} null values",
            name,
            ca.null_count()
        )));
    }

    ca.into_iter()
        .collect::<Option<Vec<f64>>>()
        .ok_or_else(|| Error::InvalidInput(format!("column '{}' contains null values", name)))
}
