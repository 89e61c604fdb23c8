//! DataFrame views of decomposition results

use crate::{Error, Result, SsaDataFrame, INDEX_COLUMN};
use polars::prelude::*;
use ssa_decomp::{column_name, ComponentSelection, Ssa};

impl SsaDataFrame for Ssa {
    fn components_frame(&self, n: usize) -> Result<DataFrame> {
        let table = self.components(n);

        let mut columns: Vec<Column> = Vec::with_capacity(table.n_components() + 1);
        columns.push(index_column(table.index().as_slice()));
        for (name, values) in table.iter() {
            columns.push(Series::new(name.into(), values).into());
        }

        Ok(DataFrame::new(columns)?)
    }

    fn reconstruct_frame<S: ComponentSelection>(&self, selection: S, name: &str) -> Result<DataFrame> {
        if name == INDEX_COLUMN {
            return Err(Error::InvalidColumn(format!(
                "'{name}' is reserved for the index column"
            )));
        }
        let reconstructed = self.reconstruct(selection)?;
        let columns = vec![
            index_column(reconstructed.index().as_slice()),
            Series::new(name.into(), reconstructed.values()).into(),
        ];

        Ok(DataFrame::new(columns)?)
    }

    fn wcorr_frame(&self) -> Result<DataFrame> {
        let matrix = self.wcorr().as_matrix();

        let columns: Vec<Column> = (0..matrix.ncols())
            .map(|j| {
                let values: Vec<f64> = matrix.column(j).iter().copied().collect();
                Series::new(column_name(j).as_str().into(), values).into()
            })
            .collect();

        Ok(DataFrame::new(columns)?)
    }
}

fn index_column(index: &[f64]) -> Column {
    Series::new(INDEX_COLUMN.into(), index).into()
}
