//! Labelled table of reconstructed components

use ssa_core::TimeIndex;

/// The first `n` reconstructed components, labelled by the series index
///
/// Columns are named `F0, F1, ...` in decomposition order.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentTable {
    index: TimeIndex,
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl ComponentTable {
    pub(crate) fn new(index: TimeIndex, columns: Vec<Vec<f64>>) -> Self {
        let names = (0..columns.len()).map(column_name).collect();
        Self {
            index,
            names,
            columns,
        }
    }

    pub fn index(&self) -> &TimeIndex {
        &self.index
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn columns(&self) -> &[Vec<f64>] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.columns[i].as_slice())
    }

    /// Number of component columns
    pub fn n_components(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows (series length)
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Iterate over `(name, values)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> + '_ {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter().map(Vec::as_slice))
    }
}

/// Column name of component `i`
pub fn column_name(i: usize) -> String {
    format!("F{i}")
}
