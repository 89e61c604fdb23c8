//! Component selections accepted by reconstruction queries

use std::ops::{Range, RangeInclusive};

/// A single component index or an ordered collection of them
///
/// Indices are summed with multiplicity: selecting `[0, 0]` counts
/// component 0 twice.
pub trait ComponentSelection {
    fn component_indices(&self) -> Vec<usize>;
}

impl ComponentSelection for usize {
    fn component_indices(&self) -> Vec<usize> {
        vec![*self]
    }
}

impl ComponentSelection for [usize] {
    fn component_indices(&self) -> Vec<usize> {
        self.to_vec()
    }
}

impl<const N: usize> ComponentSelection for [usize; N] {
    fn component_indices(&self) -> Vec<usize> {
        self.to_vec()
    }
}

impl ComponentSelection for Vec<usize> {
    fn component_indices(&self) -> Vec<usize> {
        self.clone()
    }
}

impl ComponentSelection for Range<usize> {
    fn component_indices(&self) -> Vec<usize> {
        self.clone().collect()
    }
}

impl ComponentSelection for RangeInclusive<usize> {
    fn component_indices(&self) -> Vec<usize> {
        self.clone().collect()
    }
}

impl<S: ComponentSelection + ?Sized> ComponentSelection for &S {
    fn component_indices(&self) -> Vec<usize> {
        (**self).component_indices()
    }
}
