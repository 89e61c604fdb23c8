//! Numeric sample types accepted by the decomposition
//!
//! Every computation in the workspace runs in `f64`. This trait only fixes
//! which primitive sample types a series may be built from and how they
//! widen to `f64`.

use num_traits::Num;
use std::fmt::Debug;

/// Base trait for numeric types a time series can be built from
pub trait Numeric: Num + Copy + PartialOrd + Debug + Send + Sync {
    /// Convert to f64 for decomposition
    fn to_f64(&self) -> f64;

    /// Check if value is finite (always true for integers)
    fn is_finite(&self) -> bool;
}

impl Numeric for f64 {
    fn to_f64(&self) -> f64 {
        *self
    }

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl Numeric for f32 {
    fn to_f64(&self) -> f64 {
        *self as f64
    }

    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }
}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn to_f64(&self) -> f64 {
                    *self as f64
                }

                fn is_finite(&self) -> bool {
                    true // Integers are always finite
                }
            }
        )*
    };
}

impl_numeric_int!(i8, i16, i32, i64, u8, u16, u32, u64);
