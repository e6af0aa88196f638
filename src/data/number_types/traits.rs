//! # Traits
//!
//! The simplex algorithm is defined over the ordered fields. Floating point numbers are only an
//! approximation of one; comparisons with zero are done up to a tolerance throughout the
//! algorithms.
use std::fmt::{Debug, Display};

use num_traits::Float;

/// Number type used by the algorithms.
///
/// Automatically implemented for all types satisfying the trait's bounds. The formatting bounds
/// are needed for logging.
pub trait OrderedField: Float + Debug + Display {
}
impl<T: Float + Debug + Display> OrderedField for T {
}

/// Convert a tolerance given as `f64` to the number type used.
///
/// Falls back to the machine epsilon of the target type if the value can't be represented.
pub fn tolerance<F: OrderedField>(value: f64) -> F {
    F::from(value).unwrap_or_else(F::epsilon)
}

#[cfg(test)]
mod test {
    use crate::data::number_types::traits::tolerance;

    #[test]
    fn conversion() {
        assert_eq!(tolerance::<f64>(1e-10), 1e-10);
        assert_eq!(tolerance::<f32>(0.5), 0.5_f32);
    }
}
