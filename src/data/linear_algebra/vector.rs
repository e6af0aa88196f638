//! # Dense vector operations
//!
//! Vectors are plain slices and `Vec`s; these are the few operations the algorithms need on top.
use itertools::Itertools;
use num_traits::Float;

/// Inner product of two vectors of equal length.
pub fn inner_product<F: Float>(left: &[F], right: &[F]) -> F {
    left.iter().zip_eq(right)
        .fold(F::zero(), |total, (&l, &r)| total + l * r)
}

/// Spread values over a vector of zeros.
///
/// # Arguments
///
/// * `values`: Value for each index in `indices`.
/// * `indices`: Unique indices, all smaller than `len`.
/// * `len`: Length of the result.
///
/// # Return value
///
/// A vector with `values[k]` at index `indices[k]` and zeros elsewhere.
pub fn scatter<F: Float>(values: &[F], indices: &[usize], len: usize) -> Vec<F> {
    debug_assert_eq!(values.len(), indices.len());
    debug_assert!(indices.iter().all(|&i| i < len));

    let mut result = vec![F::zero(); len];
    for (&value, &i) in values.iter().zip_eq(indices) {
        result[i] = value;
    }

    result
}

/// Whether all values are at least `-tolerance`.
pub fn is_nonnegative<F: Float>(values: &[F], tolerance: F) -> bool {
    values.iter().all(|&value| value >= -tolerance)
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::vector::{inner_product, is_nonnegative, scatter};

    #[test]
    fn test_inner_product() {
        assert_eq!(inner_product(&[1_f64, 2_f64, 3_f64], &[4_f64, 5_f64, 6_f64]), 32_f64);
        assert_eq!(inner_product::<f64>(&[], &[]), 0_f64);
    }

    #[test]
    fn test_scatter() {
        assert_eq!(scatter(&[4_f64, 2_f64], &[0, 3], 4), vec![4_f64, 0_f64, 0_f64, 2_f64]);
        assert_eq!(scatter::<f64>(&[], &[], 2), vec![0_f64, 0_f64]);
    }

    #[test]
    fn test_is_nonnegative() {
        assert!(is_nonnegative(&[0_f64, 1_f64, -1e-12], 1e-10));
        assert!(!is_nonnegative(&[0_f64, -1e-3], 1e-10));
    }
}
