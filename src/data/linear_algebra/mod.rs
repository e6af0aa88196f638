//! # Linear algebra primitives
//!
//! Dense matrices and a few vector operations, generic over a floating point type.

pub mod matrix;
pub mod vector;

/// Default tolerance below which a value is treated as zero.
pub const EPSILON: f64 = 1e-10;
