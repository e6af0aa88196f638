//! # Number types
//!
//! The algorithms are written once for any floating point type. In practice, they are used with
//! `f64`.
pub mod traits;
