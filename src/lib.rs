//! # A revised simplex solver
//!
//! Linear programs in canonical form (maximize `c·x` subject to `A·x = b`, `x ≥ 0`) are solved
//! with a two-phase revised simplex method. The basis inverse is carried from pivot to pivot with
//! a rank-one update rather than being recomputed. A dual simplex method is available for
//! re-optimizing a basis that has become primal infeasible, for example after a change of `b`.
//!
//! ```
//! use revsim::{CanonicalForm, OptimizationResult, solve};
//!
//! let problem = CanonicalForm::new(
//!     vec![3_f64, 2_f64, 0_f64, 0_f64],
//!     vec![
//!         vec![1_f64, 1_f64, 1_f64, 0_f64],
//!         vec![1_f64, 3_f64, 0_f64, 1_f64],
//!     ],
//!     vec![4_f64, 6_f64],
//! ).unwrap();
//!
//! match solve(&problem).unwrap() {
//!     OptimizationResult::FiniteOptimum(x) => assert_eq!(problem.objective_value(&x), 12_f64),
//!     _ => unreachable!(),
//! }
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod config;
pub mod data;
pub mod error;

pub use crate::algorithm::{OptimizationResult, Phase};
pub use crate::algorithm::dual_simplex::{dual_solve, DualResult, DualStatus};
pub use crate::algorithm::reference::reference_solve;
pub use crate::algorithm::two_phase::{solve, solve_with};
pub use crate::config::SolverConfig;
pub use crate::data::linear_program::canonical_form::CanonicalForm;
pub use crate::error::SolverError;

#[cfg(test)]
mod tests;
