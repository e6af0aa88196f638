//! A covering problem, the slack basis is dual feasible but not primal feasible.
//!
//! minimize `2 x0 + 3 x1` subject to `x0 + x1 ≥ 2`, `x0 + 2 x1 ≥ 3`, written as a maximization
//! with the constraints multiplied by minus one.
use crate::data::linear_program::canonical_form::CanonicalForm;

pub fn canonical_form() -> CanonicalForm<f64> {
    CanonicalForm::new(
        vec![-2_f64, -3_f64, 0_f64, 0_f64],
        vec![
            vec![-1_f64, -1_f64, 1_f64, 0_f64],
            vec![-1_f64, -2_f64, 0_f64, 1_f64],
        ],
        vec![-2_f64, -3_f64],
    ).unwrap()
}

pub fn initial_basis() -> Vec<usize> {
    vec![2, 3]
}

pub fn optimal_basis() -> Vec<usize> {
    vec![0, 1]
}

pub fn optimal_kappa() -> Vec<f64> {
    vec![1_f64, 1_f64, 0_f64, 0_f64]
}
