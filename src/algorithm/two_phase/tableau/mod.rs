//! # Data structures for Simplex
//!
//! The state that is carried from one simplex iteration to the next, and elementary computations
//! on it.
use std::collections::HashSet;

use itertools::Itertools;

use crate::algorithm::two_phase::tableau::inverse_maintenance::BasisInverse;
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::number_types::traits::OrderedField;

pub mod inverse_maintenance;

/// Everything one iteration of the primal simplex method passes on to the next.
///
/// Moved into an iteration and out again; never shared.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationState<F> {
    /// Current plan `x` of length `n`. Zero outside of the basis.
    pub plan: Vec<F>,
    /// Basis indices, ordered: position `i` of the basis corresponds to row `i` of the inverse.
    pub basis: Vec<usize>,
    /// Basis inverse as computed in the previous iteration, `None` before the first iteration.
    pub inverse: Option<BasisInverse<F>>,
    /// Basis position that was overwritten in the previous iteration.
    pub last_changed: Option<usize>,
}

impl<F> IterationState<F> {
    /// Start a run from a plan and a basis, without a known inverse.
    pub fn new(plan: Vec<F>, basis: Vec<usize>) -> Self {
        Self { plan, basis, inverse: None, last_changed: None }
    }
}

/// Indices of all columns not in the basis, in ascending order.
///
/// # Arguments
///
/// * `basis`: Basis indices, all smaller than `nr_columns`.
/// * `nr_columns`: Number of columns of the problem.
pub fn non_basic_indices(basis: &[usize], nr_columns: usize) -> Vec<usize> {
    let basis_columns = basis.iter().copied().collect::<HashSet<_>>();
    (0..nr_columns).filter(|j| !basis_columns.contains(j)).collect()
}

/// Cost coefficients of the basis columns, in basis order: `c_B`.
pub fn basis_cost<F: Copy>(cost: &[F], basis: &[usize]) -> Vec<F> {
    basis.iter().map(|&j| cost[j]).collect()
}

/// Relative cost of a column with respect to the dual prices: `δ_j = u · A_j - c_j`.
pub fn relative_cost<F: OrderedField>(problem: &CanonicalForm<F>, dual_prices: &[F], j: usize) -> F {
    let column = problem.constraints().column(j);
    column.iter().zip_eq(dual_prices)
        .fold(F::zero(), |total, (&a, &u)| total + a * u) - problem.cost()[j]
}

/// Check whether a state is a basic feasible solution of a problem.
///
/// Values outside of the basis need to be exactly zero, the constraints and bounds need to hold
/// up to the tolerance.
pub fn is_in_basic_feasible_solution_state<F: OrderedField>(
    problem: &CanonicalForm<F>,
    state: &IterationState<F>,
    tolerance: F,
) -> bool {
    let basis_columns = state.basis.iter().collect::<HashSet<_>>();

    state.basis.len() == problem.nr_constraints()
        && basis_columns.len() == state.basis.len()
        && (0..problem.nr_variables())
            .filter(|j| !basis_columns.contains(j))
            .all(|j| state.plan[j].is_zero())
        && problem.is_feasible(&state.plan, tolerance)
}
