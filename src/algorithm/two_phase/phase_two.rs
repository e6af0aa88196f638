//! # Phase two: improving a basic feasible solution
//!
//! The revised primal simplex method. Starting from a basic feasible solution, each iteration
//! exchanges one basis column for another without losing feasibility, until no column has a
//! negative relative cost or until a column is found along which the objective increases without
//! bound.
use itertools::Itertools;
use log::{debug, trace};

use crate::algorithm::pivot_engine::{PivotEngine, run, Step};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::{
    basis_cost, is_in_basic_feasible_solution_state, IterationState, non_basic_indices, relative_cost,
};
use crate::algorithm::two_phase::tableau::inverse_maintenance::BasisInverse;
use crate::config::SolverConfig;
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::number_types::traits::{OrderedField, tolerance};
use crate::error::SolverError;

/// How a run of the primal method ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimalStatus {
    /// No non-basic column has a negative relative cost.
    Optimal,
    /// A profitable column has no positive component; the objective increases without bound.
    Unbounded,
    /// The iteration limit was reached.
    GaveUp,
}

/// Final state of a run of the primal method.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimalResult<F> {
    /// How the run ended.
    pub status: PrimalStatus,
    /// The last plan, which is a basic feasible solution.
    pub plan: Vec<F>,
    /// Basis of the last plan.
    pub basis: Vec<usize>,
    /// Number of iterations performed, including the one that concluded.
    pub iterations: usize,
}

/// Iteration body of the primal simplex method.
pub struct Primal<'a, F, PR> {
    problem: &'a CanonicalForm<F>,
    rule: PR,
    tolerance: F,
}

impl<'a, F, PR> Primal<'a, F, PR>
where
    F: OrderedField,
    PR: PivotRule<F>,
{
    /// Create a new instance for a problem, with a fresh pivot rule.
    pub fn new(problem: &'a CanonicalForm<F>, tolerance: F) -> Self {
        Self { problem, rule: PR::new(), tolerance }
    }
}

impl<F, PR> PivotEngine for Primal<'_, F, PR>
where
    F: OrderedField,
    PR: PivotRule<F>,
{
    type State = IterationState<F>;
    type Outcome = (PrimalStatus, IterationState<F>);

    fn iterate(&mut self, state: Self::State) -> Result<Step<Self::State, Self::Outcome>, SolverError> {
        // Rounding errors accumulate over iterations
        debug_assert!(is_in_basic_feasible_solution_state(self.problem, &state, self.tolerance.sqrt()));

        let IterationState { plan, mut basis, inverse, last_changed } = state;
        let constraints = self.problem.constraints();
        let inverse = BasisInverse::refresh(inverse, last_changed, &basis, constraints, self.tolerance)?;
        trace!("{}", inverse);

        let u = inverse.dual_prices(&basis_cost(self.problem.cost(), &basis));
        let relative_costs = non_basic_indices(&basis, self.problem.nr_variables()).into_iter()
            .map(|j| (j, relative_cost(self.problem, &u, j)))
            .collect::<Vec<_>>();

        let (entering, cost) = match self.rule.select_primal_pivot_column(&relative_costs, self.tolerance) {
            Some(choice) => choice,
            None => {
                let state = IterationState { plan, basis, inverse: Some(inverse), last_changed: None };
                return Ok(Step::Done((PrimalStatus::Optimal, state)));
            },
        };

        let z = inverse.generate_column(&constraints.column(entering));
        let ratios = basis.iter().zip_eq(&z)
            .map(|(&basic, &z_i)| if z_i > self.tolerance { Some(plan[basic] / z_i) } else { None })
            .collect::<Vec<_>>();

        let (leaving_position, theta) = match self.rule.select_primal_pivot_row(&ratios)
            .and_then(|i| ratios[i].map(|theta| (i, theta))) {
            Some(choice) => choice,
            None => {
                trace!("Column {} with relative cost {} has no positive component", entering, cost);
                let state = IterationState { plan, basis, inverse: Some(inverse), last_changed: None };
                return Ok(Step::Done((PrimalStatus::Unbounded, state)));
            },
        };

        let mut next_plan = vec![F::zero(); plan.len()];
        for (i, (&basic, &z_i)) in basis.iter().zip_eq(&z).enumerate() {
            if i != leaving_position {
                next_plan[basic] = plan[basic] - theta * z_i;
            }
        }
        next_plan[entering] = theta;

        trace!(
            "Column {} (relative cost {}) replaces column {} at position {}, step length {}",
            entering, cost, basis[leaving_position], leaving_position, theta,
        );
        basis[leaving_position] = entering;

        Ok(Step::Continue(IterationState {
            plan: next_plan,
            basis,
            inverse: Some(inverse),
            last_changed: Some(leaving_position),
        }))
    }

    fn give_up(&mut self, state: Self::State) -> Self::Outcome {
        (PrimalStatus::GaveUp, state)
    }
}

/// Maximize the objective starting from a basic feasible solution.
///
/// # Arguments
///
/// * `problem`: Problem in canonical form.
/// * `plan`: A basic feasible solution of the problem.
/// * `basis`: The basis of `plan`, determining the order of the basis positions.
/// * `config`: Iteration limit and tolerance.
///
/// # Return value
///
/// The status, and the last plan and basis. In case the problem is unbounded, this is the plan
/// from which the unbounded direction was found.
///
/// # Errors
///
/// If the plan or basis don't fit the problem, if the plan is not the basic feasible solution of
/// the basis, or if the basis matrix turns out to be singular.
pub fn primal<F, PR>(
    problem: &CanonicalForm<F>,
    plan: Vec<F>,
    basis: Vec<usize>,
    config: &SolverConfig,
) -> Result<PrimalResult<F>, SolverError>
where
    F: OrderedField,
    PR: PivotRule<F>,
{
    if plan.len() != problem.nr_variables() {
        return Err(SolverError::dimension_mismatch("length of the plan", problem.nr_variables(), plan.len()));
    }
    problem.validate_basis(&basis)?;
    let state = IterationState::new(plan, basis);
    let tolerance: F = tolerance(config.tolerance);
    if !is_in_basic_feasible_solution_state(problem, &state, tolerance.sqrt()) {
        return Err(SolverError::InvalidBasis("the plan is not a basic feasible solution for this basis".to_string()));
    }

    debug!("Starting primal simplex on {} constraints and {} variables", problem.nr_constraints(), problem.nr_variables());
    let mut engine = Primal::<F, PR>::new(problem, tolerance);
    let ((status, state), iterations) = run(&mut engine, state, config.max_iterations)?;
    debug!("Primal simplex ended with status {:?} after {} iterations", status, iterations);

    Ok(PrimalResult { status, plan: state.plan, basis: state.basis, iterations })
}
