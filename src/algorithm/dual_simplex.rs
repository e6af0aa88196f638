//! # Dual simplex method
//!
//! Starting from a basis whose reduced costs are all non-negative, each iteration removes a
//! variable with a negative value from the basis while keeping the reduced costs non-negative,
//! until the basic solution is primal feasible. Useful when a problem changes slightly after it
//! was solved, such as when a constraint is added.
use log::{debug, trace};

use crate::algorithm::pivot_engine::{PivotEngine, run, Step};
use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, PivotRule};
use crate::algorithm::two_phase::tableau::{basis_cost, non_basic_indices};
use crate::algorithm::two_phase::tableau::inverse_maintenance::BasisInverse;
use crate::config::SolverConfig;
use crate::data::linear_algebra::vector::{inner_product, scatter};
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::number_types::traits::{OrderedField, tolerance};
use crate::error::SolverError;

/// How a run of the dual method ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DualStatus {
    /// The basic solution is feasible, and as such optimal.
    Solved,
    /// A basic variable is negative, but can't be increased by any basis exchange.
    Infeasible,
    /// The iteration limit was reached.
    GaveUp,
}

/// Final state of a run of the dual method.
#[derive(Debug, Clone, PartialEq)]
pub struct DualResult<F> {
    /// How the run ended.
    pub status: DualStatus,
    /// Basic solution `κ` of length `n`, zero outside of the basis.
    pub kappa: Vec<F>,
    /// Dual plan `c_B · A_B⁻¹`.
    pub y: Vec<F>,
    /// Basis of `kappa`.
    pub basis: Vec<usize>,
    /// Number of iterations performed, including the one that concluded.
    pub iterations: usize,
}

/// Carried from one iteration of the dual method to the next.
#[derive(Debug, Clone, PartialEq)]
pub struct DualState<F> {
    basis: Vec<usize>,
    inverse: Option<BasisInverse<F>>,
    last_changed: Option<usize>,
    kappa: Vec<F>,
    y: Vec<F>,
}

/// Iteration body of the dual simplex method.
pub struct Dual<'a, F, PR> {
    problem: &'a CanonicalForm<F>,
    rule: PR,
    tolerance: F,
}

impl<'a, F, PR> Dual<'a, F, PR>
where
    F: OrderedField,
    PR: PivotRule<F>,
{
    /// Create a new instance for a problem, with a fresh pivot rule.
    pub fn new(problem: &'a CanonicalForm<F>, tolerance: F) -> Self {
        Self { problem, rule: PR::new(), tolerance }
    }
}

impl<F, PR> PivotEngine for Dual<'_, F, PR>
where
    F: OrderedField,
    PR: PivotRule<F>,
{
    type State = DualState<F>;
    type Outcome = (DualStatus, DualState<F>);

    fn iterate(&mut self, state: Self::State) -> Result<Step<Self::State, Self::Outcome>, SolverError> {
        let DualState { mut basis, inverse, last_changed, .. } = state;
        let constraints = self.problem.constraints();
        let inverse = BasisInverse::refresh(inverse, last_changed, &basis, constraints, self.tolerance)?;

        let kappa = scatter(&inverse.generate_column(self.problem.b()), &basis, self.problem.nr_variables());
        let y = inverse.dual_prices(&basis_cost(self.problem.cost(), &basis));

        let Some(leaving) = self.rule.select_dual_pivot_row(&kappa, self.tolerance) else {
            let state = DualState { basis, inverse: Some(inverse), last_changed: None, kappa, y };
            return Ok(Step::Done((DualStatus::Solved, state)));
        };
        let position = basis.iter().position(|&j| j == leaving)
            .ok_or_else(|| SolverError::InvalidBasis(format!("column {} has a value but is not basic", leaving)))?;

        let delta_y = inverse.row(position);
        let ratios = non_basic_indices(&basis, self.problem.nr_variables()).into_iter()
            .filter_map(|j| {
                let column = constraints.column(j);
                let mu = inner_product(delta_y, &column);
                if mu < -self.tolerance {
                    Some((j, (self.problem.cost()[j] - inner_product(&column, &y)) / mu))
                } else {
                    None
                }
            })
            .collect::<Vec<_>>();

        let Some(entering) = self.rule.select_dual_pivot_column(&ratios) else {
            trace!("Column {} can't leave the basis, no row coefficient is negative", leaving);
            let state = DualState { basis, inverse: Some(inverse), last_changed: None, kappa, y };
            return Ok(Step::Done((DualStatus::Infeasible, state)));
        };

        trace!("Column {} (value {}) leaves at position {}, column {} enters", leaving, kappa[leaving], position, entering);
        basis[position] = entering;

        Ok(Step::Continue(DualState { basis, inverse: Some(inverse), last_changed: Some(position), kappa, y }))
    }

    fn give_up(&mut self, state: Self::State) -> Self::Outcome {
        (DualStatus::GaveUp, state)
    }
}

/// Run the dual simplex method from a dual feasible basis.
///
/// # Arguments
///
/// * `problem`: Problem in canonical form, the right-hand side may have any sign.
/// * `basis`: Basis for which all reduced costs are non-negative.
/// * `config`: Iteration limit and tolerance.
///
/// # Errors
///
/// If the basis doesn't fit the problem, or if a basis matrix turns out to be singular.
pub fn dual<F, PR>(
    problem: &CanonicalForm<F>,
    basis: Vec<usize>,
    config: &SolverConfig,
) -> Result<DualResult<F>, SolverError>
where
    F: OrderedField,
    PR: PivotRule<F>,
{
    problem.validate_basis(&basis)?;

    debug!("Starting dual simplex on {} constraints and {} variables", problem.nr_constraints(), problem.nr_variables());
    let mut engine = Dual::<F, PR>::new(problem, tolerance(config.tolerance));
    let initial = DualState {
        basis,
        inverse: None,
        last_changed: None,
        kappa: vec![F::zero(); problem.nr_variables()],
        y: vec![F::zero(); problem.nr_constraints()],
    };
    let ((status, state), iterations) = run(&mut engine, initial, config.max_iterations)?;
    debug!("Dual simplex ended with status {:?} after {} iterations", status, iterations);

    Ok(DualResult { status, kappa: state.kappa, y: state.y, basis: state.basis, iterations })
}

/// Run the dual simplex method with the default configuration and pivot rule.
///
/// # Errors
///
/// If the basis doesn't fit the problem, or if a basis matrix turns out to be singular.
pub fn dual_solve<F: OrderedField>(
    problem: &CanonicalForm<F>,
    basis: Vec<usize>,
) -> Result<DualResult<F>, SolverError> {
    dual::<F, FirstProfitable>(problem, basis, &SolverConfig::default())
}
