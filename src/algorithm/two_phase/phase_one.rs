//! # Phase one: finding a basic feasible solution
//!
//! An auxiliary problem with one artificial variable per constraint has an obvious basic feasible
//! solution. Minimizing the sum of the artificial variables yields a basic feasible solution of
//! the original problem, if there is one. Artificial variables that stay in the basis at zero
//! level are then pivoted out, or their constraint is found to be redundant.
use log::debug;

use crate::algorithm::two_phase::phase_two::{primal, PrimalStatus};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::non_basic_indices;
use crate::algorithm::two_phase::tableau::inverse_maintenance::BasisInverse;
use crate::config::SolverConfig;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::number_types::traits::{OrderedField, tolerance};
use crate::error::SolverError;

/// LP's can be either feasible (allowing at least one solution) or infeasible (allowing no
/// solutions).
///
/// If the problem is feasible, it can either have full rank, or be rank deficient.
#[derive(Debug, Clone, PartialEq)]
pub enum RankedFeasibilityResult<F> {
    /// The problem is feasible and all information necessary to start the second phase is in this
    /// variant.
    Feasible {
        /// Whether rows were removed from the problem.
        rank: Rank,
        /// The problem with a non-negative right-hand side and without redundant rows.
        problem: CanonicalForm<F>,
        /// A basic feasible solution of `problem`.
        plan: Vec<F>,
        /// Basis of `plan`, containing only indices of `problem`'s variables.
        basis: Vec<usize>,
    },
    /// The problem is not feasible.
    Infeasible,
    /// The auxiliary problem was not solved within the iteration limit.
    GaveUp {
        /// Number of iterations performed.
        iterations: usize,
    },
}

/// A matrix or linear program either has full rank, or be rank deficient.
///
/// In case it is rank deficient, a sorted, deduplicated list of (row)indices should be provided,
/// that when removed, makes the matrix or linear program full rank.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Rank {
    /// The matrix is full rank, no rows need to be removed.
    Full,
    /// The `Vec<usize>` is sorted and contains no duplicate values.
    Deficient(Vec<usize>),
}

/// Basis without artificial variables.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Correction {
    /// Basis positions in order, with the positions of redundant rows left out.
    pub basis: Vec<usize>,
    /// Rows of the auxiliary problem that are redundant.
    pub rank: Rank,
}

/// Compute a basic feasible solution using an auxiliary problem.
///
/// # Arguments
///
/// * `problem`: Problem in canonical form; the right-hand side may have any sign.
/// * `config`: Iteration limit and tolerance, applied to the auxiliary problem.
///
/// # Return value
///
/// A basic feasible solution of the problem after normalization of the right-hand side and
/// removal of redundant rows, or an indicator that there is none.
///
/// # Errors
///
/// If the auxiliary problem is reported unbounded, or if a basis matrix is singular.
pub fn initial_phase<F, PR>(
    problem: &CanonicalForm<F>,
    config: &SolverConfig,
) -> Result<RankedFeasibilityResult<F>, SolverError>
where
    F: OrderedField,
    PR: PivotRule<F>,
{
    let mut normalized = problem.clone();
    normalized.normalize_rhs();

    let auxiliary = auxiliary_problem(&normalized)?;
    let n = normalized.nr_variables();
    let m = normalized.nr_constraints();
    let plan = vec![F::zero(); n].into_iter().chain(normalized.b().iter().copied()).collect();
    let basis = (n..n + m).collect();

    debug!("Starting initial phase with {} artificial variables", m);
    let result = primal::<F, PR>(&auxiliary, plan, basis, config)?;
    match result.status {
        PrimalStatus::Optimal => {},
        PrimalStatus::Unbounded => return Err(SolverError::UnboundedAuxiliary),
        PrimalStatus::GaveUp => {
            debug!("Initial phase gave up after {} iterations", result.iterations);
            return Ok(RankedFeasibilityResult::GaveUp { iterations: result.iterations });
        },
    }

    let tolerance = tolerance::<F>(config.tolerance);
    if result.plan[n..].iter().any(|value| value.abs() > tolerance) {
        debug!("Artificial variables remain positive, the problem is infeasible");
        return Ok(RankedFeasibilityResult::Infeasible);
    }

    let Correction { basis, rank } = correct_basis(auxiliary.constraints(), n, result.basis, tolerance)?;
    if let Rank::Deficient(rows) = &rank {
        normalized.remove_constraints(rows);
    }
    let mut plan = result.plan;
    plan.truncate(n);

    Ok(RankedFeasibilityResult::Feasible { rank, problem: normalized, plan, basis })
}

/// Maximize minus the sum of one artificial variable per constraint, `[A | I] x̃ = b`.
fn auxiliary_problem<F: OrderedField>(normalized: &CanonicalForm<F>) -> Result<CanonicalForm<F>, SolverError> {
    let cost = vec![F::zero(); normalized.nr_variables()].into_iter()
        .chain(vec![-F::one(); normalized.nr_constraints()])
        .collect();

    CanonicalForm::from_matrix(
        cost,
        normalized.constraints().with_identity_appended(),
        normalized.b().to_vec(),
    )
}

/// Removes all artificial variables from the basis by making a basis change "at zero level", or
/// without change of the auxiliary objective.
///
/// Rows are not removed from `auxiliary` itself. The rows and columns that remain are tracked as
/// lists of indices, such that the artificial variable with index `nr_original + i` keeps
/// belonging to row `i`.
///
/// # Arguments
///
/// * `auxiliary`: Constraint matrix `[A | I]` of the auxiliary problem.
/// * `nr_original`: Number of columns of `A`; the artificial variables follow.
/// * `basis`: Optimal basis of the auxiliary problem, with all artificial variables at zero.
/// * `tolerance`: Components at most this large in absolute value can't be pivoted on.
///
/// # Return value
///
/// A basis containing only original variables, and the redundant rows, sorted.
///
/// # Errors
///
/// If a basis matrix is singular, which can only happen when `basis` was not a basis.
pub fn correct_basis<F: OrderedField>(
    auxiliary: &DenseMatrix<F>,
    nr_original: usize,
    mut basis: Vec<usize>,
    tolerance: F,
) -> Result<Correction, SolverError> {
    debug_assert_eq!(basis.len(), auxiliary.nr_rows());
    debug_assert_eq!(auxiliary.nr_columns(), nr_original + auxiliary.nr_rows());

    let mut active_rows = (0..auxiliary.nr_rows()).collect::<Vec<_>>();
    let mut rows_to_remove = Vec::new();

    while let Some(position) = basis.iter().position(|&j| j >= nr_original) {
        let row = basis[position] - nr_original;
        let inverse = BasisInverse::invert(&auxiliary.select(&active_rows, &basis), tolerance)?;

        let replacement = non_basic_indices(&basis, nr_original).into_iter()
            .find(|&j| {
                let column = auxiliary.column_restricted(&active_rows, j);
                inverse.generate_element(position, &column).abs() > tolerance
            });

        match replacement {
            Some(j) => {
                debug!("Column {} replaces artificial variable {} at position {}", j, basis[position], position);
                basis[position] = j;
            },
            None => {
                debug!("Constraint {} is redundant", row);
                basis.remove(position);
                active_rows.retain(|&i| i != row);
                rows_to_remove.push(row);
            },
        }
    }

    rows_to_remove.sort_unstable();
    let rank = if rows_to_remove.is_empty() { Rank::Full } else { Rank::Deficient(rows_to_remove) };

    Ok(Correction { basis, rank })
}
