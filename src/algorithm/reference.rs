//! # Reference solver
//!
//! Solves the same problem with the `microlp` crate, to compare results against.
use log::debug;
use microlp::{ComparisonOp, LinearExpr, OptimizationDirection, Problem};

use crate::algorithm::OptimizationResult;
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::error::SolverError;

/// Solve a problem in canonical form using `microlp`.
///
/// # Return value
///
/// The same variants as returned by `solve`, except for `GaveUp`. The plan of an `Unbounded`
/// result is empty, because `microlp` doesn't provide one.
///
/// # Errors
///
/// If `microlp` fails for another reason than infeasibility or unboundedness.
pub fn reference_solve(problem: &CanonicalForm<f64>) -> Result<OptimizationResult<f64>, SolverError> {
    let mut reference = Problem::new(OptimizationDirection::Maximize);
    let variables = problem.cost().iter()
        .map(|&cost| reference.add_var(cost, (0_f64, f64::INFINITY)))
        .collect::<Vec<_>>();

    for (i, &rhs) in problem.b().iter().enumerate() {
        let expression = problem.constraints().row(i).iter()
            .zip(&variables)
            .filter(|&(&coefficient, _)| coefficient != 0_f64)
            .map(|(&coefficient, &variable)| (variable, coefficient))
            .collect::<LinearExpr>();
        reference.add_constraint(expression, ComparisonOp::Eq, rhs);
    }

    match reference.solve() {
        Ok(solution) => {
            debug!("Reference solver found objective value {}", solution.objective());
            Ok(OptimizationResult::FiniteOptimum(variables.iter().map(|&variable| solution[variable]).collect()))
        },
        Err(microlp::Error::Infeasible) => Ok(OptimizationResult::Infeasible),
        Err(microlp::Error::Unbounded) => Ok(OptimizationResult::Unbounded(Vec::new())),
        Err(error) => Err(SolverError::Reference(error.to_string())),
    }
}
