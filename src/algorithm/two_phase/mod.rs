//! # The two phase method
//!
//! The simplex method needs a basic feasible solution to start from. The first phase finds one by
//! solving an auxiliary problem, the second phase optimizes the original objective starting from
//! it. The algorithm is implemented as described in chapters 2 and 4 of Combinatorial
//! Optimization, a book by Christos H. Papadimitriou and Kenneth Steiglitz.
use log::debug;

use crate::algorithm::{OptimizationResult, Phase};
use crate::algorithm::two_phase::phase_one::{initial_phase, Rank, RankedFeasibilityResult};
use crate::algorithm::two_phase::phase_two::{primal, PrimalStatus};
use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, PivotRule};
use crate::config::SolverConfig;
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::number_types::traits::OrderedField;
use crate::error::SolverError;

pub mod phase_one;
pub mod phase_two;
pub mod strategy;
pub mod tableau;

#[cfg(test)]
mod test;

/// Solve a linear program with the default configuration and pivot rule.
///
/// # Errors
///
/// Only when an invariant is broken, see `solve_with`.
pub fn solve<F: OrderedField>(problem: &CanonicalForm<F>) -> Result<OptimizationResult<F>, SolverError> {
    solve_with::<F, FirstProfitable>(problem, &SolverConfig::default())
}

/// Solve a linear program with the two phase method.
///
/// Both phases use the pivot rule `PR` and are limited to `config.max_iterations` iterations each.
///
/// # Return value
///
/// The optimal plan, an unbounded plan, infeasibility, or the phase in which the iteration limit
/// was reached. If rows were found to be redundant, the plan is still a plan for all rows.
///
/// # Errors
///
/// If a basis matrix turns out to be singular, or if the auxiliary problem is reported unbounded.
/// Neither should happen in exact arithmetic.
pub fn solve_with<F, PR>(
    problem: &CanonicalForm<F>,
    config: &SolverConfig,
) -> Result<OptimizationResult<F>, SolverError>
where
    F: OrderedField,
    PR: PivotRule<F>,
{
    let (reduced, plan, basis) = match initial_phase::<F, PR>(problem, config)? {
        RankedFeasibilityResult::Feasible { rank, problem, plan, basis } => {
            if let Rank::Deficient(rows) = &rank {
                debug!("Removed {} redundant constraints: {:?}", rows.len(), rows);
            }
            (problem, plan, basis)
        },
        RankedFeasibilityResult::Infeasible => return Ok(OptimizationResult::Infeasible),
        RankedFeasibilityResult::GaveUp { .. } => return Ok(OptimizationResult::GaveUp(Phase::Initial)),
    };

    let result = primal::<F, PR>(&reduced, plan, basis, config)?;
    Ok(match result.status {
        PrimalStatus::Optimal => OptimizationResult::FiniteOptimum(result.plan),
        PrimalStatus::Unbounded => OptimizationResult::Unbounded(result.plan),
        PrimalStatus::GaveUp => OptimizationResult::GaveUp(Phase::Main),
    })
}
