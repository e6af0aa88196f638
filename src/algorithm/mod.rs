//! # Algorithms
use std::fmt::{Display, Formatter, Result as FormatResult};

pub mod dual_simplex;
pub mod pivot_engine;
pub mod reference;
pub mod two_phase;

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm, which may also give up after too many
/// iterations without reaching a conclusion.
#[derive(PartialEq, Debug, Clone)]
pub enum OptimizationResult<F> {
    /// No plan satisfies all constraints.
    Infeasible,
    /// An optimal plan.
    FiniteOptimum(Vec<F>),
    /// The objective function is unbounded from above. Contains the last feasible plan.
    Unbounded(Vec<F>),
    /// The iteration limit was reached during the given phase.
    GaveUp(Phase),
}

impl<F> OptimizationResult<F> {
    /// Whether a conclusion was reached.
    ///
    /// An infeasible or unbounded problem is solved, even though there is no optimal plan.
    pub fn is_solved(&self) -> bool {
        !matches!(self, OptimizationResult::GaveUp(_))
    }

    /// The plan found, if any.
    pub fn solution(&self) -> Option<&[F]> {
        match self {
            OptimizationResult::FiniteOptimum(x) | OptimizationResult::Unbounded(x) => Some(x),
            OptimizationResult::Infeasible | OptimizationResult::GaveUp(_) => None,
        }
    }

    /// Why no conclusion was reached, if that is the case.
    pub fn reason(&self) -> Option<&'static str> {
        match self {
            OptimizationResult::GaveUp(phase) => Some(phase.reason()),
            _ => None,
        }
    }
}

/// The two phases of the two-phase method.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Phase {
    /// Finding a basic feasible solution using an auxiliary problem.
    Initial,
    /// Optimizing the original objective starting from a basic feasible solution.
    Main,
}

impl Phase {
    /// Short description of running out of iterations during this phase.
    pub fn reason(self) -> &'static str {
        match self {
            Phase::Initial => "initial-phase-limit",
            Phase::Main => "main-phase-limit",
        }
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        f.write_str(match self {
            Phase::Initial => "initial phase",
            Phase::Main => "main phase",
        })
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::{OptimizationResult, Phase};

    #[test]
    fn result_bundle() {
        let gave_up = OptimizationResult::<f64>::GaveUp(Phase::Initial);
        assert!(!gave_up.is_solved());
        assert_eq!(gave_up.reason(), Some("initial-phase-limit"));
        assert_eq!(gave_up.solution(), None);

        let gave_up = OptimizationResult::<f64>::GaveUp(Phase::Main);
        assert_eq!(gave_up.reason(), Some("main-phase-limit"));

        let infeasible = OptimizationResult::<f64>::Infeasible;
        assert!(infeasible.is_solved());
        assert_eq!(infeasible.solution(), None);

        let unbounded = OptimizationResult::Unbounded(vec![1_f64, 0_f64]);
        assert!(unbounded.is_solved());
        assert_eq!(unbounded.solution(), Some(&[1_f64, 0_f64][..]));
        assert_eq!(unbounded.reason(), None);
    }
}
