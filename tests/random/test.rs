use approx::assert_abs_diff_eq;

use revsim::{dual_solve, DualStatus, OptimizationResult, reference_solve, solve, SolverConfig};
use revsim::algorithm::two_phase::phase_one::{initial_phase, RankedFeasibilityResult};
use revsim::algorithm::two_phase::phase_two::{primal, PrimalStatus};
use revsim::algorithm::two_phase::strategy::pivot_rule::FirstProfitable;
use revsim::algorithm::two_phase::tableau::inverse_maintenance::BasisInverse;

use super::{bounded_problem, covering_problem, NR_PROBLEMS, seeded};

#[test]
fn matches_reference() {
    let mut rng = seeded();
    for _ in 0..NR_PROBLEMS {
        let problem = bounded_problem(&mut rng, 3, 6);

        let result = solve(&problem).unwrap();
        let reference = reference_solve(&problem).unwrap();
        match (result, reference) {
            (OptimizationResult::FiniteOptimum(x), OptimizationResult::FiniteOptimum(expected)) => {
                assert!(problem.is_feasible(&x, 1e-6));
                assert_abs_diff_eq!(
                    problem.objective_value(&x),
                    problem.objective_value(&expected),
                    epsilon = 1e-6,
                );
            },
            (result, reference) => panic!("{:?} vs {:?} on {:?}", result, reference, problem),
        }
    }
}

#[test]
fn terminal_basis_is_invertible() {
    let mut rng = seeded();
    let config = SolverConfig::default();
    for _ in 0..NR_PROBLEMS {
        let problem = bounded_problem(&mut rng, 3, 6);

        let (reduced, plan, basis) = match initial_phase::<_, FirstProfitable>(&problem, &config).unwrap() {
            RankedFeasibilityResult::Feasible { problem, plan, basis, .. } => (problem, plan, basis),
            other => panic!("{:?} on {:?}", other, problem),
        };
        assert_eq!(basis.len(), reduced.nr_constraints());
        assert!(reduced.is_feasible(&plan, 1e-6));

        let result = primal::<_, FirstProfitable>(&reduced, plan, basis, &config).unwrap();
        assert_eq!(result.status, PrimalStatus::Optimal);
        assert_eq!(result.basis.len(), reduced.nr_constraints());
        let basis_matrix = reduced.constraints().select_columns(&result.basis);
        assert!(BasisInverse::invert(&basis_matrix, 1e-10).is_ok());
    }
}

#[test]
fn dual_matches_reference() {
    let mut rng = seeded();
    for _ in 0..NR_PROBLEMS {
        let problem = covering_problem(&mut rng, 3, 4);
        let slacks = (4..7).collect();

        let result = dual_solve(&problem, slacks).unwrap();
        assert_eq!(result.status, DualStatus::Solved);
        assert!(result.kappa.iter().all(|&value| value >= -1e-10));
        assert!(problem.is_feasible(&result.kappa, 1e-6));

        let reference = reference_solve(&problem).unwrap();
        let expected = reference.solution().unwrap();
        assert_abs_diff_eq!(
            problem.objective_value(&result.kappa),
            problem.objective_value(expected),
            epsilon = 1e-6,
        );
    }
}
