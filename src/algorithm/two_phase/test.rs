use approx::assert_abs_diff_eq;

use crate::algorithm::{OptimizationResult, Phase};
use crate::algorithm::two_phase::{solve, solve_with};
use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, SteepestDescentAlongVariable};
use crate::config::SolverConfig;
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::tests::{problem_1, problem_2, problem_3};

fn assert_plan(result: &OptimizationResult<f64>, expected: &[f64]) {
    let plan = result.solution().unwrap();
    assert_eq!(plan.len(), expected.len());
    for (actual, expected) in plan.iter().zip(expected) {
        assert_abs_diff_eq!(*actual, *expected, epsilon = 1e-9);
    }
}

#[test]
fn finite_optimum() {
    let problem = problem_1::canonical_form();
    let result = solve(&problem).unwrap();

    assert!(matches!(result, OptimizationResult::FiniteOptimum(_)));
    assert_plan(&result, &problem_1::optimal_plan());
    assert_abs_diff_eq!(problem.objective_value(result.solution().unwrap()), 12_f64, epsilon = 1e-9);
}

#[test]
fn steepest_descent() {
    let problem = problem_1::canonical_form();
    let result = solve_with::<_, SteepestDescentAlongVariable>(&problem, &SolverConfig::default()).unwrap();

    assert!(matches!(result, OptimizationResult::FiniteOptimum(_)));
    assert_abs_diff_eq!(problem.objective_value(result.solution().unwrap()), 12_f64, epsilon = 1e-9);
}

#[test]
fn negative_right_hand_side() {
    // Dual problem of `problem_2`, a minimization written with a negative objective
    let problem = problem_2::canonical_form();
    let result = solve(&problem).unwrap();

    assert!(matches!(result, OptimizationResult::FiniteOptimum(_)));
    let plan = result.solution().unwrap();
    assert!(problem.is_feasible(plan, 1e-9));
    assert_abs_diff_eq!(problem.objective_value(plan), -5_f64, epsilon = 1e-9);
}

#[test]
fn unbounded() {
    let problem = CanonicalForm::new(
        vec![1_f64, 0_f64, 0_f64],
        vec![vec![1_f64, -1_f64, 1_f64]],
        vec![1_f64],
    ).unwrap();
    let result = solve(&problem).unwrap();

    assert!(matches!(result, OptimizationResult::Unbounded(_)));
    assert_plan(&result, &[1_f64, 0_f64, 0_f64]);
}

#[test]
fn infeasible() {
    let problem = CanonicalForm::new(vec![0_f64, 0_f64], vec![vec![1_f64, 1_f64]], vec![-1_f64]).unwrap();
    assert_eq!(solve(&problem), Ok(OptimizationResult::Infeasible));

    let problem = CanonicalForm::new(
        vec![1_f64, 2_f64, 0_f64],
        vec![vec![1_f64, 1_f64, 1_f64], vec![2_f64, 2_f64, 2_f64]],
        vec![1_f64, 3_f64],
    ).unwrap();
    assert_eq!(solve(&problem), Ok(OptimizationResult::Infeasible));
}

#[test]
fn redundant_row() {
    let problem = problem_3::canonical_form();
    let result = solve(&problem).unwrap();

    assert!(matches!(result, OptimizationResult::FiniteOptimum(_)));
    assert_plan(&result, &[1_f64, 0_f64]);
    // Also satisfies the removed row
    assert!(problem.is_feasible(result.solution().unwrap(), 1e-9));
}

#[test]
fn without_constraints() {
    let problem = CanonicalForm::new(vec![-1_f64, 0_f64], vec![], vec![]).unwrap();
    let result = solve(&problem).unwrap();
    assert_eq!(result, OptimizationResult::FiniteOptimum(vec![0_f64, 0_f64]));

    let problem = CanonicalForm::new(vec![0_f64, 1_f64], vec![], vec![]).unwrap();
    let result = solve(&problem).unwrap();
    assert_eq!(result, OptimizationResult::Unbounded(vec![0_f64, 0_f64]));
}

#[test]
fn iteration_limits() {
    let problem = problem_1::canonical_form();

    let config = SolverConfig::default().with_max_iterations(1);
    let result = solve_with::<_, FirstProfitable>(&problem, &config).unwrap();
    assert_eq!(result, OptimizationResult::GaveUp(Phase::Initial));
    assert_eq!(result.reason(), Some("initial-phase-limit"));

    // The auxiliary problem takes three iterations, the main phase two
    let config = SolverConfig::default().with_max_iterations(3);
    let result = solve_with::<_, FirstProfitable>(&problem, &config).unwrap();
    assert!(matches!(result, OptimizationResult::FiniteOptimum(_)));
}

#[test]
fn single_precision() {
    let problem = CanonicalForm::new(
        vec![3_f32, 2_f32, 0_f32, 0_f32],
        vec![vec![1_f32, 1_f32, 1_f32, 0_f32], vec![1_f32, 3_f32, 0_f32, 1_f32]],
        vec![4_f32, 6_f32],
    ).unwrap();
    let config = SolverConfig::default().with_tolerance(1e-5);
    let result = solve_with::<_, FirstProfitable>(&problem, &config).unwrap();

    let plan = result.solution().unwrap();
    assert_abs_diff_eq!(problem.objective_value(plan), 12_f32, epsilon = 1e-4);
}
