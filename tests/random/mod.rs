//! # Randomly generated problems
//!
//! Problems are generated from a fixed seed, such that failures can be reproduced. Results are
//! compared against those of the reference solver.
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use revsim::CanonicalForm;

/// # Generation and execution
mod test;

const SEED: u64 = 0x5EED;
const NR_PROBLEMS: usize = 50;

/// Feasible and bounded problem: all constraint coefficients are positive and the right-hand side
/// is attained by a random non-negative plan.
fn bounded_problem(rng: &mut StdRng, m: usize, n: usize) -> CanonicalForm<f64> {
    let a = (0..m)
        .map(|_| (0..n).map(|_| rng.gen_range(0.1..1_f64)).collect::<Vec<_>>())
        .collect::<Vec<_>>();
    let x0 = (0..n).map(|_| rng.gen_range(0_f64..1_f64)).collect::<Vec<_>>();
    let b = a.iter()
        .map(|row| row.iter().zip(&x0).map(|(a, x)| a * x).sum())
        .collect();
    let c = (0..n).map(|_| rng.gen_range(-1_f64..1_f64)).collect();

    CanonicalForm::new(c, a, b).unwrap()
}

/// Covering problem, minimize `w·x` subject to `A·x ≥ r`, with slack variables appended.
///
/// All coefficients are positive, so the slack basis is dual feasible but not primal feasible.
fn covering_problem(rng: &mut StdRng, m: usize, n: usize) -> CanonicalForm<f64> {
    let c = (0..n).map(|_| -rng.gen_range(0.1..1_f64))
        .chain((0..m).map(|_| 0_f64))
        .collect();
    let a = (0..m)
        .map(|i| {
            (0..n).map(|_| -rng.gen_range(0.1..1_f64))
                .chain((0..m).map(|k| if k == i { 1_f64 } else { 0_f64 }))
                .collect()
        })
        .collect();
    let b = (0..m).map(|_| -rng.gen_range(0.5..2_f64)).collect();

    CanonicalForm::new(c, a, b).unwrap()
}

fn seeded() -> StdRng {
    StdRng::seed_from_u64(SEED)
}
