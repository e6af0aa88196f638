//! # Solver configuration
//!
//! Settings shared by all pivoting engines.
use crate::data::linear_algebra::EPSILON;

/// Default bound on the number of iterations of a single phase.
///
/// This is a safety bound against cycling on degenerate problems, no proof of termination.
pub const DEFAULT_MAX_ITERATIONS: usize = 42;

/// Parameters of a solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Number of iterations after which a phase gives up.
    pub max_iterations: usize,
    /// Values with an absolute value at most this large are treated as zero when deciding on
    /// signs: reduced costs, ratio test denominators, pivots and artificial values.
    pub tolerance: f64,
}

impl SolverConfig {
    /// Change the iteration limit.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        debug_assert!(max_iterations > 0);

        self.max_iterations = max_iterations;
        self
    }

    /// Change the comparison tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        debug_assert!(tolerance >= 0_f64);

        self.tolerance = tolerance;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: EPSILON,
        }
    }
}
