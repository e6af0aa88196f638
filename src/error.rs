//! # Error reporting
//!
//! Expected outcomes of solving a linear program (infeasible, unbounded, no convergence within
//! the iteration limit) are not errors; they are reported through the result types of the
//! algorithms. The variants here describe malformed input and broken invariants.
use thiserror::Error;

/// Fatal problems encountered while setting up or running one of the algorithms.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// A basis matrix could not be inverted.
    ///
    /// When raised by the incremental update, the basis exchange that was proposed is invalid:
    /// the entering column has a zero component at the position it should take.
    #[error("the basis matrix is singular (no usable pivot at basis position {position})")]
    SingularBasis {
        /// Basis position at which no nonzero pivot was available.
        position: usize,
    },
    /// The shapes of the cost vector, constraint matrix and right-hand side don't align.
    #[error("dimension mismatch in {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Which part of the input is malformed.
        what: String,
        /// The length that was expected.
        expected: usize,
        /// The length that was provided.
        actual: usize,
    },
    /// A basis supplied by the caller can't be a basis of the problem.
    #[error("invalid basis: {0}")]
    InvalidBasis(String),
    /// The auxiliary problem of the initial phase was found to be unbounded.
    ///
    /// Its objective is bounded from above by zero, so this indicates numerical trouble.
    #[error("the auxiliary problem of the initial phase can not be unbounded")]
    UnboundedAuxiliary,
    /// The reference solver failed for a reason other than infeasibility or unboundedness.
    #[error("reference solver failed: {0}")]
    Reference(String),
}

impl SolverError {
    pub(crate) fn dimension_mismatch(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        SolverError::DimensionMismatch { what: what.into(), expected, actual }
    }
}
