//! # Canonical form
//!
//! A linear program in `CanonicalForm` has only equality constraints and non-negative variables:
//!
//! maximize `c·x` subject to `A·x = b`, `x ≥ 0`.
use itertools::Itertools;
use num_traits::Float;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::vector::{inner_product, is_nonnegative};
use crate::error::SolverError;

/// A linear program in canonical form with a dense constraint matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalForm<F> {
    cost: Vec<F>,
    constraints: DenseMatrix<F>,
    b: Vec<F>,
}

impl<F: Float> CanonicalForm<F> {
    /// Create a new linear program in canonical form.
    ///
    /// # Arguments
    ///
    /// * `cost`: Cost vector `c` of length `n`.
    /// * `constraints`: Rows of the constraint matrix `A`; `m` rows of length `n` each.
    /// * `b`: Right-hand side of length `m`.
    ///
    /// # Errors
    ///
    /// A `DimensionMismatch` if the shapes of the arguments don't align.
    pub fn new(cost: Vec<F>, constraints: Vec<Vec<F>>, b: Vec<F>) -> Result<Self, SolverError> {
        let n = cost.len();
        if constraints.len() != b.len() {
            return Err(SolverError::dimension_mismatch("number of constraint rows", b.len(), constraints.len()));
        }
        if let Some((i, row)) = constraints.iter().find_position(|row| row.len() != n) {
            return Err(SolverError::dimension_mismatch(format!("length of constraint row {}", i), n, row.len()));
        }

        Ok(Self { cost, constraints: DenseMatrix::from_data(constraints, n), b })
    }

    /// Create a new linear program from a constraint matrix that was already built.
    ///
    /// # Errors
    ///
    /// A `DimensionMismatch` if the shapes of the arguments don't align.
    pub fn from_matrix(cost: Vec<F>, constraints: DenseMatrix<F>, b: Vec<F>) -> Result<Self, SolverError> {
        if constraints.nr_columns() != cost.len() {
            return Err(SolverError::dimension_mismatch("number of constraint columns", cost.len(), constraints.nr_columns()));
        }
        if constraints.nr_rows() != b.len() {
            return Err(SolverError::dimension_mismatch("number of constraint rows", b.len(), constraints.nr_rows()));
        }

        Ok(Self { cost, constraints, b })
    }

    /// Make the right-hand side non-negative.
    ///
    /// Every constraint with a negative right-hand side is multiplied by minus one.
    pub fn normalize_rhs(&mut self) {
        for i in 0..self.nr_constraints() {
            if self.b[i] < F::zero() {
                self.b[i] = -self.b[i];
                self.constraints.negate_row(i);
            }
        }
    }

    /// Remove constraints, for example because they are redundant.
    ///
    /// # Arguments
    ///
    /// * `rows`: Indices of the constraints to remove, sorted and without duplicates.
    pub fn remove_constraints(&mut self, rows: &[usize]) {
        self.constraints.remove_rows(rows);
        index_utils::remove_indices(&mut self.b, rows);

        debug_assert_eq!(self.constraints.nr_rows(), self.b.len());
    }

    /// Objective function value `c·x` of a plan.
    pub fn objective_value(&self, x: &[F]) -> F {
        inner_product(&self.cost, x)
    }

    /// Whether a plan satisfies `A·x = b` and `x ≥ 0`, up to a tolerance.
    pub fn is_feasible(&self, x: &[F], tolerance: F) -> bool {
        x.len() == self.nr_variables()
            && is_nonnegative(x, tolerance)
            && self.constraints.mul_vector(x).iter().zip_eq(&self.b)
                .all(|(&lhs, &rhs)| (lhs - rhs).abs() <= tolerance)
    }

    /// Check that a basis has the right size, unique values and only valid column indices.
    ///
    /// Doesn't check whether the basis matrix is invertible.
    pub fn validate_basis(&self, basis: &[usize]) -> Result<(), SolverError> {
        if basis.len() != self.nr_constraints() {
            return Err(SolverError::InvalidBasis(format!(
                "basis has {} indices, but there are {} constraints", basis.len(), self.nr_constraints(),
            )));
        }
        if let Some(&j) = basis.iter().find(|&&j| j >= self.nr_variables()) {
            return Err(SolverError::InvalidBasis(format!(
                "index {} is out of range for {} variables", j, self.nr_variables(),
            )));
        }
        if !basis.iter().all_unique() {
            return Err(SolverError::InvalidBasis("indices are not unique".to_string()));
        }

        Ok(())
    }

    /// Get the cost vector `c`.
    pub fn cost(&self) -> &[F] {
        &self.cost
    }

    /// Get the constraint matrix `A`.
    pub fn constraints(&self) -> &DenseMatrix<F> {
        &self.constraints
    }

    /// Get the right-hand side `b`.
    pub fn b(&self) -> &[F] {
        &self.b
    }

    /// Get the number of variables.
    pub fn nr_variables(&self) -> usize {
        self.cost.len()
    }

    /// Get the number of constraints.
    pub fn nr_constraints(&self) -> usize {
        self.b.len()
    }
}
