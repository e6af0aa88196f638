//! # Maintaining a basis inverse
//!
//! The simplex method requires us to keep track of the inverse of the basis matrix `A_B`. It is
//! computed from scratch only once per run. After that, each basis exchange changes one column of
//! `A_B`, and the inverse is updated with a rank-one correction in O(m²) operations instead of
//! being recomputed in O(m³).
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::vector::inner_product;
use crate::data::number_types::traits::OrderedField;
use crate::error::SolverError;

/// Inverse of a basis matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct BasisInverse<F> {
    matrix: DenseMatrix<F>,
}

impl<F: OrderedField> BasisInverse<F> {
    /// Compute the inverse of a basis matrix from scratch.
    ///
    /// # Arguments
    ///
    /// * `basis_matrix`: Square matrix, the columns of the constraint matrix that are in the basis.
    /// * `tolerance`: Pivots with absolute value at most this large are considered zero.
    ///
    /// # Errors
    ///
    /// `SingularBasis` if the matrix can't be inverted.
    pub fn invert(basis_matrix: &DenseMatrix<F>, tolerance: F) -> Result<Self, SolverError> {
        basis_matrix.inverse(tolerance).map(|matrix| Self { matrix })
    }

    /// Wrap a matrix that is known to be the inverse of the basis matrix.
    pub fn from_matrix(matrix: DenseMatrix<F>) -> Self {
        debug_assert_eq!(matrix.nr_rows(), matrix.nr_columns());

        Self { matrix }
    }

    /// Inverse after one column of the basis matrix was replaced.
    ///
    /// With `l = B⁻¹·a` for the new column `a`, the new inverse is `Q·B⁻¹`, where `Q` is the
    /// identity matrix with column `position` replaced by `-(1 / l[position]) · l̃`, and `l̃` equal
    /// to `l` with `l̃[position] = -1`. Only column `position` of `Q` differs from the identity,
    /// so the product is computed directly:
    ///
    /// `C[i][j] = Q[i][position] · B⁻¹[position][j] + (B⁻¹[i][j] if i ≠ position else 0)`.
    ///
    /// # Arguments
    ///
    /// * `replacement_column`: The column of the new basis matrix at `position`.
    /// * `position`: Basis position that was overwritten.
    /// * `tolerance`: A pivot `l[position]` with an absolute value at most this large is zero.
    ///
    /// # Errors
    ///
    /// `SingularBasis` if the new basis matrix is singular. In that case, the basis exchange was
    /// invalid and should not have been proposed.
    pub fn update(
        &self,
        replacement_column: &[F],
        position: usize,
        tolerance: F,
    ) -> Result<Self, SolverError> {
        let m = self.m();
        debug_assert_eq!(replacement_column.len(), m);
        debug_assert!(position < m);

        let l = self.generate_column(replacement_column);
        let pivot = l[position];
        if pivot.abs() <= tolerance {
            return Err(SolverError::SingularBasis { position });
        }

        let mut l_tilde = l;
        l_tilde[position] = -F::one();
        let l_hat = l_tilde.into_iter().map(|value| -value / pivot).collect::<Vec<_>>();

        let pivot_row = self.matrix.row(position);
        let data = (0..m)
            .map(|i| {
                let row = self.matrix.row(i);
                (0..m)
                    .map(|j| {
                        let from_pivot_row = l_hat[i] * pivot_row[j];
                        if i != position { from_pivot_row + row[j] } else { from_pivot_row }
                    })
                    .collect()
            })
            .collect();

        Ok(Self { matrix: DenseMatrix::from_data(data, m) })
    }

    /// Obtain the inverse for the current basis at the start of an iteration.
    ///
    /// # Arguments
    ///
    /// * `previous`: Inverse from the previous iteration, `None` on the first iteration of a run.
    /// * `last_changed`: Basis position that changed in the previous iteration, if any.
    /// * `basis`: Current basis indices.
    /// * `constraints`: Constraint matrix whose columns are indexed by `basis`.
    /// * `tolerance`: Used to detect singularity.
    ///
    /// # Return value
    ///
    /// A full inversion without a previous inverse, an incremental update if a position changed,
    /// and otherwise the previous inverse unchanged.
    pub fn refresh(
        previous: Option<Self>,
        last_changed: Option<usize>,
        basis: &[usize],
        constraints: &DenseMatrix<F>,
        tolerance: F,
    ) -> Result<Self, SolverError> {
        debug_assert_eq!(basis.len(), constraints.nr_rows());

        let inverse = match (previous, last_changed) {
            (Some(previous), Some(position)) => {
                previous.update(&constraints.column(basis[position]), position, tolerance)?
            },
            (Some(previous), None) => previous,
            (None, _) => Self::invert(&constraints.select_columns(basis), tolerance)?,
        };
        // Rounding errors accumulate over updates
        debug_assert!(inverse.is_inverse_of(&constraints.select_columns(basis), tolerance.sqrt()));

        Ok(inverse)
    }

    /// Column of the constraint matrix expressed in terms of the current basis: `B⁻¹ · a`.
    pub fn generate_column(&self, original_column: &[F]) -> Vec<F> {
        self.matrix.mul_vector(original_column)
    }

    /// Single element `i` of `B⁻¹ · a`.
    pub fn generate_element(&self, i: usize, original_column: &[F]) -> F {
        inner_product(self.matrix.row(i), original_column)
    }

    /// Simplex multipliers `c_B · B⁻¹`.
    pub fn dual_prices(&self, basis_cost: &[F]) -> Vec<F> {
        self.matrix.left_mul_vector(basis_cost)
    }

    /// Row `i` of the inverse.
    pub fn row(&self, i: usize) -> &[F] {
        self.matrix.row(i)
    }

    /// Whether this is an inverse of `basis_matrix`, up to a tolerance.
    pub fn is_inverse_of(&self, basis_matrix: &DenseMatrix<F>, tolerance: F) -> bool {
        self.matrix.mul_matrix(basis_matrix).is_identity(tolerance)
    }

    /// Dimension of the (square) inverse.
    pub fn m(&self) -> usize {
        self.matrix.nr_rows()
    }

    /// The inverse as a matrix.
    pub fn matrix(&self) -> &DenseMatrix<F> {
        &self.matrix
    }
}

impl<F: OrderedField> Display for BasisInverse<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "=== Basis Inverse ===")?;
        Display::fmt(&self.matrix, f)
    }
}
