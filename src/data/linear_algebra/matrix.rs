//! # Dense matrices
//!
//! A row-major matrix with dimensions fixed at creation. Submatrices are taken by copying a
//! selection of rows and columns, which is how basis matrices are built from the constraint
//! matrix.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::ops::Index;

use index_utils::remove_indices;
use itertools::Itertools;
use num_traits::Float;

use crate::data::linear_algebra::vector::inner_product;
use crate::error::SolverError;

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: Float> DenseMatrix<F> {
    /// Create a `DenseMatrix` from row data.
    ///
    /// # Arguments
    ///
    /// * `data`: Rows of the matrix, all of equal length.
    /// * `nr_columns`: Number of columns. Needed because the matrix might have no rows.
    pub fn from_data(data: Vec<Vec<F>>, nr_columns: usize) -> Self {
        debug_assert!(data.iter().all(|row| row.len() == nr_columns));

        Self { nr_rows: data.len(), nr_columns, data }
    }

    /// Create a square identity matrix of size `len`.
    pub fn identity(len: usize) -> Self {
        let data = (0..len)
            .map(|i| (0..len).map(|j| if i == j { F::one() } else { F::zero() }).collect())
            .collect();

        Self::from_data(data, len)
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows);

        &self.data[i]
    }

    /// Get all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> Vec<F> {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(|row| row[j]).collect()
    }

    /// Copy of the column `j`, restricted to a selection of rows.
    pub fn column_restricted(&self, rows: &[usize], j: usize) -> Vec<F> {
        debug_assert!(j < self.nr_columns);
        debug_assert!(rows.iter().all(|&i| i < self.nr_rows));

        rows.iter().map(|&i| self.data[i][j]).collect()
    }

    /// Submatrix consisting of a selection of columns, in the order given.
    ///
    /// With `columns` a basis, this is the basis matrix `A_B`.
    pub fn select_columns(&self, columns: &[usize]) -> Self {
        debug_assert!(columns.iter().all(|&j| j < self.nr_columns));

        let data = self.data.iter()
            .map(|row| columns.iter().map(|&j| row[j]).collect())
            .collect();
        Self::from_data(data, columns.len())
    }

    /// Submatrix consisting of a selection of rows and columns, in the order given.
    pub fn select(&self, rows: &[usize], columns: &[usize]) -> Self {
        debug_assert!(rows.iter().all(|&i| i < self.nr_rows));
        debug_assert!(columns.iter().all(|&j| j < self.nr_columns));

        let data = rows.iter()
            .map(|&i| columns.iter().map(|&j| self.data[i][j]).collect())
            .collect();
        Self::from_data(data, columns.len())
    }

    /// Concatenate an identity matrix to the right of this matrix.
    pub fn with_identity_appended(&self) -> Self {
        let m = self.nr_rows;
        let data = self.data.iter().enumerate()
            .map(|(i, row)| {
                let mut extended = Vec::with_capacity(self.nr_columns + m);
                extended.extend_from_slice(row);
                extended.extend((0..m).map(|k| if k == i { F::one() } else { F::zero() }));
                extended
            })
            .collect();

        Self::from_data(data, self.nr_columns + m)
    }

    /// Multiply every value in row `i` by minus one.
    pub fn negate_row(&mut self, i: usize) {
        debug_assert!(i < self.nr_rows);

        for value in &mut self.data[i] {
            *value = -*value;
        }
    }

    /// Remove a set of rows.
    ///
    /// # Arguments
    ///
    /// * `indices`: Rows to remove, sorted and without duplicates.
    pub fn remove_rows(&mut self, indices: &[usize]) {
        debug_assert!(indices.iter().tuple_windows().all(|(a, b)| a < b));
        debug_assert!(indices.iter().all(|&i| i < self.nr_rows));

        remove_indices(&mut self.data, indices);
        self.nr_rows = self.data.len();
    }

    /// Matrix-vector product `M · v`.
    pub fn mul_vector(&self, vector: &[F]) -> Vec<F> {
        debug_assert_eq!(vector.len(), self.nr_columns);

        self.data.iter().map(|row| inner_product(row, vector)).collect()
    }

    /// Vector-matrix product `v · M`.
    pub fn left_mul_vector(&self, vector: &[F]) -> Vec<F> {
        debug_assert_eq!(vector.len(), self.nr_rows);

        let mut result = vec![F::zero(); self.nr_columns];
        for (&factor, row) in vector.iter().zip_eq(&self.data) {
            if factor.is_zero() {
                continue;
            }
            for (total, &value) in result.iter_mut().zip_eq(row) {
                *total = *total + factor * value;
            }
        }

        result
    }

    /// Matrix product `self · other`.
    pub fn mul_matrix(&self, other: &Self) -> Self {
        debug_assert_eq!(self.nr_columns, other.nr_rows);

        let data = self.data.iter().map(|row| other.left_mul_vector(row)).collect();
        Self::from_data(data, other.nr_columns)
    }

    /// Invert a square matrix using Gauss-Jordan elimination with partial pivoting.
    ///
    /// # Arguments
    ///
    /// * `tolerance`: Pivots with an absolute value at most this large are considered zero.
    ///
    /// # Return value
    ///
    /// The inverse, or a `SingularBasis` error with the index of the first column for which no
    /// pivot could be found.
    pub fn inverse(&self, tolerance: F) -> Result<Self, SolverError> {
        debug_assert_eq!(self.nr_rows, self.nr_columns);

        let n = self.nr_rows;
        let mut left = self.data.clone();
        let mut right = Self::identity(n).data;

        for column in 0..n {
            let pivot_row = (column..n)
                .max_by(|&i, &k| {
                    left[i][column].abs()
                        .partial_cmp(&left[k][column].abs())
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .filter(|&i| left[i][column].abs() > tolerance)
                .ok_or(SolverError::SingularBasis { position: column })?;
            left.swap(column, pivot_row);
            right.swap(column, pivot_row);

            let pivot = left[column][column];
            for j in 0..n {
                left[column][j] = left[column][j] / pivot;
                right[column][j] = right[column][j] / pivot;
            }

            for i in (0..n).filter(|&i| i != column) {
                let factor = left[i][column];
                if factor.is_zero() {
                    continue;
                }
                for j in 0..n {
                    left[i][j] = left[i][j] - factor * left[column][j];
                    right[i][j] = right[i][j] - factor * right[column][j];
                }
            }
        }

        Ok(Self::from_data(right, n))
    }

    /// Whether this matrix is the identity matrix, up to a tolerance.
    pub fn is_identity(&self, tolerance: F) -> bool {
        self.nr_rows == self.nr_columns && self.data.iter().enumerate().all(|(i, row)| {
            row.iter().enumerate().all(|(j, &value)| {
                let expected = if i == j { F::one() } else { F::zero() };
                (value - expected).abs() <= tolerance
            })
        })
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}

impl<F> Index<(usize, usize)> for DenseMatrix<F> {
    type Output = F;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        &self.data[i][j]
    }
}

impl<F: Display> Display for DenseMatrix<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        for row in &self.data {
            writeln!(f, "{}", row.iter().map(|value| format!("{:>10.4}", value)).join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::data::linear_algebra::matrix::DenseMatrix;
    use crate::error::SolverError;

    fn matrix(data: Vec<Vec<f64>>) -> DenseMatrix<f64> {
        let nr_columns = data[0].len();
        DenseMatrix::from_data(data, nr_columns)
    }

    #[test]
    fn inverse() {
        let m = matrix(vec![
            vec![1_f64, 1_f64],
            vec![1_f64, 3_f64],
        ]);
        let inverse = m.inverse(1e-10).unwrap();
        let expected = [[1.5_f64, -0.5_f64], [-0.5_f64, 0.5_f64]];
        for i in 0..2 {
            for j in 0..2 {
                assert_abs_diff_eq!(inverse[(i, j)], expected[i][j], epsilon = 1e-12);
            }
        }
        assert!(m.mul_matrix(&inverse).is_identity(1e-12));
    }

    #[test]
    fn inverse_needs_row_swap() {
        let m = matrix(vec![
            vec![0_f64, 1_f64, 0_f64],
            vec![2_f64, 0_f64, 0_f64],
            vec![0_f64, 0_f64, 4_f64],
        ]);
        let inverse = m.inverse(1e-10).unwrap();
        assert!(inverse.mul_matrix(&m).is_identity(1e-12));
        assert_abs_diff_eq!(inverse[(0, 1)], 0.5_f64);
        assert_abs_diff_eq!(inverse[(2, 2)], 0.25_f64);
    }

    #[test]
    fn inverse_singular() {
        let m = matrix(vec![
            vec![1_f64, 2_f64],
            vec![2_f64, 4_f64],
        ]);
        assert_eq!(m.inverse(1e-10), Err(SolverError::SingularBasis { position: 1 }));
    }

    #[test]
    fn products() {
        let m = matrix(vec![
            vec![1_f64, 1_f64, 1_f64, 0_f64],
            vec![1_f64, 3_f64, 0_f64, 1_f64],
        ]);
        assert_eq!(m.mul_vector(&[4_f64, 0_f64, 0_f64, 2_f64]), vec![4_f64, 6_f64]);
        assert_eq!(m.left_mul_vector(&[3_f64, 0_f64]), vec![3_f64, 3_f64, 3_f64, 0_f64]);
    }

    #[test]
    fn submatrices() {
        let mut m = matrix(vec![
            vec![1_f64, 2_f64, 3_f64],
            vec![4_f64, 5_f64, 6_f64],
            vec![7_f64, 8_f64, 9_f64],
        ]);
        assert_eq!(m.select_columns(&[2, 0]), matrix(vec![
            vec![3_f64, 1_f64],
            vec![6_f64, 4_f64],
            vec![9_f64, 7_f64],
        ]));
        assert_eq!(m.select(&[0, 2], &[1]), matrix(vec![vec![2_f64], vec![8_f64]]));
        assert_eq!(m.column_restricted(&[1, 2], 0), vec![4_f64, 7_f64]);

        m.remove_rows(&[0, 2]);
        assert_eq!(m, matrix(vec![vec![4_f64, 5_f64, 6_f64]]));
    }

    #[test]
    fn identity_appended() {
        let mut m = matrix(vec![
            vec![1_f64, 2_f64],
            vec![3_f64, 4_f64],
        ]);
        m.negate_row(1);
        assert_eq!(m.with_identity_appended(), matrix(vec![
            vec![1_f64, 2_f64, 1_f64, 0_f64],
            vec![-3_f64, -4_f64, 0_f64, 1_f64],
        ]));
    }
}
