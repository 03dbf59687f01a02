//! FILENAME: matrix-engine/src/matrix.rs
//! PURPOSE: Defines the square `Matrix` type consumed by the determinant engine.
//! CONTEXT: Shape is validated once, at construction (or deserialization).
//! Every `Matrix` value in existence is therefore square with N >= 1, which
//! lets the recursive expansion skip per-frame checks.
//!
//! Public accessors and row operations use 1-based indices, the same
//! convention as the cofactor formulas. Storage is 0-based internally.

use serde::{Deserialize, Serialize};

use crate::error::MatrixError;
use crate::scalar::Scalar;

/// An N x N matrix stored as a list of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<T>>", into = "Vec<Vec<T>>")]
#[serde(bound(
    serialize = "T: Scalar + Serialize",
    deserialize = "T: Scalar + Deserialize<'de>"
))]
pub struct Matrix<T: Scalar = f64> {
    rows: Vec<Vec<T>>,
}

/// Checks that `rows` describes a square matrix with at least one entry.
/// Returns the dimension N on success.
pub fn check_shape<T>(rows: &[Vec<T>]) -> Result<usize, MatrixError> {
    let dimension = rows.len();
    if dimension == 0 {
        return Err(MatrixError::DegenerateInput);
    }

    for (index, row) in rows.iter().enumerate() {
        if row.len() != dimension {
            return Err(MatrixError::MalformedMatrix {
                row: index + 1,
                expected: dimension,
                found: row.len(),
            });
        }
    }

    Ok(dimension)
}

impl<T: Scalar> Matrix<T> {
    /// Builds a matrix from owned rows, rejecting ragged or empty input.
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        check_shape(&rows)?;
        Ok(Matrix { rows })
    }

    /// Wraps rows already known to be square. Used for submatrices, whose
    /// shape follows from the parent's.
    pub(crate) fn from_square_rows(rows: Vec<Vec<T>>) -> Self {
        debug_assert!(check_shape(&rows).is_ok());
        Matrix { rows }
    }

    /// The N x N identity matrix.
    pub fn identity(dimension: usize) -> Result<Self, MatrixError> {
        if dimension == 0 {
            return Err(MatrixError::DegenerateInput);
        }

        let rows = (0..dimension)
            .map(|r| {
                (0..dimension)
                    .map(|c| if r == c { T::ONE } else { T::ZERO })
                    .collect()
            })
            .collect();

        Ok(Matrix { rows })
    }

    /// Number of rows (equal to the number of columns).
    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    /// Entry at 1-based (row, col), or None when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        let r = row.checked_sub(1)?;
        let c = col.checked_sub(1)?;
        self.rows.get(r)?.get(c).copied()
    }

    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows
    }

    /// Returns a copy with 1-based rows `a` and `b` exchanged.
    pub fn swap_rows(&self, a: usize, b: usize) -> Result<Self, MatrixError> {
        let a = self.check_index(a)?;
        let b = self.check_index(b)?;

        let mut rows = self.rows.clone();
        rows.swap(a, b);
        Ok(Matrix { rows })
    }

    pub fn transpose(&self) -> Self {
        let n = self.dimension();
        let rows = (0..n)
            .map(|c| self.rows.iter().map(|row| row[c]).collect())
            .collect();
        Matrix { rows }
    }

    /// Converts a 1-based index into a 0-based one, checking bounds.
    pub(crate) fn check_index(&self, index: usize) -> Result<usize, MatrixError> {
        let dimension = self.dimension();
        if index == 0 || index > dimension {
            return Err(MatrixError::IndexOutOfRange { index, dimension });
        }
        Ok(index - 1)
    }
}

impl<T: Scalar> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Matrix::new(rows)
    }
}

impl<T: Scalar> From<Matrix<T>> for Vec<Vec<T>> {
    fn from(matrix: Matrix<T>) -> Self {
        matrix.rows
    }
}
