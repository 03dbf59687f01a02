//! FILENAME: matrix-engine/src/cofactor.rs
//! PURPOSE: Minors, cofactors and the recursive determinant.
//! CONTEXT: The determinant is computed by Laplace expansion along the
//! first row, bottoming out at the 1x1 and 2x2 closed forms. Each frame
//! allocates its own submatrix, so sibling terms never share storage and
//! the caller's matrix is never written. Cost is O(N!); nothing is cached
//! between sibling branches.
//!
//! 1-based indices are used at the public surface; `*_at` helpers take
//! 0-based indices that the caller has already bounds-checked.
//!
//! All arithmetic goes through the checked `Scalar` operations, so integer
//! matrices either produce the exact determinant or `MatrixError::Overflow`.

use crate::error::MatrixError;
use crate::matrix::{check_shape, Matrix};
use crate::scalar::Scalar;

/// The line a Laplace expansion runs along (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    Row(usize),
    Column(usize),
}

impl<T: Scalar> Matrix<T> {
    /// Submatrix with 1-based row `i` and column `j` removed.
    pub fn minor(&self, i: usize, j: usize) -> Result<Matrix<T>, MatrixError> {
        let row = self.check_index(i)?;
        let col = self.check_index(j)?;
        if self.dimension() == 1 {
            return Err(MatrixError::DegenerateInput);
        }
        Ok(self.minor_at(row, col))
    }

    /// `(-1)^(i+j) * det(minor(i, j))` for 1-based `i`, `j`.
    pub fn cofactor(&self, i: usize, j: usize) -> Result<T, MatrixError> {
        let row = self.check_index(i)?;
        let col = self.check_index(j)?;
        if self.dimension() == 1 {
            return Err(MatrixError::DegenerateInput);
        }
        self.cofactor_at(row, col)
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> Result<T, MatrixError> {
        let m = self.rows();
        match self.dimension() {
            1 => Ok(m[0][0]),
            2 => sub(mul(m[0][0], m[1][1])?, mul(m[0][1], m[1][0])?),
            _ => m[0].iter().enumerate().try_fold(T::ZERO, |acc, (col, &entry)| {
                add(acc, mul(entry, self.cofactor_at(0, col)?)?)
            }),
        }
    }

    /// Determinant by expansion along an arbitrary row or column.
    /// Agrees with `determinant` for every valid line.
    pub fn expand_along(&self, line: Expansion) -> Result<T, MatrixError> {
        let n = self.dimension();
        let index = match line {
            Expansion::Row(i) | Expansion::Column(i) => self.check_index(i)?,
        };
        if n == 1 {
            return Ok(self.rows()[0][0]);
        }

        (0..n).try_fold(T::ZERO, |acc, k| {
            let (row, col) = match line {
                Expansion::Row(_) => (index, k),
                Expansion::Column(_) => (k, index),
            };
            add(acc, mul(self.rows()[row][col], self.cofactor_at(row, col)?)?)
        })
    }

    /// 0-based minor. Requires dimension >= 2 and in-range indices.
    fn minor_at(&self, row: usize, col: usize) -> Matrix<T> {
        let rows = self
            .rows()
            .iter()
            .enumerate()
            .filter(|(r, _)| *r != row)
            .map(|(_, entries)| {
                entries
                    .iter()
                    .enumerate()
                    .filter(|(c, _)| *c != col)
                    .map(|(_, &value)| value)
                    .collect()
            })
            .collect();
        Matrix::from_square_rows(rows)
    }

    /// 0-based cofactor. The parity of (row + col) is the same whether the
    /// indices are counted from 0 or from 1.
    fn cofactor_at(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        let minor = self.minor_at(row, col).determinant()?;
        if (row + col) % 2 == 0 {
            Ok(minor)
        } else {
            minor.checked_neg().ok_or(MatrixError::Overflow)
        }
    }
}

fn add<T: Scalar>(a: T, b: T) -> Result<T, MatrixError> {
    a.checked_add(b).ok_or(MatrixError::Overflow)
}

fn sub<T: Scalar>(a: T, b: T) -> Result<T, MatrixError> {
    a.checked_sub(b).ok_or(MatrixError::Overflow)
}

fn mul<T: Scalar>(a: T, b: T) -> Result<T, MatrixError> {
    a.checked_mul(b).ok_or(MatrixError::Overflow)
}

/// Determinant of a raw row list. Shape is validated once here; the
/// recursion below never re-checks it.
pub fn determinant<T: Scalar>(rows: &[Vec<T>]) -> Result<T, MatrixError> {
    let dimension = check_shape(rows)?;
    log::trace!(target: "DETERMINANT", "expanding {0}x{0} matrix", dimension);
    let matrix = Matrix::from_square_rows(rows.to_vec());
    matrix.determinant()
}

/// Free-function form of [`Matrix::minor`].
pub fn minor<T: Scalar>(matrix: &Matrix<T>, i: usize, j: usize) -> Result<Matrix<T>, MatrixError> {
    matrix.minor(i, j)
}

/// Free-function form of [`Matrix::cofactor`].
pub fn cofactor<T: Scalar>(matrix: &Matrix<T>, i: usize, j: usize) -> Result<T, MatrixError> {
    matrix.cofactor(i, j)
}
