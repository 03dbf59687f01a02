//! FILENAME: matrix-engine/tests/common/mod.rs
//! Matrix fixtures shared by the determinant integration tests.

use matrix_engine::Matrix;

/// Upper-triangular matrix whose determinant is the product of `diagonal`.
pub fn upper_triangular(diagonal: &[i64]) -> Matrix<i64> {
    let n = diagonal.len();
    let rows = (0..n)
        .map(|r| {
            (0..n)
                .map(|c| {
                    if c == r {
                        diagonal[r]
                    } else if c > r {
                        (r + 2 * c) as i64 - 3
                    } else {
                        0
                    }
                })
                .collect()
        })
        .collect();
    Matrix::new(rows).unwrap()
}

/// Deterministic dense matrix with small entries in -4..=4.
pub fn dense(n: usize, seed: i64) -> Matrix<i64> {
    let rows = (0..n)
        .map(|r| {
            (0..n)
                .map(|c| ((seed + (r as i64) * 7 + (c as i64) * 13 + (r * c) as i64) % 9) - 4)
                .collect()
        })
        .collect();
    Matrix::new(rows).unwrap()
}

/// Converts an integer matrix to floating point.
pub fn to_f64(matrix: &Matrix<i64>) -> Matrix<f64> {
    let rows = matrix
        .rows()
        .iter()
        .map(|row| row.iter().map(|&v| v as f64).collect())
        .collect();
    Matrix::new(rows).unwrap()
}
