//! FILENAME: matrix-engine/tests/test_determinant.rs
//! Integration tests for the public determinant API.

mod common;

use common::{dense, to_f64, upper_triangular};
use matrix_engine::{
    cofactor, determinant, minor, DeterminantEngine, EngineConfig, Expansion, Matrix,
    MatrixError,
};

// ============================================================================
// EXPANSION
// ============================================================================

#[test]
fn test_triangular_is_product_of_diagonal() {
    let m = upper_triangular(&[2, -3, 4, 1, 5]);
    assert_eq!(m.determinant().unwrap(), 2 * -3 * 4 * 5);
}

#[test]
fn test_first_row_sum_of_cofactors() {
    let m = dense(5, 3);
    let mut total = 0;
    for j in 1..=5 {
        total += m.get(1, j).unwrap() * cofactor(&m, 1, j).unwrap();
    }
    assert_eq!(total, determinant(m.rows()).unwrap());
}

#[test]
fn test_cofactor_is_signed_minor_determinant() {
    let m = dense(4, 11);
    for i in 1..=4 {
        for j in 1..=4 {
            let sub = minor(&m, i, j).unwrap();
            assert_eq!(sub.dimension(), 3);
            let sign = if (i + j) % 2 == 0 { 1 } else { -1 };
            assert_eq!(cofactor(&m, i, j).unwrap(), sign * sub.determinant().unwrap());
        }
    }
}

#[test]
fn test_cross_check_expansions_on_dense_matrices() {
    for seed in 0..6 {
        let m = dense(5, seed);
        let expected = m.determinant().unwrap();
        for k in 1..=5 {
            assert_eq!(m.expand_along(Expansion::Row(k)).unwrap(), expected);
            assert_eq!(m.expand_along(Expansion::Column(k)).unwrap(), expected);
        }
    }
}

#[test]
fn test_float_agrees_with_exact() {
    for seed in 0..4 {
        let exact = dense(5, seed);
        let approx = to_f64(&exact).determinant().unwrap();
        assert!((approx - exact.determinant().unwrap() as f64).abs() < 1e-6);
    }
}

#[test]
fn test_row_swap_negates_dense() {
    let m = dense(5, 2);
    for (a, b) in [(1, 2), (2, 5), (3, 4)] {
        assert_eq!(m.swap_rows(a, b).unwrap().determinant().unwrap(), -m.determinant().unwrap());
    }
}

// ============================================================================
// ENGINE
// ============================================================================

#[test]
fn test_engine_from_json_config() {
    let config = EngineConfig::from_json(r#"{"max_dimension": 5}"#).unwrap();
    let engine = DeterminantEngine::new(config).unwrap();

    let m = upper_triangular(&[1, 2, 3, 4, 5]);
    assert_eq!(engine.determinant(&m).unwrap(), 120);

    let too_big = upper_triangular(&[1, 1, 1, 1, 1, 1]);
    assert!(matches!(
        engine.determinant(&too_big),
        Err(MatrixError::DimensionLimitExceeded { dimension: 6, limit: 5 })
    ));
}

#[test]
fn test_engine_rows_entry_point() {
    let engine = DeterminantEngine::default();
    let rows = vec![vec![2.0, 0.0], vec![0.0, 0.5]];
    assert_eq!(engine.determinant_of_rows(&rows).unwrap(), 1.0);
}

// ============================================================================
// SERIALIZATION
// ============================================================================

#[test]
fn test_matrix_json_shape() {
    let m = Matrix::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(json, "[[1,2],[3,4]]");

    let back: Matrix<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.determinant().unwrap(), -2);
}

#[test]
fn test_matrix_json_rejects_bad_shape() {
    let ragged = serde_json::from_str::<Matrix<f64>>("[[1.0, 2.0], [3.0]]");
    assert!(ragged.is_err());

    let empty = serde_json::from_str::<Matrix<f64>>("[]");
    assert!(empty.is_err());
}
