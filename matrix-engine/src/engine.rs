//! FILENAME: matrix-engine/src/engine.rs
//! PURPOSE: Configurable front door for determinant computation.
//! CONTEXT: Cofactor expansion grows factorially with N, so callers that
//! need bounded latency hand the engine an `EngineConfig` with a size cap.
//! The cap is checked once, before any recursion starts.

use serde::{Deserialize, Serialize};

use crate::error::MatrixError;
use crate::matrix::{check_shape, Matrix};
use crate::scalar::Scalar;

/// Largest dimension accepted when no explicit config is given.
pub const DEFAULT_MAX_DIMENSION: usize = 10;

/// Engine settings. Missing JSON fields fall back to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Matrices with more rows than this are rejected up front.
    pub max_dimension: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}

impl EngineConfig {
    pub fn with_max_dimension(max_dimension: usize) -> Self {
        EngineConfig { max_dimension }
    }

    /// Parses and validates a config from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, MatrixError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), MatrixError> {
        if self.max_dimension == 0 {
            return Err(MatrixError::InvalidConfig(
                "max_dimension must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Computes determinants subject to an `EngineConfig`.
#[derive(Debug, Clone, Default)]
pub struct DeterminantEngine {
    config: EngineConfig,
}

impl DeterminantEngine {
    pub fn new(config: EngineConfig) -> Result<Self, MatrixError> {
        config.validate()?;
        Ok(DeterminantEngine { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Determinant of an already validated matrix.
    pub fn determinant<T: Scalar>(&self, matrix: &Matrix<T>) -> Result<T, MatrixError> {
        self.check_limit(matrix.dimension())?;
        log::debug!(
            target: "DETERMINANT",
            "cofactor expansion of {0}x{0} matrix",
            matrix.dimension()
        );
        matrix.determinant()
    }

    /// Determinant of raw rows: shape check, size check, then expansion.
    pub fn determinant_of_rows<T: Scalar>(&self, rows: &[Vec<T>]) -> Result<T, MatrixError> {
        let dimension = check_shape(rows).map_err(|e| {
            log::debug!(target: "DETERMINANT", "rejected input: {}", e);
            e
        })?;
        self.check_limit(dimension)?;
        let matrix = Matrix::from_square_rows(rows.to_vec());
        self.determinant(&matrix)
    }

    fn check_limit(&self, dimension: usize) -> Result<(), MatrixError> {
        if dimension > self.config.max_dimension {
            log::warn!(
                target: "DETERMINANT",
                "refusing {0}x{0} matrix (limit {1})",
                dimension,
                self.config.max_dimension
            );
            return Err(MatrixError::DimensionLimitExceeded {
                dimension,
                limit: self.config.max_dimension,
            });
        }
        Ok(())
    }
}
