//! FILENAME: matrix-engine/src/lib.rs
//! PURPOSE: Library root for the determinant engine.
//! CONTEXT: Computes determinants of square matrices by recursive cofactor
//! (Laplace) expansion along the first row.
//!
//! PIPELINE: Raw rows --> shape check --> Matrix --> expansion --> scalar
//!
//! The engine is stateless: every call owns its submatrices and nothing is
//! shared between calls, so matrices can be evaluated on any thread.

pub mod cofactor;
pub mod engine;
mod error;
pub mod matrix;
pub mod scalar;


pub use cofactor::{cofactor, determinant, minor, Expansion};
pub use engine::{DeterminantEngine, EngineConfig, DEFAULT_MAX_DIMENSION};
pub use error::MatrixError;
pub use matrix::Matrix;
pub use scalar::Scalar;
