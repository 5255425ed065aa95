//! Matrix analysis suite: vector shapes, basis changes, metric quantities
//! and spectral operations over [`SymMatrix`](crate::SymMatrix).
//!
//! Every function validates its preconditions first and returns a fresh
//! result; inputs are never mutated.
//!
//! # Vector shapes
//!
//! - [`is_vector`], [`is_row_vector`], [`is_column_vector`]: shape predicates
//! - [`to_column_vector`], [`to_row_vector`]: reorient a vector, row-major order
//! - [`get_column_vectors`], [`get_row_vectors`]: split a matrix
//!
//! # Bases and metrics
//!
//! - [`calculate_vector_angle`]: exact angle between two vectors
//! - [`calculate_rayleigh_quotient`]: `vᵀAv / vᵀv` as `f64`
//! - [`calculate_contravariant_basis`]: dual basis through the inverse
//! - [`calculate_transform_matrix`]: change-of-basis matrix of inner products
//!
//! # Spectral operations (`spectral` feature)
//!
//! - [`get_sturm_sequence`]: eigenvalues of the leading principal submatrices
//! - [`eigenpairs`], [`matrix_power_via_spectrum`], [`spectral_decomposition`]

mod basis;
mod decompose;
mod normalize;
mod shape;
#[cfg(feature = "spectral")]
mod spectral;


pub use basis::{
    calculate_contravariant_basis, calculate_rayleigh_quotient, calculate_transform_matrix,
    calculate_vector_angle,
};
pub use decompose::{get_column_vectors, get_row_vectors};
pub use normalize::{to_column_vector, to_row_vector};
pub use shape::{is_column_vector, is_row_vector, is_vector};
#[cfg(feature = "spectral")]
pub use spectral::{
    eigenpairs, get_sturm_sequence, matrix_power_via_spectrum, spectral_decomposition, Eigenpair,
    SpectralDecomposition,
};

use crate::dynmatrix::DimensionMismatch;
use crate::linalg::LinalgError;

/// Errors from the analysis suite.
///
/// ```
/// use symspectra::SymMatrix;
/// use symspectra::analysis::{to_column_vector, AnalysisError};
///
/// let m = SymMatrix::from_i64(2, 2, &[1, 2, 3, 4]);
/// assert!(matches!(to_column_vector(&m), Err(AnalysisError::Shape(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// An input is not vector-like, or vector lengths disagree.
    #[error("shape error: {0}")]
    Shape(String),
    /// A required algebraic property does not hold.
    #[error("matrix error: {0}")]
    Matrix(String),
    /// The operation needs a square matrix.
    #[error("matrix must be square, got {nrows}x{ncols}")]
    NonSquare { nrows: usize, ncols: usize },
    /// An argument is structurally invalid.
    #[error("value error: {0}")]
    Value(String),
    /// Passed through from the linear algebra layer.
    #[error(transparent)]
    Linalg(#[from] LinalgError),
}

impl From<DimensionMismatch> for AnalysisError {
    fn from(e: DimensionMismatch) -> Self {
        AnalysisError::Shape(e.to_string())
    }
}
