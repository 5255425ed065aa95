//! Exact linear algebra over [`FieldScalar`](crate::traits::FieldScalar) matrices.
//!
//! Elimination ([`rref`](crate::DynMatrix::rref), nullspace, inverse,
//! determinant) works for any field element, including symbolic entries.
//! The spectral machinery (characteristic polynomial, eigenvalues,
//! definiteness, orthonormal diagonalization) is gated by the `spectral`
//! feature. Numeric eigenvalues are always exact: rationals, quadratic
//! surds or [`RootOf`](crate::symbolic::RootOf) atoms. Symbolic matrices are
//! solved when their characteristic polynomial splits into linear and
//! quadratic factors; definiteness needs exact numeric entries.

mod gauss;

#[cfg(feature = "spectral")]
mod charpoly;
#[cfg(feature = "spectral")]
mod inertia;
#[cfg(feature = "spectral")]
mod roots;
#[cfg(feature = "spectral")]
pub(crate) mod symmetric_eigen;

#[cfg(feature = "spectral")]
pub use inertia::Inertia;
#[cfg(feature = "spectral")]
pub use symmetric_eigen::SymmetricEigen;

use crate::dynmatrix::DynMatrix;

/// Errors from linear algebra operations.
///
/// ```
/// use symspectra::SymMatrix;
/// use symspectra::linalg::LinalgError;
///
/// let singular = SymMatrix::from_i64(2, 2, &[1, 2, 2, 4]);
/// assert_eq!(singular.inverse().unwrap_err(), LinalgError::Singular);
///
/// let rect = SymMatrix::from_i64(1, 2, &[1, 2]);
/// assert_eq!(
///     rect.inverse().unwrap_err(),
///     LinalgError::NonSquare { nrows: 1, ncols: 2 },
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinalgError {
    /// The operation needs a square matrix.
    #[error("matrix must be square, got {nrows}x{ncols}")]
    NonSquare { nrows: usize, ncols: usize },
    /// Matrix is singular.
    #[error("matrix is singular")]
    Singular,
    /// Matrix is not symmetric.
    #[error("matrix is not symmetric")]
    NotSymmetric,
    /// Symbolic entries (free symbols, π, ...) where the operation needs
    /// exact numbers, or a symbolic characteristic polynomial with a factor
    /// of degree three or more.
    #[error("symbolic matrix is not supported by this operation")]
    Symbolic,
    /// The characteristic polynomial has non-real roots.
    #[error("matrix has non-real eigenvalues")]
    ComplexEigenvalues,
    /// A factor of the characteristic polynomial with irrational
    /// coefficients has degree three or more.
    #[error("characteristic polynomial has an irreducible factor of degree {degree}")]
    UnsolvableCharacteristic { degree: usize },
    /// An eigenspace is smaller than the eigenvalue's multiplicity.
    #[error("eigenspace of {eigenvalue} has dimension {found}, expected {expected}")]
    IncompleteEigenspace {
        eigenvalue: String,
        found: usize,
        expected: usize,
    },
}

pub(crate) fn require_square<T>(a: &DynMatrix<T>) -> Result<usize, LinalgError> {
    if a.is_square() {
        Ok(a.nrows())
    } else {
        Err(LinalgError::NonSquare {
            nrows: a.nrows(),
            ncols: a.ncols(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_square_reports_shape() {
        let a = DynMatrix::<i64>::zeros(2, 3);
        assert_eq!(
            require_square(&a).unwrap_err(),
            LinalgError::NonSquare { nrows: 2, ncols: 3 }
        );
        assert_eq!(require_square(&DynMatrix::<i64>::eye(4)).unwrap(), 4);
    }

    #[test]
    fn error_display() {
        let e = LinalgError::NonSquare { nrows: 2, ncols: 3 };
        assert_eq!(e.to_string(), "matrix must be square, got 2x3");
        let e = LinalgError::UnsolvableCharacteristic { degree: 3 };
        assert!(e.to_string().contains("degree 3"));
    }
}
