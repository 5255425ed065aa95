use log::debug;

use crate::dynmatrix::SymMatrix;
use crate::linalg::SymmetricEigen;
use crate::symbolic::Expr;

use super::AnalysisError;

/// Eigenvalues of the nested leading principal submatrices.
///
/// Entry `i` holds the eigenvalues (with multiplicity, ascending) of the
/// `(n - i) x (n - i)` top-left block, so entry 0 covers the whole matrix
/// and the last entry the `1 x 1` corner. Only positive definite or
/// indefinite matrices are accepted.
///
/// ```
/// use symspectra::{Expr, SymMatrix};
/// use symspectra::analysis::get_sturm_sequence;
///
/// let a = SymMatrix::from_i64(2, 2, &[2, 1, 1, 2]);
/// let seq = get_sturm_sequence(&a).unwrap();
/// assert_eq!(seq, vec![vec![Expr::from(1), Expr::from(3)], vec![Expr::from(2)]]);
/// ```
pub fn get_sturm_sequence(a: &SymMatrix) -> Result<Vec<Vec<Expr>>, AnalysisError> {
    if !(a.is_positive_definite()? || a.is_indefinite()?) {
        return Err(AnalysisError::Matrix(
            "matrix not positive-definite or indefinite".into(),
        ));
    }
    let n = a.nrows();
    let mut sequence = Vec::with_capacity(n);
    for i in 0..n {
        let k = n - i;
        let values = a.top_left(k, k).eigenvals()?;
        debug!("sturm sequence: order {} has {} eigenvalues", k, values.len());
        sequence.push(values);
    }
    Ok(sequence)
}

/// An eigenvalue with its unit eigenvector (a column).
#[derive(Debug, Clone, PartialEq)]
pub struct Eigenpair {
    pub eigenvalue: Expr,
    pub eigenvector: SymMatrix,
}

fn require_symmetric(a: &SymMatrix) -> Result<(), AnalysisError> {
    if a.is_square() && a.is_symmetric() {
        Ok(())
    } else {
        Err(AnalysisError::Matrix("matrix not symmetric".into()))
    }
}

/// Orthonormal eigenpairs of a symmetric matrix, eigenvalues ascending.
///
/// ```
/// use symspectra::{Expr, SymMatrix};
/// use symspectra::analysis::eigenpairs;
///
/// let a = SymMatrix::from_i64(2, 2, &[3, 0, 0, 2]);
/// let pairs = eigenpairs(&a).unwrap();
/// assert_eq!(pairs[0].eigenvalue, Expr::from(2));
/// assert_eq!(pairs[0].eigenvector, SymMatrix::from_i64(2, 1, &[0, 1]));
/// ```
pub fn eigenpairs(a: &SymMatrix) -> Result<Vec<Eigenpair>, AnalysisError> {
    require_symmetric(a)?;
    let eig = SymmetricEigen::new(a)?;
    Ok(eig
        .eigenvalues()
        .iter()
        .enumerate()
        .map(|(i, lambda)| Eigenpair {
            eigenvalue: lambda.clone(),
            eigenvector: eig.eigenvector(i),
        })
        .collect())
}

/// `Aⁿ = Σ λⁿ·Pλ` over the eigenspace projectors of a symmetric matrix.
///
/// `n = 0` gives the identity. A negative `n` needs every eigenvalue to be
/// nonzero, otherwise the matrix is singular. Conjugate algebraic
/// eigenvalues are summed through the field trace, so an integer matrix
/// has a rational power even when its eigenvalues have no radical form.
///
/// ```
/// use symspectra::SymMatrix;
/// use symspectra::analysis::matrix_power_via_spectrum;
///
/// let a = SymMatrix::from_i64(2, 2, &[2, 1, 1, 2]);
/// assert_eq!(matrix_power_via_spectrum(&a, 2).unwrap(), &a * &a);
/// ```
pub fn matrix_power_via_spectrum(a: &SymMatrix, n: i64) -> Result<SymMatrix, AnalysisError> {
    require_symmetric(a)?;
    Ok(SymmetricEigen::new(a)?.power(n)?)
}

/// Result of [`spectral_decomposition`].
#[derive(Debug, Clone, PartialEq)]
pub enum SpectralDecomposition {
    /// No power was requested.
    Eigenpairs(Vec<Eigenpair>),
    /// The matrix raised to the requested power.
    Power(SymMatrix),
}

/// Eigenpairs of a symmetric matrix, or its power when `power` is given.
///
/// `power` must be an integer expression, else `AnalysisError::Value`.
///
/// ```
/// use symspectra::{Expr, SymMatrix};
/// use symspectra::analysis::{spectral_decomposition, SpectralDecomposition};
///
/// let a = SymMatrix::from_i64(2, 2, &[2, 0, 0, 3]);
/// let squared = spectral_decomposition(&a, Some(&Expr::from(2))).unwrap();
/// assert_eq!(squared, SpectralDecomposition::Power(SymMatrix::from_i64(2, 2, &[4, 0, 0, 9])));
/// ```
pub fn spectral_decomposition(
    a: &SymMatrix,
    power: Option<&Expr>,
) -> Result<SpectralDecomposition, AnalysisError> {
    require_symmetric(a)?;
    match power {
        None => Ok(SpectralDecomposition::Eigenpairs(eigenpairs(a)?)),
        Some(p) => {
            let n = p.as_integer().ok_or_else(|| {
                AnalysisError::Value(format!("power must be an integer, got {}", p))
            })?;
            Ok(SpectralDecomposition::Power(matrix_power_via_spectrum(a, n)?))
        }
    }
}
