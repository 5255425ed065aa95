use log::debug;
use num_traits::Zero;

use crate::dynmatrix::{DynMatrix, SymMatrix};
use crate::symbolic::Expr;

use super::decompose::get_column_vectors;
use super::normalize::{to_column_vector, to_row_vector};
use super::shape::is_vector;
use super::AnalysisError;

fn require_vectors(vectors: &[SymMatrix]) -> Result<(), AnalysisError> {
    match vectors.iter().position(|v| !is_vector(v)) {
        Some(i) => Err(AnalysisError::Shape(format!(
            "vector {} is a {}x{} matrix, not vector-like",
            i,
            vectors[i].nrows(),
            vectors[i].ncols()
        ))),
        None => Ok(()),
    }
}

/// Angle between two vectors, `acos(u·v / (‖u‖·‖v‖))`, in radians.
///
/// Both operands must be vector-like with the same number of entries. The
/// result is exact: standard angles come back as rational multiples of π.
///
/// ```
/// use symspectra::{Expr, SymMatrix};
/// use symspectra::analysis::calculate_vector_angle;
///
/// let u = SymMatrix::from_i64(2, 1, &[1, 0]);
/// let v = SymMatrix::from_i64(1, 2, &[1, 1]);
/// let angle = calculate_vector_angle(&u, &v).unwrap();
/// assert_eq!(angle, Expr::pi() * Expr::rational(1, 4));
/// ```
pub fn calculate_vector_angle(u: &SymMatrix, v: &SymMatrix) -> Result<Expr, AnalysisError> {
    if !(is_vector(u) && is_vector(v)) {
        return Err(AnalysisError::Shape(
            "vector angle needs two vector-like matrices".into(),
        ));
    }
    let dot = u.dot(v)?;
    if u.norm_squared().is_zero() || v.norm_squared().is_zero() {
        return Err(AnalysisError::Value(
            "angle with the zero vector is undefined".into(),
        ));
    }
    let cos = dot
        .checked_div(&(u.norm() * v.norm()))
        .ok_or_else(|| AnalysisError::Value("angle with the zero vector is undefined".into()))?;
    Ok(cos.acos())
}

/// Rayleigh quotient `vᵀAv / vᵀv`, coerced to `f64`.
///
/// `A` and `v` must be free of symbols, `A` square and `v` a vector with one
/// entry per row of `A`. A row vector is read as the matching column.
///
/// ```
/// use symspectra::SymMatrix;
/// use symspectra::analysis::calculate_rayleigh_quotient;
///
/// let a = SymMatrix::from_i64(2, 2, &[2, 0, 0, 4]);
/// let v = SymMatrix::from_i64(1, 2, &[1, 1]);
/// assert_eq!(calculate_rayleigh_quotient(&a, &v).unwrap(), 3.0);
/// ```
pub fn calculate_rayleigh_quotient(a: &SymMatrix, v: &SymMatrix) -> Result<f64, AnalysisError> {
    if a.is_symbolic() || v.is_symbolic() {
        return Err(AnalysisError::Matrix("symbolic matrix not supported".into()));
    }
    if !a.is_square() {
        return Err(AnalysisError::NonSquare {
            nrows: a.nrows(),
            ncols: a.ncols(),
        });
    }
    if !is_vector(v) {
        return Err(AnalysisError::Shape(
            "rayleigh quotient needs a row or column vector".into(),
        ));
    }
    let x = to_column_vector(v)?;
    if x.nrows() != a.nrows() {
        return Err(AnalysisError::Shape(format!(
            "vector of length {} against {}x{} matrix",
            x.nrows(),
            a.nrows(),
            a.ncols()
        )));
    }
    let xx = x.norm_squared();
    let xax = (&(&x.transpose() * a) * &x)[(0, 0)].clone();
    let q = xax
        .checked_div(&xx)
        .ok_or_else(|| AnalysisError::Value("rayleigh quotient of the zero vector".into()))?;
    q.to_f64()
        .ok_or_else(|| AnalysisError::Matrix("quotient has no numeric value".into()))
}

/// Dual basis of `vectors`: column `i` of the inverse of the matrix whose
/// rows are the inputs, so that `wᵢ·vⱼ = δᵢⱼ`.
///
/// A singular or non-square stack fails with the inverse's own error.
///
/// ```
/// use symspectra::SymMatrix;
/// use symspectra::analysis::calculate_contravariant_basis;
///
/// let basis = [
///     SymMatrix::from_i64(2, 1, &[1, 1]),
///     SymMatrix::from_i64(2, 1, &[0, 1]),
/// ];
/// let dual = calculate_contravariant_basis(&basis).unwrap();
/// assert_eq!(dual[0], SymMatrix::from_i64(2, 1, &[1, 0]));
/// assert_eq!(dual[1], SymMatrix::from_i64(2, 1, &[-1, 1]));
/// ```
pub fn calculate_contravariant_basis(vectors: &[SymMatrix]) -> Result<Vec<SymMatrix>, AnalysisError> {
    require_vectors(vectors)?;
    if vectors.is_empty() {
        return Ok(Vec::new());
    }
    let rows = vectors
        .iter()
        .map(to_row_vector)
        .collect::<Result<Vec<_>, _>>()?;
    let stacked = DynMatrix::vstack_all(&rows)?;
    let inverse = stacked.inverse()?;
    debug!("contravariant basis of {} vectors", vectors.len());
    Ok(get_column_vectors(&inverse))
}

/// Change-of-basis matrix with `T[i, j] = new[i]·old[j]`.
///
/// Both bases must hold the same number of vectors (`Value` otherwise),
/// every vector must be vector-like and paired vectors must have the same
/// length (`Shape`). Entries are left as computed.
///
/// ```
/// use symspectra::SymMatrix;
/// use symspectra::analysis::calculate_transform_matrix;
///
/// let old = [SymMatrix::from_i64(2, 1, &[1, 0]), SymMatrix::from_i64(2, 1, &[0, 1])];
/// let new = [SymMatrix::from_i64(2, 1, &[0, 1]), SymMatrix::from_i64(2, 1, &[1, 0])];
/// let t = calculate_transform_matrix(&old, &new).unwrap();
/// assert_eq!(t, SymMatrix::from_i64(2, 2, &[0, 1, 1, 0]));
/// ```
pub fn calculate_transform_matrix(
    old_vectors: &[SymMatrix],
    new_vectors: &[SymMatrix],
) -> Result<SymMatrix, AnalysisError> {
    if old_vectors.len() != new_vectors.len() {
        return Err(AnalysisError::Value(format!(
            "basis cardinality mismatch: {} old vectors, {} new vectors",
            old_vectors.len(),
            new_vectors.len()
        )));
    }
    require_vectors(old_vectors)?;
    require_vectors(new_vectors)?;

    let n = old_vectors.len();
    let mut entries = Vec::with_capacity(n * n);
    for new in new_vectors {
        for old in old_vectors {
            entries.push(new.dot(old)?);
        }
    }
    Ok(DynMatrix::from_rows(n, n, &entries))
}
