use crate::dynmatrix::DynMatrix;
use crate::traits::Scalar;

use super::shape::{is_column_vector, is_row_vector};
use super::AnalysisError;

fn not_vector_like<T>(a: &DynMatrix<T>) -> AnalysisError {
    AnalysisError::Shape(format!(
        "{}x{} matrix is not vector-like",
        a.nrows(),
        a.ncols()
    ))
}

/// Reorient a vector-like matrix as a column, keeping row-major entry order.
///
/// A column vector is returned unchanged.
///
/// ```
/// use symspectra::SymMatrix;
/// use symspectra::analysis::to_column_vector;
///
/// let row = SymMatrix::from_i64(1, 3, &[1, 2, 3]);
/// let col = to_column_vector(&row).unwrap();
/// assert_eq!(col, SymMatrix::from_i64(3, 1, &[1, 2, 3]));
/// ```
pub fn to_column_vector<T: Scalar>(a: &DynMatrix<T>) -> Result<DynMatrix<T>, AnalysisError> {
    if is_column_vector(a) {
        Ok(a.clone())
    } else if is_row_vector(a) {
        Ok(DynMatrix::from_vec(a.len(), 1, a.flat()))
    } else {
        Err(not_vector_like(a))
    }
}

/// Reorient a vector-like matrix as a row, keeping row-major entry order.
///
/// A row vector is returned unchanged.
pub fn to_row_vector<T: Scalar>(a: &DynMatrix<T>) -> Result<DynMatrix<T>, AnalysisError> {
    if is_row_vector(a) {
        Ok(a.clone())
    } else if is_column_vector(a) {
        Ok(DynMatrix::from_vec(1, a.len(), a.flat()))
    } else {
        Err(not_vector_like(a))
    }
}
