use crate::dynmatrix::DynMatrix;
use crate::traits::Scalar;

/// Columns of `a`, left to right, each as an `nrows x 1` matrix.
///
/// ```
/// use symspectra::SymMatrix;
/// use symspectra::analysis::get_column_vectors;
///
/// let a = SymMatrix::from_i64(2, 2, &[1, 2, 3, 4]);
/// let cols = get_column_vectors(&a);
/// assert_eq!(cols[1], SymMatrix::from_i64(2, 1, &[2, 4]));
/// ```
pub fn get_column_vectors<T: Scalar>(a: &DynMatrix<T>) -> Vec<DynMatrix<T>> {
    (0..a.ncols()).map(|j| a.col(j)).collect()
}

/// Rows of `a`, top to bottom, each as a `1 x ncols` matrix.
pub fn get_row_vectors<T: Scalar>(a: &DynMatrix<T>) -> Vec<DynMatrix<T>> {
    (0..a.nrows()).map(|i| a.row(i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_and_rows() {
        let a = DynMatrix::from_rows(2, 3, &[1_i64, 2, 3, 4, 5, 6]);
        let cols = get_column_vectors(&a);
        assert_eq!(cols.len(), 3);
        assert!(cols.iter().all(|c| c.shape() == (2, 1)));
        assert_eq!(cols[2], DynMatrix::from_rows(2, 1, &[3, 6]));

        let rows = get_row_vectors(&a);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], DynMatrix::from_rows(1, 3, &[4, 5, 6]));
    }

    #[test]
    fn vector_input() {
        let v = DynMatrix::from_rows(1, 3, &[7_i64, 8, 9]);
        assert_eq!(get_row_vectors(&v), vec![v.clone()]);
        assert_eq!(get_column_vectors(&v).len(), 3);
    }
}
