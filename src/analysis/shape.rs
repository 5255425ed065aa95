use crate::traits::MatrixRef;

/// One row or one column. A `1 x 1` matrix is both.
///
/// ```
/// use symspectra::SymMatrix;
/// use symspectra::analysis::is_vector;
///
/// assert!(is_vector(&SymMatrix::from_i64(1, 3, &[1, 2, 3])));
/// assert!(is_vector(&SymMatrix::from_i64(3, 1, &[1, 2, 3])));
/// assert!(!is_vector(&SymMatrix::eye(2)));
/// ```
pub fn is_vector<T>(a: &impl MatrixRef<T>) -> bool {
    a.nrows() == 1 || a.ncols() == 1
}

/// Exactly one column, whatever the row count.
pub fn is_column_vector<T>(a: &impl MatrixRef<T>) -> bool {
    a.ncols() == 1
}

/// Exactly one row, whatever the column count.
pub fn is_row_vector<T>(a: &impl MatrixRef<T>) -> bool {
    a.nrows() == 1
}

#[cfg(test)]
mod tests {
    use crate::DynMatrix;

    use super::*;

    #[test]
    fn classify() {
        let row = DynMatrix::<i64>::zeros(1, 4);
        let col = DynMatrix::<i64>::zeros(4, 1);
        let one = DynMatrix::<i64>::zeros(1, 1);
        let square = DynMatrix::<i64>::zeros(2, 2);

        assert!(is_vector(&row) && is_row_vector(&row) && !is_column_vector(&row));
        assert!(is_vector(&col) && is_column_vector(&col) && !is_row_vector(&col));
        assert!(is_vector(&one) && is_row_vector(&one) && is_column_vector(&one));
        assert!(!is_vector(&square) && !is_row_vector(&square) && !is_column_vector(&square));
    }

    #[test]
    fn every_shape() {
        for rows in 1..5 {
            for cols in 1..5 {
                let m = DynMatrix::<i64>::zeros(rows, cols);
                assert_eq!(is_vector(&m), rows == 1 || cols == 1, "{}x{}", rows, cols);
            }
        }
    }
}
