use crate::traits::Scalar;

use super::{DimensionMismatch, DynMatrix};

impl<T: Scalar> DynMatrix<T> {
    /// Extract a sub-matrix of size `rows x cols` starting at `(i, j)`.
    ///
    /// Panics if the block extends beyond the matrix bounds.
    ///
    /// ```
    /// use symspectra::DynMatrix;
    /// let m = DynMatrix::from_fn(3, 3, |i, j| (i * 3 + j) as i64);
    /// let b = m.block(1, 1, 2, 2);
    /// assert_eq!(b[(0, 0)], 4);
    /// assert_eq!(b[(1, 1)], 8);
    /// ```
    pub fn block(&self, i: usize, j: usize, rows: usize, cols: usize) -> Self {
        assert!(
            i + rows <= self.nrows && j + cols <= self.ncols,
            "block ({},{}) size {}x{} out of bounds for {}x{} matrix",
            i, j, rows, cols, self.nrows, self.ncols,
        );
        DynMatrix::from_fn(rows, cols, |r, c| self[(i + r, j + c)].clone())
    }

    /// Extract the top-left corner of size `rows x cols`.
    ///
    /// `top_left(k, k)` of a square matrix is its leading principal
    /// submatrix of order `k`.
    pub fn top_left(&self, rows: usize, cols: usize) -> Self {
        self.block(0, 0, rows, cols)
    }

    /// Stack `other` below `self`.
    ///
    /// An empty (`0 x 0`) operand acts as the identity, so a stack can be
    /// folded from [`DynMatrix::zeros(0, 0)`](DynMatrix::zeros).
    ///
    /// ```
    /// use symspectra::DynMatrix;
    /// let a = DynMatrix::from_rows(1, 2, &[1_i64, 2]);
    /// let b = DynMatrix::from_rows(1, 2, &[3_i64, 4]);
    /// let s = a.vstack(&b).unwrap();
    /// assert_eq!(s, DynMatrix::from_rows(2, 2, &[1, 2, 3, 4]));
    /// ```
    pub fn vstack(&self, other: &DynMatrix<T>) -> Result<Self, DimensionMismatch> {
        if self.shape() == (0, 0) {
            return Ok(other.clone());
        }
        if other.shape() == (0, 0) {
            return Ok(self.clone());
        }
        if self.ncols != other.ncols {
            return Err(DimensionMismatch {
                expected: (other.nrows, self.ncols),
                got: (other.nrows, other.ncols),
            });
        }
        let top = self.nrows;
        Ok(DynMatrix::from_fn(top + other.nrows, self.ncols, |i, j| {
            if i < top {
                self[(i, j)].clone()
            } else {
                other[(i - top, j)].clone()
            }
        }))
    }

    /// Stack every matrix in `parts`, top to bottom.
    pub fn vstack_all<'a>(
        parts: impl IntoIterator<Item = &'a DynMatrix<T>>,
    ) -> Result<Self, DimensionMismatch>
    where
        T: 'a,
    {
        parts
            .into_iter()
            .try_fold(DynMatrix::zeros(0, 0), |acc, m| acc.vstack(m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mat4x5() -> DynMatrix<i64> {
        DynMatrix::from_fn(4, 5, |i, j| (i * 5 + j) as i64)
    }

    #[test]
    fn block_extract() {
        let m = mat4x5();
        let b = m.block(1, 1, 2, 3);
        assert_eq!(b[(0, 0)], 6);
        assert_eq!(b[(0, 2)], 8);
        assert_eq!(b[(1, 0)], 11);
        assert_eq!(b[(1, 2)], 13);
    }

    #[test]
    fn block_full() {
        let m = mat4x5();
        assert_eq!(m.block(0, 0, 4, 5), m);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn block_out_of_bounds() {
        let _ = mat4x5().block(3, 0, 2, 1);
    }

    #[test]
    fn top_left_principal() {
        let m = DynMatrix::from_rows(3, 3, &[1_i64, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(m.top_left(2, 2), DynMatrix::from_rows(2, 2, &[1, 2, 4, 5]));
        assert_eq!(m.top_left(1, 1)[(0, 0)], 1);
    }

    #[test]
    fn vstack_rows() {
        let a = DynMatrix::from_rows(1, 3, &[1_i64, 2, 3]);
        let b = DynMatrix::from_rows(2, 3, &[4_i64, 5, 6, 7, 8, 9]);
        let s = a.vstack(&b).unwrap();
        assert_eq!(s.shape(), (3, 3));
        assert_eq!(s[(0, 2)], 3);
        assert_eq!(s[(2, 0)], 7);
    }

    #[test]
    fn vstack_mismatch() {
        let a = DynMatrix::from_rows(1, 3, &[1_i64, 2, 3]);
        let b = DynMatrix::from_rows(1, 2, &[4_i64, 5]);
        let err = a.vstack(&b).unwrap_err();
        assert_eq!(err.expected, (1, 3));
        assert_eq!(err.got, (1, 2));
    }

    #[test]
    fn vstack_all_empty() {
        let parts: Vec<DynMatrix<i64>> = Vec::new();
        let s = DynMatrix::vstack_all(&parts).unwrap();
        assert_eq!(s.shape(), (0, 0));
    }

    #[test]
    fn vstack_all_rows() {
        let parts = vec![
            DynMatrix::from_rows(1, 2, &[1_i64, 0]),
            DynMatrix::from_rows(1, 2, &[0_i64, 1]),
        ];
        assert_eq!(DynMatrix::vstack_all(&parts).unwrap(), DynMatrix::eye(2));
    }
}
