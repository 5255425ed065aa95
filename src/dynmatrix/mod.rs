pub mod aliases;
mod block;
mod norm;
mod ops;
mod square;
mod util;

pub use aliases::*;

use core::ops::{Index, IndexMut};

use crate::traits::{MatrixRef, Scalar};

/// Dimension mismatch error for shape-checked operations.
///
/// Returned by [`DynMatrix::vstack`] when the column counts differ and by
/// [`DynMatrix::dot`] when the operands hold different numbers of entries.
///
/// # Example
///
/// ```
/// use symspectra::DynMatrix;
/// use symspectra::dynmatrix::DimensionMismatch;
///
/// let a = DynMatrix::<i64>::zeros(1, 3);
/// let b = DynMatrix::<i64>::zeros(1, 2);
/// let err: DimensionMismatch = a.vstack(&b).unwrap_err();
/// assert_eq!(err.got, (1, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionMismatch {
    /// Expected `(rows, cols)`.
    pub expected: (usize, usize),
    /// Got `(rows, cols)`.
    pub got: (usize, usize),
}

impl core::fmt::Display for DimensionMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "dimension mismatch: expected {}x{}, got {}x{}",
            self.expected.0, self.expected.1, self.got.0, self.got.1
        )
    }
}

impl std::error::Error for DimensionMismatch {}

/// Dynamically-sized heap-allocated matrix.
///
/// Column-major `Vec<T>` storage with runtime dimensions. Zero-sized
/// matrices are allowed (an empty stack of vectors is `0 x 0`). Elements are
/// only required to be [`Scalar`], so the same container holds exact
/// symbolic entries ([`SymMatrix`]) and plain integers.
///
/// # Examples
///
/// ```
/// use symspectra::DynMatrix;
///
/// let a = DynMatrix::from_rows(2, 2, &[1_i64, 2, 3, 4]);
/// assert_eq!(a[(0, 1)], 2);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let b = DynMatrix::<i64>::eye(3);
/// assert_eq!(b[(0, 0)], 1);
/// assert_eq!(b[(0, 1)], 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DynMatrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> DynMatrix<T> {
    /// Create an `nrows x ncols` matrix of zeros.
    ///
    /// ```
    /// use symspectra::SymMatrix;
    /// let m = SymMatrix::zeros(2, 3);
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(m.is_zero());
    /// ```
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![T::zero(); nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create an `n x n` identity matrix.
    pub fn eye(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Panics if `row_major.len() != nrows * ncols`.
    ///
    /// ```
    /// use symspectra::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 3, &[1_i64, 2, 3, 4, 5, 6]);
    /// assert_eq!(m[(0, 2)], 3);
    /// assert_eq!(m[(1, 0)], 4);
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Self {
        assert_eq!(
            row_major.len(),
            nrows * ncols,
            "slice length {} does not match {}x{} matrix",
            row_major.len(),
            nrows,
            ncols,
        );
        Self::from_fn(nrows, ncols, |i, j| row_major[i * ncols + j].clone())
    }

    /// Create a matrix from an owned `Vec<T>` in column-major order.
    ///
    /// Panics if `data.len() != nrows * ncols`.
    ///
    /// ```
    /// use symspectra::DynMatrix;
    /// // Column-major: col0=[1,3], col1=[2,4]
    /// let m = DynMatrix::from_vec(2, 2, vec![1_i64, 3, 2, 4]);
    /// assert_eq!(m[(0, 0)], 1);
    /// assert_eq!(m[(0, 1)], 2);
    /// ```
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            nrows * ncols,
            "vec length {} does not match {}x{} matrix",
            data.len(),
            nrows,
            ncols,
        );
        Self { data, nrows, ncols }
    }

    /// Whether every entry is zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(T::is_zero)
    }
}

impl<T> DynMatrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Total number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Entries in column-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use symspectra::DynMatrix;
    /// let m = DynMatrix::from_fn(3, 3, |i, j| if i == j { 1_i64 } else { 0 });
    /// assert_eq!(m[(0, 0)], 1);
    /// assert_eq!(m[(0, 1)], 0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for j in 0..ncols {
            for i in 0..nrows {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }
}

// ── MatrixRef ───────────────────────────────────────────────────────

impl<T> MatrixRef<T> for DynMatrix<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data[col * self.nrows + row]
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for DynMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({},{}) out of bounds for {}x{} matrix",
            row, col, self.nrows, self.ncols,
        );
        &self.data[col * self.nrows + row]
    }
}

impl<T> IndexMut<(usize, usize)> for DynMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({},{}) out of bounds for {}x{} matrix",
            row, col, self.nrows, self.ncols,
        );
        &mut self.data[col * self.nrows + row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros() {
        let m = DynMatrix::<i64>::zeros(3, 4);
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 4);
        for i in 0..3 {
            for j in 0..4 {
                assert_eq!(m[(i, j)], 0);
            }
        }
        assert!(m.is_zero());
    }

    #[test]
    fn empty() {
        let m = DynMatrix::<i64>::zeros(0, 0);
        assert!(m.is_empty());
        assert!(m.is_square());
        assert_eq!(m.shape(), (0, 0));
    }

    #[test]
    fn eye() {
        let m = DynMatrix::<i64>::eye(3);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1 } else { 0 };
                assert_eq!(m[(i, j)], expected);
            }
        }
    }

    #[test]
    fn from_rows() {
        let m = DynMatrix::from_rows(2, 3, &[1_i64, 2, 3, 4, 5, 6]);
        assert_eq!(m[(0, 0)], 1);
        assert_eq!(m[(0, 2)], 3);
        assert_eq!(m[(1, 0)], 4);
        assert_eq!(m[(1, 2)], 6);
        assert_eq!(m.as_slice(), &[1, 4, 2, 5, 3, 6]);
    }

    #[test]
    #[should_panic(expected = "slice length")]
    fn from_rows_wrong_length() {
        let _ = DynMatrix::from_rows(2, 2, &[1_i64, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_out_of_bounds() {
        let m = DynMatrix::<i64>::zeros(2, 2);
        let _ = m[(2, 0)];
    }

    #[test]
    fn from_fn() {
        let m = DynMatrix::from_fn(3, 3, |i, j| (i * 3 + j) as i64);
        assert_eq!(m[(0, 0)], 0);
        assert_eq!(m[(1, 1)], 4);
        assert_eq!(m[(2, 2)], 8);
    }

    #[test]
    fn index_mut() {
        let mut m = DynMatrix::<i64>::zeros(2, 2);
        m[(0, 1)] = 5;
        assert_eq!(m[(0, 1)], 5);
    }

    #[test]
    fn matrix_ref_trait() {
        let m = DynMatrix::from_rows(2, 2, &[1_i64, 2, 3, 4]);
        fn trace<T: Scalar>(m: &impl MatrixRef<T>) -> T {
            let mut sum = T::zero();
            let n = m.nrows().min(m.ncols());
            for i in 0..n {
                sum = sum + m.get(i, i).clone();
            }
            sum
        }
        assert_eq!(trace(&m), 5);
        assert_eq!(MatrixRef::shape(&m), (2, 2));
    }

    #[test]
    fn dimension_mismatch_display() {
        let e = DimensionMismatch {
            expected: (2, 3),
            got: (2, 2),
        };
        assert_eq!(e.to_string(), "dimension mismatch: expected 2x3, got 2x2");
    }
}
