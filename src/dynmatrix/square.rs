use crate::traits::Scalar;

use super::DynMatrix;

impl<T: Scalar> DynMatrix<T> {
    /// Sum of diagonal elements.
    ///
    /// ```
    /// use symspectra::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 2, &[1_i64, 2, 3, 4]);
    /// assert_eq!(m.trace(), 5);
    /// ```
    pub fn trace(&self) -> T {
        let n = self.nrows.min(self.ncols);
        let mut sum = T::zero();
        for i in 0..n {
            sum = sum + self[(i, i)].clone();
        }
        sum
    }

    /// The diagonal entries.
    pub fn diagonal(&self) -> Vec<T> {
        let n = self.nrows.min(self.ncols);
        (0..n).map(|i| self[(i, i)].clone()).collect()
    }

    /// Create a square diagonal matrix.
    ///
    /// ```
    /// use symspectra::DynMatrix;
    /// let m = DynMatrix::from_diag(&[2_i64, 3]);
    /// assert_eq!(m[(0, 0)], 2);
    /// assert_eq!(m[(1, 1)], 3);
    /// assert_eq!(m[(0, 1)], 0);
    /// ```
    pub fn from_diag(diag: &[T]) -> Self {
        let n = diag.len();
        let mut m = Self::zeros(n, n);
        for (i, d) in diag.iter().enumerate() {
            m[(i, i)] = d.clone();
        }
        m
    }

    /// Non-negative integer power via repeated squaring.
    ///
    /// `pow(0)` returns the identity matrix. Panics if not square.
    ///
    /// ```
    /// use symspectra::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 2, &[1_i64, 1, 0, 1]);
    /// assert_eq!(m.pow(3)[(0, 1)], 3);
    /// ```
    pub fn pow(&self, mut n: u32) -> Self {
        assert!(self.is_square(), "pow requires a square matrix");
        let mut result = Self::eye(self.nrows);
        let mut base = self.clone();
        while n > 0 {
            if n & 1 == 1 {
                result = &result * &base;
            }
            n >>= 1;
            if n > 0 {
                base = &base * &base;
            }
        }
        result
    }

    /// Check if the matrix is symmetric.
    ///
    /// The test is exact: every difference `A[i,j] - A[j,i]` must be zero,
    /// so entries that are equal only after simplification still count.
    ///
    /// ```
    /// use symspectra::DynMatrix;
    /// let sym = DynMatrix::from_rows(2, 2, &[1_i64, 2, 2, 3]);
    /// assert!(sym.is_symmetric());
    /// ```
    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        let n = self.nrows;
        for i in 0..n {
            for j in (i + 1)..n {
                if !(self[(i, j)].clone() - self[(j, i)].clone()).is_zero() {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::symbolic::{Expr, Symbol};
    use crate::SymMatrix;

    use super::*;

    #[test]
    fn trace() {
        let m = DynMatrix::from_rows(3, 3, &[1_i64, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(m.trace(), 15);
        assert_eq!(m.diagonal(), vec![1, 5, 9]);
    }

    #[test]
    fn from_diag() {
        let m = DynMatrix::from_diag(&[1_i64, 2, 3]);
        assert_eq!(m.trace(), 6);
        assert_eq!(m[(0, 2)], 0);
    }

    #[test]
    fn pow() {
        let m = DynMatrix::from_rows(2, 2, &[1_i64, 1, 1, 0]);
        // Fibonacci
        assert_eq!(m.pow(10), DynMatrix::from_rows(2, 2, &[89, 55, 55, 34]));
        assert_eq!(m.pow(0), DynMatrix::eye(2));
    }

    #[test]
    fn symmetric() {
        let sym = DynMatrix::from_rows(3, 3, &[1_i64, 2, 3, 2, 4, 5, 3, 5, 6]);
        assert!(sym.is_symmetric());
        let not = DynMatrix::from_rows(2, 2, &[1_i64, 2, 3, 4]);
        assert!(!not.is_symmetric());
        let rect = DynMatrix::<i64>::zeros(2, 3);
        assert!(!rect.is_symmetric());
    }

    #[test]
    fn symmetric_symbolic() {
        let x = Expr::symbol(&Symbol::new("x"));
        let a = (&x + &Expr::from(1)) * (&x - &Expr::from(1));
        let b = &x * &x - Expr::from(1);
        let m = SymMatrix::from_rows(2, 2, &[Expr::from(0), a, b, x.clone()]);
        assert!(m.is_symmetric());
        let n = SymMatrix::from_rows(2, 2, &[Expr::from(0), x.clone(), -x, Expr::from(0)]);
        assert!(!n.is_symmetric());
    }
}
