use log::trace;

use crate::dynmatrix::DynMatrix;
use crate::linalg::{require_square, LinalgError};
use crate::traits::FieldScalar;

/// `row[target] -= factor * row[source]`, from column `from` onwards.
fn eliminate<T: FieldScalar>(m: &mut DynMatrix<T>, target: usize, source: usize, factor: &T, from: usize) {
    for j in from..m.ncols() {
        let s = m[(source, j)].clone();
        if s.is_zero() {
            continue;
        }
        let t = m[(target, j)].clone();
        m[(target, j)] = t - factor.clone() * s;
    }
}

impl<T: FieldScalar> DynMatrix<T> {
    /// Reduced row echelon form and the pivot columns.
    ///
    /// Pivots are the first entry in each column that is exactly nonzero.
    ///
    /// ```
    /// use symspectra::SymMatrix;
    /// let a = SymMatrix::from_i64(2, 3, &[1, 2, 3, 2, 4, 7]);
    /// let (r, pivots) = a.rref();
    /// assert_eq!(pivots, vec![0, 2]);
    /// assert_eq!(r, SymMatrix::from_i64(2, 3, &[1, 2, 0, 0, 0, 1]));
    /// ```
    pub fn rref(&self) -> (DynMatrix<T>, Vec<usize>) {
        let (rows, cols) = self.shape();
        let mut m = self.clone();
        let mut pivots = Vec::new();
        let mut r = 0;
        for c in 0..cols {
            if r == rows {
                break;
            }
            let Some(p) = (r..rows).find(|&i| !m[(i, c)].is_zero()) else {
                continue;
            };
            m.swap_rows(r, p);
            let Some(inv) = m[(r, c)].inverse() else {
                continue;
            };
            for j in c..cols {
                let v = m[(r, j)].clone();
                m[(r, j)] = v * inv.clone();
            }
            for i in 0..rows {
                if i == r {
                    continue;
                }
                let factor = m[(i, c)].clone();
                if !factor.is_zero() {
                    eliminate(&mut m, i, r, &factor, c);
                }
            }
            trace!("rref: pivot at ({}, {})", r, c);
            pivots.push(c);
            r += 1;
        }
        (m, pivots)
    }

    /// Basis of the null space as column vectors.
    ///
    /// One vector per free column, with that free variable set to one.
    ///
    /// ```
    /// use symspectra::SymMatrix;
    /// let a = SymMatrix::from_i64(1, 2, &[1, 1]);
    /// let ns = a.nullspace();
    /// assert_eq!(ns, vec![SymMatrix::from_i64(2, 1, &[-1, 1])]);
    /// ```
    pub fn nullspace(&self) -> Vec<DynMatrix<T>> {
        let (r, pivots) = self.rref();
        let cols = self.ncols();
        (0..cols)
            .filter(|c| !pivots.contains(c))
            .map(|free| {
                let mut v = DynMatrix::zeros(cols, 1);
                v[(free, 0)] = T::one();
                for (row, &pc) in pivots.iter().enumerate() {
                    v[(pc, 0)] = -r[(row, free)].clone();
                }
                v
            })
            .collect()
    }

    /// Inverse by Gauss-Jordan elimination of `[A | I]`.
    ///
    /// ```
    /// use symspectra::SymMatrix;
    /// let a = SymMatrix::from_i64(2, 2, &[2, 1, 1, 1]);
    /// let inv = a.inverse().unwrap();
    /// assert_eq!(inv, SymMatrix::from_i64(2, 2, &[1, -1, -1, 2]));
    /// ```
    pub fn inverse(&self) -> Result<DynMatrix<T>, LinalgError> {
        let n = require_square(self)?;
        let augmented = DynMatrix::from_fn(n, 2 * n, |i, j| {
            if j < n {
                self[(i, j)].clone()
            } else if j - n == i {
                T::one()
            } else {
                T::zero()
            }
        });
        let (r, pivots) = augmented.rref();
        if n > 0 && (pivots.len() < n || pivots[n - 1] != n - 1) {
            return Err(LinalgError::Singular);
        }
        Ok(r.block(0, n, n, n))
    }

    /// Determinant by fraction-free (Bareiss) elimination.
    ///
    /// ```
    /// use symspectra::{Expr, SymMatrix};
    /// let a = SymMatrix::from_i64(3, 3, &[2, -1, 0, -1, 2, -1, 0, -1, 2]);
    /// assert_eq!(a.det().unwrap(), Expr::from(4));
    /// ```
    pub fn det(&self) -> Result<T, LinalgError> {
        let n = require_square(self)?;
        if n == 0 {
            return Ok(T::one());
        }
        let mut m = self.clone();
        let mut negate = false;
        let mut prev = T::one();
        for k in 0..n - 1 {
            if m[(k, k)].is_zero() {
                match (k + 1..n).find(|&i| !m[(i, k)].is_zero()) {
                    Some(p) => {
                        m.swap_rows(k, p);
                        negate = !negate;
                    }
                    None => return Ok(T::zero()),
                }
            }
            let pivot = m[(k, k)].clone();
            for i in k + 1..n {
                for j in k + 1..n {
                    let cross = pivot.clone() * m[(i, j)].clone() - m[(i, k)].clone() * m[(k, j)].clone();
                    // `prev` is the previous pivot, never zero.
                    m[(i, j)] = cross.checked_div(&prev).ok_or(LinalgError::Singular)?;
                }
            }
            trace!("det: eliminated column {}", k);
            prev = pivot;
        }
        let d = m[(n - 1, n - 1)].clone();
        Ok(if negate { -d } else { d })
    }
}
