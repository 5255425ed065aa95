use crate::symbolic::Expr;
use crate::traits::Scalar;

use super::{DimensionMismatch, DynMatrix, SymMatrix};

// ── Inner products ──────────────────────────────────────────────────

impl<T: Scalar> DynMatrix<T> {
    /// Dot product of the flattened operands.
    ///
    /// Shapes may differ (a row against a column is fine) as long as both
    /// hold the same number of entries.
    ///
    /// ```
    /// use symspectra::DynMatrix;
    /// let u = DynMatrix::from_rows(1, 3, &[1_i64, 2, 3]);
    /// let v = DynMatrix::from_rows(3, 1, &[4_i64, 5, 6]);
    /// assert_eq!(u.dot(&v).unwrap(), 32);
    /// ```
    pub fn dot(&self, rhs: &DynMatrix<T>) -> Result<T, DimensionMismatch> {
        if self.len() != rhs.len() {
            return Err(DimensionMismatch {
                expected: self.shape(),
                got: rhs.shape(),
            });
        }
        Ok(self
            .iter()
            .zip(rhs.iter())
            .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone()))
    }

    /// Sum of squared entries.
    pub fn norm_squared(&self) -> T {
        self.data
            .iter()
            .fold(T::zero(), |acc, x| acc + x.clone() * x.clone())
    }
}

// ── Symbolic norms ──────────────────────────────────────────────────

impl SymMatrix {
    /// Euclidean 2-norm `sqrt(Σ xᵢ²)`; symbols are treated as real.
    ///
    /// ```
    /// use symspectra::{Expr, SymMatrix};
    /// let v = SymMatrix::from_i64(2, 1, &[3, 4]);
    /// assert_eq!(v.norm(), Expr::from(5));
    /// ```
    pub fn norm(&self) -> Expr {
        self.norm_squared().sqrt()
    }

    /// Whether any entry contains a free symbol.
    pub fn is_symbolic(&self) -> bool {
        self.data.iter().any(|e| !e.is_numeric())
    }

    /// Floating-point copy of a matrix without free symbols.
    pub fn to_f64(&self) -> Option<DynMatrix<f64>> {
        let data = self
            .data
            .iter()
            .map(Expr::to_f64)
            .collect::<Option<Vec<f64>>>()?;
        Some(DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::symbolic::{Number, Symbol};

    use super::*;

    #[test]
    fn dot_mismatch() {
        let u = DynMatrix::from_rows(1, 3, &[1_i64, 2, 3]);
        let v = DynMatrix::from_rows(1, 2, &[1_i64, 2]);
        let err = u.dot(&v).unwrap_err();
        assert_eq!(err.expected, (1, 3));
        assert_eq!(err.got, (1, 2));
    }

    #[test]
    fn dot_matrix_flattened() {
        let a = DynMatrix::from_rows(2, 2, &[1_i64, 2, 3, 4]);
        let b = DynMatrix::from_rows(1, 4, &[1_i64, 1, 1, 1]);
        assert_eq!(a.dot(&b).unwrap(), 10);
    }

    #[test]
    fn norm_squared() {
        let v = DynMatrix::from_rows(1, 3, &[1_i64, -2, 2]);
        assert_eq!(v.norm_squared(), 9);
    }

    #[test]
    fn norm_irrational() {
        let v = SymMatrix::from_i64(1, 2, &[1, 1]);
        let expected = Number::from(2).sqrt().unwrap();
        assert_eq!(v.norm(), Expr::number(expected));
    }

    #[test]
    fn norm_symbolic() {
        let x = Expr::symbol(&Symbol::new("x"));
        let v = SymMatrix::from_rows(2, 1, &[x.clone(), Expr::from(0)]);
        let n = v.norm();
        assert!(v.is_symbolic());
        assert_eq!(&n * &n, &x * &x);
    }

    #[test]
    fn to_f64() {
        let v = SymMatrix::from_rows(1, 2, &[Expr::rational(1, 2), Expr::pi()]);
        let f = v.to_f64().unwrap();
        assert_eq!(f[(0, 0)], 0.5);
        assert!((f[(0, 1)] - core::f64::consts::PI).abs() < 1e-15);

        let x = SymMatrix::from_symbols(&[Symbol::new("x")]);
        assert!(x.to_f64().is_none());
    }
}
