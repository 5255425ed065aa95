use core::ops::{Add, Mul, Neg, Sub};

use crate::traits::Scalar;

use super::DynMatrix;

// ── Element-wise addition / subtraction ─────────────────────────────

impl<T: Scalar> DynMatrix<T> {
    fn zip_with(&self, rhs: &DynMatrix<T>, op: &str, f: impl Fn(T, T) -> T) -> DynMatrix<T> {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} {} {}x{}",
            self.nrows, self.ncols, op, rhs.nrows, rhs.ncols,
        );
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(a, b)| f(a.clone(), b.clone()))
            .collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Multiply every element by `k`.
    ///
    /// ```
    /// use symspectra::DynMatrix;
    /// let m = DynMatrix::from_rows(1, 2, &[1_i64, -2]);
    /// assert_eq!(m.scale(&3), DynMatrix::from_rows(1, 2, &[3, -6]));
    /// ```
    pub fn scale(&self, k: &T) -> DynMatrix<T> {
        self.map(|x| x.clone() * k.clone())
    }
}

macro_rules! impl_elementwise {
    ($trait:ident, $method:ident, $sym:literal) => {
        impl<T: Scalar> $trait<&DynMatrix<T>> for &DynMatrix<T> {
            type Output = DynMatrix<T>;
            fn $method(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
                self.zip_with(rhs, $sym, |a, b| a.$method(b))
            }
        }

        impl<T: Scalar> $trait for DynMatrix<T> {
            type Output = DynMatrix<T>;
            fn $method(self, rhs: DynMatrix<T>) -> DynMatrix<T> {
                (&self).$method(&rhs)
            }
        }

        impl<T: Scalar> $trait<&DynMatrix<T>> for DynMatrix<T> {
            type Output = DynMatrix<T>;
            fn $method(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
                (&self).$method(rhs)
            }
        }

        impl<T: Scalar> $trait<DynMatrix<T>> for &DynMatrix<T> {
            type Output = DynMatrix<T>;
            fn $method(self, rhs: DynMatrix<T>) -> DynMatrix<T> {
                self.$method(&rhs)
            }
        }
    };
}

impl_elementwise!(Add, add, "+");
impl_elementwise!(Sub, sub, "-");

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar> Neg for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn neg(self) -> DynMatrix<T> {
        self.map(|x| -x.clone())
    }
}

impl<T: Scalar> Neg for DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn neg(self) -> DynMatrix<T> {
        -&self
    }
}

// ── Matrix multiplication ───────────────────────────────────────────

impl<T: Scalar> Mul<&DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn mul(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        assert_eq!(
            self.ncols, rhs.nrows,
            "dimension mismatch: {}x{} * {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let m = self.nrows;
        let n = rhs.ncols;
        let p = self.ncols;
        // Column-major jki loop: accumulate a[:, k] * b[k, j] into c[:, j].
        let mut data = vec![T::zero(); m * n];
        for j in 0..n {
            for k in 0..p {
                let b_kj = &rhs.data[j * p + k];
                if b_kj.is_zero() {
                    continue;
                }
                for i in 0..m {
                    let a_ik = &self.data[k * m + i];
                    if a_ik.is_zero() {
                        continue;
                    }
                    let c = &mut data[j * m + i];
                    *c = c.clone() + a_ik.clone() * b_kj.clone();
                }
            }
        }
        DynMatrix {
            data,
            nrows: m,
            ncols: n,
        }
    }
}

impl<T: Scalar> Mul for DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn mul(self, rhs: DynMatrix<T>) -> DynMatrix<T> {
        &self * &rhs
    }
}

impl<T: Scalar> Mul<&DynMatrix<T>> for DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn mul(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        &self * rhs
    }
}

impl<T: Scalar> Mul<DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn mul(self, rhs: DynMatrix<T>) -> DynMatrix<T> {
        self * &rhs
    }
}
