use log::debug;
use num_traits::{One, Zero};

use crate::dynmatrix::{DynMatrix, SymMatrix};
use crate::linalg::{require_square, LinalgError};
use crate::symbolic::{Expr, Number};
use crate::traits::FieldScalar;

/// Entries as exact [`Number`]s, or [`LinalgError::Symbolic`].
pub(crate) fn exact_entries(a: &SymMatrix) -> Result<DynMatrix<Number>, LinalgError> {
    let data = a
        .as_slice()
        .iter()
        .map(Expr::as_number)
        .collect::<Option<Vec<Number>>>()
        .ok_or(LinalgError::Symbolic)?;
    Ok(DynMatrix::from_vec(a.nrows(), a.ncols(), data))
}

/// Faddeev-LeVerrier: coefficients of `det(λI - A)`, ascending, monic.
///
/// `M₀ = 0`, `Mₖ = A·Mₖ₋₁ + cₙ₋ₖ₊₁·I`, `cₙ₋ₖ = -tr(A·Mₖ)/k`.
pub(crate) fn faddeev_leverrier<T: FieldScalar + From<Number>>(a: &DynMatrix<T>) -> Vec<T> {
    let n = a.nrows();
    let mut coeffs = vec![T::zero(); n + 1];
    coeffs[n] = T::one();
    let identity = DynMatrix::<T>::eye(n);
    let mut m = DynMatrix::<T>::zeros(n, n);
    for k in 1..=n {
        m = &(a * &m) + &identity.scale(&coeffs[n - k + 1]);
        let am = a * &m;
        coeffs[n - k] = -(am.trace() * T::from(Number::new(1, k as i64)));
    }
    coeffs
}

impl SymMatrix {
    /// Coefficients of the characteristic polynomial `det(λI - A)`, in
    /// ascending powers of `λ`. Symbolic entries give symbolic coefficients.
    ///
    /// ```
    /// use symspectra::{Expr, SymMatrix};
    /// let a = SymMatrix::from_i64(2, 2, &[2, 1, 1, 2]);
    /// // λ² - 4λ + 3
    /// let p = a.characteristic_polynomial().unwrap();
    /// assert_eq!(p, vec![Expr::from(3), Expr::from(-4), Expr::from(1)]);
    /// ```
    pub fn characteristic_polynomial(&self) -> Result<Vec<Expr>, LinalgError> {
        require_square(self)?;
        let coeffs: Vec<Expr> = match exact_entries(self) {
            Ok(exact) => faddeev_leverrier(&exact).into_iter().map(Expr::number).collect(),
            Err(LinalgError::Symbolic) => faddeev_leverrier(self),
            Err(e) => return Err(e),
        };
        debug!("characteristic polynomial of order {}", coeffs.len() - 1);
        Ok(coeffs)
    }
}
