use log::debug;
use num_traits::Zero;

use crate::dynmatrix::SymMatrix;
use crate::linalg::charpoly::{exact_entries, faddeev_leverrier};
use crate::linalg::{require_square, LinalgError};
use crate::symbolic::{sign_variations, Expr, Number};

/// Eigenvalue sign counts of a real symmetric matrix.
///
/// A symmetric matrix has only real eigenvalues, so Descartes' rule of signs
/// applied to its characteristic polynomial is exact: no closed-form roots
/// are needed.
///
/// ```
/// use symspectra::SymMatrix;
/// use symspectra::linalg::Inertia;
///
/// let a = SymMatrix::from_i64(2, 2, &[1, 2, 2, 1]);
/// let i = a.inertia().unwrap();
/// assert_eq!(i, Inertia { positive: 1, negative: 1, zero: 0 });
/// assert!(i.is_indefinite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Inertia {
    pub positive: usize,
    pub negative: usize,
    pub zero: usize,
}

impl Inertia {
    /// Sign counts of the roots of a real-rooted polynomial (ascending
    /// coefficients).
    pub(crate) fn from_real_rooted(coeffs: &[Number]) -> Inertia {
        let zero = coeffs.iter().take_while(|c| c.is_zero()).count();
        let rest = &coeffs[zero..];
        let positive = sign_variations(rest.iter().map(Number::signum));
        let negative = sign_variations(rest.iter().enumerate().map(|(i, c)| {
            let s = c.signum();
            if (zero + i) % 2 == 1 {
                s.reverse()
            } else {
                s
            }
        }));
        Inertia {
            positive,
            negative,
            zero,
        }
    }

    /// Order of the matrix.
    pub fn order(&self) -> usize {
        self.positive + self.negative + self.zero
    }

    pub fn is_positive_definite(&self) -> bool {
        self.negative == 0 && self.zero == 0
    }

    pub fn is_positive_semidefinite(&self) -> bool {
        self.negative == 0
    }

    pub fn is_negative_definite(&self) -> bool {
        self.positive == 0 && self.zero == 0
    }

    /// Both signs occur.
    pub fn is_indefinite(&self) -> bool {
        self.positive > 0 && self.negative > 0
    }
}

impl SymMatrix {
    /// `(A + Aᵀ) / 2`.
    pub fn symmetric_part(&self) -> SymMatrix {
        (self + &self.transpose()).scale(&Expr::rational(1, 2))
    }

    /// Inertia of the symmetric part, which decides the sign of `xᵀAx`.
    pub fn inertia(&self) -> Result<Inertia, LinalgError> {
        require_square(self)?;
        let sym = exact_entries(&self.symmetric_part())?;
        let inertia = Inertia::from_real_rooted(&faddeev_leverrier(&sym));
        debug!("inertia {:?}", inertia);
        Ok(inertia)
    }

    /// `xᵀAx > 0` for every nonzero `x`. A non-square matrix is never
    /// positive definite.
    ///
    /// ```
    /// use symspectra::SymMatrix;
    /// let a = SymMatrix::from_i64(2, 2, &[2, -1, -1, 2]);
    /// assert!(a.is_positive_definite().unwrap());
    /// let semi = SymMatrix::from_i64(2, 2, &[1, 1, 1, 1]);
    /// assert!(!semi.is_positive_definite().unwrap());
    /// ```
    pub fn is_positive_definite(&self) -> Result<bool, LinalgError> {
        if !self.is_square() {
            return Ok(false);
        }
        Ok(self.inertia()?.is_positive_definite())
    }

    /// `xᵀAx` takes both signs. A non-square matrix is never indefinite.
    pub fn is_indefinite(&self) -> Result<bool, LinalgError> {
        if !self.is_square() {
            return Ok(false);
        }
        Ok(self.inertia()?.is_indefinite())
    }
}

#[cfg(test)]
mod tests {
    use crate::symbolic::Symbol;

    use super::*;

    fn inertia(p: usize, n: usize, z: usize) -> Inertia {
        Inertia {
            positive: p,
            negative: n,
            zero: z,
        }
    }

    #[test]
    fn positive_definite() {
        let a = SymMatrix::from_i64(3, 3, &[2, -1, 0, -1, 2, -1, 0, -1, 2]);
        assert_eq!(a.inertia().unwrap(), inertia(3, 0, 0));
        assert!(a.is_positive_definite().unwrap());
        assert!(!a.is_indefinite().unwrap());
    }

    #[test]
    fn semidefinite() {
        let a = SymMatrix::from_i64(2, 2, &[1, 1, 1, 1]);
        let i = a.inertia().unwrap();
        assert_eq!(i, inertia(1, 0, 1));
        assert!(i.is_positive_semidefinite());
        assert!(!i.is_positive_definite());
        assert!(!i.is_indefinite());
    }

    #[test]
    fn negative_definite() {
        let a = SymMatrix::from_i64(2, 2, &[-2, 1, 1, -2]);
        let i = a.inertia().unwrap();
        assert_eq!(i, inertia(0, 2, 0));
        assert!(i.is_negative_definite());
        assert!(!a.is_positive_definite().unwrap());
        assert!(!a.is_indefinite().unwrap());
    }

    #[test]
    fn indefinite_diagonal() {
        let a = SymMatrix::from_diag(&[Expr::from(3), Expr::from(-1), Expr::from(0)]);
        let i = a.inertia().unwrap();
        assert_eq!(i, inertia(1, 1, 1));
        assert_eq!(i.order(), 3);
        assert!(a.is_indefinite().unwrap());
    }

    #[test]
    fn uses_symmetric_part() {
        // xᵀAx = x² + y² for the skew-perturbed identity.
        let a = SymMatrix::from_i64(2, 2, &[1, 5, -5, 1]);
        assert!(a.is_positive_definite().unwrap());
        assert_eq!(a.symmetric_part(), SymMatrix::eye(2));
    }

    #[test]
    fn irrational_entries() {
        let r2 = Expr::number(Number::from(2).sqrt().unwrap());
        // eigenvalues 2 ± √2
        let a = SymMatrix::from_rows(2, 2, &[Expr::from(2), r2.clone(), r2, Expr::from(2)]);
        assert!(a.is_positive_definite().unwrap());
    }

    #[test]
    fn rectangular_is_never_definite() {
        let a = SymMatrix::from_i64(1, 2, &[1, 1]);
        assert!(!a.is_positive_definite().unwrap());
        assert!(!a.is_indefinite().unwrap());
        assert_eq!(
            a.inertia().unwrap_err(),
            LinalgError::NonSquare { nrows: 1, ncols: 2 }
        );
    }

    #[test]
    fn symbolic_is_undecidable() {
        let x = Expr::symbol(&Symbol::new("x"));
        let a = SymMatrix::from_rows(1, 1, &[x]);
        assert_eq!(a.is_positive_definite().unwrap_err(), LinalgError::Symbolic);
    }
}
