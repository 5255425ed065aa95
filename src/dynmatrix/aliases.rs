//! Pre-defined type aliases and constructors for common element types.

use crate::symbolic::{Expr, Symbol};

use super::DynMatrix;

/// Matrix of exact symbolic expressions.
pub type SymMatrix = DynMatrix<Expr>;

/// Matrix of machine integers, convenient for building test fixtures.
pub type DynMatrixi64 = DynMatrix<i64>;

impl SymMatrix {
    /// Build a symbolic matrix from row-major integer entries.
    ///
    /// ```
    /// use symspectra::{Expr, SymMatrix};
    /// let m = SymMatrix::from_i64(2, 2, &[2, 0, 0, 3]);
    /// assert_eq!(m[(1, 1)], Expr::from(3));
    /// ```
    pub fn from_i64(nrows: usize, ncols: usize, row_major: &[i64]) -> Self {
        let entries: Vec<Expr> = row_major.iter().map(|&x| Expr::from(x)).collect();
        Self::from_rows(nrows, ncols, &entries)
    }

    /// Column vector of the given symbols.
    pub fn from_symbols(symbols: &[Symbol]) -> Self {
        let entries: Vec<Expr> = symbols.iter().map(Expr::symbol).collect();
        Self::from_vec(entries.len(), 1, entries)
    }
}

impl From<&DynMatrixi64> for SymMatrix {
    fn from(m: &DynMatrixi64) -> Self {
        m.map(|&x| Expr::from(x))
    }
}
