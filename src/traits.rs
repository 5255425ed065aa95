use core::fmt::Debug;
use core::ops::{Add, Mul, Neg, Sub};
use num_traits::{One, Zero};

use crate::symbolic::{Expr, Number};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds. Symbolic
/// expressions are heap-allocated, so elements are `Clone` rather than
/// `Copy`. Machine integers (`i64`, ...) qualify as well.
pub trait Scalar:
    Clone
    + PartialEq
    + Debug
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
}

impl<T> Scalar for T where
    T: Clone
        + PartialEq
        + Debug
        + Zero
        + One
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Neg<Output = T>
{
}

/// Read-only access to a matrix-like type.
///
/// Shape predicates and other structural queries are written against this
/// trait so they apply to any two-dimensional container.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;

    /// `(rows, cols)`.
    #[inline]
    fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
}

/// Matrix elements with exact division, required by elimination.
///
/// Implemented for the exact scalars [`Number`] and [`Expr`], so every
/// pivot test is an exact zero test.
pub trait FieldScalar: Scalar {
    /// `self / rhs`, or `None` when `rhs` is zero.
    fn checked_div(&self, rhs: &Self) -> Option<Self>;

    /// Multiplicative inverse, or `None` for zero.
    fn inverse(&self) -> Option<Self> {
        Self::one().checked_div(self)
    }
}

impl FieldScalar for Expr {
    #[inline]
    fn checked_div(&self, rhs: &Self) -> Option<Self> {
        Expr::checked_div(self, rhs)
    }
}

impl FieldScalar for Number {
    #[inline]
    fn checked_div(&self, rhs: &Self) -> Option<Self> {
        Some(self * &rhs.recip()?)
    }

    #[inline]
    fn inverse(&self) -> Option<Self> {
        self.recip()
    }
}
