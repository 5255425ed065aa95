//! Exact symbolic scalars.
//!
//! The matrix layer stores [`Expr`] entries and relies on this module for
//! every arithmetic decision: exact zero tests, exact signs of constants,
//! square roots, inverse cosine and floating-point coercion.
//!
//! Layers, from the bottom up:
//!
//! - [`Number`]: exact reals `Σ qᵢ·√rᵢ` (rational `qᵢ`, squarefree `rᵢ`).
//! - [`RootOf`]: real roots of irreducible integer polynomials, kept exact
//!   by an isolating interval.
//! - [`Atom`] / [`Monomial`]: generators (symbols, π, unresolved square
//!   roots, algebraic roots and arc cosines) and their power products.
//! - [`Poly`]: polynomials in atoms with [`Number`] coefficients.
//! - [`Expr`]: normalized quotients of polynomials.

mod algebraic;
mod atom;
mod expr;
mod number;
mod poly;

pub use algebraic::RootOf;
pub use atom::{Atom, Monomial, Symbol};
pub use expr::Expr;
pub use number::Number;
pub use poly::Poly;

#[cfg(feature = "spectral")]
pub(crate) use algebraic::{
    derivative, isolate_real_roots, rational_gcd, refine, sign_variations, Interval,
};

#[cfg(test)]
use number::square_free_split;
