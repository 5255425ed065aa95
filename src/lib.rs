//! # symspectra
//!
//! Exact symbolic matrix analysis: vector shapes, basis changes, metric
//! quantities, Sturm sequences and spectral decomposition of symmetric
//! matrices. Arithmetic is exact throughout; floating point appears only
//! where a result is explicitly coerced.
//!
//! ## Quick start
//!
//! ```
//! use symspectra::{Expr, SymMatrix};
//! use symspectra::analysis::{calculate_vector_angle, spectral_decomposition, SpectralDecomposition};
//!
//! let u = SymMatrix::from_i64(2, 1, &[1, 0]);
//! let v = SymMatrix::from_i64(2, 1, &[0, 3]);
//! assert_eq!(calculate_vector_angle(&u, &v).unwrap(), Expr::pi() * Expr::rational(1, 2));
//!
//! // A² from the spectrum of a symmetric matrix
//! let a = SymMatrix::from_i64(2, 2, &[2, 1, 1, 2]);
//! let squared = spectral_decomposition(&a, Some(&Expr::from(2))).unwrap();
//! assert_eq!(squared, SpectralDecomposition::Power(&a * &a));
//! ```
//!
//! ## Modules
//!
//! - [`symbolic`]: The exact scalar engine. [`Number`] is an exact real
//!   `Σ qᵢ·√rᵢ`; [`Expr`] is a normalized rational function over symbols,
//!   π, square roots, arc cosines and real algebraic roots
//!   ([`symbolic::RootOf`]) with [`Number`] coefficients.
//!
//! - [`dynmatrix`]: Heap-allocated `DynMatrix<T>` with runtime dimensions,
//!   column-major `Vec<T>` storage. Arithmetic, blocks, stacking, rows and
//!   columns, norms and display. [`SymMatrix`] is `DynMatrix<Expr>`.
//!
//! - [`linalg`]: Exact elimination (`rref`, `nullspace`, `inverse`,
//!   `det`) for any [`FieldScalar`]. With the `spectral` feature:
//!   characteristic polynomial, exact eigenvalues, inertia and definiteness,
//!   and [`linalg::SymmetricEigen`] with an orthonormal eigenbasis.
//!
//! - [`analysis`]: The matrix analysis suite built on the layers above.
//!
//! - [`traits`]: Element traits:
//!   - [`Scalar`]: all matrix elements (`Clone + PartialEq + Debug + Zero + One` and ring ops)
//!   - [`FieldScalar`]: exact division, used by elimination
//!   - [`MatrixRef`]: read-only access for shape queries
//!
//! ## Logging
//!
//! Derivation milestones are reported through the [`log`] facade at
//! `debug` level, elimination steps at `trace`. No logger is installed.
//!
//! ## Cargo features
//!
//! | Feature    | Default | Description |
//! |------------|---------|-------------|
//! | `spectral` | yes     | Characteristic polynomial, eigenvalues, definiteness, Sturm sequences, spectral decomposition |
//! | `all`      | no      | All features |

pub mod analysis;
pub mod dynmatrix;
pub mod linalg;
pub mod symbolic;
pub mod traits;

pub use dynmatrix::{DimensionMismatch, DynMatrix, DynMatrixi64, SymMatrix};
pub use symbolic::{Expr, Number, Symbol};
pub use traits::{FieldScalar, MatrixRef, Scalar};
