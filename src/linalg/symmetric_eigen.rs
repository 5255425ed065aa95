use core::fmt;
use std::iter;

use log::debug;
use num_traits::Zero;

use crate::dynmatrix::{DynMatrix, SymMatrix};
use crate::linalg::charpoly::{exact_entries, faddeev_leverrier};
use crate::linalg::roots::{real_roots, symbolic_roots, RealRoot};
use crate::linalg::{require_square, LinalgError};
use crate::symbolic::{Expr, Number, RootOf};
use crate::traits::FieldScalar;

/// Real eigenvalues with multiplicity, ascending.
fn sorted_eigenvalues(a: &DynMatrix<Number>) -> Result<Vec<RealRoot>, LinalgError> {
    let mut values = real_roots(&faddeev_leverrier(a))?;
    values.sort_by(RealRoot::cmp_value);
    Ok(values)
}

fn push_unique(out: &mut Vec<Expr>, e: Expr) {
    if !out.contains(&e) {
        out.push(e);
    }
}

/// Likely linear factors of a symbolic characteristic polynomial: the
/// diagonal entries, `aᵢᵢ ∓ aᵢⱼ` and the row sums.
fn candidate_eigenvalues(a: &SymMatrix) -> Vec<Expr> {
    let n = a.nrows();
    let mut out = Vec::new();
    for i in 0..n {
        push_unique(&mut out, a[(i, i)].clone());
    }
    for i in 0..n {
        for j in (0..n).filter(|&j| j != i) {
            push_unique(&mut out, &a[(i, i)] - &a[(i, j)]);
            push_unique(&mut out, &a[(i, i)] + &a[(i, j)]);
        }
    }
    for i in 0..n {
        push_unique(&mut out, (0..n).fold(Expr::zero(), |acc, j| acc + &a[(i, j)]));
    }
    out
}

/// Distinct values with their multiplicities, in order of first occurrence.
fn group_equal<T: PartialEq>(values: Vec<T>) -> Vec<(T, usize)> {
    let mut groups: Vec<(T, usize)> = Vec::new();
    for v in values {
        match groups.iter_mut().find(|(g, _)| *g == v) {
            Some((_, m)) => *m += 1,
            None => groups.push((v, 1)),
        }
    }
    groups
}

/// Eigenvalues of a matrix with symbolic entries, grouped, in the order
/// their factors are found.
fn symbolic_eigenvalues(a: &SymMatrix) -> Result<Vec<(Expr, usize)>, LinalgError> {
    let roots = symbolic_roots(&faddeev_leverrier(a), &candidate_eigenvalues(a))?;
    Ok(group_equal(roots))
}

fn inner<T: FieldScalar>(a: &DynMatrix<T>, b: &DynMatrix<T>) -> T {
    a.as_slice()
        .iter()
        .zip(b.as_slice())
        .fold(T::zero(), |acc, (x, y)| acc + x.clone() * y.clone())
}

/// Orthogonalize a basis in place, without normalizing.
fn gram_schmidt<T: FieldScalar>(basis: &mut [DynMatrix<T>]) -> Result<(), LinalgError> {
    for k in 0..basis.len() {
        let (done, rest) = basis.split_at_mut(k);
        let v = &mut rest[0];
        for u in done.iter() {
            let c = inner(v, u)
                .checked_div(&inner(u, u))
                .ok_or(LinalgError::Singular)?;
            *v = &*v - &u.scale(&c);
        }
    }
    Ok(())
}

/// Orthogonal basis of the eigenspace of `lambda`.
fn eigenspace<T: FieldScalar + fmt::Display>(
    a: &DynMatrix<T>,
    lambda: &T,
    multiplicity: usize,
) -> Result<Vec<DynMatrix<T>>, LinalgError> {
    let shifted = a - &DynMatrix::<T>::eye(a.nrows()).scale(lambda);
    let mut basis = shifted.nullspace();
    if basis.len() != multiplicity {
        return Err(LinalgError::IncompleteEigenspace {
            eigenvalue: lambda.to_string(),
            found: basis.len(),
            expected: multiplicity,
        });
    }
    gram_schmidt(&mut basis)?;
    Ok(basis)
}

/// `Σ u·uᵀ / (uᵀ·u)` over an orthogonal basis.
fn projector<T: FieldScalar>(basis: &[DynMatrix<T>]) -> Result<DynMatrix<T>, LinalgError> {
    let n = basis.first().map_or(0, |u| u.nrows());
    let mut p = DynMatrix::<T>::zeros(n, n);
    for u in basis {
        let w = inner(u, u).inverse().ok_or(LinalgError::Singular)?;
        p = &p + &(u * &u.transpose()).scale(&w);
    }
    Ok(p)
}

/// Unit vector along `v`. The norm stays a [`Number`] when its square root
/// denests, and becomes a symbolic `sqrt` otherwise.
fn normalize(v: &DynMatrix<Number>) -> Result<SymMatrix, LinalgError> {
    let norm_squared = inner(v, v);
    if let Some(inv) = norm_squared.sqrt().and_then(|n| n.recip()) {
        return Ok(v.map(|x| Expr::number(x * &inv)));
    }
    normalize_expr(&v.map(|x| Expr::number(x.clone())))
}

fn normalize_expr(v: &SymMatrix) -> Result<SymMatrix, LinalgError> {
    let norm_squared = inner(v, v);
    let inv = match norm_squared.as_number().and_then(|n| n.sqrt()) {
        Some(norm) => norm.recip().map(Expr::number),
        None => norm_squared.sqrt().recip(),
    }
    .ok_or(LinalgError::Singular)?;
    Ok(v.scale(&inv))
}

/// Entrywise sum over the conjugates of `root`.
fn field_trace(root: &RootOf, m: &SymMatrix) -> Result<SymMatrix, LinalgError> {
    let data = m
        .as_slice()
        .iter()
        .map(|e| root.trace(e).map(Expr::number))
        .collect::<Option<Vec<_>>>()
        .ok_or(LinalgError::UnsolvableCharacteristic {
            degree: root.degree(),
        })?;
    Ok(DynMatrix::from_vec(m.nrows(), m.ncols(), data))
}

/// One eigenvalue with its unit eigenvectors and orthogonal projector.
#[derive(Debug, Clone, PartialEq)]
struct Eigenspace {
    value: Expr,
    vectors: Vec<SymMatrix>,
    projector: SymMatrix,
}

impl Eigenspace {
    fn exact(a: &DynMatrix<Number>, lambda: &Number, multiplicity: usize) -> Result<Self, LinalgError> {
        let basis = eigenspace(a, lambda, multiplicity)?;
        Ok(Self {
            value: Expr::number(lambda.clone()),
            vectors: basis.iter().map(normalize).collect::<Result<_, _>>()?,
            projector: projector(&basis)?.map(|x| Expr::number(x.clone())),
        })
    }

    fn symbolic(a: &SymMatrix, lambda: Expr, multiplicity: usize) -> Result<Self, LinalgError> {
        let basis = eigenspace(a, &lambda, multiplicity)?;
        Ok(Self {
            vectors: basis.iter().map(normalize_expr).collect::<Result<_, _>>()?,
            projector: projector(&basis)?,
            value: lambda,
        })
    }
}

/// Exact orthonormal eigendecomposition of a real symmetric matrix.
///
/// Column `i` of the eigenvector matrix is a unit eigenvector for
/// eigenvalue `i`, repeated by multiplicity. Vectors sharing an eigenvalue
/// are made orthogonal by Gram-Schmidt.
///
/// Numeric matrices have their eigenvalues sorted ascending. An eigenvalue
/// from an irreducible factor of degree three or more is a
/// [`RootOf`]; its eigenvectors have entries in `ℚ(λ)` (and the square
/// root of a norm), so `A·v = λ·v` and `vᵀv = 1` hold exactly, but the
/// cross products of vectors for conjugate roots only vanish numerically.
/// [`power`](Self::power) and [`reconstruct`](Self::reconstruct) sum over
/// conjugates with the field trace and stay exact.
///
/// Symbolic matrices are solved when the characteristic polynomial splits
/// into linear and quadratic factors; the eigenvalues keep the order in
/// which their factors are found.
///
/// # Example
///
/// ```
/// use symspectra::{Expr, SymMatrix};
/// use symspectra::linalg::SymmetricEigen;
///
/// let a = SymMatrix::from_i64(2, 2, &[2, 1, 1, 2]);
/// let eig = SymmetricEigen::new(&a).unwrap();
/// assert_eq!(eig.eigenvalues(), &[Expr::from(1), Expr::from(3)]);
///
/// let p = eig.eigenvectors();
/// assert_eq!(&p.transpose() * p, SymMatrix::eye(2));
/// assert_eq!(eig.reconstruct(), a);
/// assert_eq!(eig.power(3).unwrap(), a.pow(3));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricEigen {
    eigenvalues: Vec<Expr>,
    eigenvectors: SymMatrix,
    spaces: Vec<Eigenspace>,
}

impl SymmetricEigen {
    /// Decompose a symmetric matrix.
    ///
    /// Fails with `NonSquare` or `NotSymmetric` before any work is done,
    /// with `Symbolic` when a symbolic characteristic polynomial keeps a
    /// factor of degree three or more, and with a root-finding error when
    /// the eigenvalues are not real.
    pub fn new(a: &SymMatrix) -> Result<Self, LinalgError> {
        let n = require_square(a)?;
        if !a.is_symmetric() {
            return Err(LinalgError::NotSymmetric);
        }
        let mut spaces = Vec::new();
        match exact_entries(a) {
            Ok(exact) => {
                for (root, multiplicity) in group_equal(sorted_eigenvalues(&exact)?) {
                    spaces.push(match &root {
                        RealRoot::Exact(lambda) => Eigenspace::exact(&exact, lambda, multiplicity)?,
                        RealRoot::Algebraic(_) => Eigenspace::symbolic(a, root.to_expr(), multiplicity)?,
                    });
                }
            }
            Err(LinalgError::Symbolic) => {
                for (lambda, multiplicity) in symbolic_eigenvalues(a)? {
                    spaces.push(Eigenspace::symbolic(a, lambda, multiplicity)?);
                }
            }
            Err(e) => return Err(e),
        }

        let mut eigenvalues = Vec::with_capacity(n);
        let mut columns: Vec<&SymMatrix> = Vec::with_capacity(n);
        for space in &spaces {
            debug!(
                "eigenvalue {} with multiplicity {}",
                space.value,
                space.vectors.len()
            );
            eigenvalues.extend(iter::repeat(space.value.clone()).take(space.vectors.len()));
            columns.extend(&space.vectors);
        }
        let eigenvectors = DynMatrix::from_fn(n, n, |i, j| columns[j][(i, 0)].clone());
        Ok(Self {
            eigenvalues,
            eigenvectors,
            spaces,
        })
    }

    /// The eigenvalues, repeated by multiplicity.
    #[inline]
    pub fn eigenvalues(&self) -> &[Expr] {
        &self.eigenvalues
    }

    /// The orthogonal matrix `P` whose columns are unit eigenvectors.
    #[inline]
    pub fn eigenvectors(&self) -> &SymMatrix {
        &self.eigenvectors
    }

    /// Unit eigenvector `i` as a column vector.
    pub fn eigenvector(&self, i: usize) -> SymMatrix {
        self.eigenvectors.col(i)
    }

    /// Diagonal matrix `D` of eigenvalues.
    pub fn diagonal(&self) -> SymMatrix {
        SymMatrix::from_diag(&self.eigenvalues)
    }

    /// `Aⁿ = Σ λⁿ·Pλ` over the eigenspace projectors `Pλ`.
    ///
    /// The conjugate roots of an irreducible factor contribute the field
    /// trace of a single term, so the result has rational entries whenever
    /// `A` does. `n = 0` gives the identity; a negative `n` fails with
    /// `Singular` when zero is an eigenvalue.
    ///
    /// ```
    /// use symspectra::SymMatrix;
    /// use symspectra::linalg::SymmetricEigen;
    ///
    /// // characteristic polynomial λ³ - 10λ² + 29λ - 23 is irreducible
    /// let a = SymMatrix::from_i64(3, 3, &[2, 1, 0, 1, 3, 1, 0, 1, 5]);
    /// let eig = SymmetricEigen::new(&a).unwrap();
    /// assert_eq!(eig.power(2).unwrap(), &a * &a);
    /// ```
    pub fn power(&self, n: i64) -> Result<SymMatrix, LinalgError> {
        let size = self.eigenvectors.nrows();
        let mut acc = SymMatrix::zeros(size, size);
        for space in &self.spaces {
            let conjugates = space.value.as_algebraic();
            if conjugates.is_some_and(|root| root.index() > 0) {
                continue;
            }
            let weight = space.value.pow(n).ok_or(LinalgError::Singular)?;
            let term = space.projector.scale(&weight);
            let term = match conjugates {
                Some(root) => field_trace(root, &term)?,
                None => term,
            };
            acc = &acc + &term;
        }
        debug!("spectral power {} of order {}", n, size);
        Ok(acc)
    }

    /// `P·D·Pᵀ`, summed per eigenspace.
    pub fn reconstruct(&self) -> SymMatrix {
        self.power(1).unwrap_or_else(|_| {
            &(&self.eigenvectors * &self.diagonal()) * &self.eigenvectors.transpose()
        })
    }
}

impl SymMatrix {
    /// Eigenvalues of a square matrix, repeated by multiplicity.
    ///
    /// The matrix need not be symmetric, but every eigenvalue must be real.
    /// Numeric eigenvalues are sorted ascending; symbolic ones follow
    /// [`SymmetricEigen`].
    ///
    /// ```
    /// use symspectra::{Expr, Number, SymMatrix};
    /// let a = SymMatrix::from_i64(3, 3, &[2, -1, 0, -1, 2, -1, 0, -1, 2]);
    /// let r2 = Number::from(2).sqrt().unwrap();
    /// let two = Number::from(2);
    /// assert_eq!(
    ///     a.eigenvals().unwrap(),
    ///     vec![Expr::number(&two - &r2), Expr::from(2), Expr::number(&two + &r2)],
    /// );
    /// ```
    pub fn eigenvals(&self) -> Result<Vec<Expr>, LinalgError> {
        require_square(self)?;
        let values: Vec<Expr> = match exact_entries(self) {
            Ok(exact) => sorted_eigenvalues(&exact)?
                .iter()
                .map(RealRoot::to_expr)
                .collect(),
            Err(LinalgError::Symbolic) => symbolic_eigenvalues(self)?
                .into_iter()
                .flat_map(|(v, m)| iter::repeat(v).take(m))
                .collect(),
            Err(e) => return Err(e),
        };
        debug!("{} eigenvalues", values.len());
        Ok(values)
    }

    /// Orthonormal eigendecomposition, see [`SymmetricEigen`].
    pub fn eig_symmetric(&self) -> Result<SymmetricEigen, LinalgError> {
        SymmetricEigen::new(self)
    }

    /// `(P, D)` with `P` orthogonal, `D` diagonal and `A = P·D·Pᵀ`.
    pub fn diagonalize_orthonormal(&self) -> Result<(SymMatrix, SymMatrix), LinalgError> {
        let eig = SymmetricEigen::new(self)?;
        let d = eig.diagonal();
        Ok((eig.eigenvectors, d))
    }
}

#[cfg(test)]
mod tests {
    use num_traits::One;

    use crate::symbolic::Symbol;

    use super::*;

    fn check_orthonormal(a: &SymMatrix) -> SymmetricEigen {
        let eig = a.eig_symmetric().unwrap();
        let p = eig.eigenvectors();
        assert_eq!(&p.transpose() * p, SymMatrix::eye(a.nrows()));
        assert_eq!(eig.reconstruct(), *a);
        for (i, lambda) in eig.eigenvalues().iter().enumerate() {
            let v = eig.eigenvector(i);
            assert_eq!(a * &v, v.scale(lambda));
        }
        eig
    }

    fn sym(name: &str) -> Expr {
        Expr::symbol(&Symbol::new(name))
    }

    #[test]
    fn identity() {
        let eig = check_orthonormal(&SymMatrix::eye(3));
        assert_eq!(eig.eigenvalues(), &[Expr::one(), Expr::one(), Expr::one()]);
        assert_eq!(*eig.eigenvectors(), SymMatrix::eye(3));
    }

    #[test]
    fn diagonal_is_sorted() {
        let a = SymMatrix::from_diag(&[Expr::from(5), Expr::from(-1), Expr::from(2)]);
        let eig = check_orthonormal(&a);
        assert_eq!(
            eig.eigenvalues(),
            &[Expr::from(-1), Expr::from(2), Expr::from(5)]
        );
    }

    #[test]
    fn known_2x2() {
        let a = SymMatrix::from_i64(2, 2, &[5, 2, 2, 2]);
        let eig = check_orthonormal(&a);
        assert_eq!(eig.eigenvalues(), &[Expr::from(1), Expr::from(6)]);
    }

    #[test]
    fn irrational_eigenvalues() {
        let a = SymMatrix::from_i64(3, 3, &[2, -1, 0, -1, 2, -1, 0, -1, 2]);
        let eig = check_orthonormal(&a);
        assert_eq!(eig.eigenvalues()[1], Expr::from(2));
    }

    #[test]
    fn repeated_eigenvalue() {
        let a = SymMatrix::from_i64(3, 3, &[1, 1, 1, 1, 1, 1, 1, 1, 1]);
        let eig = check_orthonormal(&a);
        assert_eq!(
            eig.eigenvalues(),
            &[Expr::zero(), Expr::zero(), Expr::from(3)]
        );
    }

    #[test]
    fn negative_eigenvalues() {
        let a = SymMatrix::from_i64(2, 2, &[0, 2, 2, 0]);
        let eig = check_orthonormal(&a);
        assert_eq!(eig.eigenvalues(), &[Expr::from(-2), Expr::from(2)]);
    }

    #[test]
    fn size_1x1() {
        let a = SymMatrix::from_i64(1, 1, &[7]);
        let eig = check_orthonormal(&a);
        assert_eq!(eig.eigenvalues(), &[Expr::from(7)]);
        assert_eq!(*eig.eigenvectors(), SymMatrix::eye(1));
    }

    #[test]
    fn empty() {
        let eig = SymMatrix::zeros(0, 0).eig_symmetric().unwrap();
        assert!(eig.eigenvalues().is_empty());
        assert_eq!(eig.eigenvectors().shape(), (0, 0));
        assert_eq!(eig.power(2).unwrap().shape(), (0, 0));
    }

    #[test]
    fn diagonalize() {
        let a = SymMatrix::from_i64(2, 2, &[2, 1, 1, 2]);
        let (p, d) = a.diagonalize_orthonormal().unwrap();
        assert_eq!(d, SymMatrix::from_i64(2, 2, &[1, 0, 0, 3]));
        assert_eq!(&(&p * &d) * &p.transpose(), a);
    }

    #[test]
    fn irreducible_cubic() {
        // λ³ - 10λ² + 29λ - 23
        let a = SymMatrix::from_i64(3, 3, &[2, 1, 0, 1, 3, 1, 0, 1, 5]);
        let eig = a.eig_symmetric().unwrap();
        let expected = [1.300372, 3.239123, 5.460505];
        for (i, lambda) in eig.eigenvalues().iter().enumerate() {
            let root = lambda.as_algebraic().unwrap();
            assert_eq!(root.index(), i);
            assert!((root.to_f64() - expected[i]).abs() < 1e-5);

            let v = eig.eigenvector(i);
            assert_eq!(&a * &v, v.scale(lambda));
            assert_eq!(v.norm_squared(), Expr::one());
        }
        assert_eq!(eig.reconstruct(), a);
        assert_eq!(eig.power(0).unwrap(), SymMatrix::eye(3));
        assert_eq!(eig.power(2).unwrap(), &a * &a);
        assert_eq!(eig.power(-1).unwrap(), a.inverse().unwrap());

        // conjugate eigenvectors are orthogonal in value
        let p = eig.eigenvectors();
        let gram = &p.transpose() * p;
        for i in 0..3 {
            for j in 0..3 {
                let want = if i == j { 1.0 } else { 0.0 };
                assert!((gram[(i, j)].to_f64().unwrap() - want).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn cubic_block_with_rational_eigenvalue() {
        let a = SymMatrix::from_i64(
            4,
            4,
            &[6, 2, 1, 0, 2, 3, 1, 0, 1, 1, 1, 0, 0, 0, 0, 4],
        );
        let eig = a.eig_symmetric().unwrap();
        // λ³ - 10λ² + 21λ - 9 has roots 0.578933, 2.133074, 7.287992
        assert_eq!(eig.eigenvalues()[2], Expr::from(4));
        assert!(eig.eigenvalues()[1].as_algebraic().is_some());
        assert_eq!(eig.eigenvector(2), SymMatrix::from_i64(4, 1, &[0, 0, 0, 1]));
        assert_eq!(eig.power(3).unwrap(), a.pow(3));
    }

    #[test]
    fn symbolic_2x2() {
        let (a, b) = (sym("a"), sym("b"));
        let m = SymMatrix::from_rows(2, 2, &[a.clone(), b.clone(), b.clone(), a.clone()]);
        let eig = check_orthonormal(&m);
        assert_eq!(eig.eigenvalues(), &[&a - &b, &a + &b]);
        assert_eq!(eig.power(2).unwrap(), &m * &m);
    }

    #[test]
    fn symbolic_with_numeric_block() {
        let x = sym("x");
        let m = SymMatrix::from_rows(
            3,
            3,
            &[
                x.clone(),
                Expr::zero(),
                Expr::zero(),
                Expr::zero(),
                Expr::from(2),
                Expr::one(),
                Expr::zero(),
                Expr::one(),
                Expr::from(2),
            ],
        );
        let eig = check_orthonormal(&m);
        assert_eq!(eig.eigenvalues(), &[x, Expr::from(1), Expr::from(3)]);
    }

    #[test]
    fn symbolic_cubic_is_unsolvable() {
        // λ³ - aλ² - 2λ + a has no linear factor among the candidates
        let a = sym("a");
        let m = SymMatrix::from_rows(
            3,
            3,
            &[
                a,
                Expr::one(),
                Expr::zero(),
                Expr::one(),
                Expr::zero(),
                Expr::one(),
                Expr::zero(),
                Expr::one(),
                Expr::zero(),
            ],
        );
        assert_eq!(m.eig_symmetric().unwrap_err(), LinalgError::Symbolic);
        assert_eq!(m.eigenvals().unwrap_err(), LinalgError::Symbolic);
    }

    #[test]
    fn eigenvals_non_symmetric() {
        // triangular, eigenvalues on the diagonal
        let a = SymMatrix::from_i64(2, 2, &[3, 1, 0, -1]);
        assert_eq!(a.eigenvals().unwrap(), vec![Expr::from(-1), Expr::from(3)]);
    }

    #[test]
    fn eigenvals_symbolic() {
        let x = sym("x");
        let m = SymMatrix::from_rows(2, 2, &[x.clone(), Expr::one(), Expr::one(), x.clone()]);
        assert_eq!(
            m.eigenvals().unwrap(),
            vec![&x - &Expr::one(), &x + &Expr::one()]
        );
    }

    #[test]
    fn eigenvals_complex() {
        let rot = SymMatrix::from_i64(2, 2, &[0, -1, 1, 0]);
        assert_eq!(rot.eigenvals().unwrap_err(), LinalgError::ComplexEigenvalues);
    }

    #[test]
    fn rejects_bad_input() {
        let rect = SymMatrix::zeros(2, 3);
        assert_eq!(
            SymmetricEigen::new(&rect).unwrap_err(),
            LinalgError::NonSquare { nrows: 2, ncols: 3 }
        );
        let skew = SymMatrix::from_i64(2, 2, &[1, 2, 3, 4]);
        assert_eq!(SymmetricEigen::new(&skew).unwrap_err(), LinalgError::NotSymmetric);
    }

    #[test]
    fn candidates_are_unique() {
        let m = SymMatrix::from_i64(2, 2, &[1, 0, 0, 1]);
        assert_eq!(candidate_eigenvalues(&m), vec![Expr::one()]);
    }

    #[test]
    fn grouping_keeps_first_occurrence() {
        assert_eq!(group_equal(vec![2, 1, 2, 3, 1]), vec![(2, 2), (1, 2), (3, 1)]);
    }

    #[test]
    fn gram_schmidt_orthogonalizes() {
        let mut basis = vec![
            DynMatrix::from_rows(3, 1, &[Number::from(-1), Number::from(1), Number::zero()]),
            DynMatrix::from_rows(3, 1, &[Number::from(-1), Number::zero(), Number::from(1)]),
        ];
        gram_schmidt(&mut basis).unwrap();
        assert!(inner(&basis[0], &basis[1]).is_zero());
        assert_eq!(basis[1][(2, 0)], Number::one());
    }

    #[test]
    fn projector_of_a_line() {
        let u = DynMatrix::from_rows(2, 1, &[Number::one(), Number::one()]);
        let p = projector(&[u]).unwrap();
        let half = Number::new(1, 2);
        assert_eq!(p, DynMatrix::from_rows(2, 2, &[half.clone(), half.clone(), half.clone(), half]));
    }
}
