//! Exact roots of characteristic polynomials.
//!
//! A rational polynomial is rescaled to a monic integer polynomial in
//! `y = d·x`. The real roots of its squarefree part are isolated into
//! disjoint intervals, and grouped into irreducible factors by finding the
//! subsets of roots whose elementary symmetric functions are integers.
//! Linear factors give rationals, quadratic factors the quadratic formula
//! and every higher factor one [`RootOf`] per root.
//!
//! Polynomials with symbolic coefficients go through [`symbolic_roots`].

use core::cmp::Ordering;
use std::iter;

use log::trace;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::linalg::LinalgError;
use crate::symbolic::{
    derivative, isolate_real_roots, rational_gcd, refine, Expr, Interval, Number, RootOf,
};

/// A real root in closed form.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RealRoot {
    Exact(Number),
    Algebraic(RootOf),
}

impl RealRoot {
    /// Exact comparison of values.
    pub(crate) fn cmp_value(&self, other: &RealRoot) -> Ordering {
        match (self, other) {
            (RealRoot::Exact(a), RealRoot::Exact(b)) => a.cmp_value(b),
            (RealRoot::Algebraic(a), RealRoot::Algebraic(b)) => a.cmp_value(b),
            (RealRoot::Algebraic(a), RealRoot::Exact(b)) => a.cmp_number(b),
            (RealRoot::Exact(a), RealRoot::Algebraic(b)) => b.cmp_number(a).reverse(),
        }
    }

    pub(crate) fn to_expr(&self) -> Expr {
        match self {
            RealRoot::Exact(n) => Expr::number(n.clone()),
            RealRoot::Algebraic(r) => Expr::algebraic(r.clone()),
        }
    }
}

/// Real roots with multiplicity of `Σ coeffs[i]·xⁱ`, unordered.
pub(crate) fn real_roots(coeffs: &[Number]) -> Result<Vec<RealRoot>, LinalgError> {
    let Some(degree) = coeffs.iter().rposition(|c| !c.is_zero()) else {
        return Ok(Vec::new());
    };
    let coeffs = &coeffs[..=degree];

    let zeros = coeffs.iter().take_while(|c| c.is_zero()).count();
    let mut roots: Vec<RealRoot> = iter::repeat(RealRoot::Exact(Number::zero()))
        .take(zeros)
        .collect();
    let rest = &coeffs[zeros..];

    match rest.iter().map(Number::as_rational).collect::<Option<Vec<_>>>() {
        Some(q) => rational_roots(&q, &mut roots)?,
        None => algebraic_roots(rest, &mut roots)?,
    }
    Ok(roots)
}

fn rational_roots(q: &[BigRational], roots: &mut Vec<RealRoot>) -> Result<(), LinalgError> {
    let m = q.len() - 1;
    if m == 0 {
        return Ok(());
    }
    // y = d·x turns the monic rational polynomial into a monic integer one.
    let lead = &q[m];
    let monic: Vec<BigRational> = q.iter().map(|c| c / lead).collect();
    let d = monic
        .iter()
        .fold(BigInt::one(), |acc, c| acc.lcm(c.denom()));
    let poly: Vec<BigInt> = monic
        .iter()
        .enumerate()
        .map(|(i, c)| (c * BigRational::from_integer(num_traits::pow(d.clone(), m - i))).to_integer())
        .collect();

    let square_free = square_free_part(&poly);
    let isolated = isolate_real_roots(&square_free);
    if isolated.len() + 1 < square_free.len() {
        return Err(LinalgError::ComplexEigenvalues);
    }
    for factor in split_factors(&square_free, isolated) {
        let multiplicity = multiplicity(&poly, &factor);
        trace!(
            "irreducible factor of degree {} with multiplicity {}",
            factor.len() - 1,
            multiplicity
        );
        let values = factor_roots(&factor, &d)?;
        for _ in 0..multiplicity {
            roots.extend(values.iter().cloned());
        }
    }
    Ok(())
}

/// `p / gcd(p, p')` for a monic integer `p`.
fn square_free_part(poly: &[BigInt]) -> Vec<BigInt> {
    let p: Vec<BigRational> = poly
        .iter()
        .map(|c| BigRational::from_integer(c.clone()))
        .collect();
    let g = rational_gcd(&p, &derivative(poly));
    if g.len() <= 1 || !g.iter().all(BigRational::is_integer) {
        return poly.to_vec();
    }
    let g: Vec<BigInt> = g.iter().map(BigRational::to_integer).collect();
    divide_monic(poly, &g).unwrap_or_else(|| poly.to_vec())
}

/// Irreducible monic factors of a squarefree monic polynomial whose roots
/// are all real, from isolating intervals of those roots.
///
/// Factors are searched by increasing degree, so each one found has no
/// smaller factor left; what remains once no factor of at most half its
/// degree exists is irreducible.
fn split_factors(poly: &[BigInt], mut roots: Vec<Interval>) -> Vec<Vec<BigInt>> {
    let mut rest = poly.to_vec();
    let mut factors = Vec::new();
    let mut k = 1;
    while 2 * k <= roots.len() {
        match find_factor(poly, &rest, &mut roots, k) {
            Some((subset, factor, quotient)) => {
                for &i in subset.iter().rev() {
                    roots.remove(i);
                }
                factors.push(factor);
                rest = quotient;
            }
            None => k += 1,
        }
    }
    if rest.len() > 1 {
        factors.push(rest);
    }
    factors
}

type Found = (Vec<usize>, Vec<BigInt>, Vec<BigInt>);

/// A factor of degree `k` of `rest`, with the indices of its roots.
fn find_factor(poly: &[BigInt], rest: &[BigInt], roots: &mut [Interval], k: usize) -> Option<Found> {
    let mut subset: Vec<usize> = (0..k).collect();
    loop {
        if let Some(factor) = integer_factor(poly, roots, &subset) {
            if let Some(quotient) = divide_monic(rest, &factor) {
                trace!("factor {:?} from roots {:?}", factor, subset);
                return Some((subset, factor, quotient));
            }
        }
        if !next_subset(&mut subset, roots.len()) {
            return None;
        }
    }
}

/// Next `k`-subset of `0..n` in lexicographic order.
fn next_subset(idx: &mut [usize], n: usize) -> bool {
    let k = idx.len();
    for i in (0..k).rev() {
        if idx[i] < n - k + i {
            idx[i] += 1;
            for j in i + 1..k {
                idx[j] = idx[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

/// `Π (y - rᵢ)` over the subset when all its coefficients are integers.
///
/// The subset's intervals are bisected until every coefficient interval is
/// narrower than one (a single integer candidate) or misses the integers.
fn integer_factor(poly: &[BigInt], roots: &mut [Interval], subset: &[usize]) -> Option<Vec<BigInt>> {
    let one = BigRational::one();
    loop {
        let coeffs = product_intervals(subset.iter().map(|&i| &roots[i]));
        let mut candidate = Vec::with_capacity(coeffs.len() + 1);
        let mut narrow = true;
        for (lo, hi) in &coeffs {
            let first = lo.ceil();
            if first > hi.floor() {
                return None;
            }
            if hi - lo >= one {
                narrow = false;
            } else {
                candidate.push(first.to_integer());
            }
        }
        if narrow {
            candidate.push(BigInt::one());
            return Some(candidate);
        }
        for &i in subset {
            roots[i] = refine(poly, &roots[i]);
        }
    }
}

fn interval_add(a: &Interval, b: &Interval) -> Interval {
    (&a.0 + &b.0, &a.1 + &b.1)
}

fn interval_sub(a: &Interval, b: &Interval) -> Interval {
    (&a.0 - &b.1, &a.1 - &b.0)
}

fn interval_mul(a: &Interval, b: &Interval) -> Interval {
    let products = [&a.0 * &b.0, &a.0 * &b.1, &a.1 * &b.0, &a.1 * &b.1];
    let lo = products.iter().min().cloned().unwrap_or_else(BigRational::zero);
    let hi = products.iter().max().cloned().unwrap_or_else(BigRational::zero);
    (lo, hi)
}

/// Coefficient intervals of `Π (y - rᵢ)`, ascending, without the leading one.
fn product_intervals<'a>(roots: impl Iterator<Item = &'a Interval>) -> Vec<Interval> {
    let zero = (BigRational::zero(), BigRational::zero());
    let mut c: Vec<Interval> = vec![(BigRational::one(), BigRational::one())];
    for r in roots {
        let mut next = vec![zero.clone(); c.len() + 1];
        for (j, cj) in c.iter().enumerate() {
            next[j] = interval_sub(&next[j], &interval_mul(r, cj));
            next[j + 1] = interval_add(&next[j + 1], cj);
        }
        c = next;
    }
    c.pop();
    c
}

/// How many times the monic `factor` divides `poly`.
fn multiplicity(poly: &[BigInt], factor: &[BigInt]) -> usize {
    let mut p = poly.to_vec();
    let mut m = 0;
    while let Some(q) = divide_monic(&p, factor) {
        p = q;
        m += 1;
    }
    m
}

/// Roots in `x = y/d` of an irreducible monic factor in `y`.
fn factor_roots(factor: &[BigInt], d: &BigInt) -> Result<Vec<RealRoot>, LinalgError> {
    match factor.len() {
        0 | 1 => Ok(Vec::new()),
        2 => Ok(vec![RealRoot::Exact(Number::from_rational(BigRational::new(
            -factor[0].clone(),
            d.clone(),
        )))]),
        3 => {
            let [lo, hi] = quadratic_roots(&factor[1], &factor[0])?;
            Ok(vec![
                RealRoot::Exact(to_x_number(&lo, d)),
                RealRoot::Exact(to_x_number(&hi, d)),
            ])
        }
        n => {
            // θ = y/d is a root of f(d·x).
            let scaled: Vec<BigInt> = factor
                .iter()
                .enumerate()
                .map(|(i, c)| c * num_traits::pow(d.clone(), i))
                .collect();
            let roots = RootOf::all(&scaled);
            if roots.len() + 1 != n {
                return Err(LinalgError::UnsolvableCharacteristic { degree: n - 1 });
            }
            Ok(roots.into_iter().map(RealRoot::Algebraic).collect())
        }
    }
}

fn to_x_number(y: &Number, d: &BigInt) -> Number {
    y * &Number::from_rational(BigRational::new(BigInt::one(), d.clone()))
}

/// Roots of `y² + b·y + c`, smaller first.
fn quadratic_roots(b: &BigInt, c: &BigInt) -> Result<[Number; 2], LinalgError> {
    let disc = BigRational::from_integer(b * b - BigInt::from(4) * c);
    let s = Number::sqrt_of_rational(&disc).ok_or(LinalgError::ComplexEigenvalues)?;
    let minus_b = Number::from(-b.clone());
    let half = Number::new(1, 2);
    Ok([
        &(&minus_b - &s) * &half,
        &(&minus_b + &s) * &half,
    ])
}

/// Roots of a polynomial with irrational coefficients, degree two at most.
fn algebraic_roots(p: &[Number], roots: &mut Vec<RealRoot>) -> Result<(), LinalgError> {
    match p.len() {
        0 | 1 => Ok(()),
        2 => {
            let inv = p[1].recip().ok_or(LinalgError::Singular)?;
            roots.push(RealRoot::Exact(-&(&p[0] * &inv)));
            Ok(())
        }
        3 => {
            let four = Number::from(4);
            let disc = &(&p[1] * &p[1]) - &(&four * &(&p[0] * &p[2]));
            if disc.is_negative() {
                return Err(LinalgError::ComplexEigenvalues);
            }
            let s = disc
                .sqrt()
                .ok_or(LinalgError::UnsolvableCharacteristic { degree: 2 })?;
            let inv = (&Number::from(2) * &p[2])
                .recip()
                .ok_or(LinalgError::Singular)?;
            let mut pair = [&(-&p[1] - &s) * &inv, &(-&p[1] + &s) * &inv];
            pair.sort_by(|a, b| a.cmp_value(b));
            roots.extend(pair.into_iter().map(RealRoot::Exact));
            Ok(())
        }
        n => Err(LinalgError::UnsolvableCharacteristic { degree: n - 1 }),
    }
}

/// Exact quotient `p / d` for monic `d`, or `None` if a remainder is left.
fn divide_monic(p: &[BigInt], d: &[BigInt]) -> Option<Vec<BigInt>> {
    let n = p.len().checked_sub(1)?;
    let k = d.len() - 1;
    if n < k {
        return None;
    }
    let mut rem = p.to_vec();
    let mut quot = vec![BigInt::zero(); n - k + 1];
    for i in (0..=n - k).rev() {
        let coef = rem[i + k].clone();
        if coef.is_zero() {
            continue;
        }
        for (j, dj) in d.iter().enumerate() {
            rem[i + j] -= &coef * dj;
        }
        quot[i] = coef;
    }
    rem[..k].iter().all(Zero::is_zero).then_some(quot)
}

// ── Symbolic coefficients ───────────────────────────────────────────

fn horner(p: &[Expr], x: &Expr) -> Expr {
    p.iter().rev().fold(Expr::zero(), |acc, c| &(&acc * x) + c)
}

/// `p / (λ - r)` for a root `r` of `p`.
fn deflate(p: &[Expr], r: &Expr) -> Vec<Expr> {
    let n = p.len() - 1;
    let mut q = vec![Expr::zero(); n];
    let mut carry = Expr::zero();
    for i in (1..=n).rev() {
        carry = &(&carry * r) + &p[i];
        q[i - 1] = carry.clone();
    }
    q
}

/// Roots with multiplicity of `Σ coeffs[i]·λⁱ` with symbolic coefficients.
///
/// Linear factors are tried among `candidates` in order. A remainder with
/// exact numeric coefficients goes through [`real_roots`], a symbolic
/// quadratic through the quadratic formula (with an exact polynomial
/// square root of the discriminant when there is one). A symbolic
/// remainder of higher degree fails with [`LinalgError::Symbolic`].
pub(crate) fn symbolic_roots(coeffs: &[Expr], candidates: &[Expr]) -> Result<Vec<Expr>, LinalgError> {
    let Some(degree) = coeffs.iter().rposition(|c| !c.is_zero()) else {
        return Ok(Vec::new());
    };
    let zeros = coeffs.iter().take_while(|c| c.is_zero()).count();
    let mut roots: Vec<Expr> = iter::repeat(Expr::zero()).take(zeros).collect();
    let mut p = coeffs[zeros..=degree].to_vec();

    for c in candidates {
        while p.len() > 1 && horner(&p, c).is_zero() {
            trace!("linear factor at {}", c);
            roots.push(c.clone());
            p = deflate(&p, c);
        }
    }

    if let Some(exact) = p.iter().map(Expr::as_number).collect::<Option<Vec<_>>>() {
        let mut rest = real_roots(&exact)?;
        rest.sort_by(RealRoot::cmp_value);
        roots.extend(rest.iter().map(RealRoot::to_expr));
        return Ok(roots);
    }
    match p.len() {
        0 | 1 => {}
        2 => {
            let r = p[0].checked_div(&p[1]).ok_or(LinalgError::Singular)?;
            roots.push(-r);
        }
        3 => {
            let (a, b, c) = (&p[2], &p[1], &p[0]);
            let disc = b * b - Expr::from(4) * a * c;
            if disc.signum() == Some(Ordering::Less) {
                return Err(LinalgError::ComplexEigenvalues);
            }
            let s = disc.sqrt_exact().unwrap_or_else(|| disc.sqrt());
            let two_a = Expr::from(2) * a;
            for r in [-b - &s, -b + &s] {
                roots.push(r.checked_div(&two_a).ok_or(LinalgError::Singular)?);
            }
        }
        _ => return Err(LinalgError::Symbolic),
    }
    Ok(roots)
}

#[cfg(test)]
mod tests {
    use crate::symbolic::Symbol;

    use super::*;

    fn ints(v: &[i64]) -> Vec<Number> {
        v.iter().map(|&x| Number::from(x)).collect()
    }

    fn sorted(mut v: Vec<RealRoot>) -> Vec<RealRoot> {
        v.sort_by(RealRoot::cmp_value);
        v
    }

    fn exact(v: Vec<RealRoot>) -> Vec<Number> {
        sorted(v)
            .into_iter()
            .map(|r| match r {
                RealRoot::Exact(n) => n,
                RealRoot::Algebraic(a) => panic!("unexpected algebraic root {}", a),
            })
            .collect()
    }

    fn sqrt(n: i64) -> Number {
        Number::from(n).sqrt().unwrap()
    }

    fn big_ints(v: &[i64]) -> Vec<BigInt> {
        v.iter().map(|&x| BigInt::from(x)).collect()
    }

    #[test]
    fn integer_and_quadratic() {
        // λ³ - 6λ² + 10λ - 4 = (λ - 2)(λ² - 4λ + 2)
        let roots = exact(real_roots(&ints(&[-4, 10, -6, 1])).unwrap());
        let two = Number::from(2);
        assert_eq!(roots, vec![&two - &sqrt(2), two.clone(), &two + &sqrt(2)]);
    }

    #[test]
    fn repeated_roots() {
        // (x - 1)²(x + 2) = x³ - 3x + 2
        let roots = exact(real_roots(&ints(&[2, -3, 0, 1])).unwrap());
        assert_eq!(roots, ints(&[-2, 1, 1]));
    }

    #[test]
    fn zero_roots() {
        // x²(x - 3)
        let roots = exact(real_roots(&ints(&[0, 0, -3, 1])).unwrap());
        assert_eq!(roots, ints(&[0, 0, 3]));
    }

    #[test]
    fn rational_roots_by_rescaling() {
        // x² - x/6 - 1/6 = (x - 1/2)(x + 1/3)
        let p = vec![Number::new(-1, 6), Number::new(-1, 6), Number::one()];
        let roots = exact(real_roots(&p).unwrap());
        assert_eq!(roots, vec![Number::new(-1, 3), Number::new(1, 2)]);
    }

    #[test]
    fn quadratic_factors() {
        // (x² - 2)(x² - 3)
        let roots = exact(real_roots(&ints(&[6, 0, -5, 0, 1])).unwrap());
        assert_eq!(roots, vec![-sqrt(3), -sqrt(2), sqrt(2), sqrt(3)]);
    }

    #[test]
    fn large_integer_root() {
        // (x - 2²¹)(x² - 2)
        let a = 1_i64 << 21;
        let roots = exact(real_roots(&ints(&[2 * a, -2, -a, 1])).unwrap());
        assert_eq!(roots, vec![-sqrt(2), sqrt(2), Number::from(a)]);
    }

    #[test]
    fn large_quadratic_factor() {
        // (x - 1)(x² - 3·10⁶), roots ±1000·√3
        let c = 3_000_000;
        let roots = exact(real_roots(&ints(&[c, -c, -1, 1])).unwrap());
        let r = &Number::from(1000) * &sqrt(3);
        assert_eq!(roots, vec![-&r, Number::one(), r]);
    }

    #[test]
    fn complex_roots() {
        assert_eq!(
            real_roots(&ints(&[1, 0, 1])).unwrap_err(),
            LinalgError::ComplexEigenvalues
        );
        // (x - 1)(x² + 1)
        assert_eq!(
            real_roots(&ints(&[-1, 1, -1, 1])).unwrap_err(),
            LinalgError::ComplexEigenvalues
        );
    }

    #[test]
    fn irreducible_cubic_gives_algebraic_roots() {
        // x³ - 3x + 1
        let roots = sorted(real_roots(&ints(&[1, -3, 0, 1])).unwrap());
        assert_eq!(roots.len(), 3);
        for (i, r) in roots.iter().enumerate() {
            match r {
                RealRoot::Algebraic(a) => {
                    assert_eq!(a.index(), i);
                    assert_eq!(a.coefficients(), big_ints(&[1, -3, 0, 1]).as_slice());
                }
                RealRoot::Exact(n) => panic!("unexpected exact root {}", n),
            }
        }
    }

    #[test]
    fn mixed_factors_sort_exactly() {
        // (x - 1)(x³ - 3x + 1): 1 lies between the two upper cubic roots
        let roots = sorted(real_roots(&ints(&[-1, 4, -3, -1, 1])).unwrap());
        assert_eq!(roots.len(), 4);
        assert_eq!(roots[2], RealRoot::Exact(Number::one()));
    }

    #[test]
    fn cubic_factor_with_rational_scaling() {
        // 2x³ - 3x + 1/2 = 2·(x³ - 3x/2 + 1/4), y = 4x gives y³ - 24y + 16
        let p = vec![Number::new(1, 2), Number::from(-3), Number::zero(), Number::from(2)];
        let roots = sorted(real_roots(&p).unwrap());
        assert_eq!(roots.len(), 3);
        for r in &roots {
            let x = r.to_expr().to_f64().unwrap();
            assert!((2.0 * x * x * x - 3.0 * x + 0.5).abs() < 1e-9);
        }
    }

    #[test]
    fn repeated_irreducible_factor() {
        // (x³ - 3x + 1)²
        let p = ints(&[1, -6, 9, 2, -6, 0, 1]);
        let roots = sorted(real_roots(&p).unwrap());
        assert_eq!(roots.len(), 6);
        assert_eq!(roots[0], roots[1]);
        assert_eq!(roots[4], roots[5]);
    }

    #[test]
    fn irrational_coefficients() {
        // x² - 2√2·x + 1 has roots √2 ± 1
        let p = vec![Number::one(), -&(&Number::from(2) * &sqrt(2)), Number::one()];
        let roots = exact(real_roots(&p).unwrap());
        assert_eq!(roots, vec![&sqrt(2) - &Number::one(), &sqrt(2) + &Number::one()]);
    }

    #[test]
    fn constant_polynomial() {
        assert!(real_roots(&ints(&[1])).unwrap().is_empty());
    }

    #[test]
    fn monic_division() {
        let p = big_ints(&[6, 0, -5, 0, 1]);
        let q = divide_monic(&p, &big_ints(&[-2, 0, 1])).unwrap();
        assert_eq!(q, big_ints(&[-3, 0, 1]));
        assert!(divide_monic(&p, &big_ints(&[1, 0, 1])).is_none());
        assert_eq!(multiplicity(&big_ints(&[1, -2, 1]), &big_ints(&[-1, 1])), 2);
    }

    #[test]
    fn subsets_in_order() {
        let mut idx = vec![0, 1];
        let mut seen = vec![idx.clone()];
        while next_subset(&mut idx, 4) {
            seen.push(idx.clone());
        }
        assert_eq!(seen.len(), 6);
        assert_eq!(seen[5], vec![2, 3]);
    }

    fn sym(name: &str) -> Expr {
        Expr::symbol(&Symbol::new(name))
    }

    #[test]
    fn symbolic_linear_factors() {
        let (a, b) = (sym("a"), sym("b"));
        // λ² - 2aλ + a² - b²
        let p = vec![&a * &a - &b * &b, Expr::from(-2) * a.clone(), Expr::one()];
        let candidates = vec![a.clone(), &a - &b, &a + &b];
        let roots = symbolic_roots(&p, &candidates).unwrap();
        assert_eq!(roots, vec![&a - &b, &a + &b]);
    }

    #[test]
    fn symbolic_quadratic_formula() {
        let (a, b) = (sym("a"), sym("b"));
        // λ² - 2aλ + a² - b², no candidates: the discriminant 4b² is a square
        let p = vec![&a * &a - &b * &b, Expr::from(-2) * a.clone(), Expr::one()];
        let roots = symbolic_roots(&p, &[]).unwrap();
        assert_eq!(roots, vec![&a - &b, &a + &b]);

        // λ² - (a + c)λ + ac - b² has a radical discriminant
        let c = sym("c");
        let q = vec![&a * &c - &b * &b, -(&a + &c), Expr::one()];
        for r in symbolic_roots(&q, &[]).unwrap() {
            assert!(horner(&q, &r).is_zero());
        }
    }

    #[test]
    fn symbolic_numeric_remainder() {
        let a = sym("a");
        // (λ - a)(λ² - 2)
        let p = vec![Expr::from(2) * a.clone(), Expr::from(-2), -a.clone(), Expr::one()];
        let roots = symbolic_roots(&p, &[a.clone()]).unwrap();
        let r2 = Expr::number(sqrt(2));
        assert_eq!(roots, vec![a, -r2.clone(), r2]);
    }

    #[test]
    fn symbolic_cubic_without_candidates() {
        let a = sym("a");
        let p = vec![a.clone(), Expr::zero(), Expr::zero(), Expr::one()];
        assert_eq!(symbolic_roots(&p, &[]).unwrap_err(), LinalgError::Symbolic);
    }

    #[test]
    fn deflation() {
        // (λ - 2)(λ - 3) / (λ - 2)
        let p = vec![Expr::from(6), Expr::from(-5), Expr::one()];
        assert_eq!(deflate(&p, &Expr::from(2)), vec![Expr::from(-3), Expr::one()]);
    }
}
