use core::cmp::Ordering;
use core::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::expr::Expr;
use super::number::{ratio_to_f64, Number};

/// Closed rational interval `(lo, hi)`; `lo == hi` marks an exact root.
pub(crate) type Interval = (BigRational, BigRational);

/// Bisection steps used by [`RootOf::to_f64`].
const F64_REFINEMENTS: usize = 96;

// ── Univariate helpers ──────────────────────────────────────────────
//
// Polynomials are coefficient vectors in ascending powers.

fn two() -> BigRational {
    BigRational::from_integer(BigInt::from(2))
}

/// `p(x)` at a rational point.
fn eval(p: &[BigInt], x: &BigRational) -> BigRational {
    p.iter()
        .rev()
        .fold(BigRational::zero(), |acc, c| acc * x + BigRational::from_integer(c.clone()))
}

fn sign_at(p: &[BigInt], x: &BigRational) -> Ordering {
    eval(p, x).cmp(&BigRational::zero())
}

/// `p(x)` at an exact real point.
fn eval_number(p: &[BigInt], x: &Number) -> Number {
    p.iter()
        .rev()
        .fold(Number::zero(), |acc, c| &(&acc * x) + &Number::from(c.clone()))
}

/// Sign changes in a sequence, zeros skipped.
pub(crate) fn sign_variations(signs: impl IntoIterator<Item = Ordering>) -> usize {
    let mut last = Ordering::Equal;
    let mut changes = 0;
    for s in signs.into_iter().filter(|s| *s != Ordering::Equal) {
        if last != Ordering::Equal && s != last {
            changes += 1;
        }
        last = s;
    }
    changes
}

fn trim(p: &mut Vec<BigRational>) {
    while p.last().is_some_and(Zero::is_zero) {
        p.pop();
    }
}

fn rmul(p: &[BigRational], q: &[BigRational]) -> Vec<BigRational> {
    if p.is_empty() || q.is_empty() {
        return Vec::new();
    }
    let mut out = vec![BigRational::zero(); p.len() + q.len() - 1];
    for (i, a) in p.iter().enumerate() {
        for (j, b) in q.iter().enumerate() {
            out[i + j] += a * b;
        }
    }
    out
}

fn rsub(p: &[BigRational], q: &[BigRational]) -> Vec<BigRational> {
    let mut out = vec![BigRational::zero(); p.len().max(q.len())];
    for (i, a) in p.iter().enumerate() {
        out[i] += a;
    }
    for (i, b) in q.iter().enumerate() {
        out[i] -= b;
    }
    trim(&mut out);
    out
}

/// Quotient and remainder of `a / b`; `b` must be trimmed and nonzero.
fn divrem(a: &[BigRational], b: &[BigRational]) -> (Vec<BigRational>, Vec<BigRational>) {
    let mut r = a.to_vec();
    trim(&mut r);
    let db = b.len() - 1;
    if r.len() < b.len() {
        return (Vec::new(), r);
    }
    let mut q = vec![BigRational::zero(); r.len() - db];
    while r.len() >= b.len() {
        let k = r.len() - b.len();
        let c = &r[r.len() - 1] / &b[db];
        for (j, bj) in b.iter().enumerate() {
            r[k + j] -= &c * bj;
        }
        q[k] = c;
        r.pop();
        trim(&mut r);
    }
    (q, r)
}

/// Monic greatest common divisor over ℚ.
pub(crate) fn rational_gcd(a: &[BigRational], b: &[BigRational]) -> Vec<BigRational> {
    let mut x = a.to_vec();
    let mut y = b.to_vec();
    trim(&mut x);
    trim(&mut y);
    while !y.is_empty() {
        let (_, r) = divrem(&x, &y);
        x = y;
        y = r;
    }
    match x.last().cloned() {
        Some(lead) => x.iter().map(|c| c / &lead).collect(),
        None => x,
    }
}

/// Derivative of an integer polynomial, as rationals.
pub(crate) fn derivative(p: &[BigInt]) -> Vec<BigRational> {
    p.iter()
        .enumerate()
        .skip(1)
        .map(|(i, c)| BigRational::from_integer(c * BigInt::from(i)))
        .collect()
}

/// `(1 + x)ⁿ·p((lo + hi·x)/(1 + x))`, whose positive roots are the roots of
/// `p` inside `(lo, hi)`.
fn descartes_bound(p: &[BigInt], lo: &BigRational, hi: &BigRational) -> usize {
    let n = p.len() - 1;
    let linear = [lo.clone(), hi.clone()];
    let shift = [BigRational::one(), BigRational::one()];
    let mut linear_pow = vec![vec![BigRational::one()]];
    let mut shift_pow = vec![vec![BigRational::one()]];
    for i in 1..=n {
        linear_pow.push(rmul(&linear_pow[i - 1], &linear));
        shift_pow.push(rmul(&shift_pow[i - 1], &shift));
    }
    let mut q = vec![BigRational::zero(); n + 1];
    for (i, c) in p.iter().enumerate() {
        if c.is_zero() {
            continue;
        }
        let c = BigRational::from_integer(c.clone());
        for (k, t) in rmul(&linear_pow[i], &shift_pow[n - i]).iter().enumerate() {
            q[k] += &c * t;
        }
    }
    sign_variations(q.iter().map(|c| c.cmp(&BigRational::zero())))
}

/// Cauchy bound: every root satisfies `|x| < 1 + max |cᵢ / cₙ|`.
fn root_bound(p: &[BigInt]) -> BigRational {
    let n = p.len() - 1;
    let lead = p[n].abs();
    let largest = p[..n].iter().map(Signed::abs).max().unwrap_or_else(BigInt::zero);
    BigRational::from_integer(largest.div_ceil(&lead) + BigInt::one())
}

fn isolate_in(p: &[BigInt], lo: BigRational, hi: BigRational, out: &mut Vec<Interval>) {
    let count = descartes_bound(p, &lo, &hi);
    if count == 0 {
        return;
    }
    if count == 1 && sign_at(p, &lo).is_ne() && sign_at(p, &hi).is_ne() {
        out.push((lo, hi));
        return;
    }
    let mid = (&lo + &hi) / two();
    isolate_in(p, lo, mid.clone(), out);
    if sign_at(p, &mid).is_eq() {
        out.push((mid.clone(), mid.clone()));
    }
    isolate_in(p, mid, hi, out);
}

/// Isolating intervals of the real roots of a squarefree polynomial, in
/// ascending order.
///
/// Each interval holds exactly one root and `p` is nonzero at both ends; a
/// root met exactly during bisection is returned as `(r, r)`.
pub(crate) fn isolate_real_roots(p: &[BigInt]) -> Vec<Interval> {
    let mut out = Vec::new();
    if p.len() < 2 || p.iter().all(Zero::is_zero) {
        return out;
    }
    let bound = root_bound(p);
    isolate_in(p, -bound.clone(), bound, &mut out);
    out
}

/// One bisection step on an isolating interval of `p`.
pub(crate) fn refine(p: &[BigInt], interval: &Interval) -> Interval {
    let (lo, hi) = interval;
    if lo == hi {
        return interval.clone();
    }
    let mid = (lo + hi) / two();
    let s = sign_at(p, &mid);
    if s.is_eq() {
        (mid.clone(), mid)
    } else if s == sign_at(p, lo) {
        (mid, hi.clone())
    } else {
        (lo.clone(), mid)
    }
}

/// Coprime integer coefficients with a positive leading coefficient.
fn primitive(coeffs: &[BigInt]) -> Option<Vec<BigInt>> {
    let degree = coeffs.iter().rposition(|c| !c.is_zero())?;
    let mut p = coeffs[..=degree].to_vec();
    let g = p.iter().fold(BigInt::zero(), |g, c| g.gcd(c));
    let g = if p[degree].is_negative() { -g } else { g };
    for c in &mut p {
        *c = &*c / &g;
    }
    Some(p)
}

// ── RootOf ──────────────────────────────────────────────────────────

/// A real algebraic number: root `index` (ascending, from zero) of an
/// irreducible integer polynomial of degree at least two.
///
/// The isolating interval is a function of the polynomial and the index,
/// so structural equality is value equality. Arithmetic on an [`Expr`]
/// holding the root reduces its powers below the degree of the polynomial.
///
/// ```
/// use symspectra::SymMatrix;
///
/// // λ³ - 10λ² + 29λ - 23 has no rational roots.
/// let a = SymMatrix::from_i64(3, 3, &[2, 1, 0, 1, 3, 1, 0, 1, 5]);
/// let values = a.eigenvals().unwrap();
/// let smallest = values[0].as_algebraic().unwrap();
/// assert_eq!(smallest.degree(), 3);
/// assert!((values[0].to_f64().unwrap() - 1.300372).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RootOf {
    poly: Vec<BigInt>,
    index: usize,
    lo: BigRational,
    hi: BigRational,
}

impl RootOf {
    /// All real roots of an irreducible polynomial, ascending.
    ///
    /// The caller guarantees irreducibility; nothing is returned for a
    /// polynomial of degree below two or with a rational root.
    pub(crate) fn all(coeffs: &[BigInt]) -> Vec<RootOf> {
        let Some(poly) = primitive(coeffs) else {
            return Vec::new();
        };
        if poly.len() < 3 {
            return Vec::new();
        }
        let intervals = isolate_real_roots(&poly);
        if intervals.iter().any(|(lo, hi)| lo == hi) {
            return Vec::new();
        }
        intervals
            .into_iter()
            .enumerate()
            .map(|(index, (lo, hi))| RootOf {
                poly: poly.clone(),
                index,
                lo,
                hi,
            })
            .collect()
    }

    /// Defining polynomial, ascending integer coefficients.
    pub fn coefficients(&self) -> &[BigInt] {
        &self.poly
    }

    pub fn degree(&self) -> usize {
        self.poly.len() - 1
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Open interval holding the root and no other root of the polynomial.
    pub fn interval(&self) -> (&BigRational, &BigRational) {
        (&self.lo, &self.hi)
    }

    fn isolation(&self) -> Interval {
        (self.lo.clone(), self.hi.clone())
    }

    pub fn to_f64(&self) -> f64 {
        let mut iv = self.isolation();
        for _ in 0..F64_REFINEMENTS {
            iv = refine(&self.poly, &iv);
        }
        ratio_to_f64(&((&iv.0 + &iv.1) / two()))
    }

    /// Exact comparison with an exact real.
    pub fn cmp_number(&self, n: &Number) -> Ordering {
        let mut iv = self.isolation();
        loop {
            if n.cmp_value(&Number::from_rational(iv.0.clone())).is_le() {
                return Ordering::Greater;
            }
            if n.cmp_value(&Number::from_rational(iv.1.clone())).is_ge() {
                return Ordering::Less;
            }
            if eval_number(&self.poly, n).is_zero() {
                return Ordering::Equal;
            }
            iv = refine(&self.poly, &iv);
        }
    }

    /// Exact comparison of values.
    ///
    /// Roots of distinct irreducible polynomials differ, so bisection
    /// separates them.
    pub fn cmp_value(&self, other: &RootOf) -> Ordering {
        if self.poly == other.poly {
            return self.index.cmp(&other.index);
        }
        let mut a = self.isolation();
        let mut b = other.isolation();
        loop {
            if a.1 <= b.0 {
                return Ordering::Less;
            }
            if b.1 <= a.0 {
                return Ordering::Greater;
            }
            a = refine(&self.poly, &a);
            b = refine(&other.poly, &b);
        }
    }

    /// `λᵈ = Σ rᵢ·λⁱ` for `i < d`, the rewrite applied to powers of the root.
    pub(crate) fn reduction(&self) -> Vec<BigRational> {
        let d = self.degree();
        let lead = BigRational::from_integer(self.poly[d].clone());
        self.poly[..d]
            .iter()
            .map(|c| -BigRational::from_integer(c.clone()) / &lead)
            .collect()
    }

    fn monic(&self) -> Vec<BigRational> {
        let lead = BigRational::from_integer(self.poly[self.degree()].clone());
        self.poly
            .iter()
            .map(|c| BigRational::from_integer(c.clone()) / &lead)
            .collect()
    }

    /// Newton power sums `pₖ = Σ θᵏ` over all roots `θ`, for `k < d`.
    fn power_sums(&self) -> Vec<BigRational> {
        let d = self.degree();
        let a = self.monic();
        let mut sums = vec![BigRational::from_integer(BigInt::from(d))];
        for k in 1..d {
            let mut acc = BigRational::from_integer(BigInt::from(k)) * &a[d - k];
            for j in 1..k {
                acc += &a[d - j] * &sums[k - j];
            }
            sums.push(-acc);
        }
        sums
    }

    /// Inverse of `Σ coeffs[i]·λⁱ` in `ℚ(λ)`; `None` for zero.
    pub(crate) fn inverse_of(&self, coeffs: &[BigRational]) -> Option<Vec<BigRational>> {
        let m = self.monic();
        let (_, a) = divrem(coeffs, &m);
        if a.is_empty() {
            return None;
        }
        let (mut r0, mut r1) = (m.clone(), a);
        let (mut s0, mut s1) = (Vec::new(), vec![BigRational::one()]);
        while !r1.is_empty() {
            let (q, r) = divrem(&r0, &r1);
            let s = rsub(&s0, &rmul(&q, &s1));
            r0 = r1;
            r1 = r;
            s0 = s1;
            s1 = s;
        }
        if r0.len() != 1 {
            return None;
        }
        let scale = r0[0].recip();
        let inv: Vec<BigRational> = s0.iter().map(|c| c * &scale).collect();
        Some(divrem(&inv, &m).1)
    }

    /// Sum of `e` over every conjugate of the root (the field trace), for an
    /// expression that is a rational polynomial in this root alone.
    pub fn trace(&self, e: &Expr) -> Option<Number> {
        if !e.denominator().is_one() {
            return None;
        }
        let coeffs = e.numerator().as_univariate(self)?;
        let sums = self.power_sums();
        if coeffs.len() > sums.len() {
            return None;
        }
        let total = coeffs
            .iter()
            .zip(&sums)
            .fold(BigRational::zero(), |acc, (c, p)| acc + c * p);
        Some(Number::from_rational(total))
    }
}

impl fmt::Display for RootOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rootof(")?;
        let mut first = true;
        for (i, c) in self.poly.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            let magnitude = c.abs();
            match (first, c.is_negative()) {
                (true, true) => write!(f, "-")?,
                (true, false) => {}
                (false, true) => write!(f, " - ")?,
                (false, false) => write!(f, " + ")?,
            }
            first = false;
            let coeff = if magnitude.is_one() && i > 0 {
                String::new()
            } else if i > 0 {
                format!("{}*", magnitude)
            } else {
                magnitude.to_string()
            };
            match i {
                0 => write!(f, "{}", coeff)?,
                1 => write!(f, "{}x", coeff)?,
                _ => write!(f, "{}x**{}", coeff, i)?,
            }
        }
        write!(f, ", {})", self.index)
    }
}
