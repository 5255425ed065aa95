use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// Trial division stops at this bound; a larger cofactor is treated as
/// squarefree (or prime) unless it is a perfect square.
const TRIAL_DIVISION_LIMIT: u64 = 1 << 20;

/// Exact real number `Σ qᵢ·√rᵢ` with rational `qᵢ` and distinct squarefree
/// radicands `rᵢ` (radicand `1` holds the rational part).
///
/// The representation is canonical: square roots of distinct squarefree
/// integers are linearly independent over ℚ, so two numbers are equal
/// exactly when their term maps are equal. The derived `Ord` is this
/// structural order and is only used for canonical sorting; compare values
/// with [`Number::cmp_value`].
///
/// ```
/// use symspectra::symbolic::Number;
///
/// let two = Number::from(2);
/// let r = two.sqrt().unwrap();
/// assert!(!r.is_rational());
/// assert_eq!(&r * &r, two);
/// assert_eq!(r.recip().unwrap(), Number::new(1, 2).sqrt().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Number {
    terms: BTreeMap<BigUint, BigRational>,
}

// ── Integer helpers ─────────────────────────────────────────────────

/// Split `n` into `(s, r)` with `n = s²·r` and `r` squarefree.
pub(crate) fn square_free_split(n: &BigUint) -> (BigUint, BigUint) {
    if n.is_zero() {
        return (BigUint::zero(), BigUint::one());
    }
    let mut square = BigUint::one();
    let mut rest = n.clone();
    let mut p = 2u64;
    while p < TRIAL_DIVISION_LIMIT {
        let pb = BigUint::from(p);
        let p2 = &pb * &pb;
        if p2 > rest {
            return (square, rest);
        }
        while (&rest % &p2).is_zero() {
            rest /= &p2;
            square *= &pb;
        }
        p += if p == 2 { 1 } else { 2 };
    }
    let root = rest.sqrt();
    if &root * &root == rest {
        square *= &root;
        rest = BigUint::one();
    }
    (square, rest)
}

/// Smallest prime factor of `n > 1` (the cofactor itself past the trial
/// division bound).
fn smallest_prime_factor(n: &BigUint) -> BigUint {
    let mut p = 2u64;
    while p < TRIAL_DIVISION_LIMIT {
        let pb = BigUint::from(p);
        if &pb * &pb > *n {
            break;
        }
        if (n % &pb).is_zero() {
            return pb;
        }
        p += if p == 2 { 1 } else { 2 };
    }
    n.clone()
}

/// Exact square root of a non-negative rational, if it is rational.
pub(crate) fn rational_sqrt(q: &BigRational) -> Option<BigRational> {
    if q.is_negative() {
        return None;
    }
    let n = q.numer().sqrt();
    let d = q.denom().sqrt();
    if &(&n * &n) == q.numer() && &(&d * &d) == q.denom() {
        Some(BigRational::new(n, d))
    } else {
        None
    }
}

pub(crate) fn ratio_to_f64(q: &BigRational) -> f64 {
    match (q.numer().to_f64(), q.denom().to_f64()) {
        (Some(n), Some(d)) => n / d,
        _ => f64::NAN,
    }
}

fn big(n: &BigUint) -> BigRational {
    BigRational::from_integer(BigInt::from(n.clone()))
}

fn push_term(terms: &mut BTreeMap<BigUint, BigRational>, radicand: BigUint, coeff: BigRational) {
    if coeff.is_zero() {
        return;
    }
    match terms.entry(radicand) {
        Entry::Vacant(e) => {
            e.insert(coeff);
        }
        Entry::Occupied(mut e) => {
            let sum = e.get() + &coeff;
            if sum.is_zero() {
                e.remove();
            } else {
                *e.get_mut() = sum;
            }
        }
    }
}

// ── Constructors ────────────────────────────────────────────────────

impl Number {
    /// The rational `numer / denom`.
    ///
    /// Panics if `denom == 0`.
    pub fn new(numer: i64, denom: i64) -> Self {
        Self::from_rational(BigRational::new(numer.into(), denom.into()))
    }

    /// Embed a rational.
    pub fn from_rational(q: BigRational) -> Self {
        let mut terms = BTreeMap::new();
        push_term(&mut terms, BigUint::one(), q);
        Self { terms }
    }

    /// `coeff · √radicand` for an arbitrary natural radicand.
    pub fn radical(coeff: BigRational, radicand: &BigUint) -> Self {
        let (square, rest) = square_free_split(radicand);
        let mut terms = BTreeMap::new();
        push_term(&mut terms, rest, coeff * big(&square));
        Self { terms }
    }

    /// `√q` for a rational `q`; `None` when `q < 0`.
    ///
    /// `√(a/b)` is stored as `√(ab)/b`, so the radicand is always a natural.
    pub fn sqrt_of_rational(q: &BigRational) -> Option<Self> {
        if q.is_negative() {
            return None;
        }
        let product = (q.numer() * q.denom()).magnitude().clone();
        let coeff = BigRational::new(BigInt::one(), q.denom().clone());
        Some(Self::radical(coeff, &product))
    }
}

// ── Queries ─────────────────────────────────────────────────────────

impl Number {
    /// Whether there is no irrational part.
    pub fn is_rational(&self) -> bool {
        self.terms.keys().all(|r| r.is_one())
    }

    /// The value as a rational, when it is one.
    pub fn as_rational(&self) -> Option<BigRational> {
        if !self.is_rational() {
            return None;
        }
        Some(
            self.terms
                .get(&BigUint::one())
                .cloned()
                .unwrap_or_else(BigRational::zero),
        )
    }

    /// The value as a machine integer, when it is one.
    pub fn as_i64(&self) -> Option<i64> {
        let q = self.as_rational()?;
        if q.is_integer() {
            q.to_integer().to_i64()
        } else {
            None
        }
    }

    /// `(radicand, coefficient)` pairs in radicand order.
    pub fn terms(&self) -> impl Iterator<Item = (&BigUint, &BigRational)> {
        self.terms.iter()
    }

    /// Number of `q·√r` terms.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Floating-point approximation.
    pub fn to_f64(&self) -> f64 {
        self.terms
            .iter()
            .map(|(r, q)| {
                let root = if r.is_one() {
                    1.0
                } else {
                    r.to_f64().map_or(f64::NAN, f64::sqrt)
                };
                ratio_to_f64(q) * root
            })
            .sum()
    }

    /// Prime used to split the number as `A + B·√p`.
    fn split_prime(&self) -> Option<BigUint> {
        let largest = self.terms.keys().filter(|r| !r.is_one()).next_back()?;
        Some(smallest_prime_factor(largest))
    }

    /// `(A, B)` with `self = A + B·√p` and neither part involving `√p`.
    fn split_at(&self, p: &BigUint) -> (Number, Number) {
        let mut a = BTreeMap::new();
        let mut b = BTreeMap::new();
        for (r, q) in &self.terms {
            if (r % p).is_zero() {
                push_term(&mut b, r / p, q.clone());
            } else {
                push_term(&mut a, r.clone(), q.clone());
            }
        }
        (Number { terms: a }, Number { terms: b })
    }

    /// Exact sign.
    ///
    /// Splits off one prime at a time: for `A + B√p` with `A`, `B` of
    /// opposite signs the dominant part is decided by the sign of `A² - pB²`.
    pub fn signum(&self) -> Ordering {
        if let Some(q) = self.as_rational() {
            return q.cmp(&BigRational::zero());
        }
        let Some(p) = self.split_prime() else {
            return Ordering::Equal;
        };
        let (a, b) = self.split_at(&p);
        let sa = a.signum();
        let sb = b.signum();
        if sa == Ordering::Equal {
            return sb;
        }
        if sb == Ordering::Equal || sa == sb {
            return sa;
        }
        let p = Number::from_rational(big(&p));
        let norm = &(&a * &a) - &(&(&b * &b) * &p);
        match norm.signum() {
            Ordering::Greater => sa,
            Ordering::Less => sb,
            Ordering::Equal => Ordering::Equal,
        }
    }

    /// Exact comparison of values.
    pub fn cmp_value(&self, other: &Number) -> Ordering {
        (self - other).signum()
    }

    pub fn is_positive(&self) -> bool {
        self.signum() == Ordering::Greater
    }

    pub fn is_negative(&self) -> bool {
        self.signum() == Ordering::Less
    }
}

// ── Field operations ────────────────────────────────────────────────

impl Number {
    /// Multiplicative inverse; `None` for zero.
    ///
    /// Rationalizes one prime at a time with the conjugate `A - B√p`.
    pub fn recip(&self) -> Option<Number> {
        if self.is_zero() {
            return None;
        }
        if let Some(q) = self.as_rational() {
            return Some(Number::from_rational(q.recip()));
        }
        let p = self.split_prime()?;
        let (a, b) = self.split_at(&p);
        let root_p = Number::radical(BigRational::one(), &p);
        let conj = &a - &(&b * &root_p);
        let norm = &(&a * &a) - &(&(&b * &b) * &Number::from_rational(big(&p)));
        let inv = norm.recip()?;
        Some(&conj * &inv)
    }

    /// Integer power; `None` for a negative power of zero. `0⁰ = 1`.
    pub fn pow(&self, n: i64) -> Option<Number> {
        let base = if n < 0 { self.recip()? } else { self.clone() };
        let mut e = n.unsigned_abs();
        let mut acc = Number::one();
        let mut sq = base;
        while e > 0 {
            if e & 1 == 1 {
                acc = &acc * &sq;
            }
            e >>= 1;
            if e > 0 {
                sq = &sq * &sq;
            }
        }
        Some(acc)
    }

    /// Square root when it stays inside the field.
    ///
    /// Rationals always have one (negative ones excepted). `a + b√c` is
    /// denested as `√x ± √y` when `a² - b²c` is a rational square.
    pub fn sqrt(&self) -> Option<Number> {
        if let Some(q) = self.as_rational() {
            return Number::sqrt_of_rational(&q);
        }
        if self.term_count() != 2 || self.is_negative() {
            return None;
        }
        let a = self.terms.get(&BigUint::one())?.clone();
        let (c, b) = self.terms.iter().find(|(r, _)| !r.is_one())?;
        let disc = &a * &a - b * b * big(c);
        let s = rational_sqrt(&disc)?;
        let two = BigRational::from_integer(BigInt::from(2));
        let x = Number::sqrt_of_rational(&((&a + &s) / &two))?;
        let y = Number::sqrt_of_rational(&((&a - &s) / &two))?;
        if b.is_negative() {
            Some(&x - &y)
        } else {
            Some(&x + &y)
        }
    }
}

// ── Arithmetic operators ────────────────────────────────────────────

impl<'a> Add<&'a Number> for &'a Number {
    type Output = Number;

    fn add(self, rhs: &'a Number) -> Number {
        let mut terms = self.terms.clone();
        for (r, q) in &rhs.terms {
            push_term(&mut terms, r.clone(), q.clone());
        }
        Number { terms }
    }
}

impl<'a> Sub<&'a Number> for &'a Number {
    type Output = Number;

    fn sub(self, rhs: &'a Number) -> Number {
        let mut terms = self.terms.clone();
        for (r, q) in &rhs.terms {
            push_term(&mut terms, r.clone(), -q.clone());
        }
        Number { terms }
    }
}

impl<'a> Mul<&'a Number> for &'a Number {
    type Output = Number;

    fn mul(self, rhs: &'a Number) -> Number {
        let mut terms = BTreeMap::new();
        for (ra, qa) in &self.terms {
            for (rb, qb) in &rhs.terms {
                // √a·√b = g·√((a/g)(b/g)) for squarefree a, b with g = gcd(a, b)
                let g = ra.gcd(rb);
                let radicand = (ra / &g) * (rb / &g);
                push_term(&mut terms, radicand, qa * qb * big(&g));
            }
        }
        Number { terms }
    }
}

impl Neg for &Number {
    type Output = Number;

    fn neg(self) -> Number {
        Number {
            terms: self
                .terms
                .iter()
                .map(|(r, q)| (r.clone(), -q.clone()))
                .collect(),
        }
    }
}

macro_rules! forward_owned_binop {
    ($($trait:ident :: $method:ident),*) => {
        $(
            impl $trait for Number {
                type Output = Number;
                #[inline]
                fn $method(self, rhs: Number) -> Number {
                    (&self).$method(&rhs)
                }
            }

            impl<'a> $trait<&'a Number> for Number {
                type Output = Number;
                #[inline]
                fn $method(self, rhs: &'a Number) -> Number {
                    (&self).$method(rhs)
                }
            }
        )*
    };
}

forward_owned_binop!(Add::add, Sub::sub, Mul::mul);

impl Neg for Number {
    type Output = Number;

    #[inline]
    fn neg(self) -> Number {
        -&self
    }
}

impl Zero for Number {
    fn zero() -> Self {
        Number::default()
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl One for Number {
    fn one() -> Self {
        Number::from(1)
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::from_rational(BigRational::from_integer(n.into()))
    }
}

impl From<BigInt> for Number {
    fn from(n: BigInt) -> Self {
        Number::from_rational(BigRational::from_integer(n))
    }
}

impl From<BigRational> for Number {
    fn from(q: BigRational) -> Self {
        Number::from_rational(q)
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (i, (r, q)) in self.terms.iter().enumerate() {
            let magnitude = q.abs();
            let body = if r.is_one() {
                format!("{}", magnitude)
            } else if magnitude.is_one() {
                format!("sqrt({})", r)
            } else {
                format!("{}*sqrt({})", magnitude, r)
            };
            match (i, q.is_negative()) {
                (0, true) => write!(f, "-{}", body)?,
                (0, false) => write!(f, "{}", body)?,
                (_, true) => write!(f, " - {}", body)?,
                (_, false) => write!(f, " + {}", body)?,
            }
        }
        Ok(())
    }
}
