use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};
use std::collections::BTreeSet;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::algebraic::RootOf;
use super::atom::{Atom, Symbol};
use super::number::Number;
use super::poly::{leading_sign, Poly};

/// Symbolic expression: a quotient of two [`Poly`]s.
///
/// Every constructor and operator returns the normal form: zero is `0/1`, a
/// constant denominator is folded into the numerator, the denominator is
/// otherwise monic, and shared monomial factors and exact polynomial
/// quotients are cancelled. Numeric expressions therefore compare exactly.
///
/// ```
/// use num_traits::One;
/// use symspectra::symbolic::{Expr, Symbol};
///
/// let x = Expr::symbol(&Symbol::new("x"));
/// let e = (&x * &x - Expr::one()) / (&x - &Expr::one());
/// assert_eq!(e, &x + &Expr::one());
///
/// let half = Expr::rational(1, 2);
/// assert_eq!(half.acos(), Expr::pi() / Expr::from(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Expr {
    num: Poly,
    den: Poly,
}

// ── Constructors ────────────────────────────────────────────────────

impl Expr {
    /// Build the normal form of `num / den`. `den` must be nonzero.
    fn from_parts(num: Poly, den: Poly) -> Expr {
        debug_assert!(!den.is_zero(), "zero denominator");
        if num.is_zero() {
            return Expr::zero();
        }
        let (num, den) = rationalize(num, den);
        if let Some(c) = den.as_constant() {
            if let Some(inv) = c.recip() {
                return Expr {
                    num: num.scale(&inv),
                    den: Poly::one(),
                };
            }
        }

        let common = num.monomial_content().gcd(&den.monomial_content());
        let (num, den) = if common.is_one() {
            (num, den)
        } else {
            (num.div_monomial(&common), den.div_monomial(&common))
        };

        if let Some(q) = num.div_exact(&den) {
            return Expr {
                num: q,
                den: Poly::one(),
            };
        }
        let (num, den) = match num.as_constant() {
            None => match den.div_exact(&num) {
                Some(q) => (Poly::one(), q),
                None => (num, den),
            },
            Some(_) => (num, den),
        };
        if let Some(c) = den.as_constant() {
            if let Some(inv) = c.recip() {
                return Expr {
                    num: num.scale(&inv),
                    den: Poly::one(),
                };
            }
        }

        match den.leading_term().and_then(|(_, lc)| lc.recip()) {
            Some(inv) => Expr {
                num: num.scale(&inv),
                den: den.scale(&inv),
            },
            None => Expr { num, den },
        }
    }

    /// The rational `numer / denom`. Panics if `denom == 0`.
    pub fn rational(numer: i64, denom: i64) -> Expr {
        Expr::number(Number::new(numer, denom))
    }

    pub fn number(n: Number) -> Expr {
        Expr {
            num: Poly::constant(n),
            den: Poly::one(),
        }
    }

    pub fn symbol(s: &Symbol) -> Expr {
        Expr::atom(Atom::Symbol(s.clone()))
    }

    /// The constant π.
    pub fn pi() -> Expr {
        Expr::atom(Atom::Pi)
    }

    /// A real algebraic number as an expression.
    pub fn algebraic(root: RootOf) -> Expr {
        Expr::atom(Atom::Root(root))
    }

    /// `Π (x - rᵢ)`, the expanded polynomial vanishing exactly at `roots`.
    ///
    /// ```
    /// use symspectra::symbolic::{Expr, Symbol};
    /// let x = Symbol::new("x");
    /// let p = Expr::from_roots(&[Expr::from(1), Expr::from(-2)], &x);
    /// let xe = Expr::symbol(&x);
    /// assert_eq!(p, &xe * &xe + xe.clone() - Expr::from(2));
    /// ```
    pub fn from_roots(roots: &[Expr], x: &Symbol) -> Expr {
        let x = Expr::symbol(x);
        roots
            .iter()
            .fold(Expr::one(), |acc, r| acc * (&x - r))
    }

    fn atom(a: Atom) -> Expr {
        Expr {
            num: Poly::atom(a),
            den: Poly::one(),
        }
    }

    pub fn numerator(&self) -> &Poly {
        &self.num
    }

    pub fn denominator(&self) -> &Poly {
        &self.den
    }
}

// ── Queries ─────────────────────────────────────────────────────────

impl Expr {
    /// The value if the expression is an exact [`Number`].
    pub fn as_number(&self) -> Option<Number> {
        if self.den.is_one() {
            self.num.as_constant()
        } else {
            None
        }
    }

    /// The value if the expression is an integer that fits in `i64`.
    pub fn as_integer(&self) -> Option<i64> {
        self.as_number()?.as_i64()
    }

    /// No free symbol occurs (π and other constants are allowed).
    pub fn is_numeric(&self) -> bool {
        !self.num.has_symbols() && !self.den.has_symbols()
    }

    pub fn free_symbols(&self) -> BTreeSet<Symbol> {
        let mut out = BTreeSet::new();
        self.num.collect_symbols(&mut out);
        self.den.collect_symbols(&mut out);
        out
    }

    /// Floating-point value; `None` when a free symbol occurs.
    pub fn to_f64(&self) -> Option<f64> {
        Some(self.num.to_f64()? / self.den.to_f64()?)
    }

    /// The algebraic number when the expression is exactly one.
    pub fn as_algebraic(&self) -> Option<&RootOf> {
        if !self.den.is_one() || self.num.term_count() != 1 {
            return None;
        }
        let (m, c) = self.num.terms().next()?;
        if !c.is_one() || m.degree() != 1 {
            return None;
        }
        match m.iter().next()? {
            (Atom::Root(r), _) => Some(r),
            _ => None,
        }
    }

    /// Exact sign of a [`Number`]-valued expression.
    pub fn signum(&self) -> Option<Ordering> {
        self.as_number().map(|n| n.signum())
    }
}

// ── Elementary functions ────────────────────────────────────────────

impl Expr {
    /// `self / rhs`, or `None` when `rhs` is zero.
    pub fn checked_div(&self, rhs: &Expr) -> Option<Expr> {
        if rhs.is_zero() {
            return None;
        }
        Some(Expr::from_parts(
            self.num.mul(&rhs.den),
            self.den.mul(&rhs.num),
        ))
    }

    /// Multiplicative inverse, or `None` for zero.
    pub fn recip(&self) -> Option<Expr> {
        Expr::one().checked_div(self)
    }

    /// Integer power; `None` for a negative power of zero. `0⁰ = 1`.
    pub fn pow(&self, n: i64) -> Option<Expr> {
        let base = if n < 0 { self.recip()? } else { self.clone() };
        let mut e = n.unsigned_abs();
        let mut acc = Expr::one();
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

    /// Principal square root.
    ///
    /// Exact numbers stay numbers whenever the root is expressible; rational
    /// content is pulled out of symbolic radicands and `sqrt(p/q)` is
    /// rewritten as `sqrt(p·q)/q`.
    pub fn sqrt(&self) -> Expr {
        if self.den.is_one() {
            return sqrt_poly(&self.num);
        }
        let root = sqrt_poly(&self.num.mul(&self.den));
        Expr::from_parts(root.num, root.den.mul(&self.den))
    }

    /// Square root when numerator and denominator are squares of
    /// polynomials, with positive leading coefficients; `None` otherwise.
    ///
    /// ```
    /// use symspectra::symbolic::{Expr, Symbol};
    /// let b = Expr::symbol(&Symbol::new("b"));
    /// let four_b2 = Expr::from(4) * &b * &b;
    /// assert_eq!(four_b2.sqrt_exact(), Some(Expr::from(2) * b.clone()));
    /// assert!((&b * &b + Expr::from(1)).sqrt_exact().is_none());
    /// ```
    pub fn sqrt_exact(&self) -> Option<Expr> {
        Some(Expr::from_parts(self.num.sqrt_exact()?, self.den.sqrt_exact()?))
    }

    /// Arc cosine, evaluated exactly at the tabulated angles.
    pub fn acos(&self) -> Expr {
        if let Some(x) = self.as_number() {
            if let Some((p, q)) = special_acos(&x) {
                return Expr::pi() * Expr::rational(p, q);
            }
        }
        Expr::atom(Atom::Acos(Box::new(self.clone())))
    }
}

/// Rewrites of a radical denominator allowed per normalization.
const RATIONALIZE_PASSES: usize = 8;

/// Clear radicals from a denominator: a square root `s` goes through the
/// conjugate `(u + v·s)(u - v·s) = u² - v²·s²`, and a polynomial in one
/// algebraic root is replaced by its inverse in the root's field.
fn rationalize(mut num: Poly, mut den: Poly) -> (Poly, Poly) {
    for _ in 0..RATIONALIZE_PASSES {
        let Some(atom) = den.first_radical() else {
            break;
        };
        if let Atom::Root(root) = &atom {
            let Some(inv) = den
                .as_univariate(root)
                .and_then(|coeffs| root.inverse_of(&coeffs))
            else {
                break;
            };
            num = num.mul(&Poly::from_univariate(root, &inv));
            den = Poly::one();
            continue;
        }
        let Some((u, v)) = den.split_linear(&atom) else {
            break;
        };
        let conj = u.sub(&v.mul(&Poly::atom(atom)));
        num = num.mul(&conj);
        den = den.mul(&conj);
    }
    (num, den)
}

fn sqrt_poly(p: &Poly) -> Expr {
    if let Some(c) = p.as_constant() {
        return match c.sqrt() {
            Some(r) => Expr::number(r),
            None => Expr::atom(Atom::Sqrt(Box::new(p.clone()))),
        };
    }
    match p.rational_content() {
        Some(g) if !g.is_one() => {
            let inner = p.scale(&Number::from_rational(g.recip()));
            match Number::sqrt_of_rational(&g) {
                Some(outer) => Expr::number(outer) * Expr::atom(Atom::Sqrt(Box::new(inner))),
                None => Expr::atom(Atom::Sqrt(Box::new(p.clone()))),
            }
        }
        _ => Expr::atom(Atom::Sqrt(Box::new(p.clone()))),
    }
}

/// `acos(x) = π·p/q` for the standard angles.
fn special_acos(x: &Number) -> Option<(i64, i64)> {
    let half = BigRational::new(BigInt::one(), BigInt::from(2));
    let half_sqrt2 = Number::sqrt_of_rational(&half)?;
    let half_sqrt3 = Number::sqrt_of_rational(&BigRational::new(
        BigInt::from(3),
        BigInt::from(4),
    ))?;
    let table = [
        (Number::one(), (0, 1)),
        (-Number::one(), (1, 1)),
        (Number::zero(), (1, 2)),
        (Number::new(1, 2), (1, 3)),
        (Number::new(-1, 2), (2, 3)),
        (half_sqrt2.clone(), (1, 4)),
        (-half_sqrt2, (3, 4)),
        (half_sqrt3.clone(), (1, 6)),
        (-half_sqrt3, (5, 6)),
    ];
    table
        .into_iter()
        .find(|(v, _)| v == x)
        .map(|(_, angle)| angle)
}

// ── Arithmetic operators ────────────────────────────────────────────

impl<'a> Add<&'a Expr> for &'a Expr {
    type Output = Expr;

    fn add(self, rhs: &'a Expr) -> Expr {
        if self.den == rhs.den {
            return Expr::from_parts(self.num.add(&rhs.num), self.den.clone());
        }
        Expr::from_parts(
            self.num.mul(&rhs.den).add(&rhs.num.mul(&self.den)),
            self.den.mul(&rhs.den),
        )
    }
}

impl<'a> Sub<&'a Expr> for &'a Expr {
    type Output = Expr;

    fn sub(self, rhs: &'a Expr) -> Expr {
        self + &(-rhs)
    }
}

impl<'a> Mul<&'a Expr> for &'a Expr {
    type Output = Expr;

    fn mul(self, rhs: &'a Expr) -> Expr {
        Expr::from_parts(self.num.mul(&rhs.num), self.den.mul(&rhs.den))
    }
}

impl<'a> Div<&'a Expr> for &'a Expr {
    type Output = Expr;

    /// Panics on division by zero; see [`Expr::checked_div`].
    fn div(self, rhs: &'a Expr) -> Expr {
        match self.checked_div(rhs) {
            Some(q) => q,
            None => panic!("division by zero"),
        }
    }
}

impl Neg for &Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr {
            num: self.num.neg(),
            den: self.den.clone(),
        }
    }
}

macro_rules! forward_owned_binop {
    ($($trait:ident :: $method:ident),*) => {
        $(
            impl $trait for Expr {
                type Output = Expr;
                #[inline]
                fn $method(self, rhs: Expr) -> Expr {
                    (&self).$method(&rhs)
                }
            }

            impl<'a> $trait<&'a Expr> for Expr {
                type Output = Expr;
                #[inline]
                fn $method(self, rhs: &'a Expr) -> Expr {
                    (&self).$method(rhs)
                }
            }
        )*
    };
}

forward_owned_binop!(Add::add, Sub::sub, Mul::mul, Div::div);

impl Neg for Expr {
    type Output = Expr;

    #[inline]
    fn neg(self) -> Expr {
        -&self
    }
}

impl Zero for Expr {
    fn zero() -> Self {
        Expr {
            num: Poly::zero(),
            den: Poly::one(),
        }
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl One for Expr {
    fn one() -> Self {
        Expr::number(Number::one())
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        Expr::number(Number::from(n))
    }
}

impl From<Number> for Expr {
    fn from(n: Number) -> Self {
        Expr::number(n)
    }
}

impl From<&Symbol> for Expr {
    fn from(s: &Symbol) -> Self {
        Expr::symbol(s)
    }
}

impl From<Symbol> for Expr {
    fn from(s: Symbol) -> Self {
        Expr::atom(Atom::Symbol(s))
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            return write!(f, "{}", self.num);
        }
        if self.num.term_count() > 1 {
            write!(f, "({})", self.num)?;
        } else {
            write!(f, "{}", self.num)?;
        }
        if self.den.term_count() > 1 || leading_sign(&self.den) == Ordering::Less {
            write!(f, "/({})", self.den)
        } else {
            write!(f, "/{}", self.den)
        }
    }
}
