use core::cmp::Ordering;
use core::fmt;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::algebraic::RootOf;
use super::atom::{Atom, Monomial, Symbol};
use super::number::Number;

/// Polynomial in [`Atom`]s with exact [`Number`] coefficients.
///
/// Terms with zero coefficient are never stored, so the empty map is the
/// zero polynomial and structural equality is polynomial equality.
/// Products are reduced with `sqrt(p)² = p`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Poly {
    terms: BTreeMap<Monomial, Number>,
}

impl Poly {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn one() -> Self {
        Self::constant(Number::one())
    }

    pub fn constant(c: Number) -> Self {
        Self::term(Monomial::one(), c)
    }

    pub fn atom(atom: Atom) -> Self {
        Self::term(Monomial::atom(atom), Number::one())
    }

    pub fn term(m: Monomial, c: Number) -> Self {
        let mut p = Self::zero();
        p.push(m, c);
        p
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn is_one(&self) -> bool {
        self.as_constant().is_some_and(|c| c.is_one())
    }

    /// The value if the polynomial has no atoms.
    pub fn as_constant(&self) -> Option<Number> {
        match self.terms.len() {
            0 => Some(Number::zero()),
            1 => self.terms.get(&Monomial::one()).cloned(),
            _ => None,
        }
    }

    pub fn terms(&self) -> impl Iterator<Item = (&Monomial, &Number)> {
        self.terms.iter()
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    fn push(&mut self, m: Monomial, c: Number) {
        if c.is_zero() {
            return;
        }
        match self.terms.entry(m) {
            Entry::Vacant(e) => {
                e.insert(c);
            }
            Entry::Occupied(mut e) => {
                let sum = e.get() + &c;
                if sum.is_zero() {
                    e.remove();
                } else {
                    *e.get_mut() = sum;
                }
            }
        }
    }

    /// Push a product term, rewriting `sqrt(p)^e` as `p^(e/2)·sqrt(p)^(e%2)`
    /// and powers of an algebraic root at or above its degree through the
    /// root's defining polynomial.
    fn push_reduced(&mut self, m: Monomial, c: Number) {
        let rewrite = m.iter().find_map(|(a, e)| match a {
            Atom::Sqrt(p) if e >= 2 => Some((a.clone(), e % 2, e / 2, (**p).clone())),
            Atom::Root(r) if e as usize >= r.degree() => {
                Some((a.clone(), e - r.degree() as u32, 1, Poly::root_tail(r)))
            }
            _ => None,
        });
        match rewrite {
            None => self.push(m, c),
            Some((atom, keep, times, replacement)) => {
                let mut rest = m;
                rest.set_exponent(atom, keep);
                let mut factor = Poly::term(rest, c);
                for _ in 0..times {
                    factor = factor.mul(&replacement);
                }
                for (m, c) in factor.terms {
                    self.push(m, c);
                }
            }
        }
    }

    /// `λᵈ` written in lower powers of the root `λ`.
    fn root_tail(root: &RootOf) -> Poly {
        Poly::from_univariate(root, &root.reduction())
    }

    /// `Σ coeffs[i]·λⁱ` for an algebraic root `λ`.
    pub(crate) fn from_univariate(root: &RootOf, coeffs: &[BigRational]) -> Poly {
        let atom = Atom::Root(root.clone());
        let mut out = Poly::zero();
        for (i, c) in coeffs.iter().enumerate() {
            let mut m = Monomial::one();
            m.set_exponent(atom.clone(), i as u32);
            out.push_reduced(m, Number::from_rational(c.clone()));
        }
        out
    }

    /// Rational coefficients of `self` as a polynomial in `root` alone.
    pub(crate) fn as_univariate(&self, root: &RootOf) -> Option<Vec<BigRational>> {
        let atom = Atom::Root(root.clone());
        let mut out = Vec::new();
        for (m, c) in &self.terms {
            let e = m.exponent(&atom);
            if m.degree() != e {
                return None;
            }
            let e = e as usize;
            if out.len() <= e {
                out.resize(e + 1, BigRational::zero());
            }
            out[e] += c.as_rational()?;
        }
        Some(out)
    }

    /// First square root or algebraic root occurring in a term.
    pub(crate) fn first_radical(&self) -> Option<Atom> {
        self.terms.keys().find_map(|m| {
            m.iter()
                .map(|(a, _)| a)
                .find(|a| matches!(a, Atom::Sqrt(_) | Atom::Root(_)))
                .cloned()
        })
    }

    /// `(u, v)` with `self = u + v·atom` and neither part involving `atom`.
    pub(crate) fn split_linear(&self, atom: &Atom) -> Option<(Poly, Poly)> {
        let mut u = Poly::zero();
        let mut v = Poly::zero();
        for (m, c) in &self.terms {
            match m.exponent(atom) {
                0 => u.push(m.clone(), c.clone()),
                1 => {
                    let mut rest = m.clone();
                    rest.set_exponent(atom.clone(), 0);
                    v.push(rest, c.clone());
                }
                _ => return None,
            }
        }
        Some((u, v))
    }

    pub fn add(&self, rhs: &Poly) -> Poly {
        let mut out = self.clone();
        for (m, c) in &rhs.terms {
            out.push(m.clone(), c.clone());
        }
        out
    }

    pub fn sub(&self, rhs: &Poly) -> Poly {
        let mut out = self.clone();
        for (m, c) in &rhs.terms {
            out.push(m.clone(), -c);
        }
        out
    }

    pub fn neg(&self) -> Poly {
        Poly {
            terms: self.terms.iter().map(|(m, c)| (m.clone(), -c)).collect(),
        }
    }

    pub fn scale(&self, k: &Number) -> Poly {
        let mut out = Poly::zero();
        for (m, c) in &self.terms {
            out.push(m.clone(), c * k);
        }
        out
    }

    pub fn mul(&self, rhs: &Poly) -> Poly {
        let mut out = Poly::zero();
        for (ma, ca) in &self.terms {
            for (mb, cb) in &rhs.terms {
                out.push_reduced(ma.mul(mb), ca * cb);
            }
        }
        out
    }

    /// Product in the free polynomial ring, treating every atom as an
    /// independent variable.
    fn mul_free(&self, rhs: &Poly) -> Poly {
        let mut out = Poly::zero();
        for (ma, ca) in &self.terms {
            for (mb, cb) in &rhs.terms {
                out.push(ma.mul(mb), ca * cb);
            }
        }
        out
    }

    /// Leading term under the graded lexicographic order.
    pub fn leading_term(&self) -> Option<(&Monomial, &Number)> {
        self.terms.iter().max_by(|a, b| a.0.grlex_cmp(b.0))
    }

    /// `self / d` when `d` divides `self` exactly.
    pub fn div_exact(&self, d: &Poly) -> Option<Poly> {
        let (lm, lc) = d.leading_term()?;
        let lc_inv = lc.recip()?;
        let mut rem = self.clone();
        let mut quot = Poly::zero();
        while let Some((m, c)) = rem.leading_term() {
            let t = Poly::term(m.checked_div(lm)?, c * &lc_inv);
            rem = rem.sub(&t.mul_free(d));
            quot = quot.add(&t);
        }
        Some(quot)
    }

    /// Exact square root with a positive leading coefficient, when `self` is
    /// the square of a polynomial.
    ///
    /// Terms are peeled off in graded lexicographic order: each step divides
    /// the leading term of the remainder by twice the leading term of the root.
    pub fn sqrt_exact(&self) -> Option<Poly> {
        let Some((lm, lc)) = self.leading_term() else {
            return Some(Poly::zero());
        };
        let root_m = lm.halve()?;
        let root_c = lc.sqrt()?;
        let twice_inv = (&root_c + &root_c).recip()?;
        let mut root = Poly::term(root_m.clone(), root_c);
        let mut last = root_m.clone();
        loop {
            let rem = self.sub(&root.mul(&root));
            let Some((m, c)) = rem.leading_term() else {
                return Some(root);
            };
            let next = m.checked_div(&root_m)?;
            if next.grlex_cmp(&last) != Ordering::Less {
                return None;
            }
            root = root.add(&Poly::term(next.clone(), c * &twice_inv));
            last = next;
        }
    }

    /// Greatest monomial dividing every term.
    pub fn monomial_content(&self) -> Monomial {
        let mut it = self.terms.keys();
        let Some(first) = it.next() else {
            return Monomial::one();
        };
        it.fold(first.clone(), |g, m| g.gcd(m))
    }

    /// Divide every term by `m`; terms it does not divide are kept as-is.
    pub fn div_monomial(&self, m: &Monomial) -> Poly {
        let mut out = Poly::zero();
        for (tm, c) in &self.terms {
            out.push(tm.checked_div(m).unwrap_or_else(|| tm.clone()), c.clone());
        }
        out
    }

    /// Positive rational `g` such that `self / g` has coprime integer
    /// coefficients; `None` if a coefficient is irrational.
    pub fn rational_content(&self) -> Option<BigRational> {
        let mut num = BigInt::zero();
        let mut den = BigInt::one();
        for c in self.terms.values() {
            let q = c.as_rational()?;
            num = num.gcd(q.numer());
            den = den.lcm(q.denom());
        }
        if num.is_zero() {
            return None;
        }
        Some(BigRational::new(num, den))
    }

    pub fn has_symbols(&self) -> bool {
        self.terms.keys().any(Monomial::has_symbols)
    }

    pub(crate) fn collect_symbols(&self, out: &mut BTreeSet<Symbol>) {
        for m in self.terms.keys() {
            for (a, _) in m.iter() {
                a.collect_symbols(out);
            }
        }
    }

    pub fn to_f64(&self) -> Option<f64> {
        let mut acc = 0.0;
        for (m, c) in &self.terms {
            acc += c.to_f64() * m.to_f64()?;
        }
        Some(acc)
    }

    /// Terms in descending graded lexicographic order.
    fn sorted_terms(&self) -> Vec<(&Monomial, &Number)> {
        let mut v: Vec<_> = self.terms.iter().collect();
        v.sort_by(|a, b| b.0.grlex_cmp(a.0));
        v
    }
}

impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        for (i, (m, c)) in self.sorted_terms().into_iter().enumerate() {
            let negative = c.term_count() == 1 && c.is_negative();
            let magnitude = if negative { -c } else { c.clone() };
            let body = if m.is_one() {
                format!("{}", magnitude)
            } else if magnitude.is_one() {
                format!("{}", m)
            } else if magnitude.term_count() == 1 {
                format!("{}*{}", magnitude, m)
            } else {
                format!("({})*{}", magnitude, m)
            };
            match (i, negative) {
                (0, true) => write!(f, "-{}", body)?,
                (0, false) => write!(f, "{}", body)?,
                (_, true) => write!(f, " - {}", body)?,
                (_, false) => write!(f, " + {}", body)?,
            }
        }
        Ok(())
    }
}

/// Sign of the leading coefficient, used to keep radicands canonical.
pub(crate) fn leading_sign(p: &Poly) -> Ordering {
    p.leading_term()
        .map_or(Ordering::Equal, |(_, c)| c.signum())
}
