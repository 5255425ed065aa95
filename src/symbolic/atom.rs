use core::cmp::Ordering;
use core::fmt;
use std::collections::{BTreeMap, BTreeSet};

use super::algebraic::RootOf;
use super::expr::Expr;
use super::poly::Poly;

/// A named real-valued indeterminate.
///
/// Symbols carry no global state: two symbols are the same unknown exactly
/// when their names are equal.
///
/// ```
/// use symspectra::symbolic::Symbol;
/// let x = Symbol::new("x");
/// assert_eq!(x.name(), "x");
/// assert_eq!(x, Symbol::new("x"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    name: String,
}

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Generator of the polynomial ring an [`Expr`] lives in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Atom {
    Symbol(Symbol),
    /// The constant π.
    Pi,
    /// Square root of a polynomial that has no closed form in [`super::Number`].
    Sqrt(Box<Poly>),
    /// Arc cosine with no tabulated value.
    Acos(Box<Expr>),
    /// Real root of an irreducible integer polynomial.
    Root(RootOf),
}

impl Atom {
    /// Whether a free symbol occurs in the atom.
    pub fn has_symbols(&self) -> bool {
        match self {
            Atom::Symbol(_) => true,
            Atom::Pi => false,
            Atom::Sqrt(p) => p.has_symbols(),
            Atom::Acos(e) => !e.is_numeric(),
            Atom::Root(_) => false,
        }
    }

    pub(crate) fn collect_symbols(&self, out: &mut BTreeSet<Symbol>) {
        match self {
            Atom::Symbol(s) => {
                out.insert(s.clone());
            }
            Atom::Pi | Atom::Root(_) => {}
            Atom::Sqrt(p) => p.collect_symbols(out),
            Atom::Acos(e) => out.extend(e.free_symbols()),
        }
    }

    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Atom::Symbol(_) => None,
            Atom::Pi => Some(core::f64::consts::PI),
            Atom::Sqrt(p) => p.to_f64().map(f64::sqrt),
            Atom::Acos(e) => e.to_f64().map(f64::acos),
            Atom::Root(r) => Some(r.to_f64()),
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Symbol(s) => write!(f, "{}", s),
            Atom::Pi => write!(f, "pi"),
            Atom::Sqrt(p) => write!(f, "sqrt({})", p),
            Atom::Acos(e) => write!(f, "acos({})", e),
            Atom::Root(r) => write!(f, "{}", r),
        }
    }
}

/// Power product of atoms with positive exponents.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Monomial(BTreeMap<Atom, u32>);

impl Monomial {
    /// The empty product.
    pub fn one() -> Self {
        Self::default()
    }

    pub fn atom(atom: Atom) -> Self {
        let mut m = BTreeMap::new();
        m.insert(atom, 1);
        Self(m)
    }

    pub fn is_one(&self) -> bool {
        self.0.is_empty()
    }

    pub fn degree(&self) -> u32 {
        self.0.values().sum()
    }

    pub fn exponent(&self, atom: &Atom) -> u32 {
        self.0.get(atom).copied().unwrap_or(0)
    }

    pub(crate) fn set_exponent(&mut self, atom: Atom, e: u32) {
        if e == 0 {
            self.0.remove(&atom);
        } else {
            self.0.insert(atom, e);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Atom, u32)> {
        self.0.iter().map(|(a, &e)| (a, e))
    }

    pub fn mul(&self, rhs: &Monomial) -> Monomial {
        let mut out = self.0.clone();
        for (a, e) in &rhs.0 {
            *out.entry(a.clone()).or_insert(0) += e;
        }
        Monomial(out)
    }

    /// `self / rhs` when every exponent of `rhs` fits.
    pub fn checked_div(&self, rhs: &Monomial) -> Option<Monomial> {
        let mut out = self.0.clone();
        for (a, &e) in &rhs.0 {
            let have = out.get(a).copied().unwrap_or(0);
            if have < e {
                return None;
            }
            if have == e {
                out.remove(a);
            } else {
                out.insert(a.clone(), have - e);
            }
        }
        Some(Monomial(out))
    }

    /// Square root of the monomial, when every exponent is even.
    pub fn halve(&self) -> Option<Monomial> {
        self.0
            .iter()
            .map(|(a, &e)| (e % 2 == 0).then(|| (a.clone(), e / 2)))
            .collect::<Option<BTreeMap<_, _>>>()
            .map(Monomial)
    }

    /// Largest common divisor.
    pub fn gcd(&self, rhs: &Monomial) -> Monomial {
        Monomial(
            self.0
                .iter()
                .filter_map(|(a, &e)| {
                    let other = rhs.exponent(a);
                    (other > 0).then(|| (a.clone(), e.min(other)))
                })
                .collect(),
        )
    }

    /// Graded lexicographic order: total degree first, then the exponent of
    /// the first atom (in atom order) where the two differ.
    pub fn grlex_cmp(&self, rhs: &Monomial) -> Ordering {
        self.degree().cmp(&rhs.degree()).then_with(|| {
            let atoms: BTreeSet<&Atom> = self.0.keys().chain(rhs.0.keys()).collect();
            for a in atoms {
                match self.exponent(a).cmp(&rhs.exponent(a)) {
                    Ordering::Equal => continue,
                    ord => return ord,
                }
            }
            Ordering::Equal
        })
    }

    pub fn has_symbols(&self) -> bool {
        self.0.keys().any(Atom::has_symbols)
    }

    pub fn to_f64(&self) -> Option<f64> {
        let mut acc = 1.0;
        for (a, &e) in &self.0 {
            acc *= a.to_f64()?.powi(e as i32);
        }
        Some(acc)
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_one() {
            return write!(f, "1");
        }
        for (i, (a, &e)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "*")?;
            }
            if e == 1 {
                write!(f, "{}", a)?;
            } else {
                write!(f, "{}**{}", a, e)?;
            }
        }
        Ok(())
    }
}
