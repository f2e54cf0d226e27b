use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use log::{debug, trace};
use smallvec::SmallVec;

use crate::error::PolyError;
use crate::printer::{PolynomialPrinter, PrintOptions};

use super::{Coefficient, Exponent, Term, INLINED_TERMS};

/// A sparse polynomial in a single variable.
///
/// The terms are kept in canonical form: at most one term per exponent,
/// no zero coefficients, sorted by descending exponent. Every public
/// operation restores this form before it returns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polynomial {
    terms: SmallVec<[Term; INLINED_TERMS]>,
}

impl Polynomial {
    /// Constructs the zero polynomial.
    #[inline]
    pub fn zero() -> Polynomial {
        Polynomial {
            terms: SmallVec::new(),
        }
    }

    /// Constructs a constant polynomial.
    #[inline]
    pub fn constant(coeff: Coefficient) -> Polynomial {
        Polynomial::monomial(coeff, 0)
    }

    /// Constructs a polynomial with a single term.
    pub fn monomial(coeff: Coefficient, exponent: Exponent) -> Polynomial {
        let mut p = Polynomial::zero();
        p.insert_term(Term::new(coeff, exponent));
        p
    }

    /// Build a polynomial by inserting every term in turn. Terms with
    /// equal exponents are merged.
    pub fn from_terms<T: Into<Term>, I: IntoIterator<Item = T>>(terms: I) -> Polynomial {
        let mut p = Polynomial::zero();
        for t in terms {
            p.accumulate(t.into());
        }
        p.normalize();
        p
    }

    /// Insert a term, merging it into the term with the same exponent if
    /// there is one.
    pub fn insert_term(&mut self, term: Term) {
        self.accumulate(term);
        self.normalize();
    }

    /// Merge-or-append without restoring the canonical form. Callers must
    /// call [Self::normalize] once they are done accumulating.
    pub(crate) fn accumulate(&mut self, term: Term) {
        match self.terms.iter_mut().find(|t| t.exponent == term.exponent) {
            Some(t) => {
                let sum = t.add(&term);
                debug_assert!(sum.is_ok(), "merged terms with different exponents");
                if let Ok(sum) = sum {
                    *t = sum;
                }
            }
            None => self.terms.push(term),
        }
    }

    /// Sort the terms by descending exponent and drop all terms with a zero
    /// coefficient. The sort is stable.
    pub fn normalize(&mut self) {
        self.terms.sort_by(|a, b| b.exponent.cmp(&a.exponent));
        self.terms.retain(|t| !t.is_zero());
    }

    #[inline]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    #[inline]
    pub fn nterms(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.terms.iter().all(|t| t.is_zero())
    }

    /// Returns true if the polynomial has no term with a non-zero exponent.
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.terms.iter().all(|t| t.exponent == 0)
    }

    /// The highest exponent, or `None` for the zero polynomial.
    #[inline]
    pub fn degree(&self) -> Option<Exponent> {
        self.leading_term().map(|t| t.exponent)
    }

    #[inline]
    pub fn leading_term(&self) -> Option<Term> {
        self.terms.first().copied()
    }

    pub fn add(&self, other: &Polynomial) -> Polynomial {
        let mut res = self.clone();
        for t in &other.terms {
            res.accumulate(*t);
        }
        res.normalize();
        res
    }

    pub fn subtract(&self, other: &Polynomial) -> Polynomial {
        let mut res = self.clone();
        for t in &other.terms {
            res.accumulate(-*t);
        }
        res.normalize();
        res
    }

    pub fn multiply(&self, other: &Polynomial) -> Polynomial {
        let mut res = Polynomial::zero();
        for a in &self.terms {
            for b in &other.terms {
                res.accumulate(a.multiply(b));
            }
        }
        res.normalize();
        res
    }

    pub fn multiply_by_term(&self, term: &Term) -> Polynomial {
        let mut res = Polynomial::zero();
        for t in &self.terms {
            res.accumulate(t.multiply(term));
        }
        res.normalize();
        res
    }

    /// Divide every term by `term`. Exponents may become negative.
    pub fn divide_by_term(&self, term: &Term) -> Result<Polynomial, PolyError> {
        if term.is_zero() {
            return Err(PolyError::DivideByZero);
        }

        let mut res = Polynomial::zero();
        for t in &self.terms {
            res.accumulate(t.divide(term)?);
        }
        res.normalize();
        Ok(res)
    }

    /// Long division of `self` by `div`, returning the quotient and the
    /// remainder. Either the remainder is zero or its degree is strictly
    /// below the degree of `div`.
    pub fn divide(&self, div: &Polynomial) -> Result<(Polynomial, Polynomial), PolyError> {
        // both operands are canonical, so the leading term comes first
        let Some(lead) = div.leading_term().filter(|t| !t.is_zero()) else {
            return Err(PolyError::DivideByZeroPolynomial);
        };
        let tail = &div.terms[1..];

        let mut quot = Polynomial::zero();
        let mut rem = self.clone();

        while let Some(r) = rem.leading_term() {
            if r.exponent < lead.exponent {
                break;
            }

            let q = r.divide(&lead)?;
            trace!("{} / {} = {}", r, lead, q);
            quot.accumulate(q);

            // the leading term of the remainder cancels against lead * q, so it
            // is dropped instead of subtracted; all new terms have a lower exponent
            let mut next = Polynomial {
                terms: rem.terms[1..].iter().copied().collect(),
            };
            for t in tail {
                next.accumulate(-t.multiply(&q));
            }
            next.normalize();
            rem = next;
        }

        quot.normalize();
        debug!("({}) / ({}) = {} rem {}", self, div, quot, rem);
        Ok((quot, rem))
    }

    /// Compute the remainder of the division of `self` by `div`.
    pub fn rem(&self, div: &Polynomial) -> Result<Polynomial, PolyError> {
        Ok(self.divide(div)?.1)
    }

    /// Compute `self^pow`.
    pub fn pow(&self, mut pow: u32) -> Polynomial {
        if pow == 0 {
            return Polynomial::constant(1.);
        }

        let mut x = self.clone();
        let mut y = Polynomial::constant(1.);
        while pow != 1 {
            if pow % 2 == 1 {
                y = y.multiply(&x);
                pow -= 1;
            }

            x = x.multiply(&x);
            pow /= 2;
        }

        x.multiply(&y)
    }

    /// Evaluate the polynomial at `x`.
    pub fn evaluate(&self, x: Coefficient) -> Coefficient {
        self.terms
            .iter()
            .map(|t| {
                let p = match i32::try_from(t.exponent) {
                    Ok(e) => x.powi(e),
                    Err(_) => x.powf(t.exponent as Coefficient),
                };
                t.coefficient * p
            })
            .sum()
    }

    /// Write the polynomial as whitespace-separated `coefficient exponent`
    /// pairs, the format read by [crate::parser::parse_pairs].
    pub fn to_pairs(&self) -> String {
        self.terms
            .iter()
            .map(|t| format!("{} {}", t.coefficient, t.exponent))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            PolynomialPrinter::new(self, &PrintOptions::default())
        )
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Polynomial {
        Polynomial::from_terms(iter)
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl<'a, 'b> Add<&'a Polynomial> for &'b Polynomial {
    type Output = Polynomial;

    fn add(self, other: &'a Polynomial) -> Polynomial {
        Polynomial::add(self, other)
    }
}

impl<'a, 'b> Sub<&'a Polynomial> for &'b Polynomial {
    type Output = Polynomial;

    fn sub(self, other: &'a Polynomial) -> Polynomial {
        self.subtract(other)
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, other: Polynomial) -> Polynomial {
        self.subtract(&other)
    }
}

impl<'a, 'b> Mul<&'a Polynomial> for &'b Polynomial {
    type Output = Polynomial;

    fn mul(self, other: &'a Polynomial) -> Polynomial {
        self.multiply(other)
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, other: Polynomial) -> Polynomial {
        self.multiply(&other)
    }
}

impl<'a, 'b> Mul<&'a Term> for &'b Polynomial {
    type Output = Polynomial;

    fn mul(self, term: &'a Term) -> Polynomial {
        self.multiply_by_term(term)
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(mut self) -> Polynomial {
        for t in &mut self.terms {
            *t = -*t;
        }
        self
    }
}

impl<'a> Neg for &'a Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.clone().neg()
    }
}
