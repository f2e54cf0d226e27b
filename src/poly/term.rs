use std::fmt;
use std::ops::Neg;

use crate::error::PolyError;
use crate::printer::{PrintOptions, TermPrinter};

use super::{Coefficient, Exponent};

/// A single term `coefficient * x^exponent`.
///
/// A standalone term may have a zero coefficient; only a [Polynomial](super::Polynomial)
/// prunes those.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub coefficient: Coefficient,
    pub exponent: Exponent,
}

impl Term {
    #[inline]
    pub fn new(coefficient: Coefficient, exponent: Exponent) -> Term {
        Term {
            coefficient,
            exponent,
        }
    }

    /// A term without a variable.
    #[inline]
    pub fn constant(coefficient: Coefficient) -> Term {
        Term::new(coefficient, 0)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficient == 0.
    }

    /// Add two terms with the same exponent.
    pub fn add(&self, other: &Term) -> Result<Term, PolyError> {
        self.check_exponent(other)?;
        Ok(Term::new(self.coefficient + other.coefficient, self.exponent))
    }

    /// Subtract two terms with the same exponent.
    pub fn subtract(&self, other: &Term) -> Result<Term, PolyError> {
        self.check_exponent(other)?;
        Ok(Term::new(self.coefficient - other.coefficient, self.exponent))
    }

    #[inline]
    pub fn multiply(&self, other: &Term) -> Term {
        Term::new(
            self.coefficient * other.coefficient,
            self.exponent + other.exponent,
        )
    }

    /// Divide by `other`, subtracting its exponent. Only the coefficient of
    /// the divisor is checked.
    pub fn divide(&self, other: &Term) -> Result<Term, PolyError> {
        if other.is_zero() {
            return Err(PolyError::DivideByZero);
        }

        Ok(Term::new(
            self.coefficient / other.coefficient,
            self.exponent - other.exponent,
        ))
    }

    fn check_exponent(&self, other: &Term) -> Result<(), PolyError> {
        if self.exponent != other.exponent {
            return Err(PolyError::ExponentMismatch {
                left: self.exponent,
                right: other.exponent,
            });
        }
        Ok(())
    }
}

impl Neg for Term {
    type Output = Term;

    #[inline]
    fn neg(self) -> Term {
        Term::new(-self.coefficient, self.exponent)
    }
}

impl From<(Coefficient, Exponent)> for Term {
    fn from((coefficient, exponent): (Coefficient, Exponent)) -> Term {
        Term::new(coefficient, exponent)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            TermPrinter {
                term: self,
                opts: &PrintOptions::default(),
                first: true,
            }
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn add_same_exponent() {
        let a = Term::new(3., 2);
        let b = Term::new(-1.5, 2);
        assert_eq!(a.add(&b), Ok(Term::new(1.5, 2)));
        assert_eq!(a.subtract(&b), Ok(Term::new(4.5, 2)));
    }

    #[test]
    fn add_exponent_mismatch() {
        let a = Term::new(3., 2);
        let b = Term::new(1., 3);
        assert_eq!(
            a.add(&b),
            Err(PolyError::ExponentMismatch { left: 2, right: 3 })
        );
        assert_eq!(
            b.subtract(&a),
            Err(PolyError::ExponentMismatch { left: 3, right: 2 })
        );
    }

    #[test]
    fn multiply() {
        let a = Term::new(3., 2);
        let b = Term::new(-2., -5);
        assert_eq!(a.multiply(&b), Term::new(-6., -3));
        assert_eq!(b.multiply(&a), Term::new(-6., -3));
    }

    #[test]
    fn divide() {
        let a = Term::new(4., 6);
        let b = Term::new(2., 6);
        assert_eq!(a.divide(&b), Ok(Term::new(2., 0)));
        assert_eq!(
            Term::new(2., 3).divide(&b),
            Ok(Term::new(1., -3))
        );
    }

    #[test]
    fn divide_by_zero_coefficient() {
        let a = Term::new(4., 6);
        // the exponent of the divisor is irrelevant
        assert_eq!(a.divide(&Term::new(0., 2)), Err(PolyError::DivideByZero));
        assert_eq!(a.divide(&Term::constant(-0.)), Err(PolyError::DivideByZero));
    }

    #[test]
    fn zero_term_is_legal() {
        let z = Term::new(0., 4);
        assert!(z.is_zero());
        assert_eq!(z.multiply(&Term::new(5., 1)), Term::new(0., 5));
    }

    #[test]
    fn display() {
        assert_eq!(Term::new(2., 6).to_string(), "2x^6");
        assert_eq!(Term::new(-1., 1).to_string(), "-x");
        assert_eq!(Term::new(1., 0).to_string(), "1");
        assert_eq!(Term::new(0.5, -3).to_string(), "0.5x^-3");
        assert_eq!((-Term::new(1., 0)).to_string(), "-1");
    }
}
