use std::fmt::{self, Write};

use smartstring::{LazyCompact, SmartString};

use crate::poly::{Polynomial, Term};

/// Options for printing polynomials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    /// The name of the variable.
    pub variable: SmartString<LazyCompact>,
    /// Put single spaces around the `+` and `-` between terms.
    pub spaced: bool,
}

impl PrintOptions {
    pub fn new() -> PrintOptions {
        PrintOptions {
            variable: SmartString::from("x"),
            spaced: true,
        }
    }

    pub fn with_variable(variable: &str) -> PrintOptions {
        PrintOptions {
            variable: SmartString::from(variable),
            ..PrintOptions::new()
        }
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Prints a single term. A term that is not the first one of a
/// polynomial is preceded by its separator.
pub struct TermPrinter<'a> {
    pub term: &'a Term,
    pub opts: &'a PrintOptions,
    pub first: bool,
}

impl<'a> fmt::Display for TermPrinter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let c = self.term.coefficient;
        let e = self.term.exponent;

        let sign = if c < 0. { '-' } else { '+' };
        if !self.first {
            if self.opts.spaced {
                f.write_char(' ')?;
            }
            f.write_char(sign)?;
            if self.opts.spaced {
                f.write_char(' ')?;
            }
        } else if sign == '-' {
            f.write_char('-')?;
        }

        let magnitude = c.abs();
        if magnitude != 1. || e == 0 {
            write!(f, "{}", magnitude)?;
        }

        if e != 0 {
            f.write_str(&self.opts.variable)?;
            if e != 1 {
                write!(f, "^{}", e)?;
            }
        }

        Ok(())
    }
}

/// Prints a polynomial in canonical form, highest exponent first.
pub struct PolynomialPrinter<'a> {
    pub poly: &'a Polynomial,
    pub opts: &'a PrintOptions,
}

impl<'a> PolynomialPrinter<'a> {
    pub fn new(poly: &'a Polynomial, opts: &'a PrintOptions) -> PolynomialPrinter<'a> {
        PolynomialPrinter { poly, opts }
    }
}

impl<'a> fmt::Display for PolynomialPrinter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.poly.is_zero() {
            return f.write_char('0');
        }

        for (i, term) in self.poly.terms().iter().enumerate() {
            write!(
                f,
                "{}",
                TermPrinter {
                    term,
                    opts: self.opts,
                    first: i == 0,
                }
            )?;
        }

        Ok(())
    }
}
