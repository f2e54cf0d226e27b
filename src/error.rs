use thiserror::Error;

use crate::poly::Exponent;

/// Errors raised by term arithmetic, polynomial division and parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolyError {
    #[error("Cannot combine terms with exponents {left} and {right}")]
    ExponentMismatch { left: Exponent, right: Exponent },
    #[error("Cannot divide by a term with zero coefficient")]
    DivideByZero,
    #[error("Cannot divide by the zero polynomial")]
    DivideByZeroPolynomial,
    #[error("Invalid number '{0}'")]
    InvalidNumber(String),
    #[error("Unexpected character '{found}' at position {pos}")]
    UnexpectedCharacter { pos: usize, found: char },
    #[error("Unexpected end of input")]
    UnexpectedEnd,
}
