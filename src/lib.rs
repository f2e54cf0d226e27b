//! Polyarith is a small engine for arithmetic on sparse polynomials in a
//! single variable.
//!
//! Polynomials are kept in canonical form: one term per exponent, no zero
//! coefficients, highest exponent first. They support addition, subtraction,
//! multiplication, division by a single term and long division with
//! remainder. Exponents may be negative.
//!
//! For example:
//!
//! ```
//! use polyarith::{parser::parse_pairs, poly::Term};
//!
//! let p = parse_pairs("2 2 1 0").unwrap(); // 2x^2 + 1
//! let q = parse_pairs("1 1 -1 0").unwrap(); // x - 1
//!
//! let (quot, rem) = p.divide(&q).unwrap();
//! assert_eq!(quot.to_string(), "2x + 2");
//! assert_eq!(rem.to_string(), "3");
//!
//! let r = p.divide_by_term(&Term::new(2., 2)).unwrap();
//! assert_eq!(r.to_string(), "1 + 0.5x^-2");
//! ```

pub mod error;
pub mod parser;
pub mod poly;
pub mod printer;

pub use error::PolyError;
pub use poly::{Polynomial, Term};
