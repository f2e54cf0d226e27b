pub mod polynomial;
pub mod term;

pub use self::polynomial::Polynomial;
pub use self::term::Term;

/// The exponent of a term. Exponents are signed, as dividing by a term
/// can produce negative powers.
pub type Exponent = i64;

/// The coefficient of a term.
pub type Coefficient = f64;

/// The number of terms a polynomial stores inline before it allocates.
pub const INLINED_TERMS: usize = 8;
