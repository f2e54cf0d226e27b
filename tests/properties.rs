//! Property-based tests for polynomial arithmetic.

use proptest::prelude::*;

use polyarith::{parser::parse_pairs, PolyError, Polynomial, Term};

// integer and quarter coefficients keep sums and products exact
fn small_coeff() -> impl Strategy<Value = f64> {
    (-36i32..=36).prop_map(|n| n as f64 / 4.)
}

fn small_term() -> impl Strategy<Value = Term> {
    (small_coeff(), -3i64..6).prop_map(|(c, e)| Term::new(c, e))
}

fn small_poly() -> impl Strategy<Value = Polynomial> {
    proptest::collection::vec(small_term(), 0..6).prop_map(|terms| Polynomial::from_terms(terms))
}

fn integer_poly() -> impl Strategy<Value = Polynomial> {
    proptest::collection::vec(((-9i32..=9), -3i64..6), 0..6).prop_map(|terms| {
        Polynomial::from_terms(terms.into_iter().map(|(c, e)| Term::new(c as f64, e)))
    })
}

/// A divisor with leading coefficient 1 or -1, so that long division stays
/// in the integers.
fn unit_lead_poly() -> impl Strategy<Value = Polynomial> {
    (
        0i64..4,
        prop::bool::ANY,
        proptest::collection::vec(((-9i32..=9), 1i64..4), 0..3),
    )
        .prop_map(|(d, negative, tail)| {
            let lead = Term::new(if negative { -1. } else { 1. }, d);
            Polynomial::from_terms(
                std::iter::once(lead)
                    .chain(tail.into_iter().map(|(c, k)| Term::new(c as f64, d - k))),
            )
        })
}

fn nonzero_poly() -> impl Strategy<Value = Polynomial> {
    small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
}

fn is_canonical(p: &Polynomial) -> bool {
    p.terms().iter().all(|t| t.coefficient != 0.)
        && p.terms().windows(2).all(|w| w[0].exponent > w[1].exponent)
}

proptest! {
    #[test]
    fn results_are_canonical(a in small_poly(), b in small_poly(), t in small_term()) {
        prop_assert!(is_canonical(&a));
        prop_assert!(is_canonical(&a.add(&b)));
        prop_assert!(is_canonical(&a.subtract(&b)));
        prop_assert!(is_canonical(&a.multiply(&b)));
        prop_assert!(is_canonical(&a.multiply_by_term(&t)));
        if !t.is_zero() {
            prop_assert!(is_canonical(&a.divide_by_term(&t).unwrap()));
        }
        if !b.is_zero() {
            let (quot, rem) = a.divide(&b).unwrap();
            prop_assert!(is_canonical(&quot));
            prop_assert!(is_canonical(&rem));
        }
    }

    #[test]
    fn insertion_order_is_irrelevant(terms in proptest::collection::vec(small_term(), 0..8)) {
        let forward = Polynomial::from_terms(terms.iter().copied());
        let backward = Polynomial::from_terms(terms.iter().rev().copied());
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn additive_identity(a in small_poly()) {
        let zero = Polynomial::zero();
        prop_assert_eq!(a.add(&zero), a.clone());
        prop_assert_eq!(zero.add(&a), a);
    }

    #[test]
    fn additive_inverse(a in small_poly()) {
        prop_assert!(a.subtract(&a).is_zero());
    }

    #[test]
    fn add_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(a.add(&b), b.add(&a));
    }

    #[test]
    fn mul_commutative(a in integer_poly(), b in integer_poly()) {
        prop_assert_eq!(a.multiply(&b), b.multiply(&a));
    }

    #[test]
    fn mul_by_term_matches_mul(a in small_poly(), t in small_term()) {
        prop_assert_eq!(a.multiply_by_term(&t), a.multiply(&Polynomial::from_terms([t])));
    }

    #[test]
    fn division_identity_exact(a in integer_poly(), b in unit_lead_poly()) {
        let (quot, rem) = a.divide(&b).unwrap();
        prop_assert_eq!(b.multiply(&quot).add(&rem), a);
        if let Some(d) = rem.degree() {
            prop_assert!(d < b.degree().unwrap());
        }
    }

    #[test]
    fn division_identity(a in small_poly(), b in nonzero_poly()) {
        let (quot, rem) = a.divide(&b).unwrap();
        let product = b.multiply(&quot);

        let max_abs = |p: &Polynomial| {
            p.terms().iter().map(|t| t.coefficient.abs()).fold(0., f64::max)
        };
        let b_norm: f64 = b.terms().iter().map(|t| t.coefficient.abs()).sum();
        let scale = 1. + max_abs(&a) + b_norm * max_abs(&quot);
        let diff = product.add(&rem).subtract(&a);
        for t in diff.terms() {
            prop_assert!(t.coefficient.abs() <= 1e-9 * scale, "{} in {}", t, diff);
        }

        if let Some(d) = rem.degree() {
            prop_assert!(d < b.degree().unwrap());
        }
    }

    #[test]
    fn division_by_zero_polynomial(a in small_poly()) {
        prop_assert_eq!(a.divide(&Polynomial::zero()), Err(PolyError::DivideByZeroPolynomial));
    }

    #[test]
    fn rendered_round_trip(a in small_poly()) {
        let text = a.to_string();
        let b: Polynomial = text.parse().unwrap();
        prop_assert_eq!(b.to_string(), text);
        prop_assert_eq!(b, a);
    }

    #[test]
    fn pairs_round_trip(a in small_poly()) {
        prop_assert_eq!(parse_pairs(&a.to_pairs()).unwrap(), a);
    }
}
