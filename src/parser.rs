//! Reading polynomials from text.
//!
//! Two formats are supported: whitespace-separated `coefficient exponent`
//! pairs, and the rendered form produced by [crate::printer], such as
//! `2x^3 - x + 1`.

use std::str::FromStr;

use log::debug;

use crate::error::PolyError;
use crate::poly::{Coefficient, Exponent, Polynomial, Term};

/// Parse whitespace-separated `coefficient exponent` pairs, for example
/// `2 2 1 0` for `2x^2 + 1`. A trailing token without an exponent is
/// ignored and an empty input yields the zero polynomial.
pub fn parse_pairs(input: &str) -> Result<Polynomial, PolyError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();

    let mut poly = Polynomial::zero();
    let mut pairs = tokens.chunks_exact(2);
    for pair in &mut pairs {
        let coefficient = parse_coefficient(pair[0])?;
        let exponent = parse_exponent(pair[1], false)?;
        poly.accumulate(Term::new(coefficient, exponent));
    }

    if let [t] = pairs.remainder() {
        debug!("Ignoring trailing token '{}' without exponent", t);
    }

    poly.normalize();
    debug!("Read {} from {} pairs", poly, tokens.len() / 2);
    Ok(poly)
}

/// Parse a polynomial in the rendered form, such as `-x^2 + 0.5x - 3` or
/// `2*t^-1 + t`, in the variable `variable`. Terms may repeat exponents and
/// appear in any order.
pub fn parse_rendered(input: &str, variable: &str) -> Result<Polynomial, PolyError> {
    let tokens = tokenize(input, variable)?;
    let mut parser = RenderedParser {
        input,
        tokens,
        index: 0,
    };

    let mut poly = Polynomial::zero();
    if parser.peek().is_none() {
        return Ok(poly);
    }

    let mut negative = match parser.peek() {
        Some(Token::Minus) => {
            parser.index += 1;
            true
        }
        Some(Token::Plus) => {
            parser.index += 1;
            false
        }
        _ => false,
    };

    loop {
        let term = parser.term()?;
        poly.accumulate(if negative { -term } else { term });

        match parser.next() {
            None => break,
            Some(Token::Plus) => negative = false,
            Some(Token::Minus) => negative = true,
            Some(_) => return Err(parser.unexpected(parser.index - 1)),
        }
    }

    poly.normalize();
    Ok(poly)
}

impl FromStr for Polynomial {
    type Err = PolyError;

    /// Parse the rendered form in the variable `x`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rendered(s, "x")
    }
}

fn parse_coefficient(token: &str) -> Result<Coefficient, PolyError> {
    match token.parse::<Coefficient>() {
        Ok(c) if c.is_finite() => Ok(c),
        _ => Err(PolyError::InvalidNumber(token.to_owned())),
    }
}

/// Exponents are read in the 32-bit range, so that the sum or difference of
/// two parsed exponents always fits in an [Exponent].
fn parse_exponent(token: &str, negative: bool) -> Result<Exponent, PolyError> {
    token
        .parse::<Exponent>()
        .ok()
        .map(|e| if negative { -e } else { e })
        .filter(|e| i32::try_from(*e).is_ok())
        .ok_or_else(|| PolyError::InvalidNumber(token.to_owned()))
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token<'a> {
    Number(&'a str),
    Variable,
    Plus,
    Minus,
    Star,
    Caret,
}

/// Split the input into tokens, each paired with its byte offset.
fn tokenize<'a>(input: &'a str, variable: &str) -> Result<Vec<(usize, Token<'a>)>, PolyError> {
    let is_digit = |c: char| c.is_ascii_digit() || c == '.';

    let mut tokens = vec![];
    let mut pos = 0;
    while let Some(c) = input[pos..].chars().next() {
        let len = match c {
            _ if c.is_whitespace() => c.len_utf8(),
            '+' | '-' | '*' | '^' => {
                let t = match c {
                    '+' => Token::Plus,
                    '-' => Token::Minus,
                    '*' => Token::Star,
                    _ => Token::Caret,
                };
                tokens.push((pos, t));
                1
            }
            _ if is_digit(c) => {
                let len = input[pos..]
                    .find(|c: char| !is_digit(c))
                    .unwrap_or(input.len() - pos);
                tokens.push((pos, Token::Number(&input[pos..pos + len])));
                len
            }
            _ if !variable.is_empty() && input[pos..].starts_with(variable) => {
                tokens.push((pos, Token::Variable));
                variable.len()
            }
            _ => return Err(PolyError::UnexpectedCharacter { pos, found: c }),
        };
        pos += len;
    }

    Ok(tokens)
}

struct RenderedParser<'a> {
    input: &'a str,
    tokens: Vec<(usize, Token<'a>)>,
    index: usize,
}

impl<'a> RenderedParser<'a> {
    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.index).map(|(_, t)| *t)
    }

    fn next(&mut self) -> Option<Token<'a>> {
        let t = self.peek();
        if t.is_some() {
            self.index += 1;
        }
        t
    }

    fn unexpected(&self, index: usize) -> PolyError {
        let Some((pos, _)) = self.tokens.get(index) else {
            return PolyError::UnexpectedEnd;
        };

        match self.input[*pos..].chars().next() {
            Some(found) => PolyError::UnexpectedCharacter { pos: *pos, found },
            None => PolyError::UnexpectedEnd,
        }
    }

    /// Parse `coef`, `coef var`, `coef*var` or `var`, each with an optional
    /// `^exponent` after the variable.
    fn term(&mut self) -> Result<Term, PolyError> {
        let coefficient = match self.peek() {
            Some(Token::Number(n)) => {
                self.index += 1;
                let c = parse_coefficient(n)?;

                match self.peek() {
                    Some(Token::Variable) => {}
                    Some(Token::Star) => {
                        self.index += 1;
                        if self.peek() != Some(Token::Variable) {
                            return Err(self.unexpected(self.index));
                        }
                    }
                    _ => return Ok(Term::constant(c)),
                }
                c
            }
            Some(Token::Variable) => 1.,
            _ => return Err(self.unexpected(self.index)),
        };

        // at the variable
        self.index += 1;
        if self.peek() != Some(Token::Caret) {
            return Ok(Term::new(coefficient, 1));
        }
        self.index += 1;

        let negative = match self.peek() {
            Some(Token::Minus) => {
                self.index += 1;
                true
            }
            _ => false,
        };

        match self.next() {
            Some(Token::Number(n)) => {
                let e = parse_exponent(n, negative)?;
                Ok(Term::new(coefficient, e))
            }
            Some(_) => Err(self.unexpected(self.index - 1)),
            None => Err(PolyError::UnexpectedEnd),
        }
    }
}
