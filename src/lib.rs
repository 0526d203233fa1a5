use pest_derive::Parser;
use thiserror::Error;

pub mod algebra;
pub mod latex;
pub mod number;
pub mod syntax;

pub use algebra::{
  Monomial, Polynomial, SyntheticDivision, VariablePower, are_like_terms,
  monomial_gcf,
};
pub use number::Rational;
pub use syntax::{parse_monomial, parse_polynomial, parse_rational};

#[derive(Parser)]
#[grammar = "algebra.pest"]
pub struct AlgebraParser;

#[derive(Error, Debug)]
pub enum AlgebraError {
  #[error("Parse error: {0}")]
  ParseError(#[from] Box<pest::error::Error<Rule>>),
  #[error("Empty input")]
  EmptyInput,
  #[error("Invalid number: {0}")]
  InvalidNumber(String),
  #[error("Division by zero")]
  DivisionByZero,
  #[error("Quotient is not a polynomial: divisor introduces {letter}")]
  NonPolynomialQuotient { letter: char },
  #[error("Malformed divisor: {0}")]
  MalformedDivisor(String),
  #[error("Malformed dividend: {0}")]
  MalformedDividend(String),
  #[error("Arithmetic overflow: value exceeds the 128-bit range")]
  Overflow,
}

/// Raw parse tree of a polynomial literal. The typed parsers in
/// [`syntax`] walk this same tree.
pub fn parse(
  input: &str,
) -> Result<pest::iterators::Pairs<'_, Rule>, AlgebraError> {
  syntax::parse_rule(Rule::Program, input)
}
