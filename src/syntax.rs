use pest::Parser;
use pest::iterators::{Pair, Pairs};

use crate::algebra::{Monomial, Polynomial, VariablePower};
use crate::number::Rational;
use crate::{AlgebraError, AlgebraParser, Rule};

/// Parses a polynomial literal such as `3x^2 - 9x + 14` into a raw
/// (not yet standardized) [`Polynomial`], terms in source order.
pub fn parse_polynomial(input: &str) -> Result<Polynomial, AlgebraError> {
  let program = crate::parse(input)?
    .next()
    .ok_or(AlgebraError::EmptyInput)?;
  program
    .into_inner()
    .find(|node| node.as_rule() == Rule::Polynomial)
    .map(pair_to_polynomial)
    .unwrap_or_else(|| Ok(Polynomial::zero()))
}

/// Parses a single term such as `-7xy^2` or `1/2x^3`.
pub fn parse_monomial(input: &str) -> Result<Monomial, AlgebraError> {
  let program = top_level(Rule::MonomialProgram, input)?;
  let mut negative = false;
  for node in program.into_inner() {
    match node.as_rule() {
      Rule::Sign => negative = node.as_str() == "-",
      Rule::Term => return pair_to_monomial(node, negative),
      _ => {} // EOI
    }
  }
  Err(AlgebraError::EmptyInput)
}

/// Parses a signed rational literal such as `-3/4` or `0.25`.
pub fn parse_rational(input: &str) -> Result<Rational, AlgebraError> {
  let program = top_level(Rule::RationalProgram, input)?;
  signed_number(program)
}

/// Runs the grammar from `rule`. Blank input is [`AlgebraError::EmptyInput`]
/// rather than a pest error.
pub(crate) fn parse_rule(
  rule: Rule,
  input: &str,
) -> Result<Pairs<'_, Rule>, AlgebraError> {
  if input.trim().is_empty() {
    return Err(AlgebraError::EmptyInput);
  }
  Ok(AlgebraParser::parse(rule, input).map_err(Box::new)?)
}

fn top_level(rule: Rule, input: &str) -> Result<Pair<'_, Rule>, AlgebraError> {
  parse_rule(rule, input)?
    .next()
    .ok_or(AlgebraError::EmptyInput)
}

fn pair_to_polynomial(pair: Pair<Rule>) -> Result<Polynomial, AlgebraError> {
  let mut negative = false;
  let mut monomials = Vec::new();
  for node in pair.into_inner() {
    match node.as_rule() {
      Rule::Sign => negative = node.as_str() == "-",
      Rule::Term => {
        monomials.push(pair_to_monomial(node, negative)?);
        negative = false;
      }
      _ => {}
    }
  }
  Ok(Polynomial::new(monomials))
}

fn pair_to_monomial(
  pair: Pair<Rule>,
  negative: bool,
) -> Result<Monomial, AlgebraError> {
  let mut coefficient = Rational::ONE;
  let mut variables = Vec::new();
  for node in pair.into_inner() {
    match node.as_rule() {
      Rule::Coefficient => coefficient = signed_number(node)?,
      Rule::Variable => variables.push(pair_to_variable(node)?),
      _ => {}
    }
  }
  if negative {
    coefficient = -coefficient;
  }
  Monomial::with_variables(coefficient, variables)
}

fn pair_to_variable(pair: Pair<Rule>) -> Result<VariablePower, AlgebraError> {
  let mut letter = None;
  let mut exponent = Rational::ONE;
  for node in pair.into_inner() {
    match node.as_rule() {
      Rule::Letter => letter = node.as_str().chars().next(),
      Rule::Exponent => exponent = signed_number(node)?,
      _ => {}
    }
  }
  let letter = letter.ok_or(AlgebraError::EmptyInput)?;
  Ok(VariablePower::new(letter, exponent))
}

/// Value of a pair holding an optional `Sign` and a `Number`/`Decimal`.
fn signed_number(pair: Pair<Rule>) -> Result<Rational, AlgebraError> {
  let mut negative = false;
  let mut value = Rational::ONE;
  for node in pair.into_inner() {
    match node.as_rule() {
      Rule::Sign => negative = node.as_str() == "-",
      Rule::Number | Rule::Decimal => value = node.as_str().parse()?,
      _ => {}
    }
  }
  Ok(if negative { -value } else { value })
}
