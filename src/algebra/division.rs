use tracing::debug;

use crate::AlgebraError;
use crate::algebra::monomial::Monomial;
use crate::algebra::polynomial::Polynomial;
use crate::number::Rational;

// ─── Synthetic division ─────────────────────────────────────────────

/// Highest dividend degree accepted by synthetic division. The recurrence
/// walks one dense coefficient per degree, so larger exponents are
/// rejected as [`AlgebraError::MalformedDividend`] instead of allocated.
pub const MAX_DIVIDEND_DEGREE: usize = 1 << 16;

/// Result of dividing by a linear binomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticDivision {
  pub quotient: Polynomial,
  pub remainder: Rational,
}

impl Polynomial {
  /// Quotient of `self` by the linear binomial `a·x + b`, remainder dropped.
  /// See [`Polynomial::synthetic_division`].
  pub fn divided_by(&self, divisor: &Polynomial) -> Result<Polynomial, AlgebraError> {
    Ok(self.synthetic_division(divisor)?.quotient)
  }

  /// Divides by `a·x + b` with the recurrence `next = c·previous + current`
  /// where `c = -b/a`, walking the coefficients from the highest degree
  /// down. Missing degrees count as zero coefficients.
  ///
  /// The divisor must be linear in a single letter and the dividend may use
  /// only that letter, at non-negative integer exponents no larger than
  /// [`MAX_DIVIDEND_DEGREE`].
  pub fn synthetic_division(
    &self,
    divisor: &Polynomial,
  ) -> Result<SyntheticDivision, AlgebraError> {
    let (letter, a, b) = linear_binomial(divisor)?;
    let root = (-b).checked_div(a)?;
    let coefficients = dense_coefficients(self, letter)?;

    let mut row = Vec::with_capacity(coefficients.len());
    let mut previous = Rational::ZERO;
    for &coefficient in &coefficients {
      previous = root.checked_mul(previous)?.checked_add(coefficient)?;
      row.push(previous);
    }
    let remainder = row.pop().unwrap_or(Rational::ZERO);
    debug!(%root, row = ?row, %remainder, "synthetic division");

    // The row divides by (x - c); scaling by 1/a turns it into a quotient
    // for (a·x + b).
    let quotient = row
      .iter()
      .enumerate()
      .map(|(i, &c)| {
        let exponent = i64::try_from(row.len() - 1 - i)
          .map_err(|_| AlgebraError::Overflow)?;
        Ok(Monomial::with_exponent(c.checked_div(a)?, letter, exponent))
      })
      .collect::<Result<Polynomial, AlgebraError>>()?
      .standard_form()?;

    Ok(SyntheticDivision {
      quotient,
      remainder,
    })
  }

  /// Divides every term by `divisor`.
  pub fn divide_by_monomial(
    &self,
    divisor: &Monomial,
  ) -> Result<Polynomial, AlgebraError> {
    self
      .monomials()
      .iter()
      .map(|m| m.divide(std::slice::from_ref(divisor)))
      .collect::<Result<Polynomial, AlgebraError>>()?
      .standard_form()
  }
}

/// `(letter, a, b)` for a divisor of the form `a·letter + b`, `a != 0`.
fn linear_binomial(
  divisor: &Polynomial,
) -> Result<(char, Rational, Rational), AlgebraError> {
  let divisor = divisor.standard_form()?;
  let letters = divisor.letters();
  if letters.len() != 1 || divisor.len() > 2 {
    return Err(AlgebraError::MalformedDivisor(format!(
      "expected a linear binomial in one variable, got {}",
      divisor
    )));
  }
  let letter = letters.into_iter().next().unwrap_or_default();

  let mut a = None;
  let mut b = Rational::ZERO;
  for term in divisor.monomials() {
    if term.is_constant() {
      b = term.coefficient();
    } else if term.exponent_of(letter) == Rational::ONE && term.variables().len() == 1 {
      a = Some(term.coefficient());
    } else {
      return Err(AlgebraError::MalformedDivisor(format!(
        "term {} is not of degree 1",
        term
      )));
    }
  }

  match a {
    Some(a) => Ok((letter, a, b)),
    None => Err(AlgebraError::MalformedDivisor(format!(
      "{} has no linear term",
      divisor
    ))),
  }
}

/// Coefficients from the highest degree down to the constant, with zero
/// for every degree that has no term.
fn dense_coefficients(
  dividend: &Polynomial,
  letter: char,
) -> Result<Vec<Rational>, AlgebraError> {
  let dividend = dividend.standard_form()?;
  if let Some(other) = dividend.letters().into_iter().find(|&l| l != letter) {
    return Err(AlgebraError::MalformedDividend(format!(
      "{} uses {} but the divisor is in {}",
      dividend, other, letter
    )));
  }

  let mut terms = Vec::with_capacity(dividend.len());
  for term in dividend.monomials() {
    let exponent = term.exponent_of(letter);
    if !exponent.is_integer() || exponent.is_negative() {
      return Err(AlgebraError::MalformedDividend(format!(
        "term {} does not have a non-negative integer exponent",
        term
      )));
    }
    let degree = usize::try_from(exponent.numer())
      .ok()
      .filter(|&degree| degree <= MAX_DIVIDEND_DEGREE)
      .ok_or_else(|| {
        AlgebraError::MalformedDividend(format!(
          "term {} exceeds the maximum degree {}",
          term, MAX_DIVIDEND_DEGREE
        ))
      })?;
    terms.push((degree, term.coefficient()));
  }

  let Some(top) = terms.iter().map(|&(e, _)| e).max() else {
    return Ok(Vec::new());
  };
  let mut coefficients = vec![Rational::ZERO; top + 1];
  for (exponent, coefficient) in terms {
    coefficients[top - exponent] = coefficient;
  }
  Ok(coefficients)
}
