use std::fmt;

use tracing::debug;

use crate::AlgebraError;
use crate::algebra::polynomial::Polynomial;
use crate::algebra::variable::VariablePower;
use crate::number::Rational;

/// A rational coefficient times a product of variable powers, e.g. `-3x^2y`.
///
/// The variables are always canonical: one entry per letter, no zero
/// exponents, sorted alphabetically. `degree` is the sum of the exponents
/// and is recomputed whenever the variables change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Monomial {
  coefficient: Rational,
  variables: Vec<VariablePower>,
  degree: Rational,
}

// ─── Construction ───────────────────────────────────────────────────

impl Monomial {
  /// A constant term with no variables.
  pub fn constant(coefficient: impl Into<Rational>) -> Self {
    Monomial {
      coefficient: coefficient.into(),
      variables: Vec::new(),
      degree: Rational::ZERO,
    }
  }

  /// `coefficient * letter`
  pub fn linear(coefficient: impl Into<Rational>, letter: char) -> Self {
    Self::with_exponent(coefficient, letter, Rational::ONE)
  }

  /// `coefficient * letter^exponent`
  pub fn with_exponent(
    coefficient: impl Into<Rational>,
    letter: char,
    exponent: impl Into<Rational>,
  ) -> Self {
    let variable = VariablePower::new(letter, exponent);
    if variable.exponent().is_zero() {
      return Self::constant(coefficient);
    }
    Monomial {
      coefficient: coefficient.into(),
      degree: variable.exponent(),
      variables: vec![variable],
    }
  }

  /// Any number of variable powers. Repeated letters are merged by adding
  /// their exponents, so `x * y * x^2` becomes `x^3y`. Fails only when an
  /// exponent or the degree overflows.
  pub fn with_variables<I>(
    coefficient: impl Into<Rational>,
    variables: I,
  ) -> Result<Self, AlgebraError>
  where
    I: IntoIterator<Item = VariablePower>,
  {
    let variables = canonical_variables(variables)?;
    Ok(Monomial {
      coefficient: coefficient.into(),
      degree: total_degree(&variables)?,
      variables,
    })
  }
}

/// Merges like letters, drops vanished letters and sorts alphabetically.
fn canonical_variables<I>(variables: I) -> Result<Vec<VariablePower>, AlgebraError>
where
  I: IntoIterator<Item = VariablePower>,
{
  let mut merged: Vec<VariablePower> = Vec::new();
  for variable in variables {
    match merged.iter_mut().find(|m| m.is_like(&variable)) {
      Some(existing) => {
        let exponent = existing.exponent().checked_add(variable.exponent())?;
        *existing = existing.with_exponent(exponent);
      }
      None => merged.push(variable),
    }
  }
  merged.retain(|v| !v.exponent().is_zero());
  merged.sort_by_key(|v| v.letter());
  Ok(merged)
}

fn total_degree(variables: &[VariablePower]) -> Result<Rational, AlgebraError> {
  variables
    .iter()
    .try_fold(Rational::ZERO, |sum, v| sum.checked_add(v.exponent()))
}

// ─── Properties ─────────────────────────────────────────────────────

impl Monomial {
  pub fn coefficient(&self) -> Rational {
    self.coefficient
  }

  pub fn variables(&self) -> &[VariablePower] {
    &self.variables
  }

  /// Total degree: the sum of all exponents, 0 for a constant.
  pub fn degree(&self) -> Rational {
    self.degree
  }

  pub fn is_constant(&self) -> bool {
    self.variables.is_empty()
  }

  /// Exponent of `letter`, 0 when the letter does not appear.
  pub fn exponent_of(&self, letter: char) -> Rational {
    self
      .variables
      .iter()
      .find(|v| v.letter() == letter)
      .map(|v| v.exponent())
      .unwrap_or(Rational::ZERO)
  }

  /// The variable part rendered on its own, e.g. `x^2y`. Like terms share
  /// the same string.
  pub fn variables_string(&self) -> String {
    self.variables.iter().map(|v| v.to_string()).collect()
  }

  /// Same letters at the same exponents, coefficients ignored.
  pub fn is_like_term(&self, other: &Monomial) -> bool {
    self.variables == other.variables
  }

  pub fn negate(&self) -> Monomial {
    self.with_coefficient(-self.coefficient)
  }

  pub(crate) fn scale(&self, factor: Rational) -> Result<Monomial, AlgebraError> {
    Ok(self.with_coefficient(self.coefficient.checked_mul(factor)?))
  }

  pub(crate) fn with_coefficient(&self, coefficient: Rational) -> Monomial {
    Monomial {
      coefficient,
      variables: self.variables.clone(),
      degree: self.degree,
    }
  }
}

// ─── Arithmetic ─────────────────────────────────────────────────────

impl Monomial {
  /// Sum as a polynomial. Like terms are combined; terms keep the order in
  /// which they were added.
  pub fn add(&self, others: &[Monomial]) -> Result<Polynomial, AlgebraError> {
    let mut sum = Polynomial::new([self.clone()]);
    for other in others {
      sum.add_monomial(other.clone())?;
    }
    Ok(sum)
  }

  /// Difference as a polynomial, see [`Monomial::add`].
  pub fn subtract(&self, others: &[Monomial]) -> Result<Polynomial, AlgebraError> {
    let mut difference = Polynomial::new([self.clone()]);
    for other in others {
      difference.add_monomial(other.negate())?;
    }
    Ok(difference)
  }

  /// Product of `self` and every monomial in `others`.
  pub fn multiply(&self, others: &[Monomial]) -> Result<Monomial, AlgebraError> {
    others
      .iter()
      .try_fold(self.clone(), |acc, other| acc.multiply_by(other))
  }

  pub(crate) fn multiply_by(&self, other: &Monomial) -> Result<Monomial, AlgebraError> {
    Monomial::with_variables(
      self.coefficient.checked_mul(other.coefficient)?,
      self.variables.iter().chain(&other.variables).cloned(),
    )
  }

  /// Quotient of `self` by every monomial in `others`, left to right.
  ///
  /// Shared letters subtract exponents and a letter that reaches exponent 0
  /// disappears. A divisor letter absent from the running quotient would
  /// need a new negative power and fails with
  /// [`AlgebraError::NonPolynomialQuotient`].
  pub fn divide(&self, others: &[Monomial]) -> Result<Monomial, AlgebraError> {
    others
      .iter()
      .try_fold(self.clone(), |acc, other| acc.divide_by(other))
  }

  fn divide_by(&self, other: &Monomial) -> Result<Monomial, AlgebraError> {
    let coefficient = self.coefficient.checked_div(other.coefficient)?;
    let mut variables = self.variables.clone();
    for divisor in &other.variables {
      match variables.iter_mut().find(|v| v.is_like(divisor)) {
        Some(v) => {
          *v = v.with_exponent(v.exponent().checked_sub(divisor.exponent())?)
        }
        None => {
          debug!(dividend = %self, divisor = %other, "non-polynomial quotient");
          return Err(AlgebraError::NonPolynomialQuotient {
            letter: divisor.letter(),
          });
        }
      }
    }
    Monomial::with_variables(coefficient, variables)
  }

  /// Greatest common factor of `self` and `others`: the coefficient gcf,
  /// times every letter common to all operands at its smallest exponent.
  pub fn gcf(&self, others: &[Monomial]) -> Result<Monomial, AlgebraError> {
    let coefficients: Vec<Rational> = std::iter::once(self)
      .chain(others)
      .map(|m| m.coefficient)
      .collect();

    let variables = self.variables.iter().filter_map(|variable| {
      others.iter().try_fold(variable.clone(), |common, other| {
        other.variables.iter().find_map(|v| common.gcf(v))
      })
    });

    Monomial::with_variables(Rational::gcf(&coefficients)?, variables)
  }
}

impl std::ops::Neg for &Monomial {
  type Output = Monomial;

  fn neg(self) -> Monomial {
    self.negate()
  }
}

// ─── Free functions ─────────────────────────────────────────────────

/// True when every adjacent pair is a like term. Vacuously true for fewer
/// than two monomials.
pub fn are_like_terms(monomials: &[Monomial]) -> bool {
  monomials.windows(2).all(|w| w[0].is_like_term(&w[1]))
}

/// The gcf of all monomials; the constant 0 for an empty slice.
pub fn monomial_gcf(monomials: &[Monomial]) -> Result<Monomial, AlgebraError> {
  match monomials.split_first() {
    Some((first, rest)) => first.gcf(rest),
    None => Ok(Monomial::constant(0)),
  }
}

/// First monomial of the given total degree.
pub fn monomial_by_degree(
  degree: Rational,
  monomials: &[Monomial],
) -> Option<&Monomial> {
  monomials.iter().find(|m| m.degree == degree)
}

pub fn contains_monomial(monomials: &[Monomial], monomial: &Monomial) -> bool {
  monomials.iter().any(|m| m == monomial)
}

// ─── Rendering ──────────────────────────────────────────────────────

impl Monomial {
  pub fn to_latex(&self) -> String {
    if self.is_constant() {
      return self.coefficient.to_latex();
    }
    let coefficient = if self.coefficient.is_one() {
      String::new()
    } else if self.coefficient == Rational::NEG_ONE {
      "-".to_string()
    } else {
      self.coefficient.to_latex()
    };
    let variables: String =
      self.variables.iter().map(|v| v.to_latex()).collect();
    format!("{}{}", coefficient, variables)
  }
}

impl fmt::Display for Monomial {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.is_constant() {
      return write!(f, "{}", self.coefficient);
    }
    let c = self.coefficient;
    if c.is_one() {
      // bare variables
    } else if c == Rational::NEG_ONE {
      write!(f, "-")?;
    } else if c.is_integer() {
      write!(f, "{}", c)?;
    } else if c.is_negative() {
      write!(f, "-({})", c.abs())?;
    } else {
      write!(f, "({})", c)?;
    }
    write!(f, "{}", self.variables_string())
  }
}
