use std::fmt;

use crate::latex::wrap_in_parentheses;
use crate::number::Rational;

/// A single letter raised to a rational exponent, e.g. `x^2` or `y^(1/2)`.
///
/// Exponent 0 means the letter does not appear; negative exponents arise
/// from division.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariablePower {
  letter: char,
  exponent: Rational,
}

impl VariablePower {
  pub fn new(letter: char, exponent: impl Into<Rational>) -> Self {
    VariablePower {
      letter,
      exponent: exponent.into(),
    }
  }

  /// The letter to the first power.
  pub fn linear(letter: char) -> Self {
    Self::new(letter, Rational::ONE)
  }

  pub fn letter(&self) -> char {
    self.letter
  }

  pub fn exponent(&self) -> Rational {
    self.exponent
  }

  /// Like variables share a letter; their exponents may differ.
  pub fn is_like(&self, other: &VariablePower) -> bool {
    self.letter == other.letter
  }

  /// The same letter at the smaller exponent, or `None` when the letters
  /// differ.
  pub fn gcf(&self, other: &VariablePower) -> Option<VariablePower> {
    if !self.is_like(other) {
      return None;
    }
    Some(Self::new(self.letter, self.exponent.min(other.exponent)))
  }

  pub(crate) fn with_exponent(&self, exponent: Rational) -> Self {
    Self::new(self.letter, exponent)
  }

  pub fn to_latex(&self) -> String {
    if self.exponent.is_zero() {
      return String::new();
    }
    if self.exponent.is_one() {
      return self.letter.to_string();
    }
    if self.exponent.is_integer() {
      return format!("{}^{{{}}}", self.letter, self.exponent.to_latex());
    }
    format!(
      "{}^{{{}}}",
      self.letter,
      wrap_in_parentheses(&self.exponent.to_latex())
    )
  }
}

impl fmt::Display for VariablePower {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.exponent.is_zero() {
      Ok(())
    } else if self.exponent.is_one() {
      write!(f, "{}", self.letter)
    } else if self.exponent.is_integer() {
      write!(f, "{}^{}", self.letter, self.exponent)
    } else {
      write!(f, "{}^({})", self.letter, self.exponent)
    }
  }
}
