use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

use tracing::trace;

use crate::AlgebraError;
use crate::algebra::monomial::Monomial;
use crate::latex::join_terms;
use crate::number::Rational;

/// A sum of monomials.
///
/// [`Polynomial::new`] keeps its terms as given; [`Polynomial::standard_form`]
/// and every binary operation return the canonical form: like terms
/// combined, zero terms removed and terms in [`standard_order`].
#[derive(Debug, Clone, Default)]
pub struct Polynomial {
  monomials: Vec<Monomial>,
}

/// Descending total degree, then graded lexicographic order on the
/// alphabetically sorted variables: the term whose first differing letter
/// comes earlier in the alphabet goes first, and on the same letter the
/// higher exponent goes first.
pub fn standard_order(a: &Monomial, b: &Monomial) -> Ordering {
  b.degree().cmp(&a.degree()).then_with(|| {
    for (va, vb) in a.variables().iter().zip(b.variables()) {
      let ord = va
        .letter()
        .cmp(&vb.letter())
        .then_with(|| vb.exponent().cmp(&va.exponent()));
      if ord != Ordering::Equal {
        return ord;
      }
    }
    b.variables().len().cmp(&a.variables().len())
  })
}

impl Polynomial {
  /// Polynomial(...) from raw terms, in the given order and uncombined.
  pub fn new<I>(monomials: I) -> Self
  where
    I: IntoIterator<Item = Monomial>,
  {
    Polynomial {
      monomials: monomials.into_iter().collect(),
    }
  }

  pub fn zero() -> Self {
    Self::default()
  }

  pub fn monomials(&self) -> &[Monomial] {
    &self.monomials
  }

  pub fn len(&self) -> usize {
    self.monomials.len()
  }

  pub fn is_empty(&self) -> bool {
    self.monomials.is_empty()
  }

  /// True when every coefficient is zero (including no terms at all).
  pub fn is_zero(&self) -> bool {
    self.monomials.iter().all(|m| m.coefficient().is_zero())
  }

  /// Highest total degree of any non-zero term, 0 for the zero polynomial.
  pub fn degree(&self) -> Rational {
    self
      .monomials
      .iter()
      .filter(|m| !m.coefficient().is_zero())
      .map(|m| m.degree())
      .max()
      .unwrap_or(Rational::ZERO)
  }

  /// First term of the standard form.
  pub fn leading_term(&self) -> Result<Option<Monomial>, AlgebraError> {
    Ok(self.standard_form()?.monomials.into_iter().next())
  }

  /// Every letter used by a non-zero term.
  pub fn letters(&self) -> BTreeSet<char> {
    self
      .monomials
      .iter()
      .filter(|m| !m.coefficient().is_zero())
      .flat_map(|m| m.variables().iter().map(|v| v.letter()))
      .collect()
  }

  /// Adds `monomial` into a like term already present, or appends it.
  pub fn add_monomial(&mut self, monomial: Monomial) -> Result<(), AlgebraError> {
    let like = self
      .monomials
      .iter_mut()
      .find(|m| m.is_like_term(&monomial));
    match like {
      Some(existing) => {
        let coefficient =
          existing.coefficient().checked_add(monomial.coefficient())?;
        *existing = existing.with_coefficient(coefficient);
      }
      None => self.monomials.push(monomial),
    }
    Ok(())
  }

  /// Combines like terms, drops zero terms and sorts by [`standard_order`].
  /// Idempotent.
  pub fn standard_form(&self) -> Result<Polynomial, AlgebraError> {
    let mut signatures: Vec<String> = Vec::new();
    let mut combined: HashMap<String, Monomial> = HashMap::new();
    for monomial in &self.monomials {
      let signature = monomial.variables_string();
      match combined.get_mut(&signature) {
        Some(existing) => {
          let coefficient =
            existing.coefficient().checked_add(monomial.coefficient())?;
          *existing = existing.with_coefficient(coefficient);
        }
        None => {
          signatures.push(signature.clone());
          combined.insert(signature, monomial.clone());
        }
      }
    }

    let mut monomials: Vec<Monomial> = signatures
      .iter()
      .filter_map(|signature| combined.remove(signature))
      .filter(|m| !m.coefficient().is_zero())
      .collect();
    monomials.sort_by(standard_order);

    trace!(
      input_terms = self.monomials.len(),
      output_terms = monomials.len(),
      "standard form"
    );
    Ok(Polynomial { monomials })
  }

  pub fn negate(&self) -> Polynomial {
    Polynomial::new(self.monomials.iter().map(Monomial::negate))
  }

  /// `self + others[0] + others[1] + ...` in standard form.
  pub fn add(&self, others: &[Polynomial]) -> Result<Polynomial, AlgebraError> {
    let mut sum = self.clone();
    for monomial in others.iter().flat_map(|p| &p.monomials) {
      sum.add_monomial(monomial.clone())?;
    }
    sum.standard_form()
  }

  /// `self - others[0] - others[1] - ...` in standard form.
  pub fn subtract(
    &self,
    others: &[Polynomial],
  ) -> Result<Polynomial, AlgebraError> {
    let mut difference = self.clone();
    for monomial in others.iter().flat_map(|p| &p.monomials) {
      difference.add_monomial(monomial.negate())?;
    }
    difference.standard_form()
  }

  /// `self * others[0] * others[1] * ...` in standard form, distributing
  /// every term over every term. Fails with [`AlgebraError::Overflow`]
  /// when a coefficient or exponent leaves the 128-bit range.
  pub fn multiply(
    &self,
    others: &[Polynomial],
  ) -> Result<Polynomial, AlgebraError> {
    others.iter().try_fold(self.standard_form()?, |acc, other| {
      let mut terms = Vec::with_capacity(acc.len() * other.len());
      for a in &acc.monomials {
        for b in &other.monomials {
          terms.push(a.multiply_by(b)?);
        }
      }
      Polynomial::new(terms).standard_form()
    })
  }

  /// Term-by-term sort key used for order-insensitive equality.
  fn sorted_terms(&self) -> Vec<Monomial> {
    let mut terms = self.monomials.clone();
    terms.sort_by(|a, b| {
      standard_order(a, b).then_with(|| a.coefficient().cmp(&b.coefficient()))
    });
    terms
  }

  pub fn to_latex(&self) -> String {
    join_terms(self.monomials.iter().map(Monomial::to_latex))
  }
}

/// Order-insensitive: two polynomials are equal when they hold the same
/// multiset of terms. Standard forms of equal values compare equal.
impl PartialEq for Polynomial {
  fn eq(&self, other: &Self) -> bool {
    self.monomials.len() == other.monomials.len()
      && self.sorted_terms() == other.sorted_terms()
  }
}

impl Eq for Polynomial {}

impl From<Monomial> for Polynomial {
  fn from(monomial: Monomial) -> Self {
    Polynomial::new([monomial])
  }
}

impl FromIterator<Monomial> for Polynomial {
  fn from_iter<I: IntoIterator<Item = Monomial>>(iter: I) -> Self {
    Polynomial::new(iter)
  }
}

impl std::ops::Neg for &Polynomial {
  type Output = Polynomial;

  fn neg(self) -> Polynomial {
    self.negate()
  }
}

impl fmt::Display for Polynomial {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}",
      join_terms(self.monomials.iter().map(|m| m.to_string()))
    )
  }
}
