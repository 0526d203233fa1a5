use tracing::debug;

use crate::AlgebraError;
use crate::algebra::monomial::{Monomial, monomial_gcf};
use crate::algebra::polynomial::Polynomial;
use crate::algebra::variable::VariablePower;
use crate::number::{Rational, exact_sqrt};

// ─── Factor ─────────────────────────────────────────────────────────

impl Polynomial {
  /// Factors a quadratic trinomial `a·x^2 + b·x + c` by grouping.
  ///
  /// The result starts with the extracted constant (omitted when it is 1)
  /// followed by either the two binomial factors or, for a trinomial that
  /// does not split over the integers, the reduced trinomial itself. The
  /// product of the factors equals the standard form of `self`.
  ///
  /// Any other polynomial has no factorization here and yields an empty
  /// list. Errors only on [`AlgebraError::Overflow`].
  pub fn factor(&self) -> Result<Vec<Polynomial>, AlgebraError> {
    match QuadraticTrinomial::recognize(self)? {
      Some(trinomial) => trinomial.factor(),
      None => {
        debug!(polynomial = %self, "not a quadratic trinomial");
        Ok(Vec::new())
      }
    }
  }
}

/// The `a`, `b` and `c` terms of `a·x^2 + b·x + c`.
struct QuadraticTrinomial {
  letter: char,
  a: Monomial,
  b: Monomial,
  c: Monomial,
}

impl QuadraticTrinomial {
  /// Exactly three terms in standard form: the lead term a single letter
  /// squared, then that letter to the first power, then a constant.
  fn recognize(polynomial: &Polynomial) -> Result<Option<Self>, AlgebraError> {
    let polynomial = polynomial.standard_form()?;
    let [a, b, c] = polynomial.monomials() else {
      return Ok(None);
    };
    let [lead] = a.variables() else {
      return Ok(None);
    };
    if lead.exponent() != Rational::integer(2) {
      return Ok(None);
    }
    let letter = lead.letter();
    if b.variables() != [VariablePower::linear(letter)] || !c.is_constant() {
      return Ok(None);
    }
    Ok(Some(QuadraticTrinomial {
      letter,
      a: a.clone(),
      b: b.clone(),
      c: c.clone(),
    }))
  }

  fn factor(&self) -> Result<Vec<Polynomial>, AlgebraError> {
    let coefficients =
      [self.a.coefficient(), self.b.coefficient(), self.c.coefficient()];

    // Pull out the coefficient gcf, negated when the lead is negative, so
    // the remaining coefficients are integers with a positive lead.
    let mut gcf = Rational::gcf(&coefficients)?;
    if self.a.coefficient().is_negative() {
      gcf = -gcf;
    }
    let inverse = gcf.recip()?;
    let a = self.a.scale(inverse)?;
    let b = self.b.scale(inverse)?;
    let c = self.c.scale(inverse)?;

    let mut factors = Vec::new();
    if !gcf.is_one() {
      factors.push(Polynomial::from(Monomial::constant(gcf)));
    }

    let Some((f1, f2)) = split_middle_term(
      a.coefficient().numer(),
      b.coefficient().numer(),
      c.coefficient().numer(),
    )?
    else {
      debug!(%gcf, "trinomial is prime");
      factors.push(Polynomial::new([a, b, c]));
      return Ok(factors);
    };
    debug!(%gcf, f1, f2, "split middle term");

    // a·x^2 + f1·x + f2·x + c = g1·(p·x + q) + g2·(p·x + q)
    let first = [a, Monomial::linear(Rational::try_from(f1)?, self.letter)];
    let second = [Monomial::linear(Rational::try_from(f2)?, self.letter), c];
    let g1 = leading_sign_gcf(&first)?;
    let g2 = leading_sign_gcf(&second)?;

    let binomial = Polynomial::new(first).divide_by_monomial(&g1)?;
    factors.push(Polynomial::new([g1, g2]).standard_form()?);
    factors.push(binomial);
    Ok(factors)
  }
}

/// Two integers `f1`, `f2` with product `a·c` and sum `b`, the one of
/// smaller magnitude first (the positive one on a tie). `None` when the
/// trinomial is prime over the integers.
///
/// The pair are the roots of `t^2 - b·t + a·c`, so they exist exactly when
/// the discriminant `b^2 - 4ac` is a perfect square.
fn split_middle_term(
  a: i128,
  b: i128,
  c: i128,
) -> Result<Option<(i128, i128)>, AlgebraError> {
  let square = b.checked_mul(b).ok_or(AlgebraError::Overflow)?;
  let four_ac = a
    .checked_mul(c)
    .and_then(|ac| ac.checked_mul(4))
    .ok_or(AlgebraError::Overflow)?;
  let discriminant = square.checked_sub(four_ac).ok_or(AlgebraError::Overflow)?;
  if discriminant < 0 {
    return Ok(None);
  }
  let Some(root) = exact_sqrt(discriminant.unsigned_abs()) else {
    return Ok(None);
  };
  // root^2 fits an i128 so root < 2^64, and root^2 = b^2 - 4ac keeps b and
  // root of equal parity, so both halves are exact.
  let root = i128::try_from(root).map_err(|_| AlgebraError::Overflow)?;
  let (f1, f2) = ((b - root) / 2, (b + root) / 2);
  let key = |f: i128| (f.unsigned_abs(), f < 0);
  Ok(Some(if key(f2) < key(f1) { (f2, f1) } else { (f1, f2) }))
}

/// Gcf of a group, carrying the sign of its first term so the binomial
/// left after dividing it out has a positive lead.
fn leading_sign_gcf(group: &[Monomial]) -> Result<Monomial, AlgebraError> {
  let gcf = monomial_gcf(group)?;
  Ok(match group.first() {
    Some(first) if first.coefficient().is_negative() => gcf.negate(),
    _ => gcf,
  })
}
