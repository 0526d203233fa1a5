use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::AlgebraError;
use crate::number::factoring::{gcd, gcd_all, gcd_unsigned, lcm_all, prime_factorization};

/// An exact fraction kept in lowest terms with a positive denominator.
///
/// Every constructor and arithmetic operation reduces its result, so the
/// derived `PartialEq`/`Hash` compare values, not representations.
/// Numerator and denominator never hold `i128::MIN`, which keeps negation
/// and `abs` total. Arithmetic is checked and fails with
/// [`AlgebraError::Overflow`] instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
  numer: i128,
  denom: i128,
}

fn overflow<T>(value: Option<T>) -> Result<T, AlgebraError> {
  value.ok_or(AlgebraError::Overflow)
}

impl Rational {
  pub const ZERO: Rational = Rational { numer: 0, denom: 1 };
  pub const ONE: Rational = Rational { numer: 1, denom: 1 };
  pub const NEG_ONE: Rational = Rational { numer: -1, denom: 1 };

  /// Rational(n, d). Fails with [`AlgebraError::DivisionByZero`] when
  /// `d == 0`, and with [`AlgebraError::Overflow`] when the reduced value
  /// still needs `i128::MIN`.
  pub fn new(numer: i128, denom: i128) -> Result<Self, AlgebraError> {
    if denom == 0 {
      return Err(AlgebraError::DivisionByZero);
    }
    Self::from_magnitudes(
      (numer < 0) != (denom < 0),
      numer.unsigned_abs(),
      denom.unsigned_abs(),
    )
  }

  /// Integer(n): the special case with denominator 1.
  pub const fn integer(n: i64) -> Self {
    Rational {
      numer: n as i128,
      denom: 1,
    }
  }

  /// Lowest-terms normalisation of `±numer/denom`. Callers guarantee
  /// `denom != 0`.
  fn from_magnitudes(
    negative: bool,
    numer: u128,
    denom: u128,
  ) -> Result<Self, AlgebraError> {
    if numer == 0 {
      return Ok(Self::ZERO);
    }
    let g = gcd_unsigned(numer, denom);
    let numer = overflow(i128::try_from(numer / g).ok())?;
    let denom = overflow(i128::try_from(denom / g).ok())?;
    Ok(Rational {
      numer: if negative { -numer } else { numer },
      denom,
    })
  }

  pub fn numer(&self) -> i128 {
    self.numer
  }

  pub fn denom(&self) -> i128 {
    self.denom
  }

  pub fn is_integer(&self) -> bool {
    self.denom == 1
  }

  pub fn is_zero(&self) -> bool {
    self.numer == 0
  }

  pub fn is_one(&self) -> bool {
    self.numer == 1 && self.denom == 1
  }

  pub fn is_negative(&self) -> bool {
    self.numer < 0
  }

  /// -1, 0 or 1.
  pub fn signum(&self) -> i128 {
    self.numer.signum()
  }

  pub fn abs(self) -> Self {
    Rational {
      numer: self.numer.abs(),
      denom: self.denom,
    }
  }

  /// Multiplicative inverse.
  pub fn recip(self) -> Result<Self, AlgebraError> {
    Self::new(self.denom, self.numer)
  }

  /// Exact sum, reducing by the denominators' gcd before multiplying.
  pub fn checked_add(self, other: Rational) -> Result<Self, AlgebraError> {
    if self.denom == other.denom {
      let numer = overflow(self.numer.checked_add(other.numer))?;
      return Self::new(numer, self.denom);
    }
    // Both denominators are positive and below 2^127, so g fits.
    let g = gcd(self.denom, other.denom) as i128;
    let numer = overflow(
      self
        .numer
        .checked_mul(other.denom / g)
        .zip(other.numer.checked_mul(self.denom / g))
        .and_then(|(a, b)| a.checked_add(b)),
    )?;
    let g2 = gcd(numer, g).max(1) as i128;
    let denom = overflow((self.denom / g).checked_mul(other.denom / g2))?;
    Self::new(numer / g2, denom)
  }

  pub fn checked_sub(self, other: Rational) -> Result<Self, AlgebraError> {
    self.checked_add(-other)
  }

  /// Exact product, cross-cancelling first to keep intermediates small.
  pub fn checked_mul(self, other: Rational) -> Result<Self, AlgebraError> {
    if self.is_zero() || other.is_zero() {
      return Ok(Self::ZERO);
    }
    let g1 = gcd(self.numer, other.denom) as i128;
    let g2 = gcd(other.numer, self.denom) as i128;
    let numer = overflow((self.numer / g1).checked_mul(other.numer / g2))?;
    let denom = overflow((self.denom / g2).checked_mul(other.denom / g1))?;
    Self::new(numer, denom)
  }

  /// Exact division.
  pub fn checked_div(self, other: Rational) -> Result<Self, AlgebraError> {
    self.checked_mul(other.recip()?)
  }

  /// Sum of all values, 0 for an empty slice.
  pub fn sum(values: &[Rational]) -> Result<Self, AlgebraError> {
    values
      .iter()
      .try_fold(Self::ZERO, |acc, &value| acc.checked_add(value))
  }

  /// Product of all values, 1 for an empty slice.
  pub fn product(values: &[Rational]) -> Result<Self, AlgebraError> {
    values
      .iter()
      .try_fold(Self::ONE, |acc, &value| acc.checked_mul(value))
  }

  /// Subtracts every value in `others` from `self`, left to right.
  pub fn subtract(self, others: &[Rational]) -> Result<Self, AlgebraError> {
    others.iter().try_fold(self, |acc, &other| acc.checked_sub(other))
  }

  /// Divides `self` by every value in `others`, left to right.
  pub fn divide(self, others: &[Rational]) -> Result<Self, AlgebraError> {
    others.iter().try_fold(self, |acc, &other| acc.checked_div(other))
  }

  /// Lossy conversion, for display and geometry only.
  pub fn to_f64(&self) -> f64 {
    self.numer as f64 / self.denom as f64
  }

  /// Smallest of the given values, or `None` for an empty slice.
  pub fn min_of(values: &[Rational]) -> Option<Rational> {
    values.iter().copied().min()
  }

  /// Largest of the given values, or `None` for an empty slice.
  pub fn max_of(values: &[Rational]) -> Option<Rational> {
    values.iter().copied().max()
  }

  /// Greatest common factor of a set of rationals: the gcd of the
  /// non-zero numerators over the lcm of the denominators. Dividing each
  /// input by the result leaves an integer. All-zero input yields 0.
  pub fn gcf(values: &[Rational]) -> Result<Rational, AlgebraError> {
    let numers: Vec<i128> = values
      .iter()
      .filter(|v| !v.is_zero())
      .map(|v| v.numer)
      .collect();
    if numers.is_empty() {
      return Ok(Self::ZERO);
    }
    let denoms: Vec<i128> = values.iter().map(|v| v.denom).collect();
    let denom = overflow(lcm_all(&denoms))?;
    Self::from_magnitudes(false, gcd_all(&numers), denom)
  }

  /// Prime factorization of numerator and denominator, e.g. `(2 * 3)/(5)`.
  pub fn factored(&self) -> String {
    let numer = factor_product(self.numer);
    if self.is_integer() {
      numer
    } else {
      format!("({})/({})", numer, factor_product(self.denom))
    }
  }

  pub fn to_latex(&self) -> String {
    if self.is_integer() {
      return self.numer.to_string();
    }
    if self.is_negative() {
      return format!(r"-\dfrac{{{}}}{{{}}}", self.numer.abs(), self.denom);
    }
    format!(r"\dfrac{{{}}}{{{}}}", self.numer, self.denom)
  }
}

fn factor_product(n: i128) -> String {
  prime_factorization(n)
    .into_iter()
    .flat_map(|(p, count)| std::iter::repeat_n(p.to_string(), count as usize))
    .collect::<Vec<_>>()
    .join(" * ")
}

impl std::ops::Neg for Rational {
  type Output = Self;

  fn neg(self) -> Self {
    Rational {
      numer: -self.numer,
      denom: self.denom,
    }
  }
}

// ─── Comparison ─────────────────────────────────────────────────────

impl Ord for Rational {
  /// Sign first, then the magnitudes through their continued fraction
  /// expansions, so no cross product is ever formed.
  fn cmp(&self, other: &Self) -> Ordering {
    let by_sign = self.signum().cmp(&other.signum());
    if by_sign != Ordering::Equal || self.is_zero() {
      return by_sign;
    }
    let magnitudes = compare_fractions(
      self.numer.unsigned_abs(),
      self.denom.unsigned_abs(),
      other.numer.unsigned_abs(),
      other.denom.unsigned_abs(),
    );
    if self.is_negative() {
      magnitudes.reverse()
    } else {
      magnitudes
    }
  }
}

impl PartialOrd for Rational {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

/// Compares `a/b` with `c/d` for positive `b` and `d`.
fn compare_fractions(a: u128, b: u128, c: u128, d: u128) -> Ordering {
  let (mut a, mut b, mut c, mut d) = (a, b, c, d);
  loop {
    let by_whole = (a / b).cmp(&(c / d));
    if by_whole != Ordering::Equal {
      return by_whole;
    }
    let (ra, rc) = (a % b, c % d);
    match (ra, rc) {
      (0, 0) => return Ordering::Equal,
      (0, _) => return Ordering::Less,
      (_, 0) => return Ordering::Greater,
      // ra/b against rc/d orders the same way as d/rc against b/ra.
      _ => (a, b, c, d) = (d, rc, b, ra),
    }
  }
}

// ─── Conversions ────────────────────────────────────────────────────

impl From<i64> for Rational {
  fn from(n: i64) -> Self {
    Self::integer(n)
  }
}

impl From<i32> for Rational {
  fn from(n: i32) -> Self {
    Self::integer(n as i64)
  }
}

impl TryFrom<i128> for Rational {
  type Error = AlgebraError;

  fn try_from(n: i128) -> Result<Self, Self::Error> {
    Self::new(n, 1)
  }
}

impl fmt::Display for Rational {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.is_integer() {
      write!(f, "{}", self.numer)
    } else {
      write!(f, "{}/{}", self.numer, self.denom)
    }
  }
}

impl FromStr for Rational {
  type Err = AlgebraError;

  /// Accepts `3`, `-3/4` and terminating decimals such as `0.25`.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    match s.split_once('/') {
      Some((numer, denom)) => {
        parse_decimal(numer.trim())?.checked_div(parse_decimal(denom.trim())?)
      }
      None => parse_decimal(s),
    }
  }
}

fn parse_decimal(s: &str) -> Result<Rational, AlgebraError> {
  let invalid = || AlgebraError::InvalidNumber(s.to_string());
  let (negative, digits) = match s.strip_prefix('-') {
    Some(rest) => (true, rest),
    None => (false, s.strip_prefix('+').unwrap_or(s)),
  };
  let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
  if (whole.is_empty() && fraction.is_empty())
    || !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit())
  {
    return Err(invalid());
  }

  let scale = 10i128
    .checked_pow(fraction.len() as u32)
    .ok_or_else(invalid)?;
  let whole: i128 = if whole.is_empty() {
    0
  } else {
    whole.parse().map_err(|_| invalid())?
  };
  let fraction: i128 = if fraction.is_empty() {
    0
  } else {
    fraction.parse().map_err(|_| invalid())?
  };
  let numer = whole
    .checked_mul(scale)
    .and_then(|w| w.checked_add(fraction))
    .ok_or_else(invalid)?;

  Rational::new(if negative { -numer } else { numer }, scale)
}
