use std::collections::BTreeMap;

// ─── gcd / lcm ──────────────────────────────────────────────────────

/// Greatest common factor of two integers, as a magnitude.
/// A zero operand makes the result 0.
///
/// The result is unsigned because `gcd(i128::MIN, i128::MIN)` is `2^127`.
pub fn gcd(a: i128, b: i128) -> u128 {
  gcd_unsigned(a.unsigned_abs(), b.unsigned_abs())
}

pub(crate) fn gcd_unsigned(a: u128, b: u128) -> u128 {
  if a == 0 || b == 0 {
    return 0;
  }
  let (mut a, mut b) = (a, b);
  while b != 0 {
    let t = b;
    b = a % b;
    a = t;
  }
  a
}

/// Least common multiple of two integers, as a magnitude. A zero operand
/// makes the result 0; `None` when the result does not fit in a `u128`.
pub fn lcm(a: i128, b: i128) -> Option<u128> {
  lcm_unsigned(a.unsigned_abs(), b.unsigned_abs())
}

fn lcm_unsigned(a: u128, b: u128) -> Option<u128> {
  if a == 0 || b == 0 {
    return Some(0);
  }
  (a / gcd_unsigned(a, b)).checked_mul(b)
}

/// Left fold of [`gcd`] over all values. Empty input yields 0.
pub fn gcd_all(values: &[i128]) -> u128 {
  match values.split_first() {
    Some((first, rest)) => rest
      .iter()
      .fold(first.unsigned_abs(), |acc, &v| gcd_unsigned(acc, v.unsigned_abs())),
    None => 0,
  }
}

/// Left fold of [`lcm`] over all values. Empty input yields 0.
pub fn lcm_all(values: &[i128]) -> Option<u128> {
  match values.split_first() {
    Some((first, rest)) => rest.iter().try_fold(first.unsigned_abs(), |acc, &v| {
      lcm_unsigned(acc, v.unsigned_abs())
    }),
    None => Some(0),
  }
}

/// Integer square root of a perfect square, `None` otherwise.
pub fn exact_sqrt(n: u128) -> Option<u128> {
  if n < 2 {
    return Some(n);
  }
  // Newton's iteration from a power of two above sqrt(n) converges to
  // floor(sqrt(n)).
  let bits = 128 - n.leading_zeros();
  let mut x: u128 = 1 << bits.div_ceil(2);
  let mut y = (x + n / x) / 2;
  while y < x {
    x = y;
    y = (x + n / x) / 2;
  }
  (x.checked_mul(x) == Some(n)).then_some(x)
}

// ─── Prime factorization ────────────────────────────────────────────

/// Prime factors of `n` with their multiplicities.
///
/// `0` maps to `{0: 1}` and `1` to `{1: 1}`. A negative `n` records `-1`
/// once and then factors `|n|`, so `-1` itself yields `{-1: 1, 1: 1}`.
/// Trial division: the cost grows with the square root of the second
/// largest prime factor.
pub fn prime_factorization(n: i128) -> BTreeMap<i128, u32> {
  let mut factors = BTreeMap::new();
  if n < 0 {
    factors.insert(-1, 1);
  }
  let mut rest = n.unsigned_abs();

  if rest == 0 {
    factors.insert(0, 1);
    return factors;
  }
  if rest == 1 {
    factors.insert(1, 1);
    return factors;
  }

  while rest % 2 == 0 {
    *factors.entry(2).or_insert(0) += 1;
    rest /= 2;
  }

  // Every odd prime factor of a magnitude up to 2^127 is below 2^127, so
  // the casts below are exact.
  let mut p: u128 = 3;
  while p <= rest / p {
    while rest % p == 0 {
      *factors.entry(p as i128).or_insert(0) += 1;
      rest /= p;
    }
    p += 2;
  }
  if rest > 1 {
    *factors.entry(rest as i128).or_insert(0) += 1;
  }

  factors
}

/// All unordered factor pairs `(d, |n| / d)` with `1 <= d <= sqrt(|n|)`,
/// in ascending order of `d`. Zero has no factor pairs.
///
/// Enumerates every candidate `d`, so the cost is `sqrt(|n|)` divisions.
pub fn factors_of(n: i128) -> Vec<(u128, u128)> {
  let n = n.unsigned_abs();
  let mut pairs = Vec::new();
  let mut d: u128 = 1;
  while n != 0 && d <= n / d {
    if n % d == 0 {
      pairs.push((d, n / d));
    }
    d += 1;
  }
  pairs
}
