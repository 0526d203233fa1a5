use super::*;

mod arithmetic {
  use super::*;

  #[test]
  fn add_unlike_denominators() {
    assert_eq!(frac(1, 2).checked_add(frac(1, 3)).unwrap(), frac(5, 6));
  }

  #[test]
  fn add_like_denominators_reduces() {
    let sum = frac(1, 4).checked_add(frac(1, 4)).unwrap();
    assert_eq!((sum.numer(), sum.denom()), (1, 2));
  }

  #[test]
  fn subtract() {
    assert_eq!(frac(1, 2).checked_sub(frac(1, 3)).unwrap(), frac(1, 6));
    assert_eq!(frac(1, 3).checked_sub(frac(1, 2)).unwrap(), frac(-1, 6));
    let difference = Rational::ONE.subtract(&[frac(1, 2), frac(1, 3)]).unwrap();
    assert_eq!(difference, frac(1, 6));
  }

  #[test]
  fn multiply() {
    assert_eq!(frac(1, 2).checked_mul(frac(1, 3)).unwrap(), frac(1, 6));
    assert_eq!(frac(2, 3).checked_mul(frac(3, 4)).unwrap(), frac(1, 2));
    assert_eq!(frac(2, 3).checked_mul(Rational::ZERO).unwrap(), Rational::ZERO);
  }

  #[test]
  fn divide() {
    assert_eq!(frac(1, 2).checked_div(frac(1, 3)).unwrap(), frac(3, 2));
  }

  #[test]
  fn divide_is_a_left_fold() {
    let quotient = Rational::ONE.divide(&[frac(2, 1), frac(3, 1)]).unwrap();
    assert_eq!(quotient, frac(1, 6));
  }

  #[test]
  fn divide_by_zero_is_an_error() {
    assert!(matches!(
      frac(1, 2).checked_div(Rational::ZERO),
      Err(AlgebraError::DivisionByZero)
    ));
    assert!(matches!(
      Rational::ONE.divide(&[frac(1, 2), Rational::ZERO]),
      Err(AlgebraError::DivisionByZero)
    ));
    assert!(Rational::ZERO.recip().is_err());
  }

  #[test]
  fn sum_and_product() {
    let values = [frac(1, 2), frac(1, 3), frac(1, 6)];
    assert_eq!(Rational::sum(&values).unwrap(), Rational::ONE);
    assert_eq!(Rational::product(&values).unwrap(), frac(1, 36));
    assert_eq!(Rational::sum(&[]).unwrap(), Rational::ZERO);
    assert_eq!(Rational::product(&[]).unwrap(), Rational::ONE);
  }

  #[test]
  fn abs_and_negation() {
    assert_eq!(frac(-3, 4).abs(), frac(3, 4));
    assert_eq!(-frac(3, 4), frac(-3, 4));
    assert_eq!(frac(-3, 4).signum(), -1);
  }
}

mod overflow {
  use super::*;

  const BIG: i128 = 100_000_000_000_000_000_000;

  #[test]
  fn sum_past_the_top_is_an_error() {
    let max = frac(i128::MAX, 1);
    assert!(matches!(
      max.checked_add(Rational::ONE),
      Err(AlgebraError::Overflow)
    ));
    assert_eq!(max.checked_add(Rational::NEG_ONE).unwrap(), frac(i128::MAX - 1, 1));
  }

  #[test]
  fn difference_past_the_bottom_is_an_error() {
    let min = frac(-i128::MAX, 1);
    assert!(matches!(
      min.checked_sub(Rational::ONE),
      Err(AlgebraError::Overflow)
    ));
  }

  #[test]
  fn product_past_the_top_is_an_error() {
    assert!(matches!(
      frac(BIG, 1).checked_mul(frac(BIG, 1)),
      Err(AlgebraError::Overflow)
    ));
    assert!(matches!(
      Rational::product(&[frac(BIG, 1), frac(BIG, 3)]),
      Err(AlgebraError::Overflow)
    ));
  }

  #[test]
  fn cancellation_keeps_large_products_in_range() {
    let product = frac(BIG, 3).checked_mul(frac(3, BIG)).unwrap();
    assert_eq!(product, Rational::ONE);
    let sum = frac(1, BIG).checked_add(frac(1, BIG)).unwrap();
    assert_eq!(sum, frac(1, BIG / 2));
  }

  #[test]
  fn minimum_integer_is_rejected() {
    assert!(matches!(
      Rational::new(i128::MIN, 1),
      Err(AlgebraError::Overflow)
    ));
    assert!(matches!(
      Rational::try_from(i128::MIN),
      Err(AlgebraError::Overflow)
    ));
    assert_eq!(frac(i128::MIN, -2), frac(1 << 126, 1));
  }

  #[test]
  fn near_equal_fractions_compare_without_overflow() {
    let a = frac(BIG, BIG + 1);
    let b = frac(BIG + 1, BIG + 2);
    assert!(a < b);
    assert!(-a > -b);
    assert_eq!(a.cmp(&a), std::cmp::Ordering::Equal);
  }

  #[test]
  fn extreme_fractions_compare() {
    let a = frac(i128::MAX - 1, i128::MAX);
    let b = frac(i128::MAX - 2, i128::MAX - 1);
    assert!(b < a);
    assert!(frac(-i128::MAX, 1) < frac(1, i128::MAX));
    assert_eq!(Rational::max_of(&[a, b]), Some(a));
  }

  #[test]
  fn gcf_of_coprime_denominators_overflows() {
    let values = [frac(1, i128::MAX), frac(1, i128::MAX - 1)];
    assert!(matches!(Rational::gcf(&values), Err(AlgebraError::Overflow)));
  }
}

mod construction {
  use super::*;

  #[test]
  fn lowest_terms_with_positive_denominator() {
    let r = frac(6, -8);
    assert_eq!((r.numer(), r.denom()), (-3, 4));
  }

  #[test]
  fn zero_denominator_is_rejected() {
    assert!(matches!(
      Rational::new(1, 0),
      Err(AlgebraError::DivisionByZero)
    ));
  }

  #[test]
  fn integers() {
    assert!(frac(4, 2).is_integer());
    assert_eq!(frac(4, 2), Rational::integer(2));
    assert!(!frac(1, 2).is_integer());
    assert_eq!(Rational::from(7), Rational::integer(7));
  }

  #[test]
  fn parse_from_str() {
    assert_eq!("0.25".parse::<Rational>().unwrap(), frac(1, 4));
    assert_eq!("-3/4".parse::<Rational>().unwrap(), frac(-3, 4));
    assert_eq!("6/8".parse::<Rational>().unwrap(), frac(3, 4));
    assert_eq!("12".parse::<Rational>().unwrap(), Rational::integer(12));
    assert!(matches!(
      "3/0".parse::<Rational>(),
      Err(AlgebraError::DivisionByZero)
    ));
    assert!(matches!(
      "abc".parse::<Rational>(),
      Err(AlgebraError::InvalidNumber(_))
    ));
  }
}

mod comparison {
  use super::*;

  #[test]
  fn cross_multiplied_ordering() {
    assert!(frac(1, 3) < frac(1, 2));
    assert!(frac(-1, 2) < frac(-1, 3));
    assert_eq!(frac(2, 4), frac(1, 2));
  }

  #[test]
  fn min_and_max() {
    let values = [frac(1, 2), frac(-3, 4), frac(5, 6)];
    assert_eq!(Rational::min_of(&values), Some(frac(-3, 4)));
    assert_eq!(Rational::max_of(&values), Some(frac(5, 6)));
    assert_eq!(Rational::min_of(&[]), None);
  }

  #[test]
  fn to_f64_is_lossy_escape_hatch() {
    assert_eq!(frac(1, 2).to_f64(), 0.5);
  }
}

mod gcf {
  use super::*;

  #[test]
  fn integers() {
    let values = [12, 18, 30].map(Rational::integer);
    assert_eq!(Rational::gcf(&values).unwrap(), Rational::integer(6));
  }

  #[test]
  fn fractions_divide_to_integers() {
    let values = [frac(1, 2), frac(3, 4)];
    let gcf = Rational::gcf(&values).unwrap();
    assert_eq!(gcf, frac(1, 4));
    for v in values {
      assert!(v.checked_div(gcf).unwrap().is_integer());
    }
  }

  #[test]
  fn zeros_are_skipped() {
    let values = [Rational::ZERO, Rational::integer(4), Rational::integer(6)];
    assert_eq!(Rational::gcf(&values).unwrap(), Rational::integer(2));
    assert_eq!(Rational::gcf(&[Rational::ZERO]).unwrap(), Rational::ZERO);
  }
}

mod rendering {
  use super::*;

  #[test]
  fn display() {
    assert_eq!(frac(-3, 4).to_string(), "-3/4");
    assert_eq!(Rational::integer(5).to_string(), "5");
  }

  #[test]
  fn latex() {
    assert_eq!(frac(3, 4).to_latex(), r"\dfrac{3}{4}");
    assert_eq!(frac(-3, 4).to_latex(), r"-\dfrac{3}{4}");
    assert_eq!(Rational::integer(-2).to_latex(), "-2");
  }

  #[test]
  fn factored() {
    assert_eq!(Rational::integer(12).factored(), "2 * 2 * 3");
    assert_eq!(frac(6, 35).factored(), "(2 * 3)/(5 * 7)");
    assert_eq!(Rational::integer(-12).factored(), "-1 * 2 * 2 * 3");
  }
}
