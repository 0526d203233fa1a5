use super::*;

/// Multiplies the factors back together.
fn expand(factors: &[Polynomial]) -> Polynomial {
  match factors.split_first() {
    Some((first, rest)) => first.multiply(rest).unwrap(),
    None => Polynomial::zero(),
  }
}

mod trinomials {
  use super::*;

  #[test]
  fn monic_with_negative_middle() {
    let factors = poly("x^2 - 9x + 14").factor().unwrap();
    assert_eq!(factors.len(), 2);
    assert!(factors.contains(&poly("x - 7")));
    assert!(factors.contains(&poly("x - 2")));
  }

  #[test]
  fn non_monic_by_grouping() {
    let factors = poly("6x^2 + 11x - 35").factor().unwrap();
    assert_eq!(factors, vec![poly("2x + 7"), poly("3x - 5")]);
  }

  #[test]
  fn common_factor_comes_first() {
    let factors = poly("2x^2 + 10x + 12").factor().unwrap();
    assert_eq!(factors, vec![poly("2"), poly("x + 3"), poly("x + 2")]);
  }

  #[test]
  fn negative_lead_extracts_minus_one() {
    let factors = poly("-x^2 + 5x - 6").factor().unwrap();
    assert_eq!(factors, vec![poly("-1"), poly("x - 3"), poly("x - 2")]);
  }

  #[test]
  fn perfect_square() {
    let factors = poly("x^2 + 2x + 1").factor().unwrap();
    assert_eq!(factors, vec![poly("x + 1"), poly("x + 1")]);
  }

  #[test]
  fn fractional_coefficients() {
    let factors = poly("1/2x^2 + 3/2x + 1").factor().unwrap();
    assert_eq!(factors, vec![poly("1/2"), poly("x + 2"), poly("x + 1")]);
  }

  #[test]
  fn unordered_input_is_standardized_first() {
    let factors = poly("14 + x^2 - 9x").factor().unwrap();
    assert!(factors.contains(&poly("x - 7")));
    assert!(factors.contains(&poly("x - 2")));
  }

  #[test]
  fn large_constant_splits_without_search() {
    let factors = poly("x^2 + 1000000000000001x + 1000000000000000")
      .factor()
      .unwrap();
    assert_eq!(factors.len(), 2);
    assert!(factors.contains(&poly("x + 1")));
    assert!(factors.contains(&poly("x + 1000000000000000")));
  }

  #[test]
  fn discriminant_overflow_is_an_error() {
    let p = Polynomial::new([
      Monomial::with_exponent(1, 'x', 2),
      Monomial::linear(frac(i128::MAX, 1), 'x'),
      Monomial::constant(1),
    ]);
    assert!(matches!(p.factor(), Err(AlgebraError::Overflow)));
  }

  #[test]
  fn other_letters() {
    let factors = poly("t^2 - t - 6").factor().unwrap();
    assert!(factors.contains(&poly("t - 3")));
    assert!(factors.contains(&poly("t + 2")));
  }
}

mod prime {
  use super::*;

  #[test]
  fn irreducible_trinomial_is_returned_as_is() {
    assert_eq!(poly("x^2 + x + 1").factor().unwrap(), vec![poly("x^2 + x + 1")]);
  }

  #[test]
  fn irreducible_keeps_common_factor() {
    assert_eq!(
      poly("2x^2 + 2x + 2").factor().unwrap(),
      vec![poly("2"), poly("x^2 + x + 1")]
    );
  }
}

mod not_applicable {
  use super::*;

  #[test]
  fn cubic() {
    assert!(poly("x^3 + x + 1").factor().unwrap().is_empty());
  }

  #[test]
  fn binomial() {
    assert!(poly("x^2 - 9").factor().unwrap().is_empty());
  }

  #[test]
  fn second_letter() {
    assert!(poly("x^2 + y + 1").factor().unwrap().is_empty());
    assert!(poly("x^2y + x + 1").factor().unwrap().is_empty());
  }

  #[test]
  fn like_terms_collapse_below_three() {
    assert!(poly("x^2 + 3x - 3x + 1").factor().unwrap().is_empty());
  }
}

mod round_trip {
  use super::*;

  #[test]
  fn product_of_factors_is_the_original() {
    for literal in [
      "x^2 - 9x + 14",
      "6x^2 + 11x - 35",
      "2x^2 + 10x + 12",
      "-x^2 + 5x - 6",
      "1/2x^2 + 3/2x + 1",
      "4x^2 - 4x + 1",
      "x^2 + x + 1",
      "-3x^2 - 6x - 3",
    ] {
      let p = poly(literal);
      let factors = p.factor().unwrap();
      assert!(!factors.is_empty(), "{} should factor", literal);
      assert_eq!(expand(&factors), p.standard_form().unwrap(), "{}", literal);
    }
  }
}
